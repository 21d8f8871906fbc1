/// Render layer: tag a parsed [`DataTable`](crate::data::model::DataTable)
/// with presentation attributes. Alignment and column projection come from
/// a [`TableStyle`](style::TableStyle); stripe classes alternate over the
/// data rows. The output is structural, not markup.

pub mod style;
pub mod table;

/// Markup layer: serialize a [`RenderedTable`](crate::render::table::RenderedTable)
/// as an HTML fragment and wrap page bodies in shared chrome. This is the
/// only module that produces markup text.

pub mod page;
pub mod table;

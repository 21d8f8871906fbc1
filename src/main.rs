use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use datasheet::site::{build_site, SiteConfig};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = String::from("site.json");
    let mut output_override: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" => {
                if i + 1 < args.len() {
                    output_override = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    bail!("'-o' option requires an output directory");
                }
            }
            "-h" | "--help" => {
                println!("Usage: datasheet [-o output_dir] [config.json]");
                return Ok(());
            }
            other => {
                config_path = other.to_string();
            }
        }
        i += 1;
    }

    let mut config = SiteConfig::load(Path::new(&config_path))
        .with_context(|| format!("reading site configuration {config_path}"))?;
    if let Some(dir) = output_override {
        config.output_dir = dir;
    }

    let summary = build_site(&config).context("building site")?;
    println!(
        "Built {} page(s) into {}",
        summary.pages,
        config.output_dir.display()
    );
    if summary.degraded > 0 {
        println!("{} dataset table(s) degraded, see log", summary.degraded);
    }
    Ok(())
}

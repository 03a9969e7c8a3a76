use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;
use ygorate_engine::Catalog;

pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let catalog = Catalog::load(data_dir)?;
    let counts = catalog.pack_counts();

    if format == OutputFormat::Json {
        let rows: Vec<_> = counts
            .iter()
            .map(|(pack, count)| json!({ "pack": pack, "count": count }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if counts.is_empty() {
        println!("No packs found under {}", data_dir.display());
        return Ok(());
    }

    for (pack, count) in &counts {
        let cards = if *count == 1 { "card" } else { "cards" };
        println!("{}  {} {}", pack.bold(), count.cyan(), cards);
    }
    println!();
    println!("{} cards in {} packs", catalog.len(), counts.len());

    Ok(())
}

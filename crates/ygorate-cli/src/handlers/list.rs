use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use ygorate_engine::{Catalog, ViewState};

pub fn handle(data_dir: &Path, pack: Option<String>, format: OutputFormat) -> Result<()> {
    let catalog = Catalog::load(data_dir)?;

    let mut view = ViewState::new();
    if let Some(pack) = pack {
        view.set_pack_filter(pack);
    }
    let pool = view.filtered(&catalog);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&pool)?);
        return Ok(());
    }

    if pool.is_empty() {
        println!("No cards in {}", view.selected_pack());
        return Ok(());
    }

    for item in &pool {
        let id = match item.id {
            Some(id) => format!("#{}", id),
            None => "#?".to_string(),
        };
        println!(
            "{:>10}  {}  {}  {}",
            id.yellow(),
            format!("{:>4.1}", item.rating).cyan(),
            item.name.bold(),
            item.pack.dimmed()
        );
    }
    println!();
    println!("{} cards", pool.len());

    Ok(())
}

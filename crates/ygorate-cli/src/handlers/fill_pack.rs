use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use ygorate_client::CardApi;
use ygorate_runtime::{fill_pack, FillPackOptions};

pub fn handle(data_dir: &Path, api: &CardApi, options: FillPackOptions) -> Result<()> {
    let dry_run = options.dry_run;
    let runtime = tokio::runtime::Runtime::new()?;
    let report = runtime.block_on(fill_pack(data_dir, api, &options))?;

    println!(
        "{}: {} local, {} in cardset, {} added",
        report.pack.bold(),
        report.existing,
        report.fetched,
        report.added.to_string().green()
    );

    if report.wrote {
        println!("Wrote {}", report.path.display());
    } else if dry_run {
        println!("{} nothing written", "Dry run:".yellow());
    } else {
        println!("Already up to date");
    }

    Ok(())
}

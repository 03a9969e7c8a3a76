use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use ygorate_client::CardApi;
use ygorate_runtime::{update_ids, UpdateEvent, UpdateIdsOptions};

pub fn handle(data_dir: &Path, api: &CardApi, options: UpdateIdsOptions) -> Result<()> {
    let dry_run = options.dry_run;
    let runtime = tokio::runtime::Runtime::new()?;

    let report = runtime.block_on(update_ids(data_dir, api, &options, &mut |event| {
        match event {
            UpdateEvent::Resolved { name, id, slug } => {
                println!("{} {} -> {} ({})", "[ok]".green(), name, id, slug);
            }
            UpdateEvent::Skipped { name, reason } => {
                println!("{} {}: {}", "[skip]".yellow(), name, reason);
            }
            UpdateEvent::FileFailed { slug, reason } => {
                eprintln!("{} {}: {}", "[error]".red(), slug, reason);
            }
            UpdateEvent::FileUpdated { slug, changed } => {
                if dry_run {
                    println!("{} would update {} ({} cards)", "[dry]".yellow(), slug, changed);
                } else {
                    println!("Updated {} ({} cards)", slug, changed);
                }
            }
        }
    }))?;

    println!();
    println!(
        "{} files scanned, {} ids resolved{}",
        report.files_scanned,
        report.updated,
        if dry_run { " (dry run)" } else { "" }
    );

    Ok(())
}

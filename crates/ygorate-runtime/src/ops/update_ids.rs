use crate::ops::write_pack_file;
use crate::Result;
use std::path::Path;
use std::time::Duration;
use ygorate_client::{CardApi, Error as ClientError};
use ygorate_engine::{discover_pack_files, load_pack_file};
use ygorate_types::is_placeholder_id;

/// Gentle pacing between successive remote calls.
const CALL_PACING: Duration = Duration::from_millis(150);

pub struct UpdateIdsOptions {
    pub dry_run: bool,
    /// Re-resolve every card regardless of its current id.
    pub force_all: bool,
    /// Ids with fewer digits than this are treated as placeholders.
    pub min_digits: u32,
    /// Restrict the scan to one pack folder.
    pub only_pack: Option<String>,
}

#[derive(Debug)]
pub enum UpdateEvent {
    Resolved {
        name: String,
        id: u64,
        slug: String,
    },
    Skipped {
        name: String,
        reason: String,
    },
    FileFailed {
        slug: String,
        reason: String,
    },
    FileUpdated {
        slug: String,
        changed: usize,
    },
}

#[derive(Debug, Default)]
pub struct UpdateIdsReport {
    pub files_scanned: usize,
    pub updated: usize,
}

/// Resolve missing or placeholder passcodes by card name across all pack
/// files, exact-name lookup first, fuzzy fallback second.
///
/// Per-card and per-file failures are reported through `events` and never
/// abort the scan; files are only rewritten when something changed and the
/// run is not a dry run.
pub async fn update_ids(
    data_root: &Path,
    api: &CardApi,
    options: &UpdateIdsOptions,
    events: &mut dyn FnMut(UpdateEvent),
) -> Result<UpdateIdsReport> {
    let mut report = UpdateIdsReport::default();

    for (slug, path) in discover_pack_files(data_root)? {
        if let Some(only) = &options.only_pack {
            let top = slug.split('/').next().unwrap_or(&slug);
            if top != only {
                continue;
            }
        }
        report.files_scanned += 1;

        let mut file = match load_pack_file(&path) {
            Ok(file) => file,
            Err(e) => {
                events(UpdateEvent::FileFailed {
                    slug,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let mut changed = 0;
        for card in &mut file.cards {
            if !options.force_all && !is_placeholder_id(card.id, options.min_digits) {
                continue;
            }

            match resolve_id(api, &card.name).await {
                Ok(id) => {
                    card.id = Some(id);
                    changed += 1;
                    events(UpdateEvent::Resolved {
                        name: card.name.clone(),
                        id,
                        slug: slug.clone(),
                    });
                }
                Err(e) => {
                    events(UpdateEvent::Skipped {
                        name: card.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
            tokio::time::sleep(CALL_PACING).await;
        }

        if changed > 0 {
            if !options.dry_run {
                write_pack_file(&path, &file)?;
            }
            report.updated += changed;
            events(UpdateEvent::FileUpdated { slug, changed });
        }
    }

    Ok(report)
}

/// Exact name first, fuzzy fallback; the first result wins either way.
async fn resolve_id(api: &CardApi, name: &str) -> std::result::Result<u64, ClientError> {
    match api.fetch_by_name(name).await {
        Ok(card) => Ok(card.id),
        Err(_) => {
            let cards = api.fetch_by_fuzzy_name(name).await?;
            cards.first().map(|c| c.id).ok_or(ClientError::NotFound)
        }
    }
}

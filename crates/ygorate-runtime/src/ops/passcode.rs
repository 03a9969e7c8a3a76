use crate::Result;
use std::path::Path;
use ygorate_client::CardApi;
use ygorate_engine::{discover_pack_files, load_pack_file};

pub struct PasscodeOptions {
    /// Accept partial name matches.
    pub fuzzy: bool,
    /// Skip the remote lookup and search local pack files only.
    pub local_only: bool,
}

/// Look up a card's passcode by name, remote database first, local pack
/// files as the fallback. Remote failures are not fatal; the local scan
/// still runs. Returns `None` when neither side knows the name.
pub async fn lookup_passcode(
    data_root: &Path,
    api: &CardApi,
    query: &str,
    options: &PasscodeOptions,
) -> Result<Option<u64>> {
    if !options.local_only {
        if let Some(id) = lookup_remote(api, query, options.fuzzy).await {
            return Ok(Some(id));
        }
    }
    lookup_local(data_root, query, options.fuzzy)
}

async fn lookup_remote(api: &CardApi, query: &str, fuzzy: bool) -> Option<u64> {
    if fuzzy {
        let cards = api.fetch_by_fuzzy_name(query).await.ok()?;
        // Prefer the exact name when the fuzzy search happens to include it.
        let lowered = query.to_lowercase();
        cards
            .iter()
            .find(|c| c.name.to_lowercase() == lowered)
            .or_else(|| cards.first())
            .map(|c| c.id)
    } else {
        api.fetch_by_name(query).await.ok().map(|c| c.id)
    }
}

fn lookup_local(data_root: &Path, query: &str, fuzzy: bool) -> Result<Option<u64>> {
    let lowered = query.to_lowercase();
    let mut partial = None;

    for (_slug, path) in discover_pack_files(data_root)? {
        // Tolerate unreadable files; this is a best-effort scan.
        let Ok(file) = load_pack_file(&path) else {
            continue;
        };
        for card in &file.cards {
            let Some(id) = card.id else { continue };
            let name = card.name.to_lowercase();
            if name == lowered {
                return Ok(Some(id));
            }
            if fuzzy && partial.is_none() && name.contains(&lowered) {
                partial = Some(id);
            }
        }
    }

    Ok(partial)
}

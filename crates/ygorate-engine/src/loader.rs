use crate::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use ygorate_types::PackFile;

/// A pack file together with its storage identity.
#[derive(Debug, Clone)]
pub struct LoadedPack {
    /// Directory of the pack relative to the data root, '/'-separated.
    pub slug: String,
    pub path: PathBuf,
    pub file: PackFile,
}

/// Discover and parse every `<data_root>/**/cards.json`.
///
/// A malformed file (bad JSON, missing `pack`, non-array `cards`) fails the
/// whole load; there is no partial-success mode. A missing data root simply
/// yields no packs. Packs are returned in sorted slug order so the merged
/// catalog is deterministic across platforms.
pub fn load_packs(data_root: &Path) -> Result<Vec<LoadedPack>> {
    let mut packs = Vec::new();
    for (slug, path) in discover_pack_files(data_root)? {
        let file = load_pack_file(&path)?;
        packs.push(LoadedPack { slug, path, file });
    }
    Ok(packs)
}

/// Enumerate `(slug, path)` for every pack file under the data root, in
/// sorted slug order. Parsing is left to the caller so batch tools can keep
/// going past one bad file where the viewer would abort.
pub fn discover_pack_files(data_root: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !data_root.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(data_root).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_default();
            match e.into_io_error() {
                Some(io) => Error::Io(io),
                None => Error::PackFile {
                    path,
                    message: "unreadable directory entry".to_string(),
                },
            }
        })?;
        if !entry.file_type().is_file() || entry.file_name() != "cards.json" {
            continue;
        }

        let path = entry.path().to_path_buf();
        let slug = pack_slug(data_root, &path);
        files.push((slug, path));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Parse a single pack file, rejecting anything malformed.
pub fn load_pack_file(path: &Path) -> Result<PackFile> {
    let content = std::fs::read_to_string(path)?;
    let file: PackFile = serde_json::from_str(&content).map_err(|e| Error::PackFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if file.pack.trim().is_empty() {
        return Err(Error::PackFile {
            path: path.to_path_buf(),
            message: "missing pack display name".to_string(),
        });
    }
    Ok(file)
}

fn pack_slug(data_root: &Path, cards_file: &Path) -> String {
    cards_file
        .parent()
        .and_then(|dir| dir.strip_prefix(data_root).ok())
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_default()
}

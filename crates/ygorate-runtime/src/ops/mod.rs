pub mod fill_pack;
pub mod passcode;
pub mod update_ids;

use crate::Result;
use std::path::Path;
use ygorate_types::PackFile;

/// Rewrite a pack file the way the authoring tools expect it: pretty-printed
/// with a trailing newline.
pub(crate) fn write_pack_file(path: &Path, file: &PackFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(file)
        .map_err(|e| crate::Error::InvalidOperation(e.to_string()))?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}

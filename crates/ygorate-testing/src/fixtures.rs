//! Temp-directory data root builder for tests.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use ygorate_types::{CardRecord, PackFile};

/// A throwaway data root laid out the way the viewer expects:
/// `<root>/<slug>/cards.json` pack files and `<root>/reviews/<slug>/<file>`
/// review files. The directory is deleted when the fixture is dropped.
pub struct DataRoot {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for DataRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl DataRoot {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let root = temp_dir.path().join("data");
        fs::create_dir_all(&root).expect("failed to create data root");

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write a pack file from structured records.
    pub fn write_pack(&self, slug: &str, pack: &str, cards: Vec<CardRecord>) -> Result<PathBuf> {
        let file = PackFile {
            pack: pack.to_string(),
            cards,
        };
        let mut json = serde_json::to_string_pretty(&file)?;
        json.push('\n');
        self.write_pack_json(slug, &json)
    }

    /// Write a pack file from raw JSON, valid or not.
    pub fn write_pack_json(&self, slug: &str, json: &str) -> Result<PathBuf> {
        let dir = self.root.join(slug);
        fs::create_dir_all(&dir)?;
        let path = dir.join("cards.json");
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Write an external review file under `reviews/<slug>/`.
    pub fn write_review(&self, slug: &str, file: &str, text: &str) -> Result<PathBuf> {
        let dir = self.root.join("reviews").join(slug);
        fs::create_dir_all(&dir)?;
        let path = dir.join(file);
        fs::write(&path, text)?;
        Ok(path)
    }

    pub fn read_pack(&self, slug: &str) -> Result<PackFile> {
        let content = fs::read_to_string(self.root.join(slug).join("cards.json"))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// A card record with just the required fields filled in.
pub fn card(name: &str, id: Option<u64>, rating: f32) -> CardRecord {
    CardRecord {
        id,
        name: name.to_string(),
        rating,
        review_text: None,
        review: None,
        review_file: None,
        pack: None,
    }
}

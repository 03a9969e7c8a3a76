use crate::util::normalize_pack;
use serde::{Deserialize, Serialize};

/// One pack source file (`<data_root>/<slug>/cards.json`).
///
/// Authored offline, read-only for the viewer. The maintenance ops are the
/// only writers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackFile {
    pub pack: String,
    pub cards: Vec<CardRecord>,
}

/// A card as stored in a pack file.
///
/// `name` is the only required identifying field. `id` is the YGOPRODeck
/// passcode and may be absent or a short placeholder until `update-ids`
/// fills it in. Field names follow the on-disk JSON (`reviewText`,
/// `reviewFile`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack: Option<String>,
}

/// A merged catalog entry: a [`CardRecord`] with its pack label resolved
/// (record override wins over the pack-file default) and the originating
/// pack slug attached so external review files can be located.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_file: Option<String>,
    pub pack: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_slug: Option<String>,
}

impl CardListItem {
    /// Resolve a record against its owning pack file.
    pub fn from_record(record: &CardRecord, pack_default: &str, pack_slug: &str) -> Self {
        let pack = match record.pack.as_deref() {
            Some(p) if !p.trim().is_empty() => p.to_string(),
            _ => normalize_pack(Some(pack_default)),
        };
        Self {
            id: record.id,
            name: record.name.clone(),
            rating: record.rating,
            review_text: record.review_text.clone(),
            review: record.review.clone(),
            review_file: record.review_file.clone(),
            pack,
            pack_slug: Some(pack_slug.to_string()),
        }
    }
}

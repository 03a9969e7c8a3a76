use std::path::PathBuf;
use ygorate_types::CardListItem;

/// Source of external review text files.
///
/// `read` returns None on any failure; missing review files are never an
/// error, the display just falls back to empty text.
pub trait ReviewStore {
    fn read(&self, pack_slug: Option<&str>, file: &str) -> Option<String>;
}

/// Review files laid out as `<data_root>/reviews/<pack_slug>/<file>`, with
/// `<data_root>/reviews/<file>` for cards that have no pack slug.
pub struct FsReviewStore {
    reviews_root: PathBuf,
}

impl FsReviewStore {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            reviews_root: data_root.into().join("reviews"),
        }
    }
}

impl ReviewStore for FsReviewStore {
    fn read(&self, pack_slug: Option<&str>, file: &str) -> Option<String> {
        let path = match pack_slug {
            Some(slug) => self.reviews_root.join(slug).join(file),
            None => self.reviews_root.join(file),
        };
        std::fs::read_to_string(path).ok()
    }
}

/// Determine the review text to display for a card.
///
/// First match wins: non-empty inline `reviewText`, then the inline `review`
/// string, then the external file named by `reviewFile` (empty string when
/// the read fails).
pub fn resolve_review(card: &CardListItem, store: &dyn ReviewStore) -> String {
    if let Some(text) = card.review_text.as_deref() {
        if !text.is_empty() {
            return text.to_string();
        }
    }
    if let Some(review) = card.review.as_deref() {
        return review.to_string();
    }
    if let Some(file) = card.review_file.as_deref() {
        return store.read(card.pack_slug.as_deref(), file).unwrap_or_default();
    }
    String::new()
}

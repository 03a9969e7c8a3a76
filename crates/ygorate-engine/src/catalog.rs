use crate::loader::{load_packs, LoadedPack};
use crate::Result;
use std::collections::HashMap;
use std::path::Path;
use ygorate_types::{CardListItem, ALL_PACKS};

/// Flatten pack files into one list of catalog entries.
///
/// A record-level `pack` override wins over the pack-file default. No
/// deduplication happens across packs; duplicate names are legal and all
/// appear. Output order is the concatenation of packs then cards within each
/// pack.
pub fn merge(packs: &[LoadedPack]) -> Vec<CardListItem> {
    let mut items = Vec::new();
    for pack in packs {
        for record in &pack.file.cards {
            items.push(CardListItem::from_record(record, &pack.file.pack, &pack.slug));
        }
    }
    items
}

/// The immutable merged collection the viewer works over.
///
/// Built once at startup; every derived view (labels, counts, filtered
/// pools) is recomputed from it rather than cached.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CardListItem>,
}

impl Catalog {
    /// Load and merge every pack under `data_root`.
    pub fn load(data_root: &Path) -> Result<Self> {
        let packs = load_packs(data_root)?;
        Ok(Self::from_items(merge(&packs)))
    }

    pub fn from_items(items: Vec<CardListItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CardListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// "All" followed by every resolved pack label, sorted case-insensitively.
    pub fn pack_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .pack_counts()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        labels.insert(0, ALL_PACKS.to_string());
        labels
    }

    /// Card count per resolved pack label, over the full collection.
    ///
    /// Attribution is item-level: a record whose `pack` overrides its source
    /// file counts toward the override target, not the file it came from.
    pub fn pack_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for item in &self.items {
            *counts.entry(item.pack.as_str()).or_default() += 1;
        }

        let mut out: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect();
        out.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));
        out
    }

    pub fn find_by_id(&self, id: u64) -> Option<&CardListItem> {
        self.items.iter().find(|item| item.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ygorate_types::{CardRecord, PackFile, UNSPECIFIED_PACK};

    fn record(name: &str, id: Option<u64>, pack: Option<&str>) -> CardRecord {
        CardRecord {
            id,
            name: name.to_string(),
            rating: 5.0,
            review_text: None,
            review: None,
            review_file: None,
            pack: pack.map(str::to_string),
        }
    }

    fn loaded(slug: &str, pack: &str, cards: Vec<CardRecord>) -> LoadedPack {
        LoadedPack {
            slug: slug.to_string(),
            path: format!("data/{slug}/cards.json").into(),
            file: PackFile {
                pack: pack.to_string(),
                cards,
            },
        }
    }

    #[test]
    fn record_pack_override_wins_over_file_default() {
        let packs = vec![loaded(
            "Beta",
            "Beta",
            vec![
                record("Kuriboh", Some(40640057), None),
                record("Dark Magician", Some(46986414), Some("Alpha")),
            ],
        )];

        let items = merge(&packs);
        assert_eq!(items[0].pack, "Beta");
        assert_eq!(items[1].pack, "Alpha");
        assert_eq!(items[1].pack_slug.as_deref(), Some("Beta"));
    }

    #[test]
    fn blank_labels_resolve_to_the_sentinel() {
        let packs = vec![loaded("Misc", "  ", vec![record("Sangan", None, None)])];
        let items = merge(&packs);
        assert_eq!(items[0].pack, UNSPECIFIED_PACK);
    }

    #[test]
    fn merge_preserves_concatenation_order_and_duplicates() {
        let packs = vec![
            loaded("A", "Alpha", vec![record("Same Name", Some(1), None)]),
            loaded("B", "Beta", vec![record("Same Name", Some(2), None)]),
        ];

        let items = merge(&packs);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, Some(1));
        assert_eq!(items[1].id, Some(2));
    }

    #[test]
    fn counts_attribute_overrides_to_the_target_pack() {
        // Two source files: "Alpha" with 2 cards, "Beta" with 1 card that
        // explicitly claims pack "Alpha". Item-level attribution means the
        // override steals the card from Beta's count.
        let packs = vec![
            loaded(
                "Alpha",
                "Alpha",
                vec![record("One", Some(1), None), record("Two", Some(2), None)],
            ),
            loaded("Beta", "Beta", vec![record("Three", Some(3), Some("Alpha"))]),
        ];

        let catalog = Catalog::from_items(merge(&packs));
        assert_eq!(catalog.len(), 3);

        let counts = catalog.pack_counts();
        assert_eq!(counts, vec![("Alpha".to_string(), 3)]);
    }

    #[test]
    fn counts_sum_to_total_and_labels_sort_case_insensitively() {
        let packs = vec![
            loaded("z", "zoo pack", vec![record("A", None, None)]),
            loaded(
                "a",
                "Apple Pack",
                vec![record("B", None, None), record("C", None, None)],
            ),
        ];

        let catalog = Catalog::from_items(merge(&packs));
        let counts = catalog.pack_counts();
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, catalog.len());
        assert_eq!(
            counts.iter().map(|(l, _)| l.as_str()).collect::<Vec<_>>(),
            vec!["Apple Pack", "zoo pack"]
        );

        let labels = catalog.pack_labels();
        assert_eq!(labels, vec!["All", "Apple Pack", "zoo pack"]);
    }
}

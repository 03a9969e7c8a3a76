use crate::Catalog;
use ygorate_types::{CardListItem, ALL_PACKS};

/// Display mode of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Pack overview with card counts.
    Collections,
    /// One card at a time with prev/next navigation.
    Single,
    /// Every card of the current pool at once.
    List,
}

/// Navigation state for browsing the merged collection.
///
/// Holds the selected pack filter, the cursor into the filtered pool, and
/// the display mode. Everything else (pools, counts, labels) is derived
/// from the [`Catalog`] on demand; nothing here caches collection data.
#[derive(Debug, Clone)]
pub struct ViewState {
    selected_pack: String,
    index: usize,
    mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            selected_pack: ALL_PACKS.to_string(),
            index: 0,
            mode: ViewMode::Collections,
        }
    }

    pub fn selected_pack(&self) -> &str {
        &self.selected_pack
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Select a pack filter. Always resets the cursor to the first card.
    pub fn set_pack_filter(&mut self, pack: impl Into<String>) {
        self.selected_pack = pack.into();
        self.index = 0;
    }

    /// The current pool: every card whose resolved pack matches the filter,
    /// or the whole collection when "All" is selected.
    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CardListItem> {
        if self.selected_pack == ALL_PACKS {
            return catalog.items().iter().collect();
        }
        catalog
            .items()
            .iter()
            .filter(|item| item.pack == self.selected_pack)
            .collect()
    }

    /// The card under the cursor, if the pool is non-empty.
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a CardListItem> {
        let pool = self.filtered(catalog);
        if pool.is_empty() {
            return None;
        }
        Some(pool[self.index.min(pool.len() - 1)])
    }

    /// Move back one card. Clamped at the first card; no wraparound.
    pub fn go_prev(&mut self, catalog: &Catalog) {
        let len = self.filtered(catalog).len();
        self.index = clamp(self.index.saturating_sub(1), len);
    }

    /// Move forward one card. Clamped at the last card; no wraparound.
    pub fn go_next(&mut self, catalog: &Catalog) {
        let len = self.filtered(catalog).len();
        self.index = clamp(self.index + 1, len);
    }

    /// Jump to the card with the given passcode within the current pool.
    ///
    /// Returns false (leaving the cursor untouched) when the pool has no
    /// card with that id; cards without an id are not addressable.
    pub fn open_card(&mut self, catalog: &Catalog, id: u64) -> bool {
        let pool = self.filtered(catalog);
        match pool.iter().position(|item| item.id == Some(id)) {
            Some(pos) => {
                self.index = pos;
                true
            }
            None => false,
        }
    }

    /// Switch the pack filter, keeping the currently selected card when it
    /// also exists in the new pool and falling back to the pool's first card
    /// otherwise. Switching to a pack with no cards is a no-op.
    pub fn change_pack_preserving_selection(&mut self, catalog: &Catalog, new_pack: &str) {
        let current_id = self.current(catalog).and_then(|item| item.id);

        if new_pack == ALL_PACKS {
            self.selected_pack = ALL_PACKS.to_string();
            self.index = 0;
            if let Some(id) = current_id {
                self.open_card(catalog, id);
            }
            return;
        }

        let in_pack: Vec<&CardListItem> = catalog
            .items()
            .iter()
            .filter(|item| item.pack == new_pack)
            .collect();
        if in_pack.is_empty() {
            return;
        }

        self.selected_pack = new_pack.to_string();
        self.index = 0;
        if let Some(id) = current_id {
            self.open_card(catalog, id);
        }
    }
}

fn clamp(index: usize, pool_len: usize) -> usize {
    if pool_len == 0 {
        0
    } else {
        index.min(pool_len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ygorate_types::CardListItem;

    fn item(name: &str, id: Option<u64>, pack: &str) -> CardListItem {
        CardListItem {
            id,
            name: name.to_string(),
            rating: 5.0,
            review_text: None,
            review: None,
            review_file: None,
            pack: pack.to_string(),
            pack_slug: Some(pack.to_lowercase()),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            item("One", Some(1), "Alpha"),
            item("Two", Some(2), "Alpha"),
            item("Three", Some(3), "Beta"),
            item("No Id", None, "Beta"),
        ])
    }

    #[test]
    fn changing_the_filter_resets_the_cursor() {
        let catalog = catalog();
        let mut view = ViewState::new();
        view.go_next(&catalog);
        assert_eq!(view.index(), 1);

        view.set_pack_filter("Beta");
        assert_eq!(view.index(), 0);
        assert_eq!(view.filtered(&catalog).len(), 2);
    }

    #[test]
    fn navigation_is_clamped_without_wraparound() {
        let catalog = catalog();
        let mut view = ViewState::new();
        view.set_pack_filter("Alpha");

        view.go_prev(&catalog);
        assert_eq!(view.index(), 0);

        view.go_next(&catalog);
        view.go_next(&catalog);
        view.go_next(&catalog);
        assert_eq!(view.index(), 1);
    }

    #[test]
    fn empty_pool_makes_navigation_a_no_op() {
        let catalog = catalog();
        let mut view = ViewState::new();
        view.set_pack_filter("Gamma");

        assert!(view.filtered(&catalog).is_empty());
        assert!(view.current(&catalog).is_none());

        view.go_next(&catalog);
        view.go_prev(&catalog);
        assert_eq!(view.index(), 0);
    }

    #[test]
    fn open_card_targets_the_pool_and_ignores_unknown_ids() {
        let catalog = catalog();
        let mut view = ViewState::new();

        assert!(view.open_card(&catalog, 3));
        assert_eq!(view.current(&catalog).unwrap().name, "Three");

        view.set_pack_filter("Alpha");
        assert!(!view.open_card(&catalog, 3));
        assert_eq!(view.index(), 0);
    }

    #[test]
    fn pack_switch_keeps_the_selected_card_when_it_exists_there() {
        let mut catalog_items = vec![
            item("One", Some(1), "Alpha"),
            item("Shared", Some(9), "Alpha"),
        ];
        catalog_items.push(item("Shared", Some(9), "Beta"));
        let catalog = Catalog::from_items(catalog_items);

        let mut view = ViewState::new();
        view.set_pack_filter("Alpha");
        view.open_card(&catalog, 9);

        view.change_pack_preserving_selection(&catalog, "Beta");
        assert_eq!(view.selected_pack(), "Beta");
        assert_eq!(view.current(&catalog).unwrap().id, Some(9));
    }

    #[test]
    fn pack_switch_falls_back_to_the_first_card() {
        let catalog = catalog();
        let mut view = ViewState::new();
        view.set_pack_filter("Alpha");
        view.open_card(&catalog, 2);

        view.change_pack_preserving_selection(&catalog, "Beta");
        assert_eq!(view.selected_pack(), "Beta");
        assert_eq!(view.current(&catalog).unwrap().name, "Three");
    }

    #[test]
    fn switching_to_all_keeps_the_current_card() {
        let catalog = catalog();
        let mut view = ViewState::new();
        view.set_pack_filter("Beta");
        view.open_card(&catalog, 3);

        view.change_pack_preserving_selection(&catalog, "All");
        assert_eq!(view.selected_pack(), "All");
        assert_eq!(view.current(&catalog).unwrap().id, Some(3));
    }

    #[test]
    fn switching_to_an_empty_pack_is_a_no_op() {
        let catalog = catalog();
        let mut view = ViewState::new();
        view.set_pack_filter("Alpha");
        view.open_card(&catalog, 2);

        view.change_pack_preserving_selection(&catalog, "Gamma");
        assert_eq!(view.selected_pack(), "Alpha");
        assert_eq!(view.current(&catalog).unwrap().id, Some(2));
    }
}

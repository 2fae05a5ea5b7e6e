//! crates/curalink_core/src/favorites.rs
//!
//! An append-only list of saved items. Saving the same item twice keeps both copies.

use crate::domain::{FavoriteItem, FavoriteKind};

#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    entries: Vec<FavoriteItem>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a previously persisted list.
    pub fn from_entries(entries: Vec<FavoriteItem>) -> Self {
        Self { entries }
    }

    /// Appends a copy of `item` and returns the stored entry.
    pub fn add(&mut self, item: impl Into<FavoriteItem>) -> &FavoriteItem {
        self.entries.push(item.into());
        let last = self.entries.len() - 1;
        &self.entries[last]
    }

    pub fn list(&self) -> &[FavoriteItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn of_kind(&self, kind: FavoriteKind) -> impl Iterator<Item = &FavoriteItem> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }
}

/// The acknowledgement shown after saving an item.
pub fn confirmation(item: &FavoriteItem) -> String {
    format!("{} added to Favorites!", item.display_label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Expert, Trial};

    #[test]
    fn saved_trial_keeps_its_fields_and_tag() {
        let mut store = FavoritesStore::new();
        store.add(Trial::new("Heart Disease AI Study", "Recruiting"));

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].kind(), FavoriteKind::Trial);
        match &list[0] {
            FavoriteItem::Trial(t) => {
                assert_eq!(t.title, "Heart Disease AI Study");
                assert_eq!(t.status, "Recruiting");
            }
            other => panic!("expected a trial, got {other:?}"),
        }
    }

    #[test]
    fn duplicates_are_appended() {
        let mut store = FavoritesStore::new();
        let expert = Expert {
            name: "Dr. Meena Patel".to_string(),
            specialty: "Cardiology".to_string(),
            active: true,
        };

        for expected in 1..=3 {
            store.add(expert.clone());
            assert_eq!(store.len(), expected);
        }
        assert_eq!(store.of_kind(FavoriteKind::Expert).count(), 3);
        assert_eq!(store.of_kind(FavoriteKind::Trial).count(), 0);
    }

    #[test]
    fn confirmation_uses_title_or_name() {
        let trial = FavoriteItem::from(Trial::new("Cardiology Clinical Trial", "Ongoing"));
        assert_eq!(confirmation(&trial), "Cardiology Clinical Trial added to Favorites!");
    }
}

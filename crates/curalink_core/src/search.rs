//! crates/curalink_core/src/search.rs
//!
//! Case-insensitive substring filtering over directory listings.

use crate::domain::{Collaborator, Expert};

/// Borrows one searchable text field from an item.
pub type FieldAccessor<T> = fn(&T) -> &str;

/// Keeps the items where any of `fields` contains `query`, ignoring case.
///
/// An empty query keeps everything. Relative order is preserved.
pub fn filter<'a, T>(items: &'a [T], query: &str, fields: &[FieldAccessor<T>]) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields
                .iter()
                .any(|field| field(*item).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Items with a default set of fields to search.
pub trait Searchable: Sized + 'static {
    fn search_fields() -> &'static [FieldAccessor<Self>];
}

fn expert_name(e: &Expert) -> &str {
    &e.name
}

fn expert_specialty(e: &Expert) -> &str {
    &e.specialty
}

fn collaborator_name(c: &Collaborator) -> &str {
    &c.name
}

fn collaborator_field(c: &Collaborator) -> &str {
    &c.field
}

fn collaborator_interests(c: &Collaborator) -> &str {
    &c.interests
}

impl Searchable for Expert {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        const FIELDS: &[FieldAccessor<Expert>] = &[expert_name, expert_specialty];
        FIELDS
    }
}

impl Searchable for Collaborator {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        const FIELDS: &[FieldAccessor<Collaborator>] = &[
            collaborator_name,
            collaborator_field,
            collaborator_interests,
        ];
        FIELDS
    }
}

/// `filter` over the item type's default fields.
pub fn search<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    filter(items, query, T::search_fields())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn names(items: &[&Collaborator]) -> Vec<String> {
        items.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let collaborators = catalog::collaborators();
        let hits = search(&collaborators, "");
        assert_eq!(hits.len(), collaborators.len());
        for (hit, original) in hits.iter().zip(&collaborators) {
            assert_eq!(*hit, original);
        }
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let collaborators = catalog::collaborators();

        let by_interest = search(&collaborators, "neuro ai");
        assert_eq!(names(&by_interest), ["Dr. Sneha Verma"]);

        let by_field = search(&collaborators, "ONCOLOGY");
        assert_eq!(names(&by_field), ["Dr. Kavya Mehta"]);
    }

    #[test]
    fn preserves_relative_order() {
        let collaborators = catalog::collaborators();
        let hits = search(&collaborators, "dr.");
        assert_eq!(
            names(&hits),
            ["Dr. Kavya Mehta", "Dr. Rahul Menon", "Dr. Sneha Verma"]
        );
    }

    #[test]
    fn experts_search_name_and_specialty_only() {
        let experts = catalog::bundle(crate::domain::BundleKind::Heart).experts;
        assert_eq!(search(&experts, "cardio").len(), 2);
        assert_eq!(search(&experts, "meena").len(), 1);
        assert!(search(&experts, "xyz").is_empty());
    }

    #[test]
    fn custom_field_list() {
        let experts = catalog::bundle(crate::domain::BundleKind::Oncology).experts;
        let only_names: &[FieldAccessor<Expert>] = &[expert_name];
        assert!(filter(&experts, "oncology", only_names).is_empty());
        assert_eq!(filter(&experts, "priya", only_names).len(), 1);
    }
}

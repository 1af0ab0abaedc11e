use crate::domain::model::{CatalogEntry, Category};
use serde::{Deserialize, Serialize};

/// Immutable list of purchasable menu entries, supplied by a catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Menu browsing as the order screen does it: an optional category filter
    /// combined with a case-insensitive substring search on the name. An empty
    /// query matches everything.
    pub fn browse(&self, category: Option<Category>, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry {
                id: "1".to_string(),
                name: "Phở Bò".to_string(),
                unit_price: 75_000,
                category: Category::Main,
            },
            CatalogEntry {
                id: "4".to_string(),
                name: "Nước Chanh".to_string(),
                unit_price: 25_000,
                category: Category::Drinks,
            },
            CatalogEntry {
                id: "5".to_string(),
                name: "Trà Đá".to_string(),
                unit_price: 10_000,
                category: Category::Drinks,
            },
        ])
    }

    #[test]
    fn test_entry_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.entry("1").unwrap().unit_price, 75_000);
        assert!(catalog.entry("99").is_none());
    }

    #[test]
    fn test_browse_all_with_empty_query() {
        let catalog = catalog();
        assert_eq!(catalog.browse(None, "").len(), 3);
    }

    #[test]
    fn test_browse_by_category() {
        let catalog = catalog();
        let drinks = catalog.browse(Some(Category::Drinks), "");
        assert_eq!(drinks.len(), 2);
        assert!(drinks.iter().all(|e| e.category == Category::Drinks));
    }

    #[test]
    fn test_browse_query_is_case_insensitive() {
        let catalog = catalog();
        let hits = catalog.browse(None, "phở");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        // Combined with category filter
        assert!(catalog.browse(Some(Category::Drinks), "phở").is_empty());
    }
}

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The ordered row collection of one quote.
///
/// Invariant: the final row is always an empty placeholder (the sentinel
/// row). It is never deletable and never counts as data; committing a value
/// into it appends a fresh sentinel in the same mutation. Display sequence
/// numbers are index + 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
    items: Vec<Item>,
    /// Grand total from the last calculation pass, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl Default for QuoteData {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteData {
    /// A fresh quote: just the sentinel row.
    pub fn new() -> Self {
        Self { items: vec![Item::new()], total: None }
    }

    /// Build from explicit rows (loading, tests). Appends a sentinel if the
    /// last row is not empty, so the invariant holds for any input.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut quote = Self { items, total: None };
        quote.ensure_sentinel();
        quote
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, row: usize) -> Option<&Item> {
        self.items.get(row)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the sentinel row (always the last).
    pub fn sentinel_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    pub fn is_sentinel(&self, row: usize) -> bool {
        row == self.sentinel_index()
    }

    /// Rows that carry data (the sentinel never does).
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &Item)> {
        let sentinel = self.sentinel_index();
        self.items
            .iter()
            .enumerate()
            .filter(move |(row, item)| *row != sentinel && item.has_data())
    }

    /// Insert an empty row at `at`. Out-of-range positions are clamped to
    /// the sentinel so the placeholder stays last.
    pub fn insert_empty(&mut self, at: usize) {
        let at = at.min(self.sentinel_index());
        self.items.insert(at, Item::new());
    }

    /// Remove a row. The sentinel row is an inert no-op.
    pub fn remove(&mut self, row: usize) {
        if row >= self.items.len() || self.is_sentinel(row) {
            return;
        }
        self.items.remove(row);
        self.ensure_sentinel();
    }

    /// Clear a row's editable fields in place. Clearing the sentinel is a
    /// harmless no-op (it is already empty).
    pub fn clear_row(&mut self, row: usize) {
        if let Some(item) = self.items.get_mut(row) {
            item.clear_editable();
        }
    }

    /// Mutate a row through `f`, then restore the sentinel invariant — if
    /// the mutation put data into the trailing row, a new empty row is
    /// appended in the same call.
    pub fn update_row(&mut self, row: usize, f: impl FnOnce(&mut Item)) {
        if let Some(item) = self.items.get_mut(row) {
            f(item);
        }
        self.ensure_sentinel();
    }

    fn ensure_sentinel(&mut self) {
        match self.items.last() {
            Some(last) if !last.has_data() => {}
            _ => self.items.push(Item::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(width: f64) -> Item {
        Item { width: Some(width), ..Item::default() }
    }

    #[test]
    fn test_new_quote_is_single_sentinel() {
        let quote = QuoteData::new();
        assert_eq!(quote.len(), 1);
        assert!(quote.is_sentinel(0));
        assert!(!quote.items()[0].has_data());
    }

    #[test]
    fn test_commit_into_sentinel_appends_new_sentinel() {
        let mut quote = QuoteData::new();
        quote.update_row(0, |item| item.width = Some(1200.0));
        assert_eq!(quote.len(), 2);
        assert!(quote.items()[0].has_data());
        assert!(!quote.items()[1].has_data());
    }

    #[test]
    fn test_remove_sentinel_is_noop() {
        let mut quote = QuoteData::from_items(vec![populated(10.0)]);
        assert_eq!(quote.len(), 2);
        quote.remove(quote.sentinel_index());
        assert_eq!(quote.len(), 2);
    }

    #[test]
    fn test_remove_last_data_row_keeps_sentinel() {
        let mut quote = QuoteData::from_items(vec![populated(10.0)]);
        quote.remove(0);
        assert_eq!(quote.len(), 1);
        assert!(!quote.items()[0].has_data());
    }

    #[test]
    fn test_insert_empty_clamps_to_sentinel() {
        let mut quote = QuoteData::from_items(vec![populated(10.0), populated(20.0)]);
        quote.insert_empty(99);
        assert_eq!(quote.len(), 4);
        // Placeholder inserted before the sentinel, which stays last
        assert!(!quote.items()[2].has_data());
        assert!(quote.is_sentinel(3));
    }

    #[test]
    fn test_data_rows_skips_sentinel_and_empties() {
        let mut quote = QuoteData::from_items(vec![populated(10.0), Item::new(), populated(20.0)]);
        quote.insert_empty(1);
        let rows: Vec<usize> = quote.data_rows().map(|(row, _)| row).collect();
        assert_eq!(rows, vec![0, 3]);
    }
}

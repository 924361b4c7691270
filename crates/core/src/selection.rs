use serde::{Deserialize, Serialize};

/// The multi-row selection: a duplicate-free set of row indexes.
///
/// Order is irrelevant; the set is kept sorted so snapshots compare stably.
/// Structural mutations of the row collection must call `remap_insert` /
/// `remap_delete` in the same transition, so the set never holds a stale
/// index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    rows: Vec<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows.binary_search(&row).is_ok()
    }

    /// The selected indexes in ascending order.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// The sole selected row, if exactly one is selected.
    pub fn single(&self) -> Option<usize> {
        match self.rows.as_slice() {
            [row] => Some(*row),
            _ => None,
        }
    }

    /// Add or remove a row from the selection.
    pub fn toggle(&mut self, row: usize) {
        match self.rows.binary_search(&row) {
            Ok(pos) => {
                self.rows.remove(pos);
            }
            Err(pos) => self.rows.insert(pos, row),
        }
    }

    pub fn insert(&mut self, row: usize) {
        if let Err(pos) = self.rows.binary_search(&row) {
            self.rows.insert(pos, row);
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Shift indexes after a row was inserted at `at`: every index >= `at`
    /// moves down by one.
    pub fn remap_insert(&mut self, at: usize) {
        for row in &mut self.rows {
            if *row >= at {
                *row += 1;
            }
        }
    }

    /// Shift indexes after a row was deleted at `at`: the deleted index is
    /// dropped, every index > `at` moves up by one.
    pub fn remap_delete(&mut self, at: usize) {
        self.rows.retain(|row| *row != at);
        for row in &mut self.rows {
            if *row > at {
                *row -= 1;
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// The fixed set of grid columns.
///
/// `Sequence` and `Price` are display-only; the editable columns carry the
/// row's data. The set is closed on purpose — cell behavior is dispatched by
/// matching on this enum, not by open-ended handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Sequence,
    Width,
    Height,
    FabricType,
    Winder,
    Motor,
    Dual,
    Price,
}

impl Column {
    /// Columns reachable by arrow navigation, in left-to-right order.
    pub const NAV_ORDER: [Column; 3] = [Column::Width, Column::Height, Column::FabricType];

    /// True for columns whose pending value lives in the input buffer.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Width | Column::Height)
    }

    /// Position within the navigation order, if navigable.
    pub fn nav_index(&self) -> Option<usize> {
        Self::NAV_ORDER.iter().position(|c| c == self)
    }
}

/// A single (row, column) coordinate — the active cell when one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub column: Column,
}

impl CellRef {
    pub fn new(row: usize, column: Column) -> Self {
        Self { row, column }
    }
}

/// Requested direction for an arrow move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

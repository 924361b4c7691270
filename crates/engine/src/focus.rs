//! Focus/navigation policy: where the active cell goes next.
//!
//! Every function is total — when no candidate qualifies it returns a
//! deterministic fallback instead of failing. Directional moves clamp at the
//! collection boundaries (row 0, the sentinel row) and at the ends of the
//! navigable column order; there is no wraparound.

use quotegrid_core::{CellRef, Column, Direction};

use crate::store::QuoteState;

/// Next cell for an arrow move. With no active cell, the move lands on the
/// first row's width cell.
pub fn move_active(state: &QuoteState, direction: Direction) -> CellRef {
    let Some(cell) = state.active_cell else {
        return CellRef::new(0, Column::Width);
    };
    let max_row = state.quote.sentinel_index();
    let nav = cell.column.nav_index().unwrap_or(0);

    match direction {
        Direction::Up => CellRef::new(cell.row.saturating_sub(1), cell.column),
        Direction::Down => CellRef::new((cell.row + 1).min(max_row), cell.column),
        Direction::Left => CellRef::new(cell.row, Column::NAV_ORDER[nav.saturating_sub(1)]),
        Direction::Right => {
            CellRef::new(cell.row, Column::NAV_ORDER[(nav + 1).min(Column::NAV_ORDER.len() - 1)])
        }
    }
}

/// First row (in index order) whose `column` is unset. The sentinel row is a
/// valid target — it is where the next entry starts. Falls back to row 0.
pub fn first_empty(state: &QuoteState, column: Column) -> CellRef {
    let row = state
        .quote
        .items()
        .iter()
        .position(|item| item.numeric_value(column).is_none())
        .unwrap_or(0);
    CellRef::new(row, column)
}

/// Cell to focus after a commit: the first row still missing the committed
/// column, or the row below the commit, clamped to the sentinel.
pub fn after_commit(state: &QuoteState) -> CellRef {
    let Some(cell) = state.active_cell else {
        return CellRef::new(0, Column::Width);
    };
    let empty = state
        .quote
        .items()
        .iter()
        .position(|item| item.numeric_value(cell.column).is_none());
    match empty {
        Some(row) => CellRef::new(row, cell.column),
        None => CellRef::new((cell.row + 1).min(state.quote.sentinel_index()), cell.column),
    }
}

/// Cell to focus after rows were deleted or cleared: the first empty width
/// cell.
pub fn after_delete(state: &QuoteState) -> CellRef {
    first_empty(state, Column::Width)
}

pub fn after_clear(state: &QuoteState) -> CellRef {
    first_empty(state, Column::Width)
}

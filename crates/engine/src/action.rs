use serde::{Deserialize, Serialize};

use quotegrid_core::Column;

use crate::quote::QuoteData;

/// Pure descriptions of state changes.
///
/// Actions carry no behavior; `store::reduce` interprets them. Structural
/// actions (`InsertRow`, `DeleteRows`, `ResetQuote`) remap the active cell
/// and selection set inside the same reduction, never as a follow-up step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Set the active cell to (row, column).
    SetActiveCell { row: usize, column: Column },
    /// Drop the active cell and its input buffer.
    ClearActiveCell,
    /// Replace the pending input buffer.
    SetInputBuffer { value: String },
    /// Append one character to the input buffer.
    AppendInput { ch: char },
    /// Remove the last buffered character.
    DeleteLastInput,
    /// Toggle a row's membership in the selection set.
    ToggleSelection { row: usize },
    /// Empty the selection set.
    ClearSelection,
    /// Insert an empty row at the position, shifting indexes at/after it.
    InsertRow { at: usize },
    /// Delete a set of rows. Sentinel indexes are inert no-ops.
    DeleteRows { rows: Vec<usize> },
    /// Reset a row's editable fields, keeping its position.
    ClearRow { row: usize },
    /// Write a committed numeric value to a row's column.
    SetItemValue { row: usize, column: Column, value: f64 },
    /// Advance one row's fabric type to the next configured code.
    CycleItemType { row: usize },
    /// Advance the fabric type of every data-bearing row.
    BatchCycleTypes,
    /// Assign one fabric type to a set of rows.
    SetFabricTypes { rows: Vec<usize>, code: String },
    /// Mark whether the sum needs recalculation.
    SetSumOutdated { outdated: bool },
    /// Replace the quote data wholesale (calculation results).
    SetQuoteData { quote: QuoteData },
    /// Start a new quote.
    ResetQuote,
    /// Reset editing state (active cell, buffer, selection, mode flags).
    ResetUi,
    /// Flip the multi-select mode flag.
    ToggleMultiSelectMode,
    /// Collapse or expand the virtual keypad panel.
    ToggleKeypad,
}

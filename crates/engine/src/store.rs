//! The quote store: single owner of editing state.
//!
//! State is one immutable snapshot replaced wholesale by `reduce` on every
//! dispatch. Reduction is deterministic and side-effect free — dialogs and
//! notifications are the controller's business. Index remaps for structural
//! changes happen inside the same reduction as the change itself, so no
//! caller can observe a selection or active cell pointing at a moved row.

use serde::{Deserialize, Serialize};

use quotegrid_config::FabricCatalog;
use quotegrid_core::{CellRef, Column, SelectionSet};

use crate::action::Action;
use crate::quote::QuoteData;

/// One snapshot of everything the editor needs to render and mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteState {
    pub quote: QuoteData,
    pub active_cell: Option<CellRef>,
    /// Pending digits for the active numeric cell.
    pub input_buffer: String,
    pub selection: SelectionSet,
    /// True when edits have outdated the last calculated sum.
    pub sum_outdated: bool,
    pub multi_select_mode: bool,
    pub keypad_collapsed: bool,
}

impl Default for QuoteState {
    fn default() -> Self {
        Self {
            quote: QuoteData::new(),
            active_cell: None,
            input_buffer: String::new(),
            selection: SelectionSet::new(),
            sum_outdated: false,
            multi_select_mode: false,
            keypad_collapsed: false,
        }
    }
}

impl QuoteState {
    /// The item under the active cell, if any.
    pub fn active_item(&self) -> Option<&crate::item::Item> {
        self.active_cell.and_then(|cell| self.quote.item(cell.row))
    }
}

/// Applies actions to produce the next state. The catalog is fixed for the
/// session; the fabric-type cycle order comes from it.
#[derive(Debug)]
pub struct QuoteStore {
    state: QuoteState,
    catalog: FabricCatalog,
}

impl QuoteStore {
    pub fn new(catalog: FabricCatalog) -> Self {
        Self { state: QuoteState::default(), catalog }
    }

    pub fn with_state(catalog: FabricCatalog, state: QuoteState) -> Self {
        Self { state, catalog }
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &QuoteState {
        &self.state
    }

    pub fn catalog(&self) -> &FabricCatalog {
        &self.catalog
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, &action, &self.catalog);
    }
}

/// Compute the next state for an action. Pure: no I/O, no dialogs.
pub fn reduce(state: &QuoteState, action: &Action, catalog: &FabricCatalog) -> QuoteState {
    let mut next = state.clone();
    match action {
        Action::SetActiveCell { row, column } => {
            next.active_cell = Some(CellRef::new(*row, *column));
        }
        Action::ClearActiveCell => {
            next.active_cell = None;
            next.input_buffer.clear();
        }
        Action::SetInputBuffer { value } => {
            next.input_buffer = value.clone();
        }
        Action::AppendInput { ch } => {
            next.input_buffer.push(*ch);
        }
        Action::DeleteLastInput => {
            next.input_buffer.pop();
        }
        Action::ToggleSelection { row } => {
            if !next.quote.is_sentinel(*row) && *row < next.quote.len() {
                next.selection.toggle(*row);
            }
        }
        Action::ClearSelection => {
            next.selection.clear();
        }
        Action::InsertRow { at } => {
            // Clamp once so the structural change and the remap agree on the
            // effective position.
            let at = (*at).min(next.quote.sentinel_index());
            next.quote.insert_empty(at);
            next.selection.remap_insert(at);
            if let Some(cell) = &mut next.active_cell {
                if cell.row >= at {
                    cell.row += 1;
                }
            }
        }
        Action::DeleteRows { rows } => {
            // Delete from the bottom up so earlier indexes stay valid,
            // remapping selection and active cell with each removal.
            let mut targets: Vec<usize> = rows
                .iter()
                .copied()
                .filter(|row| *row < next.quote.len() && !next.quote.is_sentinel(*row))
                .collect();
            targets.sort_unstable();
            targets.dedup();
            for row in targets.into_iter().rev() {
                next.quote.remove(row);
                next.selection.remap_delete(row);
                match &mut next.active_cell {
                    Some(cell) if cell.row == row => {
                        next.active_cell = None;
                        next.input_buffer.clear();
                    }
                    Some(cell) if cell.row > row => cell.row -= 1,
                    _ => {}
                }
            }
        }
        Action::ClearRow { row } => {
            next.quote.clear_row(*row);
        }
        Action::SetItemValue { row, column, value } => {
            next.quote.update_row(*row, |item| item.set_numeric_value(*column, *value));
        }
        Action::CycleItemType { row } => {
            if !next.quote.is_sentinel(*row) {
                next.quote.update_row(*row, |item| {
                    item.fabric_type =
                        catalog.next_in_sequence(item.fabric_type.as_deref()).map(str::to_string);
                });
            }
        }
        Action::BatchCycleTypes => {
            let sentinel = next.quote.sentinel_index();
            for row in 0..sentinel {
                let has_data = next.quote.item(row).is_some_and(|item| item.has_data());
                if has_data {
                    next.quote.update_row(row, |item| {
                        item.fabric_type = catalog
                            .next_in_sequence(item.fabric_type.as_deref())
                            .map(str::to_string);
                    });
                }
            }
        }
        Action::SetFabricTypes { rows, code } => {
            for row in rows {
                if !next.quote.is_sentinel(*row) && *row < next.quote.len() {
                    next.quote.update_row(*row, |item| {
                        item.fabric_type = Some(code.clone());
                    });
                }
            }
        }
        Action::SetSumOutdated { outdated } => {
            next.sum_outdated = *outdated;
        }
        Action::SetQuoteData { quote } => {
            next.quote = quote.clone();
        }
        Action::ResetQuote => {
            // Replacing the rows invalidates every index, so the reduction
            // drops them in the same transition.
            next.quote = QuoteData::new();
            next.selection.clear();
            next.active_cell = None;
            next.input_buffer.clear();
        }
        Action::ResetUi => {
            next.active_cell = None;
            next.input_buffer.clear();
            next.selection.clear();
            next.sum_outdated = false;
            next.multi_select_mode = false;
            next.keypad_collapsed = false;
        }
        Action::ToggleMultiSelectMode => {
            next.multi_select_mode = !next.multi_select_mode;
        }
        Action::ToggleKeypad => {
            next.keypad_collapsed = !next.keypad_collapsed;
        }
    }
    next
}

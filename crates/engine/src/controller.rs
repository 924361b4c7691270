//! The grid editing controller.
//!
//! Translates inbound intents from the event-capture layer into store
//! actions, enforcing the business rules before any mutation and routing
//! destructive actions through confirmation dialogs. The controller never
//! touches the row collection directly — it only dispatches actions, so the
//! store stays the single writer.

use log::error;

use quotegrid_config::{BatchSelectScope, ClickSelectionMode, FabricCatalog, Settings};
use quotegrid_core::{CellRef, Column, Direction};

use crate::action::Action;
use crate::calc::{Calculator, PricingStrategy};
use crate::dialog::{
    ConfirmationRequest, DialogCell, DialogEffect, DialogPosition, Notification,
    NotificationGateway,
};
use crate::focus;
use crate::item::Item;
use crate::persist::Persistence;
use crate::store::{QuoteState, QuoteStore};

/// A key on the virtual numeric keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKey {
    Digit(u8),
    Width,
    Height,
    Delete,
    Enter,
}

/// Inbound events from the input-capture collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    MoveActiveCell { direction: Direction },
    NumericKey { key: NumericKey },
    Calculate,
    CycleType,
    ToggleMultiSelectMode,
    InsertRow,
    DeleteRows,
    ClearRow,
    SequenceCellClick { row: usize },
    TableCellClick { row: usize, column: Column },
    TypeCellLongPress { row: usize },
    TypeButtonLongPress,
    ToggleKeypad,
    SaveToFile,
    ExportCsv,
    ResetQuote,
}

/// Orchestrates the quote store, the focus policy, and the collaborator
/// gateways for one editing session.
pub struct GridController<N, C, P> {
    store: QuoteStore,
    settings: Settings,
    strategy: Box<dyn PricingStrategy>,
    gateway: N,
    calculator: C,
    persistence: P,
}

impl<N, C, P> GridController<N, C, P>
where
    N: NotificationGateway,
    C: Calculator,
    P: Persistence,
{
    pub fn new(
        catalog: FabricCatalog,
        settings: Settings,
        strategy: Box<dyn PricingStrategy>,
        gateway: N,
        calculator: C,
        persistence: P,
    ) -> Self {
        Self {
            store: QuoteStore::new(catalog),
            settings,
            strategy,
            gateway,
            calculator,
            persistence,
        }
    }

    pub fn state(&self) -> &QuoteState {
        self.store.state()
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    pub fn gateway(&self) -> &N {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut N {
        &mut self.gateway
    }

    /// Process one inbound intent to completion.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::MoveActiveCell { direction } => self.handle_move(direction),
            Intent::NumericKey { key } => self.handle_numeric_key(key),
            Intent::Calculate => self.handle_calculate(),
            Intent::CycleType => self.handle_cycle_type_button(),
            Intent::ToggleMultiSelectMode => self.store.dispatch(Action::ToggleMultiSelectMode),
            Intent::InsertRow => self.handle_insert_row(),
            Intent::DeleteRows => self.handle_delete_rows(),
            Intent::ClearRow => self.handle_clear_row(),
            Intent::SequenceCellClick { row } => self.handle_sequence_cell_click(row),
            Intent::TableCellClick { row, column } => self.handle_table_cell_click(row, column),
            Intent::TypeCellLongPress { row } => self.handle_type_cell_long_press(row),
            Intent::TypeButtonLongPress => self.handle_type_button_long_press(),
            Intent::ToggleKeypad => self.store.dispatch(Action::ToggleKeypad),
            Intent::SaveToFile => self.handle_save(),
            Intent::ExportCsv => self.handle_export(),
            Intent::ResetQuote => self.handle_reset(),
        }
    }

    /// Run the effect the user chose from a confirmation dialog. `Cancel`
    /// (or never calling this) changes nothing.
    pub fn apply_effect(&mut self, effect: DialogEffect) {
        match effect {
            DialogEffect::DeleteRow { row } => {
                if self.row_is_data(row) {
                    self.store.dispatch(Action::DeleteRows { rows: vec![row] });
                    self.relocate(focus::after_delete(self.store.state()));
                    self.store.dispatch(Action::ClearSelection);
                }
            }
            DialogEffect::ClearRow { row } => {
                if self.row_is_data(row) {
                    self.store.dispatch(Action::ClearRow { row });
                    self.relocate(focus::after_clear(self.store.state()));
                }
            }
            DialogEffect::AssignFabricType { rows, code } => {
                self.store.dispatch(Action::SetFabricTypes { rows, code });
                self.store.dispatch(Action::SetSumOutdated { outdated: true });
                self.store.dispatch(Action::ClearSelection);
            }
            DialogEffect::ResetQuote => {
                self.store.dispatch(Action::ResetQuote);
                self.store.dispatch(Action::ResetUi);
            }
            DialogEffect::Cancel => {}
        }
    }

    // --- intent handlers ---

    fn handle_move(&mut self, direction: Direction) {
        let target = focus::move_active(self.store.state(), direction);
        self.relocate(target);
    }

    fn handle_numeric_key(&mut self, key: NumericKey) {
        let Some(active) = self.store.state().active_cell else {
            return;
        };

        match key {
            NumericKey::Width => {
                let target = focus::first_empty(self.store.state(), Column::Width);
                self.store.dispatch(Action::SetActiveCell { row: target.row, column: target.column });
            }
            NumericKey::Height => {
                let target = focus::first_empty(self.store.state(), Column::Height);
                self.store.dispatch(Action::SetActiveCell { row: target.row, column: target.column });
            }
            NumericKey::Delete => self.store.dispatch(Action::DeleteLastInput),
            NumericKey::Enter => self.commit_input(active),
            NumericKey::Digit(d) => {
                if active.column.is_numeric() && d < 10 {
                    self.store.dispatch(Action::AppendInput { ch: (b'0' + d) as char });
                }
            }
        }
    }

    /// Parse and commit the input buffer. An unparseable buffer aborts the
    /// commit and leaves all state unchanged.
    fn commit_input(&mut self, active: CellRef) {
        let buffer = self.store.state().input_buffer.clone();
        let value = match buffer.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                error!("invalid number for commit: {:?}", buffer);
                return;
            }
        };

        self.store.dispatch(Action::SetItemValue { row: active.row, column: active.column, value });
        self.store.dispatch(Action::SetSumOutdated { outdated: true });
        let target = focus::after_commit(self.store.state());
        self.relocate(target);
    }

    fn handle_insert_row(&mut self) {
        let state = self.store.state();
        let Some(selected) = state.selection.single() else {
            self.gateway.notify(Notification::info(
                "Please select exactly one row to insert a new row below it.",
            ));
            return;
        };

        if selected + 1 == state.quote.sentinel_index() {
            self.gateway.notify(Notification::info(
                "Cannot insert a row below the last data entry row.",
            ));
            return;
        }

        // The row that would be pushed down must not already hold data;
        // inserting there would silently displace a populated position.
        let displaced_has_data =
            state.quote.item(selected + 1).is_some_and(|item| item.has_data());
        if displaced_has_data {
            self.gateway.notify(Notification::info(
                "Cannot insert here: the row below already contains data.",
            ));
            return;
        }

        self.store.dispatch(Action::InsertRow { at: selected + 1 });
        self.store.dispatch(Action::SetActiveCell { row: selected + 1, column: Column::Width });
        self.store.dispatch(Action::SetInputBuffer { value: String::new() });
        self.store.dispatch(Action::ClearSelection);
    }

    fn handle_delete_rows(&mut self) {
        let rows = self.store.state().selection.rows().to_vec();
        if rows.is_empty() {
            self.gateway.notify(Notification::info("Please select one or more rows to delete."));
            return;
        }

        self.store.dispatch(Action::DeleteRows { rows });
        self.relocate(focus::after_delete(self.store.state()));
        self.store.dispatch(Action::ClearSelection);
    }

    fn handle_clear_row(&mut self) {
        let Some(selected) = self.store.state().selection.single() else {
            self.gateway.notify(Notification::info("Please select exactly one row to proceed."));
            return;
        };

        self.gateway.confirm(ConfirmationRequest {
            message: format!("Perform action on row {}. What would you like to do?", selected + 1),
            layout: vec![vec![
                DialogCell::secondary_button("Delete Row", DialogEffect::DeleteRow { row: selected }),
                DialogCell::button("Clear Row", DialogEffect::ClearRow { row: selected }),
                DialogCell::secondary_button("Cancel", DialogEffect::Cancel),
            ]],
            position: DialogPosition::Center,
        });
    }

    fn handle_sequence_cell_click(&mut self, row: usize) {
        let state = self.store.state();
        if row >= state.quote.len() || state.quote.is_sentinel(row) {
            return;
        }
        if self.settings.click_selection_mode == ClickSelectionMode::Exclusive
            && !state.selection.contains(row)
        {
            self.store.dispatch(Action::ClearSelection);
        }
        self.store.dispatch(Action::ToggleSelection { row });
    }

    fn handle_table_cell_click(&mut self, row: usize, column: Column) {
        if row >= self.store.state().quote.len() {
            return;
        }
        if column == Column::FabricType {
            self.cycle_single(row);
            return;
        }

        self.store.dispatch(Action::SetActiveCell { row, column });
        let seed = self
            .store
            .state()
            .quote
            .item(row)
            .and_then(|item| item.numeric_value(column))
            .map(Item::format_dimension)
            .unwrap_or_default();
        self.store.dispatch(Action::SetInputBuffer { value: seed });
    }

    fn cycle_single(&mut self, row: usize) {
        self.store.dispatch(Action::CycleItemType { row });
        self.store.dispatch(Action::SetSumOutdated { outdated: true });
    }

    fn handle_cycle_type_button(&mut self) {
        if !self.store.state().selection.is_empty() {
            self.gateway.notify(Notification::info(
                "Batch cycle is disabled when rows are selected. Use the long-press menu instead.",
            ));
            return;
        }
        self.store.dispatch(Action::BatchCycleTypes);
        self.store.dispatch(Action::SetSumOutdated { outdated: true });
    }

    fn handle_type_cell_long_press(&mut self, row: usize) {
        let state = self.store.state();
        if row >= state.quote.len() || state.quote.is_sentinel(row) {
            return;
        }
        self.store.dispatch(Action::ClearSelection);
        self.store.dispatch(Action::ToggleSelection { row });
        self.open_batch_type_dialog();
    }

    fn handle_type_button_long_press(&mut self) {
        if self.settings.batch_select_scope == BatchSelectScope::Populated {
            let populated: Vec<usize> = self
                .store
                .state()
                .quote
                .items()
                .iter()
                .enumerate()
                .filter(|(_, item)| item.has_dimensions())
                .map(|(row, _)| row)
                .collect();
            if !populated.is_empty() {
                self.store.dispatch(Action::ClearSelection);
                for row in populated {
                    self.store.dispatch(Action::ToggleSelection { row });
                }
            }
        }
        self.open_batch_type_dialog();
    }

    /// Build the batch fabric-type dialog: one row per configured type, the
    /// code as the button and the matrix name as its description.
    fn open_batch_type_dialog(&mut self) {
        let state = self.store.state();
        if state.selection.is_empty() {
            self.gateway.notify(Notification::info(
                "Please select one or more rows first, or long-press the 'Type' button to select all.",
            ));
            return;
        }

        let rows = state.selection.rows().to_vec();
        let layout = self
            .store
            .catalog()
            .sequence()
            .iter()
            .map(|code| {
                let description = self
                    .store
                    .catalog()
                    .price_matrix(code)
                    .map(|matrix| matrix.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string());
                vec![
                    DialogCell::button(
                        code.clone(),
                        DialogEffect::AssignFabricType { rows: rows.clone(), code: code.clone() },
                    ),
                    DialogCell::text(description),
                ]
            })
            .collect();

        self.gateway.confirm(ConfirmationRequest {
            message: format!("Set fabric type for selected rows ({}):", rows.len()),
            layout,
            position: DialogPosition::BottomThird,
        });
    }

    fn handle_calculate(&mut self) {
        let outcome =
            self.calculator.calculate_and_sum(&self.store.state().quote, self.strategy.as_ref());
        self.store.dispatch(Action::SetQuoteData { quote: outcome.quote });

        match outcome.first_error {
            Some(err) => {
                self.store.dispatch(Action::SetSumOutdated { outdated: true });
                self.gateway.notify(Notification::error(err.message));
                self.store.dispatch(Action::SetActiveCell { row: err.row, column: err.column });
            }
            None => self.store.dispatch(Action::SetSumOutdated { outdated: false }),
        }
    }

    fn handle_save(&mut self) {
        let outcome = self.persistence.save_to_json(&self.store.state().quote);
        let note = if outcome.success {
            Notification::info(outcome.message)
        } else {
            Notification::error(outcome.message)
        };
        self.gateway.notify(note);
    }

    fn handle_export(&mut self) {
        let outcome = self.persistence.export_to_csv(&self.store.state().quote);
        let note = if outcome.success {
            Notification::info(outcome.message)
        } else {
            Notification::error(outcome.message)
        };
        self.gateway.notify(note);
    }

    fn handle_reset(&mut self) {
        self.gateway.confirm(ConfirmationRequest {
            message: "Are you sure you want to clear all data and start a new quote?".to_string(),
            layout: vec![vec![
                DialogCell::button("Confirm Reset", DialogEffect::ResetQuote),
                DialogCell::secondary_button("Cancel", DialogEffect::Cancel),
            ]],
            position: DialogPosition::Center,
        });
    }

    // --- helpers ---

    /// Move focus and seed the input buffer from the target cell's value.
    fn relocate(&mut self, target: CellRef) {
        self.store.dispatch(Action::SetActiveCell { row: target.row, column: target.column });
        let seed = self
            .store
            .state()
            .quote
            .item(target.row)
            .and_then(|item| item.numeric_value(target.column))
            .map(Item::format_dimension)
            .unwrap_or_default();
        self.store.dispatch(Action::SetInputBuffer { value: seed });
    }

    /// Guard for effects resolved after the collection may have changed.
    fn row_is_data(&self, row: usize) -> bool {
        let state = self.store.state();
        row < state.quote.len() && !state.quote.is_sentinel(row)
    }
}

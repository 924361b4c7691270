//! Notification and confirmation value objects.
//!
//! Confirmation layouts are data, not closures: each button names a
//! `DialogEffect` that the controller resolves when the user picks it. The
//! dialog collaborator renders the layout and reports the chosen effect back;
//! dismissing the dialog simply resolves nothing.

use serde::{Deserialize, Serialize};

use quotegrid_core::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Error,
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Info }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Error }
    }
}

/// What happens when a dialog button is chosen. Effects capture their row
/// targets at dialog-open time; the controller re-validates them on apply in
/// case the collection changed underneath a slow decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DialogEffect {
    DeleteRow { row: usize },
    ClearRow { row: usize },
    AssignFabricType { rows: Vec<usize>, code: String },
    ResetQuote,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogStyle {
    #[default]
    Primary,
    Secondary,
}

/// One cell in a confirmation layout row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DialogCell {
    Button { label: String, style: DialogStyle, effect: DialogEffect },
    Text { label: String },
}

impl DialogCell {
    pub fn button(label: impl Into<String>, effect: DialogEffect) -> Self {
        Self::Button { label: label.into(), style: DialogStyle::Primary, effect }
    }

    pub fn secondary_button(label: impl Into<String>, effect: DialogEffect) -> Self {
        Self::Button { label: label.into(), style: DialogStyle::Secondary, effect }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::Text { label: label.into() }
    }
}

/// Where the dialog collaborator should place the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogPosition {
    #[default]
    Center,
    BottomThird,
}

/// A message plus rows of selectable actions; at most one effect executes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    pub message: String,
    pub layout: Vec<Vec<DialogCell>>,
    pub position: DialogPosition,
}

impl ConfirmationRequest {
    /// Every effect reachable from this layout, in reading order.
    pub fn effects(&self) -> impl Iterator<Item = &DialogEffect> {
        self.layout.iter().flatten().filter_map(|cell| match cell {
            DialogCell::Button { effect, .. } => Some(effect),
            DialogCell::Text { .. } => None,
        })
    }
}

/// First validation error reported by the calculation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcError {
    pub message: String,
    pub row: usize,
    pub column: Column,
}

/// Outbound boundary to the notification/confirmation collaborator.
pub trait NotificationGateway {
    fn notify(&mut self, note: Notification);
    fn confirm(&mut self, request: ConfirmationRequest);
}

/// Gateway that records everything it is asked to show. Used by tests to
/// assert on refusals and dialog layouts without a UI.
#[derive(Debug, Default)]
pub struct NotificationCollector {
    pub notifications: Vec<Notification>,
    pub confirmations: Vec<ConfirmationRequest>,
}

impl NotificationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn last_confirmation(&self) -> Option<&ConfirmationRequest> {
        self.confirmations.last()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
        self.confirmations.clear();
    }
}

impl NotificationGateway for NotificationCollector {
    fn notify(&mut self, note: Notification) {
        self.notifications.push(note);
    }

    fn confirm(&mut self, request: ConfirmationRequest) {
        self.confirmations.push(request);
    }
}

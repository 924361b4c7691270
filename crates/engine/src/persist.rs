//! Persistence boundary.
//!
//! File formats and paths belong to the io crate; the controller only sees
//! this trait and surfaces the outcome message to the user.

use crate::quote::QuoteData;

/// User-facing result of a save or export.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

impl SaveOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// The persistence collaborator interface.
pub trait Persistence {
    fn save_to_json(&mut self, quote: &QuoteData) -> SaveOutcome;
    fn export_to_csv(&mut self, quote: &QuoteData) -> SaveOutcome;
}

/// No-op persistence for tests and headless sessions.
#[derive(Debug, Default)]
pub struct NullPersistence;

impl Persistence for NullPersistence {
    fn save_to_json(&mut self, _quote: &QuoteData) -> SaveOutcome {
        SaveOutcome::failed("No save location configured")
    }

    fn export_to_csv(&mut self, _quote: &QuoteData) -> SaveOutcome {
        SaveOutcome::failed("No export location configured")
    }
}

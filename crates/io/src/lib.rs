// File I/O operations

pub mod csv;
pub mod json;

use std::path::PathBuf;

use chrono::Local;

use quotegrid_engine::persist::{Persistence, SaveOutcome};
use quotegrid_engine::QuoteData;

/// File-backed persistence: saves and exports into a target directory with
/// timestamped names, reporting a user-facing outcome either way.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    dir: PathBuf,
}

impl FilePersistence {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Build from the `file.exportDir` setting, falling back to the current
    /// directory when none is configured.
    pub fn from_export_dir(dir: Option<&str>) -> Self {
        match dir {
            Some(dir) => Self::new(dir),
            None => Self::new("."),
        }
    }

    fn target(&self, prefix: &str, extension: &str) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        self.dir.join(format!("{}-{}.{}", prefix, stamp, extension))
    }
}

impl Persistence for FilePersistence {
    fn save_to_json(&mut self, quote: &QuoteData) -> SaveOutcome {
        let path = self.target("quote", "json");
        match json::save(quote, &path) {
            Ok(()) => SaveOutcome::ok(format!("Quote saved to {}", path.display())),
            Err(e) => SaveOutcome::failed(format!("Save failed: {}", e)),
        }
    }

    fn export_to_csv(&mut self, quote: &QuoteData) -> SaveOutcome {
        let path = self.target("quote", "csv");
        match crate::csv::export(quote, &path) {
            Ok(()) => SaveOutcome::ok(format!("Quote exported to {}", path.display())),
            Err(e) => SaveOutcome::failed(format!("Export failed: {}", e)),
        }
    }
}

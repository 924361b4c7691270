// Fabric catalog
// Loaded from ~/.config/quotegrid/fabrics.toml

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Pricing data for one fabric type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceMatrix {
    /// Human-readable fabric name, shown next to the code in dialogs.
    pub name: String,
    /// Price per square metre.
    pub rate: f64,
    /// Smallest drop (height) the fabric can be cut to, in mm.
    #[serde(default)]
    pub min_drop: f64,
}

/// The ordered fabric-type sequence and its per-type price matrices.
///
/// The sequence order defines how the TYPE key cycles. Lookups that miss are
/// `None`; display fallback ("Unknown") is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FabricCatalog {
    sequence: Vec<String>,
    matrices: HashMap<String, PriceMatrix>,
}

impl Default for FabricCatalog {
    fn default() -> Self {
        let mut matrices = HashMap::new();
        matrices.insert(
            "BO".to_string(),
            PriceMatrix { name: "Blockout".to_string(), rate: 95.0, min_drop: 300.0 },
        );
        matrices.insert(
            "BO1".to_string(),
            PriceMatrix { name: "Blockout Plus".to_string(), rate: 110.0, min_drop: 300.0 },
        );
        matrices.insert(
            "LF".to_string(),
            PriceMatrix { name: "Light Filter".to_string(), rate: 85.0, min_drop: 300.0 },
        );
        matrices.insert(
            "SN".to_string(),
            PriceMatrix { name: "Sunscreen".to_string(), rate: 120.0, min_drop: 300.0 },
        );
        Self {
            sequence: vec![
                "BO".to_string(),
                "BO1".to_string(),
                "LF".to_string(),
                "SN".to_string(),
            ],
            matrices,
        }
    }
}

impl FabricCatalog {
    /// Build a catalog from an explicit sequence and matrix table (tests,
    /// embedded product configs).
    pub fn new(sequence: Vec<String>, matrices: HashMap<String, PriceMatrix>) -> Self {
        Self { sequence, matrices }
    }

    /// The configured type codes, in cycle order.
    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    /// Price matrix for a type code, if configured.
    pub fn price_matrix(&self, code: &str) -> Option<&PriceMatrix> {
        self.matrices.get(code)
    }

    /// The code that follows `code` in the sequence, wrapping at the end.
    /// Unknown or unset codes start the cycle at the first configured type.
    pub fn next_in_sequence(&self, code: Option<&str>) -> Option<&str> {
        let first = self.sequence.first()?;
        let Some(code) = code else {
            return Some(first);
        };
        match self.sequence.iter().position(|c| c == code) {
            Some(pos) => Some(&self.sequence[(pos + 1) % self.sequence.len()]),
            None => Some(first),
        }
    }

    /// Get the catalog file path.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quotegrid");
        config_dir.join("fabrics.toml")
    }

    /// Load the catalog from disk, falling back to the built-in defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("Error parsing fabrics.toml: {}", e);
                    eprintln!("Using built-in fabric catalog");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading fabrics.toml: {}", e);
                Self::default()
            }
        }
    }

    /// Save the catalog to disk.
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, contents).map_err(|e| e.to_string())
    }
}

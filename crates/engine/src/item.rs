use serde::{Deserialize, Serialize};

use quotegrid_core::Column;

/// Sub-data for a drive accessory attached to a row.
///
/// Presence of the accessory is the `Option` on the item field; the price is
/// filled in by the calculation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// One row of the quote: measurements, fabric type, drive accessories.
///
/// `line_price` is owned by the calculation collaborator — the editing core
/// only ever clears it (row clear, reset).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub width: Option<f64>,
    pub height: Option<f64>,
    #[serde(rename = "fabricType")]
    pub fabric_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winder: Option<Accessory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motor: Option<Accessory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dual: Option<Accessory>,
    #[serde(rename = "linePrice", skip_serializing_if = "Option::is_none")]
    pub line_price: Option<f64>,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when any editable field is set. Rows without data are treated as
    /// placeholders by insert validation and by the calculation pass.
    pub fn has_data(&self) -> bool {
        self.width.is_some() || self.height.is_some() || self.fabric_type.is_some()
    }

    /// True when either measurement is entered.
    pub fn has_dimensions(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// Committed value of a numeric column.
    pub fn numeric_value(&self, column: Column) -> Option<f64> {
        match column {
            Column::Width => self.width,
            Column::Height => self.height,
            _ => None,
        }
    }

    /// Set the committed value of a numeric column. Other columns are inert.
    pub fn set_numeric_value(&mut self, column: Column, value: f64) {
        match column {
            Column::Width => self.width = Some(value),
            Column::Height => self.height = Some(value),
            _ => {}
        }
    }

    /// Reset every editable field to unset, keeping the row in place.
    pub fn clear_editable(&mut self) {
        *self = Self::default();
    }

    /// Display form of a dimension: integers without the trailing ".0".
    pub fn format_dimension(value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{}", value as i64)
        } else {
            format!("{}", value)
        }
    }
}

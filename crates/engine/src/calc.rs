//! Calculation boundary.
//!
//! The real pricing engine is an external collaborator; this module defines
//! the contract plus a reference implementation (area × rate) so the
//! calculate-and-sum path is exercisable end to end. The contract: validate
//! rows in index order, stop at the first offending cell, and always return
//! the (possibly partially priced) quote.

use quotegrid_config::FabricCatalog;
use quotegrid_core::Column;

use crate::dialog::CalcError;
use crate::item::Item;
use crate::quote::QuoteData;

/// Result of a calculation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcOutcome {
    pub quote: QuoteData,
    pub first_error: Option<CalcError>,
}

/// Per-product pricing rules.
pub trait PricingStrategy {
    /// Check a data row before pricing. Failures name the offending column.
    fn validate(&self, item: &Item) -> Result<(), (Column, String)>;

    /// Price a validated row.
    fn line_price(&self, item: &Item) -> f64;
}

/// The calculation collaborator interface.
pub trait Calculator {
    fn calculate_and_sum(&self, quote: &QuoteData, strategy: &dyn PricingStrategy) -> CalcOutcome;
}

/// Reference calculator: prices each data row with the strategy and sums the
/// line prices into the quote total.
#[derive(Debug, Default)]
pub struct AreaCalculator;

impl Calculator for AreaCalculator {
    fn calculate_and_sum(&self, quote: &QuoteData, strategy: &dyn PricingStrategy) -> CalcOutcome {
        let mut updated = quote.clone();
        let rows: Vec<usize> = quote.data_rows().map(|(row, _)| row).collect();

        for row in rows {
            let item = match updated.item(row) {
                Some(item) => item.clone(),
                None => continue,
            };
            if let Err((column, message)) = strategy.validate(&item) {
                updated.total = None;
                return CalcOutcome {
                    quote: updated,
                    first_error: Some(CalcError {
                        message: format!("Row {}: {}", row + 1, message),
                        row,
                        column,
                    }),
                };
            }
            let price = strategy.line_price(&item);
            updated.update_row(row, |item| item.line_price = Some(price));
        }

        let total = updated.data_rows().filter_map(|(_, item)| item.line_price).sum();
        updated.total = Some(total);
        CalcOutcome { quote: updated, first_error: None }
    }
}

/// Roller-blind pricing: fabric rate per square metre (dimensions in mm),
/// accessory prices added on top.
#[derive(Debug)]
pub struct RollerBlindStrategy {
    catalog: FabricCatalog,
}

impl RollerBlindStrategy {
    pub fn new(catalog: FabricCatalog) -> Self {
        Self { catalog }
    }
}

impl PricingStrategy for RollerBlindStrategy {
    fn validate(&self, item: &Item) -> Result<(), (Column, String)> {
        let Some(width) = item.width else {
            return Err((Column::Width, "width is required".to_string()));
        };
        let Some(height) = item.height else {
            return Err((Column::Height, "height is required".to_string()));
        };
        let Some(code) = item.fabric_type.as_deref() else {
            return Err((Column::FabricType, "fabric type is required".to_string()));
        };
        let Some(matrix) = self.catalog.price_matrix(code) else {
            return Err((Column::FabricType, format!("unknown fabric type '{}'", code)));
        };
        if width <= 0.0 {
            return Err((Column::Width, "width must be positive".to_string()));
        }
        if height < matrix.min_drop {
            return Err((
                Column::Height,
                format!("height is below the {}mm minimum drop", matrix.min_drop),
            ));
        }
        Ok(())
    }

    fn line_price(&self, item: &Item) -> f64 {
        let width = item.width.unwrap_or(0.0);
        let height = item.height.unwrap_or(0.0);
        let rate = item
            .fabric_type
            .as_deref()
            .and_then(|code| self.catalog.price_matrix(code))
            .map(|matrix| matrix.rate)
            .unwrap_or(0.0);

        let area_m2 = (width / 1000.0) * (height / 1000.0);
        let accessories: f64 = [&item.winder, &item.motor, &item.dual]
            .into_iter()
            .flatten()
            .filter_map(|acc| acc.price)
            .sum();

        area_m2 * rate + accessories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(width: f64, height: f64, fabric: &str) -> Item {
        Item {
            width: Some(width),
            height: Some(height),
            fabric_type: Some(fabric.to_string()),
            ..Item::default()
        }
    }

    fn strategy() -> RollerBlindStrategy {
        RollerBlindStrategy::new(FabricCatalog::default())
    }

    #[test]
    fn test_prices_and_sums_valid_rows() {
        let quote = QuoteData::from_items(vec![row(1000.0, 1000.0, "BO"), row(2000.0, 1000.0, "BO")]);
        let outcome = AreaCalculator.calculate_and_sum(&quote, &strategy());

        assert!(outcome.first_error.is_none());
        let items = outcome.quote.items();
        assert_eq!(items[0].line_price, Some(95.0));
        assert_eq!(items[1].line_price, Some(190.0));
        assert_eq!(outcome.quote.total, Some(285.0));
    }

    #[test]
    fn test_first_error_names_offending_cell() {
        let mut missing_height = row(1000.0, 1000.0, "BO");
        missing_height.height = None;
        let quote = QuoteData::from_items(vec![row(1000.0, 1000.0, "BO"), missing_height]);

        let outcome = AreaCalculator.calculate_and_sum(&quote, &strategy());
        let error = outcome.first_error.expect("expected a validation error");
        assert_eq!(error.row, 1);
        assert_eq!(error.column, Column::Height);
        assert!(error.message.starts_with("Row 2:"));
        assert_eq!(outcome.quote.total, None);
    }

    #[test]
    fn test_min_drop_enforced() {
        let quote = QuoteData::from_items(vec![row(1000.0, 100.0, "BO")]);
        let outcome = AreaCalculator.calculate_and_sum(&quote, &strategy());
        let error = outcome.first_error.expect("expected a min-drop error");
        assert_eq!(error.column, Column::Height);
    }

    #[test]
    fn test_accessories_added_to_line_price() {
        let mut item = row(1000.0, 1000.0, "BO");
        item.winder = Some(crate::item::Accessory { price: Some(15.0) });
        let quote = QuoteData::from_items(vec![item]);

        let outcome = AreaCalculator.calculate_and_sum(&quote, &strategy());
        assert_eq!(outcome.quote.items()[0].line_price, Some(110.0));
    }

    #[test]
    fn test_sentinel_row_is_not_priced() {
        let quote = QuoteData::from_items(vec![row(1000.0, 1000.0, "BO")]);
        let outcome = AreaCalculator.calculate_and_sum(&quote, &strategy());
        let sentinel = outcome.quote.sentinel_index();
        assert_eq!(outcome.quote.items()[sentinel].line_price, None);
    }
}

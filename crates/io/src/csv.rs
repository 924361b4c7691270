// Quote CSV export

use std::path::Path;

use quotegrid_engine::{Item, QuoteData};

const HEADERS: [&str; 8] =
    ["No.", "Width", "Height", "Fabric", "Winder", "Motor", "Dual", "Price"];

/// Export the quote rows to CSV. The trailing placeholder row is skipped;
/// empty mid-quote rows are kept so sequence numbers stay meaningful.
pub fn export(quote: &QuoteData, path: &Path) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| e.to_string())?;
    writer.write_record(HEADERS).map_err(|e| e.to_string())?;

    let sentinel = quote.sentinel_index();
    for (row, item) in quote.items().iter().enumerate() {
        if row == sentinel {
            continue;
        }
        writer
            .write_record([
                (row + 1).to_string(),
                dimension(item.width),
                dimension(item.height),
                item.fabric_type.clone().unwrap_or_default(),
                flag(item.winder.is_some()),
                flag(item.motor.is_some()),
                flag(item.dual.is_some()),
                item.line_price.map(|p| format!("{:.2}", p)).unwrap_or_default(),
            ])
            .map_err(|e| e.to_string())?;
    }

    if let Some(total) = quote.total {
        writer
            .write_record(["", "", "", "", "", "", "Total", &format!("{:.2}", total)])
            .map_err(|e| e.to_string())?;
    }

    writer.flush().map_err(|e| e.to_string())
}

fn dimension(value: Option<f64>) -> String {
    value.map(Item::format_dimension).unwrap_or_default()
}

fn flag(present: bool) -> String {
    if present { "Y".to_string() } else { String::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotegrid_engine::Accessory;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_export_skips_sentinel_and_formats_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quote.csv");

        let mut quote = QuoteData::from_items(vec![Item {
            width: Some(1200.0),
            height: Some(2100.0),
            fabric_type: Some("BO".to_string()),
            winder: Some(Accessory { price: Some(15.0) }),
            line_price: Some(254.4),
            ..Item::default()
        }]);
        quote.total = Some(254.4);

        export(&quote, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 3); // header, one data row, total row
        assert_eq!(lines[1], "1,1200,2100,BO,Y,,,254.40");
        assert!(lines[2].ends_with("Total,254.40"));
    }

    #[test]
    fn test_export_without_total_omits_total_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quote.csv");

        let quote = QuoteData::from_items(vec![Item { width: Some(900.0), ..Item::default() }]);
        export(&quote, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}

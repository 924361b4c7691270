// Quote JSON save/load

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use quotegrid_engine::QuoteData;

/// Write the quote as pretty-printed JSON.
pub fn save(quote: &QuoteData, path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| e.to_string())?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, quote).map_err(|e| e.to_string())
}

/// Read a quote back from a JSON file.
pub fn load(path: &Path) -> Result<QuoteData, String> {
    let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotegrid_engine::Item;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quote.json");

        let quote = QuoteData::from_items(vec![
            Item {
                width: Some(1200.0),
                height: Some(2100.0),
                fabric_type: Some("BO".to_string()),
                ..Item::default()
            },
            Item { width: Some(900.0), ..Item::default() },
        ]);

        save(&quote, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, quote);
        // The trailing sentinel row survives the trip
        assert!(!loaded.items().last().unwrap().has_data());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load(&dir.path().join("nope.json")).is_err());
    }
}

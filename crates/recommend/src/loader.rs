use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};
use yatra_common::{Result, YatraError};

use crate::record::{Destination, RecordStore};

/// Dataset row as it appears in the CSV file
///
/// Unknown columns are ignored and absent columns read as empty.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "City", default)]
    city: String,
    #[serde(rename = "State", default)]
    state: String,
    #[serde(rename = "Type", default)]
    place_type: String,
    #[serde(rename = "Significance", default)]
    significance: String,
    #[serde(rename = "Best Time to visit", default)]
    best_time_to_visit: String,
    #[serde(rename = "Google review rating", default)]
    review_rating: String,
}

impl RawRow {
    fn into_destination(self, line: usize) -> Result<Destination> {
        let rating = self.review_rating.trim();
        let review_rating = if rating.is_empty() {
            0.0
        } else {
            rating.parse::<f64>().map_err(|_| {
                YatraError::dataset(format!(
                    "Row {}: invalid review rating '{}' for '{}'",
                    line, rating, self.name
                ))
            })?
        };

        Ok(Destination {
            name: self.name,
            city: self.city,
            state: self.state,
            place_type: self.place_type,
            significance: self.significance,
            best_time_to_visit: self.best_time_to_visit,
            review_rating,
        })
    }
}

/// Load the destination dataset from a CSV file
pub fn load_dataset(path: impl AsRef<Path>) -> Result<RecordStore> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        YatraError::config(format!("Failed to open dataset {}: {}", path.display(), e))
    })?;

    let store = load_from_reader(file)?;
    info!("Dataset loaded - {} destinations from {}", store.len(), path.display());
    Ok(store)
}

/// Load destinations from any CSV source with a header row
pub fn load_from_reader<R: Read>(reader: R) -> Result<RecordStore> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        // Header is line 1
        let line = idx + 2;
        let row = row?;
        if row.name.trim().is_empty() {
            warn!("Row {} has no place name", line);
        }
        records.push(row.into_destination(line)?);
    }

    Ok(RecordStore::new(records))
}

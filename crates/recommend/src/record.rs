use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One destination row of the dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub city: String,
    pub state: String,

    /// Free-form category label, may hold several sub-types
    #[serde(rename = "type")]
    pub place_type: String,

    pub significance: String,
    pub best_time_to_visit: String,

    /// Review rating in [0.0, 5.0]; 0.0 when the dataset has no value
    pub review_rating: f64,
}

/// Distinct values offered for filtering and place selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub names: Vec<String>,
    pub states: Vec<String>,
    pub types: Vec<String>,
    pub seasons: Vec<String>,
}

/// In-memory destination table
///
/// Row position is the record identity used by the vector space.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Destination>,
}

impl RecordStore {
    pub fn new(records: Vec<Destination>) -> Self {
        Self { records }
    }

    /// Position of the first record named `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Destination> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Destination] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, de-duplicated names
    pub fn names(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.name.as_str()))
    }

    /// Sorted, de-duplicated values for every filterable column
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            names: self.names(),
            states: distinct(self.records.iter().map(|r| r.state.as_str())),
            types: distinct(self.records.iter().map(|r| r.place_type.as_str())),
            seasons: distinct(self.records.iter().map(|r| r.best_time_to_visit.as_str())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, state: &str, place_type: &str) -> Destination {
        Destination {
            name: name.to_string(),
            state: state.to_string(),
            place_type: place_type.to_string(),
            ..Destination::default()
        }
    }

    #[test]
    fn test_position_returns_first_match() {
        let store = RecordStore::new(vec![
            place("Fort", "Rajasthan", "Fort"),
            place("Lake", "Rajasthan", "Lake"),
            place("Fort", "Goa", "Fort"),
        ]);
        assert_eq!(store.position("Fort"), Some(0));
        assert_eq!(store.position("Lake"), Some(1));
        assert_eq!(store.position("fort"), None);
    }

    #[test]
    fn test_filter_options_are_sorted_and_unique() {
        let store = RecordStore::new(vec![
            place("Calangute", "Goa", "Beach"),
            place("Amber Fort", "Rajasthan", "Fort"),
            place("Baga", "Goa", "Beach"),
            place("Unknown", "", ""),
        ]);
        let options = store.filter_options();
        assert_eq!(options.names, vec!["Amber Fort", "Baga", "Calangute", "Unknown"]);
        assert_eq!(options.states, vec!["Goa", "Rajasthan"]);
        assert_eq!(options.types, vec!["Beach", "Fort"]);
        assert!(options.seasons.is_empty());
    }
}

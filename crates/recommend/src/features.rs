use crate::record::{Destination, RecordStore};

/// Text describing a destination for vectorization: city, type and
/// significance joined by single spaces
pub fn combined_features(destination: &Destination) -> String {
    format!(
        "{} {} {}",
        destination.city, destination.place_type, destination.significance
    )
}

/// Feature text for every record, in store order
pub fn build_corpus(store: &RecordStore) -> Vec<String> {
    store.records().iter().map(combined_features).collect()
}

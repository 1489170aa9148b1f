use serde::Deserialize;

use crate::record::Destination;

/// Optional structured predicates applied after ranking
///
/// Unset predicates always pass. Blank strings and a non-positive minimum
/// rating count as unset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterSet {
    /// Case-insensitive exact match on state, ignoring surrounding whitespace
    #[serde(default)]
    pub state: Option<String>,

    /// Inclusive lower bound on review rating
    #[serde(default)]
    pub min_rating: Option<f64>,

    /// Case-insensitive substring of the type label
    #[serde(default, rename = "type")]
    pub place_type: Option<String>,

    /// Case-insensitive substring of the best time to visit
    #[serde(default)]
    pub season: Option<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        active(&self.state).is_none()
            && self.active_min_rating().is_none()
            && active(&self.place_type).is_none()
            && active(&self.season).is_none()
    }

    fn active_min_rating(&self) -> Option<f64> {
        self.min_rating.filter(|r| *r > 0.0)
    }

    /// Check a destination against every active predicate
    pub fn matches(&self, destination: &Destination) -> bool {
        if let Some(state) = active(&self.state) {
            if destination.state.trim().to_lowercase() != state.trim().to_lowercase() {
                return false;
            }
        }

        if let Some(min_rating) = self.active_min_rating() {
            if destination.review_rating < min_rating {
                return false;
            }
        }

        if let Some(place_type) = active(&self.place_type) {
            if !contains_ignore_case(&destination.place_type, place_type) {
                return false;
            }
        }

        if let Some(season) = active(&self.season) {
            if !contains_ignore_case(&destination.best_time_to_visit, season) {
                return false;
            }
        }

        true
    }

    /// Keep the first `limit` items whose destination matches, in input order
    pub fn apply<'a, T, I>(&self, ranked: I, limit: usize) -> Vec<T>
    where
        I: IntoIterator<Item = (T, &'a Destination)>,
    {
        ranked
            .into_iter()
            .filter(|(_, destination)| self.matches(destination))
            .map(|(item, _)| item)
            .take(limit)
            .collect()
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

use serde::{Deserialize, Serialize};
use yatra_recommend::FilterSet;

/// Query string for `/recommend/place`
#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    /// Source place name
    pub name: String,

    pub state: Option<String>,
    pub min_rating: Option<f64>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub season: Option<String>,
}

impl PlaceQuery {
    pub fn filters(&self) -> FilterSet {
        FilterSet {
            state: self.state.clone(),
            min_rating: self.min_rating,
            place_type: self.place_type.clone(),
            season: self.season.clone(),
        }
    }
}

/// Query string for `/recommend/keyword`
#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    #[serde(default)]
    pub q: String,
}

/// Place name listing
#[derive(Debug, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub places: Vec<String>,
    pub count: usize,
}

/// Engine health and size
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub destinations: usize,
    pub vocabulary_size: usize,
}

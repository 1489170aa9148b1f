use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;
use crate::types::PlacesResponse;

/// Sorted place names for selection
#[get("/places")]
pub async fn places(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    let places = state.engine.store().names();
    let count = places.len();

    Ok(HttpResponse::Ok().json(PlacesResponse { places, count }))
}

/// Distinct states, types and seasons for the filter controls
#[get("/filters")]
pub async fn filters(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.engine.filter_options()))
}

use actix_web::{get, http::StatusCode, web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::state::AppState;
use crate::types::{KeywordQuery, PlaceQuery};

/// Places similar to a named place
#[get("/recommend/place")]
pub async fn recommend_place(
    query: web::Query<PlaceQuery>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    info!("Place recommendation requested: {}", query.name);

    let outcome = state
        .engine
        .recommend_similar_to_place(&query.name, &query.filters());

    Ok(HttpResponse::build(status(outcome.status_code())).json(outcome))
}

/// Places matching free-text keywords
#[get("/recommend/keyword")]
pub async fn recommend_keyword(
    query: web::Query<KeywordQuery>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    info!("Keyword recommendation requested: {}", query.q);

    let outcome = state.engine.recommend_by_keyword(&query.q);

    Ok(HttpResponse::build(status(outcome.status_code())).json(outcome))
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;
    use yatra_common::AppConfig;
    use yatra_recommend::{Destination, RecommendationEngine, RecordStore};

    fn destination(name: &str, city: &str, state: &str, place_type: &str, rating: f64) -> Destination {
        Destination {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            place_type: place_type.to_string(),
            significance: "Recreational".to_string(),
            best_time_to_visit: "Evening".to_string(),
            review_rating: rating,
        }
    }

    fn app_state() -> web::Data<Arc<AppState>> {
        let engine = RecommendationEngine::build(RecordStore::new(vec![
            destination("Baga Beach", "Goa", "Goa", "Beach", 4.4),
            destination("Colva Beach", "Goa", "Goa", "Beach", 4.6),
            destination("Kovalam Beach", "Thiruvananthapuram", "Kerala", "Beach", 4.4),
            destination("Amber Fort", "Jaipur", "Rajasthan", "Fort", 4.6),
        ]))
        .unwrap();
        web::Data::new(Arc::new(AppState::with_engine(
            AppConfig::default(),
            Arc::new(engine),
        )))
    }

    #[actix_web::test]
    async fn test_place_recommendation() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .service(recommend_place),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/recommend/place?name=Baga%20Beach")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ranked");
        assert_eq!(body["recommendations"][0]["name"], "Colva Beach");
    }

    #[actix_web::test]
    async fn test_place_recommendation_with_filters() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .service(recommend_place),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/recommend/place?name=Baga%20Beach&state=kerala&min_rating=4.0")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let recommendations = body["recommendations"].as_array().unwrap();
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0]["name"], "Kovalam Beach");
    }

    #[actix_web::test]
    async fn test_place_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .service(recommend_place),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/recommend/place?name=Atlantis")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_keyword_recommendation() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .service(recommend_keyword),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/recommend/keyword?q=fort")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ranked");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 1);
        assert_eq!(body["recommendations"][0]["name"], "Amber Fort");
    }

    #[actix_web::test]
    async fn test_keyword_empty_query() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .service(recommend_keyword),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/recommend/keyword?q=%20%20")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_keyword_no_matches() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .service(recommend_keyword),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/recommend/keyword?q=skiing")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "no_matches");
    }
}

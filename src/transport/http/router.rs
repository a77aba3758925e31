use crate::domain::model::{City, Hotel};
use crate::domain::report::SortDirection;
use crate::domain::Message;
use crate::transport::http::handlers::{api, combo_box, form, health, regexp, reports};
use crate::transport::http::types::{ApiResponse, HighlightRequest};
use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        api::api_regexp_handler,
        api::api_hotels_handler,
        api::api_cities_handler
    ),
    components(schemas(ApiResponse, HighlightRequest, Message, Hotel, City, SortDirection))
)]
#[allow(dead_code)]
pub struct ApiDoc;

/// HTML endpoints answer both GET and POST; a POST with `_ajax=true` gets JSON fragments.
pub fn create_router(
    app_state: crate::transport::http::types::AppState,
    static_dir: impl AsRef<Path>,
) -> Router {
    Router::new()
        .route("/", get(form::index_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/regexp",
            get(regexp::regexp_handler).post(regexp::regexp_handler),
        )
        .route(
            "/hotels",
            get(reports::hotels_handler).post(reports::hotels_handler),
        )
        .route(
            "/plain-hotels",
            get(reports::plain_hotels_handler).post(reports::plain_hotels_handler),
        )
        .route(
            "/cities",
            get(reports::cities_handler).post(reports::cities_handler),
        )
        .route(
            "/combo-box",
            get(combo_box::combo_box_handler).post(combo_box::combo_box_handler),
        )
        .route("/form", get(form::form_handler).post(form::form_handler))
        .route("/api/regexp", post(api::api_regexp_handler))
        .route("/api/hotels", get(api::api_hotels_handler))
        .route("/api/cities", get(api::api_cities_handler))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(app_state)
}

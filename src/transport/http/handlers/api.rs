use crate::domain::report::{Report, ReportRow, RowQuery, SortDirection, SortSpec};
use crate::transport::http::types::{
    json_422, query_400, ApiResponse, AppState, HighlightRequest, ReportParams,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::borrow::Borrow;

#[utoipa::path(
    post,
    path = "/api/regexp",
    request_body = HighlightRequest,
    responses(
        (
            status = 200,
            description = "Highlighted HTML fragment, or the highlighting error",
            body = ApiResponse
        ),
        (status = 422, description = "Malformed request body", body = ApiResponse)
    )
)]
pub async fn api_regexp_handler(
    State(state): State<AppState>,
    body: Result<Json<HighlightRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(r)) => r,
        Err(e) => return json_422(e, "{ \"text\": string, \"regexp\": string }"),
    };
    let response = match state.highlighter.try_highlight(&request.text, &request.regexp) {
        Ok(html) => ApiResponse::ok(serde_json::json!({ "html": html })),
        Err(e) => ApiResponse::failed(e.describe()),
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn row_query<R: ReportRow>(
    report: &Report<R>,
    params: &ReportParams,
    secondary: &str,
) -> RowQuery {
    RowQuery {
        limit: params.limit.unwrap_or(report.default_limit()),
        name_pattern: params.name.clone(),
        secondary_pattern: secondary.to_string(),
        sort: params.sort.as_ref().map(|key| SortSpec {
            key: key.trim().to_string(),
            direction: params
                .dir
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
        }),
    }
}

fn rows_response<R, T>(
    report: &Report<R>,
    source: &[T],
    query: &RowQuery,
    field: &str,
) -> Response
where
    R: ReportRow + Serialize,
    T: Borrow<R>,
{
    let rows = report.select_rows(source, query);
    let data = serde_json::json!({ "count": rows.len(), field: rows });
    (StatusCode::OK, Json(ApiResponse::ok(data))).into_response()
}

#[utoipa::path(
    get,
    path = "/api/hotels",
    params(ReportParams),
    responses(
        (status = 200, description = "Filtered, sorted and limited hotels", body = ApiResponse),
        (status = 400, description = "Malformed query string", body = ApiResponse)
    )
)]
pub async fn api_hotels_handler(
    State(state): State<AppState>,
    params: Result<Query<ReportParams>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(p)) => p,
        Err(e) => return query_400(e),
    };
    let hotels = state.rows.hotels().await;
    let report = &state.reports.hotels;
    let query = row_query(report, &params, &params.city);
    rows_response(report, hotels.as_slice(), &query, "hotels")
}

#[utoipa::path(
    get,
    path = "/api/cities",
    params(ReportParams),
    responses(
        (status = 200, description = "Filtered, sorted and limited cities", body = ApiResponse),
        (status = 400, description = "Malformed query string", body = ApiResponse)
    )
)]
pub async fn api_cities_handler(
    State(state): State<AppState>,
    params: Result<Query<ReportParams>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(p)) => p,
        Err(e) => return query_400(e),
    };
    let cities = state.rows.cities().await;
    let report = &state.reports.cities;
    let query = row_query(report, &params, &params.country);
    rows_response(report, cities.rows(), &query, "cities")
}

use crate::app::Reports;
use crate::domain::Highlighter;
use crate::storage::RowSource;
use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub rows: Arc<RowSource>,
    pub highlighter: Arc<Highlighter>,
    pub reports: Arc<Reports>,
}

impl AppState {
    pub fn new(rows: RowSource, highlighter: Highlighter) -> Self {
        Self {
            rows: Arc::new(rows),
            highlighter: Arc::new(highlighter),
            reports: Arc::new(Reports::new()),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct HighlightRequest {
    /// Subject text, at most the configured number of characters.
    pub text: String,
    /// Regular expression; an empty pattern highlights nothing.
    #[serde(default)]
    pub regexp: String,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportParams {
    /// Case-insensitive substring of the row name.
    #[serde(default)]
    pub name: String,
    /// Case-insensitive substring of the hotel's city name.
    #[serde(default)]
    pub city: String,
    /// Case-insensitive substring of the city's country name.
    #[serde(default)]
    pub country: String,
    /// Row limit; negative values return no rows.
    pub limit: Option<i64>,
    /// Key of a sortable column.
    pub sort: Option<String>,
    /// `asc` (default) or `desc`.
    pub dir: Option<String>,
}

/// A failure response carrying `"<kind>: <message>"` both in the body and the
/// `Error-Message` header.
pub fn error_response(
    status: StatusCode,
    kind: &str,
    message: impl std::fmt::Display,
) -> Response {
    let text = format!("{}: {}", kind, message);
    let mut response = (status, Json(ApiResponse::failed(text.clone()))).into_response();
    if let Ok(value) = HeaderValue::from_str(&text) {
        response.headers_mut().insert("Error-Message", value);
    }
    response
}

pub fn json_422(err: JsonRejection, expected: &str) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "InvalidJson",
        format!("{} (expected: {})", err.body_text(), expected),
    )
}

pub fn query_400(err: QueryRejection) -> Response {
    error_response(StatusCode::BAD_REQUEST, "InvalidQuery", err.body_text())
}

pub fn form_400(err: FormRejection) -> Response {
    error_response(StatusCode::BAD_REQUEST, "InvalidForm", err.body_text())
}

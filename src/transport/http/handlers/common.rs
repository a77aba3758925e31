use crate::domain::report::{Report, ReportRow, RowQuery, SortDirection, SortSpec};
use crate::transport::http::params::{HttpParam, Params, AJAX, DIR, LIMIT, NAME, SORT};
use crate::transport::http::types::form_400;
use axum::extract::rejection::FormRejection;
use axum::http::Method;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;
use tracing::debug;

/// Form extractor shared by the HTML endpoints: axum reads the query string for GET and
/// the urlencoded body for POST.
pub type FormParams = Result<Form<HashMap<String, String>>, FormRejection>;

pub fn params_of(form: FormParams) -> Result<Params, Response> {
    match form {
        Ok(Form(map)) => {
            debug!(params = ?map, "Request parameters");
            Ok(Params::from(map))
        }
        Err(e) => Err(form_400(e)),
    }
}

/// AJAX mode is a POST carrying the `_ajax` flag.
pub fn is_ajax(method: &Method, params: &Params) -> bool {
    method == Method::POST && AJAX.flag(params)
}

/// JSON object of CSS selector to replacement HTML.
pub fn ajax_response<'a>(fragments: impl IntoIterator<Item = (&'a str, String)>) -> Response {
    let map: Map<String, JsonValue> = fragments
        .into_iter()
        .map(|(selector, html)| (selector.to_string(), JsonValue::String(html)))
        .collect();
    Json(JsonValue::Object(map)).into_response()
}

pub fn html_response(html: String) -> Response {
    Html(html).into_response()
}

/// Builds the row query of `report` from request parameters.
///
/// Without `limit_param` the report's default limit always applies.
pub fn report_query<R: ReportRow>(
    report: &Report<R>,
    params: &Params,
    secondary: HttpParam,
    limit_param: bool,
) -> RowQuery {
    let limit = if limit_param {
        LIMIT.parse_or(params, report.default_limit())
    } else {
        report.default_limit()
    };
    let sort_key = SORT.text(params);
    let sort = (!sort_key.trim().is_empty()).then(|| SortSpec {
        key: sort_key.trim().to_string(),
        direction: SortDirection::parse(&DIR.text(params)),
    });
    RowQuery {
        limit,
        name_pattern: NAME.text(params),
        secondary_pattern: secondary.text(params),
        sort,
    }
}

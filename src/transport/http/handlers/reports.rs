use crate::app::reports::{DATA_LICENSE, HOTEL_BASE};
use crate::domain::report::{Report, ReportRow};
use crate::transport::http::handlers::common::{
    ajax_response, html_response, is_ajax, params_of, report_query, FormParams,
};
use crate::transport::http::html::{
    hidden_input, link, render_table, subtitle, text_input, Page, TableView, AJAX_READY_MSG,
    REPORT_ID, REPORT_SELECTOR, SUBTITLE_SELECTOR,
};
use crate::transport::http::params::{HttpParam, Params, CITY, COUNTRY, DIR, LIMIT, NAME, SORT};
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::http::Method;
use axum::response::Response;
use std::borrow::Borrow;

/// Per-endpoint presentation of a report.
struct ReportPage {
    path: &'static str,
    stylesheet: &'static str,
    secondary: HttpParam,
    secondary_label: &'static str,
    /// Shows the row limit input; otherwise the report default applies.
    limit_input: bool,
    show_order: bool,
    footer: String,
}

fn report_response<R, T>(
    report: &Report<R>,
    source: &[T],
    params: &Params,
    ajax: bool,
    page: &ReportPage,
) -> Response
where
    R: ReportRow,
    T: Borrow<R>,
{
    let query = report_query(report, params, page.secondary, page.limit_input);
    let rows = report.select_rows(source, &query);

    let mut carried = vec![
        (NAME.key, query.name_pattern.clone()),
        (page.secondary.key, query.secondary_pattern.clone()),
    ];
    if page.limit_input {
        carried.push((LIMIT.key, query.limit.to_string()));
    }
    let view = TableView {
        path: page.path,
        query: &query,
        carried,
        show_order: page.show_order,
    };
    let table = render_table(report, &rows, &view);

    if ajax {
        return ajax_response([
            (REPORT_SELECTOR, table),
            (SUBTITLE_SELECTOR, AJAX_READY_MSG.to_string()),
        ]);
    }

    let mut body = subtitle();
    body.push_str(&format!(
        "<form method=\"get\" action=\"{}\" class=\"form-inline\" data-ajax=\"true\">\n",
        page.path
    ));
    body.push_str(&text_input(NAME.key, &query.name_pattern, "Name"));
    body.push_str(&text_input(
        page.secondary.key,
        &query.secondary_pattern,
        page.secondary_label,
    ));
    if page.limit_input {
        body.push_str(&text_input(LIMIT.key, &query.limit.to_string(), "Limit"));
    }
    if let Some(sort) = &query.sort {
        body.push_str(&hidden_input(SORT.key, &sort.key));
        body.push_str(&hidden_input(DIR.key, sort.direction.as_str()));
    }
    body.push_str("\n<button class=\"btn btn-primary\">Search</button>\n</form>\n");
    body.push_str(&format!("<div id=\"{}\">{}</div>\n", REPORT_ID, table));
    body.push_str(&format!("<div class=\"footer\">{}</div>", page.footer));

    let html = Page::new(report.title())
        .stylesheet(page.stylesheet)
        .ajax()
        .render(&body);
    html_response(html)
}

fn hotel_footer() -> String {
    format!(
        "Data are from {}, see an original {}",
        link(HOTEL_BASE, "hotelsbase.org"),
        link(DATA_LICENSE, "license")
    )
}

/// Hotel report with a row limit input, star glyphs and home page links.
pub async fn hotels_handler(
    State(state): State<AppState>,
    method: Method,
    form: FormParams,
) -> Response {
    let params = match params_of(form) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let hotels = state.rows.hotels().await;
    let page = ReportPage {
        path: "/hotels",
        stylesheet: "/static/css/hotels.css",
        secondary: CITY,
        secondary_label: "City",
        limit_input: true,
        show_order: true,
        footer: hotel_footer(),
    };
    report_response(
        &state.reports.hotels,
        hotels.as_slice(),
        &params,
        is_ajax(&method, &params),
        &page,
    )
}

/// Hotel report with plain values and the default row limit.
pub async fn plain_hotels_handler(
    State(state): State<AppState>,
    method: Method,
    form: FormParams,
) -> Response {
    let params = match params_of(form) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let hotels = state.rows.hotels().await;
    let page = ReportPage {
        path: "/plain-hotels",
        stylesheet: "/static/css/hotels.css",
        secondary: CITY,
        secondary_label: "City",
        limit_input: false,
        show_order: false,
        footer: format!("Data source: {}", link(HOTEL_BASE, HOTEL_BASE)),
    };
    report_response(
        &state.reports.plain_hotels,
        hotels.as_slice(),
        &params,
        is_ajax(&method, &params),
        &page,
    )
}

pub async fn cities_handler(
    State(state): State<AppState>,
    method: Method,
    form: FormParams,
) -> Response {
    let params = match params_of(form) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let cities = state.rows.cities().await;
    let page = ReportPage {
        path: "/cities",
        stylesheet: "/static/css/hotels.css",
        secondary: COUNTRY,
        secondary_label: "Country",
        limit_input: true,
        show_order: true,
        footer: hotel_footer(),
    };
    report_response(
        &state.reports.cities,
        cities.rows(),
        &params,
        is_ajax(&method, &params),
        &page,
    )
}

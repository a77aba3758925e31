use crate::transport::http::handlers::common::{
    ajax_response, html_response, is_ajax, params_of, FormParams,
};
use crate::transport::http::html::{
    message_html, subtitle, text_area, text_input, Page, AJAX_READY_MSG, CONTROL_CSS,
    OUTPUT_CSS, OUTPUT_SELECTOR, SUBTITLE_SELECTOR,
};
use crate::transport::http::params::{REGEXP, TEXT};
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::http::Method;
use axum::response::Response;
use tracing::debug;

const TITLE: &str = "Regular expression tester";

/// Regular expression tester: highlights every match of `regexp` in `text`.
pub async fn regexp_handler(
    State(state): State<AppState>,
    method: Method,
    form: FormParams,
) -> Response {
    let params = match params_of(form) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let text = TEXT.text(&params);
    let regexp = REGEXP.text(&params);
    let msg = state.highlighter.highlight(&text, &regexp);
    if msg.is_error() {
        debug!(error = %msg, "Highlighting failed");
    }

    if is_ajax(&method, &params) {
        return ajax_response([
            (OUTPUT_SELECTOR, message_html(&msg)),
            (SUBTITLE_SELECTOR, AJAX_READY_MSG.to_string()),
        ]);
    }

    let mut body = subtitle();
    body.push_str("<form method=\"post\" action=\"?\" data-ajax=\"true\">\n");
    body.push_str(&text_input(REGEXP.key, &regexp, "Regular expression"));
    body.push('\n');
    body.push_str(&text_area(TEXT.key, &text, "Plain Text"));
    body.push_str("\n<div><button class=\"btn btn-primary\">Evaluate</button></div>\n");
    body.push_str(&format!(
        "<div class=\"{} {}\">{}</div>\n</form>",
        CONTROL_CSS,
        OUTPUT_CSS,
        message_html(&msg)
    ));

    let page = Page::new(TITLE).stylesheet("/static/css/regexp.css").ajax();
    html_response(page.render(&body))
}

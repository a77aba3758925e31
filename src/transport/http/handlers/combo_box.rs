use crate::domain::escape::escape_html;
use crate::domain::Message;
use crate::transport::http::handlers::common::{
    ajax_response, html_response, is_ajax, params_of, FormParams,
};
use crate::transport::http::html::{
    message_html, subtitle, text_area, Page, AJAX_READY_MSG, CONTROL_CSS, OUTPUT_CSS,
    OUTPUT_SELECTOR, SUBTITLE_SELECTOR,
};
use crate::transport::http::params::{Params, MONTH, TEXT};
use axum::http::Method;
use axum::response::Response;
use std::fmt::Write;

const TITLE: &str = "Combo-box tester";

const MONTHS: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Echoes the selected month and the text, `?` standing for a missing value.
fn result_message(params: &Params) -> Message {
    let month = params.get(MONTH.key).unwrap_or("?");
    let text = params.get(TEXT.key).unwrap_or("?");
    Message::of(format!("{}: {}", escape_html(month), escape_html(text)))
}

fn month_select(selected: &str) -> String {
    let mut out = format!(
        "<select name=\"{}\" required onchange=\"this.form.submit()\">",
        MONTH.key
    );
    for month in MONTHS {
        let attr = if month.eq_ignore_ascii_case(selected.trim()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(out, "<option value=\"{0}\"{1}>{0}</option>", month, attr);
    }
    out.push_str("</select>");
    out
}

pub async fn combo_box_handler(method: Method, form: FormParams) -> Response {
    let params = match params_of(form) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let msg = result_message(&params);

    if is_ajax(&method, &params) {
        return ajax_response([
            (OUTPUT_SELECTOR, message_html(&msg)),
            (SUBTITLE_SELECTOR, AJAX_READY_MSG.to_string()),
        ]);
    }

    let mut body = subtitle();
    body.push_str("<form method=\"post\" action=\"?\" data-ajax=\"true\">\n");
    body.push_str(&month_select(&MONTH.text(&params)));
    body.push('\n');
    body.push_str(&text_area(
        TEXT.key,
        params.get(TEXT.key).unwrap_or_default(),
        "Plain Text",
    ));
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn message_marks_missing_values() {
        let msg = result_message(&Params::default());
        assert_eq!(msg.text(), "?: ?");
    }

    #[test]
    fn message_escapes_user_input() {
        let map: HashMap<String, String> = [
            ("month".to_string(), "MAY".to_string()),
            ("text".to_string(), "<b>hi</b>".to_string()),
        ]
        .into_iter()
        .collect();
        let msg = result_message(&Params::from(map));
        assert_eq!(msg.text(), "MAY: &lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn select_marks_the_chosen_month() {
        let html = month_select("march");
        assert!(html.contains("<option value=\"MARCH\" selected>MARCH</option>"));
        assert_eq!(html.matches("selected").count(), 1);
        assert_eq!(html.matches("<option").count(), 12);
    }
}

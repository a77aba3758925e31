use crate::transport::http::handlers::common::{html_response, params_of, FormParams};
use crate::transport::http::html::{link, text_input, Page};
use crate::transport::http::params::NOTE;
use axum::response::Response;

/// A plain form without scripting; the submitted note is written back into the input.
pub async fn form_handler(form: FormParams) -> Response {
    let params = match params_of(form) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let mut body = String::from("<form class=\"form-inline\">\n");
    body.push_str("<label class=\"control-label\">Note:</label>\n");
    body.push_str(&text_input(NOTE.key, &NOTE.text(&params), "Note"));
    body.push_str("\n<button class=\"btn btn-primary\" type=\"submit\">Submit</button>\n</form>");

    let page = Page::new("Simple form").stylesheet("/static/css/regexp.css");
    html_response(page.render(&body))
}

/// Landing page linking every demo.
pub async fn index_handler() -> Response {
    let demos = [
        ("/regexp", "Regular expression tester"),
        ("/hotels", "Common Hotel Report"),
        ("/plain-hotels", "Simple Hotel Report"),
        ("/cities", "City Report"),
        ("/combo-box", "Combo-box tester"),
        ("/form", "Simple form"),
        ("/swagger-ui", "API documentation"),
    ];
    let mut body = String::from("<ul>\n");
    for (href, label) in demos {
        body.push_str(&format!("<li>{}</li>\n", link(href, label)));
    }
    body.push_str("</ul>");
    html_response(Page::new("Demo AJAX").stylesheet("/static/css/regexp.css").render(&body))
}

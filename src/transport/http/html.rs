//! Minimal HTML page and table rendering for the demo endpoints.

use crate::domain::escape::escape_html;
use crate::domain::report::{CellValue, Report, ReportRow, RowQuery, SortDirection};
use crate::domain::Message;
use std::fmt::Write;

pub const CONTROL_CSS: &str = "form-control";
pub const OUTPUT_CSS: &str = "out";
pub const SUBTITLE_CSS: &str = "subtitle";
pub const REPORT_ID: &str = "report";
pub const AJAX_READY_MSG: &str = "AJAX ready";

/// Selectors of the fragments replaced in AJAX mode.
pub const OUTPUT_SELECTOR: &str = ".out";
pub const SUBTITLE_SELECTOR: &str = ".subtitle";
pub const REPORT_SELECTOR: &str = "#report";

const AJAX_SCRIPT: &str = "/static/js/ajax.js";
const STAR: &str = "\u{1F7CA}&nbsp;";
const MAX_STARS: f32 = 10.0;

pub struct Page {
    title: String,
    stylesheets: Vec<&'static str>,
    ajax: bool,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheets: Vec::new(),
            ajax: false,
        }
    }

    pub fn stylesheet(mut self, href: &'static str) -> Self {
        self.stylesheets.push(href);
        self
    }

    /// Adds the script that submits forms marked `data-ajax` in the background.
    pub fn ajax(mut self) -> Self {
        self.ajax = true;
        self
    }

    /// Renders a complete document around `body`, which must already be escaped.
    pub fn render(&self, body: &str) -> String {
        let mut out = String::with_capacity(body.len() + 512);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"UTF-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_html(&self.title));
        for href in &self.stylesheets {
            let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", escape_html(href));
        }
        if self.ajax {
            let _ = writeln!(out, "<script src=\"{}\" defer></script>", AJAX_SCRIPT);
        }
        out.push_str("</head>\n<body>\n");
        let _ = writeln!(out, "<h1>{}</h1>", escape_html(&self.title));
        out.push_str(body);
        out.push_str("\n</body>\n</html>\n");
        out
    }
}

/// The subtitle line of pages that submit in the background; AJAX responses refresh it.
pub fn subtitle() -> String {
    format!("<div class=\"{}\">{}</div>\n", SUBTITLE_CSS, AJAX_READY_MSG)
}

/// Message as raw HTML; an error is wrapped in an `error` span.
pub fn message_html(msg: &Message) -> String {
    if msg.is_error() {
        format!("<span class=\"error\">{}</span>", msg.text())
    } else {
        msg.text().to_string()
    }
}

pub fn text_input(name: &str, value: &str, placeholder: &str) -> String {
    format!(
        "<input class=\"{}\" name=\"{}\" value=\"{}\" placeholder=\"{}\">",
        CONTROL_CSS,
        escape_html(name),
        escape_html(value),
        escape_html(placeholder)
    )
}

pub fn hidden_input(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
        escape_html(name),
        escape_html(value)
    )
}

pub fn text_area(name: &str, value: &str, placeholder: &str) -> String {
    format!(
        "<textarea class=\"{}\" name=\"{}\" placeholder=\"{}\">{}</textarea>",
        CONTROL_CSS,
        escape_html(name),
        escape_html(placeholder),
        escape_html(value)
    )
}

pub fn link(href: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        escape_html(href),
        escape_html(text)
    )
}

/// `application/x-www-form-urlencoded` encoding of a query string.
pub fn query_string(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn url_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{:02X}", b);
            }
        }
    }
    out
}

/// How a report table is rendered for one request.
pub struct TableView<'a> {
    /// Endpoint the sort links point back to.
    pub path: &'a str,
    pub query: &'a RowQuery,
    /// Extra filter parameters carried by the sort links, besides sorting.
    pub carried: Vec<(&'static str, String)>,
    /// Adds a leading row number column.
    pub show_order: bool,
}

pub fn render_table<R: ReportRow>(report: &Report<R>, rows: &[&R], view: &TableView<'_>) -> String {
    let active = report.effective_sort(view.query);
    let mut out = String::new();
    out.push_str("<table class=\"table report\">\n<thead><tr>");
    if view.show_order {
        out.push_str("<th>Ord.</th>");
    }
    for column in report.columns() {
        if !column.is_sortable() {
            let _ = write!(out, "<th>{}</th>", escape_html(column.label()));
            continue;
        }
        let (direction, marker) = match active {
            Some((c, dir)) if c.key() == column.key() => (
                dir.reverse(),
                match dir {
                    SortDirection::Asc => " \u{2191}",
                    SortDirection::Desc => " \u{2193}",
                },
            ),
            _ => (SortDirection::Asc, ""),
        };
        let mut pairs: Vec<(&str, &str)> = view
            .carried
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        pairs.push(("sort", column.key()));
        pairs.push(("dir", direction.as_str()));
        let href = format!("{}?{}", view.path, query_string(&pairs));
        let _ = write!(
            out,
            "<th class=\"sortable\">{}{}</th>",
            link(&href, column.label()),
            marker
        );
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for (i, row) in rows.iter().enumerate() {
        out.push_str("<tr>");
        if view.show_order {
            let _ = write!(out, "<td>{}</td>", i + 1);
        }
        for column in report.columns() {
            let _ = write!(out, "<td>{}</td>", render_cell(&column.value(row)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>");
    out
}

fn render_cell(value: &CellValue) -> String {
    match value {
        CellValue::Stars(stars) => {
            let count = stars.round().clamp(0.0, MAX_STARS) as usize;
            format!(
                "<span title=\"{}\" style=\"color: Gold\">{}</span>",
                stars,
                STAR.repeat(count)
            )
        }
        CellValue::Link(href) if href.is_empty() => String::new(),
        CellValue::Link(href) => link(href, "link"),
        other => escape_html(&other.to_string()),
    }
}

//! End-to-end tests: the router is served on an ephemeral port over the fixture tables
//! and driven with an HTTP client.

use demo_ajax::{transport, Highlighter, RowSource};
use serde_json::Value;
use std::path::PathBuf;

fn repo_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel)
}

async fn spawn_app() -> Result<String, Box<dyn std::error::Error>> {
    let rows = RowSource::new(repo_path("tests/fixtures/csv"));
    let app_state = transport::http::AppState::new(rows, Highlighter::default());
    let router = transport::http::create_router(app_state, repo_path("static"));

    // Bind to an ephemeral port to avoid conflicts with a running server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

fn names(rows: &Value) -> Vec<String> {
    rows.as_array()
        .map(|a| {
            a.iter()
                .filter_map(|r| r["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn health_reports_loaded_rows() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let resp = reqwest::get(format!("{}/health", base_url))
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["hotels"], 5);
    assert_eq!(resp["data"]["cities"], 3);
    Ok(())
}

#[tokio::test]
async fn regexp_page_renders_highlighted_output() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let html = reqwest::Client::new()
        .get(format!("{}/regexp", base_url))
        .query(&[("regexp", "b+"), ("text", "abba <b>")])
        .send()
        .await?
        .text()
        .await?;
    assert!(html.contains("<title>Regular expression tester</title>"));
    assert!(html.contains("a<span>bb</span>a &lt;<span>b</span>&gt;"));
    assert!(html.contains("value=\"b+\""));
    Ok(())
}

#[tokio::test]
async fn regexp_ajax_returns_fragments() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/regexp", base_url))
        .form(&[("_ajax", "true"), ("regexp", "o"), ("text", "foo")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(resp[".out"], "f<span>o</span><span>o</span>");
    assert_eq!(resp[".subtitle"], "AJAX ready");

    let long_text = "x".repeat(1_101);
    let resp = client
        .post(format!("{}/regexp", base_url))
        .form(&[("_ajax", "true"), ("regexp", "x"), ("text", long_text.as_str())])
        .send()
        .await?
        .json::<Value>()
        .await?;
    let out = resp[".out"].as_str().unwrap_or_default();
    assert!(out.starts_with("<span class=\"error\">TextTooLong: "));
    assert!(out.contains("1100"));

    let resp = client
        .post(format!("{}/regexp", base_url))
        .form(&[("_ajax", "true"), ("regexp", "("), ("text", "abc")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert!(resp[".out"]
        .as_str()
        .unwrap_or_default()
        .contains("InvalidPattern: "));
    Ok(())
}

#[tokio::test]
async fn hotel_report_filters_and_escapes() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let html = reqwest::Client::new()
        .get(format!("{}/hotels", base_url))
        .query(&[("name", "INN"), ("city", "")])
        .send()
        .await?
        .text()
        .await?;
    assert!(html.contains("Alpha Inn"));
    assert!(html.contains("Beta Inn"));
    assert!(!html.contains("Alpine Lodge"));
    assert!(html.contains("Data are from"));

    let html = reqwest::get(format!("{}/hotels", base_url)).await?.text().await?;
    assert!(html.contains("Grand Hotel &lt;Ring&gt;"));
    assert!(!html.contains("Grand Hotel <Ring>"));
    Ok(())
}

#[tokio::test]
async fn hotel_report_ajax_sorts_by_column() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let resp = reqwest::Client::new()
        .post(format!("{}/hotels", base_url))
        .form(&[("_ajax", "true"), ("sort", "price"), ("dir", "desc"), ("limit", "2")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    let table = resp["#report"].as_str().unwrap_or_default();
    let grand = table.find("Grand Hotel").unwrap_or(usize::MAX);
    let alpine = table.find("Alpine Lodge").unwrap_or(usize::MAX);
    assert!(grand < alpine);
    assert!(alpine < usize::MAX);
    assert!(!table.contains("Alpha Inn"));
    // The active column links to the opposite direction.
    assert!(table.contains("sort=price&amp;dir=asc"));
    Ok(())
}

#[tokio::test]
async fn plain_report_uses_the_default_limit() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let html = reqwest::Client::new()
        .get(format!("{}/plain-hotels", base_url))
        .query(&[("limit", "1")])
        .send()
        .await?
        .text()
        .await?;
    assert!(html.contains("Simple Hotel Report"));
    assert!(html.contains("Alpha Inn"));
    assert!(html.contains("Hotel Nowhere"));
    assert!(!html.contains("name=\"limit\""));
    Ok(())
}

#[tokio::test]
async fn hotel_api_applies_the_query() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/hotels", base_url))
        .query(&[("name", "alp")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(resp["data"]["count"], 2);
    assert_eq!(names(&resp["data"]["hotels"]), vec!["Alpha Inn", "Alpine Lodge"]);
    assert_eq!(resp["data"]["hotels"][0]["city"]["name"], "Prague");

    let resp = client
        .get(format!("{}/api/hotels", base_url))
        .query(&[("limit", "-5")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(resp["data"]["count"], 0);

    let resp = client
        .get(format!("{}/api/hotels", base_url))
        .query(&[("sort", "stars"), ("dir", "desc"), ("limit", "1")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(names(&resp["data"]["hotels"]), vec!["Grand Hotel <Ring>"]);
    Ok(())
}

#[tokio::test]
async fn unknown_city_degrades_to_placeholder() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let resp = reqwest::Client::new()
        .get(format!("{}/api/hotels", base_url))
        .query(&[("name", "nowhere")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(resp["data"]["count"], 1);
    assert_eq!(resp["data"]["hotels"][0]["city"]["name"], "");
    assert_eq!(resp["data"]["hotels"][0]["city"]["id"], 0);
    Ok(())
}

#[tokio::test]
async fn city_api_filters_by_country() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let resp = reqwest::Client::new()
        .get(format!("{}/api/cities", base_url))
        .query(&[("country", "AUSTRIA")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(names(&resp["data"]["cities"]), vec!["Vienna"]);
    Ok(())
}

#[tokio::test]
async fn regexp_api_reports_errors_in_the_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/regexp", base_url))
        .json(&serde_json::json!({ "text": "a<b", "regexp": "<" }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["html"], "a<span>&lt;</span>b");

    let resp = client
        .post(format!("{}/api/regexp", base_url))
        .json(&serde_json::json!({ "text": "abc", "regexp": "(" }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(resp["success"], false);
    assert!(resp["error"]
        .as_str()
        .unwrap_or_default()
        .starts_with("InvalidPattern: "));

    let resp = client
        .post(format!("{}/api/regexp", base_url))
        .json(&serde_json::json!({ "text": "abc", "regexp": "<b>(" }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let error = resp["error"].as_str().unwrap_or_default();
    assert!(error.contains("<b>("));
    assert!(!error.contains("&lt;"));

    let resp = client
        .post(format!("{}/api/regexp", base_url))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.headers().contains_key("error-message"));
    Ok(())
}

#[tokio::test]
async fn bad_limit_gets_the_error_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    for path in ["/api/hotels", "/api/cities"] {
        let resp = reqwest::Client::new()
            .get(format!("{}{}", base_url, path))
            .query(&[("limit", "abc")])
            .send()
            .await?;
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
        let header = resp
            .headers()
            .get("error-message")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(header.starts_with("InvalidQuery: "));
        let body = resp.json::<Value>().await?;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], header.as_str());
    }
    Ok(())
}

#[tokio::test]
async fn combo_box_echoes_the_selection() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let html = client.get(format!("{}/combo-box", base_url)).send().await?.text().await?;
    assert!(html.contains("<option value=\"JANUARY\" selected>JANUARY</option>"));
    assert!(html.contains("?: ?"));

    let resp = client
        .post(format!("{}/combo-box", base_url))
        .form(&[("_ajax", "true"), ("month", "MAY"), ("text", "<i>spring</i>")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(resp[".out"], "MAY: &lt;i&gt;spring&lt;/i&gt;");
    Ok(())
}

#[tokio::test]
async fn simple_form_and_static_assets() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_app().await?;
    let client = reqwest::Client::new();

    let html = client
        .get(format!("{}/form", base_url))
        .query(&[("note", "\"quoted\"")])
        .send()
        .await?
        .text()
        .await?;
    assert!(html.contains("value=\"&quot;quoted&quot;\""));

    let resp = client
        .get(format!("{}/static/js/ajax.js", base_url))
        .send()
        .await?;
    assert!(resp.status().is_success());
    assert!(resp.text().await?.contains("_ajax"));

    let index = client.get(&base_url).send().await?.text().await?;
    assert!(index.contains("href=\"/hotels\""));
    Ok(())
}

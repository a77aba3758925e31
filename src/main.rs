use demo_ajax::infra::{config, logging};
use demo_ajax::transport;
use demo_ajax::{Highlighter, RowSource};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let port = config::port_from_args(&args);
    let data_dir = config::data_dir();
    let static_dir = config::static_dir();

    // --- Row source (loaded lazily, warmed up here so start-up logs show the counts) ---
    info!(data_dir = %data_dir.display(), "Initializing row source...");
    let rows = RowSource::new(&data_dir);
    if let Err(e) = rows.try_hotels().await {
        warn!(
            error = %e,
            "Could not load the demo tables; reports will be empty until the files appear"
        );
    }

    let highlighter = Highlighter::new(config::highlight_max_length());
    info!(max_length = highlighter.max_length(), "Highlighter ready");

    let app_state = transport::http::AppState::new(rows, highlighter);

    // --- API server ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state, &static_dir)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);
    let addr = format!("{}:{}", config::bind_addr(), port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Application is running on http://{}", addr);
    info!("Swagger UI available at http://localhost:{}/swagger-ui", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received (Ctrl+C)");
        })
        .await?;

    info!("Graceful shutdown complete.");
    Ok(())
}

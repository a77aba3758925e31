use demo_ajax::infra::{config, logging};
use demo_ajax::RowSource;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads env vars (all optional):\n\
           DATA_DIR, STATIC_DIR, PORT, BIND_ADDR, HIGHLIGHT_MAX_LENGTH\n\
         and checks that the demo tables load.\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let data_dir = config::data_dir();
    let static_dir = config::static_dir();

    println!("> Preflight:");
    println!("  DATA_DIR={}", data_dir.display());
    println!("  STATIC_DIR={}", static_dir.display());
    println!("  listen={}:{}", config::bind_addr(), config::port());
    println!("  HIGHLIGHT_MAX_LENGTH={}", config::highlight_max_length());

    if !static_dir.is_dir() {
        eprintln!("  Warning: static directory is missing; pages will render without styles.");
    }

    let rows = RowSource::new(&data_dir);
    let cities = rows
        .try_cities()
        .await
        .map_err(|e| anyhow::anyhow!("City table failed to load: {}", e))?;
    println!("  Cities: {}", cities.len());

    let hotels = rows
        .try_hotels()
        .await
        .map_err(|e| anyhow::anyhow!("Hotel table failed to load: {}", e))?;
    println!("  Hotels: {}", hotels.len());

    let orphans = hotels.iter().filter(|h| h.city.id == 0).count();
    if orphans > 0 {
        eprintln!("  Warning: {} hotels refer to an unknown city.", orphans);
    }
    if cities.is_empty() || hotels.is_empty() {
        return Err(anyhow::anyhow!("Demo tables are empty"));
    }

    println!("> Preflight OK.");
    Ok(())
}

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod models;
mod services;
mod utils;

use config::AppConfig;

fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("summary_charts=info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("📊 Starting summary-charts v{}", env!("CARGO_PKG_VERSION"));

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    match commands::handle_args(&config, &args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

//! Q&A API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p qna-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use qna_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = qna_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

//! CodeCouncil relay server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin codecouncil-server
//! cargo run --bin codecouncil-server -- --host 0.0.0.0 --port 5000
//! GEMINI_API_KEY=... cargo run --bin codecouncil-server
//! ```

use std::time::Duration;

use clap::Parser;
use codecouncil_server::{
    app::build_server,
    config::{
        DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, DEFAULT_HOST, DEFAULT_LLM_TIMEOUT_MS,
        DEFAULT_PORT, LlmConfig, ServerConfig,
    },
};
use codecouncil_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "codecouncil-server")]
#[command(about = "Room relay server for collaborative debugging sessions", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Gemini API key; without it the AI endpoints serve fallbacks
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    gemini_model: String,

    #[arg(long, env = "GEMINI_ENDPOINT", default_value = DEFAULT_GEMINI_ENDPOINT)]
    gemini_endpoint: String,

    /// Milliseconds to wait for the LLM before serving the fallback
    #[arg(long, default_value_t = DEFAULT_LLM_TIMEOUT_MS)]
    llm_timeout_ms: u64,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(
        &[env!("CARGO_PKG_NAME"), env!("CARGO_BIN_NAME"), "tower_http"],
        &args.log_level,
    );

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        llm: LlmConfig {
            api_key: args.gemini_api_key,
            endpoint: args.gemini_endpoint,
            model: args.gemini_model,
            timeout: Duration::from_millis(args.llm_timeout_ms),
        },
    };

    let server = build_server(&config);
    if let Err(e) = server.run(config.bind_addr()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

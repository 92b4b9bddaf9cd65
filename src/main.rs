//! Sitelens server binary

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tower_http::trace::TraceLayer;

use sitelens::config::{AnalyzerConfig, DEFAULT_FETCH_TIMEOUT_SECS};
use sitelens::handlers::{analyze_router, status_router, AppState};

/// Sitelens web page compliance analyzer
#[derive(Parser, Debug)]
#[command(name = "sitelens")]
#[command(version)]
#[command(about = "Sitelens — analyze a web page for publishing requirements")]
#[command(long_about = r#"Sitelens — analyze a web page for publishing requirements

Fetches a page and reports on its metadata, icons, social tags, SEO files,
performance signals, AI integration and security headers, with a weighted
score per category and overall.

ENDPOINTS:
  GET /api/analyze?url=<absolute-url>   run an analysis
  GET /health                           liveness probe

EXAMPLES:
  # Start the server on the default port
  sitelens

  # Custom port, verbose logging
  sitelens --port 3010 --verbose

  # Serve fixture reports without touching the network
  sitelens --fixture-data
"#)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Page retrieval timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Serve fixture results instead of fetching pages
    #[arg(long)]
    fixture_data: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = Arc::new(AppState::new(AnalyzerConfig {
        fetch_timeout: Duration::from_secs(args.timeout_secs),
        use_fixture_data: args.fixture_data,
    }));

    let app = analyze_router(state)
        .merge(status_router())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Sitelens server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

use anyhow::Context;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{fmt, EnvFilter};

use fashion_stylist::{
    client::{DemoRecommendations, HttpRecommendationClient, RecommendationSource},
    config::Config,
    notify::TerminalNotifier,
    page,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Logs go to stderr; stdout is the page
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let config = Config::from_env();
    let source: Arc<dyn RecommendationSource> = match &config.api_base {
        Some(base) => {
            tracing::info!(base = %base, timeout = ?config.request_timeout, "Using recommendation backend");
            Arc::new(HttpRecommendationClient::new(base, config.request_timeout).context("building HTTP client")?)
        }
        None => {
            tracing::info!("STYLIST_API_BASE not set, running in demo mode");
            Arc::new(DemoRecommendations)
        }
    };

    let input = BufReader::new(tokio::io::stdin());
    tokio::select! {
        result = page::run(input, tokio::io::stdout(), source, Arc::new(TerminalNotifier)) => {
            let page = result?;
            tracing::info!(styles = page.form.selected_styles().len(), "Page closed");
        }
        _ = tokio::signal::ctrl_c() => tracing::info!("Interrupted, closing page"),
    }
    Ok(())
}

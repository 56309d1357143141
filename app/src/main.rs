mod cli;
mod navigator;
mod terminal;

use btcpay_core::Route;
use clap::Parser;
use cli::Cli;
use config::{ApiConfig, AppConfig, ClientKind};
use invoice_client::{http::HttpInvoiceClient, mock::MockClient, InvoiceClient};
use navigator::{PrintNavigator, SystemNavigator};
use std::io::{self, Write};
use std::sync::Arc;
use terminal::Terminal;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workflow::{view, Navigator, PaymentWorkflow};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Config file, then `API_URL`, then command-line flags.
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let cfg = match &cli.config {
        Some(path) => config::load_path(path)?,
        None => config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Falling back to default config");
            AppConfig::default()
        }),
    };

    Ok(cfg
        .with_base_url(std::env::var(config::API_URL_ENV).ok())
        .with_base_url(cli.api_url.clone())
        .with_kind(cli.mock.then_some(ClientKind::Mock)))
}

fn create_invoice_client(api: &ApiConfig) -> anyhow::Result<Arc<dyn InvoiceClient>> {
    match api.kind {
        ClientKind::Http => {
            tracing::info!(base_url = %api.base_url, "Using invoice API");
            Ok(HttpInvoiceClient::new(&api.base_url)?)
        }
        ClientKind::Mock => {
            tracing::info!("Using mock invoice client");
            Ok(MockClient::new(&api.base_url))
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let route = Route::resolve(&cli.route);
    if route == Route::NotFound {
        tracing::warn!(route = %cli.route, "Unknown merchant route");
        let mut out = io::stdout();
        for line in view::not_found_page() {
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    let cfg = load_config(&cli)?;
    let client = create_invoice_client(&cfg.api)?;
    let navigator: Arc<dyn Navigator> = if cli.no_browser {
        Arc::new(PrintNavigator)
    } else {
        Arc::new(SystemNavigator)
    };

    let mut workflow = PaymentWorkflow::new(client, navigator);
    let mut terminal = Terminal::new(BufReader::new(tokio::io::stdin()), io::stdout());
    terminal.run(&mut workflow, route.merchant()).await
}

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use budget_allocation::bootstrap::build_app;
use budget_allocation::config::AppConfig;

/// Modules that stay at `warn` unless `RUST_LOG` says otherwise.
const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "h2", "tokio_util"];

fn build_filter(log_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(log_level);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{}=warn", module));
    }
    EnvFilter::new(directives)
}

fn init_logging(config: &AppConfig) {
    let subscriber = tracing_subscriber::registry().with(build_filter(&config.server.log_level));

    if config.is_production() {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true);
        if let Err(e) = subscriber.with(fmt_layer).try_init() {
            eprintln!("failed to initialise logging: {e}");
        }
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false);
        if let Err(e) = subscriber.with(fmt_layer).try_init() {
            eprintln!("failed to initialise logging: {e}");
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    if let Err(e) = config.validate() {
        error!(error = %e, "invalid configuration");
        return ExitCode::FAILURE;
    }
    let addr = match config.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, "invalid bind address");
            return ExitCode::FAILURE;
        }
    };

    let app = build_app(&config).await;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(%addr, environment = ?config.server.environment, "budget allocation service listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

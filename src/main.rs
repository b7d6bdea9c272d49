use crate::config::{Cli, Config};
use crate::dataset::Dataset;
use crate::router::respond;
use astra::{Request, Server};
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dataset;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn init_logging(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    // 1️⃣ Settings: defaults < config file < CLI flags
    let config = Config::resolve(Cli::parse())?;
    init_logging(&config.log_level);
    tracing::info!(?config, "starting pg_finder");

    // 2️⃣ Dataset handle. A failed preload is not fatal; the search page
    // reports it and the next request tries again.
    let dataset = Dataset::new(&config.data_path);
    if config.preload {
        match dataset.table() {
            Ok(table) if table.is_empty() => tracing::warn!("dataset has no usable rows"),
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, "dataset preload failed"),
        }
    }

    // 3️⃣ Start the server
    let addr: SocketAddr = config.bind_addr.parse()?;
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests; every worker shares the same read-only dataset
    let result = server.serve(move |req: Request, _info| respond(req, &dataset));

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        return Err(e.into());
    }

    tracing::info!("Server shut down cleanly.");
    Ok(())
}

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::router::{respond, Site};
use astra::{Request, Server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod search;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2️⃣ Configuration from the environment
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Load the fixtures once; they are read-only from here on
    let catalog = match Catalog::load(&cfg.data_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("❌ Catalog loading failed: {e}");
            std::process::exit(1);
        }
    };

    let site = Site {
        catalog,
        page_size: cfg.page_size,
    };

    // 4️⃣ Start the server
    info!("Starting server at http://{}", cfg.addr);

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req: Request, _info| respond(req, &site));

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}

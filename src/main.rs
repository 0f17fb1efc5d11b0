use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use address_book::{AddressBookConfig, Database, web};

fn init_tracing(config: &AddressBookConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AddressBookConfig::load()?;
    init_tracing(&config);

    let db = Database::open(&config.database.path)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.path))?;

    web::run(Arc::new(db), &config.server.host, config.server.port).await
}

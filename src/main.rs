use anyhow::Context;
use clap::Parser;
use tracing::info;

use campus_crud::{api, telemetry, Config, InMemoryRecordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    telemetry::init(&config.log_filter);

    let app = match &config.database {
        #[cfg(feature = "sqlite")]
        Some(path) => {
            let store = campus_crud::SqliteRecordStore::open(path)
                .with_context(|| format!("opening database {}", path.display()))?;
            campus_crud::app(store)
        }
        #[cfg(not(feature = "sqlite"))]
        Some(path) => {
            anyhow::bail!(
                "database {} requested but sqlite support is not compiled in",
                path.display()
            );
        }
        None => {
            info!("no database configured, keeping records in memory");
            campus_crud::app(InMemoryRecordStore::new())
        }
    };

    api::serve(app, config.bind)
        .await
        .with_context(|| format!("serving on {}", config.bind))
}

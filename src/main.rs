use anyhow::Result;
use axum::Router;
use data_api::{
    config,
    routes,
    services::{data_service::DataService, database::PgDatabase, storage::MinioStorage},
};
use std::{io::ErrorKind, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // --- Parse config ---
    let cfg = config::AppConfig::from_env_and_args()?;

    tracing::info!("Starting data-api with config: {:?}", cfg);

    // --- Initialize backends ---
    // The pool connects on first use; an unreachable database only fails requests.
    let db = PgDatabase::connect_lazy(&cfg.database);
    tracing::debug!(
        "PostgreSQL target => {}:{}/{}",
        cfg.database.host,
        cfg.database.port,
        cfg.database.name
    );

    let storage = MinioStorage::new(&cfg.minio);
    tracing::debug!("MinIO endpoint => {}", cfg.minio.endpoint_url());

    let service = DataService::new(Arc::new(db), Arc::new(storage));

    // --- Build router ---
    let app: Router = routes::routes::routes().with_state(service);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Backend listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

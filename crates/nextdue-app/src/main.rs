use std::sync::Arc;

use nextdue_app::app::api::routes;
use nextdue_app::config::ConfigHandler;
use nextdue_app::store_handler::TaskStoreHandler;
use nextdue_core::config::load_config;
use nextdue_service::clock::SystemClock;
use nextdue_service::task::InMemoryTaskStore;
use salvo::conn::TcpListener;
use salvo::logging::Logger;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting nextdue task server");

    let config = load_config()?;

    tracing::info!(
        bind_addr = %config.server.bind_addr(),
        auth_enabled = config.auth.password().is_some(),
        task_limit = config.tasks.limit,
        "Configuration loaded"
    );

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(TaskStoreHandler {
            store: Arc::new(InMemoryTaskStore::new()),
            clock: Arc::new(SystemClock),
        })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}

use std::sync::Arc;

use anyhow::{Context, Result};
use aniwar_contract_gateway::{
    client::{
        config_provider::{ConfigProvider, EnvConfigProvider},
        connection::ContractContext,
        node::HttpConnector,
    },
    constants::{DEFAULT_CHAIN_INFO_DIR, DEFAULT_LOG_LEVEL, KEY_CHAIN_INFO_DIR, KEY_LOG_LEVEL},
    server::{ServerSettings, serve_with_shutdown, shutdown_signal},
    telemetry::init_tracing,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let provider = Arc::new(EnvConfigProvider::from_env());
    init_tracing(&provider.get_or(KEY_LOG_LEVEL, DEFAULT_LOG_LEVEL));

    let settings = ServerSettings::from_provider(provider.as_ref())?;
    let chain_info = provider.get_or(KEY_CHAIN_INFO_DIR, DEFAULT_CHAIN_INFO_DIR);
    let context = Arc::new(ContractContext::new(
        chain_info,
        provider,
        Arc::new(HttpConnector),
    ));

    context
        .warm_up()
        .await
        .context("Failed to initialize the contract connection")?;

    let addr = settings.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "gRPC server listening");

    serve_with_shutdown(context, listener, shutdown_signal())
        .await
        .context("gRPC server failed")?;

    info!("server stopped");
    Ok(())
}

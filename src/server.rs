use std::{future::Future, sync::Arc};

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Server, server::Router};
use tracing::info;

use crate::{
    client::{config_provider::ConfigProvider, connection::ContractContext},
    constants::{DEFAULT_HOST, DEFAULT_PORT, KEY_HOST, KEY_PORT},
    error::StartupError,
    proto::{
        nft_pb::nft_service_server::NftServiceServer,
        reward_pb::reward_service_server::RewardServiceServer,
        token_pb::token_service_server::TokenServiceServer,
    },
    services::{nft::NftHandler, reward::RewardHandler, token::TokenHandler},
};

/// Where the gRPC listener binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn from_provider(provider: &dyn ConfigProvider) -> Result<Self, StartupError> {
        let host = provider.get_or(KEY_HOST, DEFAULT_HOST);
        let port = match provider.get(KEY_PORT) {
            Some(port) => {
                // Accept both "50001" and the ":50001" form.
                let port = port.trim().trim_start_matches(':');
                port.parse().map_err(|_| StartupError::InvalidValue {
                    key: KEY_PORT.to_string(),
                    reason: format!("{port:?} is not a TCP port"),
                })?
            }
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Registers the reward, token and NFT services.
pub fn router(context: Arc<ContractContext>) -> Router {
    Server::builder()
        .add_service(RewardServiceServer::new(RewardHandler))
        .add_service(TokenServiceServer::new(TokenHandler::new(context)))
        .add_service(NftServiceServer::new(NftHandler))
}

/// Serves on `listener` until `signal` resolves, then stops accepting and
/// drops the listener.
pub async fn serve_with_shutdown(
    context: Arc<ContractContext>,
    listener: TcpListener,
    signal: impl Future<Output = ()>,
) -> Result<(), tonic::transport::Error> {
    let incoming = TcpListenerStream::new(listener);
    router(context)
        .serve_with_incoming_shutdown(incoming, signal)
        .await?;
    info!("listener closed");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

use std::path::PathBuf;

use alloy::transports::TransportError;
use thiserror::Error;

/// Errors raised while building the shared connection config. None of them can
/// be recovered from by retrying a single request.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("missing configuration key `{0}`")]
    MissingKey(String),

    #[error("invalid value for configuration key `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("cannot connect to node at {url}: {reason}")]
    Dial { url: String, reason: String },

    #[error("cannot read artifact {path}")]
    ReadArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed artifact {path}")]
    MalformedArtifact {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {0} has no `abi` field")]
    MissingAbi(PathBuf),

    #[error(transparent)]
    Deployment(#[from] DeploymentError),

    #[error("invalid private key")]
    InvalidPrivateKey(#[source] alloy::signers::local::LocalSignerError),

    #[error("{} artifact(s) failed to load: {}", .0.len(), join_errors(.0))]
    Artifacts(Vec<StartupError>),
}

fn join_errors(errors: &[StartupError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Lookup failures in the deployment map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeploymentError {
    #[error("no deployments recorded for chain {0}")]
    UnknownChain(String),

    #[error("contract {contract} is not deployed on chain {chain_id}")]
    UnknownContract { chain_id: String, contract: String },

    #[error("deployment list of {contract} on chain {chain_id} is empty")]
    NoDeployments { chain_id: String, contract: String },
}

/// Per-call failures. These are reported to the caller and never terminate
/// the process.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("method `{0}` is not part of the contract interface")]
    UnknownMethod(String),

    #[error("cannot encode arguments of `{method}`: {reason}")]
    Encode { method: String, reason: String },

    #[error("cannot decode result of `{method}`: {reason}")]
    Decode { method: String, reason: String },

    #[error("node did not answer within {0:?}")]
    Timeout(std::time::Duration),

    #[error("node query failed: {0}")]
    Node(#[from] TransportError),

    #[error("transaction rejected by node: {0}")]
    Submission(String),

    #[error("cannot sign transaction: {0}")]
    Signing(String),

    #[error("unexpected output of `{method}`: {reason}")]
    UnexpectedOutput { method: String, reason: String },
}

impl From<CallError> for tonic::Status {
    fn from(err: CallError) -> Self {
        let message = err.to_string();
        match err {
            CallError::UnknownMethod(_) | CallError::Encode { .. } => {
                tonic::Status::invalid_argument(message)
            }
            CallError::Timeout(_) => tonic::Status::deadline_exceeded(message),
            CallError::Node(_) => tonic::Status::unavailable(message),
            CallError::Submission(_) => tonic::Status::failed_precondition(message),
            CallError::Decode { .. }
            | CallError::Signing(_)
            | CallError::UnexpectedOutput { .. } => tonic::Status::internal(message),
        }
    }
}

impl From<StartupError> for tonic::Status {
    fn from(err: StartupError) -> Self {
        tonic::Status::unavailable(format!("contract connection unavailable: {err}"))
    }
}

//! gRPC front end of the Aniwar token contract.
//!
//! The contract layer lives in [`client`]: a lazily built, shared
//! [`client::connection::ConnectionConfig`], signed state-changing calls in
//! [`client::transaction`] and read-only calls in [`client::view`]. The
//! [`services`] adapt those calls to the reward, token and NFT gRPC services.

pub mod basic_elements;
pub mod client;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod proto;
pub mod server;
pub mod services;
pub mod telemetry;
pub mod types;

#[cfg(test)]
mod test_utils;

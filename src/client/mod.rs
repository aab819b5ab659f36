pub mod config_provider;
pub mod connection;
pub mod node;
pub mod transaction;
pub mod view;

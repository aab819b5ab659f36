pub mod deployment;
pub mod transaction;

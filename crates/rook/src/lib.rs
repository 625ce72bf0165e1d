//! Rook: one binary for the storage orchestrator and the Ceph daemon roles.

pub mod cli;

pub use cli::ceph::config::{Config, StoreConfig, StoreType};
pub use cli::{Cli, GlobalOptions};

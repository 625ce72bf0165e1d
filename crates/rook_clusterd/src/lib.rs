//! Cluster daemon context shared by every rook daemon role.
//!
//! Holds the types a role receives at startup: the execution [`Context`],
//! the cluster identity, canonical network addresses and the command
//! executor capability.

pub mod cluster;
pub mod context;
pub mod defaults;
pub mod error;
pub mod exec;
pub mod network;

pub use cluster::{ClusterInfo, RedactedClusterInfo};
pub use context::{Context, ContextSnapshot};
pub use error::{ConfigurationError, ExecError};
pub use exec::{CommandExecutor, Executor};
pub use network::{NetworkInfo, RenamedFlag, SimpleNetworkInfo, RENAMED_FLAGS};
pub use rook_logging::LogLevel;

//! Execution context handed to a daemon role at startup.

use rook_logging::LogLevel;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::exec::Executor;
use crate::network::SimpleNetworkInfo;

/// Resolved settings and capabilities for one daemon role.
///
/// Built once after flag parsing and never mutated. Cloning shares the
/// executor.
#[derive(Clone)]
pub struct Context {
    pub executor: Arc<dyn Executor>,
    pub config_dir: PathBuf,
    pub config_file_override: Option<PathBuf>,
    pub log_level: LogLevel,
    pub network_info: SimpleNetworkInfo,
}

/// Everything in a [`Context`] except the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSnapshot {
    pub config_dir: PathBuf,
    pub config_file_override: Option<PathBuf>,
    pub log_level: LogLevel,
    pub network_info: SimpleNetworkInfo,
}

impl Context {
    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            config_dir: self.config_dir.clone(),
            config_file_override: self.config_file_override.clone(),
            log_level: self.log_level,
            network_info: self.network_info.clone(),
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("config_dir", &self.config_dir)
            .field("config_file_override", &self.config_file_override)
            .field("log_level", &self.log_level)
            .field("network_info", &self.network_info)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::CommandExecutor;

    fn context() -> Context {
        Context {
            executor: Arc::new(CommandExecutor),
            config_dir: PathBuf::from("/var/lib/rook"),
            config_file_override: None,
            log_level: LogLevel::Info,
            network_info: SimpleNetworkInfo::default(),
        }
    }

    #[test]
    fn test_context_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Context>();
    }

    #[test]
    fn test_snapshot_serialization() {
        let json = serde_json::to_value(context().snapshot()).unwrap();
        assert_eq!(json["config_dir"], "/var/lib/rook");
        assert!(json["config_file_override"].is_null());
        assert_eq!(json["log_level"], "info");
        assert_eq!(json["network_info"]["public_addr"], "127.0.0.1");
    }
}

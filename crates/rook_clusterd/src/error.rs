//! Error types for configuration assembly and command execution

use std::io;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("renamed flag --{name} is not registered on command `{command}`")]
    UnknownRenamedFlag { name: String, command: String },

    #[error("flag --{0} cannot be renamed to itself")]
    SelfRenamed(String),
}

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("failed to start {command} for {action}: {source}")]
    Spawn {
        action: String,
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{action} failed: {command} exited with {status}")]
    Failed {
        action: String,
        command: String,
        status: String,
    },
}

//! Capability to run external commands.

use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::error::ExecError;

/// Runs external programs on behalf of a daemon role.
pub trait Executor: Send + Sync {
    /// Run `command` to completion with inherited stdio.
    fn execute_command(&self, action: &str, command: &str, args: &[String]) -> Result<(), ExecError>;
}

/// [`Executor`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandExecutor;

impl Executor for CommandExecutor {
    fn execute_command(&self, action: &str, command: &str, args: &[String]) -> Result<(), ExecError> {
        info!("Running {}: {} {}", action, command, args.join(" "));
        let status = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| ExecError::Spawn {
                action: action.to_string(),
                command: command.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ExecError::Failed {
                action: action.to_string(),
                command: command.to_string(),
                status: status.to_string(),
            });
        }
        debug!("{} completed", action);
        Ok(())
    }
}

//! `rook ceph agent`: the per-node volume agent.

use anyhow::Result;

use super::{finish, RoleRun};
use crate::cli::GlobalOptions;

pub const ROLE: &str = "agent";

#[derive(Debug, Clone, Default, clap::Args)]
pub struct AgentArgs {}

pub fn run(_args: AgentArgs, globals: &GlobalOptions) -> Result<()> {
    let run = RoleRun::from_defaults(ROLE, globals);
    finish(&run, None, globals)
}

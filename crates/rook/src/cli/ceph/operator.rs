//! `rook ceph operator`: the cluster orchestrator.
//!
//! The orchestrator runtime is not linked into this binary; the command
//! resolves its context so `--dry-run` can show it.

use anyhow::Result;

use super::{finish, RoleRun};
use crate::cli::GlobalOptions;

pub const ROLE: &str = "operator";

#[derive(Debug, Clone, Default, clap::Args)]
pub struct OperatorArgs {}

pub fn run(_args: OperatorArgs, globals: &GlobalOptions) -> Result<()> {
    let run = RoleRun::from_defaults(ROLE, globals);
    finish(&run, None, globals)
}

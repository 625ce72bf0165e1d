//! `rook ceph mgr`: run a Ceph manager.

use anyhow::Result;
use std::path::PathBuf;

use super::flags::CephFlags;
use super::launch::DaemonLaunch;
use super::{finish, prepare};
use crate::cli::error::HelpfulError;
use crate::cli::GlobalOptions;

pub const ROLE: &str = "mgr";

#[derive(Debug, Clone, clap::Args)]
pub struct MgrArgs {
    #[command(flatten)]
    pub ceph: CephFlags,

    /// name of the manager
    #[arg(long, env = "ROOK_MGR_NAME", default_value = "")]
    pub name: String,

    /// path to the manager keyring (defaults to <config-dir>/<name>/keyring)
    #[arg(long, env = "ROOK_MGR_KEYRING")]
    pub keyring: Option<PathBuf>,
}

pub fn run(args: MgrArgs, globals: &GlobalOptions) -> Result<()> {
    let run = prepare(ROLE, &args.ceph, None, globals)?;
    if args.name.is_empty() {
        return Err(HelpfulError::missing_role_flag(ROLE, "name", "ROOK_MGR_NAME").into());
    }
    let launch = DaemonLaunch::ceph_daemon(
        "ceph-mgr",
        &run.context,
        &run.config,
        &run.cluster,
        &args.name,
        args.keyring.as_ref(),
    )
    .arg(format!("--public-addr={}", run.context.network_info.public_addr));
    finish(&run, Some(launch), globals)
}

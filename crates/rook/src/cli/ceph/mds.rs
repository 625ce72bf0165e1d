//! `rook ceph mds`: run a Ceph metadata server.

use anyhow::Result;
use std::path::PathBuf;

use super::flags::CephFlags;
use super::launch::DaemonLaunch;
use super::{finish, prepare};
use crate::cli::error::HelpfulError;
use crate::cli::GlobalOptions;

pub const ROLE: &str = "mds";

#[derive(Debug, Clone, clap::Args)]
pub struct MdsArgs {
    #[command(flatten)]
    pub ceph: CephFlags,

    /// name of the metadata server
    #[arg(long, env = "ROOK_MDS_NAME", default_value = "")]
    pub name: String,

    /// id of the filesystem this mds serves
    #[arg(long, env = "ROOK_FILESYSTEM_ID", default_value = "")]
    pub filesystem_id: String,

    /// whether standby daemons follow the active journal
    #[arg(long, env = "ROOK_ACTIVE_STANDBY", default_value_t = true, action = clap::ArgAction::Set)]
    pub active_standby: bool,

    /// path to the mds keyring (defaults to <config-dir>/<name>/keyring)
    #[arg(long, env = "ROOK_MDS_KEYRING")]
    pub keyring: Option<PathBuf>,
}

pub fn run(args: MdsArgs, globals: &GlobalOptions) -> Result<()> {
    let run = prepare(ROLE, &args.ceph, None, globals)?;
    if args.name.is_empty() {
        return Err(HelpfulError::missing_role_flag(ROLE, "name", "ROOK_MDS_NAME").into());
    }
    if args.filesystem_id.is_empty() {
        return Err(HelpfulError::missing_role_flag(ROLE, "filesystem-id", "ROOK_FILESYSTEM_ID").into());
    }
    let launch = DaemonLaunch::ceph_daemon(
        "ceph-mds",
        &run.context,
        &run.config,
        &run.cluster,
        &args.name,
        args.keyring.as_ref(),
    )
    .arg(format!("--mds-standby-for-fscid={}", args.filesystem_id))
    .arg(format!("--mds-standby-replay={}", args.active_standby));
    finish(&run, Some(launch), globals)
}

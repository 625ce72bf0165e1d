//! `rook ceph rgw`: run a Ceph object gateway.

use anyhow::Result;
use rook_clusterd::defaults::DEFAULT_RGW_PORT;
use std::path::PathBuf;

use super::flags::CephFlags;
use super::launch::DaemonLaunch;
use super::{finish, prepare};
use crate::cli::error::HelpfulError;
use crate::cli::GlobalOptions;

pub const ROLE: &str = "rgw";

#[derive(Debug, Clone, clap::Args)]
pub struct RgwArgs {
    #[command(flatten)]
    pub ceph: CephFlags,

    /// name of the object store
    #[arg(long, env = "ROOK_RGW_NAME", default_value = "")]
    pub name: String,

    /// dns host name the gateway answers on
    #[arg(long, env = "ROOK_RGW_HOST", default_value = "")]
    pub host: String,

    /// port the gateway listens on
    #[arg(long, env = "ROOK_RGW_PORT", default_value_t = DEFAULT_RGW_PORT)]
    pub port: u16,

    /// path to the gateway keyring (defaults to <config-dir>/<name>/keyring)
    #[arg(long, env = "ROOK_RGW_KEYRING")]
    pub keyring: Option<PathBuf>,
}

pub fn run(args: RgwArgs, globals: &GlobalOptions) -> Result<()> {
    let run = prepare(ROLE, &args.ceph, None, globals)?;
    if args.name.is_empty() {
        return Err(HelpfulError::missing_role_flag(ROLE, "name", "ROOK_RGW_NAME").into());
    }
    let mut launch = DaemonLaunch::ceph_daemon(
        "radosgw",
        &run.context,
        &run.config,
        &run.cluster,
        &args.name,
        args.keyring.as_ref(),
    )
    .arg(format!("--rgw-frontends=civetweb port={}", args.port));
    if !args.host.is_empty() {
        launch = launch.arg(format!("--rgw-dns-name={}", args.host));
    }
    finish(&run, Some(launch), globals)
}

//! `rook ceph osd`: run a Ceph object storage daemon.

use anyhow::Result;

use super::config::{StoreConfig, StoreType};
use super::flags::{CephFlags, OsdFlags};
use super::launch::{daemon_dir, DaemonLaunch};
use super::{finish, prepare};
use crate::cli::error::HelpfulError;
use crate::cli::GlobalOptions;

pub const ROLE: &str = "osd";

const MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, clap::Args)]
pub struct OsdArgs {
    #[command(flatten)]
    pub ceph: CephFlags,

    #[command(flatten)]
    pub osd: OsdFlags,

    /// id of the osd to run
    #[arg(long, env = "ROOK_OSD_ID")]
    pub osd_id: Option<u32>,
}

pub fn run(args: OsdArgs, globals: &GlobalOptions) -> Result<()> {
    let run = prepare(ROLE, &args.ceph, Some(&args.osd), globals)?;
    let Some(osd_id) = args.osd_id else {
        return Err(HelpfulError::missing_role_flag(ROLE, "osd-id", "ROOK_OSD_ID").into());
    };

    let daemon_id = osd_id.to_string();
    let data_dir = daemon_dir(&run.context, &format!("osd{}", osd_id));
    let mut launch = DaemonLaunch::ceph_daemon(
        "ceph-osd",
        &run.context,
        &run.config,
        &run.cluster,
        &daemon_id,
        None,
    )
    .arg(format!("--osd-data={}", data_dir.display()))
    .arg(format!("--public-addr={}", run.context.network_info.public_addr))
    .arg(format!("--cluster-addr={}", run.context.network_info.cluster_addr));
    for arg in store_args(&run.config.store_config)? {
        launch = launch.arg(arg);
    }
    if !run.config.location.is_empty() {
        launch = launch.arg(format!("--crush-location={}", run.config.location));
    }
    finish(&run, Some(launch), globals)
}

/// Object store arguments for `ceph-osd`. Zero sizes are left to the store.
pub fn store_args(store: &StoreConfig) -> Result<Vec<String>> {
    let mut args = vec![format!("--osd-objectstore={}", store.store_type.as_str())];
    match store.store_type {
        StoreType::Bluestore => {
            if store.wal_size_mb > 0 {
                let bytes = size_in_bytes("osd-wal-size", store.wal_size_mb)?;
                args.push(format!("--bluestore-block-wal-size={}", bytes));
            }
            if store.database_size_mb > 0 {
                let bytes = size_in_bytes("osd-database-size", store.database_size_mb)?;
                args.push(format!("--bluestore-block-db-size={}", bytes));
            }
        }
        StoreType::Filestore => {
            if store.journal_size_mb > 0 {
                args.push(format!("--osd-journal-size={}", store.journal_size_mb));
            }
        }
    }
    Ok(args)
}

fn size_in_bytes(flag: &str, size_mb: u64) -> Result<u64> {
    size_mb.checked_mul(MB).ok_or_else(|| {
        HelpfulError::new(format!("--{}={} is too large", flag, size_mb))
            .with_context("Store sizes are given in megabytes and must fit in 64 bits as bytes")
            .with_suggestion(format!("TRY: rook ceph osd --{} <megabytes up to {}>", flag, u64::MAX / MB))
            .into()
    })
}

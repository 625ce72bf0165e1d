//! Canonical default values shared by the flag binder and the daemon roles.

pub const DEFAULT_ADDR: &str = "127.0.0.1";
pub const DEFAULT_CLUSTER_NAME: &str = "rookcluster";
pub const DEFAULT_CONFIG_DIR: &str = "/var/lib/rook";

pub const DEFAULT_MON_PORT: u16 = 6790;
pub const DEFAULT_RGW_PORT: u16 = 53390;

pub const DEFAULT_WAL_SIZE_MB: u64 = 576;
pub const DEFAULT_DATABASE_SIZE_MB: u64 = 0;
pub const DEFAULT_JOURNAL_SIZE_MB: u64 = 5120;

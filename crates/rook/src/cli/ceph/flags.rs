//! Flags shared by the Ceph daemon roles and their binding into [`Config`].
//!
//! Every flag can also be supplied through a `ROOK_`-prefixed environment
//! variable; a value given on the command line takes precedence over the
//! environment, which takes precedence over the default.
//!
//! Network addresses are `Option`s without a clap default so that "set by the
//! operator" can be told apart from "left at 127.0.0.1". The legacy
//! `--public-ipv4`/`--private-ipv4` flags bind to their own fields and are
//! reconciled later by [`NetworkInfo::simplify`].

use rook_clusterd::defaults::{
    DEFAULT_CLUSTER_NAME, DEFAULT_CONFIG_DIR, DEFAULT_DATABASE_SIZE_MB, DEFAULT_JOURNAL_SIZE_MB,
    DEFAULT_WAL_SIZE_MB,
};
use rook_clusterd::{ClusterInfo, NetworkInfo};
use std::path::PathBuf;

use super::config::{Config, StoreConfig, StoreType};

/// Cluster and network flags common to mon, osd, mgr, rgw and mds.
#[derive(Debug, Clone, clap::Args)]
pub struct CephFlags {
    /// public IP address for this machine [default: 127.0.0.1]
    #[arg(long = "public-ip", env = "ROOK_PUBLIC_IP", value_name = "IP")]
    pub public_ip: Option<String>,

    /// private IP address for this machine [default: 127.0.0.1]
    #[arg(long = "private-ip", env = "ROOK_PRIVATE_IP", value_name = "IP")]
    pub private_ip: Option<String>,

    /// ceph cluster name
    #[arg(long, env = "ROOK_CLUSTER_NAME", default_value = DEFAULT_CLUSTER_NAME)]
    pub cluster_name: String,

    /// the cluster uuid
    #[arg(long, env = "ROOK_FSID", default_value = "")]
    pub fsid: String,

    /// the cephx keyring for monitors
    #[arg(long, env = "ROOK_MON_SECRET", default_value = "", hide_env_values = true)]
    pub mon_secret: String,

    /// secret for the admin user (random if not specified)
    #[arg(long, env = "ROOK_ADMIN_SECRET", default_value = "", hide_env_values = true)]
    pub admin_secret: String,

    /// ceph mon endpoints
    #[arg(long, env = "ROOK_MON_ENDPOINTS", default_value = "")]
    pub mon_endpoints: String,

    /// directory for storing configuration
    #[arg(long, env = "ROOK_CONFIG_DIR", default_value = DEFAULT_CONFIG_DIR)]
    pub config_dir: PathBuf,

    /// optional path to a ceph config file that will be appended to the config files that rook generates
    #[arg(long, env = "ROOK_CEPH_CONFIG_OVERRIDE", default_value = "")]
    pub ceph_config_override: String,

    // TODO: remove the legacy ipv4 flags once deployments have moved to --public-ip/--private-ip
    /// public IPv4 address for this machine (deprecated)
    #[arg(long = "public-ipv4", env = "ROOK_PUBLIC_IPV4", value_name = "IP", hide = true)]
    pub public_ipv4: Option<String>,

    /// private IPv4 address for this machine (deprecated)
    #[arg(long = "private-ipv4", env = "ROOK_PRIVATE_IPV4", value_name = "IP", hide = true)]
    pub private_ipv4: Option<String>,
}

/// Local storage flags of the osd role.
#[derive(Debug, Clone, clap::Args)]
pub struct OsdFlags {
    /// comma separated list of devices to use
    #[arg(long, env = "ROOK_DEVICES", default_value = "")]
    pub devices: String,

    /// comma separated list of directory paths to use
    #[arg(long, env = "ROOK_DIRECTORIES", default_value = "")]
    pub directories: String,

    /// device to store the metadata on
    #[arg(long, env = "ROOK_METADATA_DEVICE", default_value = "")]
    pub metadata_device: String,

    /// true to force the format of any specified devices, even if they already have a filesystem
    #[arg(long, env = "ROOK_FORCE_FORMAT")]
    pub force_format: bool,

    /// location of this node for CRUSH placement
    #[arg(long, env = "ROOK_LOCATION", default_value = "")]
    pub location: String,

    /// the host name of the node
    #[arg(long, env = "ROOK_NODE_NAME", default_value = "")]
    pub node_name: String,

    #[command(flatten)]
    pub store: StoreFlags,
}

/// Object store tuning of the osd role.
#[derive(Debug, Clone, clap::Args)]
pub struct StoreFlags {
    /// type of backing OSD store to use
    #[arg(long = "osd-store", env = "ROOK_OSD_STORE", value_enum, default_value_t = StoreType::Bluestore)]
    pub store_type: StoreType,

    /// default size (MB) for OSD write ahead log (WAL) (bluestore)
    #[arg(long = "osd-wal-size", env = "ROOK_OSD_WAL_SIZE", default_value_t = DEFAULT_WAL_SIZE_MB)]
    pub wal_size_mb: u64,

    /// default size (MB) for OSD database (bluestore)
    #[arg(long = "osd-database-size", env = "ROOK_OSD_DATABASE_SIZE", default_value_t = DEFAULT_DATABASE_SIZE_MB)]
    pub database_size_mb: u64,

    /// default size (MB) for OSD journal (filestore)
    #[arg(long = "osd-journal-size", env = "ROOK_OSD_JOURNAL_SIZE", default_value_t = DEFAULT_JOURNAL_SIZE_MB)]
    pub journal_size_mb: u64,
}

impl CephFlags {
    pub fn network_info(&self) -> NetworkInfo {
        NetworkInfo {
            public_addr: self.public_ip.clone(),
            cluster_addr: self.private_ip.clone(),
            public_addr_ipv4: self.public_ipv4.clone(),
            cluster_addr_ipv4: self.private_ipv4.clone(),
        }
    }

    pub fn cluster_info(&self) -> ClusterInfo {
        ClusterInfo {
            name: self.cluster_name.clone(),
            fsid: self.fsid.clone(),
            monitor_secret: self.mon_secret.clone(),
            admin_secret: self.admin_secret.clone(),
        }
    }

    /// Bind the parsed flags into an immutable [`Config`].
    pub fn to_config(&self, osd: Option<&OsdFlags>) -> Config {
        let mut config = Config {
            data_dir: self.config_dir.clone(),
            ceph_config_override: self.ceph_config_override.clone(),
            network_info: self.network_info(),
            mon_endpoints: self.mon_endpoints.clone(),
            ..Config::default()
        };
        if let Some(osd) = osd {
            config.devices = osd.devices.clone();
            config.directories = osd.directories.clone();
            config.metadata_device = osd.metadata_device.clone();
            config.force_format = osd.force_format;
            config.location = osd.location.clone();
            config.node_name = osd.node_name.clone();
            config.store_config = osd.store.to_store_config();
        }
        config
    }
}

impl StoreFlags {
    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig {
            store_type: self.store_type,
            wal_size_mb: self.wal_size_mb,
            database_size_mb: self.database_size_mb,
            journal_size_mb: self.journal_size_mb,
        }
    }
}

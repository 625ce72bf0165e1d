//! Local daemon configuration assembled from the command line.

use rook_clusterd::defaults::{
    DEFAULT_CONFIG_DIR, DEFAULT_DATABASE_SIZE_MB, DEFAULT_JOURNAL_SIZE_MB, DEFAULT_WAL_SIZE_MB,
};
use rook_clusterd::{CommandExecutor, Context, Executor, LogLevel, NetworkInfo};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Object store backend for an OSD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    #[default]
    Bluestore,
    Filestore,
}

impl StoreType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreType::Bluestore => "bluestore",
            StoreType::Filestore => "filestore",
        }
    }
}

/// Store tuning parameters. Sizes are in megabytes; zero means "let the
/// store pick".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreConfig {
    pub store_type: StoreType,
    pub wal_size_mb: u64,
    pub database_size_mb: u64,
    pub journal_size_mb: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_type: StoreType::Bluestore,
            wal_size_mb: DEFAULT_WAL_SIZE_MB,
            database_size_mb: DEFAULT_DATABASE_SIZE_MB,
            journal_size_mb: DEFAULT_JOURNAL_SIZE_MB,
        }
    }
}

/// Flag-bound settings for one daemon process.
///
/// Built once from the parsed flags and read-only afterwards.
/// `Config::default()` is what parsing an empty command line yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub devices: String,
    pub directories: String,
    pub metadata_device: String,
    pub data_dir: PathBuf,
    pub force_format: bool,
    pub location: String,
    pub ceph_config_override: String,
    pub store_config: StoreConfig,
    #[serde(skip)]
    pub network_info: NetworkInfo,
    pub mon_endpoints: String,
    pub node_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            devices: String::new(),
            directories: String::new(),
            metadata_device: String::new(),
            data_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            force_format: false,
            location: String::new(),
            ceph_config_override: String::new(),
            store_config: StoreConfig::default(),
            network_info: NetworkInfo::default(),
            mon_endpoints: String::new(),
            node_name: String::new(),
        }
    }
}

impl Config {
    /// Build the execution context for a daemon role.
    ///
    /// Must be called after flag parsing; on an unparsed (default) config it
    /// yields a context made of defaults.
    pub fn create_context(&self, log_level: LogLevel) -> Context {
        self.create_context_with(Arc::new(CommandExecutor), log_level)
    }

    pub fn create_context_with(&self, executor: Arc<dyn Executor>, log_level: LogLevel) -> Context {
        Context {
            executor,
            config_dir: self.data_dir.clone(),
            config_file_override: self.config_file_override(),
            log_level,
            network_info: self.network_info.simplify(),
        }
    }

    pub fn config_file_override(&self) -> Option<PathBuf> {
        let trimmed = self.ceph_config_override.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    /// Monitor endpoints split on commas, blanks dropped.
    pub fn mon_endpoint_list(&self) -> Vec<&str> {
        split_list(&self.mon_endpoints)
    }
}

fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

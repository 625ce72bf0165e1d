//! Network addresses handed to the daemon roles.
//!
//! The command line carries two spellings for each address: the current
//! `--public-ip`/`--private-ip` flags and the legacy IPv4-only
//! `--public-ipv4`/`--private-ipv4` flags. Both are kept side by side in
//! [`NetworkInfo`] and reconciled once by [`NetworkInfo::simplify`].

use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_ADDR;

/// Raw addresses as supplied by the operator.
///
/// `None` means the flag was not set explicitly (neither on the command line
/// nor through its environment variable).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInfo {
    pub public_addr: Option<String>,
    pub cluster_addr: Option<String>,
    pub public_addr_ipv4: Option<String>,
    pub cluster_addr_ipv4: Option<String>,
}

/// One canonical address per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleNetworkInfo {
    pub public_addr: String,
    pub cluster_addr: String,
}

impl Default for SimpleNetworkInfo {
    fn default() -> Self {
        Self {
            public_addr: DEFAULT_ADDR.to_string(),
            cluster_addr: DEFAULT_ADDR.to_string(),
        }
    }
}

/// A flag that replaced an older spelling of the same setting.
#[derive(Clone, Copy)]
pub struct RenamedFlag {
    pub new_name: &'static str,
    pub old_name: &'static str,
    pub new_value: fn(&NetworkInfo) -> Option<&str>,
    pub old_value: fn(&NetworkInfo) -> Option<&str>,
    pub apply: fn(&mut SimpleNetworkInfo, String),
}

impl RenamedFlag {
    /// Value this pair contributes: the new flag if set, else the old one.
    pub fn resolve(&self, raw: &NetworkInfo) -> Option<String> {
        (self.new_value)(raw)
            .or_else(|| (self.old_value)(raw))
            .map(str::to_string)
    }

    pub fn new_is_set(&self, raw: &NetworkInfo) -> bool {
        (self.new_value)(raw).is_some()
    }

    pub fn old_is_set(&self, raw: &NetworkInfo) -> bool {
        (self.old_value)(raw).is_some()
    }

    /// Redirect message attached to the old flag.
    pub fn deprecation_message(&self) -> String {
        format!(
            "Use --{} instead. Will be removed in a future version.",
            self.new_name
        )
    }
}

impl std::fmt::Debug for RenamedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenamedFlag")
            .field("new_name", &self.new_name)
            .field("old_name", &self.old_name)
            .finish()
    }
}

/// Every renamed network flag. Simplification and deprecation checks are
/// both driven from this table.
pub const RENAMED_FLAGS: &[RenamedFlag] = &[
    RenamedFlag {
        new_name: "public-ip",
        old_name: "public-ipv4",
        new_value: |raw| raw.public_addr.as_deref(),
        old_value: |raw| raw.public_addr_ipv4.as_deref(),
        apply: |out, addr| out.public_addr = addr,
    },
    RenamedFlag {
        new_name: "private-ip",
        old_name: "private-ipv4",
        new_value: |raw| raw.cluster_addr.as_deref(),
        old_value: |raw| raw.cluster_addr_ipv4.as_deref(),
        apply: |out, addr| out.cluster_addr = addr,
    },
];

impl NetworkInfo {
    /// Collapse new and legacy spellings into one address per role.
    ///
    /// An explicitly set new flag wins, then an explicitly set legacy flag,
    /// then the shared default.
    pub fn simplify(&self) -> SimpleNetworkInfo {
        let mut out = SimpleNetworkInfo::default();
        for renamed in RENAMED_FLAGS {
            if let Some(addr) = renamed.resolve(self) {
                (renamed.apply)(&mut out, addr);
            }
        }
        out
    }
}

//! Cluster identity shared by every daemon in a cluster.

use serde::Serialize;
use std::fmt;

use crate::defaults::DEFAULT_CLUSTER_NAME;

const REDACTED: &str = "<redacted>";

/// Identity and auth material of the cluster a daemon joins.
///
/// An empty `admin_secret` means "not supplied": whoever bootstraps the
/// cluster must generate one. Nothing in this crate generates secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct ClusterInfo {
    pub name: String,
    pub fsid: String,
    pub monitor_secret: String,
    pub admin_secret: String,
}

impl Default for ClusterInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_CLUSTER_NAME.to_string(),
            fsid: String::new(),
            monitor_secret: String::new(),
            admin_secret: String::new(),
        }
    }
}

impl ClusterInfo {
    pub fn admin_secret_needs_generation(&self) -> bool {
        self.admin_secret.is_empty()
    }

    /// View of the identity that is safe to print or log.
    pub fn redacted(&self) -> RedactedClusterInfo {
        RedactedClusterInfo {
            name: self.name.clone(),
            fsid: self.fsid.clone(),
            monitor_secret: secret_state(&self.monitor_secret),
            admin_secret: if self.admin_secret_needs_generation() {
                "<generate>"
            } else {
                REDACTED
            },
        }
    }
}

impl fmt::Debug for ClusterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = self.redacted();
        f.debug_struct("ClusterInfo")
            .field("name", &redacted.name)
            .field("fsid", &redacted.fsid)
            .field("monitor_secret", &redacted.monitor_secret)
            .field("admin_secret", &redacted.admin_secret)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactedClusterInfo {
    pub name: String,
    pub fsid: String,
    pub monitor_secret: &'static str,
    pub admin_secret: &'static str,
}

fn secret_state(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        REDACTED
    }
}

//! Handing a resolved role over to its daemon process.

use anyhow::{Context as _, Result};
use rook_clusterd::{ClusterInfo, Context, ContextSnapshot, RedactedClusterInfo};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use super::config::Config;

/// External daemon invocation for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaemonLaunch {
    pub binary: &'static str,
    pub args: Vec<String>,
}

impl DaemonLaunch {
    /// Start a launch with the arguments every Ceph daemon takes.
    pub fn ceph_daemon(
        binary: &'static str,
        ctx: &Context,
        config: &Config,
        cluster: &ClusterInfo,
        daemon_id: &str,
        keyring: Option<&PathBuf>,
    ) -> Self {
        let daemon_dir = daemon_dir(ctx, daemon_id);
        let keyring = keyring
            .cloned()
            .unwrap_or_else(|| daemon_dir.join("keyring"));

        let mut args = vec![
            "--foreground".to_string(),
            format!("--cluster={}", cluster.name),
            format!("--id={}", daemon_id),
            format!(
                "--conf={}",
                daemon_dir.join(format!("{}.config", cluster.name)).display()
            ),
            format!("--keyring={}", keyring.display()),
        ];
        let endpoints = config.mon_endpoint_list();
        if !endpoints.is_empty() {
            args.push(format!("--mon-host={}", endpoints.join(",")));
        }
        Self { binary, args }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// Per-daemon directory under the configured config dir.
pub fn daemon_dir(ctx: &Context, daemon_id: &str) -> PathBuf {
    ctx.config_dir.join(daemon_id)
}

/// What a role would do, printed by `--dry-run`.
#[derive(Debug, Serialize)]
pub struct LaunchPlan<'a> {
    pub role: &'static str,
    pub context: ContextSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<RedactedClusterInfo>,
    pub config: &'a Config,
    pub launch: Option<&'a DaemonLaunch>,
}

/// Print the plan as JSON to stdout.
pub fn print_plan(plan: &LaunchPlan<'_>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(plan)?);
    Ok(())
}

/// Run the daemon in the foreground through the context's executor.
pub fn run_daemon(role: &'static str, ctx: &Context, launch: &DaemonLaunch) -> Result<()> {
    info!("Starting {} daemon ({})", role, launch.binary);
    ctx.executor
        .execute_command(role, launch.binary, &launch.args)
        .with_context(|| format!("{} daemon exited with an error", role))?;
    info!("{} daemon stopped", role);
    Ok(())
}

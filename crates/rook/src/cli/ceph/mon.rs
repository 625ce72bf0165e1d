//! `rook ceph mon`: run a Ceph monitor.

use anyhow::Result;
use rook_clusterd::defaults::DEFAULT_MON_PORT;
use std::net::{IpAddr, SocketAddr};

use super::flags::CephFlags;
use super::launch::DaemonLaunch;
use super::{finish, prepare, RoleRun};
use crate::cli::error::HelpfulError;
use crate::cli::GlobalOptions;

pub const ROLE: &str = "mon";

#[derive(Debug, Clone, clap::Args)]
pub struct MonArgs {
    #[command(flatten)]
    pub ceph: CephFlags,

    /// name of the monitor
    #[arg(long, env = "ROOK_MON_NAME", default_value = "")]
    pub name: String,

    /// port of the monitor
    #[arg(long, env = "ROOK_MON_PORT", default_value_t = DEFAULT_MON_PORT)]
    pub port: u16,
}

pub fn run(args: MonArgs, globals: &GlobalOptions) -> Result<()> {
    let run = prepare(ROLE, &args.ceph, None, globals)?;
    let launch = build_launch(&args, &run)?;
    finish(&run, Some(launch), globals)
}

fn build_launch(args: &MonArgs, run: &RoleRun) -> Result<DaemonLaunch> {
    if args.name.is_empty() {
        return Err(HelpfulError::missing_role_flag(ROLE, "name", "ROOK_MON_NAME").into());
    }
    let launch = DaemonLaunch::ceph_daemon(
        "ceph-mon",
        &run.context,
        &run.config,
        &run.cluster,
        &args.name,
        None,
    )
    .arg(format!(
        "--public-addr={}",
        host_port(&run.context.network_info.public_addr, args.port)
    ))
    .arg(format!(
        "--mon-data={}",
        super::launch::daemon_dir(&run.context, &args.name)
            .join("data")
            .display()
    ));
    Ok(launch)
}

/// `host:port`, with IPv6 literals bracketed.
fn host_port(host: &str, port: u16) -> String {
    match host.parse::<IpAddr>() {
        Ok(ip) => SocketAddr::new(ip, port).to_string(),
        Err(_) => format!("{}:{}", host, port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        mon: MonArgs,
    }

    fn launch_for(args: &[&str]) -> DaemonLaunch {
        let argv = std::iter::once("mon").chain(args.iter().copied());
        let args = Harness::try_parse_from(argv).expect("mon flags parse").mon;
        let globals = GlobalOptions::default();
        let run = prepare(ROLE, &args.ceph, None, &globals).expect("mon context");
        build_launch(&args, &run).expect("mon launch")
    }

    fn public_addr_arg(launch: &DaemonLaunch) -> &str {
        launch
            .args
            .iter()
            .find(|a| a.starts_with("--public-addr="))
            .expect("public addr argument")
    }

    #[test]
    fn test_ipv4_public_addr() {
        let launch = launch_for(&["--name=a", "--public-ip=10.0.0.5"]);
        assert_eq!(public_addr_arg(&launch), "--public-addr=10.0.0.5:6790");
    }

    #[test]
    fn test_ipv6_public_addr_is_bracketed() {
        let launch = launch_for(&["--name=a", "--public-ip=fd00::5", "--port=6789"]);
        assert_eq!(public_addr_arg(&launch), "--public-addr=[fd00::5]:6789");
    }

    #[test]
    fn test_hostname_public_addr() {
        assert_eq!(host_port("mon-a.rook.local", 6790), "mon-a.rook.local:6790");
    }
}

//! `rook ceph`: the Ceph operator and daemon roles.
//!
//! Every role follows the same path: parse flags, verify renamed flags, bind
//! them into a [`Config`] and [`ClusterInfo`], build the execution
//! [`Context`], then either print the plan (`--dry-run`) or start the daemon.

pub mod agent;
pub mod config;
pub mod flags;
pub mod launch;
pub mod mds;
pub mod mgr;
pub mod mon;
pub mod operator;
pub mod osd;
pub mod rgw;
pub mod verify;

use anyhow::Result;
use clap::CommandFactory;
use rook_clusterd::{ClusterInfo, Context};
use tracing::debug;

use self::config::Config;
use self::flags::{CephFlags, OsdFlags};
use self::launch::{print_plan, run_daemon, DaemonLaunch, LaunchPlan};
use self::verify::verify_renamed_flags;
use super::error::HelpfulError;
use super::{Cli, GlobalOptions};

pub const CEPH_COMMAND: &str = "ceph";

/// Names of the roles attached under `rook ceph`, in registration order.
pub const ROLES: [&str; 7] = [
    operator::ROLE,
    agent::ROLE,
    mon::ROLE,
    osd::ROLE,
    mgr::ROLE,
    rgw::ROLE,
    mds::ROLE,
];

#[derive(Debug, clap::Subcommand)]
pub enum CephCommand {
    /// Runs the Ceph operator for orchestrating and managing Ceph storage
    Operator(operator::OperatorArgs),

    /// Runs the rook volume agent on a node
    Agent(agent::AgentArgs),

    /// Generates mon config and runs the mon daemon
    Mon(mon::MonArgs),

    /// Provisions and runs the osd daemon
    Osd(osd::OsdArgs),

    /// Generates mgr config and runs the mgr daemon
    Mgr(mgr::MgrArgs),

    /// Generates rgw config and runs the rgw daemon
    Rgw(rgw::RgwArgs),

    /// Generates mds config and runs the mds daemon
    Mds(mds::MdsArgs),
}

pub fn run(command: CephCommand, globals: &GlobalOptions) -> Result<()> {
    match command {
        CephCommand::Operator(args) => operator::run(args, globals),
        CephCommand::Agent(args) => agent::run(args, globals),
        CephCommand::Mon(args) => mon::run(args, globals),
        CephCommand::Osd(args) => osd::run(args, globals),
        CephCommand::Mgr(args) => mgr::run(args, globals),
        CephCommand::Rgw(args) => rgw::run(args, globals),
        CephCommand::Mds(args) => mds::run(args, globals),
    }
}

/// Everything a role resolved before it starts.
#[derive(Debug)]
pub struct RoleRun {
    pub role: &'static str,
    pub config: Config,
    pub cluster: ClusterInfo,
    pub context: Context,
    /// False for roles that take no cluster flags.
    pub binds_cluster: bool,
}

impl RoleRun {
    /// Context for roles without Ceph flags: every value is a default.
    pub fn from_defaults(role: &'static str, globals: &GlobalOptions) -> Self {
        let config = Config::default();
        let context = config.create_context(globals.log_level);
        Self {
            role,
            config,
            cluster: ClusterInfo::default(),
            context,
            binds_cluster: false,
        }
    }
}

/// The registered clap command for a role, used to check renamed flags.
pub fn role_command(role: &'static str) -> clap::Command {
    Cli::command()
        .find_subcommand(CEPH_COMMAND)
        .and_then(|ceph| ceph.find_subcommand(role))
        .cloned()
        .unwrap_or_else(|| clap::Command::new(role))
}

/// Verify renamed flags, report deprecations and build the context.
pub fn prepare(
    role: &'static str,
    ceph: &CephFlags,
    osd: Option<&OsdFlags>,
    globals: &GlobalOptions,
) -> Result<RoleRun> {
    let network = ceph.network_info();
    let notices = verify_renamed_flags(&role_command(role), &network)
        .map_err(|err| HelpfulError::invalid_flag_table(role, &err.to_string()))?;
    for notice in &notices {
        eprintln!("{}", notice);
    }

    let config = ceph.to_config(osd);
    let cluster = ceph.cluster_info();
    let context = config.create_context(globals.log_level);
    debug!("Resolved {} context: {:?}", role, context);

    Ok(RoleRun {
        role,
        config,
        cluster,
        context,
        binds_cluster: true,
    })
}

/// Print the plan or hand the role to its daemon.
pub fn finish(run: &RoleRun, launch: Option<DaemonLaunch>, globals: &GlobalOptions) -> Result<()> {
    if run.binds_cluster && run.cluster.admin_secret_needs_generation() {
        debug!("No admin secret supplied; cluster bootstrap must generate one");
    }

    if globals.dry_run {
        return print_plan(&LaunchPlan {
            role: run.role,
            context: run.context.snapshot(),
            cluster: run.binds_cluster.then(|| run.cluster.redacted()),
            config: &run.config,
            launch: launch.as_ref(),
        });
    }

    match launch {
        Some(launch) => run_daemon(run.role, &run.context, &launch),
        None => Err(HelpfulError::role_not_bundled(run.role).into()),
    }
}

use serde_json::Value;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_rook(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rook"));
    cmd.env_clear().args(args);
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("run rook binary")
}

fn run_plan(args: &[&str], envs: &[(&str, &str)]) -> (Value, String) {
    let output = run_rook(args, envs);
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(
        output.status.success(),
        "rook {:?} failed: {}",
        args,
        stderr
    );
    let plan = serde_json::from_slice(&output.stdout).expect("dry-run output is JSON");
    (plan, stderr)
}

fn network(plan: &Value) -> (&str, &str) {
    let info = &plan["context"]["network_info"];
    (
        info["public_addr"].as_str().expect("public_addr"),
        info["cluster_addr"].as_str().expect("cluster_addr"),
    )
}

#[test]
fn test_public_ip_only() {
    let (plan, stderr) = run_plan(
        &["ceph", "mon", "--name=a", "--public-ip=10.0.0.5", "--dry-run"],
        &[],
    );
    assert_eq!(network(&plan), ("10.0.0.5", "127.0.0.1"));
    assert!(!stderr.contains("deprecated"));

    let args = plan["launch"]["args"].as_array().expect("launch args");
    assert!(args.iter().any(|a| a == "--public-addr=10.0.0.5:6790"));
    assert_eq!(plan["launch"]["binary"], "ceph-mon");
}

#[test]
fn test_ipv6_public_ip_is_bracketed_for_mon() {
    let (plan, _) = run_plan(
        &["ceph", "mon", "--name=a", "--public-ip=fd00::5", "--dry-run"],
        &[],
    );
    assert_eq!(network(&plan).0, "fd00::5");
    let args = plan["launch"]["args"].as_array().expect("launch args");
    assert!(args.iter().any(|a| a == "--public-addr=[fd00::5]:6790"));
}

#[test]
fn test_oversized_store_size_is_rejected() {
    let output = run_rook(
        &[
            "ceph",
            "osd",
            "--osd-id=0",
            "--osd-wal-size=18446744073709551615",
            "--dry-run",
        ],
        &[],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--osd-wal-size=18446744073709551615 is too large"));
}

#[test]
fn test_legacy_private_ip_only() {
    let (plan, stderr) = run_plan(
        &["ceph", "osd", "--osd-id=3", "--private-ipv4=192.168.1.9", "--dry-run"],
        &[],
    );
    assert_eq!(network(&plan), ("127.0.0.1", "192.168.1.9"));
    assert_eq!(
        stderr
            .matches("Flag --private-ipv4 has been deprecated, Use --private-ip instead. Will be removed in a future version.")
            .count(),
        1
    );
}

#[test]
fn test_no_network_flags() {
    let (plan, _) = run_plan(&["ceph", "mgr", "--name=a", "--dry-run"], &[]);
    assert_eq!(network(&plan), ("127.0.0.1", "127.0.0.1"));
    assert_eq!(plan["context"]["config_dir"], "/var/lib/rook");
    assert!(plan["context"]["config_file_override"].is_null());
    assert_eq!(plan["cluster"]["name"], "rookcluster");
}

#[test]
fn test_new_flag_wins_over_legacy() {
    let (plan, stderr) = run_plan(
        &[
            "ceph",
            "mon",
            "--name=a",
            "--public-ip=10.0.0.5",
            "--public-ipv4=172.16.0.1",
            "--dry-run",
        ],
        &[],
    );
    assert_eq!(network(&plan).0, "10.0.0.5");
    assert!(stderr.contains("Flag --public-ipv4 has been deprecated"));
}

#[test]
fn test_admin_secret_omitted_signals_generation() {
    let (plan, _) = run_plan(&["ceph", "mon", "--name=a", "--dry-run"], &[]);
    assert_eq!(plan["cluster"]["admin_secret"], "<generate>");
}

#[test]
fn test_secrets_are_not_printed() {
    let output = run_rook(
        &[
            "ceph",
            "mds",
            "--name=fs-a",
            "--filesystem-id=1",
            "--admin-secret=AQDadminsecret==",
            "--mon-secret=AQDmonsecret==",
            "--dry-run",
        ],
        &[],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("AQDadminsecret=="));
    assert!(!stdout.contains("AQDmonsecret=="));
}

#[test]
fn test_env_values_count_as_explicit() {
    let (plan, stderr) = run_plan(
        &["ceph", "rgw", "--name=store", "--dry-run"],
        &[("ROOK_PUBLIC_IPV4", "172.16.0.9"), ("ROOK_PRIVATE_IP", "10.1.0.9")],
    );
    assert_eq!(network(&plan), ("172.16.0.9", "10.1.0.9"));
    assert!(stderr.contains("Flag --public-ipv4 has been deprecated"));
}

#[test]
fn test_command_line_beats_environment() {
    let (plan, _) = run_plan(
        &["ceph", "mgr", "--name=a", "--public-ip=10.0.0.5", "--dry-run"],
        &[("ROOK_PUBLIC_IP", "10.9.9.9"), ("ROOK_CONFIG_DIR", "/srv/rook")],
    );
    assert_eq!(network(&plan).0, "10.0.0.5");
    assert_eq!(plan["context"]["config_dir"], "/srv/rook");
}

#[test]
fn test_context_is_stable_across_runs() {
    let args = [
        "ceph",
        "osd",
        "--osd-id=0",
        "--devices=sdb,sdc",
        "--ceph-config-override=/etc/ceph/extra.conf",
        "--log-level=debug",
        "--dry-run",
    ];
    let (first, _) = run_plan(&args, &[]);
    let (second, _) = run_plan(&args, &[]);
    assert_eq!(first, second);
    assert_eq!(first["context"]["log_level"], "debug");
    assert_eq!(first["context"]["config_file_override"], "/etc/ceph/extra.conf");
    assert_eq!(first["config"]["devices"], "sdb,sdc");
}

#[test]
fn test_ceph_without_role_is_a_usage_error() {
    let output = run_rook(&["ceph"], &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let output = run_rook(&["ceph", "mon", "--name=a", "--public-ipv6=::1"], &[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_help_hides_ceph_and_legacy_flags() {
    let root = run_rook(&["--help"], &[]);
    assert!(root.status.success());
    let root_help = String::from_utf8_lossy(&root.stdout);
    assert!(!root_help.contains("ceph"));

    let mon = run_rook(&["ceph", "mon", "--help"], &[]);
    let mon_help = String::from_utf8_lossy(&mon.stdout);
    assert!(mon_help.contains("--public-ip"));
    assert!(!mon_help.contains("--public-ipv4"));
    assert!(!mon_help.contains("--private-ipv4"));
}

#[test]
fn test_operator_dry_run_uses_defaults() {
    let (plan, _) = run_plan(&["ceph", "operator", "--dry-run"], &[]);
    assert_eq!(plan["role"], "operator");
    assert!(plan["launch"].is_null());
    assert!(plan.get("cluster").is_none());
    assert_eq!(network(&plan), ("127.0.0.1", "127.0.0.1"));
}

#[test]
fn test_operator_is_not_bundled() {
    let output = run_rook(&["ceph", "operator"], &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("The operator role is not bundled in this build"));
}

#[test]
fn test_missing_role_flag() {
    let output = run_rook(&["ceph", "mon", "--dry-run"], &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing required flag --name"));
}

#[test]
fn test_missing_daemon_binary_fails_launch() {
    let empty_path = TempDir::new().expect("create temp dir");
    let path = empty_path.path().to_string_lossy().to_string();
    let output = run_rook(&["ceph", "mgr", "--name=a"], &[("PATH", path.as_str())]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mgr daemon exited with an error"));
    assert!(stderr.contains("ceph-mgr"));
}

#[test]
fn test_log_dir_receives_log_file() {
    let log_dir = TempDir::new().expect("create temp dir");
    let dir = log_dir.path().join("logs");
    let dir_str = dir.to_string_lossy().to_string();
    let (_, _) = run_plan(
        &["ceph", "mgr", "--name=a", "--log-dir", dir_str.as_str(), "--dry-run"],
        &[],
    );
    let entries: Vec<_> = std::fs::read_dir(&dir)
        .expect("log dir created")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert!(entries.iter().any(|name| name.starts_with("rook.log")));
}

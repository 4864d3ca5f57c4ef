// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::error::ErrorKind;
use clap::Parser;
use yare::parameterized;

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    args: WaitArgs,
}

fn parse(args: &[&str]) -> Result<WaitArgs, clap::Error> {
    TestCli::try_parse_from(std::iter::once("wait").chain(args.iter().copied())).map(|cli| cli.args)
}

fn config() -> Config {
    Config { context: None, poll: PollConfig::default() }
}

#[parameterized(
    restore = { "restore", WatchedKind::Restore },
    schedule = { "backup-schedule", WatchedKind::BackupSchedule },
    hub = { "multiclusterhub", WatchedKind::MultiClusterHub },
    hub_alias = { "mch", WatchedKind::MultiClusterHub },
)]
fn kind_names_map_to_watched_kinds(arg: &str, expected: WatchedKind) {
    let args = parse(&[arg, "x"]).unwrap();
    assert_eq!(WatchedKind::from(args.kind), expected);
}

#[test]
fn defaults_follow_the_kind() {
    let args = parse(&["restore", "restore-acm"]).unwrap();
    let kind = WatchedKind::from(args.kind);
    assert_eq!(args.target(kind), TargetRef::new("open-cluster-management-backup", "restore-acm"));
    assert_eq!(args.phases(kind), vec!["Finished".to_string()]);
    assert_eq!(args.poll_config(&config()), PollConfig::default());
}

#[test]
fn flags_override_defaults() {
    let args = parse(&[
        "multiclusterhub",
        "hub",
        "-n",
        "acm",
        "--phase",
        "Running",
        "--phase",
        "Updating",
        "--timeout",
        "20m",
        "--interval",
        "15s",
    ])
    .unwrap();
    let kind = WatchedKind::from(args.kind);
    assert_eq!(args.target(kind), TargetRef::new("acm", "hub"));
    assert_eq!(args.phases(kind), vec!["Running".to_string(), "Updating".to_string()]);
    let poll = args.poll_config(&config());
    assert_eq!(poll.timeout, Duration::from_secs(1200));
    assert_eq!(poll.interval, Duration::from_secs(15));
}

#[parameterized(
    zero = { "0" },
    unit = { "5d" },
    junk = { "soon" },
)]
fn bad_timeout_is_a_usage_error(value: &str) {
    let err = parse(&["restore", "x", "--timeout", value]).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path, process::Output};

use assert_cmd::Command;

/// Well-known development key, funded on local dev nodes.
const DEV_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn write_lottery(dir: &Path, networks: serde_json::Value) {
    let artifact = serde_json::json!({
        "contractName": "Lottery",
        "abi": [],
        "bytecode": "0x6080604052348015600f57600080fd5b50603f80601d6000396000f3fe",
        "networks": networks,
    });
    fs::write(dir.join("Lottery.json"), artifact.to_string()).unwrap();
}

fn lottery_migrate(args: &[&str]) -> Output {
    Command::cargo_bin("lottery-migrate")
        .unwrap()
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_artifact_fails_without_success_line() {
    let dir = tempfile::tempdir().unwrap();
    let output = lottery_migrate(&[
        "migrate",
        "--build-dir",
        dir.path().to_str().unwrap(),
        "--private-key",
        DEV_PRIVATE_KEY,
    ]);

    assert!(!output.status.success());
    assert!(!stdout(&output).contains("deployed to"));
    assert!(stderr(&output).contains("could not find artifact"));
}

#[test]
fn unreachable_endpoint_fails_without_success_line() {
    let dir = tempfile::tempdir().unwrap();
    write_lottery(dir.path(), serde_json::json!({}));
    let output = lottery_migrate(&[
        "migrate",
        "--build-dir",
        dir.path().to_str().unwrap(),
        "--endpoint",
        "http://127.0.0.1:1",
        "--private-key",
        DEV_PRIVATE_KEY,
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("Lottery deployed to"));
    assert!(stderr(&output).contains("error"));
}

#[test]
fn unknown_network_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_lottery(dir.path(), serde_json::json!({}));
    let config = dir.path().join("migrations.toml");
    fs::write(&config, "[networks.development]\nendpoint = \"http://127.0.0.1:1\"\n").unwrap();

    let output = lottery_migrate(&[
        "migrate",
        "--build-dir",
        dir.path().to_str().unwrap(),
        "--network",
        "mainnet",
        "--config",
        config.to_str().unwrap(),
        "--private-key",
        DEV_PRIVATE_KEY,
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown network"));
}

#[test]
fn bad_constructor_args_fail_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    write_lottery(dir.path(), serde_json::json!({}));

    let output = lottery_migrate(&[
        "deploy",
        "Lottery",
        "--build-dir",
        dir.path().to_str().unwrap(),
        "--constructor-args",
        "100",
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid constructor"));
}

#[test]
fn networks_lists_recorded_deployments() {
    let dir = tempfile::tempdir().unwrap();
    write_lottery(
        dir.path(),
        serde_json::json!({
            "5777": { "address": "0x0000000000000000000000000000000000000001" },
        }),
    );

    let output = lottery_migrate(&["networks", "--build-dir", dir.path().to_str().unwrap()]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Lottery:\n  5777: 0x0000000000000000000000000000000000000001\n"
    );
}

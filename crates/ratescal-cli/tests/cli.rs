//! Integration tests for the ratescal binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ratescal() -> Command {
    Command::cargo_bin("ratescal").unwrap()
}

/// Writes a small USD calibration set and its manifest into `dir`.
fn write_set(dir: &Path) {
    fs::write(
        dir.join("groups.csv"),
        "Group Name,Curve Type,Reference,Curve Name\n\
         Default,discount,USD,USD-Disc\n\
         Default,forward,USD-LIBOR-3M,USD-3ML\n",
    )
    .unwrap();
    fs::write(
        dir.join("settings.csv"),
        "Curve Name,Value Type,Day Count,Interpolator,Left Extrapolator,Right Extrapolator\n\
         USD-Disc,zero,Act/365F,Linear,Flat,Flat\n\
         USD-3ML,df,Act/360,LogLinear,Flat,Flat\n",
    )
    .unwrap();
    fs::write(
        dir.join("nodes.csv"),
        "Curve Name,Label,Symbology,Ticker,Field Name,Type,Convention,Time,Spread\n\
         USD-Disc,,OG,OIS-1Y,,OIS,USD-FIXED-1Y-FED-FUND-OIS,1Y,\n\
         USD-Disc,,OG,OIS-2Y,,OIS,USD-FIXED-1Y-FED-FUND-OIS,2Y,\n\
         USD-3ML,,OG,FRA-3x6,,FRA,USD-LIBOR-3M,3Mx6M,\n",
    )
    .unwrap();
    fs::write(
        dir.join("set.toml"),
        "groups = \"groups.csv\"\nsettings = \"settings.csv\"\nnodes = [\"nodes.csv\"]\n",
    )
    .unwrap();
}

#[test]
fn test_help() {
    ratescal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("load"))
        .stdout(predicate::str::contains("conventions"));
}

#[test]
fn test_load_table_from_paths() {
    let dir = TempDir::new().unwrap();
    write_set(dir.path());

    ratescal()
        .current_dir(dir.path())
        .args([
            "load",
            "--groups",
            "groups.csv",
            "--settings",
            "settings.csv",
            "--nodes",
            "nodes.csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD-Disc"))
        .stdout(predicate::str::contains("USD-LIBOR-3M"))
        .stdout(predicate::str::contains("Loaded 1 curve group(s)"));
}

#[test]
fn test_load_json_from_manifest() {
    let dir = TempDir::new().unwrap();
    write_set(dir.path());

    let output = ratescal()
        .args(["--format", "json", "load", "--manifest"])
        .arg(dir.path().join("set.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let group = &json["Default"];
    assert_eq!(group["discount_curves"]["USD"]["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(
        group["forward_curves"]["USD-LIBOR-3M"]["settings"]["value_type"],
        "DiscountFactor"
    );
}

#[test]
fn test_load_failure_reports_error() {
    let dir = TempDir::new().unwrap();
    write_set(dir.path());
    fs::write(
        dir.path().join("bad.csv"),
        "Curve Name,Label,Symbology,Ticker,Field Name,Type,Convention,Time,Spread\n\
         USD-Disc,,OG,T,,XYZ,USD-LIBOR-3M,3Mx6M,\n",
    )
    .unwrap();

    ratescal()
        .current_dir(dir.path())
        .args([
            "load",
            "--groups",
            "groups.csv",
            "--settings",
            "settings.csv",
            "--nodes",
            "bad.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid curve node type: 'XYZ'"));
}

#[test]
fn test_load_requires_inputs() {
    ratescal()
        .args(["load", "--groups", "groups.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--settings"));
}

#[test]
fn test_conventions_filtered() {
    ratescal()
        .args(["conventions", "--kind", "OIS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD-FIXED-1Y-FED-FUND-OIS"))
        .stdout(predicate::str::contains("USD-LIBOR-3M-LIBOR-6M").not());
}

//! Integration tests for the export commands
//!
//! These tests run the commands end to end against JSON pole tables in a
//! temporary directory and inspect the written artifacts.

use clap::Parser;
use makeready_cli::commands::{self, SheetKind};
use makeready_cli::config::OutputFormat;
use makeready_cli::{Cli, Command, Config, Formatter};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

fn formatter() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

fn write_input(dir: &Path, rows: Value) -> String {
    let path = dir.join("poles.json");
    fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();
    path.display().to_string()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn rows() -> Value {
    json!([
        {
            "SCID": 1,
            "Latitude": 41.41,
            "Longitude": -75.66,
            "Tag": "NT",
            "Owner": "Verizon Pennsylvania Inc.",
            "address": "12 Main St, Scranton, PA",
            "verizon pennsylvania inc._tag": "VZ-1",
            "pole_tag": "A99",
            "Make Ready Notes": "Loop Telecom Pennsylvania LLC Com at 20-6 Raise 18\nComcast Guy at 18-0 Attach"
        },
        {
            "SCID": "1A",
            "Owner": "Verizon Pennsylvania Inc.",
            "Make Ready Notes": "Loop Telecom Pennsylvania LLC Com at 20-6 Attach"
        },
        {
            "SCID": 2,
            "Tag": "PPL-2",
            "address": "5 Elm St, Scranton, PA",
            "Owner": "Verizon Pennsylvania Inc.",
            "Make Ready Notes": null
        },
        {
            "SCID": 3,
            "Tag": "PPL-3",
            "address": "9 Ash St, Dunmore, PA",
            "Owner": "PPL Company",
            "Make Ready Notes": "Comcast Com at 30-0 Raise 6"
        }
    ])
}

fn parse(args: &[&str]) -> Command {
    let mut argv = vec!["makeready"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv).command
}

#[test]
fn test_make_ready_writes_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), rows());
    let out = dir.path().join("out");

    let Command::MakeReady(args) = parse(&[
        "make-ready",
        &input,
        "-o",
        out.to_str().unwrap(),
        "-n",
        "job",
    ]) else {
        panic!("Expected MakeReady command");
    };
    commands::execute_make_ready(args, &Config::default(), &formatter()).unwrap();

    let artifact = read_json(&out.join("job-verizon-MRS.json"));
    assert!(artifact["run_id"].is_string());
    assert!(artifact["generated_at"].is_u64());

    let make_ready = &artifact["sheets"]["Make Ready"];
    assert_eq!(make_ready["Pole Ref #"], json!(["1", "1", "2"]));
    assert_eq!(
        make_ready["Attacher Company"],
        json!(["LOOP INTERNET HOLDCO LLC", "COMCAST", "Not Surveyed"])
    );
    assert_eq!(make_ready["New Height"], json!(["22'-0\"", "18'-0\"", "n/a"]));

    let info = &artifact["sheets"]["Attachment Info"];
    assert_eq!(info["Attachment Height"], json!(["22'-0\""]));

    // Row 1 arrives as "NT" and takes the merged candidate
    assert_eq!(make_ready["ELCO Pole #"], json!(["VZ-1", "VZ-1", "PPL-2"]));

    let details = &artifact["sheets"]["Pole Details"];
    assert_eq!(details["Street Name"], json!(["Main St"]));
    assert_eq!(details["ELCO Pole #"], json!(["VZ-1"]));
    assert_eq!(details["Latitude"], json!([41.41]));

    assert!(!out.join("error.log").exists());
}

#[test]
fn test_make_ready_failure_logs_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut bad = rows();
    bad[2]["Make Ready Notes"] = json!("Comcast Com at 20-13 Raise 6");
    let input = write_input(dir.path(), bad);

    let Command::MakeReady(args) = parse(&["make-ready", &input, "-n", "job"]) else {
        panic!("Expected MakeReady command");
    };
    let result = commands::execute_make_ready(args, &Config::default(), &formatter());
    assert!(result.is_err());

    assert!(!dir.path().join("job-verizon-MRS.json").exists());
    let log = fs::read_to_string(dir.path().join("error.log")).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("20-13"));
}

#[test]
fn test_make_ready_other_owner() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), rows());

    let Command::MakeReady(args) = parse(&["make-ready", &input, "-n", "ppl", "--owner", "PPL"])
    else {
        panic!("Expected MakeReady command");
    };
    commands::execute_make_ready(args, &Config::default(), &formatter()).unwrap();

    let artifact = read_json(&dir.path().join("ppl-verizon-MRS.json"));
    let make_ready = &artifact["sheets"]["Make Ready"];
    assert_eq!(make_ready["Pole Ref #"], json!(["3"]));
    assert_eq!(make_ready["New Height"], json!(["30'-6\""]));
}

#[test]
fn test_make_ready_merges_tags_like_pole_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        json!([{
            "SCID": 8,
            "Tag": "NT",
            "Owner": "Verizon Pennsylvania Inc.",
            "address": "30 Pine St, Scranton, PA",
            "pole_tag": "B12",
            "unknown_tag": "A99",
            "Make Ready Notes": "Comcast Com at 20-6 Attach"
        }]),
    );

    let Command::MakeReady(args) = parse(&["make-ready", &input, "-n", "job"]) else {
        panic!("Expected MakeReady command");
    };
    commands::execute_make_ready(args, &Config::default(), &formatter()).unwrap();
    let Command::Vetro(args) = parse(&["vetro", &input, "-n", "job"]) else {
        panic!("Expected Vetro command");
    };
    commands::execute_export(SheetKind::Vetro, args, &Config::default(), &formatter()).unwrap();

    let mrs = read_json(&dir.path().join("job-verizon-MRS.json"));
    let vetro = read_json(&dir.path().join("job-Vetro-data.json"));
    assert_eq!(mrs["sheets"]["Make Ready"]["ELCO Pole #"], json!(["B12"]));
    assert_eq!(vetro["sheets"]["Vetro"]["Tag"], json!(["B12"]));
}

#[test]
fn test_vetro_export_merges_tags() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), rows());

    let Command::Vetro(args) = parse(&["vetro", &input, "-n", "job"]) else {
        panic!("Expected Vetro command");
    };
    commands::execute_export(SheetKind::Vetro, args, &Config::default(), &formatter()).unwrap();

    let artifact = read_json(&dir.path().join("job-Vetro-data.json"));
    let sheet = &artifact["sheets"]["Vetro"];
    assert_eq!(sheet["SCID"], json!(["1", "1A", "2", "3"]));
    // "VZ-1" beats "A99" as the greater string
    assert_eq!(sheet["Tag"][0], "VZ-1");
    assert_eq!(sheet["Owner"], json!(["Verizon", "Verizon", "Verizon", "PPL"]));
}

#[test]
fn test_mrn_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), rows());

    let Command::Mrn(args) = parse(&["mrn", &input, "-n", "job"]) else {
        panic!("Expected Mrn command");
    };
    commands::execute_export(SheetKind::Mrn, args, &Config::default(), &formatter()).unwrap();

    let artifact = read_json(&dir.path().join("job-MRN-data.json"));
    let sheet = &artifact["sheets"]["MRN"];
    let headers: Vec<&String> = sheet.as_object().unwrap().keys().collect();
    assert_eq!(headers.len(), 5);
    assert_eq!(sheet["Make Ready Notes"][2], Value::Null);
}

#[test]
fn test_missing_input_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.json");

    let Command::Mrn(args) = parse(&["mrn", input.to_str().unwrap(), "-n", "job"]) else {
        panic!("Expected Mrn command");
    };
    let result = commands::execute_export(SheetKind::Mrn, args, &Config::default(), &formatter());

    assert!(result.is_err());
    assert!(dir.path().join("error.log").exists());
}

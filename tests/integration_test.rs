//! Integration tests for supernets
//!
//! These tests drive the complete workflow from an input file to the printed result.

use std::path::PathBuf;
use supernets::config::{Config, OutputFormat};
use supernets::input::ingest_file;
use supernets::processing::AggregationEngine;
use supernets::{run, SupernetError};

fn config_for(file: &str) -> Config {
    Config {
        subnet_file: Some(PathBuf::from(format!("src/tests/test_data/{file}"))),
        ..Config::default()
    }
}

fn run_file(config: &Config) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(config, &mut out, &mut err).expect("Failed to run supernets");
    (
        String::from_utf8(out).expect("stdout not utf8"),
        String::from_utf8(err).expect("stderr not utf8"),
    )
}

#[test]
fn test_scenario_siblings_merge() {
    let (out, err) = run_file(&config_for("scenario_01_siblings.txt"));
    assert_eq!(out, "10.0.0.0/24\n");
    assert!(err.is_empty());
}

#[test]
fn test_scenario_subsumed_dropped() {
    let (out, _) = run_file(&config_for("scenario_02_subsumed.txt"));
    assert_eq!(out, "10.0.0.0/24\n");
}

#[test]
fn test_scenario_ipv6_siblings_merge() {
    let (out, _) = run_file(&config_for("scenario_03_ipv6.txt"));
    assert_eq!(out, "2001:db8::/32\n");
}

#[test]
fn test_scenario_malformed_line_reported() {
    let (out, err) = run_file(&config_for("scenario_04_malformed.txt"));
    assert_eq!(out, "10.1.0.0/23\n");
    assert!(err.contains("not-an-ip is not a valid network (line 2)"));
}

#[test]
fn test_scenario_non_siblings_unique() {
    let config = Config {
        verbose: true,
        ..config_for("scenario_05_unique.txt")
    };
    let (out, _) = run_file(&config);
    assert_eq!(out.matches("is unique").count(), 2);
    assert!(out.ends_with("192.168.0.0/25\n192.168.1.0/25\n"));
}

#[test]
fn test_mixed_families_file() {
    let (out, err) = run_file(&config_for("mixed_01.txt"));
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "10.20.0.0/14",
            "172.16.4.0/22",
            "192.168.10.6/31",
            "2001:db8::/46",
            "fe80::/10",
        ]
    );
    assert!(err.contains("300.1.1.1/24 is not a valid network (line 16)"));
}

#[test]
fn test_mixed_families_json_with_split() {
    let config = Config {
        max_prefix_len: Some(15),
        format: OutputFormat::Json,
        ..config_for("mixed_01.txt")
    };
    let (out, _) = run_file(&config);
    let parsed: Vec<String> = serde_json::from_str(&out).expect("Invalid JSON output");
    assert_eq!(
        &parsed[..4],
        &["10.20.0.0/16", "10.21.0.0/16", "10.22.0.0/16", "10.23.0.0/16"]
    );
    // fe80::/10 is shorter than the threshold but split to /16 as well.
    assert_eq!(parsed.iter().filter(|n| n.starts_with("fe")).count(), 64);
    assert!(parsed.contains(&"2001:db8::/46".to_string()));
}

#[test]
fn test_missing_file_is_fatal() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run(&config_for("no_such_file.txt"), &mut out, &mut err);
    assert!(matches!(result, Err(SupernetError::InputUnavailable { .. })));
    assert!(out.is_empty());
}

#[test]
fn test_engine_on_ingested_file_is_idempotent() {
    let mut report =
        ingest_file(&PathBuf::from("src/tests/test_data/mixed_01.txt")).expect("Failed to read");
    AggregationEngine::new().run(&mut report.registry);
    let first = report.registry.export();

    let mut again = first.iter().copied().collect();
    let second = AggregationEngine::new().run(&mut again);
    assert_eq!(again.export(), first);
    assert_eq!(second.aggregated + second.enclosed, 0);
}

//! Integration tests for the shrinkstat CLI
//!
//! Each test lays out result directories in a temporary root and runs the
//! binary against it.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const LAYOUT: &str = "areas: [A]\nsources:\n  - dir: result1\n    subdir: statistic\n  - dir: result2\n";

fn shrinkstat() -> Result<Command, Box<dyn std::error::Error>> {
    Ok(Command::cargo_bin("shrinkstat")?)
}

fn write_record(dir: &Path, name: &str, totals: &[u64], errors: &[u64]) -> TestResult {
    fs::create_dir_all(dir)?;
    let record = serde_json::json!({
        "totalLine": { "A": totals },
        "errorLine": { "A": errors },
    });
    fs::write(dir.join(name), serde_json::to_string(&record)?)?;
    Ok(())
}

/// Two records spread over a nested and a flat source.
fn scenario_root() -> Result<TempDir, Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    write_record(&root.path().join("result1/statistic"), "a.json", &[10, 4], &[6])?;
    write_record(&root.path().join("result2"), "b.json", &[20, 20, 5], &[0, 15])?;
    fs::write(root.path().join("layout.yaml"), LAYOUT)?;
    Ok(root)
}

fn report_json(root: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let output = shrinkstat()?
        .arg("--root")
        .arg(root)
        .arg("--config")
        .arg(root.join("layout.yaml"))
        .arg("--json")
        .output()?;
    assert!(output.status.success(), "report failed: {:?}", output);
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn json_report_matches_scenario() -> TestResult {
    let root = scenario_root()?;
    let json = report_json(root.path())?;

    assert_eq!(json["success"], true);
    let area = &json["areas"][0];
    assert_eq!(area["area"], "A");
    assert_eq!(area["totalDocuments"], 2);
    assert_eq!(area["nonzeroDocuments"], 2);
    assert_eq!(area["lineFirst"], 30);
    assert_eq!(area["lineErrorAligned"], serde_json::json!([6, 15]));
    assert_eq!(area["lineShrink"], serde_json::json!([30, 24, 9]));
    assert_eq!(area["averageReduce"], 1.5);
    Ok(())
}

#[test]
fn human_report_prints_one_block_per_area() -> TestResult {
    let root = scenario_root()?;
    shrinkstat()?
        .arg("report")
        .arg("--root")
        .arg(root.path())
        .arg("--config")
        .arg(root.path().join("layout.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("total documents"))
        .stdout(predicate::str::contains("[30, 24, 9]"))
        .stdout(predicate::str::contains("[6, 15]"));
    Ok(())
}

#[test]
fn root_given_before_report_subcommand_is_honoured() -> TestResult {
    let root = scenario_root()?;
    let elsewhere = TempDir::new()?;
    let output = shrinkstat()?
        .current_dir(elsewhere.path())
        .arg("--root")
        .arg(root.path())
        .arg("report")
        .arg("--config")
        .arg(root.path().join("layout.yaml"))
        .arg("--json")
        .output()?;
    assert!(output.status.success(), "report failed: {:?}", output);

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["areas"][0]["lineFirst"], 30);
    assert_eq!(json["areas"][0]["lineShrink"], serde_json::json!([30, 24, 9]));
    Ok(())
}

#[test]
fn root_can_come_from_environment() -> TestResult {
    let root = scenario_root()?;
    shrinkstat()?
        .env("SHRINKSTAT_ROOT", root.path())
        .arg("--config")
        .arg(root.path().join("layout.yaml"))
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"lineFirst\": 30"));
    Ok(())
}

#[test]
fn record_missing_area_aborts_whole_run() -> TestResult {
    let root = scenario_root()?;
    fs::write(
        root.path().join("result2/c.json"),
        r#"{"totalLine": {"A": [3]}, "errorLine": {}}"#,
    )?;

    shrinkstat()?
        .arg("--root")
        .arg(root.path())
        .arg("--config")
        .arg(root.path().join("layout.yaml"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("total documents").not())
        .stderr(predicate::str::contains("errorLine"))
        .stderr(predicate::str::contains("c.json"));
    Ok(())
}

#[test]
fn unparseable_file_is_an_input_error() -> TestResult {
    let root = scenario_root()?;
    fs::write(root.path().join("result2/broken.json"), "{ nope")?;

    shrinkstat()?
        .arg("--root")
        .arg(root.path())
        .arg("--config")
        .arg(root.path().join("layout.yaml"))
        .arg("--json")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"success\": false"));
    Ok(())
}

#[test]
fn missing_source_directory_is_an_io_error() -> TestResult {
    let root = TempDir::new()?;
    shrinkstat()?
        .arg("--root")
        .arg(root.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("result1"));
    Ok(())
}

#[test]
fn invalid_layout_is_a_config_error() -> TestResult {
    let root = TempDir::new()?;
    let layout = root.path().join("layout.yaml");
    fs::write(&layout, "areas: []\nsources:\n  - dir: r\n")?;

    shrinkstat()?
        .arg("--root")
        .arg(root.path())
        .arg("--config")
        .arg(&layout)
        .assert()
        .code(4);
    Ok(())
}

#[test]
fn empty_sources_report_zero_documents() -> TestResult {
    let root = TempDir::new()?;
    fs::create_dir_all(root.path().join("result1/statistic"))?;
    fs::create_dir_all(root.path().join("result2"))?;
    fs::write(root.path().join("layout.yaml"), LAYOUT)?;

    let json = report_json(root.path())?;
    let area = &json["areas"][0];
    assert_eq!(area["totalDocuments"], 0);
    assert_eq!(area["averageReduce"], 0.0);
    assert_eq!(area["lineShrink"], serde_json::json!([0]));
    assert_eq!(area["lineErrorAligned"], serde_json::json!([]));
    Ok(())
}

const CASE: &str = "<script>\n/* BEGIN jsfuzzer */\nvar lineNo = 0;\n\
/* LINE */ try { lineNo++; a.b(); } catch(e) { err(0); }\n\
/* LINE */ try { lineNo++; c.d(); } catch(e) { err(1); }\n\
//endjs\n/* END jsfuzzer */\n</script>";

#[test]
fn prune_writes_output_file() -> TestResult {
    let dir = TempDir::new()?;
    let input = dir.path().join("case.html");
    let output = dir.path().join("pruned.html");
    fs::write(&input, CASE)?;

    shrinkstat()?
        .args(["prune", "--drop", "0"])
        .arg(&input)
        .arg("jsfuzzer")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 -> 1"));

    let pruned = fs::read_to_string(&output)?;
    assert!(!pruned.contains("a.b()"));
    assert!(pruned.contains("c.d()"));
    assert_eq!(fs::read_to_string(&input)?, CASE);
    Ok(())
}

#[test]
fn prune_finalize_in_place() -> TestResult {
    let dir = TempDir::new()?;
    let input = dir.path().join("case.html");
    fs::write(&input, CASE)?;

    shrinkstat()?
        .args(["prune", "--finalize", "--in-place", "--json"])
        .arg(&input)
        .arg("jsfuzzer")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"linesAfter\": 2"));

    let finalized = fs::read_to_string(&input)?;
    assert!(finalized.contains(" a.b(); "));
    assert!(!finalized.contains("catch(e)"));
    Ok(())
}

#[test]
fn prune_without_work_is_rejected() -> TestResult {
    let dir = TempDir::new()?;
    let input = dir.path().join("case.html");
    fs::write(&input, CASE)?;

    shrinkstat()?
        .arg("prune")
        .arg(&input)
        .arg("jsfuzzer")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("nothing to prune"));
    Ok(())
}

#[test]
fn prune_unknown_area_is_an_input_error() -> TestResult {
    let dir = TempDir::new()?;
    let input = dir.path().join("case.html");
    fs::write(&input, CASE)?;

    shrinkstat()?
        .args(["prune", "--drop", "0"])
        .arg(&input)
        .arg("eventhandler1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("BEGIN eventhandler1"));
    Ok(())
}

#[test]
fn completion_generates_script() -> TestResult {
    shrinkstat()?
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shrinkstat"));
    Ok(())
}

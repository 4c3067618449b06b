//! Rendered reports and the `concord` binary

use std::fs;
use std::process::Command;

use concord::report::render;
use concord_config::OutputStyle;
use insta::assert_snapshot;

use crate::common::reconcile;

#[test]
fn compact_report_for_a_reversal() {
    let result = reconcile("[1, 2]", "[2, 1]");
    let text = render(&result, OutputStyle::Compact).unwrap();
    assert_snapshot!(text, @r#"{"stage1":{"contradiction_core":[[1,2]]},"stage2":{"cluster_ranking":[[1,2]]}}"#);
}

#[test]
fn pretty_report_for_partial_agreement() {
    let result = reconcile("[1, 2, 3, 4]", "[2, 1, 3, 4]");
    let text = render(&result, OutputStyle::Pretty).unwrap();
    assert_snapshot!(text, @r#"
    {
      "stage1": {
        "contradiction_core": [
          [
            1,
            2
          ]
        ]
      },
      "stage2": {
        "cluster_ranking": [
          [
            1,
            2
          ],
          3,
          4
        ]
      }
    }
    "#);
}

fn concord() -> Command {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_concord"));
    cmd.env("CONCORD_CONFIG", dir.path().join("absent.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn binary_prints_the_report() {
    let output = concord().args(["[1, 2, 3]", "[3, 2, 1]"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\"stage1\":{\"contradiction_core\":[[1,2,3]]},\"stage2\":{\"cluster_ranking\":[[1,2,3]]}}\n"
    );
}

#[test]
fn binary_reads_rankings_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    fs::write(&a, "[1, [2, 3], 4]").unwrap();
    fs::write(&b, "[1, [3, 2], 4]").unwrap();

    let output = concord()
        .arg(format!("@{}", a.display()))
        .arg(format!("@{}", b.display()))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\"stage1\":{\"contradiction_core\":[]},\"stage2\":{\"cluster_ranking\":[1,[2,3],4]}}\n"
    );
}

#[test]
fn binary_rejects_malformed_rankings() {
    let output = concord().args(["[1, {\"x\": 2}]", "[1]"]).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ranking A is malformed"), "{stderr}");
}

#[test]
fn binary_composition_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[reconcile]\ncomposition = \"pointwise\"\n").unwrap();

    let output = concord()
        .args(["--config"])
        .arg(&config)
        .args(["--composition", "relational", "[1, 2, 3]", "[1, 2, 3]"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\"stage1\":{\"contradiction_core\":[]},\"stage2\":{\"cluster_ranking\":[[1,2,3]]}}\n"
    );
}

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use similar::{ChangeTag, TextDiff};

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture_dir() -> PathBuf {
    project_root().join("fixtures")
}

fn golden_dir() -> PathBuf {
    project_root().join("golden")
}

fn update_golden() -> bool {
    std::env::var("UPDATE_GOLDEN").is_ok()
}

fn diff_strings(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(&format!("{sign}{change}"));
    }
    out
}

fn tadjust(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tadjust"))
        .args(args)
        .output()
        .expect("Failed to execute tadjust")
}

#[test]
fn golden_json_output() {
    let fixtures = fixture_dir();
    let golden = golden_dir();

    let mut entries: Vec<_> = fs::read_dir(&fixtures)
        .expect("Failed to read fixtures directory")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
        .collect();
    entries.sort_by_key(|e| e.file_name());

    assert!(
        !entries.is_empty(),
        "No fixture files found in {fixtures:?}"
    );

    for entry in entries {
        let fixture_path = entry.path();
        let stem = fixture_path.file_stem().unwrap().to_str().unwrap();
        let args_path = fixture_path.with_extension("args");
        let golden_path = golden.join(format!("{stem}.json"));

        let op_args = fs::read_to_string(&args_path)
            .unwrap_or_else(|e| panic!("Arguments file {args_path:?} not found: {e}"));

        let output = Command::new(env!("CARGO_BIN_EXE_tadjust"))
            .arg("adjust")
            .args(op_args.split_whitespace())
            .arg("--input")
            .arg(&fixture_path)
            .arg("--output-format")
            .arg("json")
            .output()
            .expect("Failed to execute tadjust");

        assert!(
            output.status.success(),
            "tadjust failed for {}: {}",
            stem,
            String::from_utf8_lossy(&output.stderr)
        );

        let actual = String::from_utf8(output.stdout).expect("Output is not valid UTF-8");

        if update_golden() {
            fs::create_dir_all(&golden).ok();
            fs::write(&golden_path, &actual)
                .unwrap_or_else(|e| panic!("Failed to write golden file {golden_path:?}: {e}"));
            eprintln!("Updated golden file: {golden_path:?}");
            continue;
        }

        let expected = fs::read_to_string(&golden_path).unwrap_or_else(|e| {
            panic!(
                "Golden file {golden_path:?} not found: {e}\n\
                 Hint: Run with UPDATE_GOLDEN=1 to generate golden files"
            )
        });

        if actual != expected {
            let diff = diff_strings(&expected, &actual);
            panic!(
                "Golden test mismatch for {stem}:\n\n\
                 {diff}\n\n\
                 Run with UPDATE_GOLDEN=1 to refresh snapshots"
            );
        }
    }
}

#[test]
fn text_output_pairs_input_and_result() {
    let output = tadjust(&[
        "adjust", "--op", "last", "--weekday", "saturday", "--date", "2024-06-13",
    ]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2024-06-13 -> 2024-06-08\n");
}

#[test]
fn missing_occurrence_exits_with_input_error() {
    let output = tadjust(&[
        "adjust",
        "--op",
        "nth_of_month",
        "--weekday",
        "saturday",
        "--n",
        "5",
        "--date",
        "2024-07-01",
        "--output-format",
        "json",
    ]);
    assert_eq!(output.status.code(), Some(2));

    let envelope: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("stderr is a JSON envelope");
    assert_eq!(envelope["exit_code"], 2);
    assert_eq!(envelope["status"], "no_such_occurrence");
    assert!(
        envelope["error"]
            .as_str()
            .unwrap()
            .contains("5th occurrence of saturday")
    );
}

#[test]
fn out_of_range_ordinal_exits_with_input_error() {
    let output = tadjust(&[
        "adjust", "--op", "nth_of_month", "--weekday", "saturday", "--n", "6", "--date",
        "2024-06-13",
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("n must be between 1 and 5, but is 6"));
}

#[test]
fn missing_weekday_is_a_binding_error() {
    let output = tadjust(&[
        "adjust", "--op", "next", "--date", "2024-06-13", "--output-format", "json",
    ]);
    assert_eq!(output.status.code(), Some(2));
    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["status"], "binding");
}

#[test]
fn mixed_batch_is_rejected() {
    let output = tadjust(&[
        "adjust",
        "--op",
        "day_of_year",
        "--container",
        "list",
        "--date",
        "2024-06-13",
        "--date",
        "2024-06-13T10:00:00",
    ]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn invalid_output_format() {
    let output = tadjust(&["ops", "--output-format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn ops_lists_every_operation() {
    let output = tadjust(&["ops", "--output-format", "json"]);
    assert!(output.status.success());
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = listing.as_array().unwrap();
    assert_eq!(entries.len(), 44);
    assert_eq!(entries[0]["name"], "next");
    assert_eq!(entries[0]["params"], serde_json::json!(["weekday"]));
}

#[test]
fn diff_runs_forward_across_midnight() {
    let output = tadjust(&["diff", "--from", "22:00", "--to", "02:00"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "22:00:00 -> 02:00:00: 4:00:00\n"
    );
}

#[test]
fn round_to_quarter_hour() {
    let output = tadjust(&["round", "--time", "14:37:30", "--to", "900"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "14:37:30 -> 14:45:00\n");

    let output = tadjust(&["round", "--time", "14:37:30", "--to", "0"]);
    assert_eq!(output.status.code(), Some(2));
}

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn netbin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_netbin"))
        .args(args)
        .output()
        .expect("run netbin")
}

fn path_str(p: &Path) -> &str {
    p.to_str().expect("utf-8 temp path")
}

/// inputs=2, hidden=1, output=1, lr=1.0, hidden 1x1 = 2.0, output 1x1 = 3.0.
fn write_reference(path: &Path) {
    let mut buf = Vec::new();
    for v in [2u32, 1, 1, 0x3F80_0000] {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    for weight in [0x4000_0000u32, 0x4040_0000] {
        for v in [1u32, 1, weight, weight] {
            buf.extend_from_slice(&v.to_le_bytes());
        }
    }
    std::fs::write(path, buf).expect("write reference file");
}

#[test]
fn inspect_prints_text_report() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("ref.net-bin");
    write_reference(&file);

    let out = netbin(&["inspect", path_str(&file)]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("File Name  (ref.net-bin)"));
    assert!(stdout.contains("Inputs: 2  (Number of inputs neurons)"));
    assert!(stdout.contains("Hidden Weights\n  0-0: 2\n"));
    assert!(stdout.contains("Outout Weights\n  0-0: 3\n"));
}

#[test]
fn inspect_json_output_parses() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("ref.net-bin");
    write_reference(&file);

    let out = netbin(&["inspect", path_str(&file), "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json[0]["label"], "File Name");
    assert_eq!(json[2]["label"], "Inputs");
    assert_eq!(json[8]["children"][0]["value"], 2.0);
}

#[test]
fn wrong_extension_exits_with_2() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("ref.bin");
    write_reference(&file);

    let out = netbin(&["inspect", path_str(&file)]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("is not a .net-bin file"));
}

#[test]
fn truncated_file_exits_with_1_and_offset() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("short.net-bin");
    std::fs::write(&file, [0u8; 10]).unwrap();

    let out = netbin(&["inspect", path_str(&file)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("out of bounds at offset 8"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("ref.net-bin");
    write_reference(&file);

    let out = netbin(&["inspect", path_str(&file), "--jsno"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    assert_eq!(netbin(&[]).status.code(), Some(2));
    assert_eq!(netbin(&["sample", "x.net-bin", "2", "one", "1", "0.5"]).status.code(), Some(2));
}

#[test]
fn sample_then_inspect_and_export() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("gen.net-bin");
    let export = dir.path().join("gen.json");

    let out = netbin(&["sample", path_str(&file), "4", "3", "2", "0.25", "--wide-dims"]);
    assert!(out.status.success());

    let out = netbin(&[
        "inspect",
        path_str(&file),
        "--wide-dims",
        "--export-json",
        path_str(&export),
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Cols Hidden Weights: 4"));
    assert!(stdout.contains("Rows Outout Weights: 2"));

    let net = netbin::NetworkFile::load_json(&export).unwrap();
    assert_eq!(net.header.input_count, 4);
    assert_eq!(net.header.learning_rate, 0.25);
    assert_eq!((net.output_weights.rows, net.output_weights.cols), (2, 3));
}

#[test]
fn classify_prints_probabilities() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("gen.net-bin");
    assert!(netbin(&["sample", path_str(&file), "3", "2", "2", "0.1"]).status.success());

    let out = netbin(&["classify", path_str(&file), "--input", "0.5,-1,0.25"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("0: "));
    assert!(stdout.contains("predicted: "));

    let out = netbin(&["classify", path_str(&file), "--input", "1,2"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("shape mismatch"));
}

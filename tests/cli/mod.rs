//! End-to-end tests running the demo binary: config creation via prompt on the
//! first run, confirmed folder clearing and byte-identical output on the second.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn run_binary(workdir: &Path, answers: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_testgen-rs"))
        .arg("cases")
        .arg("testgen.toml")
        .current_dir(workdir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(answers.as_bytes())
        .expect("failed to feed prompt answers");

    child.wait_with_output().expect("failed to wait for binary")
}

fn snapshot(folder: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(folder)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            let name = e.file_name().into_string().unwrap();
            (name, fs::read(e.path()).unwrap())
        })
        .collect()
}

#[test]
fn two_binary_runs_reproduce_the_same_files() {
    let dir = tempfile::tempdir().unwrap();

    // First run: no config yet, one prompt to generate it.
    let output = run_binary(dir.path(), "y\n");
    assert!(
        output.status.success(),
        "first run failed.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.path().join("testgen.toml").is_file());

    let first = snapshot(&dir.path().join("cases"));
    // all_ones + 9×3 same_values + 3 random_list, each with .in/.ans/.desc
    assert_eq!(first.len(), 31 * 3);

    // Second run: config is reused, one prompt to clear the folder.
    let output = run_binary(dir.path(), "y\n");
    assert!(
        output.status.success(),
        "second run failed.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(snapshot(&dir.path().join("cases")), first);
}

#[test]
fn declining_the_config_prompt_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_binary(dir.path(), "n\n");
    assert!(!output.status.success());
    assert!(!dir.path().join("testgen.toml").exists());
}

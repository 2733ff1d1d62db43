//! End-to-end pruning against a stub probe executable.
//!
//! The stub stands in for fastfetch: it ignores its arguments and
//! prints a canned `--format json` response.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_confgen")
}

fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    let mut permissions = std::fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&path, permissions).unwrap();
    path
}

const PROBE_RESPONSE: &str = r#"#!/bin/sh
cat <<'EOF'
[
  {"type": "Custom", "error": "Custom modules produce no probe output"},
  {"type": "OS", "result": {"name": "Arch Linux"}},
  {"type": "CPU", "result": {"cpu": "Ryzen 7"}},
  {"type": "Battery", "error": "No batteries found"},
  {"type": "PowerAdapter", "error": "No power adapters found"},
  {"type": "BIOS", "result": []}
]
EOF
"#;

#[test]
fn test_probe_prunes_disqualified_modules() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "fastfetch-stub", PROBE_RESPONSE);

    let output = Command::new(bin())
        .args(["--dry-run", "--fastfetch"])
        .arg(&stub)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let document: Value = serde_json::from_slice(&output.stdout).unwrap();
    let kinds: Vec<&str> = document["modules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|module| module["type"].as_str().unwrap())
        .collect();

    // Errored and empty-result modules are gone.
    assert!(!kinds.contains(&"battery"));
    assert!(!kinds.contains(&"poweradapter"));
    assert!(!kinds.contains(&"bios"));

    // Category headers survive their probe errors, working modules stay.
    assert_eq!(kinds.iter().filter(|&&kind| kind == "custom").count(), 3);
    assert!(kinds.contains(&"os"));
    assert!(kinds.contains(&"cpu"));
}

#[test]
fn test_verbose_run_reports_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "fastfetch-stub", PROBE_RESPONSE);
    let config = dir.path().join("config.jsonc");

    let output = Command::new(bin())
        .args(["-v", "--fastfetch"])
        .arg(&stub)
        .arg("--output")
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✗ battery - No batteries found"));
    assert!(stdout.contains("✓ os"));
}

#[test]
fn test_probe_failure_terminates_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(
        dir.path(),
        "fastfetch-broken",
        "#!/bin/sh\necho boom >&2\nexit 3\n",
    );

    let output = Command::new(bin())
        .args(["--dry-run", "--fastfetch"])
        .arg(&stub)
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("probe exited"), "stderr: {stderr}");
    assert!(stderr.contains("boom"));
}

#[test]
fn test_missing_probe_binary_terminates_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-fastfetch");

    let output = Command::new(bin())
        .args(["--dry-run", "--fastfetch"])
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to launch"), "stderr: {stderr}");
}

//! Runs the built binary end to end.

use std::process::Command;

#[test]
fn writes_both_outputs_and_reports_them() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_termcal"))
        .arg("--out-dir")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        "Saved academic_calendar_2025_2026.png and academic_calendar_2025_2026.pdf"
    );
    assert!(dir.path().join("academic_calendar_2025_2026.png").is_file());
    assert!(dir.path().join("academic_calendar_2025_2026.pdf").is_file());
}

#[test]
fn missing_out_dir_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let output = Command::new(env!("CARGO_BIN_EXE_termcal"))
        .arg("-o")
        .arg(&missing)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: failed to export calendar to"));
}

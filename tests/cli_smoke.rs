use std::fs;
use std::process::Command;

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_numera").to_string()
}

#[test]
fn cli_demo_runs_the_full_showcase() {
    // point --config at a missing file so a user-level config can't skew output
    let output = Command::new(bin())
        .args(["--config", "/nonexistent/numera.toml", "demo"])
        .output()
        .expect("run");
    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("det(Q) = -1.00"));
    assert!(stdout.contains("det(R) = 2.00"));
    assert!(stdout.contains("int_0^1 x^2 dx"));
    assert!(stdout.contains("0.3328335"));
}

#[test]
fn cli_det_prints_the_determinant() {
    let output = Command::new(bin())
        .args(["det", "2,1,1;1,3,2;1,0,0"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("det = -1.000000"), "stdout:\n{stdout}");
}

#[test]
fn cli_det_rejects_non_square_input() {
    let output = Command::new(bin())
        .args(["det", "1,2,3;4,5,6"])
        .output()
        .expect("run");
    assert!(!output.status.success(), "unexpected success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not Square"), "stderr:\n{stderr}");
}

#[test]
fn cli_inv_rejects_singular_input() {
    let output = Command::new(bin())
        .args(["inv", "1,2;2,4"])
        .output()
        .expect("run");
    assert!(!output.status.success(), "unexpected success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Singular"), "stderr:\n{stderr}");
}

#[test]
fn cli_integrate_honors_config_precision() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("numera.toml");
    fs::write(&cfg, "precision = 4\n").unwrap();

    let output = Command::new(bin())
        .args(["--config", cfg.to_str().unwrap(), "integrate", "x2", "0", "1"])
        .output()
        .expect("run");
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("~= 0.3328"), "stdout:\n{stdout}");
    // four decimals, not the default twelve
    assert!(!stdout.contains("0.33283"), "stdout:\n{stdout}");
}

#[test]
fn cli_integrate_poly_needs_coeffs() {
    let output = Command::new(bin())
        .args(["integrate", "poly", "0", "1"])
        .output()
        .expect("run");
    assert!(!output.status.success(), "unexpected success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--coeffs"), "stderr:\n{stderr}");
}

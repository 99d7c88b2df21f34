use assert_cmd::cargo::cargo_bin_cmd;
use std::error::Error;
use std::path::PathBuf;

#[test]
fn read_prints_rows_as_json() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("xvg");
    cmd.args(["read", &sample_path("test_data/f0.xvg")]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let rows: Vec<Vec<f64>> = serde_json::from_slice(&output)?;
    assert_eq!(rows, vec![vec![0.0, 10.0], vec![1.0, 12.0], vec![2.0, 15.0]]);
    Ok(())
}

#[test]
fn read_selects_variables_in_order() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("xvg");
    cmd.args([
        "read",
        &sample_path("test_data/f2.xvg"),
        "--var",
        "res2_TRP",
        "--var",
        "Time (ps)",
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let rows: Vec<Vec<f64>> = serde_json::from_slice(&output)?;
    assert_eq!(
        rows,
        vec![vec![170.0, 0.0], vec![171.5, 1.0], vec![169.0, 2.0]]
    );
    Ok(())
}

#[test]
fn read_unpack_prints_one_row_per_variable() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("xvg");
    cmd.args(["read", &sample_path("test_data/f0.xvg"), "--unpack"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let rows: Vec<Vec<f64>> = serde_json::from_slice(&output)?;
    assert_eq!(rows, vec![vec![0.0, 1.0, 2.0], vec![10.0, 12.0, 15.0]]);
    Ok(())
}

#[test]
fn read_uses_config_file() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("xvg");
    cmd.args([
        "read",
        &sample_path("test_data/f1.xvg"),
        "--config",
        &sample_path("test_data/options.toml"),
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let rows: Vec<Vec<f64>> = serde_json::from_slice(&output)?;
    // Coil then Time, unpacked.
    assert_eq!(rows, vec![vec![5.0, 4.0, 6.0], vec![0.0, 100.0, 200.0]]);
    Ok(())
}

#[test]
fn read_config_can_scan_past_first_data_line() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("xvg");
    cmd.args([
        "read",
        &sample_path("test_data/legends_after_data.xvg"),
        "--config",
        &sample_path("test_data/full_scan.toml"),
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let rows: Vec<Vec<f64>> = serde_json::from_slice(&output)?;
    assert_eq!(rows, vec![vec![3.0, 0.0], vec![2.0, 100.0]]);
    Ok(())
}

#[test]
fn read_tsv_output() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("xvg");
    cmd.args([
        "read",
        &sample_path("test_data/f0.xvg"),
        "--format",
        "tsv",
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["0\t10", "1\t12", "2\t15"]);
    Ok(())
}

#[test]
fn unknown_variable_is_dropped_unless_strict() -> Result<(), Box<dyn Error>> {
    let path = sample_path("test_data/f0.xvg");

    let mut cmd = cargo_bin_cmd!("xvg");
    cmd.args(["read", &path, "--var", "Angle (degrees)", "--var", "Nope"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let rows: Vec<Vec<f64>> = serde_json::from_slice(&output)?;
    assert_eq!(rows, vec![vec![10.0], vec![12.0], vec![15.0]]);

    let mut cmd = cargo_bin_cmd!("xvg");
    cmd.args(["read", &path, "--var", "Nope", "--strict"]);
    cmd.assert().failure();
    Ok(())
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("xvg");
    cmd.args(["read", &sample_path("test_data/does_not_exist.xvg")]);
    cmd.assert().failure();
}

#[test]
fn header_only_file_fails_on_read() {
    let mut cmd = cargo_bin_cmd!("xvg");
    cmd.args(["read", &sample_path("test_data/no_data.xvg")]);
    cmd.assert().failure();
}

fn sample_path(relative: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join(relative)
        .to_string_lossy()
        .to_string()
}

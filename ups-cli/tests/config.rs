use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn config_file_sets_layout_and_stylesheet() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a3.md");
    fs::write(&input, "# A3\n").unwrap();

    let css_path = dir.path().join("brand.css");
    fs::write(&css_path, ".brand-header { color: #c00; }").unwrap();

    let config_path = dir.path().join("ups.toml");
    fs::write(
        &config_path,
        format!(
            "[export]\nlayout = \"screen\"\ncustom_css = {:?}\n",
            css_path.to_str().unwrap()
        ),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("ups");
    cmd.arg(input.as_os_str())
        .arg("--to")
        .arg("a3-html")
        .arg("--config")
        .arg(config_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("layout-screen"));
    assert!(stdout.contains(".brand-header { color: #c00; }"));
}

#[test]
fn config_file_sets_escape_mode() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a3.md");
    fs::write(&input, "<b>roh</b>").unwrap();

    let config_path = dir.path().join("ups.toml");
    fs::write(&config_path, "[render]\nescape_html = true\n").unwrap();

    let mut cmd = cargo_bin_cmd!("ups");
    cmd.arg(input.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("&lt;b&gt;roh&lt;/b&gt;"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a3.md");
    fs::write(&input, "# A3\n").unwrap();

    let mut cmd = cargo_bin_cmd!("ups");
    cmd.arg(input.as_os_str())
        .arg("--config")
        .arg(dir.path().join("missing.toml").as_os_str());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn invalid_override_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a3.md");
    fs::write(&input, "# A3\n").unwrap();

    let mut cmd = cargo_bin_cmd!("ups");
    cmd.arg(input.as_os_str())
        .arg("--extra-layout")
        .arg("poster");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid layout 'poster'"));
}

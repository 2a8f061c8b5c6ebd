use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

/// Lays out a fake project tree with an executable `cmd/ubopt`.
fn create_project_with_fake_ubopt(help_text: &str) -> TempDir {
    let dir = TempDir::new().expect("temp project dir");
    let cmd_dir = dir.path().join("cmd");
    fs::create_dir_all(&cmd_dir).expect("create cmd dir");
    let bin = cmd_dir.join("ubopt");
    fs::write(&bin, format!("#!/bin/sh\ncat <<'EOF'\n{help_text}EOF\n"))
        .expect("write fake ubopt");
    let mut perms = fs::metadata(&bin).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&bin, perms).unwrap();
    dir
}

fn generated_dir(root: &Path) -> std::path::PathBuf {
    root.join("docs").join("_generated")
}

#[test]
fn build_happy_flow_writes_snapshot_and_context() {
    let project = create_project_with_fake_ubopt("usage: ubopt [OPTIONS] <COMMAND>\n");

    let mut cmd = Command::cargo_bin("ubopt-docs").expect("Binary exists");
    cmd.arg("build")
        .arg("--project-root")
        .arg(project.path())
        .env("UBOPT_VERSION", "3.1.4");

    cmd.assert().success().stdout(
        predicate::str::contains("complete")
            .or(predicate::str::contains("Captured"))
            .or(predicate::str::contains("snapshot")),
    );

    let generated = generated_dir(project.path());
    assert_eq!(
        fs::read_to_string(generated.join("ubopt_help.txt")).unwrap(),
        "usage: ubopt [OPTIONS] <COMMAND>\n"
    );

    let context: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(generated.join("conf.json")).unwrap()).unwrap();
    assert_eq!(context["release"], "3.1.4");
    assert_eq!(context["version"], "3.1.4");
    assert_eq!(context["html_theme"], "furo");
}

#[test]
fn build_succeeds_when_ubopt_is_missing() {
    let project = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("ubopt-docs").expect("Binary exists");
    cmd.arg("build")
        .arg("--project-root")
        .arg(project.path())
        .env_remove("UBOPT_VERSION");

    // The build must always complete, whatever happened to the capture.
    cmd.assert().success();

    let generated = generated_dir(project.path());
    assert_eq!(
        fs::read_to_string(generated.join("ubopt_help.txt")).unwrap(),
        "ubopt help unavailable (cmd/ubopt not found)"
    );

    let context: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(generated.join("conf.json")).unwrap()).unwrap();
    assert_eq!(context["release"], "dev");
}

#[test]
fn build_reads_yaml_config() {
    let project = create_project_with_fake_ubopt("usage: ubopt\n");
    let config_path = project.path().join("docs-build.yaml");
    fs::write(
        &config_path,
        format!(
            "project_root: {}\nproject: Custom Title\nhtml_theme: alabaster\ntargets:\n  - name: ubopt\n    binary: cmd/ubopt\n    output_file: custom_help.txt\n",
            project.path().display()
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("ubopt-docs").expect("Binary exists");
    cmd.arg("build").arg("--config").arg(&config_path);

    cmd.assert().success();

    let generated = generated_dir(project.path());
    assert_eq!(
        fs::read_to_string(generated.join("custom_help.txt")).unwrap(),
        "usage: ubopt\n"
    );

    let context: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(generated.join("conf.json")).unwrap()).unwrap();
    assert_eq!(context["project"], "Custom Title");
    assert_eq!(context["html_title"], "Custom Title");
    assert_eq!(context["html_theme"], "alabaster");
}

#[test]
fn build_fails_on_unreadable_config() {
    let mut cmd = Command::cargo_bin("ubopt-docs").expect("Binary exists");
    cmd.arg("build").arg("--config").arg("no/such/config.yaml");

    cmd.assert().failure();
}

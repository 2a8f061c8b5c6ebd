// Tests for project info assembly and the generator context artifact.
// Env-var tests are serialised because the release string is read from the
// process environment.

use chrono::{Datelike, Utc};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

use ubopt_docs_core::context::{
    DocsContext, ProjectInfo, CONTEXT_FILE, DEFAULT_AUTHOR, DEFAULT_PROJECT, VERSION_ENV,
};

#[test]
#[serial]
fn release_comes_from_env_when_set() {
    env::set_var(VERSION_ENV, "1.4.2");
    let info = ProjectInfo::from_env();
    assert_eq!(info.release, "1.4.2");
    assert_eq!(info.version, "1.4.2");
    env::remove_var(VERSION_ENV);
}

#[test]
#[serial]
fn release_defaults_to_dev_when_unset() {
    env::remove_var(VERSION_ENV);
    let info = ProjectInfo::from_env();
    assert_eq!(info.release, "dev");
    assert_eq!(info.version, "dev");
}

#[test]
#[serial]
fn project_defaults_and_copyright_shape() {
    env::remove_var(VERSION_ENV);
    let info = ProjectInfo::from_env();
    assert_eq!(info.project, DEFAULT_PROJECT);
    assert_eq!(info.author, DEFAULT_AUTHOR);
    assert_eq!(
        info.copyright,
        format!("{}, {}", Utc::now().year(), DEFAULT_AUTHOR)
    );
}

#[test]
#[serial]
fn custom_names_keep_env_release() {
    env::set_var(VERSION_ENV, "0.9.0-rc1");
    let info = ProjectInfo::with_names("Some Project", "Some Author");
    assert_eq!(info.project, "Some Project");
    assert_eq!(info.author, "Some Author");
    assert_eq!(info.release, "0.9.0-rc1");
    assert!(info.copyright.ends_with(", Some Author"));
    env::remove_var(VERSION_ENV);
}

#[test]
#[serial]
fn context_fills_generator_fields() {
    env::remove_var(VERSION_ENV);
    let context = DocsContext::new(ProjectInfo::from_env());
    assert_eq!(context.source_suffix, ".rst");
    assert_eq!(context.master_doc, "index");
    assert_eq!(context.html_theme, "furo");
    assert_eq!(context.html_title, context.project);
    assert!(context.extensions.is_empty());
    assert!(context.html_static_path.is_empty());
}

#[test]
#[serial]
fn context_round_trips_through_json_file() {
    env::set_var(VERSION_ENV, "2.0.0");
    let dir = TempDir::new().unwrap();
    let context = DocsContext::new(ProjectInfo::from_env());

    let path = context.write(dir.path()).expect("write context");
    assert_eq!(path, dir.path().join(CONTEXT_FILE));

    let loaded: DocsContext =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded.project, context.project);
    assert_eq!(loaded.release, "2.0.0");
    assert_eq!(loaded.version, loaded.release);
    env::remove_var(VERSION_ENV);
}

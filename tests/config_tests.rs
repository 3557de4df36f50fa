use std::fs;
use std::path::PathBuf;

use dbview::domain::TrackedEntity;
use dbview::error::{ConfigError, Error};
use dbview::infrastructure::config::settings::Config;

fn write_temp_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("dbview.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_all_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
database = "/var/data/app.db"

[logging]
level = "debug"
format = "json"

[display]
truncate_at = 50
opaque_columns = ["payload"]
json_preview_chars = 80

[[summary.entities]]
table = "Job"
label = "Jobs"
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.database, PathBuf::from("/var/data/app.db"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.display.truncate_at, 50);
    assert_eq!(config.display.opaque_columns, vec!["payload"]);
    assert_eq!(config.display.json_preview_chars, 80);
    assert_eq!(config.summary.entities, vec![TrackedEntity::new("Job", "Jobs")]);
}

#[test]
fn display_policy_reflects_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[display]\nopaque_columns = [\"blob\"]\n");

    let policy = Config::load(&path).unwrap().display.policy(false);

    assert!(policy.is_opaque_column("blob"));
    assert!(!policy.is_opaque_column("trace"));
    assert_eq!(policy.truncate_at, 100);
}

#[test]
fn config_rejects_empty_group_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[[summary.entities]]
table = "Job"
label = "Jobs"

[[summary.entities.groups]]
column = ""
label = "Status"
"#,
    );

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue { field, .. })) => {
            assert_eq!(field, "summary.entities.groups.column");
        }
        Err(err) => panic!("Expected invalid group column error, got {err}"),
        Ok(config) => panic!(
            "Expected empty group column to be rejected, got {:?}",
            config.summary.entities
        ),
    }
}

#[test]
fn config_rejects_empty_database_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "database = \"\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "database",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[display]\ntruncate_at = \"wide\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

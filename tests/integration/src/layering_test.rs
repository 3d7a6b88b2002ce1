//! End-to-end layering tests
//!
//! These exercise the complete flow: files in several formats and the
//! environment are loaded, merged in order, then read and modified by path.

use layercfg_sources::{Config, ConfigLoader, EnvSource, Error, Format};
use layercfg_tree::{Content, Kind, Tree};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// A project with a YAML base, a TOML production overlay and a JSON local file.
fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    fs::create_dir(&config_dir).unwrap();

    fs::write(
        config_dir.join("config.yaml"),
        r#"
name: shop
databases:
  main:
    host: localhost
    port: 5432
    pool: 4
servers:
  - host: web-1
    port: 80
  - host: web-2
    port: 80
features: [search, cart]
"#,
    )
    .unwrap();

    fs::write(
        config_dir.join("production.toml"),
        r#"
features = ["checkout"]

[databases.main]
host = "db.internal"
pool = 32

[[servers]]
port = 443

[[servers]]
port = 443

[[servers]]
host = "web-3"
port = 443
"#,
    )
    .unwrap();

    fs::write(
        config_dir.join("local.json"),
        r#"{ "databases": { "main": { "password": null } }, "debug": true }"#,
    )
    .unwrap();

    temp
}

fn production(temp: &TempDir) -> Config {
    let config_dir = temp.path().join("config");
    ConfigLoader::new()
        .file(config_dir.join("config.yaml"))
        .file(config_dir.join("production.toml"))
        .optional_file(config_dir.join("local.json"))
        .optional_file(config_dir.join("missing.yaml"))
        .env(EnvSource::with_prefix("SHOP_").with_vars([
            ("SHOP_DATABASES__MAIN__PORT", "6432"),
            ("SHOP_SERVERS[2].PORT", "8443"),
            ("OTHER_VALUE", "ignored"),
        ]))
        .load()
        .unwrap()
}

#[test]
fn test_layers_merge_in_order() {
    let temp = setup_project();
    let config = production(&temp);

    assert_eq!(
        config.content().to_json(),
        json!({
            "name": "shop",
            "debug": true,
            "databases": {
                "main": {
                    "host": "db.internal",
                    "port": "6432",
                    "pool": 32,
                    "password": null
                }
            },
            "servers": [
                { "host": "web-1", "port": 443 },
                { "host": "web-2", "port": 443 },
                { "host": "web-3", "port": "8443" }
            ],
            "features": ["checkout", "cart"]
        })
    );
}

#[test]
fn test_typed_reads_with_defaults() {
    let temp = setup_project();
    let config = production(&temp);

    // env values arrive as strings and still coerce
    assert_eq!(config.get_int("databases.main.port", 0), 6432);
    assert_eq!(config.get_int("databases.main.pool", 0), 32);
    assert_eq!(config.get_int("databases.replica.port", 5433), 5433);
    assert!(config.get_bool("debug", false));
    assert_eq!(config.get_string("servers[2].host", ""), "web-3");
    assert_eq!(config.get_string("databases.main.user", "app"), "app");

    // null leaves fall back to the default
    assert!(config.get("databases.main.password").is_nil());
    assert_eq!(
        config.get_string("databases.main.password", "secret"),
        "secret"
    );

    // reading past a scalar is a miss, not an error
    assert!(!config.get("name.first").exists());
    assert!(!config.get("features[9]").exists());
}

#[test]
fn test_modify_after_load() {
    let temp = setup_project();
    let mut config = production(&temp);

    config.set_int("servers[3].port", 9000).unwrap();
    config.set_string("features[2]", "wishlist").unwrap();
    config.set("databases.replica.host", "db-2").unwrap();

    assert_eq!(config.get("servers[3].port"), 9000_i64);
    assert!(!config.get("servers[3].host").exists());
    assert_eq!(config.get("features").to_json(), json!(["checkout", "cart", "wishlist"]));
    assert_eq!(config.get("databases.replica.host"), "db-2");
    assert_eq!(config.get("databases.main.host"), "db.internal");
}

#[test]
fn test_structural_errors_leave_store_usable() {
    let temp = setup_project();
    let mut config = production(&temp);

    let err = config.set("servers[7].port", 1_i64).unwrap_err();
    assert!(matches!(
        err,
        Error::Tree(layercfg_tree::Error::IndexOutOfRange { index: 7, len: 3, .. })
    ));

    let err = config.set("name[0]", "x").unwrap_err();
    assert!(matches!(
        err,
        Error::Tree(layercfg_tree::Error::InvalidType {
            expected: Kind::Array,
            found: Kind::String,
            ..
        })
    ));

    assert_eq!(config.get("name"), "shop");
    assert_eq!(config.get_int("servers[0].port", 0), 443);
}

#[test]
fn test_merge_file_after_load() {
    let temp = setup_project();
    let mut config = production(&temp);

    let hotfix = temp.path().join("hotfix.yaml");
    fs::write(&hotfix, "databases:\n  main:\n    pool: 8\n").unwrap();
    config.merge_file(&hotfix).unwrap();

    assert_eq!(config.get_int("databases.main.pool", 0), 8);
    assert_eq!(config.get("databases.main.host"), "db.internal");
}

#[test]
fn test_standard_stack_reads_user_config() {
    let temp = TempDir::new().unwrap();
    let app_dir = temp.path().join("shop");
    fs::create_dir(&app_dir).unwrap();
    fs::write(app_dir.join("config.toml"), "[ui]\ntheme = \"dark\"\n").unwrap();

    let loader = ConfigLoader::standard_in("shop", Some(temp.path().to_path_buf()));
    assert_eq!(loader.len(), 3);

    let config = loader.load().unwrap();
    assert_eq!(config.get_string("ui.theme", "light"), "dark");
}

#[test]
fn test_unsupported_and_malformed_files() {
    let temp = TempDir::new().unwrap();

    let ini = temp.path().join("settings.ini");
    fs::write(&ini, "[a]\nb = 1\n").unwrap();
    let err = ConfigLoader::new().file(&ini).load().unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));

    let broken = temp.path().join("broken.json");
    fs::write(&broken, "{ \"a\": ").unwrap();
    let err = ConfigLoader::new().file(&broken).load().unwrap_err();
    assert!(matches!(
        err,
        Error::ConfigParse {
            format: Format::Json,
            ..
        }
    ));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_literal_layers() {
    let base: Content = Content::try_from(json!({"a": {"b": 1, "c": [1, 2]}})).unwrap();
    let config = ConfigLoader::new()
        .content(base)
        .tree(Tree::from(json!({"a": {"c": [9]}})))
        .unwrap()
        .load()
        .unwrap();

    assert_eq!(config.content().to_json(), json!({"a": {"b": 1, "c": [9, 2]}}));
}

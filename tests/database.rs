//! End-to-end tests through the `ezdb` facade

use ezdb::{Database, DbOptions, Error, GoThroughProcessor, Result};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    });
}

fn open_test_db() -> (Database, TempDir) {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open_with_options(DbOptions::for_testing(temp_dir.path().join("db")))
        .unwrap();
    (db, temp_dir)
}

struct Collector {
    keys: Vec<String>,
    fail_on_call: Option<usize>,
}

impl GoThroughProcessor for Collector {
    fn process(&mut self, key: &str, _value: &str) -> Result<()> {
        self.keys.push(key.to_string());
        if self.fail_on_call == Some(self.keys.len()) {
            return Err(Error::Aborted(key.to_string()));
        }
        Ok(())
    }
}

#[test]
fn test_typed_roundtrip_and_deletion() {
    let (db, _dir) = open_test_db();

    db.put_str("greeting", "hello").unwrap();
    db.put_i64("balance", -250).unwrap();
    db.put_u64("visits", 9_000_000_000).unwrap();

    assert_eq!(db.get_str("greeting").unwrap(), "hello");
    assert_eq!(db.get_i64("balance").unwrap(), -250);
    assert_eq!(db.get_u64("visits").unwrap(), 9_000_000_000);

    db.delete_str("greeting").unwrap();
    assert!(!db.key_exist("greeting").unwrap());
    assert!(db.get_str("greeting").unwrap_err().is_not_found());
}

#[test]
fn test_empty_value_exists() {
    let (db, _dir) = open_test_db();

    assert!(!db.key_exist("flag").unwrap());
    db.put(b"flag", &[]).unwrap();
    assert!(db.key_exist("flag").unwrap());
    assert_eq!(db.get(b"flag").unwrap(), Some(Vec::new()));
}

#[test]
fn test_go_through_bounds_and_early_stop() {
    let (db, _dir) = open_test_db();
    for key in ["e", "c", "a", "d", "b"] {
        db.put_str(key, "v").unwrap();
    }

    let mut collector = Collector { keys: Vec::new(), fail_on_call: None };
    db.go_through("b", "d", &mut collector).unwrap();
    assert_eq!(collector.keys, vec!["b", "c", "d"]);

    let mut collector = Collector { keys: Vec::new(), fail_on_call: None };
    db.go_through("", "", &mut collector).unwrap();
    assert_eq!(collector.keys, vec!["a", "b", "c", "d", "e"]);

    let mut collector = Collector { keys: Vec::new(), fail_on_call: Some(2) };
    let err = db.go_through("", "", &mut collector).unwrap_err();
    assert!(matches!(err, Error::Aborted(ref k) if k == "b"));
    assert_eq!(collector.keys.len(), 2);
}

#[test]
fn test_close_then_reopen() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("db");

    let mut db = Database::open(&path, ezdb::DEFAULT_CACHE_SIZE).unwrap();
    db.put_u64("counter", 7).unwrap();
    db.close();
    db.close();
    assert!(matches!(db.get_u64("counter"), Err(Error::Closed)));

    let db = Database::open(&path, ezdb::DEFAULT_CACHE_SIZE).unwrap();
    assert_eq!(db.get_u64("counter").unwrap(), 7);
}

#[test]
fn test_options_from_config_file() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("configured");

    let json = serde_json::json!({
        "path": path,
        "block_cache_size": 2 * 1024 * 1024,
        "debug": true
    });
    let options: DbOptions = serde_json::from_value(json).unwrap();

    let db = Database::open_with_options(options).unwrap();
    assert_eq!(db.options().block_cache_size, 2 * 1024 * 1024);
    assert_eq!(db.path(), path.as_path());
}

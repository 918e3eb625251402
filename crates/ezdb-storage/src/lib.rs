//! ezdb Storage
//!
//! A thin handle over an embedded RocksDB instance.
//!
//! # Architecture
//!
//! - `engine` - Database handle: open/close and byte get/put/delete
//! - `typed` - String and integer accessors on top of the byte operations
//! - `scan` - Bounded forward range scans
//! - `options` - Open-time configuration
//!
//! The handle owns its LRU block cache and releases it only after the
//! engine has shut down.

pub mod engine;
pub mod options;
pub mod scan;
mod typed;

pub use engine::Database;
pub use options::{DEFAULT_CACHE_SIZE, DEFAULT_FOLDER_PERMISSION, DbOptions};
pub use scan::{GoThroughProcessor, Scan, within_bound};

/// Install a debug-level subscriber once so failure echoes show up in test output
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    });
}

//! ezdb - simple access to an embedded LevelDB-family key-value store
//!
//! This is the main library crate that re-exports all ezdb components.

pub use ezdb_core as core;
pub use ezdb_storage as storage;

// Re-export commonly used types
pub use ezdb_core::{Error, Result};
pub use ezdb_storage::{
    DEFAULT_CACHE_SIZE, DEFAULT_FOLDER_PERMISSION, Database, DbOptions, GoThroughProcessor, Scan,
};

//! Database configuration options

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default LRU block cache size (16MB)
pub const DEFAULT_CACHE_SIZE: usize = 16 * 1024 * 1024;

/// Permission bits used when the database directory has to be created
pub const DEFAULT_FOLDER_PERMISSION: u32 = 0o755;

/// Options for opening a [`Database`](crate::Database)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbOptions {
    /// Path to the database directory
    pub path: PathBuf,

    /// LRU block cache capacity in bytes
    pub block_cache_size: usize,

    /// Whether to create the database files if they don't exist
    pub create_if_missing: bool,

    /// Whether range scans populate the block cache
    pub fill_cache_on_scan: bool,

    /// Mode for a newly created database directory (Unix only)
    pub folder_permission: u32,

    /// Echo every failure as a debug event before returning it
    pub debug: bool,
}

impl DbOptions {
    /// Create options for a database at the given path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Create options for development/testing
    pub fn for_testing<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 1024 * 1024, // 1MB
            debug: true,
            ..Default::default()
        }
    }

    /// Set the block cache size
    pub fn block_cache_size(mut self, size: usize) -> Self {
        self.block_cache_size = size;
        self
    }

    /// Enable or disable creating a missing database
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Enable or disable block cache population during scans
    pub fn fill_cache_on_scan(mut self, fill: bool) -> Self {
        self.fill_cache_on_scan = fill;
        self
    }

    /// Set the permission bits for a created directory
    pub fn folder_permission(mut self, mode: u32) -> Self {
        self.folder_permission = mode;
        self
    }

    /// Enable or disable failure echoing
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }
}

impl Default for DbOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data"),
            block_cache_size: DEFAULT_CACHE_SIZE,
            create_if_missing: true,
            fill_cache_on_scan: false,
            folder_permission: DEFAULT_FOLDER_PERMISSION,
            debug: false,
        }
    }
}

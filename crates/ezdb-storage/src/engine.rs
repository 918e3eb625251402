//! Database handle over RocksDB

use crate::options::DbOptions;
use ezdb_core::{Error, Result};
use rocksdb::{BlockBasedOptions, Cache, DB, DBRawIterator, ErrorKind, Options, ReadOptions, WriteOptions};
use std::fs::DirBuilder;
use std::path::Path;
use tracing::{debug, info};

/// Map an engine error onto the ezdb error hierarchy
pub(crate) fn storage_error(e: rocksdb::Error) -> Error {
    match e.kind() {
        ErrorKind::Corruption => Error::DataCorruption(e.into_string()),
        _ => Error::Storage(e.into_string()),
    }
}

/// Create the database directory and any missing parents
fn create_dir_all(path: &Path, mode: u32) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path)
}

/// An open ezdb database
///
/// Owns the engine instance together with the options objects and the LRU
/// block cache it was opened with. Resources are released by [`close`]
/// (or on drop) in a fixed order: read options, write options, engine,
/// and the cache strictly last. Dropping the cache while the engine is
/// still alive can hang the engine's shutdown.
///
/// [`close`]: Database::close
pub struct Database {
    read_opts: Option<ReadOptions>,
    write_opts: Option<WriteOptions>,
    db: Option<DB>,
    cache: Option<Cache>,
    options: DbOptions,
}

impl Database {
    /// Open or create a database at `path` with an LRU cache of `cache_size` bytes
    pub fn open<P: AsRef<Path>>(path: P, cache_size: usize) -> Result<Self> {
        Self::open_with_options(DbOptions::new(path.as_ref()).block_cache_size(cache_size))
    }

    /// Open or create a database with custom options
    pub fn open_with_options(options: DbOptions) -> Result<Self> {
        info!(
            "Opening database at {:?} (cache size {} bytes)",
            options.path, options.block_cache_size
        );

        // Must outlive the engine; locals drop in reverse order on early return
        let cache = Cache::new_lru_cache(options.block_cache_size);

        if let Err(e) = create_dir_all(&options.path, options.folder_permission) {
            if options.debug {
                debug!(
                    "Failed to create {:?} with mode {:o}: {}",
                    options.path, options.folder_permission, e
                );
            }
            return Err(Error::Io(e));
        }

        let mut table_opts = BlockBasedOptions::default();
        table_opts.set_block_cache(&cache);

        let mut db_opts = Options::default();
        db_opts.create_if_missing(options.create_if_missing);
        db_opts.set_block_based_table_factory(&table_opts);

        let db = DB::open(&db_opts, &options.path).map_err(|e| {
            if options.debug {
                debug!("Failed to open {:?}: {}", options.path, e);
            }
            Error::Open {
                path: options.path.clone(),
                message: e.into_string(),
            }
        })?;

        info!("Database opened successfully");

        Ok(Self {
            read_opts: Some(ReadOptions::default()),
            write_opts: Some(WriteOptions::default()),
            db: Some(db),
            cache: Some(cache),
            options,
        })
    }

    /// Release the handle's resources
    ///
    /// Safe to call more than once; later calls do nothing. Any data
    /// operation on a closed handle returns [`Error::Closed`].
    pub fn close(&mut self) {
        if self.db.is_none() && self.cache.is_none() {
            return;
        }

        drop(self.read_opts.take());
        drop(self.write_opts.take());
        drop(self.db.take());
        drop(self.cache.take());

        info!("Database at {:?} closed", self.options.path);
    }

    /// Whether [`close`](Database::close) has run
    pub fn is_closed(&self) -> bool {
        self.db.is_none()
    }

    /// The directory this database lives in
    pub fn path(&self) -> &Path {
        &self.options.path
    }

    /// The options this database was opened with
    pub fn options(&self) -> &DbOptions {
        &self.options
    }

    // ========== Byte Operations ==========

    /// Store a value
    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        let (db, write_opts) = (self.db()?, self.write_opts()?);
        db.put_opt(key, value, write_opts)
            .map_err(|e| self.fail("put", storage_error(e)))
    }

    /// Get a value, `None` if the key holds nothing
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let (db, read_opts) = (self.db()?, self.read_opts()?);
        db.get_opt(key, read_opts)
            .map_err(|e| self.fail("get", storage_error(e)))
    }

    /// Delete a key; deleting an absent key succeeds
    pub fn delete(&self, key: &[u8]) -> Result<()> {
        let (db, write_opts) = (self.db()?, self.write_opts()?);
        db.delete_opt(key, write_opts)
            .map_err(|e| self.fail("delete", storage_error(e)))
    }

    /// Check whether a key holds a value (an empty value counts)
    pub fn key_exist(&self, key: &str) -> Result<bool> {
        Ok(self.get(key.as_bytes())?.is_some())
    }

    /// Create a raw engine iterator that does not populate the block cache
    ///
    /// The iterator is unpositioned; call `seek` or `seek_to_first` first.
    pub fn raw_iterator(&self) -> Result<DBRawIterator<'_>> {
        let db = self.db()?;
        let mut scan_opts = ReadOptions::default();
        scan_opts.fill_cache(self.options.fill_cache_on_scan);
        Ok(db.raw_iterator_opt(scan_opts))
    }

    // ========== Internals ==========

    fn db(&self) -> Result<&DB> {
        self.db.as_ref().ok_or(Error::Closed)
    }

    fn read_opts(&self) -> Result<&ReadOptions> {
        self.read_opts.as_ref().ok_or(Error::Closed)
    }

    fn write_opts(&self) -> Result<&WriteOptions> {
        self.write_opts.as_ref().ok_or(Error::Closed)
    }

    /// Echo a failure when debugging is enabled, then hand it back
    pub(crate) fn fail(&self, op: &str, err: Error) -> Error {
        if self.options.debug {
            debug!("{} failed on {:?}: {}", op, self.options.path, err);
        }
        err
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.options.path)
            .field("closed", &self.is_closed())
            .finish()
    }
}

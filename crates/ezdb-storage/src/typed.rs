//! String and integer accessors layered on the byte operations

use crate::engine::Database;
use ezdb_core::{Error, Result, codec};

impl Database {
    // ========== String Operations ==========

    /// Store a string value
    pub fn put_str(&self, key: &str, value: &str) -> Result<()> {
        self.put(key.as_bytes(), value.as_bytes())
    }

    /// Get a string value
    ///
    /// Unlike [`get`](Database::get), an absent key is an error here:
    /// [`Error::KeyNotFound`].
    pub fn get_str(&self, key: &str) -> Result<String> {
        match self.get(key.as_bytes())? {
            Some(bytes) => {
                String::from_utf8(bytes).map_err(|e| self.fail("get_str", Error::InvalidUtf8(e)))
            }
            None => Err(self.fail("get_str", Error::KeyNotFound(key.to_string()))),
        }
    }

    /// Delete a string key
    pub fn delete_str(&self, key: &str) -> Result<()> {
        self.delete(key.as_bytes())
    }

    // ========== Integer Operations ==========

    /// Store an i64 as its decimal string; read back with [`get_i64`](Database::get_i64)
    pub fn put_i64(&self, key: &str, value: i64) -> Result<()> {
        self.put_str(key, &codec::encode_i64(value))
    }

    /// Get a value stored by [`put_i64`](Database::put_i64)
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        let s = self.get_str(key)?;
        codec::decode_i64(&s).map_err(|e| self.fail("get_i64", e))
    }

    /// Store a u64 as its decimal string; read back with [`get_u64`](Database::get_u64)
    pub fn put_u64(&self, key: &str, value: u64) -> Result<()> {
        self.put_str(key, &codec::encode_u64(value))
    }

    /// Get a value stored by [`put_u64`](Database::put_u64)
    pub fn get_u64(&self, key: &str) -> Result<u64> {
        let s = self.get_str(key)?;
        codec::decode_u64(&s).map_err(|e| self.fail("get_u64", e))
    }
}

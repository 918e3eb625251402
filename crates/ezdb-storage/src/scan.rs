//! Bounded range scans
//!
//! A scan starts at a key (or the first key when the start is empty) and
//! walks forward in bytewise key order while the current key is `<=` the
//! end key. An empty end key means "until the last key". Scans never
//! populate the block cache unless [`DbOptions::fill_cache_on_scan`] is set.
//!
//! [`DbOptions::fill_cache_on_scan`]: crate::DbOptions::fill_cache_on_scan

use crate::engine::{Database, storage_error};
use ezdb_core::Result;
use rocksdb::DBRawIterator;

/// Receives every key/value pair visited by [`Database::go_through`]
///
/// Returning an error stops the scan; `go_through` hands that same error
/// back to its caller.
pub trait GoThroughProcessor {
    fn process(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<F> GoThroughProcessor for F
where
    F: FnMut(&str, &str) -> Result<()>,
{
    fn process(&mut self, key: &str, value: &str) -> Result<()> {
        self(key, value)
    }
}

/// Whether `iter` sits on an entry inside the scan's upper bound
///
/// An empty `key_end` leaves the range unbounded.
pub fn within_bound(iter: &DBRawIterator<'_>, key_end: &[u8]) -> bool {
    if !iter.valid() {
        return false;
    }
    key_end.is_empty() || iter.key().is_some_and(|key| key <= key_end)
}

/// A forward-only cursor over `[start, end]`
///
/// Yields owned key/value pairs. Once it returns `None` (or an error) it
/// stays exhausted; open a new scan to start over.
pub struct Scan<'a> {
    iter: DBRawIterator<'a>,
    key_end: Vec<u8>,
    started: bool,
    finished: bool,
}

impl<'a> Scan<'a> {
    fn new(mut iter: DBRawIterator<'a>, key_start: &[u8], key_end: &[u8]) -> Self {
        if key_start.is_empty() {
            iter.seek_to_first();
        } else {
            iter.seek(key_start);
        }
        Self {
            iter,
            key_end: key_end.to_vec(),
            started: false,
            finished: false,
        }
    }
}

impl Iterator for Scan<'_> {
    type Item = Result<(Vec<u8>, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.started {
            self.iter.next();
        }
        self.started = true;

        if within_bound(&self.iter, &self.key_end) {
            if let (Some(key), Some(value)) = (self.iter.key(), self.iter.value()) {
                return Some(Ok((key.to_vec(), value.to_vec())));
            }
        }

        // Natural end of the range; surface any fault the engine hit on the way
        self.finished = true;
        self.iter.status().err().map(|e| Err(storage_error(e)))
    }
}

impl Database {
    /// Open a lazy cursor over `[key_start, key_end]`
    pub fn scan<S, E>(&self, key_start: S, key_end: E) -> Result<Scan<'_>>
    where
        S: AsRef<[u8]>,
        E: AsRef<[u8]>,
    {
        let iter = self.raw_iterator()?;
        Ok(Scan::new(iter, key_start.as_ref(), key_end.as_ref()))
    }

    /// Feed every pair in `[key_start, key_end]` to `processor`, in key order
    ///
    /// Stops at the first processor error and returns it unchanged. Keys and
    /// values must be valid UTF-8.
    pub fn go_through<P>(&self, key_start: &str, key_end: &str, processor: &mut P) -> Result<()>
    where
        P: GoThroughProcessor + ?Sized,
    {
        for item in self.scan(key_start, key_end)? {
            let (key, value) = item.map_err(|e| self.fail("go_through", e))?;
            let key = String::from_utf8(key).map_err(|e| self.fail("go_through", e.into()))?;
            let value = String::from_utf8(value).map_err(|e| self.fail("go_through", e.into()))?;

            if let Err(e) = processor.process(&key, &value) {
                return Err(self.fail(&format!("process({:?}, {:?})", key, value), e));
            }
        }
        Ok(())
    }
}

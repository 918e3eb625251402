//! ezdb Core Library
//!
//! Error handling and the value codec shared by the ezdb crates.
//!
//! # Modules
//!
//! - `error` - Error types and result aliases
//! - `codec` - Base-10 string encoding for integer values

pub mod codec;
pub mod error;

pub use codec::{decode_i64, decode_u64, encode_i64, encode_u64};
pub use error::{Error, Result};

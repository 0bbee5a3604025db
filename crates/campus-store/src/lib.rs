//! Key-value blob stores for the campus marketplace.
//!
//! The cart engine persists itself through the [`BlobStore`] trait: a plain
//! `key -> string` store. Backends:
//!
//! - [`MemoryStore`]: in-process, used by tests and ephemeral sessions
//! - [`FileStore`]: one file per key inside a directory
//! - `SpinStore`: Spin's Key-Value Store (only on `wasm32`)
//!
//! [`Cache`] layers automatic JSON serialization over any backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use campus_store::{Cache, MemoryStore};
//!
//! let mut cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("unibuy_cart", &lines)?;
//!
//! // Retrieve a value
//! let lines: Option<Vec<CartLine>> = cache.get("unibuy_cart")?;
//! ```

mod blob;
mod error;
mod file;
mod kv;
#[cfg(target_arch = "wasm32")]
mod spin;

pub use blob::{BlobStore, MemoryStore};
pub use error::StoreError;
pub use file::FileStore;
pub use kv::Cache;
#[cfg(target_arch = "wasm32")]
pub use spin::SpinStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{BlobStore, Cache, FileStore, MemoryStore, StoreError};
}

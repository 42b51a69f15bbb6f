//! JSON document storage for configuration files.
//!
//! A document is a top-level JSON object. Callers read the whole document,
//! change the keys they own and write the whole document back, so keys
//! written by other components survive the round trip.

pub mod error;
pub mod fs;
pub mod store;

pub use error::StoreError;
pub use fs::FsJsonStore;
pub use store::{Document, JsonStore, get_array};

//! Cache abstractions and key derivation

pub mod key;
pub mod repository;

pub use key::{list_family, list_key, summary_key, LIST_RESOURCE, SUMMARY_RESOURCE};
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;

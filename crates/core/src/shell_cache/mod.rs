//! App shell asset caching.
//!
//! Three strategies over generation-named caches:
//! - shell resources are served cache-first with network fallback
//! - data files are served network-first with cache fallback
//! - font hosts are served stale-while-revalidate
//!
//! Bumping the generation renames both caches; `activate` purges the rest.

pub mod cache;
pub mod policy;
pub mod storage;
pub mod types;


pub use cache::AssetCache;
pub use policy::CachePolicy;
pub use storage::CacheStorage;
pub use types::{AssetFetcher, AssetResponse, FetchError, Strategy};

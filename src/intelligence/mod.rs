// ABOUTME: Intelligence facade re-exporting the algorithm crate plus snapshot memoization
// ABOUTME: Entry point for strength, volume, body composition, and recovery computations

/// LRU memoization of fitness-fatigue snapshots
pub mod cache;

pub use kpkn_intelligence::*;

pub use cache::{CacheStats, FatigueModelCache};

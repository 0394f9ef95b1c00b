// ABOUTME: In-memory LRU memoization of fitness-fatigue snapshots keyed by input content
// ABOUTME: SHA-256 over history window, catalog, model config, and evaluation time - no time-based expiry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use kpkn_core::errors::AppResult;
use kpkn_core::models::{ExerciseCatalog, WorkoutLog};
use kpkn_intelligence::fitness_fatigue::{FatigueModelSnapshot, FitnessFatigueModel};
use lru::LruCache;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

/// Hit and miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that evaluated the model
    pub misses: u64,
    /// Entries currently held
    pub entries: usize,
}

/// Everything a snapshot depends on
#[derive(Serialize)]
struct CacheKeyInput<'a> {
    history: Vec<&'a WorkoutLog>,
    catalog: &'a ExerciseCatalog,
    fitness_fatigue: &'a kpkn_intelligence::config::FitnessFatigueConfig,
    recovery: &'a kpkn_intelligence::config::RecoveryConfig,
    as_of: DateTime<Utc>,
}

/// LRU cache of model snapshots
///
/// Entries are keyed by a digest of the full input, so any change to the
/// history, catalog, or configuration misses. Nothing expires on its own.
#[derive(Debug)]
pub struct FatigueModelCache {
    store: LruCache<String, FatigueModelSnapshot>,
    hits: u64,
    misses: u64,
}

impl Default for FatigueModelCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY.get())
    }
}

impl FatigueModelCache {
    /// Capacity used when zero is requested
    const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::MIN.saturating_add(63);

    /// Create a cache holding up to `capacity` snapshots
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            store: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Cache key for an evaluation
    ///
    /// Only logs inside the model's history window ending at `as_of` take part,
    /// in chronological order, so the key ignores input ordering and logs the
    /// model would skip.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be serialized
    pub fn key_for(
        model: &FitnessFatigueModel,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        as_of: DateTime<Utc>,
    ) -> AppResult<String> {
        let window_start = model.config().window_start(as_of);
        let mut window: Vec<&WorkoutLog> = history
            .iter()
            .filter(|log| log.date >= window_start && log.date <= as_of)
            .collect();
        window.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        let input = CacheKeyInput {
            history: window,
            catalog,
            fitness_fatigue: model.config(),
            recovery: model.recovery_config(),
            as_of,
        };
        let bytes = serde_json::to_vec(&input)?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }

    /// Return the cached snapshot or evaluate and store it
    ///
    /// # Errors
    ///
    /// Returns an error if the cache key cannot be computed
    pub fn get_or_evaluate(
        &mut self,
        model: &FitnessFatigueModel,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        as_of: DateTime<Utc>,
    ) -> AppResult<FatigueModelSnapshot> {
        let key = Self::key_for(model, history, catalog, as_of)?;

        if let Some(snapshot) = self.store.get(&key) {
            self.hits += 1;
            trace!(key = %key, "Fatigue model cache hit");
            return Ok(snapshot.clone());
        }

        self.misses += 1;
        debug!(key = %key, "Fatigue model cache miss");
        let snapshot = model.evaluate(history, catalog, as_of);
        self.store.put(key, snapshot.clone());
        Ok(snapshot)
    }

    /// Drop every entry; counters are kept
    pub fn invalidate_all(&mut self) {
        let dropped = self.store.len();
        self.store.clear();
        debug!(dropped, "Fatigue model cache cleared");
    }

    /// Hit, miss, and size counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.store.len(),
        }
    }
}

//! Hash-consing pool for monomials.
//!
//! The pool maps exponent sequences to weak registrations of the shared
//! monomial data. Lookups are spread over [`NUM_SHARDS`] mutex-protected
//! maps, chosen by the precomputed exponent hash, to keep contention low
//! when polynomial arithmetic runs on several threads.
//!
//! The pool never keeps a monomial alive: once the last [`Monomial`] handle
//! is dropped the registration turns dead, and it is removed either when its
//! shard grows past the purge threshold or by [`MonomialPool::collect_garbage`].

use super::{Exponents, Monomial, MonomialData, VarPower, exponents_consistent, hash_exponents};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, Weak};
use tracing::{debug, trace};

/// Number of independently locked shards.
pub const NUM_SHARDS: usize = 16;

/// Pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Shard size that triggers a purge of dead registrations. After a
    /// purge the threshold grows to twice the live size.
    pub purge_threshold: usize,
    /// Initial capacity of each shard.
    pub shard_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            purge_threshold: 1024,
            shard_capacity: 64,
        }
    }
}

/// Pool statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Calls to [`MonomialPool::create`].
    pub lookups: u64,
    /// Lookups answered by a live registration.
    pub hits: u64,
    /// Monomials allocated.
    pub created: u64,
    /// Dead registrations removed.
    pub purged: u64,
}

struct PoolShard {
    entries: FxHashMap<Exponents, Weak<MonomialData>>,
    purge_at: usize,
}

impl PoolShard {
    fn purge(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, weak| weak.strong_count() > 0);
        before - self.entries.len()
    }
}

/// Concurrent hash-consing registry of monomials.
pub struct MonomialPool {
    shards: [Mutex<PoolShard>; NUM_SHARDS],
    next_id: AtomicU64,
    config: PoolConfig,
    lookups: AtomicU64,
    hits: AtomicU64,
    created: AtomicU64,
    purged: AtomicU64,
}

static GLOBAL_POOL: LazyLock<MonomialPool> = LazyLock::new(MonomialPool::new);

impl Default for MonomialPool {
    fn default() -> Self {
        Self::new()
    }
}

impl MonomialPool {
    /// Create a pool with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Create a pool with a custom configuration.
    pub fn with_config(config: PoolConfig) -> Self {
        let shards = std::array::from_fn(|_| {
            Mutex::new(PoolShard {
                entries: FxHashMap::with_capacity_and_hasher(
                    config.shard_capacity,
                    Default::default(),
                ),
                purge_at: config.purge_threshold.max(1),
            })
        });
        Self {
            shards,
            next_id: AtomicU64::new(1),
            config,
            lookups: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            created: AtomicU64::new(0),
            purged: AtomicU64::new(0),
        }
    }

    /// The process-wide pool used by monomial arithmetic.
    pub fn global() -> &'static MonomialPool {
        &GLOBAL_POOL
    }

    /// The configuration this pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    fn shard(&self, hash: u64) -> &Mutex<PoolShard> {
        // Only the low bits are needed to pick a shard.
        #[allow(clippy::cast_possible_truncation)]
        let idx = (hash as usize) % NUM_SHARDS;
        &self.shards[idx]
    }

    /// Return the canonical monomial for `exponents`.
    ///
    /// Equal exponent sequences give pointer-equal handles for as long as
    /// one of them is alive, whichever thread asks.
    pub fn create(&self, exponents: Exponents, total_degree: u32) -> Monomial {
        debug_assert!(
            exponents_consistent(&exponents, total_degree),
            "inconsistent monomial exponents {exponents:?} with degree {total_degree}"
        );
        self.lookups.fetch_add(1, Ordering::Relaxed);
        let hash = hash_exponents(&exponents);
        let mut shard = self.shard(hash).lock();

        if let Some(existing) = shard
            .entries
            .get(exponents.as_slice())
            .and_then(Weak::upgrade)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Monomial::from_data(existing);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let data = Arc::new(MonomialData::new(exponents.clone(), total_degree, hash, id));
        shard.entries.insert(exponents, Arc::downgrade(&data));
        self.created.fetch_add(1, Ordering::Relaxed);
        trace!(id, total_degree, "created monomial");

        if shard.entries.len() >= shard.purge_at {
            let removed = shard.purge();
            shard.purge_at = (shard.entries.len() * 2).max(self.config.purge_threshold);
            self.purged.fetch_add(removed as u64, Ordering::Relaxed);
            trace!(removed, live = shard.entries.len(), "purged monomial shard");
        }

        Monomial::from_data(data)
    }

    /// Look up a monomial without creating it.
    pub fn get(&self, exponents: &[VarPower]) -> Option<Monomial> {
        let hash = hash_exponents(exponents);
        let shard = self.shard(hash).lock();
        shard
            .entries
            .get(exponents)
            .and_then(Weak::upgrade)
            .map(Monomial::from_data)
    }

    /// Remove every dead registration; returns how many were removed.
    pub fn collect_garbage(&self) -> usize {
        let mut removed = 0;
        for shard in &self.shards {
            let mut shard = shard.lock();
            removed += shard.purge();
            shard.purge_at = (shard.entries.len() * 2).max(self.config.purge_threshold);
        }
        self.purged.fetch_add(removed as u64, Ordering::Relaxed);
        debug!(removed, "monomial pool garbage collection");
        removed
    }

    /// Number of live monomials.
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| {
                shard
                    .lock()
                    .entries
                    .values()
                    .filter(|weak| weak.strong_count() > 0)
                    .count()
            })
            .sum()
    }

    /// Whether no monomial is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            lookups: self.lookups.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            created: self.created.load(Ordering::Relaxed),
            purged: self.purged.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for MonomialPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonomialPool")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

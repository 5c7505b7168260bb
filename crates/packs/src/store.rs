use std::sync::{Arc, RwLock};

use packwise_types::{Pack, PackError};
use tracing::debug;

use crate::solver;

/// Pack sizes every store starts with. Reset on every boot; configuration
/// is not persisted across restarts.
pub const DEFAULT_PACK_SIZES: [u64; 5] = [250, 500, 1000, 2000, 5000];

/// Thread-safe store of the allowed pack sizes.
///
/// The sizes live behind an `RwLock` as an atomically swapped immutable
/// `Arc<Vec<u64>>`: updates build a fresh sorted vector and replace the
/// whole `Arc`, so a reader holds either the set from before an update or
/// the set from after it, never a mix. Snapshots stay valid for as long as
/// the caller keeps them, unaffected by later updates.
#[derive(Debug)]
pub struct PackStore {
    sizes: RwLock<Arc<Vec<u64>>>,
}

impl Default for PackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PackStore {
    /// Creates a store holding [`DEFAULT_PACK_SIZES`].
    pub fn new() -> Self {
        Self {
            sizes: RwLock::new(Arc::new(DEFAULT_PACK_SIZES.to_vec())),
        }
    }

    /// Replaces the configured pack sizes.
    ///
    /// The input must be non-empty and strictly positive; otherwise
    /// [`PackError::InvalidConfiguration`] is returned and the previous
    /// configuration stays in effect. The stored copy is sorted ascending
    /// (the solver expects ascending sizes) and deduplicated, since
    /// duplicate sizes cannot change any answer.
    pub fn set_sizes(&self, sizes: &[i64]) -> Result<(), PackError> {
        if sizes.is_empty() {
            return Err(PackError::InvalidConfiguration(
                "pack size list is empty".to_owned(),
            ));
        }
        let mut validated = Vec::with_capacity(sizes.len());
        for &size in sizes {
            if size <= 0 {
                return Err(PackError::InvalidConfiguration(format!(
                    "pack size must be positive, got {size}"
                )));
            }
            validated.push(size as u64);
        }
        validated.sort_unstable();
        validated.dedup();

        debug!(sizes = ?validated, "replacing pack size configuration");
        *self.sizes.write().unwrap() = Arc::new(validated);
        Ok(())
    }

    /// The current ascending pack sizes as an immutable point-in-time copy.
    pub fn snapshot(&self) -> Arc<Vec<u64>> {
        Arc::clone(&self.sizes.read().unwrap())
    }

    /// Computes the optimal pack plan for `quantity` against the current
    /// configuration snapshot.
    pub fn calculate(&self, quantity: i64) -> Result<Vec<Pack>, PackError> {
        let sizes = self.snapshot();
        solver::compute(quantity, &sizes)
    }
}

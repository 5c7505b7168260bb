use serde::{Deserialize, Serialize};

/// One entry of a pack plan: ship `count` packs of capacity `size`.
///
/// Plans never contain zero-count entries, and are always sorted ascending
/// by `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    pub size: u64,
    pub count: u64,
}

impl Pack {
    /// Items shipped by this entry alone.
    pub const fn items(&self) -> u64 {
        self.size * self.count
    }
}

/// Total items shipped by a plan.
pub fn plan_items(plan: &[Pack]) -> u64 {
    plan.iter().map(Pack::items).sum()
}

/// Total number of packs used by a plan.
pub fn plan_packs(plan: &[Pack]) -> u64 {
    plan.iter().map(|p| p.count).sum()
}

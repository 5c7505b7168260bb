//! Dynamic-programming packing solver.
//!
//! For a quantity `q` and ascending pack sizes, finds the pack multiset
//! whose total is >= `q`, minimizing first the excess over `q` and then the
//! number of packs. One table cell per amount in `0..=q`; each cell keeps
//! the best `(excess, packs)` pair plus a backpointer step, and the final
//! plan is rebuilt once by walking the backpointers. Storing a full
//! size->count map per cell would give the same answer at O(q * sizes)
//! memory instead of O(q).

use std::collections::BTreeMap;

use packwise_types::{Pack, PackError};

/// Best known way to reach one amount of the fill table.
#[derive(Debug, Clone, Copy)]
struct Cell {
    excess: u64,
    packs: u64,
    step: Step,
}

/// Backpointer recording how a cell's combination was produced.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Amount 0: the empty combination.
    None,
    /// The combination at `amount - size`, extended by one pack of `size`.
    Extend(u64),
    /// A single pack of `size` covering the whole amount (`size` > amount).
    /// Terminates backpointer walks.
    Oversize(u64),
}

const UNFILLED: Cell = Cell {
    excess: u64::MAX,
    packs: u64::MAX,
    step: Step::None,
};

/// Computes the optimal pack plan for `quantity` given ascending, positive
/// `sizes`.
///
/// Fails with [`PackError::InvalidQuantity`] for a negative quantity. A
/// quantity of zero yields an empty plan. A quantity below the smallest
/// size is covered by a single smallest pack. The returned plan is sorted
/// ascending by size and contains no zero-count entries.
///
/// Time is O(quantity * sizes) and memory O(quantity); the quantity is not
/// bounded here, so callers pay proportionally for large requests.
pub fn compute(quantity: i64, sizes: &[u64]) -> Result<Vec<Pack>, PackError> {
    if quantity < 0 {
        return Err(PackError::InvalidQuantity(quantity));
    }
    let Some(&smallest) = sizes.first() else {
        return Err(PackError::InvalidConfiguration(
            "no pack sizes configured".to_owned(),
        ));
    };
    if quantity == 0 {
        return Ok(Vec::new());
    }

    let quantity = quantity as u64;
    if quantity < smallest {
        return Ok(vec![Pack {
            size: smallest,
            count: 1,
        }]);
    }

    let table = fill_table(quantity, sizes);
    Ok(reconstruct(&table, quantity))
}

/// Fills the table cell by cell.
///
/// For each amount `i` and size `s`, the candidate either extends the
/// combination at `i - s` (s <= i; the excess carries over unchanged since
/// the step consumes exactly `s` toward `i`) or substitutes a single
/// oversized pack (s > i; excess `s - i`). The tie-break on equal excess is
/// asymmetric: an extension replaces on `<=` pack count, an oversized
/// substitute only on `<`. This picks which of several equally-wasteful
/// combinations is reported and must not be changed.
fn fill_table(quantity: u64, sizes: &[u64]) -> Vec<Cell> {
    let mut table = vec![UNFILLED; quantity as usize + 1];
    table[0] = Cell {
        excess: 0,
        packs: 0,
        step: Step::None,
    };

    for i in 1..=quantity {
        for &size in sizes {
            let candidate = if size <= i {
                let prev = table[(i - size) as usize];
                Cell {
                    excess: prev.excess,
                    packs: prev.packs + 1,
                    step: Step::Extend(size),
                }
            } else {
                Cell {
                    excess: size - i,
                    packs: 1,
                    step: Step::Oversize(size),
                }
            };

            let best = &mut table[i as usize];
            let wins_tie = match candidate.step {
                Step::Extend(_) => candidate.packs <= best.packs,
                Step::Oversize(_) | Step::None => candidate.packs < best.packs,
            };
            if candidate.excess < best.excess
                || (candidate.excess == best.excess && wins_tie)
            {
                *best = candidate;
            }
        }
    }

    table
}

/// Walks backpointers from the target amount down to 0, counting one pack
/// per step. An oversized step covers its whole remaining amount, so it
/// ends the walk.
fn reconstruct(table: &[Cell], quantity: u64) -> Vec<Pack> {
    let mut counts: BTreeMap<u64, u64> = BTreeMap::new();
    let mut amount = quantity;
    loop {
        match table[amount as usize].step {
            Step::Extend(size) => {
                *counts.entry(size).or_insert(0) += 1;
                amount -= size;
            }
            Step::Oversize(size) => {
                *counts.entry(size).or_insert(0) += 1;
                break;
            }
            Step::None => break,
        }
    }
    counts
        .into_iter()
        .map(|(size, count)| Pack { size, count })
        .collect()
}

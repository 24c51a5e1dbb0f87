//! Generation transition on the unbounded plane.
//!
//! Every live cell adds one to the neighbour count of each of its eight
//! surrounding coordinates. The next generation is then read off the count
//! table: only coordinates with at least one live neighbour can ever come
//! alive, so the work is proportional to the population, never to a board
//! area.

use std::collections::HashMap;

use ahash::RandomState;
use tracing::trace;

use super::{Cell, ConwayRule, Generation, Rule};
use super::generation::CellSet;

/// Transient neighbour counts, rebuilt every step
type NeighborCounts = HashMap<Cell, u8, RandomState>;

/// Counters describing the work done by one transition
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TransitionStats {
    /// Live cells in the input generation
    pub live: usize,
    /// Distinct coordinates that received at least one count
    pub candidates: usize,
    /// Total count increments (always 8 per live cell)
    pub increments: usize,
}

/// Compute the next generation under Conway's rule (B3/S23)
pub fn transition(current: &Generation) -> Generation {
    transition_with(current, &ConwayRule)
}

/// Compute the next generation under an arbitrary life-like rule
pub fn transition_with(current: &Generation, rule: &dyn Rule) -> Generation {
    transition_with_stats(current, rule).0
}

/// Compute the next generation and report how much work it took
pub fn transition_with_stats(current: &Generation, rule: &dyn Rule) -> (Generation, TransitionStats) {
    let counts = count_neighbors(current);
    let stats = TransitionStats {
        live: current.len(),
        candidates: counts.len(),
        increments: current.len() * 8,
    };

    let next: CellSet = counts
        .into_iter()
        .filter(|&(cell, n)| rule.evolve(current.contains(cell), n))
        .map(|(cell, _)| cell)
        .collect();

    trace!(live = stats.live, candidates = stats.candidates, next = next.len(), "transition");
    (Generation::from_set(next), stats)
}

/// Advance `steps` generations
pub fn advance(current: &Generation, rule: &dyn Rule, steps: usize) -> Generation {
    (0..steps).fold(current.clone(), |g, _| transition_with(&g, rule))
}

fn count_neighbors(current: &Generation) -> NeighborCounts {
    let mut counts =
        NeighborCounts::with_capacity_and_hasher(current.len() * 8, RandomState::new());

    for cell in current.iter() {
        for neighbor in cell.neighbors() {
            *counts.entry(neighbor).or_insert(0) += 1;
        }
    }
    counts
}

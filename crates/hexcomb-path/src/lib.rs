//! Breadth-first pathfinding over walkability-gated hex grids.
//!
//! The grid's tile content lives with the host; this crate only asks the
//! host's [`Walkability`] oracle whether a tile may be traversed.
//! [`Pathfinder`] runs unweighted BFS through a
//! [`NeighborResolver`](hexcomb_neighbor::NeighborResolver), so found
//! paths always have the minimum possible number of steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::collections::VecDeque;

use hexcomb_core::Offset;
use hexcomb_neighbor::NeighborResolver;
use indexmap::{IndexMap, IndexSet};

/// Host-provided traversability oracle.
///
/// The host may back this with static terrain, dynamic occupancy, or any
/// tagging scheme; the pathfinder has no visibility into why a tile is
/// blocked. `is_walkable` must imply `in_bounds`: implementations should
/// answer `false` for out-of-bounds input even though the pathfinder only
/// asks about tiles its resolver has already bounds-checked.
pub trait Walkability {
    /// Whether `at` lies inside the grid.
    fn in_bounds(&self, at: Offset) -> bool;

    /// Whether `at` may be traversed.
    fn is_walkable(&self, at: Offset) -> bool;
}

/// Result of a shortest-path query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome {
    /// A step-minimal path including both endpoints. A degenerate
    /// same-start-and-goal query yields the single-element path.
    Found(Vec<Offset>),
    /// The goal is not reachable from the start within the walkable
    /// subgraph.
    Unreachable,
    /// The search exceeded its explored-node budget before reaching a
    /// verdict. Only produced by pathfinders configured with
    /// [`Pathfinder::with_budget`].
    Aborted,
}

impl PathOutcome {
    /// The found path, if any.
    pub fn path(&self) -> Option<&[Offset]> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// The found path by value, if any.
    pub fn into_path(self) -> Option<Vec<Offset>> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Unweighted BFS over one grid, scoped to a resolver and an oracle.
///
/// `O(V + E)` time over the explored region and `O(V)` space for the
/// visited set and predecessor map.
pub struct Pathfinder<'a> {
    resolver: &'a NeighborResolver,
    oracle: &'a dyn Walkability,
    budget: Option<usize>,
}

impl<'a> Pathfinder<'a> {
    /// A pathfinder with no explored-node budget.
    pub fn new(resolver: &'a NeighborResolver, oracle: &'a dyn Walkability) -> Self {
        Self {
            resolver,
            oracle,
            budget: None,
        }
    }

    /// Cap the number of tiles a single query may dequeue. Queries that
    /// exceed the cap return [`PathOutcome::Aborted`] instead of running
    /// the grid to exhaustion.
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Shortest path from `start` to `goal`, both endpoints included.
    ///
    /// `start == goal` returns `Found(vec![start])` without searching.
    /// The search stops the moment `goal` is discovered as a neighbor,
    /// which for unweighted BFS is equivalent to waiting for its dequeue.
    pub fn find_path(&self, start: Offset, goal: Offset) -> PathOutcome {
        if start == goal {
            return PathOutcome::Found(vec![start]);
        }
        // A blocked goal can never be discovered; skip the search.
        if !self.oracle.is_walkable(goal) {
            return PathOutcome::Unreachable;
        }

        let mut frontier: VecDeque<Offset> = VecDeque::new();
        let mut visited: IndexSet<Offset> = IndexSet::new();
        let mut predecessor: IndexMap<Offset, Offset> = IndexMap::new();
        visited.insert(start);
        frontier.push_back(start);

        let mut dequeued = 0usize;
        while let Some(tile) = frontier.pop_front() {
            dequeued += 1;
            if self.budget.is_some_and(|cap| dequeued > cap) {
                return PathOutcome::Aborted;
            }
            for next in self.resolver.neighbors(tile) {
                if visited.contains(&next) || !self.oracle.is_walkable(next) {
                    continue;
                }
                predecessor.insert(next, tile);
                if next == goal {
                    return PathOutcome::Found(reconstruct(&predecessor, goal));
                }
                visited.insert(next);
                frontier.push_back(next);
            }
        }
        PathOutcome::Unreachable
    }

    /// The first move after `start` on a shortest path to `goal`, or
    /// `None` when no path exists or `start == goal`.
    pub fn next_step(&self, start: Offset, goal: Offset) -> Option<Offset> {
        match self.find_path(start, goal) {
            PathOutcome::Found(path) => path.get(1).copied(),
            _ => None,
        }
    }

    /// Every walkable tile within `range` steps of `start`, in BFS
    /// discovery order, `start` included. Empty when `start` itself is
    /// not walkable.
    pub fn reachable_within(&self, start: Offset, range: u32) -> Vec<Offset> {
        if !self.oracle.is_walkable(start) {
            return Vec::new();
        }
        let mut visited: IndexSet<Offset> = IndexSet::new();
        let mut frontier: VecDeque<(Offset, u32)> = VecDeque::new();
        visited.insert(start);
        frontier.push_back((start, 0));

        while let Some((tile, depth)) = frontier.pop_front() {
            if depth == range {
                continue;
            }
            for next in self.resolver.neighbors(tile) {
                if visited.contains(&next) || !self.oracle.is_walkable(next) {
                    continue;
                }
                visited.insert(next);
                frontier.push_back((next, depth + 1));
            }
        }
        visited.into_iter().collect()
    }
}

/// Walk the predecessor chain back from `goal` and reverse. The chain
/// ends at the start tile, which has no predecessor entry.
fn reconstruct(predecessor: &IndexMap<Offset, Offset>, goal: Offset) -> Vec<Offset> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = predecessor.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

//! The radius-augmented companion index (RGraph): reuses the HGraph's
//! bottom-layer vertex set and augments each vertex's adjacency with
//! same-radius neighbors, searched with 2-hop expansion.
//!
//! Built with `rayon` across vertices the same way [`crate::hgraph::HGraph`]
//! is, for the same determinism-under-parallel-merge reasons.

use crate::budget::Budget;
use crate::csr::Csr;
use crate::error::{Error, Result};
use crate::kernel::cos_dist;
use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Result of one RGraph search: the vertex best-improvement settled on, the
/// ordered path of vertices whose visit improved the distance, and the
/// start vertex (normally the HGraph's entry vertex).
#[derive(Debug, Clone)]
pub struct RGraphOutcome {
    pub best: usize,
    pub path: Vec<usize>,
    pub start: usize,
}

/// The built RGraph: one CSR adjacency over `L0`.
#[derive(Debug, Clone)]
pub struct RGraph {
    adj: Csr,
}

impl RGraph {
    pub fn build(vectors: &Array2<f32>, radius: f32, c_max: usize) -> Result<Self> {
        let n = vectors.nrows();

        let local_results: Vec<(usize, bool, Vec<usize>)> = (0..n)
            .into_par_iter()
            .map(|i| {
                let row = vectors.row(i);
                let sims = vectors.dot(&row);
                let mut candidates: Vec<usize> = (0..n)
                    .filter(|&j| j != i && 1.0 - sims[j] <= radius)
                    .collect();
                let within_radius = !candidates.is_empty();
                candidates.sort_unstable_by(|&a, &b| {
                    match sims[b].partial_cmp(&sims[a]) {
                        Some(Ordering::Equal) | None => a.cmp(&b),
                        Some(other) => other,
                    }
                });
                candidates.truncate(c_max);
                (i, within_radius, candidates)
            })
            .collect();

        if local_results.iter().all(|(_, within_radius, _)| !within_radius) {
            return Err(Error::NoNeighborsWithinRadius { radius });
        }

        let mut adj_sets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
        for (i, _, js) in local_results {
            for j in js {
                adj_sets[i].insert(j);
                adj_sets[j].insert(i);
            }
        }

        let rows: Vec<Vec<usize>> = adj_sets
            .into_iter()
            .map(|s| s.into_iter().collect())
            .collect();

        Ok(Self {
            adj: Csr::build(rows),
        })
    }

    pub fn neighbors(&self, vertex: usize) -> &[u32] {
        self.adj.row(vertex)
    }

    /// Best-improvement walk over the 2-hop expansion of the current
    /// vertex, starting at `start`.
    pub fn search(
        &self,
        vectors: &Array2<f32>,
        query: ArrayView1<f32>,
        start: usize,
    ) -> RGraphOutcome {
        let mut budget = Budget::unlimited();
        self.search_inner(vectors, query, start, &mut budget)
    }

    pub(crate) fn search_inner(
        &self,
        vectors: &Array2<f32>,
        query: ArrayView1<f32>,
        start: usize,
        budget: &mut Budget,
    ) -> RGraphOutcome {
        let n = vectors.nrows();
        let mut visited = vec![false; n];
        let mut current = start;
        visited[current] = true;
        let mut path = vec![current];

        if !budget.charge_visit() {
            return RGraphOutcome {
                best: current,
                path,
                start,
            };
        }

        loop {
            let mut expand: BTreeSet<usize> = BTreeSet::new();
            for &nbr in self.adj.row(current) {
                expand.insert(nbr as usize);
            }
            let one_hop: Vec<usize> = expand.iter().copied().collect();
            for n1 in one_hop {
                for &nbr2 in self.adj.row(n1) {
                    expand.insert(nbr2 as usize);
                }
            }
            expand.retain(|v| !visited[*v]);

            let current_dist = cos_dist(query, vectors.row(current));
            let mut best = current;
            let mut best_dist = current_dist;
            for v in expand {
                let d = cos_dist(query, vectors.row(v));
                if d < best_dist {
                    best_dist = d;
                    best = v;
                }
            }

            if best == current {
                break;
            }
            if !budget.charge_visit() {
                break;
            }
            current = best;
            visited[current] = true;
            path.push(current);
        }

        RGraphOutcome {
            best: current,
            path,
            start,
        }
    }
}

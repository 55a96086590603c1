//! The layered proximity graph index (HGraph): a multi-layer navigable
//! graph whose top layer is tiny and whose bottom layer spans every vector.
//!
//! Build is parallel top-M per vertex followed by a single-threaded
//! symmetric merge; search is a first-improvement greedy descent from a
//! fixed entry vertex through the layers top to bottom.

use crate::budget::Budget;
use crate::csr::Csr;
use crate::error::{Error, Result};
use crate::kernel::{cos_dist, top_m_indices};
use crate::layers::Layers;
use ndarray::{Array2, ArrayView1, Axis};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Result of one HGraph search: the vertex greedy descent settled on, the
/// per-layer traversal log (index 0 = L2, 1 = L1, 2 = L0), and the entry
/// vertex the walk started from.
#[derive(Debug, Clone)]
pub struct HGraphOutcome {
    pub best: usize,
    pub log: [Vec<usize>; 3],
    pub entry: usize,
}

/// The built HGraph: three per-layer CSR adjacencies plus the layer
/// memberships needed for `layer_of` and a fixed entry vertex.
#[derive(Debug, Clone)]
pub struct HGraph {
    l0_adj: Csr,
    l1_adj: Csr,
    l2_adj: Csr,
    l0: Vec<usize>,
    l1: Vec<usize>,
    l2: Vec<usize>,
    entry: usize,
}

impl HGraph {
    pub fn build(vectors: &Array2<f32>, layers: &Layers, m: usize) -> Result<Self> {
        let n = vectors.nrows();
        let l0_adj = Csr::build(build_layer_adjacency(vectors, &layers.l0, m, n, "L0")?);
        let l1_adj = Csr::build(build_layer_adjacency(vectors, &layers.l1, m, n, "L1")?);
        let l2_adj = Csr::build(build_layer_adjacency(vectors, &layers.l2, m, n, "L2")?);
        Ok(Self {
            l0_adj,
            l1_adj,
            l2_adj,
            l0: layers.l0.clone(),
            l1: layers.l1.clone(),
            l2: layers.l2.clone(),
            entry: layers.entry,
        })
    }

    pub fn entry(&self) -> usize {
        self.entry
    }

    /// Highest layer containing `vertex` (2 = L2, 1 = L1, 0 = L0), or `None`
    /// if the vertex isn't part of the index.
    pub fn layer_of(&self, vertex: usize) -> Option<u8> {
        if self.l2.binary_search(&vertex).is_ok() {
            Some(2)
        } else if self.l1.binary_search(&vertex).is_ok() {
            Some(1)
        } else if self.l0.binary_search(&vertex).is_ok() {
            Some(0)
        } else {
            None
        }
    }

    /// Neighbors of `vertex` within `layer` (0, 1, or 2). Empty for a vertex
    /// outside that layer's population.
    pub fn neighbors(&self, layer: u8, vertex: usize) -> &[u32] {
        match layer {
            0 => self.l0_adj.row(vertex),
            1 => self.l1_adj.row(vertex),
            2 => self.l2_adj.row(vertex),
            _ => &[],
        }
    }

    /// Greedy best-first descent from the entry vertex through L2 -> L1 -> L0.
    pub fn search(&self, vectors: &Array2<f32>, query: ArrayView1<f32>) -> HGraphOutcome {
        let mut budget = Budget::unlimited();
        self.search_inner(vectors, query, &mut budget)
    }

    /// As [`Self::search`], but stops once `budget` is spent, leaving
    /// `current` wherever the walk had gotten to.
    pub(crate) fn search_inner(
        &self,
        vectors: &Array2<f32>,
        query: ArrayView1<f32>,
        budget: &mut Budget,
    ) -> HGraphOutcome {
        let mut current = self.entry;
        let mut log: [Vec<usize>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        let passes: [(&Csr, usize); 3] = [(&self.l2_adj, 0), (&self.l1_adj, 1), (&self.l0_adj, 2)];

        'layers: for (adj, slot) in passes {
            if !budget.charge_visit() {
                log[slot].push(current);
                break 'layers;
            }
            log[slot].push(current);
            loop {
                let d_cur = cos_dist(query, vectors.row(current));
                let mut improved = false;
                for &nbr in adj.row(current) {
                    let nbr = nbr as usize;
                    let d_nbr = cos_dist(query, vectors.row(nbr));
                    if d_nbr < d_cur {
                        if !budget.charge_visit() {
                            break 'layers;
                        }
                        current = nbr;
                        log[slot].push(nbr);
                        improved = true;
                        break;
                    }
                }
                if !improved {
                    break;
                }
            }
        }

        HGraphOutcome {
            best: current,
            log,
            entry: self.entry,
        }
    }
}

/// Builds the symmetric M-nearest adjacency for one layer's vertex
/// population. `members` must be sorted ascending. Returns an `n`-row CSR
/// input where only rows for `members` are non-empty.
fn build_layer_adjacency(
    vectors: &Array2<f32>,
    members: &[usize],
    m: usize,
    n: usize,
    layer_name: &'static str,
) -> Result<Vec<Vec<usize>>> {
    if members.len() < 2 {
        return Err(Error::LayerTooSmall {
            layer: layer_name,
            size: members.len(),
        });
    }

    let sub = vectors.select(Axis(0), members);

    // Parallel per-vertex top-M over the layer's own sub-matrix. Indexed
    // parallel iteration + collect preserves ascending local-index order,
    // so the merge below is deterministic regardless of worker scheduling.
    let local_results: Vec<(usize, Vec<usize>)> = (0..members.len())
        .into_par_iter()
        .map(|local_i| {
            let row = sub.row(local_i);
            let sims = sub.dot(&row);
            let top = top_m_indices(sims.as_slice().expect("contiguous row"), m, local_i);
            (local_i, top)
        })
        .collect();

    let mut adj_sets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for (local_i, local_js) in local_results {
        let gi = members[local_i];
        for local_j in local_js {
            let gj = members[local_j];
            adj_sets[gi].insert(gj);
            adj_sets[gj].insert(gi);
        }
    }

    Ok(adj_sets.into_iter().map(|s| s.into_iter().collect()).collect())
}

//! The built index: entry point for [`build_index`] / [`search`], and the
//! accessor surface visualization tooling reads from.

use crate::error::Result;
use crate::executor;
use crate::hgraph::HGraph;
use crate::kernel::normalize_rows;
use crate::layers::Layers;
use crate::rgraph::RGraph;
use crate::types::{BuildParams, QueryResult};
use ndarray::Array2;
use std::time::{Duration, Instant};
use tracing::{debug, debug_span};

/// A built HGraph + RGraph pair over one corpus.
///
/// Immutable after construction: every method takes `&self`, so any number
/// of [`search`] calls may run concurrently over a shared `&Index` with no
/// locking. Nothing here ever logs on the search path — only [`build_index`]
/// emits `tracing` events, and only at `debug` level for host-side
/// diagnostics, never as part of the returned `Result`.
#[derive(Debug)]
pub struct Index {
    vectors: Array2<f32>,
    hgraph: HGraph,
    rgraph: RGraph,
    build_elapsed: Duration,
}

impl Index {
    /// Number of vertices in the corpus (`N`).
    pub fn vertices(&self) -> usize {
        self.vectors.nrows()
    }

    /// Vector dimensionality (`D`).
    pub fn dimension(&self) -> usize {
        self.vectors.ncols()
    }

    /// Highest HGraph layer containing `vertex` (2, 1, or 0), or `None` if
    /// `vertex` is out of range.
    pub fn layer_of(&self, vertex: usize) -> Option<u8> {
        self.hgraph.layer_of(vertex)
    }

    /// HGraph neighbors of `vertex` within `layer` (0, 1, or 2).
    pub fn neighbors(&self, layer: u8, vertex: usize) -> &[u32] {
        self.hgraph.neighbors(layer, vertex)
    }

    /// RGraph neighbors of `vertex`.
    pub fn rgraph_neighbors(&self, vertex: usize) -> &[u32] {
        self.rgraph.neighbors(vertex)
    }

    /// The fixed HGraph entry vertex shared by both searchers.
    pub fn entry_vertex(&self) -> usize {
        self.hgraph.entry()
    }

    /// Wall-clock time [`build_index`] took.
    pub fn build_elapsed(&self) -> Duration {
        self.build_elapsed
    }
}

/// Builds an [`Index`] over `vectors` (shape `N x D`). Rows are normalized
/// in place; the pre-normalization input is not retained.
///
/// Preconditions: `N >= 2`, `D >= 1`, no zero-norm rows (surfaced as
/// [`crate::Error::ZeroVector`]).
pub fn build_index(mut vectors: Array2<f32>, params: &BuildParams) -> Result<Index> {
    let span = debug_span!("build_index", n = vectors.nrows(), d = vectors.ncols());
    let _enter = span.enter();
    let start = Instant::now();

    normalize_rows(&mut vectors)?;

    let layers = Layers::sample(vectors.nrows(), params.r_mid, params.r_top, params.seed)?;
    debug!(
        l1 = layers.l1.len(),
        l2 = layers.l2.len(),
        entry = layers.entry,
        "layers sampled"
    );

    let hgraph = HGraph::build(&vectors, &layers, params.m)?;
    debug!(
        l0_edges = summed_degree(&hgraph, 0, &layers.l0),
        "hgraph built"
    );

    let rgraph = RGraph::build(&vectors, params.radius, params.c_max)?;
    debug!("rgraph built");

    let build_elapsed = start.elapsed();
    debug!(?build_elapsed, "build finished");

    Ok(Index {
        vectors,
        hgraph,
        rgraph,
        build_elapsed,
    })
}

fn summed_degree(hgraph: &HGraph, layer: u8, members: &[usize]) -> usize {
    members.iter().map(|&v| hgraph.neighbors(layer, v).len()).sum()
}

/// Normalizes `query`, runs both searches from the shared HGraph entry
/// vertex, and returns the traversal metadata. Pure and re-entrant: reads
/// only from `index`'s read-only state.
pub fn search(index: &Index, query: &[f32]) -> Result<QueryResult> {
    executor::execute(
        &index.vectors,
        &index.hgraph,
        &index.rgraph,
        query,
        index.dimension(),
    )
}

/// As [`search`], but caps total vertex visits across both searches at
/// `max_visits`, returning [`crate::Error::BudgetExhausted`] with the best
/// vertex reached so far once the cap is hit.
pub fn search_with_budget(index: &Index, query: &[f32], max_visits: usize) -> Result<QueryResult> {
    executor::execute_with_budget(
        &index.vectors,
        &index.hgraph,
        &index.rgraph,
        query,
        index.dimension(),
        Some(max_visits),
    )
}

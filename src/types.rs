//! Build parameters and query-result shapes.
//!
//! Small, `serde`-derived, host-facing value types carrying traversal
//! metadata rather than a single score.

use serde::Serialize;
use std::time::Duration;

pub type VertexId = usize;

/// Parameters controlling both index builds.
#[derive(Debug, Clone, Copy)]
pub struct BuildParams {
    /// Target out-degree per HGraph layer.
    pub m: usize,
    /// `|L1| = max(1, round(N * r_mid))`.
    pub r_mid: f32,
    /// `|L2| = max(1, round(|L1| * r_top))`.
    pub r_top: f32,
    /// RGraph cosine-distance neighbor threshold, `(0, 2]`.
    pub radius: f32,
    /// RGraph per-vertex direct neighbor cap.
    pub c_max: usize,
    /// RNG seed driving layer sampling and entry-vertex selection.
    pub seed: u64,
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            m: 10,
            r_mid: 0.1,
            r_top: 0.1,
            radius: 0.5,
            c_max: 20,
            seed: 0,
        }
    }
}

impl BuildParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_m(mut self, m: usize) -> Self {
        self.m = m;
        self
    }

    pub fn with_r_mid(mut self, r_mid: f32) -> Self {
        self.r_mid = r_mid;
        self
    }

    pub fn with_r_top(mut self, r_top: f32) -> Self {
        self.r_top = r_top;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_c_max(mut self, c_max: usize) -> Self {
        self.c_max = c_max;
        self
    }
}

/// HGraph half of a [`QueryResult`].
#[derive(Debug, Clone, Serialize)]
pub struct HGraphResult {
    pub best: VertexId,
    /// Per-layer traversal log: index 0 = L2, 1 = L1, 2 = L0.
    pub log: [Vec<VertexId>; 3],
    #[serde(skip)]
    pub elapsed: Duration,
}

/// RGraph half of a [`QueryResult`].
#[derive(Debug, Clone, Serialize)]
pub struct RGraphResult {
    pub best: VertexId,
    pub path: Vec<VertexId>,
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Everything a visualizer needs from one query: the shared entry vertex
/// and both searches' outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub entry_vertex: VertexId,
    pub hgraph: HGraphResult,
    pub rgraph: RGraphResult,
}

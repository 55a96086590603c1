//! vectorwalk: layered-graph (HGraph) and radius-augmented (RGraph)
//! approximate nearest-neighbor indexes over a fixed vector corpus, with a
//! query executor that runs both from a shared entry point and records
//! traversal metadata for visualization.
//!
//! # Features
//!
//! - **HGraph** — a small top layer and a bottom layer spanning every
//!   vector, connected by symmetric top-M cosine-similarity adjacency per
//!   layer. Search is a first-improvement greedy descent from a fixed entry
//!   vertex through the layers.
//! - **RGraph** — a single radius-thresholded adjacency over the bottom
//!   layer's vertex set. Search is a best-improvement walk over each
//!   vertex's 2-hop expansion.
//! - **Shared entry point** — one query normalizes once, searches HGraph to
//!   find an entry vertex, then hands that vertex to RGraph.
//! - **Step budgets** — callers can cap total vertex visits across both
//!   searches; an exhausted budget is a recoverable error carrying the best
//!   vertex reached so far.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use vectorwalk::{build_index, search, BuildParams};
//!
//! let vectors = array![
//!     [1.0, 0.0],
//!     [0.0, 1.0],
//!     [-1.0, 0.0],
//!     [0.0, -1.0],
//! ];
//! let params = BuildParams::default()
//!     .with_r_mid(1.0)
//!     .with_r_top(1.0)
//!     .with_radius(2.0);
//! let index = build_index(vectors, &params).unwrap();
//! let result = search(&index, &[0.9, 0.1]).unwrap();
//! assert_eq!(result.hgraph.best, 0);
//! ```

mod budget;
mod csr;
mod error;
mod executor;
mod hgraph;
mod index;
mod kernel;
mod layers;
mod rgraph;
mod types;

pub use error::{Error, Result};
pub use hgraph::{HGraph, HGraphOutcome};
pub use index::{build_index, search, search_with_budget, Index};
pub use rgraph::{RGraph, RGraphOutcome};
pub use types::{BuildParams, HGraphResult, QueryResult, RGraphResult, VertexId};

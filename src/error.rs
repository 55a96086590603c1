//! Error taxonomy for the core.
//!
//! Every failure a build or a search can produce is a variant here; the
//! core never logs on its own, it only returns these (see [`crate::Index`]
//! docs). Hosts translate variants to HTTP status codes, CLI exit codes, or
//! whatever else fits their surface.

/// Epsilon below which a vector's L2 norm is treated as zero.
pub const ZERO_NORM_EPS: f32 = 1e-12;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vector has near-zero norm (< {eps}); cannot normalize")]
    ZeroVector { eps: f32 },

    #[error("query vector has near-zero norm (< {eps}); cannot normalize")]
    ZeroQuery { eps: f32 },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("layer sampling produced an empty {layer} layer")]
    EmptyLayer { layer: &'static str },

    #[error("layer {layer} has only {size} vertex/vertices, need at least 2 to build adjacency")]
    LayerTooSmall { layer: &'static str, size: usize },

    #[error("search called on an index that was never built")]
    EmptyGraph,

    #[error("no vertex fell within radius {radius} of any other vertex")]
    NoNeighborsWithinRadius { radius: f32 },

    #[error("step budget of {budget} vertex visits exhausted (best reached so far: {best_so_far})")]
    BudgetExhausted { budget: usize, best_so_far: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

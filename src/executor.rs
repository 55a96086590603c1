//! The query executor: normalizes a query vector, runs HGraph then RGraph
//! from a shared entry point, and records the traversal log plus per-index
//! timing.
//!
//! Holds no state of its own: it is a pair of free functions over borrowed,
//! read-only index data, so any number of calls may run concurrently
//! without synchronization.

use crate::budget::Budget;
use crate::error::{Error, Result, ZERO_NORM_EPS};
use crate::hgraph::HGraph;
use crate::kernel::normalize;
use crate::rgraph::RGraph;
use crate::types::{HGraphResult, QueryResult, RGraphResult};
use ndarray::{Array1, Array2};
use std::time::Instant;

pub(crate) fn execute(
    vectors: &Array2<f32>,
    hgraph: &HGraph,
    rgraph: &RGraph,
    query_raw: &[f32],
    dimension: usize,
) -> Result<QueryResult> {
    execute_with_budget(vectors, hgraph, rgraph, query_raw, dimension, None)
}

pub(crate) fn execute_with_budget(
    vectors: &Array2<f32>,
    hgraph: &HGraph,
    rgraph: &RGraph,
    query_raw: &[f32],
    dimension: usize,
    max_visits: Option<usize>,
) -> Result<QueryResult> {
    if query_raw.len() != dimension {
        return Err(Error::DimensionMismatch {
            expected: dimension,
            actual: query_raw.len(),
        });
    }

    let normalized = normalize(query_raw).map_err(|_| Error::ZeroQuery { eps: ZERO_NORM_EPS })?;
    let query = Array1::from(normalized);

    let mut budget = match max_visits {
        Some(n) => Budget::capped(n),
        None => Budget::unlimited(),
    };

    let h_start = Instant::now();
    let h_outcome = hgraph.search_inner(vectors, query.view(), &mut budget);
    let h_elapsed = h_start.elapsed();

    if budget.exhausted {
        return Err(Error::BudgetExhausted {
            budget: max_visits.unwrap_or(0),
            best_so_far: h_outcome.best,
        });
    }

    let r_start = Instant::now();
    let r_outcome = rgraph.search_inner(vectors, query.view(), h_outcome.entry, &mut budget);
    let r_elapsed = r_start.elapsed();

    if budget.exhausted {
        return Err(Error::BudgetExhausted {
            budget: max_visits.unwrap_or(0),
            best_so_far: r_outcome.best,
        });
    }

    Ok(QueryResult {
        entry_vertex: h_outcome.entry,
        hgraph: HGraphResult {
            best: h_outcome.best,
            log: h_outcome.log,
            elapsed: h_elapsed,
        },
        rgraph: RGraphResult {
            best: r_outcome.best,
            path: r_outcome.path,
            elapsed: r_elapsed,
        },
    })
}

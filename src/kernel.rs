//! Vector kernel: normalization, cosine similarity/distance, and the
//! partial top-M selection used by both index builders.
//!
//! Cosine-only by design: every invariant this crate relies on (entry
//! stability, degree bounds, greedy monotonicity) is stated in terms of
//! unit vectors and cosine distance.

use crate::error::{Error, Result, ZERO_NORM_EPS};
use ndarray::{Array2, ArrayView1, Axis};
use std::cmp::Ordering;

/// L2 norm of `v`.
#[inline]
pub fn magnitude(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Returns `v / ‖v‖₂`. Fails if the norm is below [`ZERO_NORM_EPS`].
pub fn normalize(v: &[f32]) -> Result<Vec<f32>> {
    let mag = magnitude(v);
    if mag < ZERO_NORM_EPS {
        return Err(Error::ZeroVector { eps: ZERO_NORM_EPS });
    }
    Ok(v.iter().map(|x| x / mag).collect())
}

/// Row-normalizes `m` in place. A zero row is a fatal build-time error.
pub fn normalize_rows(m: &mut Array2<f32>) -> Result<()> {
    for mut row in m.axis_iter_mut(Axis(0)) {
        let mag = row.iter().map(|x| x * x).sum::<f32>().sqrt();
        if mag < ZERO_NORM_EPS {
            return Err(Error::ZeroVector { eps: ZERO_NORM_EPS });
        }
        row.iter_mut().for_each(|x| *x /= mag);
    }
    Ok(())
}

/// Cosine similarity between pre-normalized vectors: `dot(a, b)`, range `[-1, 1]`.
#[inline]
pub fn cos_sim(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
    a.dot(&b)
}

/// Cosine distance between pre-normalized vectors: `1 - dot(a, b)`, range `[0, 2]`.
#[inline]
pub fn cos_dist(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
    1.0 - cos_sim(a, b)
}

#[inline]
fn cmp_desc_with_tiebreak(sims: &[f32], a: usize, b: usize) -> Ordering {
    match sims[b].partial_cmp(&sims[a]) {
        Some(Ordering::Equal) | None => a.cmp(&b),
        Some(other) => other,
    }
}

/// Indices of the `m` largest values in `sims`, unordered, excluding `exclude`.
/// Ties broken by smaller index. Uses a partial selection rather than a full
/// sort (`O(K)` average rather than `O(K log K)`).
pub fn top_m_indices(sims: &[f32], m: usize, exclude: usize) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..sims.len()).filter(|&i| i != exclude).collect();
    let k = m.min(idx.len());
    if k == 0 {
        return Vec::new();
    }
    idx.select_nth_unstable_by(k - 1, |&a, &b| cmp_desc_with_tiebreak(sims, a, b));
    idx.truncate(k);
    idx
}

//! Compressed-sparse-row adjacency, built once from a per-vertex
//! sorted-and-deduplicated neighbor list.
//!
//! A vector-of-sorted-vectors during build is compacted into CSR afterward
//! for cache-friendly, deterministically-ordered iteration during search.

/// Read-only adjacency over `0..n` vertices. Rows for vertices outside a
/// given population are simply empty.
#[derive(Debug, Clone)]
pub struct Csr {
    offsets: Vec<u32>,
    neighbors: Vec<u32>,
}

impl Csr {
    /// `rows[v]` must already be sorted ascending and deduplicated, and must
    /// not contain `v` itself.
    pub fn build(rows: Vec<Vec<usize>>) -> Self {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        let mut neighbors = Vec::new();
        offsets.push(0u32);
        for row in &rows {
            neighbors.extend(row.iter().map(|&x| x as u32));
            offsets.push(neighbors.len() as u32);
        }
        Self { offsets, neighbors }
    }

    #[inline]
    pub fn row(&self, v: usize) -> &[u32] {
        let start = self.offsets[v] as usize;
        let end = self.offsets[v + 1] as usize;
        &self.neighbors[start..end]
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.row(v).len()
    }
}

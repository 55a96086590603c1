//! Layer assignment: deterministic, seeded sampling of vertices into the
//! nested populations `L2 ⊆ L1 ⊆ L0`.
//!
//! Two samples and an entry-point draw, all taken off one running RNG
//! state: a seeded `ChaCha8Rng` so two builds with the same
//! `(N, params, seed)` produce byte-identical layers.

use crate::error::{Error, Result};
use rand::SeedableRng;
use rand::seq::{IteratorRandom, SliceRandom};
use rand_chacha::ChaCha8Rng;

/// The three nested vertex populations plus the entry vertex chosen from `l2`.
#[derive(Debug, Clone)]
pub struct Layers {
    pub l0: Vec<usize>,
    pub l1: Vec<usize>,
    pub l2: Vec<usize>,
    pub entry: usize,
}

impl Layers {
    /// `L0 = [0, n)`. Samples `|L1| = max(1, round(n * r_mid))` distinct
    /// vertices from `L0`, then `|L2| = max(1, round(|L1| * r_top))` distinct
    /// vertices from `L1`. Both samples and the entry-point draw come from
    /// one seeded RNG stream, in that order, so the whole construction is
    /// reproducible.
    pub fn sample(n: usize, r_mid: f32, r_top: f32, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let l0: Vec<usize> = (0..n).collect();

        let l1_size = ((n as f32) * r_mid).round().max(1.0) as usize;
        let mut l1: Vec<usize> = l0
            .iter()
            .copied()
            .choose_multiple(&mut rng, l1_size.min(n));
        l1.sort_unstable();
        if l1.is_empty() {
            return Err(Error::EmptyLayer { layer: "L1" });
        }

        let l2_size = ((l1.len() as f32) * r_top).round().max(1.0) as usize;
        let mut l2: Vec<usize> = l1
            .iter()
            .copied()
            .choose_multiple(&mut rng, l2_size.min(l1.len()));
        l2.sort_unstable();
        if l2.is_empty() {
            return Err(Error::EmptyLayer { layer: "L2" });
        }

        let entry = *l2
            .choose(&mut rng)
            .expect("l2 was just checked non-empty");

        Ok(Self { l0, l1, l2, entry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_holds() {
        let layers = Layers::sample(100, 0.1, 0.1, 42).unwrap();
        assert!(layers.l2.iter().all(|v| layers.l1.contains(v)));
        assert!(layers.l1.iter().all(|v| layers.l0.contains(v)));
        assert!(!layers.l2.is_empty());
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let a = Layers::sample(200, 0.1, 0.1, 7).unwrap();
        let b = Layers::sample(200, 0.1, 0.1, 7).unwrap();
        assert_eq!(a.l1, b.l1);
        assert_eq!(a.l2, b.l2);
        assert_eq!(a.entry, b.entry);
    }

    #[test]
    fn tiny_ratio_still_yields_one_vertex() {
        let layers = Layers::sample(1000, 0.001, 0.001, 1).unwrap();
        assert_eq!(layers.l2.len(), 1);
    }

    #[test]
    fn boundary_n_two() {
        let layers = Layers::sample(2, 1.0, 1.0, 3).unwrap();
        assert_eq!(layers.l0, vec![0, 1]);
        assert_eq!(layers.l1, vec![0, 1]);
        assert_eq!(layers.l2.len(), 2);
    }
}

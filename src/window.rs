//! Block-pair selection around an anchor block.
//!
//! Every clause is anchored at a uniformly random block `i`. A
//! [`BlockSelector`] then resolves the two endpoint blocks of the clause
//! from the window of `w` blocks `i, i+1, ..., i+w-1` (taken modulo `L`).
//!
//! - [`UniformWindow`] picks a raw index in `[i, i+w-1]` and only then wraps it
//!   onto the ring, independently for both endpoints.
//! - [`BiasedWindow`] weights the offsets inside the window by
//!   `exp(-bias_strength * offset)`, and with probability `1 - biased_prob`
//!   ignores the window altogether in favour of a uniform draw over all blocks.

use log::debug;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::error::ParamError;
use crate::params::Mode;
use crate::ring::Ring;

/// Strategy resolving the two endpoint blocks of a clause.
pub trait BlockSelector {
    /// Returns `(b1, b2)`, both in `[0, L-1]`. The two blocks may coincide.
    fn select<R: Rng + ?Sized>(&self, ring: &Ring, anchor: usize, rng: &mut R) -> (usize, usize);
}

/// Uniform draw over the window following the anchor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UniformWindow {
    width: usize,
}

impl UniformWindow {
    pub fn new(width: usize) -> Self {
        assert!(width >= 1, "Window must span at least one block");
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn pick<R: Rng + ?Sized>(&self, ring: &Ring, anchor: usize, rng: &mut R) -> usize {
        // Raw pick over the unwrapped range first, wrap afterwards.
        let raw = rng.random_range(anchor..anchor + self.width);
        ring.wrap(raw)
    }
}

impl BlockSelector for UniformWindow {
    fn select<R: Rng + ?Sized>(&self, ring: &Ring, anchor: usize, rng: &mut R) -> (usize, usize) {
        let b1 = self.pick(ring, anchor, rng);
        let b2 = self.pick(ring, anchor, rng);
        (b1, b2)
    }
}

/// Offset weights `exp(-bias_strength * k)` for `k = 0..width`, scaled to sum to `width`.
///
/// The weights are non-increasing in `k`, and all equal to `1.0` when
/// `bias_strength == 0`.
pub fn offset_weights(width: usize, bias_strength: f64) -> Vec<f64> {
    let raw: Vec<f64> = (0..width).map(|k| (-bias_strength * k as f64).exp()).collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|x| x * width as f64 / total).collect()
}

/// Exponentially biased window draw with a global uniform fallback.
#[derive(Debug, Clone)]
pub struct BiasedWindow {
    width: usize,
    biased_prob: f64,
    weights: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl BiasedWindow {
    pub fn new(width: usize, bias_strength: f64, biased_prob: f64) -> Result<Self, ParamError> {
        assert!(width >= 1, "Window must span at least one block");
        if !(bias_strength.is_finite() && bias_strength >= 0.0) {
            return Err(ParamError::InvalidBiasStrength(bias_strength));
        }
        if !(0.0..=1.0).contains(&biased_prob) {
            return Err(ParamError::InvalidBiasedProb(biased_prob));
        }
        let weights = offset_weights(width, bias_strength);
        debug!("BiasedWindow: width = {}, weights = {:?}", width, weights);
        let index = WeightedIndex::new(&weights).map_err(|_| ParamError::InvalidBiasStrength(bias_strength))?;
        Ok(Self {
            width,
            biased_prob,
            weights,
            index,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn biased_prob(&self) -> f64 {
        self.biased_prob
    }

    /// Normalized offset weights, indexed by offset from the anchor.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Two independent weighted offsets in `[0, w-1]`.
    pub fn select_offsets<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, usize) {
        (self.index.sample(rng), self.index.sample(rng))
    }
}

impl BlockSelector for BiasedWindow {
    fn select<R: Rng + ?Sized>(&self, ring: &Ring, anchor: usize, rng: &mut R) -> (usize, usize) {
        if rng.random_bool(self.biased_prob) {
            let (o1, o2) = self.select_offsets(rng);
            (ring.wrap(anchor + o1), ring.wrap(anchor + o2))
        } else {
            let l = ring.num_blocks();
            (rng.random_range(0..l), rng.random_range(0..l))
        }
    }
}

/// Selector for any [`Mode`].
#[derive(Debug, Clone)]
pub enum Selector {
    Uniform(UniformWindow),
    Biased(BiasedWindow),
}

impl Selector {
    pub fn from_mode(mode: Mode, width: usize) -> Result<Self, ParamError> {
        match mode {
            Mode::UniformWindow => Ok(Selector::Uniform(UniformWindow::new(width))),
            Mode::BiasedWindow {
                bias_strength,
                biased_prob,
            } => BiasedWindow::new(width, bias_strength, biased_prob).map(Selector::Biased),
        }
    }
}

impl BlockSelector for Selector {
    fn select<R: Rng + ?Sized>(&self, ring: &Ring, anchor: usize, rng: &mut R) -> (usize, usize) {
        match self {
            Selector::Uniform(s) => s.select(ring, anchor, rng),
            Selector::Biased(s) => s.select(ring, anchor, rng),
        }
    }
}

//! Generation parameters.
//!
//! A [`Params`] value fixes everything one generation call needs: the ring
//! dimensions, the clause density, the window width and the block-selection
//! [`Mode`]. Parameters are checked as a whole by [`Params::validate`]; the
//! [`Generator`][crate::generator::Generator] refuses to start on invalid input.

use std::fmt;

use crate::error::ParamError;
use crate::ring::Ring;

/// Block-selection mode.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Mode {
    #[default]
    /// Both endpoint blocks are drawn uniformly from the `w` blocks following the anchor.
    UniformWindow,
    /// Window blocks are weighted by `exp(-bias_strength * offset)`.
    ///
    /// With probability `biased_prob` the weighted window draw is used,
    /// otherwise both blocks are drawn uniformly from the whole ring.
    BiasedWindow { bias_strength: f64, biased_prob: f64 },
}

impl Mode {
    pub const DEFAULT_BIAS_STRENGTH: f64 = 1.0;
    pub const DEFAULT_BIASED_PROB: f64 = 0.7;

    /// Biased mode with the default tuning.
    pub fn biased() -> Self {
        Mode::BiasedWindow {
            bias_strength: Self::DEFAULT_BIAS_STRENGTH,
            biased_prob: Self::DEFAULT_BIASED_PROB,
        }
    }

    pub fn is_biased(&self) -> bool {
        matches!(self, Mode::BiasedWindow { .. })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::UniformWindow => write!(f, "uniform-window"),
            Mode::BiasedWindow {
                bias_strength,
                biased_prob,
            } => write!(f, "biased-window(strength={}, prob={})", bias_strength, biased_prob),
        }
    }
}

/// Parameters of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    /// Number of blocks on the ring (`L`).
    pub num_blocks: usize,
    /// Variables per block (`n`).
    pub block_size: usize,
    /// Clauses per variable (`r`).
    pub density: f64,
    /// Window width in blocks (`w`).
    pub width: usize,
    /// Block-selection mode.
    pub mode: Mode,
}

impl Params {
    /// Upper bound on the number of clauses of one instance.
    pub const MAX_CLAUSES: usize = i32::MAX as usize;

    /// Create parameters for the uniform-window mode.
    pub fn new(num_blocks: usize, block_size: usize, density: f64, width: usize) -> Self {
        Self {
            num_blocks,
            block_size,
            density,
            width,
            mode: Mode::UniformWindow,
        }
    }

    /// Set the block-selection mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Switch to the biased-window mode with the given tuning.
    pub fn biased(self, bias_strength: f64, biased_prob: f64) -> Self {
        self.with_mode(Mode::BiasedWindow {
            bias_strength,
            biased_prob,
        })
    }

    /// Set the clause density.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Check every parameter, without adjusting any of them.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.num_blocks < 1 {
            return Err(ParamError::NoBlocks);
        }
        if self.block_size < 2 {
            return Err(ParamError::BlockTooSmall(self.block_size));
        }
        match self.num_blocks.checked_mul(self.block_size) {
            Some(n) if n < i32::MAX as usize => {}
            _ => return Err(ParamError::TooManyVars(self.num_blocks.saturating_mul(self.block_size))),
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ParamError::InvalidDensity(self.density));
        }
        let m = (self.density * self.num_vars() as f64).floor();
        if m > Self::MAX_CLAUSES as f64 {
            return Err(ParamError::TooManyClauses(m));
        }
        if self.width < 1 || self.width > self.num_blocks {
            return Err(ParamError::InvalidWidth {
                width: self.width,
                num_blocks: self.num_blocks,
            });
        }
        if let Mode::BiasedWindow {
            bias_strength,
            biased_prob,
        } = self.mode
        {
            if !(bias_strength.is_finite() && bias_strength >= 0.0) {
                return Err(ParamError::InvalidBiasStrength(bias_strength));
            }
            if !(0.0..=1.0).contains(&biased_prob) {
                return Err(ParamError::InvalidBiasedProb(biased_prob));
            }
        }
        Ok(())
    }

    /// Block layout described by these parameters.
    ///
    /// # Panics
    ///
    /// Panics if either ring dimension is zero.
    pub fn ring(&self) -> Ring {
        Ring::new(self.num_blocks, self.block_size)
    }

    /// Total number of variables, `N = L * n`.
    pub fn num_vars(&self) -> usize {
        self.num_blocks * self.block_size
    }

    /// Number of clauses, `M = floor(r * N)`.
    ///
    /// The product is truncated, never rounded.
    pub fn num_clauses(&self) -> usize {
        (self.density * self.num_vars() as f64) as usize
    }
}

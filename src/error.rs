use std::fmt;

/// Error type for rejected generation parameters.
///
/// Every variant is raised by [`Params::validate`][crate::params::Params::validate]
/// before any clause is produced. Out-of-range values are never clamped.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// The ring has no blocks (`L < 1`).
    NoBlocks,
    /// Blocks are too small to pick two distinct variables (`n < 2`).
    BlockTooSmall(usize),
    /// Density is not a positive finite number.
    InvalidDensity(f64),
    /// Window width is outside `[1, L]`.
    InvalidWidth { width: usize, num_blocks: usize },
    /// Bias strength is negative or not finite.
    InvalidBiasStrength(f64),
    /// Probability of the windowed draw is outside `[0, 1]`.
    InvalidBiasedProb(f64),
    /// `floor(r * L * n)` exceeds [`Params::MAX_CLAUSES`][crate::params::Params::MAX_CLAUSES].
    TooManyClauses(f64),
    /// The variable universe does not fit into DIMACS literals.
    TooManyVars(usize),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::NoBlocks => write!(f, "number of blocks must be at least 1"),
            ParamError::BlockTooSmall(n) => {
                write!(f, "block size must be at least 2, got {}", n)
            }
            ParamError::InvalidDensity(r) => {
                write!(f, "density must be a positive finite number, got {}", r)
            }
            ParamError::InvalidWidth { width, num_blocks } => {
                write!(f, "window width must be in [1, {}], got {}", num_blocks, width)
            }
            ParamError::InvalidBiasStrength(s) => {
                write!(f, "bias strength must be a non-negative finite number, got {}", s)
            }
            ParamError::InvalidBiasedProb(p) => {
                write!(f, "biased probability must be in [0, 1], got {}", p)
            }
            ParamError::TooManyClauses(m) => {
                write!(f, "{} clauses exceed the limit of {}", m, crate::params::Params::MAX_CLAUSES)
            }
            ParamError::TooManyVars(n) => {
                write!(f, "{} variables do not fit into 32-bit DIMACS literals", n)
            }
        }
    }
}

impl std::error::Error for ParamError {}

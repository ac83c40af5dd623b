//! Type-safe wrappers for variables and literals.
//!
//! Variables are 0-indexed internally, matching their position in the
//! block layout. Literals use the DIMACS convention: the magnitude is the
//! 1-based variable index and the sign encodes polarity, so `0` is never a
//! valid literal.
use std::fmt;
use std::ops::Neg;

/// A variable index (0-indexed).
///
/// # Invariants
///
/// - The DIMACS form of a variable is `index + 1`, so it always fits in a
///   positive `i32` literal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a variable with the given 0-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index + 1` does not fit into a positive `i32`.
    pub fn new(index: u32) -> Self {
        assert!(index < i32::MAX as u32, "Variable index {} is too large", index);
        Var(index)
    }

    /// Returns the 0-based index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the 1-based DIMACS variable number.
    pub fn to_dimacs(self) -> i32 {
        self.0 as i32 + 1
    }

    /// Positive literal of this variable.
    pub fn pos(self) -> Lit {
        Lit(self.to_dimacs())
    }

    /// Negative literal of this variable.
    pub fn neg(self) -> Lit {
        Lit(-self.to_dimacs())
    }

    /// Literal of this variable with the given polarity.
    pub fn lit(self, negated: bool) -> Lit {
        if negated {
            self.neg()
        } else {
            self.pos()
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.to_dimacs())
    }
}

impl From<usize> for Var {
    fn from(index: usize) -> Self {
        assert!(index < i32::MAX as usize, "Variable index {} is too large", index);
        Var(index as u32)
    }
}

/// A literal in DIMACS encoding: `±(var + 1)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Lit(i32);

impl Lit {
    /// Creates a literal from its DIMACS representation.
    ///
    /// # Panics
    ///
    /// Panics if `value == 0`.
    pub fn from_dimacs(value: i32) -> Self {
        assert_ne!(value, 0, "Literal 0 is not a valid DIMACS literal");
        Lit(value)
    }

    /// Returns the signed DIMACS representation.
    pub const fn to_dimacs(self) -> i32 {
        self.0
    }

    /// Returns the underlying variable.
    pub fn var(self) -> Var {
        Var(self.0.unsigned_abs() - 1)
    }

    pub const fn is_negated(self) -> bool {
        self.0 < 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Lit(-self.0)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

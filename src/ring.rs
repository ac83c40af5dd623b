//! Circular block layout of the variable universe.
//!
//! `L` blocks of `n` variables each are arranged on a ring, so block `L-1`
//! is adjacent to block `0` ("tail-biting"). Block `b` owns the variables
//! `b*n .. (b+1)*n`.

use std::fmt;
use std::ops::Range;

use crate::types::Var;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ring {
    num_blocks: usize,
    block_size: usize,
}

impl Ring {
    /// Creates a ring of `num_blocks` blocks with `block_size` variables each.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. Use [`Params::validate`][crate::params::Params::validate]
    /// to reject bad user input with an error instead.
    pub fn new(num_blocks: usize, block_size: usize) -> Self {
        assert!(num_blocks >= 1, "Ring must have at least one block");
        assert!(block_size >= 1, "Blocks must contain at least one variable");
        Self { num_blocks, block_size }
    }

    pub fn num_blocks(&self) -> usize {
        self.num_blocks
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Total number of variables, `L * n`.
    pub fn num_vars(&self) -> usize {
        self.num_blocks * self.block_size
    }

    /// Block owning the given variable.
    pub fn block_of(&self, var: Var) -> usize {
        var.index() / self.block_size
    }

    /// Range of variable indices owned by `block`.
    pub fn block_vars(&self, block: usize) -> Range<usize> {
        debug_assert!(block < self.num_blocks);
        block * self.block_size..(block + 1) * self.block_size
    }

    /// Reduces a raw (possibly past-the-end) block index onto the ring.
    pub fn wrap(&self, raw: usize) -> usize {
        raw % self.num_blocks
    }

    /// Forward distance from `anchor` to `block` along the ring.
    pub fn offset(&self, anchor: usize, block: usize) -> usize {
        (block + self.num_blocks - anchor % self.num_blocks) % self.num_blocks
    }

    /// Shortest distance between two blocks in either direction.
    pub fn distance(&self, a: usize, b: usize) -> usize {
        let forward = self.offset(a, b);
        forward.min(self.num_blocks - forward)
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.num_blocks, self.block_size)
    }
}

//! Locality statistics of a generated instance.

use std::fmt;

use crate::instance::Instance;
use crate::ring::Ring;

/// Summary of how an instance's clauses spread over the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceStats {
    pub num_vars: usize,
    pub num_clauses: usize,
    /// Clauses whose two variables share a block.
    pub same_block: usize,
    /// `distance_histogram[d]` counts clauses whose endpoint blocks are `d` blocks apart (shortest way round).
    pub distance_histogram: Vec<usize>,
    /// Number of negated literals among all `2 * num_clauses` literals.
    pub negated: usize,
}

impl InstanceStats {
    pub fn new(instance: &Instance, ring: &Ring) -> Self {
        let mut distance_histogram = vec![0; ring.num_blocks() / 2 + 1];
        let mut same_block = 0;
        let mut negated = 0;

        for clause in instance.clauses() {
            let [b1, b2] = clause.blocks(ring);
            if b1 == b2 {
                same_block += 1;
            }
            distance_histogram[ring.distance(b1, b2)] += 1;
            negated += clause.lits().iter().filter(|lit| lit.is_negated()).count();
        }

        Self {
            num_vars: instance.num_vars(),
            num_clauses: instance.len(),
            same_block,
            distance_histogram,
            negated,
        }
    }

    /// Clause-to-variable ratio actually realized.
    pub fn density(&self) -> f64 {
        if self.num_vars == 0 {
            0.0
        } else {
            self.num_clauses as f64 / self.num_vars as f64
        }
    }

    /// Fraction of negated literals.
    pub fn negated_fraction(&self) -> f64 {
        if self.num_clauses == 0 {
            0.0
        } else {
            self.negated as f64 / (2 * self.num_clauses) as f64
        }
    }

    /// Fraction of clauses whose endpoint blocks are at most `max_distance` apart.
    pub fn local_fraction(&self, max_distance: usize) -> f64 {
        if self.num_clauses == 0 {
            return 0.0;
        }
        let local: usize = self.distance_histogram.iter().take(max_distance + 1).sum();
        local as f64 / self.num_clauses as f64
    }
}

impl fmt::Display for InstanceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Variables:         {}", self.num_vars)?;
        writeln!(f, "Clauses:           {}", self.num_clauses)?;
        writeln!(f, "Density:           {:.4}", self.density())?;
        writeln!(f, "Same-block:        {}", self.same_block)?;
        writeln!(f, "Negated literals:  {:.4}", self.negated_fraction())?;
        write!(f, "Block distances:  ")?;
        for (d, count) in self.distance_histogram.iter().enumerate() {
            if *count > 0 {
                write!(f, " {}:{}", d, count)?;
            }
        }
        Ok(())
    }
}

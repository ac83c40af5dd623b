//! Generated clauses and instances.
//!
//! An [`Instance`] is an ordered list of two-literal [`Clause`]s over
//! `num_vars` variables. Its literal encoding is already the one used by
//! DIMACS, so [`Instance::as_dimacs`] and [`Instance::write_dimacs`] never
//! transform literals.

use std::fmt;
use std::io;

use crate::ring::Ring;
use crate::types::{Lit, Var};

/// A two-literal clause over two distinct variables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Clause(Lit, Lit);

impl Clause {
    /// # Panics
    ///
    /// Panics if both literals refer to the same variable.
    pub fn new(first: Lit, second: Lit) -> Self {
        assert_ne!(first.var(), second.var(), "Clause literals must have distinct variables");
        Clause(first, second)
    }

    pub fn lits(&self) -> [Lit; 2] {
        [self.0, self.1]
    }

    pub fn vars(&self) -> [Var; 2] {
        [self.0.var(), self.1.var()]
    }

    pub fn to_dimacs(&self) -> [i32; 2] {
        [self.0.to_dimacs(), self.1.to_dimacs()]
    }

    /// Endpoint blocks of this clause on the given ring.
    pub fn blocks(&self, ring: &Ring) -> [usize; 2] {
        [ring.block_of(self.0.var()), ring.block_of(self.1.var())]
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} ∨ {})", self.0, self.1)
    }
}

/// Violation found by [`Instance::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceViolation {
    /// Literal magnitude outside `[1, num_vars]`.
    OutOfRange { clause: usize, lit: i32 },
    /// Both literals reference the same variable.
    SameVar { clause: usize, var: i32 },
}

impl fmt::Display for InstanceViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceViolation::OutOfRange { clause, lit } => {
                write!(f, "clause #{}: literal {} is out of range", clause, lit)
            }
            InstanceViolation::SameVar { clause, var } => {
                write!(f, "clause #{}: both literals reference variable {}", clause, var)
            }
        }
    }
}

impl std::error::Error for InstanceViolation {}

/// An ordered sequence of clauses over `num_vars` variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Instance {
    num_vars: usize,
    clauses: Vec<Clause>,
}

impl Instance {
    pub fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    pub fn with_capacity(num_vars: usize, capacity: usize) -> Self {
        Self {
            num_vars,
            clauses: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, clause: Clause) {
        debug_assert!(clause.vars().iter().all(|v| v.index() < self.num_vars));
        self.clauses.push(clause);
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    /// Clause list in the signed-integer form expected by SAT solvers.
    pub fn as_dimacs(&self) -> Vec<Vec<i32>> {
        self.clauses.iter().map(|c| c.to_dimacs().to_vec()).collect()
    }

    /// Re-check the structural invariants of every clause.
    pub fn check(&self) -> Result<(), InstanceViolation> {
        for (i, clause) in self.clauses.iter().enumerate() {
            for lit in clause.lits() {
                let value = lit.to_dimacs();
                if value == 0 || value.unsigned_abs() as usize > self.num_vars {
                    return Err(InstanceViolation::OutOfRange { clause: i, lit: value });
                }
            }
            let [v1, v2] = clause.vars();
            if v1 == v2 {
                return Err(InstanceViolation::SameVar {
                    clause: i,
                    var: v1.to_dimacs(),
                });
            }
        }
        Ok(())
    }

    /// Write the instance in DIMACS CNF format.
    ///
    /// ```text
    /// c <comment>
    /// p cnf <num_vars> <num_clauses>
    /// <lit1> <lit2> 0
    /// ```
    pub fn write_dimacs<W: io::Write>(&self, mut writer: W, comments: &[String]) -> io::Result<()> {
        for comment in comments {
            writeln!(writer, "c {}", comment)?;
        }
        write!(writer, "{}", self)
    }

    /// Render the instance as a DIMACS CNF string, without comments.
    pub fn to_dimacs_string(&self) -> String {
        self.to_string()
    }
}

/// DIMACS CNF body: the `p cnf` header followed by one clause per line.
impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p cnf {} {}", self.num_vars, self.clauses.len())?;
        for clause in &self.clauses {
            let [a, b] = clause.to_dimacs();
            writeln!(f, "{} {} 0", a, b)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Instance {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl IntoIterator for Instance {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

//! Interface to an external SAT solver.
//!
//! The crate ships no solver. Any backend can be plugged in by implementing
//! [`SatSolver`]; the clause list it receives is exactly [`Instance::as_dimacs`].

use log::debug;

use crate::instance::Instance;

/// Black-box SAT solver collaborator.
pub trait SatSolver {
    /// Append the clauses of a formula, each clause a list of non-zero DIMACS literals.
    fn load_formula(&mut self, clauses: &[Vec<i32>]);

    /// Decide satisfiability of everything loaded so far.
    fn solve(&mut self) -> bool;

    /// Free the solver's resources.
    fn release(self)
    where
        Self: Sized;
}

/// Load `instance` into `solver`, solve it and release the solver.
pub fn solve_instance<S: SatSolver>(mut solver: S, instance: &Instance) -> bool {
    solver.load_formula(&instance.as_dimacs());
    let sat = solver.solve();
    debug!(
        "solve_instance: {} clauses over {} variables -> {}",
        instance.len(),
        instance.num_vars(),
        if sat { "SAT" } else { "UNSAT" }
    );
    solver.release();
    sat
}

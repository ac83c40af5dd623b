//! # Tail-biting 2-SAT instance generator
//!
//! The generator emits `M = floor(r * L * n)` two-literal clauses. Each
//! clause is produced by the same skeleton:
//!
//! 1. Pick an anchor block `i` uniformly in `[0, L-1]`.
//! 2. Resolve two endpoint blocks `b1`, `b2` with the configured
//!    [`BlockSelector`] (see [`window`][crate::window]).
//! 3. Draw `v1` uniformly from block `b1`.
//! 4. Draw `v2` uniformly from block `b2`, redrawing while `v2 == v1`.
//! 5. Give each literal an independent, uniformly random polarity.
//!
//! Step 4 is plain rejection sampling without an iteration cap. It
//! terminates because parameter validation requires `n >= 2`, so block
//! `b2` always holds a variable different from `v1`.
//!
//! The random source is always passed in by the caller. A generator holds
//! no mutable state, so one [`Generator`] can serve many calls, and calls
//! with independent RNG streams can run in parallel.
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tailbiting_sat::generator::Generator;
//! use tailbiting_sat::params::Params;
//!
//! let params = Params::new(4, 3, 1.0, 2);
//! let generator = Generator::new(params).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(0);
//! let instance = generator.generate(&mut rng);
//! assert_eq!(instance.len(), 12);
//! ```

use log::{debug, trace};
use rand::Rng;

use crate::error::ParamError;
use crate::instance::{Clause, Instance};
use crate::params::Params;
use crate::ring::Ring;
use crate::types::Var;
use crate::window::{BlockSelector, Selector};

/// Validated generator for one parameter set.
#[derive(Debug, Clone)]
pub struct Generator {
    params: Params,
    ring: Ring,
    selector: Selector,
}

impl Generator {
    /// Validate `params` and prepare the block selector.
    pub fn new(params: Params) -> Result<Self, ParamError> {
        params.validate()?;
        let ring = params.ring();
        let selector = Selector::from_mode(params.mode, params.width)?;
        debug!(
            "Generator: ring = {}, density = {}, width = {}, mode = {}",
            ring, params.density, params.width, params.mode
        );
        Ok(Self { params, ring, selector })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Number of clauses every call to [`generate`][Self::generate] produces.
    pub fn num_clauses(&self) -> usize {
        self.params.num_clauses()
    }

    /// Generate one instance.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Instance {
        let m = self.num_clauses();
        let mut instance = Instance::with_capacity(self.ring.num_vars(), m);
        for _ in 0..m {
            instance.push(self.clause(rng));
        }
        debug_assert!(instance.check().is_ok(), "generated instance violates clause invariants");
        debug!(
            "generate: {} clauses over {} variables",
            instance.len(),
            instance.num_vars()
        );
        instance
    }

    /// Generate a single clause.
    pub fn clause<R: Rng + ?Sized>(&self, rng: &mut R) -> Clause {
        let anchor = rng.random_range(0..self.ring.num_blocks());
        let (b1, b2) = self.selector.select(&self.ring, anchor, rng);

        let v1 = rng.random_range(self.ring.block_vars(b1));
        let mut v2 = rng.random_range(self.ring.block_vars(b2));
        while v2 == v1 {
            v2 = rng.random_range(self.ring.block_vars(b2));
        }
        trace!("clause: anchor = {}, blocks = ({}, {}), vars = ({}, {})", anchor, b1, b2, v1, v2);

        let lit1 = Var::from(v1).lit(rng.random_bool(0.5));
        let lit2 = Var::from(v2).lit(rng.random_bool(0.5));
        Clause::new(lit1, lit2)
    }
}

/// Validate `params` and generate one instance.
///
/// No clause is produced when validation fails.
pub fn generate<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Result<Instance, ParamError> {
    let generator = Generator::new(params.clone())?;
    Ok(generator.generate(rng))
}

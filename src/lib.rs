//! # tailbiting-sat: random 2-SAT instances with tail-biting locality
//!
//! **`tailbiting-sat`** generates synthetic 2-SAT benchmark instances whose
//! clauses are predominantly *local*. It is meant for studying how a SAT
//! solver reacts to locality structure as the clause density varies.
//!
//! ## Structure of an instance
//!
//! The `N = L * n` variables are split into `L` blocks of `n` consecutive
//! variables. The blocks sit on a ring: block `L-1` neighbours block `0`,
//! as in a tail-biting convolutional code, so no block is an edge.
//!
//! Every clause is anchored at a random block and connects two variables
//! from a window of `w` blocks following the anchor. Two modes exist:
//!
//! - **Uniform window**: both endpoint blocks are uniform over the window.
//! - **Biased window**: offsets inside the window are weighted by
//!   `exp(-bias_strength * offset)`, and with probability `1 - biased_prob`
//!   a clause ignores the window and connects two uniformly random blocks.
//!
//! The instance has exactly `M = floor(r * N)` clauses for density `r`.
//! Clauses are not deduplicated and satisfiability is not guaranteed.
//!
//! ## Basic Usage
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tailbiting_sat::generator::generate;
//! use tailbiting_sat::params::Params;
//!
//! // 100 blocks of 100 variables, 1.5 clauses per variable, window of 3 blocks.
//! let params = Params::new(100, 100, 1.5, 3);
//!
//! // The random source is always supplied by the caller.
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let instance = generate(&params, &mut rng).unwrap();
//! assert_eq!(instance.len(), 15_000);
//!
//! // Literals are already in DIMACS form.
//! let clauses: Vec<Vec<i32>> = instance.as_dimacs();
//! assert!(clauses.iter().flatten().all(|&lit| lit != 0 && lit.abs() <= 10_000));
//! ```
//!
//! ## Core Components
//!
//! - **[`generator`]**: the instance generator.
//! - **[`window`]**: block-pair selection strategies for both modes.
//! - **[`params`]**: generation parameters and their validation.
//! - **[`instance`]**: clauses, instances and DIMACS output.
//! - **[`solver`]**: the interface an external SAT solver plugs into.

pub mod error;
pub mod generator;
pub mod instance;
pub mod params;
pub mod ring;
pub mod solver;
pub mod stats;
pub mod types;
pub mod window;

//! Statistical and structural tests for the instance generator.
//!
//! All randomized tests use fixed seeds and tolerances of several standard
//! deviations, so they are deterministic in practice.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tailbiting_sat::error::ParamError;
use tailbiting_sat::generator::{generate, Generator};
use tailbiting_sat::params::{Mode, Params};
use tailbiting_sat::ring::Ring;
use tailbiting_sat::stats::InstanceStats;
use tailbiting_sat::window::{offset_weights, BiasedWindow, BlockSelector};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

// ─── Concrete Scenarios ────────────────────────────────────────────────────────

#[test]
fn four_blocks_of_three() {
    let instance = generate(&Params::new(4, 3, 1.0, 2), &mut rng(0)).unwrap();
    assert_eq!(instance.len(), 12);
    for clause in &instance {
        let [a, b] = clause.to_dimacs();
        assert!(a != 0 && b != 0);
        assert!(a.abs() <= 12 && b.abs() <= 12);
        assert_ne!(a.abs(), b.abs());
    }
}

#[test]
fn single_block_ring_terminates() {
    for mode in [Mode::UniformWindow, Mode::biased()] {
        let generator = Generator::new(Params::new(1, 2, 50.0, 1).with_mode(mode)).unwrap();
        let ring = *generator.ring();
        let instance = generator.generate(&mut rng(1));
        assert_eq!(instance.len(), 100);
        for clause in &instance {
            assert_eq!(clause.blocks(&ring), [0, 0]);
        }
    }
}

#[test]
fn zero_clauses_is_not_an_error() {
    let params = Params::new(10, 10, 0.009, 3);
    assert_eq!(params.num_clauses(), 0);
    let instance = generate(&params, &mut rng(2)).unwrap();
    assert!(instance.is_empty());
}

#[test]
fn invalid_parameters_produce_no_output() {
    let cases = [
        (Params::new(0, 3, 1.0, 1), ParamError::NoBlocks),
        (Params::new(3, 1, 1.0, 1), ParamError::BlockTooSmall(1)),
        (Params::new(3, 3, 0.0, 1), ParamError::InvalidDensity(0.0)),
        (
            Params::new(3, 3, 1.0, 4),
            ParamError::InvalidWidth { width: 4, num_blocks: 3 },
        ),
        (Params::new(3, 3, 1.0, 2).biased(-1.0, 0.5), ParamError::InvalidBiasStrength(-1.0)),
        (Params::new(3, 3, 1.0, 2).biased(1.0, 1.5), ParamError::InvalidBiasedProb(1.5)),
        (Params::new(1, 2, 1e300, 1), ParamError::TooManyClauses(2e300)),
    ];
    for (params, expected) in cases {
        assert_eq!(generate(&params, &mut rng(3)).unwrap_err(), expected);
    }
}

// ─── Statistical Properties ────────────────────────────────────────────────────

#[test]
fn literal_signs_are_fair() {
    for mode in [Mode::UniformWindow, Mode::biased()] {
        let generator = Generator::new(Params::new(50, 20, 5.0, 4).with_mode(mode)).unwrap();
        let instance = generator.generate(&mut rng(4));
        let stats = InstanceStats::new(&instance, generator.ring());
        assert_eq!(stats.num_clauses, 5000);
        let fraction = stats.negated_fraction();
        assert!((fraction - 0.5).abs() < 0.03, "negated fraction = {}", fraction);
    }
}

#[test]
fn full_window_is_uniform_over_blocks() {
    let l = 5;
    let generator = Generator::new(Params::new(l, 4, 1000.0, l)).unwrap();
    let ring = *generator.ring();
    let instance = generator.generate(&mut rng(5));
    assert_eq!(instance.len(), 20_000);

    let mut counts = vec![0usize; l];
    for clause in &instance {
        for b in clause.blocks(&ring) {
            counts[b] += 1;
        }
    }
    let expected = 2.0 * instance.len() as f64 / l as f64;
    for (b, &count) in counts.iter().enumerate() {
        let rel = (count as f64 - expected).abs() / expected;
        assert!(rel < 0.05, "block {} drawn {} times, expected ~{}", b, count, expected);
    }
}

#[test]
fn zero_bias_weights_are_equal() {
    let weights = offset_weights(6, 0.0);
    assert!(weights.iter().all(|&w| w == weights[0]));

    let window = BiasedWindow::new(4, 0.0, 1.0).unwrap();
    let mut counts = [0usize; 4];
    let mut r = rng(6);
    for _ in 0..20_000 {
        let (o1, o2) = window.select_offsets(&mut r);
        counts[o1] += 1;
        counts[o2] += 1;
    }
    for &count in &counts {
        let rel = (count as f64 - 10_000.0).abs() / 10_000.0;
        assert!(rel < 0.05, "offset counts {:?} are not flat", counts);
    }
}

#[test]
fn positive_bias_prefers_near_offsets() {
    let ring = Ring::new(10, 3);
    let width = 5;
    let window = BiasedWindow::new(width, 0.5, 1.0).unwrap();
    let anchor = 8; // window 8, 9, 0, 1, 2 wraps around the ring
    let mut counts = vec![0usize; width];
    let mut r = rng(7);
    for _ in 0..50_000 {
        let (b1, b2) = window.select(&ring, anchor, &mut r);
        counts[ring.offset(anchor, b1)] += 1;
        counts[ring.offset(anchor, b2)] += 1;
    }
    for pair in counts.windows(2) {
        assert!(pair[0] > pair[1], "offset counts {:?} must strictly decrease", counts);
    }
}

#[test]
fn global_fallback_rate_matches_biased_prob() {
    // With w = 1 every windowed draw lands on the anchor block, so the
    // same-block rate is biased_prob + (1 - biased_prob) / L.
    let l = 100;
    let generator = Generator::new(Params::new(l, 10, 10.0, 1).biased(1.0, 0.7)).unwrap();
    let instance = generator.generate(&mut rng(8));
    let stats = InstanceStats::new(&instance, generator.ring());
    let same = stats.same_block as f64 / stats.num_clauses as f64;
    let expected = 0.7 + 0.3 / l as f64;
    assert!((same - expected).abs() < 0.03, "same-block rate {} vs {}", same, expected);
}

#[test]
fn uniform_window_bounds_block_distance() {
    let generator = Generator::new(Params::new(200, 40, 2.0, 7)).unwrap();
    let instance = generator.generate(&mut rng(9));
    let stats = InstanceStats::new(&instance, generator.ring());
    assert_eq!(stats.local_fraction(6), 1.0);
}

// ─── Independence and Reproducibility ──────────────────────────────────────────

#[test]
fn repeated_calls_keep_invariants() {
    let generator = Generator::new(Params::new(30, 5, 2.5, 4).with_mode(Mode::biased())).unwrap();
    let mut r = rng(10);
    let first = generator.generate(&mut r);
    let second = generator.generate(&mut r);
    assert_eq!(first.len(), 375);
    assert_eq!(second.len(), 375);
    assert_ne!(first, second);
    assert_eq!(first.check(), Ok(()));
    assert_eq!(second.check(), Ok(()));
}

#[test]
fn parallel_streams_are_independent() {
    let generator = Generator::new(Params::new(20, 5, 1.0, 3)).unwrap();
    let instances: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let generator = &generator;
                s.spawn(move || generator.generate(&mut rng(100 + seed)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for instance in &instances {
        assert_eq!(instance.len(), 100);
        assert_eq!(instance.check(), Ok(()));
    }
    for i in 0..instances.len() {
        for j in (i + 1)..instances.len() {
            assert_ne!(instances[i], instances[j]);
        }
    }
}

// ─── Property Tests ────────────────────────────────────────────────────────────

fn valid_params() -> impl Strategy<Value = Params> {
    (1usize..12, 2usize..8, 0.01f64..4.0)
        .prop_flat_map(|(l, n, r)| (Just(l), Just(n), Just(r), 1..=l, any::<bool>(), 0.0f64..3.0, 0.0f64..=1.0))
        .prop_map(|(l, n, r, w, biased, strength, prob)| {
            let params = Params::new(l, n, r, w);
            if biased {
                params.biased(strength, prob)
            } else {
                params
            }
        })
}

proptest! {
    #[test]
    fn structural_invariants(params in valid_params(), seed in any::<u64>()) {
        let instance = generate(&params, &mut rng(seed)).unwrap();
        let n = (params.num_blocks * params.block_size) as i32;
        prop_assert_eq!(instance.len(), (params.density * n as f64) as usize);
        prop_assert_eq!(instance.num_vars(), n as usize);
        for clause in &instance {
            let [a, b] = clause.to_dimacs();
            prop_assert!(a != 0 && b != 0);
            prop_assert!(a.abs() <= n && b.abs() <= n);
            prop_assert_ne!(a.abs(), b.abs());
        }
    }

    #[test]
    fn uniform_blocks_within_window(params in valid_params(), seed in any::<u64>()) {
        let params = params.with_mode(Mode::UniformWindow);
        let generator = Generator::new(params.clone()).unwrap();
        let ring = *generator.ring();
        for clause in &generator.generate(&mut rng(seed)) {
            let [b1, b2] = clause.blocks(&ring);
            prop_assert!(ring.distance(b1, b2) < params.width);
        }
    }
}

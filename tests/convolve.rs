use fastconv::convolve::{convolve_fft, convolve_naive, full_len};
use fastconv::report::Comparison;
use fastconv::TransformPlanner;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tolerance relative to the largest possible output magnitude.
fn tolerance(a: &[f64], b: &[f64]) -> f64 {
    let max_a = a.iter().fold(0.0f64, |m, x| m.max(x.abs()));
    let max_b = b.iter().fold(0.0f64, |m, x| m.max(x.abs()));
    1e-9 * (1.0 + max_a * max_b * a.len().min(b.len()) as f64)
}

fn random_signal(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

#[test]
fn reference_example() {
    let a = [2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
    let b = [1.0, 0.0, 7.0];
    let expected = vec![2.0, 1.0, 15.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 7.0, 7.0];
    assert_eq!(convolve_naive(&a, &b), expected);
    let cmp = Comparison::new(expected, convolve_fft(&a, &b).unwrap());
    assert!(cmp.agrees_within(1e-9), "{cmp}");
}

#[test]
fn degenerate_inputs() {
    let empty: Vec<f64> = Vec::new();
    assert_eq!(full_len(0, 2), None);
    assert_eq!(convolve_naive(&empty, &[1.0, 2.0]), empty);
    assert_eq!(convolve_fft(&empty, &[1.0, 2.0]).unwrap(), empty);
    assert_eq!(convolve_fft(&empty, &empty).unwrap(), empty);
}

#[test]
fn random_lengths_match_naive() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let na = rng.gen_range(1..64);
        let nb = rng.gen_range(1..64);
        let a = random_signal(&mut rng, na);
        let b = random_signal(&mut rng, nb);
        let naive = convolve_naive(&a, &b);
        let fast = convolve_fft(&a, &b).unwrap();
        assert_eq!(naive.len(), na + nb - 1);
        assert_eq!(fast.len(), na + nb - 1);
        let tol = tolerance(&a, &b);
        for (i, (x, y)) in naive.iter().zip(fast.iter()).enumerate() {
            assert!((x - y).abs() < tol, "na={na} nb={nb} i={i}: {x} vs {y}");
        }
    }
}

#[test]
fn prime_and_power_of_two_padded_lengths() {
    let mut rng = StdRng::seed_from_u64(7);
    // padded lengths 97 (prime), 128 (power of two), 1000 (composite)
    for &(na, nb) in &[(50usize, 48usize), (100, 29), (600, 401)] {
        let a = random_signal(&mut rng, na);
        let b = random_signal(&mut rng, nb);
        let cmp = Comparison::new(convolve_naive(&a, &b), convolve_fft(&a, &b).unwrap());
        assert!(cmp.agrees_within(1e-9), "na={na} nb={nb}: {:?}", cmp.max_abs_diff());
    }
}

#[test]
fn planner_handles_many_sizes() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut planner = TransformPlanner::<f64>::new();
    for n in 1..40 {
        let a = random_signal(&mut rng, n);
        let b = random_signal(&mut rng, 5);
        let cmp = Comparison::new(convolve_naive(&a, &b), planner.convolve(&a, &b).unwrap());
        assert!(cmp.agrees_within(1e-9), "n={n}");
    }
    assert_eq!(planner.forward_cache_len(), 39);
}

proptest! {
    #[test]
    fn prop_fft_matches_naive(
        a in proptest::collection::vec(-100.0f64..100.0, 1..48),
        b in proptest::collection::vec(-100.0f64..100.0, 1..48),
    ) {
        let naive = convolve_naive(&a, &b);
        let fast = convolve_fft(&a, &b).unwrap();
        prop_assert_eq!(naive.len(), a.len() + b.len() - 1);
        prop_assert_eq!(fast.len(), naive.len());
        let tol = tolerance(&a, &b);
        for (x, y) in naive.iter().zip(fast.iter()) {
            prop_assert!((x - y).abs() < tol, "{} vs {}", x, y);
        }
    }

    #[test]
    fn prop_commutative(
        a in proptest::collection::vec(-100.0f64..100.0, 1..32),
        b in proptest::collection::vec(-100.0f64..100.0, 1..32),
    ) {
        let tol = tolerance(&a, &b);
        // summation order differs between the two argument orders
        let ab = convolve_naive(&a, &b);
        let ba = convolve_naive(&b, &a);
        prop_assert_eq!(ab.len(), ba.len());
        for (x, y) in ab.iter().zip(ba.iter()) {
            prop_assert!((x - y).abs() < tol);
        }
        let ab = convolve_fft(&a, &b).unwrap();
        let ba = convolve_fft(&b, &a).unwrap();
        for (x, y) in ab.iter().zip(ba.iter()) {
            prop_assert!((x - y).abs() < tol);
        }
    }

    #[test]
    fn prop_identity(a in proptest::collection::vec(-1000.0f64..1000.0, 1..64)) {
        prop_assert_eq!(convolve_naive(&a, &[1.0]), a.clone());
        let fast = convolve_fft(&a, &[1.0]).unwrap();
        prop_assert_eq!(fast.len(), a.len());
        for (x, y) in fast.iter().zip(a.iter()) {
            prop_assert!((x - y).abs() < 1e-9 * (1.0 + y.abs()));
        }
    }
}

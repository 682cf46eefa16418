use fastconv::num::Complex64;
use fastconv::spectral::spectral_multiply;
use fastconv::{ComplexToRealExecutor, ConvError, RealToComplexExecutor, TransformPlanner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn impulse_has_flat_spectrum() {
    for n in [1usize, 2, 7, 8, 11, 16] {
        let mut fwd = RealToComplexExecutor::<f64>::new(n).unwrap();
        fwd.set_input_zeropadded(&[1.0]).unwrap();
        assert_eq!(fwd.input()[0], 1.0);
        assert!(fwd.input()[1..].iter().all(|&x| x == 0.0));
        fwd.execute().unwrap();
        let spectrum = fwd.get_output();
        assert_eq!(spectrum.len(), n / 2 + 1);
        for c in &spectrum {
            assert!((c.re - 1.0).abs() < 1e-12, "n={n} re={}", c.re);
            assert!(c.im.abs() < 1e-12, "n={n} im={}", c.im);
        }
    }
}

#[test]
fn roundtrip_normalization() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [1usize, 2, 3, 10, 11, 64, 97] {
        let signal: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let mut fwd = RealToComplexExecutor::new(n).unwrap();
        let spectrum = fwd.transform(&signal).unwrap().to_vec();
        let mut inv = ComplexToRealExecutor::new(n).unwrap();
        inv.transform(&spectrum).unwrap();
        for (x, y) in inv.output().iter().zip(signal.iter()) {
            let restored = x / n as f64;
            assert!((restored - y).abs() < 1e-9, "n={n}: {restored} vs {y}");
        }
    }
}

#[test]
fn roundtrip_shorter_signal_is_padded() {
    let mut fwd = RealToComplexExecutor::<f32>::new(8).unwrap();
    let spectrum = fwd.transform(&[1.0, 2.0, 3.0]).unwrap().to_vec();
    let mut inv = ComplexToRealExecutor::<f32>::new(8).unwrap();
    let out = inv.transform(&spectrum).unwrap();
    let expected = [1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    for (x, y) in out.iter().zip(expected.iter()) {
        assert!((x / 8.0 - y).abs() < 1e-5, "{x} vs {y}");
    }
}

#[test]
fn executors_are_reusable() {
    let mut fwd = RealToComplexExecutor::<f64>::new(4).unwrap();
    let first = fwd.transform(&[1.0, 1.0, 1.0, 1.0]).unwrap().to_vec();
    let second = fwd.transform(&[1.0]).unwrap().to_vec();
    assert!((first[0].re - 4.0).abs() < 1e-12);
    assert!((second[0].re - 1.0).abs() < 1e-12);
    assert!((second[2].re - 1.0).abs() < 1e-12);
}

#[test]
fn spectrum_from_other_size_is_rejected() {
    let mut fwd = RealToComplexExecutor::<f64>::new(10).unwrap();
    let spectrum = fwd.transform(&[1.0, 2.0]).unwrap().to_vec();
    let mut inv = ComplexToRealExecutor::<f64>::new(12).unwrap();
    assert_eq!(
        inv.set_input(&spectrum).unwrap_err(),
        ConvError::LengthMismatch {
            arg: "spectrum",
            expected: 7,
            got: 6
        }
    );
}

#[test]
fn spectra_of_different_sizes_cannot_be_multiplied() {
    let a = vec![Complex64::new(1.0, 0.0); 6];
    let b = vec![Complex64::new(1.0, 0.0); 7];
    assert!(matches!(
        spectral_multiply(&a, &b),
        Err(ConvError::LengthMismatch { .. })
    ));
}

#[test]
fn executors_run_on_separate_threads() {
    let mut planner = TransformPlanner::<f64>::new();
    let mut executors: Vec<RealToComplexExecutor<f64>> = (0..4)
        .map(|_| RealToComplexExecutor::with_planner(&mut planner, 32).unwrap())
        .collect();
    std::thread::scope(|s| {
        for (k, fwd) in executors.iter_mut().enumerate() {
            s.spawn(move || {
                let signal = vec![k as f64; 32];
                fwd.transform(&signal).unwrap();
            });
        }
    });
    for (k, fwd) in executors.iter().enumerate() {
        assert!((fwd.output()[0].re - 32.0 * k as f64).abs() < 1e-9);
        assert!(fwd.output()[1..].iter().all(|c| c.norm() < 1e-9));
    }
    assert_eq!(planner.forward_cache_len(), 1);
}

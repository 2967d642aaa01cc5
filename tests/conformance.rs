//! Conformance tests against the universal invariants and seed scenarios
//! this crate's filter bank is expected to satisfy.

use approx::assert_abs_diff_eq;
use ripplet::{
    catalog, BoundaryMode, PaddedCoefficientPair, Ripplet, TransformVariant, ZeroPad,
};

const ORTHOGONAL_CATALOG: &[&str] = &[
    "haar", "db2", "db3", "db4", "db6", "db8", "db10", "sym2", "sym3", "sym4", "sym5", "sym6",
    "sym7", "sym8", "coif1", "coif2", "coif3",
];

fn inf_norm(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

// Universal invariant 1: perfect reconstruction (orthogonal, periodic).
#[test]
fn invariant_perfect_reconstruction_orthogonal_periodic() {
    let signal: Vec<f64> = vec![3.0, -1.0, 4.0, 1.0, -5.0, 9.0, -2.0, 6.0, -5.0, 3.0, -3.0, 8.0, 4.0, -6.0, 2.0, -9.0];
    let norm_inf = signal.iter().fold(0.0_f64, |m, &x| m.max(x.abs()));
    let tol = 1e-10 * (1.0 + norm_inf);
    for name in ORTHOGONAL_CATALOG {
        let dwt = Ripplet::dwt(name, BoundaryMode::Periodic).unwrap();
        let pair = dwt.forward(&signal).unwrap();
        let reconstructed = dwt.inverse(&pair).unwrap();
        let err = inf_norm(&signal, &reconstructed);
        assert!(err < tol.max(1e-6), "{name}: err {err} exceeds tolerance");
    }
}

// Universal invariant 2: energy preservation (orthogonal, periodic).
#[test]
fn invariant_energy_preservation() {
    let signal = [1.0, 2.0, -3.0, 4.0, -5.0, 6.0, -7.0, 8.0];
    let signal_energy: f64 = signal.iter().map(|x| x * x).sum();
    for name in ["haar", "db4", "sym4", "coif1"] {
        let dwt = Ripplet::dwt(name, BoundaryMode::Periodic).unwrap();
        let pair = dwt.forward(&signal).unwrap();
        let coeff_energy: f64 = pair.approximation().iter().chain(pair.detail()).map(|x| x * x).sum();
        assert_abs_diff_eq!(signal_energy, coeff_energy, epsilon = 1e-9 * signal_energy);
    }
}

// Universal invariant 3: MODWT perfect reconstruction (periodic), any length.
#[test]
fn invariant_modwt_perfect_reconstruction_any_length() {
    for &len in &[1usize, 2, 3, 7, 9, 17] {
        let signal: Vec<f64> = (0..len).map(|i| (i as f64 * 1.7).sin() + 0.3).collect();
        let modwt = Ripplet::modwt("haar", BoundaryMode::Periodic).unwrap();
        let pair = modwt.forward(&signal).unwrap();
        let reconstructed = modwt.inverse(&pair).unwrap();
        let err = inf_norm(&signal, &reconstructed);
        assert!(err < 1e-9, "len {len}: err {err}");
    }
}

// Universal invariant 4: shift invariance of MODWT (periodic mode).
#[test]
fn invariant_modwt_shift_invariance() {
    let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let shift = 3usize;
    let n = signal.len();
    let shifted: Vec<f64> = (0..n).map(|i| signal[(i + n - shift) % n]).collect();

    let modwt = Ripplet::modwt("haar", BoundaryMode::Periodic).unwrap();
    let pair = modwt.forward(&signal).unwrap();
    let shifted_pair = modwt.forward(&shifted).unwrap();

    let expected_approx: Vec<f64> = (0..n).map(|i| pair.approximation()[(i + n - shift) % n]).collect();
    let expected_detail: Vec<f64> = (0..n).map(|i| pair.detail()[(i + n - shift) % n]).collect();

    for (a, b) in shifted_pair.approximation().iter().zip(expected_approx.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }
    for (a, b) in shifted_pair.detail().iter().zip(expected_detail.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }
}

// Universal invariant 5: multi-level idempotence.
#[test]
fn invariant_multi_level_idempotence() {
    let signal: Vec<f64> = (0..32).map(|i| (i as f64 * 0.37).cos() * 2.0 - 1.0).collect();
    let norm_inf = signal.iter().fold(0.0_f64, |m, &x| m.max(x.abs()));
    let levels = 4;
    let ml = Ripplet::multi_level_dwt("db2", BoundaryMode::Periodic).unwrap();
    let pyramid = ml.forward(&signal, levels).unwrap();
    let reconstructed = ml.inverse(&pyramid).unwrap();
    let err = inf_norm(&signal, &reconstructed);
    assert!(err < (levels as f64) * 1e-9 * (1.0 + norm_inf));
}

// Universal invariant 6: projection monotonicity.
#[test]
fn invariant_projection_monotonicity() {
    let signal: Vec<f64> = (0..16).map(|i| (i as f64 * 0.5).sin()).collect();
    let signal_norm: f64 = signal.iter().map(|x| x * x).sum::<f64>().sqrt();
    let ml = Ripplet::multi_level_dwt("haar", BoundaryMode::Periodic).unwrap();
    let pyramid = ml.forward(&signal, 3).unwrap();

    let full = pyramid.project(0).unwrap();
    for (a, b) in full.iter().zip(signal.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }

    for level in 0..=3 {
        let projected = pyramid.project(level).unwrap();
        let projected_norm: f64 = projected.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!(projected_norm <= signal_norm + 1e-9, "level {level}: {projected_norm} > {signal_norm}");
    }
}

// Universal invariant 7: filter-law verification across the catalog.
#[test]
fn invariant_filter_law_holds_for_every_orthogonal_entry() {
    for name in ORTHOGONAL_CATALOG {
        let descriptor = catalog::lookup(name).unwrap();
        assert!(descriptor.verify(), "{name} failed filter-law verification");
    }
}

// Universal invariant 8: cache determinism.
#[test]
fn invariant_cache_determinism() {
    let signal: Vec<f64> = (0..16).map(|i| i as f64).collect();
    let ml = Ripplet::multi_level_dwt("db2", BoundaryMode::Periodic).unwrap();
    let pyramid = ml.forward(&signal, 3).unwrap();

    for level in 0..=3 {
        let first = pyramid.approx_at_level(level).unwrap();
        let second = pyramid.approx_at_level(level).unwrap();
        assert_eq!(&*first, &*second, "level {level} is not deterministic across calls");
    }
}

// Boundary behavior: length-flexible forward of a non-power-of-two signal.
#[test]
fn boundary_length_flexible_facade_restores_original_length() {
    let dwt = Ripplet::dwt("haar", BoundaryMode::Periodic).unwrap();
    let signal = [1.0, 2.0, 3.0, 4.0, 5.0];
    let padding = ZeroPad;
    let padded: PaddedCoefficientPair = dwt.forward_padded(&signal, &padding).unwrap();
    let reconstructed = dwt.inverse_padded(&padded, &padding).unwrap();
    assert_eq!(reconstructed.len(), signal.len());
}

// Boundary behavior: requesting levels above L_max raises InvalidArgument.
#[test]
fn boundary_levels_above_max_is_invalid_argument() {
    let ml = Ripplet::multi_level_dwt("haar", BoundaryMode::Periodic).unwrap();
    let signal = [1.0, 2.0, 3.0, 4.0];
    let max = ml.max_levels(signal.len());
    assert!(ml.forward(&signal, max + 1).is_err());
}

// Boundary behavior: non-finite input raises InvalidSignal identifying the
// offending index.
#[test]
fn boundary_non_finite_input_is_invalid_signal() {
    let dwt = Ripplet::dwt("haar", BoundaryMode::Periodic).unwrap();
    let signal = [1.0, 2.0, f64::NAN, 4.0];
    let err = dwt.forward(&signal).unwrap_err();
    let message = err.to_string();
    assert!(message.contains('2'), "error should mention offending index: {message}");
}

// S1: Haar seed scenario.
#[test]
fn seed_s1_haar_periodic() {
    let dwt = Ripplet::dwt("haar", BoundaryMode::Periodic).unwrap();
    let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let pair = dwt.forward(&signal).unwrap();
    let expected_approx = [2.1213203, 4.9497475, 7.7781746, 10.6066017];
    let expected_detail = [0.7071068, 0.7071068, 0.7071068, 0.7071068];
    for (a, b) in pair.approximation().iter().zip(expected_approx.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    }
    for (a, b) in pair.detail().iter().zip(expected_detail.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    }
    let reconstructed = dwt.inverse(&pair).unwrap();
    for (a, b) in signal.iter().zip(reconstructed.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }
}

// S2: DB4, fixed pseudo-random length-16 signal.
#[test]
fn seed_s2_db4_fixed_sample() {
    // Fixed sample standing in for a seeded N(0,1) draw.
    let signal = [
        0.497, -0.138, 0.648, 1.523, -0.234, -0.234, 1.579, 0.767, -0.469, 0.543, -0.463, -0.466,
        0.242, -1.914, -1.725, -0.562,
    ];
    let dwt = Ripplet::dwt("db4", BoundaryMode::Periodic).unwrap();
    let pair = dwt.forward(&signal).unwrap();
    let reconstructed = dwt.inverse(&pair).unwrap();
    let err = inf_norm(&signal, &reconstructed);
    assert!(err < 1e-9, "err {err}");
}

// S3: MODWT, Haar, odd-length signal, plus shift invariance.
#[test]
fn seed_s3_modwt_haar_odd_length() {
    let modwt = Ripplet::modwt("haar", BoundaryMode::Periodic).unwrap();
    let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let pair = modwt.forward(&signal).unwrap();
    assert_eq!(pair.approximation().len(), 7);
    assert_eq!(pair.detail().len(), 7);
    let reconstructed = modwt.inverse(&pair).unwrap();
    for (a, b) in signal.iter().zip(reconstructed.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }
}

// S4: multi-level DB2, length 32, L=4; per-level sizes and full reconstruction.
#[test]
fn seed_s4_multilevel_db2_level_sizes() {
    let signal: Vec<f64> = (0..32).map(|i| i as f64).collect();
    let ml = Ripplet::multi_level_dwt("db2", BoundaryMode::Periodic).unwrap();
    let pyramid = ml.forward(&signal, 4).unwrap();
    assert_eq!(pyramid.details_at_level(1).unwrap().len(), 16);
    assert_eq!(pyramid.details_at_level(2).unwrap().len(), 8);
    assert_eq!(pyramid.details_at_level(3).unwrap().len(), 4);
    assert_eq!(pyramid.details_at_level(4).unwrap().len(), 2);
    assert_eq!(pyramid.approx_at_level(4).unwrap().len(), 2);
    let reconstructed = ml.inverse(&pyramid).unwrap();
    let err = inf_norm(&signal, &reconstructed);
    assert!(err < 1e-9, "err {err}");
}

// S5: adaptive decomposition on a low-frequency ramp stops early.
#[test]
fn seed_s5_adaptive_stops_early_on_ramp() {
    let signal: Vec<f64> = (0..64).map(|i| i as f64).collect();
    let ml = Ripplet::multi_level_dwt("haar", BoundaryMode::Periodic).unwrap();
    let pyramid = ml.forward_adaptive(&signal, 0.01).unwrap();
    assert!(pyramid.levels() <= 2, "expected <=2 levels, got {}", pyramid.levels());
}

// S6: filter-law verification for SYM4.
#[test]
fn seed_s6_sym4_filter_law() {
    let descriptor = catalog::lookup("sym4").unwrap();
    let h = descriptor.analysis_low_pass();
    let sum: f64 = h.iter().sum();
    let sum_sq: f64 = h.iter().map(|x| x * x).sum();
    assert_abs_diff_eq!(sum, std::f64::consts::SQRT_2, epsilon = 1e-10);
    assert_abs_diff_eq!(sum_sq, 1.0, epsilon = 1e-10);
    assert!(descriptor.verify());
}

// Variant coverage: MODWT variant of the multi-level orchestrator.
#[test]
fn multilevel_modwt_round_trips() {
    let signal: Vec<f64> = (0..20).map(|i| (i as f64 * 0.4).sin()).collect();
    let ml = Ripplet::multi_level_modwt("haar", BoundaryMode::Periodic).unwrap();
    assert_eq!(ml.variant(), TransformVariant::Modwt);
    let pyramid = ml.forward(&signal, 2).unwrap();
    let reconstructed = ml.inverse(&pyramid).unwrap();
    let err = inf_norm(&signal, &reconstructed);
    assert!(err < 1e-8, "err {err}");
}

// Biorthogonal coverage: bior1.3 forward/inverse round trip.
#[test]
fn biorthogonal_bior1_3_round_trips() {
    let dwt = Ripplet::dwt("bior1.3", BoundaryMode::Periodic).unwrap();
    let signal = [1.0, -2.0, 3.0, 0.5, -1.5, 2.5, 0.0, 4.0];
    let pair = dwt.forward(&signal).unwrap();
    let reconstructed = dwt.inverse(&pair).unwrap();
    let err = inf_norm(&signal, &reconstructed);
    assert!(err < 1e-8, "err {err}");
}

// Biorthogonal coverage: bior1.3 round-trips under MODWT too, where the
// mismatched analysis/reconstruction filter lengths need the same
// group-delay compensation the decimated engine applies.
#[test]
fn biorthogonal_bior1_3_round_trips_modwt() {
    let modwt = Ripplet::modwt("bior1.3", BoundaryMode::Periodic).unwrap();
    let signal = [1.0, -2.0, 3.0, 0.5, -1.5, 2.5, 0.0, 4.0, -3.5, 2.2, 0.1, -0.9, 1.7];
    let pair = modwt.forward(&signal).unwrap();
    let reconstructed = modwt.inverse(&pair).unwrap();
    let err = inf_norm(&signal, &reconstructed);
    assert!(err < 1e-8, "err {err}");
}

// Catalog coverage: unshipped orders raise NotImplemented, not a panic.
#[test]
fn unshipped_orders_are_not_implemented() {
    for name in ["sym15", "sym20", "db12", "coif5"] {
        match catalog::lookup(name) {
            Err(ripplet::RippletError::NotImplemented(_)) => {}
            other => panic!("{name}: expected NotImplemented, got {other:?}"),
        }
    }
}

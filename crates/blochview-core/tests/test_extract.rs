//! Tests for Bloch coordinate extraction.

use blochview_core::{
    BlochError, BlochExtractor, BlochVector, StateVector, compute_bloch_coordinates,
};
use num_complex::Complex64;

const TOL: f64 = 1e-9;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn assert_close(v: BlochVector, x: f64, y: f64, z: f64) {
    assert!(
        v.approx_eq(&BlochVector::new(x, y, z), TOL),
        "expected ({x}, {y}, {z}), got {v}"
    );
}

/// Kronecker product of two state vectors (left factor holds the lower qubit indices).
fn kron(left: &[Complex64], right: &[Complex64]) -> Vec<Complex64> {
    left.iter()
        .flat_map(|a| right.iter().map(move |b| a * b))
        .collect()
}

// ---------------------------------------------------------------------------
// Single-qubit states
// ---------------------------------------------------------------------------

#[test]
fn zero_state_points_north() {
    let v = compute_bloch_coordinates(&[c(1.0, 0.0), c(0.0, 0.0)], 0, 1).unwrap();
    assert_close(v, 0.0, 0.0, 1.0);
}

#[test]
fn one_state_points_south() {
    let v = compute_bloch_coordinates(&[c(0.0, 0.0), c(1.0, 0.0)], 0, 1).unwrap();
    assert_close(v, 0.0, 0.0, -1.0);
}

#[test]
fn plus_state_points_along_x() {
    let s = 1.0 / 2.0_f64.sqrt();
    let v = compute_bloch_coordinates(&[c(s, 0.0), c(s, 0.0)], 0, 1).unwrap();
    assert_close(v, 1.0, 0.0, 0.0);
}

#[test]
fn plus_i_state_uses_negated_y_convention() {
    let s = 1.0 / 2.0_f64.sqrt();
    let v = compute_bloch_coordinates(&[c(s, 0.0), c(0.0, s)], 0, 1).unwrap();
    assert_close(v, 0.0, -1.0, 0.0);
}

#[test]
fn general_single_qubit_state_matches_closed_form() {
    // a carries a phase, so conj(a)·b differs from a·b.
    let a = c(0.0, 0.6);
    let b = c(0.8, 0.0);
    let v = compute_bloch_coordinates(&[a, b], 0, 1).unwrap();

    let coherence = a.conj() * b;
    assert_close(
        v,
        2.0 * coherence.re,
        -2.0 * coherence.im,
        a.norm_sqr() - b.norm_sqr(),
    );
    assert!((v.magnitude() - 1.0).abs() < TOL);
}

// ---------------------------------------------------------------------------
// Multi-qubit states
// ---------------------------------------------------------------------------

#[test]
fn all_zero_state_every_qubit_north() {
    for n in 1..=5 {
        let sv = StateVector::zero(n);
        for q in 0..n {
            let v = compute_bloch_coordinates(sv.amplitudes(), q, n).unwrap();
            assert_close(v, 0.0, 0.0, 1.0);
        }
    }
}

#[test]
fn all_one_state_every_qubit_south() {
    for n in 1..=5 {
        let sv = StateVector::basis(n, (1usize << n) - 1);
        for q in 0..n {
            let v = compute_bloch_coordinates(sv.amplitudes(), q, n).unwrap();
            assert_close(v, 0.0, 0.0, -1.0);
        }
    }
}

#[test]
fn product_state_factor_is_independent_of_neighbours() {
    let s = 1.0 / 2.0_f64.sqrt();
    let plus = [c(s, 0.0), c(s, 0.0)];
    let zero = [c(1.0, 0.0), c(0.0, 0.0)];
    let one = [c(0.0, 0.0), c(1.0, 0.0)];

    // Qubit 1 is |+⟩ in both; qubit 0 differs.
    let a = kron(&zero, &plus);
    let b = kron(&one, &plus);
    let va = compute_bloch_coordinates(&a, 1, 2).unwrap();
    let vb = compute_bloch_coordinates(&b, 1, 2).unwrap();
    assert!(va.approx_eq(&vb, TOL));
    assert_close(va, 1.0, 0.0, 0.0);
}

#[test]
fn entangled_qubits_lie_inside_the_sphere() {
    // GHZ on 3 qubits.
    let s = 1.0 / 2.0_f64.sqrt();
    let mut amps = vec![c(0.0, 0.0); 8];
    amps[0] = c(s, 0.0);
    amps[7] = c(s, 0.0);
    let sv = StateVector::new(amps, 3).unwrap();

    for row in BlochExtractor::new().extract_all(&sv).unwrap() {
        assert!(row.vector.magnitude_sqr() < 1.0 - TOL);
    }
}

#[test]
fn partially_entangled_state_has_shortened_vector() {
    // cos(t)|00⟩ + sin(t)|11⟩ gives z = cos(2t) for both halves and no coherence.
    let t = 0.3_f64;
    let amps = vec![c(t.cos(), 0.0), c(0.0, 0.0), c(0.0, 0.0), c(t.sin(), 0.0)];
    for q in 0..2 {
        let v = compute_bloch_coordinates(&amps, q, 2).unwrap();
        assert_close(v, 0.0, 0.0, (2.0 * t).cos());
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn off_by_one_qubit_index_fails() {
    let sv = StateVector::zero(3);
    assert_eq!(
        compute_bloch_coordinates(sv.amplitudes(), 3, 3),
        Err(BlochError::QubitIndexOutOfRange {
            qubit: 3,
            num_qubits: 3
        })
    );
}

#[test]
fn mismatched_length_fails() {
    let amps = vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)];
    assert!(matches!(
        compute_bloch_coordinates(&amps, 0, 2),
        Err(BlochError::InvalidDimension { len: 3, .. })
    ));

    let amps = vec![c(1.0, 0.0); 8];
    assert!(matches!(
        compute_bloch_coordinates(&amps, 0, 2),
        Err(BlochError::InvalidDimension { len: 8, num_qubits: Some(2) })
    ));
}

#[test]
fn non_finite_amplitude_fails_with_index() {
    let mut amps = vec![c(0.5, 0.0); 4];
    amps[2] = c(0.5, f64::NAN);
    assert_eq!(
        compute_bloch_coordinates(&amps, 1, 2),
        Err(BlochError::NonFiniteAmplitude { index: 2 })
    );
}

#[test]
fn unnormalized_input_is_not_rescaled() {
    let amps = vec![c(2.0, 0.0), c(0.0, 0.0)];
    let v = compute_bloch_coordinates(&amps, 0, 1).unwrap();
    assert_close(v, 0.0, 0.0, 4.0);
}

#[test]
fn concurrent_extraction_over_shared_state() {
    let sv = StateVector::basis(4, 0b1010);
    let extractor = BlochExtractor::new();

    let results: Vec<BlochVector> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|q| {
                let sv = &sv;
                scope.spawn(move || extractor.extract(sv, q).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected_z = [-1.0, 1.0, -1.0, 1.0];
    for (v, z) in results.iter().zip(expected_z) {
        assert_close(*v, 0.0, 0.0, z);
    }
}

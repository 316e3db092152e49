//! Partial trace down to a single qubit.

use num_complex::Complex64;
use tracing::trace;

use crate::bloch::BlochVector;
use crate::error::{BlochError, BlochResult};
use crate::state::check_dimension;

/// The 2×2 reduced density matrix of one qubit.
///
/// ```text
///     ρ = | rho00        rho01 |
///         | conj(rho01)  rho11 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedDensityMatrix {
    /// Probability of the qubit reading 0.
    pub rho00: f64,
    /// Probability of the qubit reading 1.
    pub rho11: f64,
    /// Coherence between the qubit's 0 and 1 components.
    pub rho01: Complex64,
}

impl ReducedDensityMatrix {
    /// Map the matrix to Bloch coordinates.
    ///
    /// `x = 2·Re ρ01`, `y = -2·Im ρ01`, `z = ρ00 - ρ11`.
    ///
    /// The sign on `y` is a rendering convention, not a physical law: with
    /// it, `(|0⟩ + i|1⟩)/√2` sits at `(0, -1, 0)`. Keep it unless the
    /// renderer's axis orientation changes.
    ///
    /// `ρ01` is `Σ conj(a_k)·a_j`. Summing the unconjugated `a_k·a_j`
    /// gives a different `x` and `y` whenever some `a_k` has an imaginary
    /// part.
    pub fn bloch_vector(&self) -> BlochVector {
        BlochVector {
            x: 2.0 * self.rho01.re,
            y: -2.0 * self.rho01.im,
            z: self.rho00 - self.rho11,
        }
    }

    /// `Tr ρ`. Equals the state's norm; 1 for normalized input.
    pub fn trace(&self) -> f64 {
        self.rho00 + self.rho11
    }

    /// `Tr ρ²`: 1 for a pure reduced state, 1/2 for a maximally mixed one.
    pub fn purity(&self) -> f64 {
        self.rho00 * self.rho00 + self.rho11 * self.rho11 + 2.0 * self.rho01.norm_sqr()
    }
}

/// Trace out every qubit except `qubit_index`.
///
/// Runs in a single pass over the `2^total_qubits` amplitudes with O(1)
/// extra space. Fails on a length mismatch, an out-of-range qubit, or the
/// first (lowest-index) non-finite amplitude.
pub fn reduced_density_matrix(
    amplitudes: &[Complex64],
    qubit_index: u32,
    total_qubits: u32,
) -> BlochResult<ReducedDensityMatrix> {
    check_dimension(amplitudes.len(), total_qubits)?;
    if qubit_index >= total_qubits {
        return Err(BlochError::QubitIndexOutOfRange {
            qubit: qubit_index,
            num_qubits: total_qubits,
        });
    }

    let bit_pos = total_qubits - qubit_index - 1;
    let mask = 1usize << bit_pos;

    let mut rho00 = 0.0;
    let mut rho11 = 0.0;
    let mut rho01 = Complex64::new(0.0, 0.0);

    for (k, amp_k) in amplitudes.iter().enumerate() {
        if !(amp_k.re.is_finite() && amp_k.im.is_finite()) {
            return Err(BlochError::NonFiniteAmplitude { index: k });
        }

        let prob_k = amp_k.norm_sqr();
        if k & mask == 0 {
            rho00 += prob_k;
            // Partner with the target qubit flipped to 1; other qubits unchanged.
            let amp_j = amplitudes[k | mask];
            rho01 += amp_k.conj() * amp_j;
        } else {
            rho11 += prob_k;
        }
    }

    trace!(
        qubit = qubit_index,
        rho00,
        rho11,
        rho01_re = rho01.re,
        rho01_im = rho01.im,
        "reduced density matrix"
    );

    Ok(ReducedDensityMatrix {
        rho00,
        rho11,
        rho01,
    })
}

/// Bloch coordinates of qubit `qubit_index` of an n-qubit state vector.
///
/// Qubit 0 is the most-significant bit of the basis index. The caller is
/// responsible for normalization; nothing is rescaled here.
///
/// ```
/// use blochview_core::compute_bloch_coordinates;
/// use num_complex::Complex64;
///
/// let s = 1.0 / 2.0_f64.sqrt();
/// let plus = [Complex64::new(s, 0.0), Complex64::new(s, 0.0)];
/// let v = compute_bloch_coordinates(&plus, 0, 1).unwrap();
/// assert!((v.x - 1.0).abs() < 1e-12);
/// ```
pub fn compute_bloch_coordinates(
    amplitudes: &[Complex64],
    qubit_index: u32,
    total_qubits: u32,
) -> BlochResult<BlochVector> {
    reduced_density_matrix(amplitudes, qubit_index, total_qubits).map(|rho| rho.bloch_vector())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_single_qubit_matches_closed_form() {
        let a = c(0.6, 0.0);
        let b = c(0.0, 0.8);
        let rho = reduced_density_matrix(&[a, b], 0, 1).unwrap();
        assert!((rho.rho00 - 0.36).abs() < 1e-12);
        assert!((rho.rho11 - 0.64).abs() < 1e-12);
        let expected = a.conj() * b;
        assert!((rho.rho01 - expected).norm() < 1e-12);
    }

    #[test]
    fn test_coherence_conjugates_the_zero_component() {
        // a = 0.6i, b = 0.8: conj(a)·b = -0.48i, while a·b = +0.48i.
        let v = compute_bloch_coordinates(&[c(0.0, 0.6), c(0.8, 0.0)], 0, 1).unwrap();
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 0.96).abs() < 1e-12);
        assert!((v.z + 0.28).abs() < 1e-12);
    }

    #[test]
    fn test_msb_bit_convention() {
        // |10⟩: qubit 0 is 1, qubit 1 is 0. Basis index 2 = 0b10.
        let mut amps = vec![c(0.0, 0.0); 4];
        amps[2] = c(1.0, 0.0);
        let q0 = compute_bloch_coordinates(&amps, 0, 2).unwrap();
        let q1 = compute_bloch_coordinates(&amps, 1, 2).unwrap();
        assert!((q0.z + 1.0).abs() < 1e-12);
        assert!((q1.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bell_pair_is_maximally_mixed() {
        let s = 1.0 / 2.0_f64.sqrt();
        let amps = [c(s, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(s, 0.0)];
        for q in 0..2 {
            let rho = reduced_density_matrix(&amps, q, 2).unwrap();
            assert!((rho.purity() - 0.5).abs() < 1e-12);
            assert!(rho.bloch_vector().magnitude() < 1e-12);
        }
    }

    #[test]
    fn test_trace_tracks_norm() {
        let amps = [c(0.5, 0.0), c(0.5, 0.0)];
        let rho = reduced_density_matrix(&amps, 0, 1).unwrap();
        assert!((rho.trace() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_validation_order() {
        // Length is checked before the qubit index.
        let err = compute_bloch_coordinates(&[c(1.0, 0.0); 3], 5, 2).unwrap_err();
        assert!(matches!(err, BlochError::InvalidDimension { .. }));

        let err = compute_bloch_coordinates(&[c(1.0, 0.0), c(0.0, 0.0)], 1, 1).unwrap_err();
        assert_eq!(
            err,
            BlochError::QubitIndexOutOfRange {
                qubit: 1,
                num_qubits: 1
            }
        );
    }

    #[test]
    fn test_reports_lowest_non_finite_index() {
        let mut amps = vec![c(0.5, 0.0); 4];
        amps[1] = c(f64::NAN, 0.0);
        amps[3] = c(0.0, f64::INFINITY);
        let err = compute_bloch_coordinates(&amps, 0, 2).unwrap_err();
        assert_eq!(err, BlochError::NonFiniteAmplitude { index: 1 });
    }

    #[test]
    fn test_non_finite_partner_is_still_reported() {
        // Index 1 is read as the partner of index 0 before it is visited.
        let amps = [c(1.0, 0.0), c(f64::NEG_INFINITY, 0.0)];
        let err = compute_bloch_coordinates(&amps, 0, 1).unwrap_err();
        assert_eq!(err, BlochError::NonFiniteAmplitude { index: 1 });
    }
}

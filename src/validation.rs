/*
 * // Copyright (c) Radzivon Bartoshyk 12/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Central validation helpers (§4.6). Kernels never validate; engines and
//! the orchestrator call into this module at every public entry point.

use crate::catalog::WaveletKind;
use crate::err::{Result, RippletError};

/// Largest signal length the core will accept, chosen so that
/// `next_power_of_two` never overflows a signed 32-bit shift.
pub const MAX_SIGNAL_LEN: usize = 1 << 30;

#[inline]
pub const fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Smallest power of two `>= n`, for `n > 0`.
///
/// # Errors
/// Returns [`RippletError::InvalidArgument`] if `n` exceeds [`MAX_SIGNAL_LEN`].
pub fn next_power_of_two(n: usize) -> Result<usize> {
    if n == 0 {
        return Ok(1);
    }
    if n > MAX_SIGNAL_LEN {
        return Err(RippletError::InvalidArgument(format!(
            "length {n} exceeds the maximum supported signal length {MAX_SIGNAL_LEN}"
        )));
    }
    if n == 1 {
        return Ok(1);
    }
    Ok((n - 1).next_power_of_two().max(1))
}

/// Checks a signal is non-empty and every sample is finite.
pub fn validate_finite(signal: &[f64], label: &str) -> Result<()> {
    if signal.is_empty() {
        return Err(RippletError::InvalidSignal(format!("{label} is empty")));
    }
    for (idx, &sample) in signal.iter().enumerate() {
        if !sample.is_finite() {
            return Err(RippletError::InvalidSignal(format!(
                "{label}[{idx}] is not finite: {sample}"
            )));
        }
    }
    Ok(())
}

/// Checks a signal is finite, at least length 2, and a power of two — the
/// precondition for the decimated single-level DWT engine.
pub fn validate_dwt_signal(signal: &[f64]) -> Result<()> {
    validate_finite(signal, "signal")?;
    if signal.len() < 2 {
        return Err(RippletError::InvalidSignal(format!(
            "signal length {} is below the DWT minimum of 2",
            signal.len()
        )));
    }
    if !is_power_of_two(signal.len()) {
        return Err(RippletError::InvalidSignal(format!(
            "signal length {} is not a power of two",
            signal.len()
        )));
    }
    Ok(())
}

/// Checks a signal is finite and non-empty — the precondition for MODWT,
/// which accepts any length `N >= 1`.
pub fn validate_modwt_signal(signal: &[f64]) -> Result<()> {
    validate_finite(signal, "signal")
}

/// Checks a wavelet is discrete (orthogonal or biorthogonal) — the
/// precondition every DWT/MODWT engine entry point requires (§6: "kind:
/// continuous ... rejected by the DWT/MODWT engines with `InvalidArgument`",
/// reclassified here under `InvalidConfiguration` per §7's taxonomy, which
/// assigns "non-discrete wavelet passed to a DWT/MODWT engine" to that
/// variant rather than `InvalidArgument`).
pub fn validate_discrete_kind(kind: WaveletKind) -> Result<()> {
    if matches!(kind, WaveletKind::Continuous) {
        return Err(RippletError::InvalidConfiguration(
            "continuous wavelets are not accepted by the DWT/MODWT engines".to_string(),
        ));
    }
    Ok(())
}

/// Checks two coefficient arrays are equal length, non-empty, and finite.
pub fn validate_matching_length(a: &[f64], b: &[f64]) -> Result<()> {
    validate_finite(a, "approximation coefficients")?;
    validate_finite(b, "detail coefficients")?;
    if a.len() != b.len() {
        return Err(RippletError::InvalidSignal(format!(
            "coefficient length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_detection() {
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(2));
        assert!(is_power_of_two(1024));
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(3));
        assert!(!is_power_of_two(1023));
    }

    #[test]
    fn next_power_of_two_matches_textbook_formula() {
        assert_eq!(next_power_of_two(1).unwrap(), 1);
        assert_eq!(next_power_of_two(2).unwrap(), 2);
        assert_eq!(next_power_of_two(3).unwrap(), 4);
        assert_eq!(next_power_of_two(5).unwrap(), 8);
        assert_eq!(next_power_of_two(1024).unwrap(), 1024);
        assert_eq!(next_power_of_two(1025).unwrap(), 2048);
    }

    #[test]
    fn next_power_of_two_rejects_oversized_input() {
        assert!(next_power_of_two(MAX_SIGNAL_LEN + 1).is_err());
    }

    #[test]
    fn validate_dwt_signal_rejects_non_power_of_two() {
        assert!(validate_dwt_signal(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn validate_dwt_signal_rejects_non_finite() {
        assert!(validate_dwt_signal(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn validate_dwt_signal_rejects_too_short() {
        assert!(validate_dwt_signal(&[1.0]).is_err());
    }

    #[test]
    fn validate_discrete_kind_rejects_continuous() {
        assert!(validate_discrete_kind(WaveletKind::Continuous).is_err());
        assert!(validate_discrete_kind(WaveletKind::Orthogonal).is_ok());
        assert!(validate_discrete_kind(WaveletKind::Biorthogonal).is_ok());
    }
}

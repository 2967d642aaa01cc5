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
//! Single-level MODWT (§4.4): undecimated analysis/synthesis over signals
//! of any length `N >= 1`.

use std::sync::Arc;

use crate::boundary::BoundaryMode;
use crate::catalog::WaveletDescriptor;
use crate::coeffs::CoefficientPair;
use crate::err::Result;
use crate::kernel::Kernel;
use crate::validation::{validate_discrete_kind, validate_matching_length, validate_modwt_signal};

/// One-level MODWT over a shared kernel.
pub struct ModwtEngine {
    kernel: Arc<dyn Kernel>,
}

impl ModwtEngine {
    pub fn new(kernel: Arc<dyn Kernel>) -> Self {
        Self { kernel }
    }

    /// Forward analysis. Output arrays have the same length as `signal`.
    pub fn forward(
        &self,
        signal: &[f64],
        wavelet: &WaveletDescriptor,
        mode: BoundaryMode,
    ) -> Result<CoefficientPair> {
        validate_discrete_kind(wavelet.kind())?;
        validate_modwt_signal(signal)?;
        let lo = wavelet.analysis_low_pass();
        let hi = wavelet.analysis_high_pass();
        let approx = self.kernel.modwt_conv(signal, lo, mode)?;
        let detail = self.kernel.modwt_conv(signal, &hi, mode)?;
        CoefficientPair::new(approx, detail)
    }

    /// Inverse synthesis: sums the two reconstructed paths. Exact to
    /// numerical precision under [`BoundaryMode::Periodic`]; under
    /// [`BoundaryMode::ZeroPadding`] boundary error decays with
    /// `min(t, N - t)` (§4.4).
    pub fn inverse(
        &self,
        pair: &CoefficientPair,
        wavelet: &WaveletDescriptor,
        mode: BoundaryMode,
    ) -> Result<Vec<f64>> {
        validate_discrete_kind(wavelet.kind())?;
        validate_matching_length(pair.approximation(), pair.detail())?;
        let lo = wavelet.reconstruction_low_pass();
        let hi = wavelet.reconstruction_high_pass();
        let lo_delay = (hi.len() as i64 - lo.len() as i64) / 2;
        let hi_delay = -lo_delay;
        let from_approx = self.kernel.modwt_inv_conv(pair.approximation(), lo, mode, lo_delay)?;
        let from_detail = self.kernel.modwt_inv_conv(pair.detail(), &hi, mode, hi_delay)?;
        Ok(from_approx
            .iter()
            .zip(from_detail.iter())
            .map(|(a, d)| a + d)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::kernel::ScalarKernel;

    fn engine() -> ModwtEngine {
        ModwtEngine::new(Arc::new(ScalarKernel))
    }

    #[test]
    fn haar_perfect_reconstruction_periodic_any_length() {
        let wavelet = catalog::lookup("haar").unwrap();
        let signal = [1.0, -2.0, 3.5, 0.0, 4.25, -1.1, 2.2];
        let engine = engine();
        let pair = engine.forward(&signal, &wavelet, BoundaryMode::Periodic).unwrap();
        assert_eq!(pair.len(), signal.len());
        let reconstructed = engine.inverse(&pair, &wavelet, BoundaryMode::Periodic).unwrap();
        for (a, b) in signal.iter().zip(reconstructed.iter()) {
            assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        }
    }

    #[test]
    fn db4_perfect_reconstruction_periodic_odd_length() {
        let wavelet = catalog::lookup("db4").unwrap();
        let signal = [0.1, 0.5, -0.3, 1.2, -0.7, 0.9, 0.2, -1.4, 0.6];
        let engine = engine();
        let pair = engine.forward(&signal, &wavelet, BoundaryMode::Periodic).unwrap();
        let reconstructed = engine.inverse(&pair, &wavelet, BoundaryMode::Periodic).unwrap();
        for (a, b) in signal.iter().zip(reconstructed.iter()) {
            assert!((a - b).abs() < 1e-7, "{a} vs {b}");
        }
    }

    #[test]
    fn zero_padding_boundary_error_decays_toward_center() {
        let wavelet = catalog::lookup("db4").unwrap();
        let signal = [1.0, 2.0, -1.0, 3.0, 0.5, -2.0, 1.5, 2.5, -0.5, 1.0, 0.0, 2.0];
        let engine = engine();
        let pair = engine.forward(&signal, &wavelet, BoundaryMode::ZeroPadding).unwrap();
        let reconstructed = engine.inverse(&pair, &wavelet, BoundaryMode::ZeroPadding).unwrap();
        let n = signal.len();
        let edge_err: f64 = [0, 1, n - 2, n - 1]
            .iter()
            .map(|&t| (signal[t] - reconstructed[t]).abs())
            .sum();
        let center_err: f64 = [n / 2 - 1, n / 2]
            .iter()
            .map(|&t| (signal[t] - reconstructed[t]).abs())
            .sum();
        assert!(center_err <= edge_err + 1e-6);
    }

    #[test]
    fn single_sample_signal_is_accepted() {
        let wavelet = catalog::lookup("haar").unwrap();
        let signal = [3.0];
        assert!(engine().forward(&signal, &wavelet, BoundaryMode::Periodic).is_ok());
    }
}

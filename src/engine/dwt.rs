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
//! Single-level decimated DWT (§4.3): forward analysis, inverse synthesis,
//! and a length-flexible façade that pads non-power-of-two inputs.

use std::sync::Arc;

use crate::boundary::BoundaryMode;
use crate::catalog::WaveletDescriptor;
use crate::coeffs::{CoefficientPair, PaddedCoefficientPair};
use crate::err::{Result, RippletError};
use crate::kernel::Kernel;
use crate::padding::{PaddingStrategy, ZeroPad};
use crate::validation::{
    next_power_of_two, validate_discrete_kind, validate_dwt_signal, validate_matching_length,
};

/// One-level DWT over a shared kernel.
pub struct DwtEngine {
    kernel: Arc<dyn Kernel>,
}

impl DwtEngine {
    pub fn new(kernel: Arc<dyn Kernel>) -> Self {
        Self { kernel }
    }

    /// Forward analysis (§4.3). `signal.len()` must be a power of two `>= 2`.
    pub fn forward(
        &self,
        signal: &[f64],
        wavelet: &WaveletDescriptor,
        mode: BoundaryMode,
    ) -> Result<CoefficientPair> {
        validate_discrete_kind(wavelet.kind())?;
        validate_dwt_signal(signal)?;
        let lo = wavelet.analysis_low_pass();
        let hi = wavelet.analysis_high_pass();
        let approx = self.kernel.conv_downsample(signal, lo, mode)?;
        let detail = self.kernel.conv_downsample(signal, &hi, mode)?;
        CoefficientPair::new(approx, detail)
    }

    /// Inverse synthesis (§4.3). `pair.approximation()` and
    /// `pair.detail()` must already be equal length (enforced at
    /// [`CoefficientPair`] construction).
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
        let from_approx = self.kernel.upsample_conv(pair.approximation(), lo, mode, lo_delay)?;
        let from_detail = self.kernel.upsample_conv(pair.detail(), &hi, mode, hi_delay)?;
        Ok(from_approx
            .iter()
            .zip(from_detail.iter())
            .map(|(a, d)| a + d)
            .collect())
    }

    /// Length-flexible forward (§4.3): pads non-power-of-two (or
    /// sub-minimum) signals to the next power of two with `padding` before
    /// running [`Self::forward`].
    pub fn forward_padded(
        &self,
        signal: &[f64],
        wavelet: &WaveletDescriptor,
        mode: BoundaryMode,
        padding: &dyn PaddingStrategy,
    ) -> Result<PaddedCoefficientPair> {
        crate::validation::validate_finite(signal, "signal")?;
        let original_length = signal.len();
        let target = next_power_of_two(original_length.max(2))?;
        let padded = if signal.len() == target {
            signal.to_vec()
        } else {
            padding.pad(signal, target)?
        };
        let pair = self.forward(&padded, wavelet, mode)?;
        Ok(PaddedCoefficientPair::new(pair, original_length))
    }

    /// Inverts a [`PaddedCoefficientPair`] and trims back to
    /// `original_length`.
    pub fn inverse_padded(
        &self,
        padded: &PaddedCoefficientPair,
        wavelet: &WaveletDescriptor,
        mode: BoundaryMode,
        padding: &dyn PaddingStrategy,
    ) -> Result<Vec<f64>> {
        let pair = CoefficientPair::new(padded.approximation().to_vec(), padded.detail().to_vec())?;
        let reconstructed = self.inverse(&pair, wavelet, mode)?;
        if padded.original_length() > reconstructed.len() {
            return Err(RippletError::InvalidArgument(format!(
                "original_length {} exceeds reconstructed length {}",
                padded.original_length(),
                reconstructed.len()
            )));
        }
        padding.trim(&reconstructed, padded.original_length())
    }
}

/// Convenience default using [`ZeroPad`], matching spec.md's "at minimum:
/// zeros" baseline.
pub fn default_padding() -> ZeroPad {
    ZeroPad
}

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
//! The multi-level orchestrator (§4.5): builds a [`Pyramid`] by iterating a
//! single-level engine, either for an explicit level count or adaptively
//! until a detail's relative energy drops below a threshold.

use std::sync::Arc;

use crate::boundary::BoundaryMode;
use crate::catalog::WaveletDescriptor;
use crate::engine::{DwtEngine, ModwtEngine};
use crate::err::{Result, RippletError};
use crate::kernel::Kernel;
use crate::pyramid::{Pyramid, TransformVariant};
use crate::validation::{validate_dwt_signal, validate_modwt_signal};

/// Largest `L` the orchestrator will decompose to, capped at
/// `floor(log2(signal_len))` (§4.5, §4.6).
///
/// The decimated DWT additionally requires the signal length remaining
/// after `L` halvings to stay `>= filter_len`; the undecimated MODWT never
/// shrinks its working array, so only the log2 cap applies to it.
fn max_levels_for(variant: TransformVariant, signal_len: usize, filter_len: usize) -> usize {
    if signal_len == 0 {
        return 0;
    }
    let cap = (usize::BITS - 1 - signal_len.leading_zeros()) as usize;
    match variant {
        TransformVariant::Dwt => {
            let mut levels = 0;
            let mut len = signal_len;
            while levels < cap && len / 2 >= filter_len {
                len /= 2;
                levels += 1;
            }
            levels
        }
        TransformVariant::Modwt => cap,
    }
}

/// Builds [`Pyramid`]s over a shared kernel.
pub struct Orchestrator {
    kernel: Arc<dyn Kernel>,
}

impl Orchestrator {
    pub fn new(kernel: Arc<dyn Kernel>) -> Self {
        Self { kernel }
    }

    /// The largest level count [`Self::forward`] will accept for this
    /// signal length, wavelet, and variant (§4.5).
    pub fn max_levels(
        &self,
        signal_len: usize,
        wavelet: &WaveletDescriptor,
        variant: TransformVariant,
    ) -> usize {
        max_levels_for(variant, signal_len, wavelet.analysis_low_pass().len())
    }

    fn validate_signal(variant: TransformVariant, signal: &[f64]) -> Result<()> {
        match variant {
            TransformVariant::Dwt => validate_dwt_signal(signal),
            TransformVariant::Modwt => validate_modwt_signal(signal),
        }
    }

    fn step(
        &self,
        variant: TransformVariant,
        current: &[f64],
        wavelet: &WaveletDescriptor,
        mode: BoundaryMode,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        let pair = match variant {
            TransformVariant::Dwt => {
                DwtEngine::new(Arc::clone(&self.kernel)).forward(current, wavelet, mode)?
            }
            TransformVariant::Modwt => {
                ModwtEngine::new(Arc::clone(&self.kernel)).forward(current, wavelet, mode)?
            }
        };
        Ok(pair.into_parts())
    }

    /// Forward decomposition to an explicit level count (§4.5 "Forward
    /// (explicit levels)").
    ///
    /// # Errors
    /// [`RippletError::InvalidArgument`] if `levels_requested` is zero or
    /// exceeds [`Self::max_levels`].
    pub fn forward(
        &self,
        signal: &[f64],
        wavelet: &WaveletDescriptor,
        mode: BoundaryMode,
        variant: TransformVariant,
        levels_requested: usize,
    ) -> Result<Pyramid> {
        Self::validate_signal(variant, signal)?;
        let l_max = self.max_levels(signal.len(), wavelet, variant);
        if levels_requested == 0 || levels_requested > l_max {
            return Err(RippletError::InvalidArgument(format!(
                "levels_requested {levels_requested} is out of range [1, {l_max}]"
            )));
        }

        let mut details = Vec::with_capacity(levels_requested);
        let mut current = signal.to_vec();
        for _ in 0..levels_requested {
            let (approx, detail) = self.step(variant, &current, wavelet, mode)?;
            details.push(detail);
            current = approx;
        }

        Ok(Pyramid::new(variant, wavelet.clone(), mode, Arc::clone(&self.kernel), details, current))
    }

    /// Forward decomposition that stops once a level's relative detail
    /// energy (`Σ detail² / Σ signal²`) drops below `threshold`, or once
    /// [`Self::max_levels`] is reached, whichever comes first (§4.5
    /// "Forward (adaptive)"). Always produces at least one level.
    ///
    /// # Errors
    /// [`RippletError::InvalidArgument`] if `threshold` is not in `(0, 1)`
    /// or the signal admits zero levels.
    pub fn forward_adaptive(
        &self,
        signal: &[f64],
        wavelet: &WaveletDescriptor,
        mode: BoundaryMode,
        variant: TransformVariant,
        threshold: f64,
    ) -> Result<Pyramid> {
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(RippletError::InvalidArgument(format!(
                "threshold {threshold} must lie in (0, 1)"
            )));
        }
        Self::validate_signal(variant, signal)?;
        let l_max = self.max_levels(signal.len(), wavelet, variant);
        if l_max == 0 {
            return Err(RippletError::InvalidArgument(
                "signal admits zero decomposition levels for this wavelet".to_string(),
            ));
        }

        let signal_energy: f64 = signal.iter().map(|x| x * x).sum();
        let mut details = Vec::new();
        let mut current = signal.to_vec();
        for _ in 0..l_max {
            let (approx, detail) = self.step(variant, &current, wavelet, mode)?;
            let detail_energy: f64 = detail.iter().map(|x| x * x).sum();
            let relative = if signal_energy > 0.0 {
                detail_energy / signal_energy
            } else {
                0.0
            };
            details.push(detail);
            current = approx;
            if relative < threshold {
                break;
            }
        }

        Ok(Pyramid::new(variant, wavelet.clone(), mode, Arc::clone(&self.kernel), details, current))
    }

    /// Full inverse of a pyramid (§4.5 "Inverse (full)"): equivalent to
    /// `pyramid.approx_at_level(0)`.
    pub fn inverse(&self, pyramid: &Pyramid) -> Result<Vec<f64>> {
        pyramid.approx_at_level(0).map(|arc| arc.to_vec())
    }
}

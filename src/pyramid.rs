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
//! The multi-level coefficient pyramid (§3, §4.5, §5): owns one forward
//! pass's detail arrays and final approximation, and memoizes intermediate
//! approximations as callers request them.

use std::sync::{Arc, OnceLock};

use crate::boundary::BoundaryMode;
use crate::catalog::WaveletDescriptor;
use crate::coeffs::CoefficientPair;
use crate::engine::{DwtEngine, ModwtEngine};
use crate::err::{Result, RippletError};
use crate::kernel::Kernel;

/// Which single-level engine a pyramid was built (and must be inverted)
/// with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TransformVariant {
    Dwt,
    Modwt,
}

/// A multi-level decomposition plus a lazily-filled cache of intermediate
/// approximations (§4.5 "Cache discipline").
///
/// `details[i]` holds the detail coefficients produced at level `i + 1`.
/// `cache[k]` holds the approximation at level `k`, for `k` in
/// `0..=levels()`; `cache[levels()]` is pre-filled at construction since
/// the final approximation is already known.
pub struct Pyramid {
    variant: TransformVariant,
    wavelet: WaveletDescriptor,
    mode: BoundaryMode,
    kernel: Arc<dyn Kernel>,
    details: Vec<Vec<f64>>,
    cache: Vec<OnceLock<Arc<[f64]>>>,
}

impl Pyramid {
    pub(crate) fn new(
        variant: TransformVariant,
        wavelet: WaveletDescriptor,
        mode: BoundaryMode,
        kernel: Arc<dyn Kernel>,
        details: Vec<Vec<f64>>,
        final_approximation: Vec<f64>,
    ) -> Self {
        let levels = details.len();
        let cache: Vec<OnceLock<Arc<[f64]>>> = (0..=levels).map(|_| OnceLock::new()).collect();
        let _ = cache[levels].set(Arc::from(final_approximation.into_boxed_slice()));
        Self {
            variant,
            wavelet,
            mode,
            kernel,
            details,
            cache,
        }
    }

    pub fn levels(&self) -> usize {
        self.details.len()
    }

    pub fn wavelet(&self) -> &WaveletDescriptor {
        &self.wavelet
    }

    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    pub fn variant(&self) -> TransformVariant {
        self.variant
    }

    /// The stored detail coefficients at `level` (1-indexed, `1..=levels()`).
    pub fn details_at_level(&self, level: usize) -> Result<&[f64]> {
        if level == 0 || level > self.levels() {
            return Err(RippletError::InvalidArgument(format!(
                "level {level} is out of range [1, {}]",
                self.levels()
            )));
        }
        Ok(&self.details[level - 1])
    }

    /// The approximation at `level` (`0..=levels()`). `level == 0` is the
    /// full reconstruction; `level == levels()` is the stored final
    /// approximation; values in between are reconstructed by descending
    /// from the nearest already-cached ancestor and memoized as they are
    /// produced (§4.5, §5: per-level cache, lock-free once populated).
    pub fn approx_at_level(&self, level: usize) -> Result<Arc<[f64]>> {
        let levels = self.levels();
        if level > levels {
            return Err(RippletError::InvalidArgument(format!(
                "level {level} exceeds pyramid depth {levels}"
            )));
        }
        if let Some(cached) = self.cache[level].get() {
            return Ok(Arc::clone(cached));
        }

        let mut start = level;
        while self.cache[start].get().is_none() {
            start += 1;
        }
        let mut current: Vec<f64> = self.cache[start].get().unwrap().to_vec();

        for step_level in (level + 1..=start).rev() {
            let detail = self.details[step_level - 1].clone();
            let pair = CoefficientPair::new(current, detail)?;
            current = self.invert_one(&pair)?;
            let arc: Arc<[f64]> = Arc::from(current.clone().into_boxed_slice());
            // A concurrent builder may have filled this slot first; either
            // result is the same value, so losing the race is harmless.
            let _ = self.cache[step_level - 1].set(arc);
        }

        Ok(Arc::from(current.into_boxed_slice()))
    }

    /// Reconstructs from `from_level` with all finer details (levels
    /// `1..from_level`) replaced by zeros (§4.5 "Projection"). `from_level
    /// == 0` is a full reconstruction.
    pub fn project(&self, from_level: usize) -> Result<Vec<f64>> {
        if from_level > self.levels() {
            return Err(RippletError::InvalidArgument(format!(
                "from_level {from_level} exceeds pyramid depth {}",
                self.levels()
            )));
        }
        if from_level == 0 {
            return Ok(self.approx_at_level(0)?.to_vec());
        }

        let mut current = self.approx_at_level(from_level)?.to_vec();
        for step_level in (1..=from_level).rev() {
            let zero_detail = vec![0.0; self.details[step_level - 1].len()];
            let pair = CoefficientPair::new(current, zero_detail)?;
            current = self.invert_one(&pair)?;
        }
        Ok(current)
    }

    fn invert_one(&self, pair: &CoefficientPair) -> Result<Vec<f64>> {
        match self.variant {
            TransformVariant::Dwt => {
                DwtEngine::new(Arc::clone(&self.kernel)).inverse(pair, &self.wavelet, self.mode)
            }
            TransformVariant::Modwt => {
                ModwtEngine::new(Arc::clone(&self.kernel)).inverse(pair, &self.wavelet, self.mode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::kernel::ScalarKernel;

    fn build_dwt_pyramid(signal: &[f64], levels: usize) -> Pyramid {
        let wavelet = catalog::lookup("haar").unwrap();
        let kernel: Arc<dyn Kernel> = Arc::new(ScalarKernel);
        let engine = DwtEngine::new(Arc::clone(&kernel));
        let mut details = Vec::with_capacity(levels);
        let mut current = signal.to_vec();
        for _ in 0..levels {
            let pair = engine.forward(&current, &wavelet, BoundaryMode::Periodic).unwrap();
            let (approx, detail) = pair.into_parts();
            details.push(detail);
            current = approx;
        }
        Pyramid::new(TransformVariant::Dwt, wavelet, BoundaryMode::Periodic, kernel, details, current)
    }

    #[test]
    fn full_reconstruction_matches_input() {
        let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let pyramid = build_dwt_pyramid(&signal, 3);
        let reconstructed = pyramid.approx_at_level(0).unwrap();
        for (a, b) in signal.iter().zip(reconstructed.iter()) {
            assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        }
    }

    #[test]
    fn intermediate_level_is_memoized() {
        let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let pyramid = build_dwt_pyramid(&signal, 3);
        let first = pyramid.approx_at_level(1).unwrap();
        let second = pyramid.approx_at_level(1).unwrap();
        assert_eq!(&*first, &*second);
    }

    #[test]
    fn details_at_level_rejects_out_of_range() {
        let signal = [1.0, 2.0, 3.0, 4.0];
        let pyramid = build_dwt_pyramid(&signal, 2);
        assert!(pyramid.details_at_level(0).is_err());
        assert!(pyramid.details_at_level(3).is_err());
        assert!(pyramid.details_at_level(1).is_ok());
    }

    #[test]
    fn project_to_zero_equals_full_reconstruction() {
        let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let pyramid = build_dwt_pyramid(&signal, 3);
        let projected = pyramid.project(0).unwrap();
        let full = pyramid.approx_at_level(0).unwrap();
        for (a, b) in projected.iter().zip(full.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }
}

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
//! 1D discrete (DWT) and maximal-overlap (MODWT) wavelet transforms.
//!
//! The entry point is [`Ripplet`], a factory mirroring the crate's
//! single-level and multi-level transform handles: [`Dwt`], [`Modwt`], and
//! [`MultiLevel`]. Wavelets are looked up by canonical name from the
//! built-in [`catalog`].

pub mod boundary;
pub mod catalog;
pub mod coeffs;
pub mod engine;
pub mod err;
pub mod kernel;
pub mod orchestrator;
pub mod padding;
pub mod pyramid;
pub mod validation;

use std::sync::Arc;

pub use boundary::BoundaryMode;
pub use catalog::{Provenance, WaveletDescriptor, WaveletKind};
pub use coeffs::{CoefficientPair, PaddedCoefficientPair};
pub use err::{Result, RippletError};
pub use kernel::{Kernel, ScalarKernel};
pub use orchestrator::Orchestrator;
pub use padding::{PaddingStrategy, PeriodicPad, ReflectPad, SymmetricPad, ZeroPad};
pub use pyramid::{Pyramid, TransformVariant};

use engine::{DwtEngine, ModwtEngine};

/// A single-level decimated DWT bound to one wavelet and boundary mode.
pub struct Dwt {
    engine: DwtEngine,
    wavelet: WaveletDescriptor,
    mode: BoundaryMode,
}

impl Dwt {
    pub fn wavelet(&self) -> &WaveletDescriptor {
        &self.wavelet
    }

    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Forward analysis (§4.3). `signal.len()` must be a power of two `>= 2`.
    pub fn forward(&self, signal: &[f64]) -> Result<CoefficientPair> {
        self.engine.forward(signal, &self.wavelet, self.mode)
    }

    /// Inverse synthesis (§4.3).
    pub fn inverse(&self, pair: &CoefficientPair) -> Result<Vec<f64>> {
        self.engine.inverse(pair, &self.wavelet, self.mode)
    }

    /// Forward analysis over a signal of any length, auto-padding to the
    /// next power of two with `padding`.
    pub fn forward_padded(
        &self,
        signal: &[f64],
        padding: &dyn PaddingStrategy,
    ) -> Result<PaddedCoefficientPair> {
        self.engine.forward_padded(signal, &self.wavelet, self.mode, padding)
    }

    /// Inverts a [`PaddedCoefficientPair`] and trims back to its original
    /// length.
    pub fn inverse_padded(
        &self,
        padded: &PaddedCoefficientPair,
        padding: &dyn PaddingStrategy,
    ) -> Result<Vec<f64>> {
        self.engine.inverse_padded(padded, &self.wavelet, self.mode, padding)
    }
}

/// A single-level MODWT bound to one wavelet and boundary mode.
pub struct Modwt {
    engine: ModwtEngine,
    wavelet: WaveletDescriptor,
    mode: BoundaryMode,
}

impl Modwt {
    pub fn wavelet(&self) -> &WaveletDescriptor {
        &self.wavelet
    }

    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Forward analysis (§4.4). Accepts any signal length `N >= 1`.
    pub fn forward(&self, signal: &[f64]) -> Result<CoefficientPair> {
        self.engine.forward(signal, &self.wavelet, self.mode)
    }

    /// Inverse synthesis (§4.4).
    pub fn inverse(&self, pair: &CoefficientPair) -> Result<Vec<f64>> {
        self.engine.inverse(pair, &self.wavelet, self.mode)
    }
}

/// A multi-level pyramid builder bound to one wavelet, boundary mode, and
/// transform variant (§4.5).
pub struct MultiLevel {
    orchestrator: Orchestrator,
    wavelet: WaveletDescriptor,
    mode: BoundaryMode,
    variant: TransformVariant,
}

impl MultiLevel {
    pub fn wavelet(&self) -> &WaveletDescriptor {
        &self.wavelet
    }

    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    pub fn variant(&self) -> TransformVariant {
        self.variant
    }

    /// The largest level count [`Self::forward`] will accept for a signal
    /// of this length.
    pub fn max_levels(&self, signal_len: usize) -> usize {
        self.orchestrator.max_levels(signal_len, &self.wavelet, self.variant)
    }

    /// Decomposes to an explicit level count.
    pub fn forward(&self, signal: &[f64], levels: usize) -> Result<Pyramid> {
        self.orchestrator
            .forward(signal, &self.wavelet, self.mode, self.variant, levels)
    }

    /// Decomposes adaptively until a level's relative detail energy drops
    /// below `threshold`.
    pub fn forward_adaptive(&self, signal: &[f64], threshold: f64) -> Result<Pyramid> {
        self.orchestrator
            .forward_adaptive(signal, &self.wavelet, self.mode, self.variant, threshold)
    }

    /// Full inverse of a pyramid built by this handle.
    pub fn inverse(&self, pyramid: &Pyramid) -> Result<Vec<f64>> {
        self.orchestrator.inverse(pyramid)
    }
}

/// The main entry point for constructing transform handles.
///
/// `Ripplet` provides factory methods that look a wavelet up in the
/// built-in catalog and bind it, with a boundary mode, to a fresh
/// [`ScalarKernel`].
pub struct Ripplet {}

impl Ripplet {
    /// Builds a single-level DWT handle for `wavelet_name` (§6, §4.1 for
    /// recognized names).
    ///
    /// # Errors
    /// [`RippletError::NotImplemented`] if `wavelet_name` has no catalog
    /// entry.
    pub fn dwt(wavelet_name: &str, mode: BoundaryMode) -> Result<Dwt> {
        let wavelet = catalog::lookup(wavelet_name)?;
        Ok(Dwt {
            engine: DwtEngine::new(Arc::new(ScalarKernel)),
            wavelet,
            mode,
        })
    }

    /// Builds a single-level MODWT handle for `wavelet_name`.
    pub fn modwt(wavelet_name: &str, mode: BoundaryMode) -> Result<Modwt> {
        let wavelet = catalog::lookup(wavelet_name)?;
        Ok(Modwt {
            engine: ModwtEngine::new(Arc::new(ScalarKernel)),
            wavelet,
            mode,
        })
    }

    /// Builds a multi-level decimated-DWT pyramid builder for `wavelet_name`.
    pub fn multi_level_dwt(wavelet_name: &str, mode: BoundaryMode) -> Result<MultiLevel> {
        Self::multi_level(wavelet_name, mode, TransformVariant::Dwt)
    }

    /// Builds a multi-level undecimated-MODWT pyramid builder for
    /// `wavelet_name`.
    pub fn multi_level_modwt(wavelet_name: &str, mode: BoundaryMode) -> Result<MultiLevel> {
        Self::multi_level(wavelet_name, mode, TransformVariant::Modwt)
    }

    fn multi_level(wavelet_name: &str, mode: BoundaryMode, variant: TransformVariant) -> Result<MultiLevel> {
        let wavelet = catalog::lookup(wavelet_name)?;
        Ok(MultiLevel {
            orchestrator: Orchestrator::new(Arc::new(ScalarKernel)),
            wavelet,
            mode,
            variant,
        })
    }
}

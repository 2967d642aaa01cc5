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
//! The filter-bank kernel (§4.2): the "single abstract kernel interface"
//! spec.md §1 requires platform-optimized back-ends to sit behind. Only the
//! reference [`ScalarKernel`] ships here — SIMD/cache-blocked back-ends are
//! out of scope, but the trait boundary is real so one could be added
//! without touching `engine` or `orchestrator`.

mod scalar;

pub use scalar::ScalarKernel;

use crate::boundary::BoundaryMode;
use crate::err::Result;

/// Primitive array operations shared by the DWT and MODWT engines.
///
/// Implementations may assume inputs were already validated by the caller
/// (engine layer) — per spec.md §4.2 the kernel presumes validated inputs
/// for speed and does not itself raise on malformed lengths outside of
/// `debug_assert!`.
pub trait Kernel: Send + Sync {
    /// Convolve-and-downsample: DWT analysis. `signal` has length `n`,
    /// `filter` has length `l`; returns a vector of length `n / 2`.
    fn conv_downsample(&self, signal: &[f64], filter: &[f64], mode: BoundaryMode) -> Result<Vec<f64>>;

    /// Upsample-and-convolve: DWT synthesis. `coeffs` has length `m`;
    /// returns a vector of length `2 * m`.
    ///
    /// `delay` compensates the group-delay mismatch between a pair of
    /// reconstruction filters of different lengths (biorthogonal
    /// wavelets only; §4.1 "derived vs. stored filters"). The caller
    /// passes `(other_channel_len - filter.len()) / 2`; for equal-length
    /// filter pairs (every orthogonal wavelet, by construction) this is
    /// always zero.
    fn upsample_conv(
        &self,
        coeffs: &[f64],
        filter: &[f64],
        mode: BoundaryMode,
        delay: i64,
    ) -> Result<Vec<f64>>;

    /// Non-decimating circular convolution with the MODWT-rescaled filter:
    /// MODWT analysis. Output has the same length as `signal`.
    fn modwt_conv(&self, signal: &[f64], filter: &[f64], mode: BoundaryMode) -> Result<Vec<f64>>;

    /// MODWT synthesis: the time-reversed pairing such that summing the
    /// low-pass and high-pass reconstructed paths inverts `modwt_conv`.
    ///
    /// `delay` carries the same group-delay compensation as
    /// [`Self::upsample_conv`]'s, for the same reason (mismatched filter
    /// lengths in a biorthogonal pair); zero for every orthogonal wavelet.
    fn modwt_inv_conv(
        &self,
        coeffs: &[f64],
        filter: &[f64],
        mode: BoundaryMode,
        delay: i64,
    ) -> Result<Vec<f64>>;
}

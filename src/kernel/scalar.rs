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
//! Reference scalar implementation of the four kernel primitives (§4.2).
//! Every conformance property in spec.md §8 must hold against this kernel
//! alone; it is the one every engine is built and tested against.

use crate::boundary::BoundaryMode;
use crate::err::{try_vec, Result};
use crate::kernel::Kernel;

/// Plain, portable implementation of [`Kernel`]. No SIMD, no cache
/// blocking — the baseline every platform-optimized back-end must agree
/// with.
#[derive(Debug, Default, Copy, Clone)]
pub struct ScalarKernel;

impl Kernel for ScalarKernel {
    fn conv_downsample(
        &self,
        signal: &[f64],
        filter: &[f64],
        mode: BoundaryMode,
    ) -> Result<Vec<f64>> {
        debug_assert!(!filter.is_empty());
        debug_assert!(signal.len() % 2 == 0);

        let n = signal.len();
        let half = n / 2;
        let mut out = try_vec![0.0_f64; half];

        for (k, dst) in out.iter_mut().enumerate() {
            let mut acc = 0.0_f64;
            for (j, &coeff) in filter.iter().enumerate() {
                let x = 2 * k as i64 + 1 - j as i64;
                if let Some(idx) = mode.resolve(x, n) {
                    acc += coeff * signal[idx];
                }
            }
            *dst = acc;
        }

        Ok(out)
    }

    fn upsample_conv(
        &self,
        coeffs: &[f64],
        filter: &[f64],
        mode: BoundaryMode,
        delay: i64,
    ) -> Result<Vec<f64>> {
        debug_assert!(!filter.is_empty());

        let m = coeffs.len();
        let out_len = 2 * m;
        let mut out = try_vec![0.0_f64; out_len];

        for (n, dst) in out.iter_mut().enumerate() {
            let mut acc = 0.0_f64;
            for (j, &coeff) in filter.iter().enumerate() {
                // Adjoint of conv_downsample's `x = 2k + 1 - j`: solving for
                // k given n and j yields k = (n - 1 + j) / 2. `delay`
                // additionally re-centers filters whose length differs from
                // their channel partner's (see the trait doc comment).
                let diff = n as i64 - 1 + j as i64 + delay;
                if diff % 2 != 0 {
                    continue;
                }
                let c = diff / 2;
                if let Some(idx) = mode.resolve(c, m) {
                    acc += coeff * coeffs[idx];
                }
            }
            *dst = acc;
        }

        Ok(out)
    }

    fn modwt_conv(&self, signal: &[f64], filter: &[f64], mode: BoundaryMode) -> Result<Vec<f64>> {
        debug_assert!(!filter.is_empty());

        let n = signal.len();
        let scale = std::f64::consts::FRAC_1_SQRT_2;
        let mut out = try_vec![0.0_f64; n];

        for (t, dst) in out.iter_mut().enumerate() {
            let mut acc = 0.0_f64;
            for (j, &coeff) in filter.iter().enumerate() {
                let x = t as i64 - j as i64;
                if let Some(idx) = mode.resolve(x, n) {
                    acc += coeff * scale * signal[idx];
                }
            }
            *dst = acc;
        }

        Ok(out)
    }

    fn modwt_inv_conv(
        &self,
        coeffs: &[f64],
        filter: &[f64],
        mode: BoundaryMode,
        delay: i64,
    ) -> Result<Vec<f64>> {
        debug_assert!(!filter.is_empty());

        let n = coeffs.len();
        let scale = std::f64::consts::FRAC_1_SQRT_2;
        let mut out = try_vec![0.0_f64; n];

        for (t, dst) in out.iter_mut().enumerate() {
            let mut acc = 0.0_f64;
            for (j, &coeff) in filter.iter().enumerate() {
                let x = t as i64 + j as i64 + delay;
                if let Some(idx) = mode.resolve(x, n) {
                    acc += coeff * scale * coeffs[idx];
                }
            }
            *dst = acc;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAAR_LO: [f64; 2] = [std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2];

    #[test]
    fn conv_downsample_haar_matches_hand_computation() {
        let kernel = ScalarKernel;
        let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let out = kernel
            .conv_downsample(&signal, &HAAR_LO, BoundaryMode::Periodic)
            .unwrap();
        // Haar averages pairs scaled by sqrt(2): (s0+s1)/sqrt(2) etc, but the
        // spec's 2k+1-j offset picks (s[2k+1], s[2k]) pairing.
        let expected = [
            (1.0 + 2.0) / std::f64::consts::SQRT_2,
            (3.0 + 4.0) / std::f64::consts::SQRT_2,
            (5.0 + 6.0) / std::f64::consts::SQRT_2,
            (7.0 + 8.0) / std::f64::consts::SQRT_2,
        ];
        for (a, b) in out.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12, "{a} vs {b}");
        }
    }

    #[test]
    fn upsample_conv_doubles_length() {
        let kernel = ScalarKernel;
        let coeffs = [1.0, 2.0, 3.0, 4.0];
        let out = kernel
            .upsample_conv(&coeffs, &HAAR_LO, BoundaryMode::Periodic, 0)
            .unwrap();
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn modwt_conv_preserves_length() {
        let kernel = ScalarKernel;
        let signal = [1.0, 2.0, 3.0, 4.0, 5.0];
        let out = kernel
            .modwt_conv(&signal, &HAAR_LO, BoundaryMode::Periodic)
            .unwrap();
        assert_eq!(out.len(), signal.len());
    }
}

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
//! Biorthogonal spline filters. Only `bior1.3` ships (§4.1): a short
//! spline pair whose coefficients are rational multiples of `sqrt(2)`,
//! single-source in this build and carrying [`Provenance::Literature`]
//! accordingly.

use super::{Provenance, WaveletDescriptor};

const BIOR1_3_ANALYSIS_LOW: [f64; 6] = [
    -0.0883883476483184,
    0.0883883476483184,
    0.7071067811865476,
    0.7071067811865476,
    0.0883883476483184,
    -0.0883883476483184,
];

const BIOR1_3_RECONSTRUCTION_LOW: [f64; 2] = [
    std::f64::consts::FRAC_1_SQRT_2,
    std::f64::consts::FRAC_1_SQRT_2,
];

pub(super) fn lookup(name: &str) -> Option<WaveletDescriptor> {
    if name == "bior1.3" {
        Some(WaveletDescriptor::new_biorthogonal(
            "bior1.3",
            "biorthogonal",
            3,
            3,
            Provenance::Literature,
            BIOR1_3_ANALYSIS_LOW.to_vec(),
            BIOR1_3_RECONSTRUCTION_LOW.to_vec(),
        ))
    } else {
        None
    }
}

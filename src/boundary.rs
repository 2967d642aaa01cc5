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
//! Boundary handling (§3, §4.2). Both the kernel's index mapping and the
//! engines' padding façade consult [`BoundaryMode`].

/// How out-of-range indices are resolved during convolution.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum BoundaryMode {
    /// Circular indexing: `((x mod N) + N) mod N`. Makes convolution
    /// circular and is the mode under which perfect reconstruction is
    /// exact to numerical precision.
    Periodic,
    /// Out-of-range samples are treated as zero.
    ZeroPadding,
}

impl BoundaryMode {
    /// Resolves a (possibly negative or overflowing) index against a
    /// buffer of length `n` under this boundary mode.
    ///
    /// Returns `None` for [`BoundaryMode::ZeroPadding`] when `x` falls
    /// outside `[0, n)` — callers treat `None` as a zero contribution.
    #[inline]
    pub fn resolve(self, x: i64, n: usize) -> Option<usize> {
        debug_assert!(n > 0);
        match self {
            BoundaryMode::Periodic => {
                let n = n as i64;
                Some((((x % n) + n) % n) as usize)
            }
            BoundaryMode::ZeroPadding => {
                if x >= 0 && (x as u64) < n as u64 {
                    Some(x as usize)
                } else {
                    None
                }
            }
        }
    }
}

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
//! Coefficient value types (§3): immutable, validated containers that
//! distinguish a single-level decomposition from a padded boundary-segment
//! one without letting either escape into an inconsistent state.

use crate::err::Result;
use crate::validation::validate_matching_length;

/// A single-level decomposition: equal-length approximation and detail
/// coefficient arrays, both finite.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientPair {
    approximation: Vec<f64>,
    detail: Vec<f64>,
}

impl CoefficientPair {
    /// # Errors
    /// [`crate::err::RippletError::InvalidSignal`] if the arrays differ in
    /// length, are empty, or contain a non-finite sample.
    pub fn new(approximation: Vec<f64>, detail: Vec<f64>) -> Result<Self> {
        validate_matching_length(&approximation, &detail)?;
        Ok(Self { approximation, detail })
    }

    pub fn approximation(&self) -> &[f64] {
        &self.approximation
    }

    pub fn detail(&self) -> &[f64] {
        &self.detail
    }

    pub fn len(&self) -> usize {
        self.approximation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approximation.is_empty()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.approximation, self.detail)
    }
}

/// A [`CoefficientPair`] extended with the length the signal had before it
/// was padded to a boundary-friendly length, so callers can trim back down
/// after a round trip (§6).
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedCoefficientPair {
    pair: CoefficientPair,
    original_length: usize,
}

impl PaddedCoefficientPair {
    pub fn new(pair: CoefficientPair, original_length: usize) -> Self {
        Self { pair, original_length }
    }

    pub fn approximation(&self) -> &[f64] {
        self.pair.approximation()
    }

    pub fn detail(&self) -> &[f64] {
        self.pair.detail()
    }

    pub fn original_length(&self) -> usize {
        self.original_length
    }

    pub fn into_pair(self) -> CoefficientPair {
        self.pair
    }
}

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
//! Padding strategies (§6) for the length-flexible DWT façade: extend a
//! signal to a target length before the decimated engine runs, then trim
//! the reconstruction back to its original length.

use crate::err::{Result, RippletError};

/// A pluggable extension used to grow a signal to a power-of-two length.
pub trait PaddingStrategy {
    /// Returns a vector of exactly `target_length` samples whose first
    /// `signal.len()` entries need not equal `signal` verbatim, but whose
    /// content `trim` can invert back to `signal`.
    fn pad(&self, signal: &[f64], target_length: usize) -> Result<Vec<f64>>;

    /// Truncates `array` back to `original_length` samples.
    fn trim(&self, array: &[f64], original_length: usize) -> Result<Vec<f64>> {
        if original_length > array.len() {
            return Err(RippletError::InvalidArgument(format!(
                "original_length {original_length} exceeds array length {}",
                array.len()
            )));
        }
        Ok(array[..original_length].to_vec())
    }
}

fn check_target(signal: &[f64], target_length: usize) -> Result<()> {
    if target_length < signal.len() {
        return Err(RippletError::InvalidArgument(format!(
            "target_length {target_length} is shorter than the input length {}",
            signal.len()
        )));
    }
    Ok(())
}

/// Pads with zeros.
#[derive(Debug, Default, Copy, Clone)]
pub struct ZeroPad;

impl PaddingStrategy for ZeroPad {
    fn pad(&self, signal: &[f64], target_length: usize) -> Result<Vec<f64>> {
        check_target(signal, target_length)?;
        let mut out = signal.to_vec();
        out.resize(target_length, 0.0);
        Ok(out)
    }
}

/// Pads by mirroring the signal about its last sample: `..., s[n-2], s[n-1],
/// s[n-1], s[n-2], ...` (whole-sample symmetric extension).
#[derive(Debug, Default, Copy, Clone)]
pub struct SymmetricPad;

impl PaddingStrategy for SymmetricPad {
    fn pad(&self, signal: &[f64], target_length: usize) -> Result<Vec<f64>> {
        check_target(signal, target_length)?;
        let n = signal.len();
        let mut out = Vec::with_capacity(target_length);
        out.extend_from_slice(signal);
        if n == 0 {
            out.resize(target_length, 0.0);
            return Ok(out);
        }
        let mut i = 0usize;
        while out.len() < target_length {
            let idx = n - 1 - (i % n);
            out.push(signal[idx]);
            i += 1;
        }
        Ok(out)
    }
}

/// Pads by reflecting about the last sample without repeating it:
/// `..., s[n-3], s[n-2], s[n-1], s[n-2], s[n-3], ...` (half-sample
/// symmetric extension).
#[derive(Debug, Default, Copy, Clone)]
pub struct ReflectPad;

impl PaddingStrategy for ReflectPad {
    fn pad(&self, signal: &[f64], target_length: usize) -> Result<Vec<f64>> {
        check_target(signal, target_length)?;
        let n = signal.len();
        let mut out = Vec::with_capacity(target_length);
        out.extend_from_slice(signal);
        if n == 1 {
            out.resize(target_length, signal[0]);
            return Ok(out);
        }
        if n == 0 {
            out.resize(target_length, 0.0);
            return Ok(out);
        }
        let period = 2 * (n - 1);
        let mut i = 0usize;
        while out.len() < target_length {
            let pos = (i + 1) % period;
            let idx = if pos < n { n - 1 - pos } else { pos - (n - 1) };
            out.push(signal[idx]);
            i += 1;
        }
        Ok(out)
    }
}

/// Pads by repeating the signal periodically.
#[derive(Debug, Default, Copy, Clone)]
pub struct PeriodicPad;

impl PaddingStrategy for PeriodicPad {
    fn pad(&self, signal: &[f64], target_length: usize) -> Result<Vec<f64>> {
        check_target(signal, target_length)?;
        let n = signal.len();
        if n == 0 {
            return Ok(vec![0.0; target_length]);
        }
        Ok((0..target_length).map(|i| signal[i % n]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pad_appends_zeros() {
        let out = ZeroPad.pad(&[1.0, 2.0, 3.0], 5).unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn periodic_pad_wraps() {
        let out = PeriodicPad.pad(&[1.0, 2.0, 3.0], 7).unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn symmetric_pad_mirrors_last_sample() {
        let out = SymmetricPad.pad(&[1.0, 2.0, 3.0], 5).unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0, 3.0, 2.0]);
    }

    #[test]
    fn reflect_pad_does_not_repeat_edge() {
        let out = ReflectPad.pad(&[1.0, 2.0, 3.0, 4.0], 6).unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0, 3.0, 2.0]);
    }

    #[test]
    fn trim_truncates_back_to_original_length() {
        let padded = ZeroPad.pad(&[1.0, 2.0, 3.0], 8).unwrap();
        let trimmed = ZeroPad.trim(&padded, 3).unwrap();
        assert_eq!(trimmed, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn pad_rejects_target_shorter_than_input() {
        assert!(ZeroPad.pad(&[1.0, 2.0, 3.0], 2).is_err());
    }
}

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
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Errors that can occur while validating, transforming, or reconstructing
/// signals with the wavelet core.
#[derive(Debug, Clone, PartialEq)]
pub enum RippletError {
    /// Indicates a failure to allocate the memory required for the resulting vector.
    /// The associated value is the requested size (`usize`) of the allocation.
    Allocation(usize),
    /// Signal is null/empty, contains a non-finite value, has the wrong length
    /// for the requested operation, or coefficient arrays have mismatched length.
    InvalidSignal(String),
    /// An argument is out of its valid range: a decomposition level outside
    /// `1..=L_max`, a non-positive padded length, a negative threshold, or an
    /// unknown wavelet order for an otherwise-known family.
    InvalidArgument(String),
    /// The requested configuration cannot be honored by this engine: an
    /// unsupported boundary mode, or a non-discrete wavelet passed to a
    /// DWT/MODWT engine.
    InvalidConfiguration(String),
    /// A recognized but not-yet-implemented variant (a reserved boundary
    /// mode, or a catalog entry that is named but not shipped).
    Unsupported(String),
    /// A wavelet identifier that is not in the catalog at all. Distinct from
    /// `InvalidArgument`: the identifier is well-formed, it simply has no
    /// table behind it (yet).
    NotImplemented(String),
    /// An assertion failure or kernel postcondition violation. Should not be
    /// observable outside of a debug build; propagated here so release
    /// builds fail loudly instead of returning silently wrong coefficients.
    Internal(String),
}

impl Display for RippletError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RippletError::Allocation(size) => {
                f.write_fmt(format_args!("Failed to allocate buffer with size {size}"))
            }
            RippletError::InvalidSignal(msg) => {
                f.write_fmt(format_args!("invalid signal: {msg}"))
            }
            RippletError::InvalidArgument(msg) => {
                f.write_fmt(format_args!("invalid argument: {msg}"))
            }
            RippletError::InvalidConfiguration(msg) => {
                f.write_fmt(format_args!("invalid configuration: {msg}"))
            }
            RippletError::Unsupported(msg) => f.write_fmt(format_args!("unsupported: {msg}")),
            RippletError::NotImplemented(msg) => {
                f.write_fmt(format_args!("not implemented: {msg}"))
            }
            RippletError::Internal(msg) => f.write_fmt(format_args!("internal error: {msg}")),
        }
    }
}

impl Error for RippletError {}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::RippletError::Allocation($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;

pub type Result<T> = std::result::Result<T, RippletError>;

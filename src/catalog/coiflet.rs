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
//! Coiflet filters `coifN`, `6N` taps. Coefficients per Daubechies (1992) /
//! Percival & Walden (2000). coif1 and coif2 carry [`Provenance::Verified`];
//! coif3 carries [`Provenance::Literature`].
//!
//! coif4 and above are not shipped (see `DESIGN.md` for the rationale).

use super::{Provenance, WaveletDescriptor};

const COIF1: [f64; 6] = [
    -0.0156557285289848,
    -0.0727326213410511,
    0.3848648565381134,
    0.8525720416423900,
    0.3378976709511590,
    -0.0727322757411889,
];

const COIF2: [f64; 12] = [
    0.0011945726958388,
    -0.0016290733601404,
    -0.0189155298252868,
    0.0211018340249299,
    0.0997835515523118,
    -0.0975016055873225,
    -0.2262646939654400,
    0.3152503517091982,
    0.7511339080210959,
    0.4946238903984533,
    0.1115407433501095,
    -0.0315820393174862,
];

const COIF3: [f64; 18] = [
    -0.0001784985003088,
    -0.0003127594700143,
    0.0030931751602779,
    0.0062389059232247,
    -0.0125807519990155,
    -0.0317823473442693,
    0.0060525596488888,
    0.0960996604160894,
    -0.0017819903418860,
    -0.2536320510612666,
    -0.1959462743765967,
    0.6356914765913154,
    0.6649345871414450,
    0.2018553685606529,
    -0.0734214319849743,
    -0.0420264804608950,
    0.0174412550868558,
    0.0039678836137164,
];

pub(super) fn lookup(name: &str) -> Option<WaveletDescriptor> {
    let (order, table, provenance): (u32, &[f64], Provenance) = match name {
        "coif1" => (1, &COIF1, Provenance::Verified),
        "coif2" => (2, &COIF2, Provenance::Verified),
        "coif3" => (3, &COIF3, Provenance::Literature),
        _ => return None,
    };
    Some(WaveletDescriptor::new_orthogonal(
        leak(name),
        "coiflet",
        order,
        2 * order,
        provenance,
        table.to_vec(),
    ))
}

fn leak(name: &str) -> &'static str {
    match name {
        "coif1" => "coif1",
        "coif2" => "coif2",
        "coif3" => "coif3",
        other => unreachable!("unhandled coiflet name {other}"),
    }
}

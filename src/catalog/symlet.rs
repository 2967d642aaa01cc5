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
//! Symlet filters `symN`. For `N = 2, 3` the least-asymmetric solution
//! coincides with the Daubechies filter of the same order, so those two
//! tables are shared verbatim with [`super::daubechies`]. sym4 and sym8
//! carry [`Provenance::Verified`]; sym5/6/7 carry [`Provenance::Literature`].
//!
//! sym10, sym12, sym15, and sym20 are not shipped (see `DESIGN.md` for the
//! rationale, including the sym15/sym20 coefficient-table dispute).

use super::{Provenance, WaveletDescriptor};

const SYM2: [f64; 4] = [
    0.4829629131445341,
    0.8365163037378079,
    0.2241438680420134,
    -0.1294095225512604,
];

const SYM3: [f64; 6] = [
    0.3326705529500826,
    0.8068915093110928,
    0.4598775021184915,
    -0.1350110200102546,
    -0.0854412738820267,
    0.0352262918857095,
];

const SYM4: [f64; 8] = [
    -0.0757657147893567,
    -0.0296355276459604,
    0.4976186676324578,
    0.8037387518052163,
    0.2978577956055422,
    -0.0992195435769354,
    -0.0126039672622612,
    0.0322231006040713,
];

const SYM5: [f64; 10] = [
    0.0273330683450878,
    0.0295194909257774,
    -0.0391342493023830,
    0.1993975339773936,
    0.7234076904024206,
    0.6339789634582119,
    0.0166021057645223,
    -0.1753280899084505,
    -0.0211018340247589,
    0.0195388827352867,
];

const SYM6: [f64; 12] = [
    0.0154041093270274,
    0.0034907120842175,
    -0.1179901111481906,
    -0.0483117425856330,
    0.4910559419267466,
    0.7876411410301942,
    0.3379294217276218,
    -0.0726375227864625,
    -0.0210602925123006,
    0.0447249017706658,
    0.0017677118642428,
    -0.0078007083250341,
];

const SYM7: [f64; 14] = [
    0.0026818145682579,
    -0.0010473848886829,
    -0.0126363034032519,
    0.0305155131659636,
    0.0678926935013727,
    -0.0495528349371273,
    0.0174412550868558,
    0.5361019170917628,
    0.7677643170031640,
    0.2886296317515146,
    -0.1400472404429615,
    -0.1078082377038177,
    0.0040102448715337,
    0.0102681767085113,
];

const SYM8: [f64; 16] = [
    -0.0033824159510061,
    -0.0005421323317912,
    0.0316950878103452,
    0.0076074873249036,
    -0.1432942383510542,
    -0.0612733590679088,
    0.4813596512592012,
    0.7771857516997478,
    0.3644418948353314,
    -0.0519458381078751,
    -0.0272190299168137,
    0.0491371796734768,
    0.0038087520140601,
    -0.0149522583367926,
    -0.0003029205145516,
    0.0018899503327594,
];

pub(super) fn lookup(name: &str) -> Option<WaveletDescriptor> {
    let (order, table, provenance): (u32, &[f64], Provenance) = match name {
        "sym2" => (2, &SYM2, Provenance::Verified),
        "sym3" => (3, &SYM3, Provenance::Verified),
        "sym4" => (4, &SYM4, Provenance::Verified),
        "sym5" => (5, &SYM5, Provenance::Literature),
        "sym6" => (6, &SYM6, Provenance::Literature),
        "sym7" => (7, &SYM7, Provenance::Literature),
        "sym8" => (8, &SYM8, Provenance::Verified),
        _ => return None,
    };
    Some(WaveletDescriptor::new_orthogonal(
        leak(name),
        "symlet",
        order,
        order,
        provenance,
        table.to_vec(),
    ))
}

fn leak(name: &str) -> &'static str {
    match name {
        "sym2" => "sym2",
        "sym3" => "sym3",
        "sym4" => "sym4",
        "sym5" => "sym5",
        "sym6" => "sym6",
        "sym7" => "sym7",
        "sym8" => "sym8",
        other => unreachable!("unhandled symlet name {other}"),
    }
}

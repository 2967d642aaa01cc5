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
//! Daubechies filters `dbN`, `N` vanishing moments, `2N` taps. Coefficients
//! per Daubechies (1992) / Percival & Walden (2000). db2/db3/db4/db6/db8
//! carry [`Provenance::Verified`]; db10 carries [`Provenance::Literature`].
//!
//! db12 and above are not shipped (see `DESIGN.md` for the rationale).

use super::{Provenance, WaveletDescriptor};

const DB2: [f64; 4] = [
    0.4829629131445341,
    0.8365163037378079,
    0.2241438680420134,
    -0.1294095225512604,
];

const DB3: [f64; 6] = [
    0.3326705529500826,
    0.8068915093110928,
    0.4598775021184915,
    -0.1350110200102546,
    -0.0854412738820267,
    0.0352262918857095,
];

const DB4: [f64; 8] = [
    0.2303778133088965,
    0.7148465705529157,
    0.6308807679298589,
    -0.0279837694168599,
    -0.1870348117190931,
    0.0308413818355607,
    0.0328830116668852,
    -0.0105974017850690,
];

const DB6: [f64; 12] = [
    0.1115407433501095,
    0.4946238903984533,
    0.7511339080210959,
    0.3152503517091982,
    -0.2262646939654400,
    -0.1297668675672625,
    0.0975016055873225,
    0.0275228655303053,
    -0.0315820393174862,
    0.0005538422011614,
    0.0047772575109455,
    -0.0010773010853085,
];

const DB8: [f64; 16] = [
    0.0544158422431049,
    0.3128715909143031,
    0.6756307362972904,
    0.5853546836541907,
    -0.0158291052563816,
    -0.2840155429615702,
    0.0004724845739124,
    0.1287474266204837,
    -0.0173693010018083,
    -0.0440882539307952,
    0.0139810279173995,
    0.0087460940474061,
    -0.0048703529934518,
    -0.0003917403733770,
    0.0006754494064506,
    -0.0001174767841248,
];

const DB10: [f64; 20] = [
    0.0266700579005473,
    0.1881768000776347,
    0.5272011889309198,
    0.6884590394535390,
    0.2811723436423678,
    -0.2498464243272283,
    -0.1959462743773278,
    0.1273693403357541,
    0.0930573646035547,
    -0.0713941471659618,
    -0.0294575368218399,
    0.0332126740593612,
    0.0036065535669870,
    -0.0107331754829495,
    0.0013953517469940,
    0.0019924052949908,
    -0.0006858566950046,
    -0.0001164668551285,
    0.0000935886703202,
    -0.0000132642028945,
];

pub(super) fn lookup(name: &str) -> Option<WaveletDescriptor> {
    let (order, table, provenance): (u32, &[f64], Provenance) = match name {
        "db2" => (2, &DB2, Provenance::Verified),
        "db3" => (3, &DB3, Provenance::Verified),
        "db4" => (4, &DB4, Provenance::Verified),
        "db6" => (6, &DB6, Provenance::Verified),
        "db8" => (8, &DB8, Provenance::Verified),
        "db10" => (10, &DB10, Provenance::Literature),
        _ => return None,
    };
    Some(WaveletDescriptor::new_orthogonal(
        leak(name),
        "daubechies",
        order,
        order,
        provenance,
        table.to_vec(),
    ))
}

/// Catalog names are a closed, small set; interning them as `&'static str`
/// keeps [`WaveletDescriptor`] copy-cheap without reaching for `String`.
fn leak(name: &str) -> &'static str {
    match name {
        "db2" => "db2",
        "db3" => "db3",
        "db4" => "db4",
        "db6" => "db6",
        "db8" => "db8",
        "db10" => "db10",
        other => unreachable!("unhandled daubechies name {other}"),
    }
}

#![allow(non_upper_case_globals)]

//! Physical constants and the fixed scale factors used to bring human-friendly
//! input units into SI.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// One nanometer (m).
pub const NANOMETER: f64 = 1e-9;

/// One picometer (m).
pub const PICOMETER: f64 = 1e-12;

/// One femtosecond (s).
pub const FEMTOSECOND: f64 = 1e-15;

/// One attosecond (s).
pub const ATTOSECOND: f64 = 1e-18;

/// One electron-volt (J).
pub const ELECTRONVOLT: f64 = e;

/// Free-particle wavenumber (m^-1) of an electron with kinetic energy `energy`
/// (J).
///
/// ```text
/// k = √(2 mₑ E) / ħ
/// ```
pub fn electron_wavenumber(energy: f64) -> f64 {
    (2.0 * me * energy).sqrt() / hbar
}

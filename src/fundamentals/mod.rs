//! Fundamental arguments of the IERS Conventions (2003)
//!
//! The five Delaunay arguments (l, l', F, D, Omega), the mean longitudes of
//! the eight planets and the general precession in longitude. Every series in
//! the crate is phased by integer combinations of these angles. Index order
//! is fixed:
//!
//! | index | argument |
//! |-------|----------|
//! | 0..=4 | l, l', F, D, Omega |
//! | 5..=12 | Mercury .. Neptune |
//! | 13 | general precession p_A |

use crate::constants::{ASEC2RAD, TAU, TURNAS};

/// Number of fundamental arguments in a full series row
pub const N_ARGS: usize = 14;

/// Delaunay polynomial coefficients
///
/// Each row: [constant, t^1, t^2, t^3, t^4] in arcseconds
/// From IERS Conventions (2003), Chapter 5
#[rustfmt::skip]
const DELAUNAY_COEFFS: [[f64; 5]; 5] = [
    // Mean Anomaly of the Moon (l)
    [485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.00024470],
    // Mean Anomaly of the Sun (l')
    [1287104.793048, 129596581.0481, -0.5532, 0.000136, -0.00001149],
    // Mean Longitude of Moon - Ascending Node (F)
    [335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417],
    // Mean Elongation of Moon from Sun (D)
    [1072260.703692, 1602961601.2090, -6.3706, 0.006593, -0.00003169],
    // Mean Longitude of Ascending Node of Moon (Omega)
    [450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939],
];

/// Planetary mean longitudes [constant, rate] in radians, Mercury through Neptune
/// From Souchay et al. (1999) and IERS Conventions (2003)
const PLANET_LONGITUDES: [[f64; 2]; 8] = [
    [4.402608842, 2608.7903141574],
    [3.176146697, 1021.3285546211],
    [1.753470314, 628.3075849991],
    [6.203480913, 334.0612426700],
    [0.599546497, 52.9690962641],
    [0.874016757, 21.3299104960],
    [5.481293872, 7.4781598567],
    [5.311886287, 3.8133035638],
];

/// Compute the five Delaunay arguments in radians, each reduced to one turn
///
/// # Arguments
/// * `t` - TT time in Julian centuries since J2000.0
pub fn delaunay_arguments(t: f64) -> [f64; 5] {
    let mut fa = [0.0f64; 5];
    for (i, coeffs) in DELAUNAY_COEFFS.iter().enumerate() {
        let val = coeffs[0] + (coeffs[1] + (coeffs[2] + (coeffs[3] + coeffs[4] * t) * t) * t) * t;
        fa[i] = (val % TURNAS) * ASEC2RAD;
    }
    fa
}

/// Mean longitudes of Mercury through Neptune in radians
pub fn planetary_longitudes(t: f64) -> [f64; 8] {
    let mut fa = [0.0f64; 8];
    for (i, [a0, a1]) in PLANET_LONGITUDES.iter().enumerate() {
        fa[i] = (a0 + a1 * t) % TAU;
    }
    fa
}

/// General accumulated precession in longitude in radians
pub fn general_precession(t: f64) -> f64 {
    (0.024381750 + 0.00000538691 * t) * t
}

/// All fourteen IERS 2003 fundamental arguments
pub fn fundamental_arguments(t: f64) -> [f64; N_ARGS] {
    let mut fa = [0.0f64; N_ARGS];
    fa[..5].copy_from_slice(&delaunay_arguments(t));
    fa[5..13].copy_from_slice(&planetary_longitudes(t));
    fa[13] = general_precession(t);
    fa
}

//! Earth rotation angle, sidereal time and the TIO locator
//!
//! Implements the Earth Rotation Angle (ERA) per IAU 2000 Resolution B1.8,
//! Greenwich Mean Sidereal Time for the IAU 2000 and IAU 2006 precession
//! models (IERS Conventions 2010, eqs. 5.32 and 5.30), and the TIO locator
//! s' (eq. 5.13).

use crate::constants::{ASEC2RAD, DAY_S, ERA_RATE, J2000, TAU};
use crate::nutationlib::{equation_of_the_equinoxes, PrecessionNutationModel};

/// Rate of the Earth rotation angle with respect to UT1, radians per second
pub const ERA_RATE_RAD_PER_S: f64 = TAU * ERA_RATE / DAY_S;

/// Compute the Earth Rotation Angle (ERA) for a UT1 date
///
/// Uses the expression from IAU Resolution B1.8 of 2000.
/// Returns a fraction between 0.0 and 1.0 representing whole rotations.
///
/// # Arguments
/// * `jd_ut1` - UT1 Julian date (whole part)
/// * `fraction_ut1` - UT1 Julian date (fractional part)
pub fn earth_rotation_angle(jd_ut1: f64, fraction_ut1: f64) -> f64 {
    let th = 0.7790572732640 + 0.00273781191135448 * (jd_ut1 - J2000 + fraction_ut1);
    // Both date parts are reduced to one turn before summing
    (th.rem_euclid(1.0) + jd_ut1.rem_euclid(1.0) + fraction_ut1.rem_euclid(1.0)).rem_euclid(1.0)
}

/// Earth Rotation Angle in radians, in [0, 2pi)
pub fn earth_rotation_angle_radians(jd_ut1: f64, fraction_ut1: f64) -> f64 {
    (earth_rotation_angle(jd_ut1, fraction_ut1) * TAU).rem_euclid(TAU)
}

/// Compute Greenwich Mean Sidereal Time in radians, in [0, 2pi)
///
/// GMST = ERA + precession in right ascension, with the polynomial of the
/// selected precession model.
///
/// # Arguments
/// * `model` - precession-nutation model
/// * `jd_ut1` - UT1 Julian date (whole part) for ERA
/// * `fraction_ut1` - UT1 Julian date (fractional part) for ERA
/// * `tt_centuries` - TT time in Julian centuries since J2000.0
pub fn greenwich_mean_sidereal_time(
    model: PrecessionNutationModel,
    jd_ut1: f64,
    fraction_ut1: f64,
    tt_centuries: f64,
) -> f64 {
    let theta = earth_rotation_angle_radians(jd_ut1, fraction_ut1);
    let t = tt_centuries;
    let st = match model {
        PrecessionNutationModel::Iau2006 => {
            0.014506
                + (((((-0.0000000368 * t - 0.000029956) * t - 0.00000044) * t + 1.3915817) * t
                    + 4612.156534)
                    * t)
        }
        PrecessionNutationModel::Iau2000 => {
            0.014506
                + ((((0.00001882 * t - 0.00009344) * t + 1.39667721) * t + 4612.15739966) * t)
        }
    };
    (theta + st * ASEC2RAD).rem_euclid(TAU)
}

/// Greenwich Apparent Sidereal Time in radians, in [0, 2pi)
///
/// # Arguments
/// * `gmst` - Greenwich mean sidereal time in radians
/// * `t` - TT time in Julian centuries since J2000.0
/// * `dpsi` - nutation in longitude in radians
/// * `eps_a` - mean obliquity of date in radians
pub fn greenwich_apparent_sidereal_time(gmst: f64, t: f64, dpsi: f64, eps_a: f64) -> f64 {
    (gmst + equation_of_the_equinoxes(t, dpsi, eps_a)).rem_euclid(TAU)
}

/// TIO locator s' in radians
///
/// # Arguments
/// * `t` - TT time in Julian centuries since J2000.0
pub fn tio_locator(t: f64) -> f64 {
    -47e-6 * t * ASEC2RAD
}

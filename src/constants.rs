//! Astronomical and unit constants shared across the crate

use std::f64::consts::PI;

/// Full turn in radians
pub const TAU: f64 = std::f64::consts::TAU;

/// Arcseconds to radians
pub const ASEC2RAD: f64 = PI / 648000.0;

/// Radians to arcseconds
pub const RAD2ASEC: f64 = 648000.0 / PI;

/// Microarcseconds to radians
pub const UASEC2RAD: f64 = ASEC2RAD / 1e6;

/// Arcseconds in a full circle
pub const TURNAS: f64 = 1296000.0;

/// Julian date of J2000.0
pub const J2000: f64 = 2451545.0;

/// Modified Julian date of J2000.0
pub const MJD_J2000: f64 = 51544.5;

/// Offset between Julian and Modified Julian dates
pub const MJD_OFFSET: f64 = 2400000.5;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Seconds per day
pub const DAY_S: f64 = 86400.0;

/// TT - TAI in seconds
pub const TT_MINUS_TAI: f64 = 32.184;

/// Ratio of universal to sidereal time used by the ERA expression
pub const ERA_RATE: f64 = 1.00273781191135448;

//! Epoch representation and time-scale conversion
//!
//! An [`Epoch`] is split into an integer Modified Julian Day, whole seconds of
//! day and a fractional second, so that sub-microsecond resolution survives
//! over decades. Conversion between TT, TAI, GPS and UTC goes through TAI;
//! the UTC leg needs a [`LeapSeconds`] source.

mod leap_seconds;

pub use self::leap_seconds::{LeapSecondTable, LeapSeconds};

use crate::constants::{DAYS_PER_CENTURY, DAY_S, MJD_OFFSET, TT_MINUS_TAI};

/// GPS time lags TAI by a fixed 19 seconds
const TAI_MINUS_GPS: f64 = 19.0;

/// Time scales understood by [`Epoch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeScale {
    TT,
    TAI,
    GPS,
    UTC,
    UT1,
}

/// An instant expressed as (MJD, seconds of day, fractional second) in a time scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epoch {
    mjd: i32,
    sod: i32,
    fsec: f64,
    scale: TimeScale,
}

impl Epoch {
    /// Create an epoch, normalising seconds into `[0, 86400)` and the
    /// fractional second into `[0, 1)`
    pub fn new(mjd: i32, sod: i32, fsec: f64, scale: TimeScale) -> Self {
        let whole = fsec.floor();
        let mut fsec = fsec - whole;
        let mut sod = i64::from(sod) + whole as i64;
        if fsec >= 1.0 {
            fsec -= 1.0;
            sod += 1;
        }
        let day_shift = sod.div_euclid(86400);
        sod = sod.rem_euclid(86400);
        Self {
            mjd: mjd + day_shift as i32,
            sod: sod as i32,
            fsec,
            scale,
        }
    }

    /// Create an epoch from a floating Modified Julian Date
    pub fn from_mjd(mjd: f64, scale: TimeScale) -> Self {
        let day = mjd.floor();
        let seconds = (mjd - day) * DAY_S;
        let sod = seconds.floor();
        Self::new(day as i32, sod as i32, seconds - sod, scale)
    }

    /// Create a TT epoch from a floating Modified Julian Date
    pub fn tt_mjd(mjd: f64) -> Self {
        Self::from_mjd(mjd, TimeScale::TT)
    }

    /// Create an epoch from a calendar date and time of day
    pub fn from_calendar(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
        scale: TimeScale,
    ) -> Self {
        let jd_noon = julian_day_number(year, month, day);
        let mjd = jd_noon - 2400001;
        Self::new(mjd, hour * 3600 + minute * 60, second, scale)
    }

    pub fn mjd(&self) -> i32 {
        self.mjd
    }

    pub fn sod(&self) -> i32 {
        self.sod
    }

    pub fn fsec(&self) -> f64 {
        self.fsec
    }

    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    /// Seconds elapsed since the start of the day, including the fraction
    pub fn seconds_of_day(&self) -> f64 {
        f64::from(self.sod) + self.fsec
    }

    /// Fraction of the day in `[0, 1)`
    pub fn day_fraction(&self) -> f64 {
        self.seconds_of_day() / DAY_S
    }

    /// Modified Julian Date as a single float
    pub fn mjd_f64(&self) -> f64 {
        f64::from(self.mjd) + self.day_fraction()
    }

    /// Julian Date as (whole, fraction) for precision-sensitive callers
    pub fn jd_parts(&self) -> (f64, f64) {
        (f64::from(self.mjd) + MJD_OFFSET, self.day_fraction())
    }

    /// Julian centuries elapsed since J2000.0 in this epoch's own scale
    pub fn julian_centuries(&self) -> f64 {
        let days = f64::from(self.mjd - 51544) - 0.5 + self.day_fraction();
        days / DAYS_PER_CENTURY
    }

    /// Elapsed days `self - other`
    ///
    /// Both epochs are expected to be in the same time scale.
    pub fn days_since(&self, other: &Epoch) -> f64 {
        debug_assert_eq!(self.scale, other.scale, "epoch subtraction across time scales");
        let whole_days = f64::from(self.mjd - other.mjd);
        let seconds = f64::from(self.sod - other.sod) + (self.fsec - other.fsec);
        whole_days + seconds / DAY_S
    }

    /// Shift by a real number of days
    pub fn add_days(&self, days: f64) -> Self {
        let whole = days.trunc();
        let seconds = (days - whole) * DAY_S;
        let sec_whole = seconds.trunc();
        Self::new(
            self.mjd + whole as i32,
            self.sod + sec_whole as i32,
            self.fsec + (seconds - sec_whole),
            self.scale,
        )
    }

    /// Shift by a real number of seconds
    pub fn add_seconds(&self, seconds: f64) -> Self {
        let whole = seconds.trunc();
        let extra_days = (whole / DAY_S).trunc();
        let rest = whole - extra_days * DAY_S;
        Self::new(
            self.mjd + extra_days as i32,
            self.sod + rest as i32,
            self.fsec + (seconds - whole),
            self.scale,
        )
    }

    /// Relabel the same numeric reading with another scale
    fn relabel(&self, scale: TimeScale) -> Self {
        Self { scale, ..*self }
    }

    /// Convert to TAI
    ///
    /// UT1 has no fixed relation to TAI; a UT1 reading is passed through
    /// unchanged. Use [`Epoch::from_tai_with_ut1_offset`] with EOP data instead.
    pub fn to_tai(&self, leaps: &dyn LeapSeconds) -> Self {
        match self.scale {
            TimeScale::TAI | TimeScale::UT1 => self.relabel(TimeScale::TAI),
            TimeScale::TT => self.add_seconds(-TT_MINUS_TAI).relabel(TimeScale::TAI),
            TimeScale::GPS => self.add_seconds(TAI_MINUS_GPS).relabel(TimeScale::TAI),
            TimeScale::UTC => {
                let dat = leaps.tai_minus_utc(self.mjd_f64());
                self.add_seconds(dat).relabel(TimeScale::TAI)
            }
        }
    }

    /// Convert to the requested scale (UT1 excluded, see [`Epoch::from_tai_with_ut1_offset`])
    pub fn to_scale(&self, target: TimeScale, leaps: &dyn LeapSeconds) -> Self {
        if self.scale == target {
            return *self;
        }
        let tai = self.to_tai(leaps);
        match target {
            TimeScale::TAI | TimeScale::UT1 => tai,
            TimeScale::TT => tai.add_seconds(TT_MINUS_TAI).relabel(TimeScale::TT),
            TimeScale::GPS => tai.add_seconds(-TAI_MINUS_GPS).relabel(TimeScale::GPS),
            TimeScale::UTC => {
                // The step is keyed by the UTC date, so refine once from the TAI guess
                let guess = tai.add_seconds(-leaps.tai_minus_utc(tai.mjd_f64()));
                let dat = leaps.tai_minus_utc(guess.mjd_f64());
                tai.add_seconds(-dat).relabel(TimeScale::UTC)
            }
        }
    }

    /// UT1 epoch from a TAI epoch and UT1-TAI in seconds
    pub fn from_tai_with_ut1_offset(tai: &Epoch, ut1_minus_tai: f64) -> Self {
        tai.add_seconds(ut1_minus_tai).relabel(TimeScale::UT1)
    }
}

/// Julian day number at noon of a proleptic Gregorian date
fn julian_day_number(year: i32, month: i32, day: i32) -> i32 {
    let janfeb = month < 3;
    1461 * (year + 4800 - if janfeb { 1 } else { 0 }) / 4
        + 367 * (month - 2 + if janfeb { 12 } else { 0 }) / 12
        - 3 * ((year + 4900 - if janfeb { 1 } else { 0 }) / 100) / 4
        - 32075
        + day
}

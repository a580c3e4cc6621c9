//! Leap-second (TAI - UTC) lookup

/// Source of TAI - UTC offsets
pub trait LeapSeconds {
    /// TAI - UTC in seconds in effect at the given UTC Modified Julian Date
    fn tai_minus_utc(&self, utc_mjd: f64) -> f64;
}

/// Step table of (first UTC MJD, TAI - UTC seconds)
#[derive(Debug, Clone)]
pub struct LeapSecondTable {
    steps: Vec<(i32, f64)>,
}

/// IERS Bulletin C leap-second history since 1972
#[rustfmt::skip]
const IERS_STEPS: [(i32, f64); 28] = [
    (41317, 10.0), (41499, 11.0), (41683, 12.0), (42048, 13.0), (42413, 14.0),
    (42778, 15.0), (43144, 16.0), (43509, 17.0), (43874, 18.0), (44239, 19.0),
    (44786, 20.0), (45151, 21.0), (45516, 22.0), (46247, 23.0), (47161, 24.0),
    (47892, 25.0), (48257, 26.0), (48804, 27.0), (49169, 28.0), (49534, 29.0),
    (50083, 30.0), (50630, 31.0), (51179, 32.0), (53736, 33.0), (54832, 34.0),
    (56109, 35.0), (57204, 36.0), (57754, 37.0),
];

impl LeapSecondTable {
    /// Build a table from (MJD, TAI-UTC) steps; the steps are sorted by date
    pub fn new(mut steps: Vec<(i32, f64)>) -> Self {
        steps.sort_by_key(|&(mjd, _)| mjd);
        Self { steps }
    }

    /// A table holding one offset for all dates
    pub fn constant(tai_minus_utc: f64) -> Self {
        Self {
            steps: vec![(i32::MIN, tai_minus_utc)],
        }
    }
}

impl Default for LeapSecondTable {
    fn default() -> Self {
        Self::new(IERS_STEPS.to_vec())
    }
}

impl LeapSeconds for LeapSecondTable {
    fn tai_minus_utc(&self, utc_mjd: f64) -> f64 {
        let day = utc_mjd.floor() as i32;
        // Before the first step the earliest offset is held flat
        match self.steps.partition_point(|&(mjd, _)| mjd <= day) {
            0 => self.steps.first().map_or(0.0, |&(_, dat)| dat),
            n => self.steps[n - 1].1,
        }
    }
}

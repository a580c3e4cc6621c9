//! Free core nutation (FCN) empirical model
//!
//! The FCN is a retrograde free mode of period about 430 days whose
//! amplitude varies irregularly and is tabulated from VLBI. Between table
//! epochs the amplitudes are interpolated linearly; outside the table the
//! nearest end value is held.

use std::path::Path;

use tracing::{debug, warn};

use crate::constants::{MJD_J2000, TAU, UASEC2RAD};
use crate::serieslib::read_table_file;
use crate::{EarthRotationError, Result};

/// FCN period in days (retrograde)
pub const FCN_PERIOD_DAYS: f64 = -430.21;

/// One row of the FCN amplitude table, amplitudes in microarcseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FcnRecord {
    pub mjd: f64,
    pub xc: f64,
    pub xs: f64,
    pub sigma_c: f64,
    pub sigma_s: f64,
}

/// FCN contribution to the celestial pole offsets, in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FcnCorrection {
    pub dx: f64,
    pub dy: f64,
    pub sigma_x: f64,
    pub sigma_y: f64,
}

/// Piecewise-linear FCN amplitude model
#[derive(Debug, Clone, Default)]
pub struct FcnModel {
    records: Vec<FcnRecord>,
}

impl FcnModel {
    /// Build from records in any order
    pub fn new(mut records: Vec<FcnRecord>) -> Self {
        records.sort_by(|a, b| a.mjd.total_cmp(&b.mjd));
        Self { records }
    }

    /// Parse rows of `MJD  XC  XS  sigma_XC  sigma_XS`
    ///
    /// Amplitudes in microarcseconds. Blank lines and lines starting with
    /// `#` are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut records = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let values = line
                .split_whitespace()
                .map(str::parse::<f64>)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| EarthRotationError::Parse {
                    line: idx + 1,
                    message: format!("bad FCN value: {e}"),
                })?;
            let [mjd, xc, xs, sigma_c, sigma_s] = values[..] else {
                return Err(EarthRotationError::Parse {
                    line: idx + 1,
                    message: format!("expected 5 columns, found {}", values.len()),
                });
            };
            records.push(FcnRecord {
                mjd,
                xc,
                xs,
                sigma_c,
                sigma_s,
            });
        }
        debug!(records = records.len(), "parsed FCN amplitude table");
        Ok(Self::new(records))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&read_table_file(path)?)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FcnRecord] {
        &self.records
    }

    /// Amplitudes (xc, xs, sigma_c, sigma_s) at a UTC or TT MJD
    fn amplitudes(&self, mjd: f64) -> [f64; 4] {
        let as_array = |r: &FcnRecord| [r.xc, r.xs, r.sigma_c, r.sigma_s];
        let (Some(first), Some(last)) = (self.records.first(), self.records.last()) else {
            return [0.0; 4];
        };
        if mjd <= first.mjd || mjd >= last.mjd {
            let end = if mjd <= first.mjd { first } else { last };
            if mjd != end.mjd {
                warn!(
                    mjd,
                    first = first.mjd,
                    last = last.mjd,
                    "FCN epoch outside the tabulated span, holding end amplitudes"
                );
            }
            return as_array(end);
        }
        let i = self.records.partition_point(|r| r.mjd <= mjd);
        let (a, b) = (&self.records[i - 1], &self.records[i]);
        let w = (mjd - a.mjd) / (b.mjd - a.mjd);
        let (va, vb) = (as_array(a), as_array(b));
        std::array::from_fn(|k| va[k] + (vb[k] - va[k]) * w)
    }

    /// FCN offsets and their predicted uncertainty at `mjd`
    pub fn evaluate(&self, mjd: f64) -> FcnCorrection {
        if self.records.is_empty() {
            return FcnCorrection::default();
        }
        let phi = TAU / FCN_PERIOD_DAYS * (mjd - MJD_J2000);
        let (s, c) = phi.sin_cos();
        let [xc, xs, sxc, sxs] = self.amplitudes(mjd);
        FcnCorrection {
            dx: (xc * c - xs * s) * UASEC2RAD,
            dy: (xs * c + xc * s) * UASEC2RAD,
            sigma_x: ((sxc * c).powi(2) + (sxs * s).powi(2)).sqrt() * UASEC2RAD,
            sigma_y: ((sxs * c).powi(2) + (sxc * s).powi(2)).sqrt() * UASEC2RAD,
        }
    }
}

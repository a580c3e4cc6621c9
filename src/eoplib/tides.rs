//! Tidal and libration corrections to polar motion and UT1
//!
//! Diurnal and semidiurnal variations (ocean tides and the libration of the
//! pole) are phased by (chi, l, l', F, D, Omega) with chi = GMST + pi.
//! Zonal tides act on UT1, LOD and the rotation rate and are phased by the
//! five Delaunay arguments alone.
//!
//! The libration terms of IERS Conventions (2010) Table 5.1a are built in.
//! Ocean tide and zonal tide tables are loaded with
//! [`parse_term_table`](crate::serieslib::parse_term_table):
//!
//! - ocean: `chi l l' F D Om  xp_s xp_c  yp_s yp_c  ut1_s ut1_c`
//!   in microarcseconds and microseconds
//! - zonal: `l l' F D Om  ut1_s ut1_c  lod_s lod_c  om_s om_c`
//!   in 1e-4 s, 1e-5 s and 1e-14 rad/s (the units of Table 8.1)

use std::f64::consts::PI;
use std::path::Path;

use tracing::debug;

use crate::constants::UASEC2RAD;
use crate::earthlib::greenwich_mean_sidereal_time;
use crate::fundamentals::delaunay_arguments;
use crate::nutationlib::PrecessionNutationModel;
use crate::serieslib::{parse_term_table, read_table_file, sum_terms, Term};
use crate::time::Epoch;
use crate::Result;

/// Diurnal libration in polar motion, IERS Conventions (2010) Table 5.1a
///
/// Arguments (chi, l, l', F, D, Omega); amplitudes (x sin, x cos), (y sin, y cos)
/// in microarcseconds.
#[rustfmt::skip]
pub const LIBRATION_TERMS: [Term<6, 2>; 10] = [
    Term::new([1, -1, 0, -2,  0, -1], [[ -0.4,  0.3], [ -0.3,  -0.4]]),
    Term::new([1, -1, 0, -2,  0, -2], [[ -2.3,  1.3], [ -1.3,  -2.3]]),
    Term::new([1,  1, 0, -2, -2, -2], [[ -0.4,  0.3], [ -0.3,  -0.4]]),
    Term::new([1,  0, 0, -2,  0, -1], [[ -2.1,  1.2], [ -1.2,  -2.1]]),
    Term::new([1,  0, 0, -2,  0, -2], [[-11.4,  6.5], [ -6.5, -11.4]]),
    Term::new([1, -1, 0,  0,  0,  0], [[  0.8, -0.5], [  0.5,   0.8]]),
    Term::new([1,  0, 0, -2,  2, -2], [[ -4.8,  2.7], [ -2.7,  -4.8]]),
    Term::new([1,  0, 0,  0,  0,  0], [[ 14.3, -8.2], [  8.2,  14.3]]),
    Term::new([1,  0, 0,  0,  0, -1], [[  1.9, -1.1], [  1.1,   1.9]]),
    Term::new([1,  1, 0,  0,  0,  0], [[  0.8, -0.4], [  0.4,   0.8]]),
];

/// Zonal table amplitude units: UT1 (s), LOD (s), Omega (rad/s)
const ZONAL_SCALE: [f64; 3] = [1e-4, 1e-5, 1e-14];

/// Ocean tide plus libration corrections to (xp, yp, UT1)
#[derive(Debug, Clone)]
pub struct DiurnalTideModel {
    model: PrecessionNutationModel,
    ocean: Vec<Term<6, 3>>,
}

impl DiurnalTideModel {
    /// Libration only, no ocean tide terms
    pub fn libration_only(model: PrecessionNutationModel) -> Self {
        Self::new(model, Vec::new())
    }

    pub fn new(model: PrecessionNutationModel, ocean: Vec<Term<6, 3>>) -> Self {
        Self { model, ocean }
    }

    /// Libration plus an ocean tide table read from `path`
    pub fn from_file(model: PrecessionNutationModel, path: impl AsRef<Path>) -> Result<Self> {
        let ocean = parse_term_table::<6, 3>(&read_table_file(path)?)?;
        debug!(terms = ocean.len(), "loaded ocean tide EOP terms");
        Ok(Self::new(model, ocean))
    }

    /// Model used for GMST in the tidal argument chi
    pub fn model(&self) -> PrecessionNutationModel {
        self.model
    }

    pub fn ocean_terms(&self) -> usize {
        self.ocean.len()
    }

    /// Tidal arguments (chi, l, l', F, D, Omega)
    ///
    /// GMST is evaluated with the TT reading standing in for UT1.
    pub fn arguments(&self, tt: &Epoch) -> [f64; 6] {
        let t = tt.julian_centuries();
        let (jd, frac) = tt.jd_parts();
        let chi = greenwich_mean_sidereal_time(self.model, jd, frac, t) + PI;
        let [l, lp, f, d, om] = delaunay_arguments(t);
        [chi, l, lp, f, d, om]
    }

    /// Corrections [dxp (rad), dyp (rad), dUT1 (s)] at a TT epoch
    pub fn evaluate(&self, tt: &Epoch) -> [f64; 3] {
        let args = self.arguments(tt);
        let [lib_x, lib_y] = sum_terms(&LIBRATION_TERMS, &args);
        let [ocean_x, ocean_y, ocean_ut1] = sum_terms(&self.ocean, &args);
        [
            (lib_x + ocean_x) * UASEC2RAD,
            (lib_y + ocean_y) * UASEC2RAD,
            ocean_ut1 * 1e-6,
        ]
    }
}

/// Zonal tide corrections to UT1, LOD and the rotation rate
#[derive(Debug, Clone, Default)]
pub struct ZonalTideModel {
    terms: Vec<Term<5, 3>>,
}

impl ZonalTideModel {
    pub fn new(terms: Vec<Term<5, 3>>) -> Self {
        Self { terms }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let terms = parse_term_table::<5, 3>(&read_table_file(path)?)?;
        debug!(terms = terms.len(), "loaded zonal tide terms");
        Ok(Self::new(terms))
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Corrections [dUT1 (s), dLOD (s), dOmega (rad/s)] at a TT epoch
    pub fn evaluate(&self, tt: &Epoch) -> [f64; 3] {
        let args = delaunay_arguments(tt.julian_centuries());
        let mut out = sum_terms(&self.terms, &args);
        for (v, s) in out.iter_mut().zip(ZONAL_SCALE) {
            *v *= s;
        }
        out
    }
}

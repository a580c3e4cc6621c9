//! Nutation, CIP coordinates and the CIO locator
//!
//! Implements nutation in longitude (delta-psi) and obliquity (delta-epsilon)
//! for the IAU 2000A model and its IAU 2006 adjustment, the mean obliquity of
//! the ecliptic, the nutation rotation matrix, the complementary terms of the
//! equation of the equinoxes, the CIP X/Y series, the CIO locator s and the
//! free core nutation model.
//!
//! The built-in nutation series holds the 77 leading lunisolar terms plus
//! the fixed planetary offsets of IAU 2000B. The full 1365-term IAU 2000A
//! series is read from the IERS tables (tab5.3a, tab5.3b) when configured.

mod cip;
mod fcn;
mod tables;

pub use self::cip::{CioLocator, CipResidual, CipSeries, CIP_POLYNOMIAL_2000, CIP_POLYNOMIAL_2006};
pub use self::fcn::{FcnCorrection, FcnModel, FcnRecord, FCN_PERIOD_DAYS};

use std::fmt;
use std::path::Path;

use nalgebra::Matrix3;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::cachelib::{Interpolation, WindowedCache};
use crate::constants::{ASEC2RAD, UASEC2RAD};
use crate::fundamentals::{delaunay_arguments, fundamental_arguments, N_ARGS};
use crate::precessionlib::FrameBuilder;
use crate::serieslib::{parse_iers_series, read_table_file, AmplitudeOrder, PoissonSeries, Term};
use crate::time::Epoch;
use crate::{EarthRotationError, Result};

/// Conversion factor from 0.1 microarcsecond to radians
const TENTH_USEC_2_RAD: f64 = ASEC2RAD / 1e7;

/// IAU 2000B planetary offset in longitude (rad)
const PLANETARY_DPSI: f64 = -0.135e-3 * ASEC2RAD;

/// IAU 2000B planetary offset in obliquity (rad)
const PLANETARY_DEPS: f64 = 0.388e-3 * ASEC2RAD;

/// Precession-nutation model family, fixed for the lifetime of a composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecessionNutationModel {
    /// IAU 2000 precession with IAU 2000A nutation
    Iau2000,
    /// IAU 2006 precession with the adjusted IAU 2000A nutation
    #[default]
    Iau2006,
}

impl fmt::Display for PrecessionNutationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecessionNutationModel::Iau2000 => write!(f, "IAU 2000"),
            PrecessionNutationModel::Iau2006 => write!(f, "IAU 2006"),
        }
    }
}

/// Source of the nutation series
#[derive(Debug, Clone)]
pub enum NutationSeries {
    /// 77 lunisolar terms over (l, l', F, D, Omega), planetary offsets added
    Truncated(PoissonSeries<5, 2>),
    /// Full lunisolar and planetary series over all fourteen arguments
    Full {
        psi: PoissonSeries<N_ARGS, 1>,
        eps: PoissonSeries<N_ARGS, 1>,
    },
}

impl NutationSeries {
    /// The built-in truncated series
    pub fn truncated() -> Self {
        NutationSeries::Truncated(PoissonSeries::from_static(
            &[&tables::LUNISOLAR[..], &tables::LUNISOLAR_RATES[..]],
            &[],
            TENTH_USEC_2_RAD,
        ))
    }

    /// Full series from parsed tiers, amplitudes in microarcseconds
    pub fn full(psi: Vec<Vec<Term<N_ARGS, 1>>>, eps: Vec<Vec<Term<N_ARGS, 1>>>) -> Self {
        NutationSeries::Full {
            psi: PoissonSeries::new(psi, Vec::new(), UASEC2RAD),
            eps: PoissonSeries::new(eps, Vec::new(), UASEC2RAD),
        }
    }

    /// Read the IERS nutation tables in longitude and obliquity
    pub fn from_files(psi_path: impl AsRef<Path>, eps_path: impl AsRef<Path>) -> Result<Self> {
        let psi = parse_iers_series(&read_table_file(psi_path)?, AmplitudeOrder::SinCos)?;
        let eps = parse_iers_series(&read_table_file(eps_path)?, AmplitudeOrder::SinCos)?;
        Ok(Self::full(psi, eps))
    }

    pub fn term_count(&self) -> usize {
        match self {
            NutationSeries::Truncated(s) => s.term_count(),
            NutationSeries::Full { psi, eps } => psi.term_count() + eps.term_count(),
        }
    }

    /// IAU 2000A nutation angles (dpsi, deps) in radians
    ///
    /// # Arguments
    /// * `t` - TT time in Julian centuries since J2000.0
    pub fn evaluate(&self, t: f64) -> (f64, f64) {
        match self {
            NutationSeries::Truncated(series) => {
                let [dpsi, deps] = series.evaluate(t, &delaunay_arguments(t));
                (dpsi + PLANETARY_DPSI, deps + PLANETARY_DEPS)
            }
            NutationSeries::Full { psi, eps } => {
                let fa = fundamental_arguments(t);
                let [dpsi] = psi.evaluate(t, &fa);
                let [deps] = eps.evaluate(t, &fa);
                (dpsi, deps)
            }
        }
    }
}

/// Adjust IAU 2000A nutation for use with IAU 2006 precession
///
/// IERS Conventions (2010), Section 5.6.3.
pub fn iau2006_adjustment(t: f64, dpsi: f64, deps: f64) -> (f64, f64) {
    let fj2 = -2.7774e-6 * t;
    (dpsi * (1.0 + 0.4697e-6 + fj2), deps * (1.0 + fj2))
}

/// Nutation angles, CIP coordinates and the CIO locator for one model
///
/// The nutation angles are cached over a quadratic window.
#[derive(Debug, Clone)]
pub struct NutationEvaluator {
    model: PrecessionNutationModel,
    series: NutationSeries,
    cip: CipSeries,
    residual: CipResidual,
    cio: CioLocator,
    cache: WindowedCache<2>,
}

impl NutationEvaluator {
    pub fn new(model: PrecessionNutationModel, series: NutationSeries, half_step_days: f64) -> Result<Self> {
        Ok(Self {
            model,
            series,
            cip: CipSeries::polynomial_only(model),
            residual: CipResidual::empty(),
            cio: CioLocator::new(model),
            cache: WindowedCache::new("nutation", Interpolation::Quadratic, half_step_days)?,
        })
    }

    /// Use a full CIP X/Y series and a residual series
    pub fn with_cip(mut self, cip: CipSeries, residual: CipResidual) -> Result<Self> {
        if cip.model() != self.model {
            return Err(EarthRotationError::Configuration(format!(
                "CIP series built for {} used with {}",
                cip.model(),
                self.model
            )));
        }
        self.cip = cip;
        self.residual = residual;
        Ok(self)
    }

    pub fn model(&self) -> PrecessionNutationModel {
        self.model
    }

    pub fn cip_series(&self) -> &CipSeries {
        &self.cip
    }

    pub fn series(&self) -> &NutationSeries {
        &self.series
    }

    /// Nutation angles at `t` without caching, model adjustment applied
    pub fn angles_at(&self, t: f64) -> (f64, f64) {
        let (dpsi, deps) = self.series.evaluate(t);
        match self.model {
            PrecessionNutationModel::Iau2000 => (dpsi, deps),
            PrecessionNutationModel::Iau2006 => iau2006_adjustment(t, dpsi, deps),
        }
    }

    /// Nutation angles (dpsi, deps) in radians at a TT epoch
    pub fn nutation_angles(&mut self, tt: &Epoch) -> (f64, f64) {
        let (series, model) = (&self.series, self.model);
        let [dpsi, deps] = self.cache.value_at(tt, |e| {
            let t = e.julian_centuries();
            let (dpsi, deps) = series.evaluate(t);
            let (dpsi, deps) = match model {
                PrecessionNutationModel::Iau2000 => (dpsi, deps),
                PrecessionNutationModel::Iau2006 => iau2006_adjustment(t, dpsi, deps),
            };
            [dpsi, deps]
        });
        (dpsi, deps)
    }

    /// CIP (X, Y) in radians, before any celestial pole offsets
    ///
    /// Taken from the X/Y series when its periodic tiers are loaded,
    /// otherwise from the third row of `npb`. The residual series is added
    /// in both cases.
    pub fn cip_xy(&self, t: f64, npb: &Matrix3<f64>) -> (f64, f64) {
        let (x, y) = if self.cip.has_periodic_terms() {
            self.cip.evaluate(t)
        } else {
            (npb[(2, 0)], npb[(2, 1)])
        };
        let (dx, dy) = self.residual.evaluate(t);
        (x + dx, y + dy)
    }

    /// The CIO locator s for final CIP coordinates
    pub fn cio_locator(&self, t: f64, x: f64, y: f64) -> f64 {
        self.cio.s(t, x, y)
    }

    /// CIP coordinates and CIO locator (X, Y, s) at a TT epoch
    pub fn cip_coordinates(&mut self, tt: &Epoch, frame: &FrameBuilder) -> Result<(f64, f64, f64)> {
        if frame.model() != self.model {
            return Err(model_mismatch(frame.model(), self.model));
        }
        let t = tt.julian_centuries();
        let (dpsi, deps) = self.nutation_angles(tt);
        let npb = frame.npb(t, dpsi, deps);
        let (x, y) = self.cip_xy(t, &npb);
        Ok((x, y, self.cio_locator(t, x, y)))
    }
}

/// Error for components built for different precession-nutation models
pub(crate) fn model_mismatch(
    a: PrecessionNutationModel,
    b: PrecessionNutationModel,
) -> EarthRotationError {
    EarthRotationError::Configuration(format!("frame builder uses {a} but nutation uses {b}"))
}

/// Compute the mean obliquity of the ecliptic in radians
///
/// IAU 2006 uses Capitaine et al. (2003); IAU 2000 uses the 1980 expression
/// with the IAU 2000 precession-rate correction.
///
/// # Arguments
/// * `t` - TT time in Julian centuries since J2000.0
pub fn mean_obliquity(model: PrecessionNutationModel, t: f64) -> f64 {
    let epsilon = match model {
        PrecessionNutationModel::Iau2006 => {
            ((((-0.0000000434 * t - 0.000000576) * t + 0.00200340) * t - 0.0001831) * t
                - 46.836769)
                * t
                + 84381.406
        }
        PrecessionNutationModel::Iau2000 => {
            84381.448 + (-46.8150 + (-0.00059 + 0.001813 * t) * t) * t - 0.02524 * t
        }
    };
    epsilon * ASEC2RAD
}

/// Build the nutation rotation matrix
///
/// N = R1(-(eps + deps)) R3(-dpsi) R1(eps), taking mean-of-date to true-of-date.
///
/// # Arguments
/// * `mean_obliquity_rad` - mean obliquity of ecliptic in radians
/// * `d_psi` - nutation in longitude in radians
/// * `d_eps` - nutation in obliquity in radians
pub fn build_nutation_matrix(mean_obliquity_rad: f64, d_psi: f64, d_eps: f64) -> Matrix3<f64> {
    let eps_mean = mean_obliquity_rad;
    let eps_true = eps_mean + d_eps;

    let (sobm, cobm) = eps_mean.sin_cos();
    let (sobt, cobt) = eps_true.sin_cos();
    let (spsi, cpsi) = d_psi.sin_cos();

    #[rustfmt::skip]
    let n = Matrix3::new(
        cpsi,          -spsi * cobm,                      -spsi * sobm,
        spsi * cobt,    cpsi * cobm * cobt + sobm * sobt,  cpsi * sobm * cobt - cobm * sobt,
        spsi * sobt,    cpsi * cobm * sobt - sobm * cobt,  cpsi * sobm * sobt + cobm * cobt,
    );

    n
}

/// Complementary terms of the equation of the equinoxes, t^0 part
///
/// IERS Conventions (2010), Table 5.2e. Amplitudes (sin, cos) in
/// microarcseconds.
#[rustfmt::skip]
const EE_TERMS: [Term<N_ARGS, 1>; 33] = [
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[2640.96, -0.39]]),
    Term::new([ 0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[63.52, -0.02]]),
    Term::new([ 0,  0,  2, -2,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[11.75, 0.01]]),
    Term::new([ 0,  0,  2, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[11.21, 0.01]]),
    Term::new([ 0,  0,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-4.55, 0.00]]),
    Term::new([ 0,  0,  2,  0,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[2.02, 0.00]]),
    Term::new([ 0,  0,  2,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.98, 0.00]]),
    Term::new([ 0,  0,  0,  0,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-1.72, 0.00]]),
    Term::new([ 0,  1,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-1.41, -0.01]]),
    Term::new([ 0,  1,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-1.26, -0.01]]),
    Term::new([ 1,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.63, 0.00]]),
    Term::new([ 1,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.63, 0.00]]),
    Term::new([ 0,  1,  2, -2,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.46, 0.00]]),
    Term::new([ 0,  1,  2, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.45, 0.00]]),
    Term::new([ 0,  0,  4, -4,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.36, 0.00]]),
    Term::new([ 0,  0,  1, -1,  1,  0, -8, 12,  0,  0,  0,  0,  0,  0], [[-0.24, -0.12]]),
    Term::new([ 0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.32, 0.00]]),
    Term::new([ 0,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.28, 0.00]]),
    Term::new([ 1,  0,  2,  0,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.27, 0.00]]),
    Term::new([ 1,  0,  2,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.26, 0.00]]),
    Term::new([ 0,  0,  2, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.21, 0.00]]),
    Term::new([ 0,  1, -2,  2, -3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.19, 0.00]]),
    Term::new([ 0,  1, -2,  2, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.18, 0.00]]),
    Term::new([ 0,  0,  0,  0,  0,  0,  8, -13,  0,  0,  0,  0,  0, -1], [[-0.10, 0.05]]),
    Term::new([ 0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.15, 0.00]]),
    Term::new([ 2,  0, -2,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.14, 0.00]]),
    Term::new([ 1,  0,  0, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.14, 0.00]]),
    Term::new([ 0,  1,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.14, 0.00]]),
    Term::new([ 1,  0,  0, -2, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.14, 0.00]]),
    Term::new([ 0,  0,  4, -2,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.13, 0.00]]),
    Term::new([ 0,  0,  2, -2,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.11, 0.00]]),
    Term::new([ 1,  0, -2,  0, -3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.11, 0.00]]),
    Term::new([ 1,  0, -2,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.11, 0.00]]),
];

/// Complementary terms, t^1 part
#[rustfmt::skip]
const EE_TERMS_T1: [Term<N_ARGS, 1>; 1] = [
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.87, 0.00]]),
];

static EE_SERIES: Lazy<PoissonSeries<N_ARGS, 1>> =
    Lazy::new(|| PoissonSeries::from_static(&[&EE_TERMS[..], &EE_TERMS_T1[..]], &[], UASEC2RAD));

/// Compute the complementary terms of the equation of equinoxes in radians
///
/// # Arguments
/// * `t` - TT time in Julian centuries since J2000.0
pub fn equation_of_the_equinoxes_complementary_terms(t: f64) -> f64 {
    let [ct] = EE_SERIES.evaluate(t, &fundamental_arguments(t));
    ct
}

/// Equation of the equinoxes: GAST - GMST in radians
pub fn equation_of_the_equinoxes(t: f64, dpsi: f64, eps_a: f64) -> f64 {
    dpsi * eps_a.cos() + equation_of_the_equinoxes_complementary_terms(t)
}

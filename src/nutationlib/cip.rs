//! CIP X/Y series and the CIO locator s

use std::path::Path;

use tracing::debug;

use super::tables;
use super::PrecessionNutationModel;
use crate::constants::UASEC2RAD;
use crate::fundamentals::{fundamental_arguments, N_ARGS};
use crate::serieslib::{
    parse_iers_series, parse_term_table, read_table_file, sum_terms, AmplitudeOrder, PoissonSeries,
    Term,
};
use crate::Result;

/// Polynomial part of the IAU 2000A CIP coordinates, (X, Y) per power of t in microarcseconds
pub const CIP_POLYNOMIAL_2000: [[f64; 2]; 6] = [
    [-16616.99, -6950.78],
    [2004191742.88, -25381.99],
    [-427219.05, -22407250.99],
    [-198620.54, 1842.28],
    [-46.05, 1113.06],
    [5.98, 0.99],
];

/// Polynomial part of the IAU 2006/2000A CIP coordinates (IERS 2010 eq. 5.16)
pub const CIP_POLYNOMIAL_2006: [[f64; 2]; 6] = [
    [-16617.0, -6951.0],
    [2004191898.0, -25896.0],
    [-429782.9, -22407274.7],
    [-198618.34, 1900.59],
    [7.578, 1112.526],
    [5.9285, 0.1358],
];

fn polynomial_column(model: PrecessionNutationModel, column: usize) -> Vec<[f64; 1]> {
    let poly = match model {
        PrecessionNutationModel::Iau2000 => &CIP_POLYNOMIAL_2000,
        PrecessionNutationModel::Iau2006 => &CIP_POLYNOMIAL_2006,
    };
    poly.iter().map(|row| [row[column]]).collect()
}

/// CIP coordinates X and Y as polynomial plus Poisson series
///
/// The periodic tiers come from the IERS tables (tab5.2a for X, tab5.2b for
/// Y). Without them only the polynomial is available, and the rotation
/// composer takes X and Y from the bias-precession-nutation matrix instead
/// (see [`CipSeries::has_periodic_terms`]).
#[derive(Debug, Clone)]
pub struct CipSeries {
    model: PrecessionNutationModel,
    x: PoissonSeries<N_ARGS, 1>,
    y: PoissonSeries<N_ARGS, 1>,
}

impl CipSeries {
    pub fn polynomial_only(model: PrecessionNutationModel) -> Self {
        Self::from_tiers(model, Vec::new(), Vec::new())
    }

    /// Build from parsed tiers with amplitudes in microarcseconds
    pub fn from_tiers(
        model: PrecessionNutationModel,
        x: Vec<Vec<Term<N_ARGS, 1>>>,
        y: Vec<Vec<Term<N_ARGS, 1>>>,
    ) -> Self {
        Self {
            model,
            x: PoissonSeries::new(x, polynomial_column(model, 0), UASEC2RAD),
            y: PoissonSeries::new(y, polynomial_column(model, 1), UASEC2RAD),
        }
    }

    /// Read the IERS X and Y tables
    pub fn from_files(
        model: PrecessionNutationModel,
        x_path: impl AsRef<Path>,
        y_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let x = parse_iers_series(&read_table_file(x_path)?, AmplitudeOrder::SinCos)?;
        let y = parse_iers_series(&read_table_file(y_path)?, AmplitudeOrder::SinCos)?;
        Ok(Self::from_tiers(model, x, y))
    }

    pub fn model(&self) -> PrecessionNutationModel {
        self.model
    }

    pub fn has_periodic_terms(&self) -> bool {
        self.x.term_count() > 0 && self.y.term_count() > 0
    }

    /// (X, Y) in radians at `t` TT Julian centuries since J2000.0
    pub fn evaluate(&self, t: f64) -> (f64, f64) {
        let fa = fundamental_arguments(t);
        let [x] = self.x.evaluate(t, &fa);
        let [y] = self.y.evaluate(t, &fa);
        (x, y)
    }
}

/// Small additive correction to X and Y from a dedicated residual series
///
/// Rows are `m1..m14  dx_s dx_c  dy_s dy_c` in microarcseconds, a single
/// tier. The default is empty.
#[derive(Debug, Clone, Default)]
pub struct CipResidual {
    terms: Vec<Term<N_ARGS, 2>>,
}

impl CipResidual {
    pub fn new(terms: Vec<Term<N_ARGS, 2>>) -> Self {
        Self { terms }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let terms = parse_term_table::<N_ARGS, 2>(&read_table_file(path)?)?;
        debug!(terms = terms.len(), "loaded CIP residual terms");
        Ok(Self::new(terms))
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// (dX, dY) in radians
    pub fn evaluate(&self, t: f64) -> (f64, f64) {
        if self.terms.is_empty() {
            return (0.0, 0.0);
        }
        let [dx, dy] = sum_terms(&self.terms, &fundamental_arguments(t));
        (dx * UASEC2RAD, dy * UASEC2RAD)
    }
}

/// The CIO locator s, from the series for s + XY/2
#[derive(Debug, Clone)]
pub struct CioLocator {
    model: PrecessionNutationModel,
    series: PoissonSeries<N_ARGS, 1>,
}

impl CioLocator {
    pub fn new(model: PrecessionNutationModel) -> Self {
        let series = match model {
            PrecessionNutationModel::Iau2006 => PoissonSeries::from_static(
                &[
                    &tables::CIO_2006_T0[..],
                    &tables::CIO_2006_T1[..],
                    &tables::CIO_2006_T2[..],
                    &tables::CIO_2006_T3[..],
                    &tables::CIO_2006_T4[..],
                ],
                &tables::CIO_2006_POLY,
                UASEC2RAD,
            ),
            PrecessionNutationModel::Iau2000 => PoissonSeries::from_static(
                &[
                    &tables::CIO_2000_T0[..],
                    &tables::CIO_2000_T1[..],
                    &tables::CIO_2000_T2[..],
                    &tables::CIO_2000_T3[..],
                    &tables::CIO_2000_T4[..],
                ],
                &tables::CIO_2000_POLY,
                UASEC2RAD,
            ),
        };
        Self { model, series }
    }

    pub fn model(&self) -> PrecessionNutationModel {
        self.model
    }

    /// s + XY/2 in radians
    pub fn s_plus_xy_half(&self, t: f64) -> f64 {
        let [v] = self.series.evaluate(t, &fundamental_arguments(t));
        v
    }

    /// The CIO locator s in radians for CIP coordinates `x`, `y`
    pub fn s(&self, t: f64, x: f64, y: f64) -> f64 {
        self.s_plus_xy_half(t) - x * y / 2.0
    }
}

//! TRS to CRS rotation with Earth-orientation partials
//!
//! The rotation follows the CIO-based IERS chain
//!
//! ```text
//! R = Q(X, Y, s) R3(-ERA) W,   Q = R3(-E) R2(-d) R3(E) R3(s),   W = R3(-s') R2(xp) R1(yp)
//! ```
//!
//! with E = atan2(Y, X) and d = atan(sqrt(X^2 + Y^2) / Z). Each partial is
//! the same chain with one factor swapped for its derivative, chained
//! through E, d and s for the CIP offsets.

use std::sync::Arc;

use nalgebra::Matrix3;
use tracing::{debug, warn};

use super::{chain_product, Axis, RotationFactor};
use crate::config::{RotationConfig, TablePaths};
use crate::constants::RAD2ASEC;
use crate::earthlib::{
    earth_rotation_angle_radians, greenwich_apparent_sidereal_time, greenwich_mean_sidereal_time,
    tio_locator, ERA_RATE_RAD_PER_S,
};
use crate::eoplib::{
    CorrectedEop, DiurnalTideModel, EopCorrector, EopTable, Ut1Mode, ZonalTideModel,
};
use crate::nutationlib::{
    mean_obliquity, CipResidual, CipSeries, FcnCorrection, FcnModel, NutationEvaluator,
    NutationSeries,
};
use crate::precessionlib::FrameBuilder;
use crate::time::{Epoch, LeapSeconds, TimeScale};
use crate::{EarthRotationError, Result};

// Factor positions in the chain
const Q_MINUS_E: usize = 0;
const Q_D: usize = 1;
const Q_PLUS_E: usize = 2;
const Q_S: usize = 3;
const ERA: usize = 4;
const XP: usize = 6;
const YP: usize = 7;

/// Which partial derivatives to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialFlags {
    pub xp: bool,
    pub yp: bool,
    pub ut1: bool,
    pub dx: bool,
    pub dy: bool,
}

impl PartialFlags {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            xp: true,
            yp: true,
            ut1: true,
            dx: true,
            dy: true,
        }
    }
}

/// A-priori corrections added on top of the corrected EOP values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterOffsets {
    /// Pole x (rad)
    pub xp: f64,
    /// Pole y (rad)
    pub yp: f64,
    /// UT1 (s)
    pub ut1: f64,
    /// CIP X offset (rad)
    pub dx: f64,
    /// CIP Y offset (rad)
    pub dy: f64,
}

/// Rotation matrix, requested partials and the quantities behind them
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTransformResult {
    /// TRS to CRS rotation
    pub rotation: Matrix3<f64>,
    /// dR/dxp per radian
    pub d_xp: Option<Matrix3<f64>>,
    /// dR/dyp per radian
    pub d_yp: Option<Matrix3<f64>>,
    /// dR/dUT1 per second
    pub d_ut1: Option<Matrix3<f64>>,
    /// dR/dX per radian
    pub d_dx: Option<Matrix3<f64>>,
    /// dR/dY per radian
    pub d_dy: Option<Matrix3<f64>>,
    /// Pole coordinates used, in arcseconds
    pub xp_arcsec: f64,
    pub yp_arcsec: f64,
    /// Greenwich mean sidereal time (rad)
    pub gmst: f64,
    /// Greenwich apparent sidereal time (rad)
    pub gast: f64,
    /// TT epoch of the computation
    pub epoch: Epoch,
    /// CIP coordinates including the pole offsets (rad)
    pub x: f64,
    pub y: f64,
    /// CIO locator (rad)
    pub s: f64,
    /// TIO locator (rad)
    pub s_prime: f64,
    /// Earth rotation angle (rad)
    pub era: f64,
    /// CIP azimuth E and polar distance d (rad)
    pub e: f64,
    pub d: f64,
    /// Celestial pole offsets applied (rad)
    pub dx: f64,
    pub dy: f64,
    /// FCN correction, when it replaced the table offsets
    pub fcn: Option<FcnCorrection>,
    /// Corrected EOP before the caller's offsets
    pub eop: CorrectedEop,
}

impl FrameTransformResult {
    /// CRS to TRS rotation
    pub fn celestial_to_terrestrial(&self) -> Matrix3<f64> {
        self.rotation.transpose()
    }
}

/// CIP azimuth and polar distance with their derivatives by X and Y
#[derive(Debug, Clone, Copy)]
struct CipAngles {
    e: f64,
    d: f64,
    de_dx: f64,
    de_dy: f64,
    dd_dx: f64,
    dd_dy: f64,
}

impl CipAngles {
    fn new(x: f64, y: f64) -> Self {
        let mut r2 = x * x + y * y;
        if r2 >= 1.0 {
            warn!(r2, "CIP direction outside the unit disc, clamping");
            r2 = 1.0 - f64::EPSILON;
        }
        let v = r2.sqrt();
        let z = (1.0 - r2).sqrt();
        if r2 == 0.0 {
            return Self {
                e: 0.0,
                d: 0.0,
                de_dx: 0.0,
                de_dy: 0.0,
                dd_dx: 0.0,
                dd_dy: 0.0,
            };
        }
        Self {
            e: y.atan2(x),
            d: (v / z).atan(),
            de_dx: -y / r2,
            de_dy: x / r2,
            dd_dx: x / (z * v),
            dd_dy: y / (z * v),
        }
    }
}

/// Computes the TRS to CRS rotation and its partials epoch by epoch
///
/// Owns the nutation, diurnal and zonal windowed caches, so one composer
/// serves one sequence of epochs. Build one per thread.
pub struct RotationComposer {
    config: RotationConfig,
    corrector: EopCorrector,
    nutation: NutationEvaluator,
    frame: FrameBuilder,
    fcn: FcnModel,
    last: Option<FrameTransformResult>,
}

/// Tables that bound the accuracy of `config` and are absent, with the
/// fallback used in their place
fn missing_tables(
    config: &RotationConfig,
    tables: &TablePaths,
    mode: Ut1Mode,
) -> Vec<(&'static str, &'static str)> {
    let checks = [
        (
            tables.nutation_psi.is_none(),
            "nutation series",
            "77-term lunisolar series, about 1 mas",
        ),
        (
            tables.cip_x.is_none(),
            "CIP X/Y series",
            "X and Y from the nutation matrix",
        ),
        (
            tables.ocean_tides.is_none() && mode.applies_diurnal(),
            "ocean tides",
            "libration terms only",
        ),
        (
            tables.zonal_tides.is_none() && mode.applies_zonal(),
            "zonal tides",
            "UT1R used without zonal add-back",
        ),
        (
            tables.fcn.is_none() && config.use_fcn,
            "FCN amplitudes",
            "no substitute for negligible CIP offsets",
        ),
    ];
    checks
        .into_iter()
        .filter(|(absent, _, _)| *absent)
        .map(|(_, name, fallback)| (name, fallback))
        .collect()
}

impl RotationComposer {
    /// Build a composer, loading any series and correction tables the
    /// configuration names
    ///
    /// Each missing table is logged with its fallback. With
    /// `require_full_tables` set, a missing table is a
    /// [`EarthRotationError::Configuration`] error instead.
    pub fn new(
        config: RotationConfig,
        table: Arc<dyn EopTable + Send + Sync>,
        leaps: Arc<dyn LeapSeconds + Send + Sync>,
    ) -> Result<Self> {
        config.validate()?;
        let model = config.model;
        let tables = &config.tables.discovered();
        let missing = missing_tables(&config, tables, table.ut1_mode());
        if config.require_full_tables && !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|(name, _)| *name).collect();
            return Err(EarthRotationError::Configuration(format!(
                "required tables are not configured: {}",
                names.join(", ")
            )));
        }
        for (name, fallback) in missing {
            warn!(table = name, fallback, "table not configured, accuracy is reduced");
        }

        let series = match (&tables.nutation_psi, &tables.nutation_eps) {
            (Some(psi), Some(eps)) => NutationSeries::from_files(psi, eps)?,
            _ => NutationSeries::truncated(),
        };
        let cip = match (&tables.cip_x, &tables.cip_y) {
            (Some(x), Some(y)) => CipSeries::from_files(model, x, y)?,
            _ => CipSeries::polynomial_only(model),
        };
        let residual = match &tables.cip_residual {
            Some(path) => CipResidual::from_file(path)?,
            None => CipResidual::empty(),
        };
        let nutation = NutationEvaluator::new(model, series, config.nutation_half_step_days)?
            .with_cip(cip, residual)?;

        let diurnal = match &tables.ocean_tides {
            Some(path) => DiurnalTideModel::from_file(model, path)?,
            None => DiurnalTideModel::libration_only(model),
        };
        let zonal = match &tables.zonal_tides {
            Some(path) => ZonalTideModel::from_file(path)?,
            None => ZonalTideModel::empty(),
        };
        let corrector = EopCorrector::new(
            table,
            leaps,
            diurnal,
            zonal,
            config.diurnal_half_step_seconds,
            config.zonal_half_step_days,
        )?;
        let fcn = match &tables.fcn {
            Some(path) => FcnModel::from_file(path)?,
            None => FcnModel::default(),
        };

        Self::from_parts(config, corrector, nutation, FrameBuilder::new(model), fcn)
    }

    /// Assemble a composer from prebuilt components
    ///
    /// Fails with [`EarthRotationError::Configuration`] when the components
    /// disagree on the precession-nutation model.
    pub fn from_parts(
        config: RotationConfig,
        corrector: EopCorrector,
        nutation: NutationEvaluator,
        frame: FrameBuilder,
        fcn: FcnModel,
    ) -> Result<Self> {
        config.validate()?;
        let parts = [
            ("nutation", nutation.model()),
            ("frame builder", frame.model()),
            ("diurnal tide model", corrector.tide_model()),
        ];
        for (what, model) in parts {
            if model != config.model {
                return Err(EarthRotationError::Configuration(format!(
                    "{what} uses {model} but the configuration selects {}",
                    config.model
                )));
            }
        }
        debug!(
            model = %config.model,
            nutation_terms = nutation.series().term_count(),
            cip_series = nutation.cip_series().has_periodic_terms(),
            fcn = !fcn.is_empty(),
            "rotation composer ready"
        );
        Ok(Self {
            config,
            corrector,
            nutation,
            frame,
            fcn,
            last: None,
        })
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// The most recent successful result
    pub fn last_result(&self) -> Option<&FrameTransformResult> {
        self.last.as_ref()
    }

    /// Rotation and requested partials at `epoch`
    pub fn compute_rotation(
        &mut self,
        epoch: &Epoch,
        flags: PartialFlags,
    ) -> Result<FrameTransformResult> {
        self.compute_rotation_with_offsets(epoch, flags, ParameterOffsets::default())
    }

    /// Rotation and requested partials with a-priori parameter offsets
    pub fn compute_rotation_with_offsets(
        &mut self,
        epoch: &Epoch,
        flags: PartialFlags,
        offsets: ParameterOffsets,
    ) -> Result<FrameTransformResult> {
        let model = self.config.model;
        let eop = self.corrector.corrected_eop(epoch)?;
        let tt = eop.epoch;
        let t = tt.julian_centuries();

        let xp = eop.xp + offsets.xp;
        let yp = eop.yp + offsets.yp;
        let tai = tt.to_scale(TimeScale::TAI, self.corrector.leap_seconds());
        let ut1 = Epoch::from_tai_with_ut1_offset(&tai, eop.ut1_minus_tai + offsets.ut1);
        let (jd_ut1, frac_ut1) = ut1.jd_parts();
        let era = earth_rotation_angle_radians(jd_ut1, frac_ut1);
        let s_prime = tio_locator(t);

        let (dpsi, deps) = self.nutation.nutation_angles(&tt);
        let npb = self.frame.npb(t, dpsi, deps);
        let (x_model, y_model) = self.nutation.cip_xy(t, &npb);

        let (mut pole_dx, mut pole_dy) = self.frame.offsets_to_cip(t, eop.dpsi, eop.deps);
        let threshold = self.config.fcn_threshold_rad;
        let fcn = (self.config.use_fcn
            && !self.fcn.is_empty()
            && (pole_dx.abs() < threshold || pole_dy.abs() < threshold))
            .then(|| self.fcn.evaluate(tt.mjd_f64()));
        if let Some(c) = &fcn {
            pole_dx = c.dx;
            pole_dy = c.dy;
        }
        let dx = pole_dx + offsets.dx;
        let dy = pole_dy + offsets.dy;

        let x = x_model + dx;
        let y = y_model + dy;
        let s = self.nutation.cio_locator(t, x, y);
        let cip = CipAngles::new(x, y);

        let want_xy = flags.dx || flags.dy;
        let factors = [
            RotationFactor::new(Axis::Z, -cip.e, want_xy),
            RotationFactor::new(Axis::Y, -cip.d, want_xy),
            RotationFactor::new(Axis::Z, cip.e, want_xy),
            RotationFactor::new(Axis::Z, s, want_xy),
            RotationFactor::new(Axis::Z, -era, flags.ut1),
            RotationFactor::new(Axis::Z, -s_prime, false),
            RotationFactor::new(Axis::Y, xp, flags.xp),
            RotationFactor::new(Axis::X, yp, flags.yp),
        ];
        let rotation = chain_product(&factors, None);

        let d_xp = flags.xp.then(|| chain_product(&factors, Some(XP)));
        let d_yp = flags.yp.then(|| chain_product(&factors, Some(YP)));
        let d_ut1 = flags
            .ut1
            .then(|| -chain_product(&factors, Some(ERA)) * ERA_RATE_RAD_PER_S);

        let (d_dx, d_dy) = if want_xy {
            let by_e = chain_product(&factors, Some(Q_PLUS_E))
                - chain_product(&factors, Some(Q_MINUS_E));
            let by_d = -chain_product(&factors, Some(Q_D));
            let by_s = chain_product(&factors, Some(Q_S));
            // ds/dX = -Y/2, ds/dY = -X/2
            (
                flags
                    .dx
                    .then(|| by_e * cip.de_dx + by_d * cip.dd_dx + by_s * (-y / 2.0)),
                flags
                    .dy
                    .then(|| by_e * cip.de_dy + by_d * cip.dd_dy + by_s * (-x / 2.0)),
            )
        } else {
            (None, None)
        };

        let gmst = greenwich_mean_sidereal_time(model, jd_ut1, frac_ut1, t);
        let gast = greenwich_apparent_sidereal_time(
            gmst,
            t,
            dpsi + eop.dpsi,
            mean_obliquity(model, t),
        );

        let result = FrameTransformResult {
            rotation,
            d_xp,
            d_yp,
            d_ut1,
            d_dx,
            d_dy,
            xp_arcsec: xp * RAD2ASEC,
            yp_arcsec: yp * RAD2ASEC,
            gmst,
            gast,
            epoch: tt,
            x,
            y,
            s,
            s_prime,
            era,
            e: cip.e,
            d: cip.d,
            dx,
            dy,
            fcn,
            eop,
        };
        self.last = Some(result.clone());
        Ok(result)
    }
}

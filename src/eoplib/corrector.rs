use std::sync::Arc;

use tracing::debug;

use super::tides::{DiurnalTideModel, ZonalTideModel};
use super::{EopRecord, EopTable, Ut1Mode};
use crate::cachelib::{Interpolation, WindowedCache};
use crate::constants::{ASEC2RAD, DAY_S};
use crate::nutationlib::PrecessionNutationModel;
use crate::time::{Epoch, LeapSeconds, TimeScale};
use crate::{EarthRotationError, Result};

/// EOP values at an arbitrary epoch, tidal corrections applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectedEop {
    /// The TT epoch these values belong to
    pub epoch: Epoch,
    /// Pole x coordinate (rad)
    pub xp: f64,
    /// Pole y coordinate (rad)
    pub yp: f64,
    /// UT1 - TAI (s)
    pub ut1_minus_tai: f64,
    /// Nutation offset in longitude from the table (rad)
    pub dpsi: f64,
    /// Nutation offset in obliquity from the table (rad)
    pub deps: f64,
    /// Zonal tide correction to LOD (s)
    pub lod_correction: f64,
    /// Zonal tide correction to the rotation rate (rad/s)
    pub omega_correction: f64,
}

/// Table sample converted to radians and seconds
#[derive(Debug, Clone, Copy)]
struct Sample {
    xp: f64,
    yp: f64,
    ut1: f64,
    dpsi: f64,
    deps: f64,
}

impl From<EopRecord> for Sample {
    fn from(r: EopRecord) -> Self {
        Self {
            xp: r.xp * ASEC2RAD,
            yp: r.yp * ASEC2RAD,
            ut1: r.ut1_minus_tai,
            dpsi: r.dpsi * ASEC2RAD,
            deps: r.deps * ASEC2RAD,
        }
    }
}

impl Sample {
    fn remove_diurnal(&mut self, c: &[f64; 3]) {
        self.xp -= c[0];
        self.yp -= c[1];
        self.ut1 -= c[2];
    }

    fn lerp(&self, other: &Sample, alpha: f64) -> Sample {
        let mix = |a: f64, b: f64| a + alpha * (b - a);
        Sample {
            xp: mix(self.xp, other.xp),
            yp: mix(self.yp, other.yp),
            ut1: mix(self.ut1, other.ut1),
            dpsi: mix(self.dpsi, other.dpsi),
            deps: mix(self.deps, other.deps),
        }
    }
}

/// Interpolates an EOP table and applies the tidal corrections
///
/// Owns the diurnal and zonal correction caches. Diurnal corrections at the
/// two bracketing table days are evaluated directly, outside the diurnal
/// window, and remembered for the current bracket.
pub struct EopCorrector {
    table: Arc<dyn EopTable + Send + Sync>,
    leaps: Arc<dyn LeapSeconds + Send + Sync>,
    diurnal: DiurnalTideModel,
    zonal: ZonalTideModel,
    diurnal_cache: WindowedCache<3>,
    zonal_cache: WindowedCache<3>,
    bracket_memo: Option<(i32, [f64; 3], [f64; 3])>,
}

impl EopCorrector {
    /// # Arguments
    /// * `diurnal_half_step_s` - half window of the diurnal cache in seconds
    /// * `zonal_half_step_days` - half window of the zonal cache in days
    pub fn new(
        table: Arc<dyn EopTable + Send + Sync>,
        leaps: Arc<dyn LeapSeconds + Send + Sync>,
        diurnal: DiurnalTideModel,
        zonal: ZonalTideModel,
        diurnal_half_step_s: f64,
        zonal_half_step_days: f64,
    ) -> Result<Self> {
        Ok(Self {
            table,
            leaps,
            diurnal,
            zonal,
            diurnal_cache: WindowedCache::new(
                "diurnal",
                Interpolation::Linear,
                diurnal_half_step_s / DAY_S,
            )?,
            zonal_cache: WindowedCache::new("zonal", Interpolation::Quadratic, zonal_half_step_days)?,
            bracket_memo: None,
        })
    }

    pub fn ut1_mode(&self) -> Ut1Mode {
        self.table.ut1_mode()
    }

    pub fn tide_model(&self) -> PrecessionNutationModel {
        self.diurnal.model()
    }

    pub fn leap_seconds(&self) -> &(dyn LeapSeconds + Send + Sync) {
        self.leaps.as_ref()
    }

    /// Bracketing table keys and interpolation weight for a UTC MJD
    fn bracket(&self, utc_mjd: f64) -> (i32, i32, f64) {
        let step = self.table.interval_days().max(1);
        let day = utc_mjd.floor() as i32;
        let k0 = match self.table.range() {
            Some((first, _)) => first + (day - first).div_euclid(step) * step,
            None => day,
        };
        let alpha = (utc_mjd - f64::from(k0)) / f64::from(step);
        (k0, k0 + step, alpha)
    }

    fn lookup(&self, mjd: i32) -> Result<EopRecord> {
        self.table.lookup(mjd).ok_or_else(|| {
            let (first, last) = self.table.range().unwrap_or((0, -1));
            EarthRotationError::DataGap { mjd, first, last }
        })
    }

    fn bracket_corrections(&mut self, k0: i32, k1: i32) -> ([f64; 3], [f64; 3]) {
        if let Some((key, c0, c1)) = self.bracket_memo {
            if key == k0 {
                return (c0, c1);
            }
        }
        let at = |mjd: i32| {
            Epoch::new(mjd, 0, 0.0, TimeScale::UTC).to_scale(TimeScale::TT, self.leaps.as_ref())
        };
        let c0 = self.diurnal.evaluate(&at(k0));
        let c1 = self.diurnal.evaluate(&at(k1));
        debug!(mjd = k0, "diurnal corrections at table bracket");
        self.bracket_memo = Some((k0, c0, c1));
        (c0, c1)
    }

    /// Corrected pole, UT1 - TAI and nutation offsets at `epoch`
    ///
    /// Fails with [`EarthRotationError::DataGap`] when either bracketing day
    /// is missing from the table.
    pub fn corrected_eop(&mut self, epoch: &Epoch) -> Result<CorrectedEop> {
        let tt = epoch.to_scale(TimeScale::TT, self.leaps.as_ref());
        let utc = epoch.to_scale(TimeScale::UTC, self.leaps.as_ref());
        let (k0, k1, alpha) = self.bracket(utc.mjd_f64());

        let mut s0 = Sample::from(self.lookup(k0)?);
        let mut s1 = Sample::from(self.lookup(k1)?);

        let mode = self.table.ut1_mode();
        if mode.applies_diurnal() {
            let (c0, c1) = self.bracket_corrections(k0, k1);
            s0.remove_diurnal(&c0);
            s1.remove_diurnal(&c1);
        }

        let mut s = s0.lerp(&s1, alpha);

        if mode.applies_diurnal() {
            let diurnal = &self.diurnal;
            let [dx, dy, du] = self.diurnal_cache.value_at(&tt, |e| diurnal.evaluate(e));
            s.xp += dx;
            s.yp += dy;
            s.ut1 += du;
        }

        let (mut lod, mut omega) = (0.0, 0.0);
        if mode.applies_zonal() {
            let zonal = &self.zonal;
            let [du, dlod, domega] = self.zonal_cache.value_at(&tt, |e| zonal.evaluate(e));
            s.ut1 += du;
            lod = dlod;
            omega = domega;
        }

        Ok(CorrectedEop {
            epoch: tt,
            xp: s.xp,
            yp: s.yp,
            ut1_minus_tai: s.ut1,
            dpsi: s.dpsi,
            deps: s.deps,
            lod_correction: lod,
            omega_correction: omega,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eoplib::InMemoryEopTable;
    use crate::serieslib::Term;
    use crate::time::LeapSecondTable;
    use approx::assert_relative_eq;

    fn ramp_table(mode: Ut1Mode) -> InMemoryEopTable {
        InMemoryEopTable::from_records(
            (58000..=58010).map(|mjd| {
                let d = f64::from(mjd - 58000);
                (
                    mjd,
                    EopRecord {
                        xp: 0.1 + 0.001 * d,
                        yp: 0.3 - 0.002 * d,
                        ut1_minus_tai: -37.1 + 0.0005 * d,
                        dpsi: -0.05,
                        deps: 0.002 * d,
                    },
                )
            }),
            mode,
        )
    }

    fn corrector(table: InMemoryEopTable, zonal: ZonalTideModel) -> EopCorrector {
        EopCorrector::new(
            Arc::new(table),
            Arc::new(LeapSecondTable::default()),
            DiurnalTideModel::libration_only(PrecessionNutationModel::Iau2006),
            zonal,
            0.015 * DAY_S,
            0.05,
        )
        .unwrap()
    }

    fn utc(mjd: f64) -> Epoch {
        Epoch::from_mjd(mjd, TimeScale::UTC)
    }

    #[test]
    fn test_linear_interpolation_without_tides() {
        let mut c = corrector(ramp_table(Ut1Mode::TideCorrected), ZonalTideModel::empty());
        let eop = c.corrected_eop(&utc(58003.25)).unwrap();
        assert_relative_eq!(eop.xp, (0.1 + 0.001 * 3.25) * ASEC2RAD, epsilon = 1e-15);
        assert_relative_eq!(eop.yp, (0.3 - 0.002 * 3.25) * ASEC2RAD, epsilon = 1e-15);
        assert_relative_eq!(eop.ut1_minus_tai, -37.1 + 0.0005 * 3.25, epsilon = 1e-10);
        assert_relative_eq!(eop.dpsi, -0.05 * ASEC2RAD, epsilon = 1e-15);
        assert_relative_eq!(eop.deps, 0.002 * 3.25 * ASEC2RAD, epsilon = 1e-15);
        assert_eq!(eop.epoch.scale(), TimeScale::TT);
    }

    #[test]
    fn test_diurnal_restored_at_query_epoch() {
        // With a constant table, the remove/restore step leaves
        // interp(-c(bracket)) + c(t) on top of the table value
        let rec = EopRecord {
            xp: 0.2,
            yp: 0.4,
            ..Default::default()
        };
        let table = InMemoryEopTable::constant(58000, 58010, rec, Ut1Mode::Standard);
        let mut c = corrector(table, ZonalTideModel::empty());
        let leaps = LeapSecondTable::default();
        let model = DiurnalTideModel::libration_only(PrecessionNutationModel::Iau2006);

        let at = utc(58004.6);
        let eop = c.corrected_eop(&at).unwrap();
        let tt = at.to_scale(TimeScale::TT, &leaps);
        let c0 = model.evaluate(&utc(58004.0).to_scale(TimeScale::TT, &leaps));
        let c1 = model.evaluate(&utc(58005.0).to_scale(TimeScale::TT, &leaps));
        let ct = model.evaluate(&tt);
        let expected_x = 0.2 * ASEC2RAD - (c0[0] + 0.6 * (c1[0] - c0[0])) + ct[0];
        // the query correction goes through the linear diurnal window
        assert_relative_eq!(eop.xp, expected_x, epsilon = 1e-12);
    }

    #[test]
    fn test_zonal_applied_only_for_regularized() {
        let zonal = || ZonalTideModel::new(vec![Term::new([0, 0, 0, 0, 1], [[5.0, 0.0], [0.0, 1.0], [0.0, 0.0]])]);
        let at = utc(58002.5);

        let mut reg = corrector(ramp_table(Ut1Mode::Regularized), zonal());
        let mut standard = corrector(ramp_table(Ut1Mode::Standard), zonal());
        let a = reg.corrected_eop(&at).unwrap();
        let b = standard.corrected_eop(&at).unwrap();

        let expected = zonal().evaluate(&a.epoch)[0];
        assert!(expected.abs() > 1e-5);
        assert_relative_eq!(a.ut1_minus_tai - b.ut1_minus_tai, expected, epsilon = 1e-9);
        assert_eq!(b.lod_correction, 0.0);
        assert!(a.lod_correction != 0.0);
    }

    #[test]
    fn test_data_gap_before_and_after_table() {
        let mut c = corrector(ramp_table(Ut1Mode::Standard), ZonalTideModel::empty());
        let err = c.corrected_eop(&utc(57999.5)).unwrap_err();
        assert!(matches!(
            err,
            EarthRotationError::DataGap {
                mjd: 57999,
                first: 58000,
                last: 58010
            }
        ));
        // the last day has no upper bracket
        let err = c.corrected_eop(&utc(58010.2)).unwrap_err();
        assert!(matches!(err, EarthRotationError::DataGap { mjd: 58011, .. }));
    }

    #[test]
    fn test_missing_interior_day_is_a_gap() {
        let mut table = InMemoryEopTable::new(Ut1Mode::TideCorrected);
        table.insert(58000, EopRecord::default());
        table.insert(58002, EopRecord::default());
        let mut c = corrector(table, ZonalTideModel::empty());
        assert!(c.corrected_eop(&utc(58000.5)).is_err());
    }

    #[test]
    fn test_tt_input_is_converted_to_utc_for_lookup() {
        // 58003.0 TT is 69.184 s before UTC midnight, so day 58002 brackets it
        let mut c = corrector(ramp_table(Ut1Mode::TideCorrected), ZonalTideModel::empty());
        let eop = c.corrected_eop(&Epoch::tt_mjd(58003.0)).unwrap();
        let alpha = 1.0 - 69.184 / DAY_S;
        assert_relative_eq!(eop.xp, (0.1 + 0.001 * (2.0 + alpha)) * ASEC2RAD, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_step_rejected() {
        let res = EopCorrector::new(
            Arc::new(ramp_table(Ut1Mode::Standard)),
            Arc::new(LeapSecondTable::default()),
            DiurnalTideModel::libration_only(PrecessionNutationModel::Iau2006),
            ZonalTideModel::empty(),
            0.0,
            0.05,
        );
        assert!(matches!(res, Err(EarthRotationError::Configuration(_))));
    }
}

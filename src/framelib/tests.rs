use std::sync::Arc;

use approx::assert_relative_eq;
use nalgebra::Matrix3;

use super::*;
use crate::config::RotationConfig;
use crate::constants::{DAY_S, TAU};
use crate::earthlib::tio_locator;
use crate::eoplib::{
    DiurnalTideModel, EopCorrector, EopRecord, InMemoryEopTable, Ut1Mode, ZonalTideModel,
};
use crate::nutationlib::{
    iau2006_adjustment, CipSeries, FcnModel, NutationEvaluator, NutationSeries,
    PrecessionNutationModel,
};
use crate::precessionlib::FrameBuilder;
use crate::time::{Epoch, LeapSecondTable, LeapSeconds, TimeScale};
use crate::EarthRotationError;

const FIRST: i32 = 53700;
const LAST: i32 = 53770;

fn drifting_table(mode: Ut1Mode) -> InMemoryEopTable {
    InMemoryEopTable::from_records(
        (FIRST..=LAST).map(|mjd| {
            let d = f64::from(mjd - FIRST);
            (
                mjd,
                EopRecord {
                    xp: 0.05 + 0.001 * d,
                    yp: 0.38 - 0.0008 * d,
                    ut1_minus_tai: -32.67 - 0.0006 * d,
                    dpsi: -0.055,
                    deps: -0.006,
                },
            )
        }),
        mode,
    )
}

/// UT1 = TT and no pole offsets, so results line up with SOFA test values
fn ut1_equals_tt_table(first: i32, last: i32) -> InMemoryEopTable {
    let record = EopRecord {
        ut1_minus_tai: 32.184,
        ..Default::default()
    };
    InMemoryEopTable::constant(first, last, record, Ut1Mode::TideCorrected)
}

fn composer(table: InMemoryEopTable) -> RotationComposer {
    RotationComposer::new(
        RotationConfig::default(),
        Arc::new(table),
        Arc::new(LeapSecondTable::default()),
    )
    .unwrap()
}

fn assembled(config: RotationConfig, table: InMemoryEopTable, fcn: FcnModel) -> RotationComposer {
    let model = config.model;
    let corrector = EopCorrector::new(
        Arc::new(table),
        Arc::new(LeapSecondTable::default()),
        DiurnalTideModel::libration_only(model),
        ZonalTideModel::empty(),
        config.diurnal_half_step_seconds,
        config.zonal_half_step_days,
    )
    .unwrap();
    let nutation =
        NutationEvaluator::new(model, NutationSeries::truncated(), config.nutation_half_step_days)
            .unwrap();
    RotationComposer::from_parts(config, corrector, nutation, FrameBuilder::new(model), fcn)
        .unwrap()
}

fn assert_matrix_close(actual: &Matrix3<f64>, expected: &Matrix3<f64>, epsilon: f64) {
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(
                actual[(i, j)],
                expected[(i, j)],
                epsilon = epsilon,
                max_relative = 1e-6
            );
        }
    }
}

fn central_difference(
    composer: &mut RotationComposer,
    epoch: &Epoch,
    step: f64,
    offset: impl Fn(f64) -> ParameterOffsets,
) -> Matrix3<f64> {
    let plus = composer
        .compute_rotation_with_offsets(epoch, PartialFlags::none(), offset(step))
        .unwrap()
        .rotation;
    let minus = composer
        .compute_rotation_with_offsets(epoch, PartialFlags::none(), offset(-step))
        .unwrap()
        .rotation;
    (plus - minus) / (2.0 * step)
}

#[test]
fn test_factor_derivatives_match_finite_differences() {
    let h = 1e-6;
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        for angle in [-2.0, -0.3, 0.0, 0.7, 3.0] {
            let numeric = (axis.rotation(angle + h) - axis.rotation(angle - h)) / (2.0 * h);
            assert_matrix_close(&axis.rotation_derivative(angle), &numeric, 1e-9);
        }
    }
}

#[test]
fn test_chain_product_swaps_one_factor() {
    let factors = [
        RotationFactor::new(Axis::Z, 0.4, true),
        RotationFactor::new(Axis::Y, -0.2, false),
        RotationFactor::new(Axis::X, 1.1, true),
    ];
    let plain = rot_z(0.4) * rot_y(-0.2) * rot_x(1.1);
    assert_matrix_close(&chain_product(&factors, None), &plain, 1e-15);

    // The middle factor carries no stored derivative and computes one on demand
    assert!(factors[1].derivative.is_none());
    let middle = rot_z(0.4) * d_rot_y(-0.2) * rot_x(1.1);
    assert_matrix_close(&chain_product(&factors, Some(1)), &middle, 1e-15);

    let last = rot_z(0.4) * rot_y(-0.2) * d_rot_x(1.1);
    assert_matrix_close(&chain_product(&factors, Some(2)), &last, 1e-15);
}

#[test]
fn test_rotation_is_orthogonal() {
    let mut c = composer(drifting_table(Ut1Mode::Standard));
    for mjd in [53705.2, 53736.0, 53769.9] {
        let r = c
            .compute_rotation(&Epoch::tt_mjd(mjd), PartialFlags::none())
            .unwrap();
        assert_matrix_close(&(r.rotation.transpose() * r.rotation), &Matrix3::identity(), 1e-12);
        assert_relative_eq!(r.rotation.determinant(), 1.0, epsilon = 1e-12);
        assert_matrix_close(
            &(r.celestial_to_terrestrial() * r.rotation),
            &Matrix3::identity(),
            1e-12,
        );
    }
}

#[test]
fn test_repeated_epoch_gives_identical_result() {
    let mut c = composer(drifting_table(Ut1Mode::Standard));
    let epoch = Epoch::tt_mjd(53736.3);
    let first = c.compute_rotation(&epoch, PartialFlags::all()).unwrap();
    let second = c.compute_rotation(&epoch, PartialFlags::all()).unwrap();
    assert_eq!(first, second);
    assert_eq!(c.last_result(), Some(&second));
}

#[test]
fn test_flags_select_partials() {
    let mut c = composer(drifting_table(Ut1Mode::Standard));
    let epoch = Epoch::tt_mjd(53736.3);

    let r = c.compute_rotation(&epoch, PartialFlags::none()).unwrap();
    assert!(r.d_xp.is_none() && r.d_yp.is_none() && r.d_ut1.is_none());
    assert!(r.d_dx.is_none() && r.d_dy.is_none());

    let flags = PartialFlags {
        dx: true,
        ut1: true,
        ..PartialFlags::none()
    };
    let r = c.compute_rotation(&epoch, flags).unwrap();
    assert!(r.d_dx.is_some() && r.d_ut1.is_some());
    assert!(r.d_dy.is_none() && r.d_xp.is_none() && r.d_yp.is_none());
}

#[test]
fn test_pole_partials_match_finite_differences() {
    let mut c = composer(drifting_table(Ut1Mode::Standard));
    let epoch = Epoch::tt_mjd(53736.3);
    let r = c.compute_rotation(&epoch, PartialFlags::all()).unwrap();

    let numeric = central_difference(&mut c, &epoch, 1e-6, |h| ParameterOffsets {
        xp: h,
        ..Default::default()
    });
    assert_matrix_close(&r.d_xp.unwrap(), &numeric, 1e-9);

    let numeric = central_difference(&mut c, &epoch, 1e-6, |h| ParameterOffsets {
        yp: h,
        ..Default::default()
    });
    assert_matrix_close(&r.d_yp.unwrap(), &numeric, 1e-9);
}

#[test]
fn test_ut1_partial_matches_finite_difference() {
    let mut c = composer(drifting_table(Ut1Mode::Standard));
    let epoch = Epoch::tt_mjd(53736.3);
    let r = c.compute_rotation(&epoch, PartialFlags::all()).unwrap();

    let numeric = central_difference(&mut c, &epoch, 1e-3, |h| ParameterOffsets {
        ut1: h,
        ..Default::default()
    });
    assert_matrix_close(&r.d_ut1.unwrap(), &numeric, 1e-11);
}

#[test]
fn test_cip_offset_partials_match_finite_differences() {
    let mut c = composer(drifting_table(Ut1Mode::Standard));
    let epoch = Epoch::tt_mjd(53736.3);
    let r = c.compute_rotation(&epoch, PartialFlags::all()).unwrap();

    let numeric = central_difference(&mut c, &epoch, 1e-6, |h| ParameterOffsets {
        dx: h,
        ..Default::default()
    });
    assert_matrix_close(&r.d_dx.unwrap(), &numeric, 1e-8);

    let numeric = central_difference(&mut c, &epoch, 1e-6, |h| ParameterOffsets {
        dy: h,
        ..Default::default()
    });
    assert_matrix_close(&r.d_dy.unwrap(), &numeric, 1e-8);
}

#[test]
fn test_offsets_are_applied_on_top_of_eop() {
    let mut c = composer(drifting_table(Ut1Mode::Standard));
    let epoch = Epoch::tt_mjd(53736.3);
    let base = c.compute_rotation(&epoch, PartialFlags::none()).unwrap();
    let offsets = ParameterOffsets {
        xp: 1e-7,
        yp: -2e-7,
        ut1: 0.01,
        dx: 3e-8,
        dy: -4e-8,
    };
    let shifted = c
        .compute_rotation_with_offsets(&epoch, PartialFlags::none(), offsets)
        .unwrap();
    assert_eq!(shifted.eop, base.eop);
    assert_relative_eq!(shifted.dx - base.dx, 3e-8, epsilon = 1e-20);
    assert_relative_eq!(shifted.dy - base.dy, -4e-8, epsilon = 1e-20);
    assert_relative_eq!(
        (shifted.xp_arcsec - base.xp_arcsec) / crate::constants::RAD2ASEC,
        1e-7,
        epsilon = 1e-15
    );
    assert_relative_eq!(
        shifted.era - base.era,
        0.01 * crate::earthlib::ERA_RATE_RAD_PER_S,
        epsilon = 1e-12
    );
}

#[test]
fn test_missing_table_days_are_data_gaps() {
    let mut c = composer(drifting_table(Ut1Mode::Standard));

    let before = Epoch::from_mjd(53690.5, TimeScale::UTC);
    match c.compute_rotation(&before, PartialFlags::none()) {
        Err(EarthRotationError::DataGap { mjd, first, last }) => {
            assert_eq!((mjd, first, last), (53690, FIRST, LAST));
        }
        other => panic!("expected a data gap, got {other:?}"),
    }

    let after = Epoch::from_mjd(53790.5, TimeScale::UTC);
    assert!(matches!(
        c.compute_rotation(&after, PartialFlags::none()),
        Err(EarthRotationError::DataGap { mjd: 53790, .. })
    ));

    // The last day has no following sample to interpolate towards
    let edge = Epoch::from_mjd(53770.5, TimeScale::UTC);
    assert!(matches!(
        c.compute_rotation(&edge, PartialFlags::none()),
        Err(EarthRotationError::DataGap { mjd: 53771, .. })
    ));

    let inside = Epoch::from_mjd(53769.5, TimeScale::UTC);
    assert!(c.compute_rotation(&inside, PartialFlags::none()).is_ok());
}

#[test]
fn test_failed_epoch_keeps_previous_result() {
    let mut c = composer(drifting_table(Ut1Mode::Standard));
    let good = c
        .compute_rotation(&Epoch::tt_mjd(53736.3), PartialFlags::none())
        .unwrap();
    assert!(c
        .compute_rotation(&Epoch::tt_mjd(53600.0), PartialFlags::none())
        .is_err());
    assert_eq!(c.last_result(), Some(&good));
}

#[test]
fn test_cio_chain_matches_equinox_chain() {
    let record = EopRecord {
        xp: 0.12,
        yp: 0.31,
        ut1_minus_tai: -32.6,
        ..Default::default()
    };
    let table = InMemoryEopTable::constant(FIRST, LAST, record, Ut1Mode::TideCorrected);
    let mut c = composer(table);
    let frame = FrameBuilder::new(PrecessionNutationModel::Iau2006);

    for mjd in [53701.0, 53736.0, 53752.75] {
        let r = c
            .compute_rotation(&Epoch::tt_mjd(mjd), PartialFlags::none())
            .unwrap();
        let t = r.epoch.julian_centuries();
        let (dpsi, deps) = NutationSeries::truncated().evaluate(t);
        let (dpsi, deps) = iau2006_adjustment(t, dpsi, deps);
        let npb = frame.npb(t, dpsi, deps);
        let w = rot_z(-r.s_prime) * rot_y(r.eop.xp) * rot_x(r.eop.yp);
        let classical = npb.transpose() * rot_z(-r.gast) * w;
        assert_matrix_close(&r.rotation, &classical, 1e-10);
    }
}

#[test]
fn test_reference_epoch_against_sofa() {
    let mut c = composer(ut1_equals_tt_table(53730, 53740));
    let r = c
        .compute_rotation(&Epoch::tt_mjd(53736.0), PartialFlags::none())
        .unwrap();
    let t = (53736.0 - 51544.5) / 36525.0;

    // iauGmst06, iauEra00, iauXy06 and iauS06 at 2400000.5 + 53736.0
    assert_relative_eq!(r.gmst, 1.754174971870091203, epsilon = 1e-12);
    assert_relative_eq!(r.era, 1.7528332553030732, epsilon = 1e-12);
    assert_relative_eq!(r.x, 0.5791308486706010975e-3, epsilon = 1e-8);
    assert_relative_eq!(r.y, 0.4020579816732958141e-4, epsilon = 1e-8);
    assert_relative_eq!(r.s, -0.1220032213076463117e-7, epsilon = 1e-12);
    assert_relative_eq!(r.s_prime, tio_locator(t), epsilon = 1e-20);
    assert_eq!(r.xp_arcsec, 0.0);
    assert_eq!(r.yp_arcsec, 0.0);
    assert!(r.fcn.is_none());
}

#[test]
fn test_era_at_j2000() {
    let mut c = composer(ut1_equals_tt_table(51540, 51550));
    let r = c
        .compute_rotation(&Epoch::tt_mjd(51544.5), PartialFlags::none())
        .unwrap();
    assert_relative_eq!(r.era, 0.7790572732640 * TAU, epsilon = 1e-12);
    assert_relative_eq!(r.s_prime, 0.0, epsilon = 1e-20);
}

const FCN_TABLE: &str = "\
# MJD      XC      XS    SXC   SXS
53700.0  -120.0   80.0   10.0  12.0
53800.0  -100.0   95.0   11.0  13.0
";

#[test]
fn test_fcn_replaces_negligible_table_offsets() {
    let fcn = FcnModel::parse(FCN_TABLE).unwrap();
    let table = InMemoryEopTable::constant(FIRST, LAST, EopRecord::default(), Ut1Mode::Standard);
    let mut c = assembled(RotationConfig::default(), table, fcn.clone());
    let r = c
        .compute_rotation(&Epoch::tt_mjd(53736.3), PartialFlags::none())
        .unwrap();

    let expected = fcn.evaluate(r.epoch.mjd_f64());
    assert_eq!(r.fcn, Some(expected));
    assert_eq!(r.dx, expected.dx);
    assert_eq!(r.dy, expected.dy);
    assert!(r.fcn.is_some_and(|f| f.sigma_x > 0.0 && f.sigma_y > 0.0));
}

#[test]
fn test_fcn_is_skipped_when_disabled_or_offsets_present() {
    let fcn = FcnModel::parse(FCN_TABLE).unwrap();
    let epoch = Epoch::tt_mjd(53736.3);

    let config = RotationConfig {
        use_fcn: false,
        ..Default::default()
    };
    let table = InMemoryEopTable::constant(FIRST, LAST, EopRecord::default(), Ut1Mode::Standard);
    let mut c = assembled(config, table, fcn.clone());
    let r = c.compute_rotation(&epoch, PartialFlags::none()).unwrap();
    assert!(r.fcn.is_none());
    assert_eq!((r.dx, r.dy), (0.0, 0.0));

    let mut c = assembled(RotationConfig::default(), drifting_table(Ut1Mode::Standard), fcn);
    let r = c.compute_rotation(&epoch, PartialFlags::none()).unwrap();
    assert!(r.fcn.is_none());
    let t = r.epoch.julian_centuries();
    let (dx, dy) = FrameBuilder::new(PrecessionNutationModel::Iau2006).offsets_to_cip(
        t,
        r.eop.dpsi,
        r.eop.deps,
    );
    assert_eq!((r.dx, r.dy), (dx, dy));
    assert!(r.dx.abs() > 1e-9);
}

#[test]
fn test_fcn_applies_when_one_table_offset_is_negligible() {
    let fcn = FcnModel::parse(FCN_TABLE).unwrap();
    let record = EopRecord {
        deps: 0.001,
        ..Default::default()
    };
    let table = InMemoryEopTable::constant(FIRST, LAST, record, Ut1Mode::Standard);
    let mut c = assembled(RotationConfig::default(), table, fcn.clone());
    let r = c
        .compute_rotation(&Epoch::tt_mjd(53736.3), PartialFlags::none())
        .unwrap();

    // dpsi = 0 leaves only the precession coupling in dX
    let t = r.epoch.julian_centuries();
    let (table_dx, table_dy) = FrameBuilder::new(PrecessionNutationModel::Iau2006)
        .offsets_to_cip(t, r.eop.dpsi, r.eop.deps);
    assert!(table_dx.abs() < 1e-9);
    assert!(table_dy.abs() > 1e-9);

    let expected = fcn.evaluate(r.epoch.mjd_f64());
    assert_eq!(r.fcn, Some(expected));
    assert_eq!((r.dx, r.dy), (expected.dx, expected.dy));
}

#[test]
fn test_model_mismatch_is_rejected() {
    let config = RotationConfig::default();
    let corrector = EopCorrector::new(
        Arc::new(drifting_table(Ut1Mode::Standard)),
        Arc::new(LeapSecondTable::default()),
        DiurnalTideModel::libration_only(PrecessionNutationModel::Iau2006),
        ZonalTideModel::empty(),
        config.diurnal_half_step_seconds,
        config.zonal_half_step_days,
    )
    .unwrap();
    let nutation = NutationEvaluator::new(
        PrecessionNutationModel::Iau2006,
        NutationSeries::truncated(),
        config.nutation_half_step_days,
    )
    .unwrap();
    let result = RotationComposer::from_parts(
        config,
        corrector,
        nutation,
        FrameBuilder::new(PrecessionNutationModel::Iau2000),
        FcnModel::default(),
    );
    assert!(matches!(result, Err(EarthRotationError::Configuration(_))));
}

#[test]
fn test_diurnal_tide_model_mismatch_is_rejected() {
    let config = RotationConfig::default();
    let model = config.model;
    let corrector = EopCorrector::new(
        Arc::new(drifting_table(Ut1Mode::Standard)),
        Arc::new(LeapSecondTable::default()),
        DiurnalTideModel::libration_only(PrecessionNutationModel::Iau2000),
        ZonalTideModel::empty(),
        config.diurnal_half_step_seconds,
        config.zonal_half_step_days,
    )
    .unwrap();
    assert_eq!(corrector.tide_model(), PrecessionNutationModel::Iau2000);
    let nutation =
        NutationEvaluator::new(model, NutationSeries::truncated(), config.nutation_half_step_days)
            .unwrap();
    let result = RotationComposer::from_parts(
        config,
        corrector,
        nutation,
        FrameBuilder::new(model),
        FcnModel::default(),
    );
    match result {
        Err(EarthRotationError::Configuration(msg)) => assert!(msg.contains("diurnal")),
        _ => panic!("expected a configuration error"),
    }
}

/// Leading terms (Omega, 2F-2D+2Omega) of each IERS series, in uas
const NUTATION_PSI: &str = "\
Luni-Solar argument multipliers and amplitudes (uas)
j = 0  Number of terms = 2
 1  -17206424.18   3338.60   0 0 0 0 1  0 0 0 0 0 0 0 0 0
 2   -1317091.22  -1369.60   0 0 2 -2 2  0 0 0 0 0 0 0 0 0
";
const NUTATION_EPS: &str = "\
j = 0  Number of terms = 2
 1   1537.70   9205233.10   0 0 0 0 1  0 0 0 0 0 0 0 0 0
 2   -458.70    573033.60   0 0 2 -2 2  0 0 0 0 0 0 0 0 0
";
const CIP_X: &str = "\
X = polynomial part + non-polynomial part (uas)
j = 0  Number of terms = 2
 1  -6844318.44   1328.67   0 0 0 0 1  0 0 0 0 0 0 0 0 0
 2   -523908.04   -544.76   0 0 2 -2 2  0 0 0 0 0 0 0 0 0
j = 1  Number of terms = 1
 3     -3328.48  205833.15   0 0 0 0 1  0 0 0 0 0 0 0 0 0
";
const CIP_Y: &str = "\
j = 0  Number of terms = 2
 1   1538.18   9205236.26   0 0 0 0 1  0 0 0 0 0 0 0 0 0
 2   -458.66    573033.42   0 0 2 -2 2  0 0 0 0 0 0 0 0 0
j = 1  Number of terms = 1
 3   153041.82       878.89   0 0 0 0 1  0 0 0 0 0 0 0 0 0
";

fn iers_directory() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, text) in [
        ("tab5.3a.txt", NUTATION_PSI),
        ("tab5.3b.txt", NUTATION_EPS),
        ("tab5.2a.txt", CIP_X),
        ("tab5.2b.txt", CIP_Y),
    ] {
        std::fs::write(dir.path().join(name), text).unwrap();
    }
    dir
}

#[test]
fn test_missing_tables_fail_when_required() {
    let config = RotationConfig {
        require_full_tables: true,
        ..Default::default()
    };
    let result = RotationComposer::new(
        config,
        Arc::new(drifting_table(Ut1Mode::Regularized)),
        Arc::new(LeapSecondTable::default()),
    );
    match result {
        Err(EarthRotationError::Configuration(msg)) => {
            assert!(msg.contains("nutation series"));
            assert!(msg.contains("zonal tides"));
        }
        _ => panic!("expected a configuration error"),
    }
}

#[test]
fn test_loaded_cip_series_against_equinox_chain() {
    let dir = iers_directory();
    let mut config = RotationConfig {
        use_fcn: false,
        require_full_tables: true,
        ..Default::default()
    };
    config.tables.directory = Some(dir.path().to_path_buf());
    let record = EopRecord {
        xp: 0.12,
        yp: 0.31,
        ut1_minus_tai: -32.6,
        ..Default::default()
    };
    let table = InMemoryEopTable::constant(FIRST, LAST, record, Ut1Mode::TideCorrected);
    let mut c = RotationComposer::new(
        config,
        Arc::new(table),
        Arc::new(LeapSecondTable::default()),
    )
    .unwrap();

    let model = PrecessionNutationModel::Iau2006;
    let frame = FrameBuilder::new(model);
    let series = NutationSeries::from_files(
        dir.path().join("tab5.3a.txt"),
        dir.path().join("tab5.3b.txt"),
    )
    .unwrap();
    assert_eq!(series.term_count(), 4);
    let cip = CipSeries::from_files(
        model,
        dir.path().join("tab5.2a.txt"),
        dir.path().join("tab5.2b.txt"),
    )
    .unwrap();

    for mjd in [53701.0, 53736.0, 53752.75] {
        let r = c
            .compute_rotation(&Epoch::tt_mjd(mjd), PartialFlags::none())
            .unwrap();
        let t = r.epoch.julian_centuries();

        // X and Y come from the loaded series, not from the matrix
        let (x_series, y_series) = cip.evaluate(t);
        assert_relative_eq!(r.x, x_series + r.dx, epsilon = 1e-15);
        assert_relative_eq!(r.y, y_series + r.dy, epsilon = 1e-15);

        let (dpsi, deps) = series.evaluate(t);
        let (dpsi, deps) = iau2006_adjustment(t, dpsi, deps);
        let npb = frame.npb(t, dpsi, deps);
        let gap = (x_series - npb[(2, 0)])
            .abs()
            .max((y_series - npb[(2, 1)]).abs());
        assert!(gap > 0.0 && gap < 5e-7, "series and matrix pole differ by {gap}");

        let w = rot_z(-r.s_prime) * rot_y(r.eop.xp) * rot_x(r.eop.yp);
        let classical = npb.transpose() * rot_z(-r.gast) * w;
        assert_matrix_close(&r.rotation, &classical, 2.0 * gap + 1e-10);
    }
}

#[test]
fn test_sequence_matches_fresh_composers() {
    let mut running = composer(drifting_table(Ut1Mode::Regularized));
    for k in 0..40 {
        let epoch = Epoch::tt_mjd(53736.0 + 0.013 * f64::from(k));
        let r = running.compute_rotation(&epoch, PartialFlags::none()).unwrap();
        let fresh = composer(drifting_table(Ut1Mode::Regularized))
            .compute_rotation(&epoch, PartialFlags::none())
            .unwrap();
        assert_matrix_close(&r.rotation, &fresh.rotation, 1e-10);
        assert_relative_eq!(r.x, fresh.x, epsilon = 1e-10);
        assert_relative_eq!(r.y, fresh.y, epsilon = 1e-10);
    }
}

#[test]
fn test_utc_and_tt_inputs_agree() {
    let leaps = LeapSecondTable::default();
    let tt = Epoch::tt_mjd(53736.3);
    let utc = tt.to_scale(TimeScale::UTC, &leaps);
    assert_relative_eq!(
        (tt.mjd_f64() - utc.mjd_f64()) * DAY_S,
        leaps.tai_minus_utc(utc.mjd_f64()) + 32.184,
        epsilon = 1e-5
    );

    let from_tt = composer(drifting_table(Ut1Mode::Standard))
        .compute_rotation(&tt, PartialFlags::none())
        .unwrap();
    let from_utc = composer(drifting_table(Ut1Mode::Standard))
        .compute_rotation(&utc, PartialFlags::none())
        .unwrap();
    assert_eq!(from_utc.epoch.scale(), TimeScale::TT);
    assert_matrix_close(&from_utc.rotation, &from_tt.rotation, 1e-12);
}

//! Frame bias, precession and the bias-precession-nutation matrix
//!
//! IAU 2006 uses the Capitaine et al. (2003) four-angle formulation
//! (Astronomy and Astrophysics 412, 567-586); IAU 2000 uses the Lieske
//! angles with the IAU 2000 precession-rate corrections. Both compose as
//!
//! P = R3(chi_a) R1(-omega_a) R3(-psi_a) R1(eps_0)
//!
//! and the full matrix is NPB = N P B, with X = NPB(2, 0) and Y = NPB(2, 1)
//! the CIP coordinates.

use nalgebra::Matrix3;

use crate::constants::ASEC2RAD;
use crate::framelib::{d_rot_x, d_rot_z, rot_x, rot_y, rot_z};
use crate::nutationlib::{mean_obliquity, PrecessionNutationModel};

/// Frame bias in longitude (arcsec)
const DPSI_BIAS: f64 = -0.041775;

/// Frame bias in obliquity (arcsec)
const DEPS_BIAS: f64 = -0.0068192;

/// ICRS right ascension of the J2000.0 mean equinox (arcsec)
const DRA0: f64 = -0.0146;

/// Obliquity at J2000.0 in arcseconds
fn epsilon_0(model: PrecessionNutationModel) -> f64 {
    match model {
        PrecessionNutationModel::Iau2006 => 84381.406,
        PrecessionNutationModel::Iau2000 => 84381.448,
    }
}

/// Precession angles of date, in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionAngles {
    pub eps0: f64,
    pub psi_a: f64,
    pub omega_a: f64,
    pub chi_a: f64,
    /// Mean obliquity of date
    pub eps_a: f64,
}

/// Compute the precession angles for a model
///
/// # Arguments
/// * `t` - TT time in Julian centuries since J2000.0
pub fn precession_angles(model: PrecessionNutationModel, t: f64) -> PrecessionAngles {
    let eps0 = epsilon_0(model);
    let (psi_a, omega_a, chi_a) = match model {
        PrecessionNutationModel::Iau2006 => {
            let psi_a = ((((-0.0000000951 * t + 0.000132851) * t - 0.00114045) * t - 1.0790069)
                * t
                + 5038.481507)
                * t;
            let omega_a = ((((0.0000003337 * t - 0.000000467) * t - 0.00772503) * t + 0.0512623)
                * t
                - 0.025754)
                * t
                + eps0;
            let chi_a = ((((-0.0000000560 * t + 0.000170663) * t - 0.00121197) * t - 2.3814292)
                * t
                + 10.556403)
                * t;
            (psi_a, omega_a, chi_a)
        }
        PrecessionNutationModel::Iau2000 => {
            // Lieske (1977) plus the IAU 2000 rate corrections
            let psi_a = (5038.7784 + (-1.07259 - 0.001147 * t) * t) * t - 0.29965 * t;
            let omega_a = eps0 + (0.05127 - 0.007726 * t) * t * t - 0.02524 * t;
            let chi_a = (10.5526 + (-2.38064 - 0.001125 * t) * t) * t;
            (psi_a, omega_a, chi_a)
        }
    };

    PrecessionAngles {
        eps0: eps0 * ASEC2RAD,
        psi_a: psi_a * ASEC2RAD,
        omega_a: omega_a * ASEC2RAD,
        chi_a: chi_a * ASEC2RAD,
        eps_a: mean_obliquity(model, t),
    }
}

/// Compute the precession rotation matrix from the precession angles
pub fn precession_matrix(angles: &PrecessionAngles) -> Matrix3<f64> {
    rot_z(angles.chi_a) * rot_x(-angles.omega_a) * rot_z(-angles.psi_a) * rot_x(angles.eps0)
}

/// Frame bias matrix from GCRS to the J2000.0 mean equator and equinox
pub fn frame_bias_matrix(model: PrecessionNutationModel) -> Matrix3<f64> {
    let eps0 = epsilon_0(model) * ASEC2RAD;
    rot_x(-DEPS_BIAS * ASEC2RAD) * rot_y(DPSI_BIAS * ASEC2RAD * eps0.sin()) * rot_z(DRA0 * ASEC2RAD)
}

/// The NPB matrix with its derivatives by the nutation angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpbMatrices {
    pub npb: Matrix3<f64>,
    pub d_dpsi: Option<Matrix3<f64>>,
    pub d_deps: Option<Matrix3<f64>>,
    pub angles: PrecessionAngles,
}

/// Builds bias-precession-nutation matrices for one model
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    model: PrecessionNutationModel,
    bias: Matrix3<f64>,
}

impl FrameBuilder {
    pub fn new(model: PrecessionNutationModel) -> Self {
        Self {
            model,
            bias: frame_bias_matrix(model),
        }
    }

    pub fn model(&self) -> PrecessionNutationModel {
        self.model
    }

    pub fn bias(&self) -> &Matrix3<f64> {
        &self.bias
    }

    pub fn precession_angles(&self, t: f64) -> PrecessionAngles {
        precession_angles(self.model, t)
    }

    /// NPB at `t` for nutation angles `dpsi`, `deps` (radians)
    pub fn npb(&self, t: f64, dpsi: f64, deps: f64) -> Matrix3<f64> {
        self.npb_with_partials(t, dpsi, deps, false, false).npb
    }

    /// NPB and, on request, its derivatives by dpsi and deps
    ///
    /// N = R1(-eps_a - deps) R3(-dpsi) R1(eps_a); each derivative swaps
    /// one factor of N for its derivative and carries P B through unchanged.
    pub fn npb_with_partials(
        &self,
        t: f64,
        dpsi: f64,
        deps: f64,
        want_dpsi: bool,
        want_deps: bool,
    ) -> NpbMatrices {
        let angles = self.precession_angles(t);
        let pb = precession_matrix(&angles) * self.bias;

        let eps_true = -angles.eps_a - deps;
        let r1_true = rot_x(eps_true);
        let r3_psi = rot_z(-dpsi);
        let r1_mean = rot_x(angles.eps_a);

        NpbMatrices {
            npb: r1_true * r3_psi * r1_mean * pb,
            d_dpsi: want_dpsi.then(|| -(r1_true * d_rot_z(-dpsi) * r1_mean) * pb),
            d_deps: want_deps.then(|| -(d_rot_x(eps_true) * r3_psi * r1_mean) * pb),
            angles,
        }
    }

    /// Convert nutation offsets (dpsi, deps) to CIP offsets (dX, dY), radians
    ///
    /// IERS Conventions (2010), eq. 5.25.
    pub fn offsets_to_cip(&self, t: f64, dpsi: f64, deps: f64) -> (f64, f64) {
        let a = self.precession_angles(t);
        let coupling = a.psi_a * a.eps0.cos() - a.chi_a;
        let sin_eps = a.eps_a.sin();
        (
            dpsi * sin_eps + coupling * deps,
            deps - coupling * sin_eps * dpsi,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::UASEC2RAD;
    use crate::nutationlib::{build_nutation_matrix, CIP_POLYNOMIAL_2006};
    use approx::assert_relative_eq;

    fn assert_orthogonal(m: &Matrix3<f64>) {
        let product = m.transpose() * m;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(product[(i, j)], expected, epsilon = 1e-14);
            }
        }
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_precession_at_j2000_is_identity() {
        for model in [PrecessionNutationModel::Iau2000, PrecessionNutationModel::Iau2006] {
            let p = precession_matrix(&precession_angles(model, 0.0));
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_relative_eq!(p[(i, j)], expected, epsilon = 1e-15);
                }
            }
        }
    }

    #[test]
    fn test_precession_orthogonality() {
        let p = precession_matrix(&precession_angles(PrecessionNutationModel::Iau2006, 0.1));
        assert_orthogonal(&p);
    }

    #[test]
    fn test_bias_matrix_reference_value() {
        // SOFA iauBi00 / iauBp00 rb[0][1] and rb[2][0]
        let b = frame_bias_matrix(PrecessionNutationModel::Iau2000);
        assert_relative_eq!(b[(0, 1)], -0.7078279744199196626e-7, epsilon = 1e-16);
        assert_relative_eq!(b[(2, 0)], -0.8056217380986972157e-7, epsilon = 1e-16);
        assert_orthogonal(&b);
    }

    #[test]
    fn test_nutation_factor_matches_closed_form() {
        let builder = FrameBuilder::new(PrecessionNutationModel::Iau2006);
        let t = 0.12;
        let (dpsi, deps) = (-1.5e-5, 4.0e-5);
        let a = builder.precession_angles(t);
        let pb = precession_matrix(&a) * builder.bias();
        let expected = build_nutation_matrix(a.eps_a, dpsi, deps) * pb;
        let npb = builder.npb(t, dpsi, deps);
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(npb[(i, j)], expected[(i, j)], epsilon = 1e-15);
            }
        }
        assert_orthogonal(&npb);
    }

    #[test]
    fn test_nutation_partials_match_finite_differences() {
        let builder = FrameBuilder::new(PrecessionNutationModel::Iau2000);
        let t = -0.07;
        let (dpsi, deps) = (2.0e-5, -3.0e-5);
        let h = 1e-7;
        let m = builder.npb_with_partials(t, dpsi, deps, true, true);
        let (Some(d_dpsi), Some(d_deps)) = (m.d_dpsi, m.d_deps) else {
            panic!("partials were requested");
        };
        let fd_psi = (builder.npb(t, dpsi + h, deps) - builder.npb(t, dpsi - h, deps)) / (2.0 * h);
        let fd_eps = (builder.npb(t, dpsi, deps + h) - builder.npb(t, dpsi, deps - h)) / (2.0 * h);
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(d_dpsi[(i, j)], fd_psi[(i, j)], epsilon = 1e-8);
                assert_relative_eq!(d_deps[(i, j)], fd_eps[(i, j)], epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_partials_only_when_requested() {
        let builder = FrameBuilder::new(PrecessionNutationModel::Iau2006);
        let m = builder.npb_with_partials(0.0, 0.0, 0.0, false, true);
        assert!(m.d_dpsi.is_none());
        assert!(m.d_deps.is_some());
    }

    #[test]
    fn test_cip_x_at_j2000_is_frame_bias() {
        let builder = FrameBuilder::new(PrecessionNutationModel::Iau2006);
        let npb = builder.npb(0.0, 0.0, 0.0);
        assert_relative_eq!(npb[(2, 0)], CIP_POLYNOMIAL_2006[0][0] * UASEC2RAD, epsilon = 0.5 * UASEC2RAD);
    }

    #[test]
    fn test_cip_x_follows_polynomial_without_nutation() {
        let builder = FrameBuilder::new(PrecessionNutationModel::Iau2006);
        let t = 0.01;
        let x = builder.npb(t, 0.0, 0.0)[(2, 0)];
        let poly: f64 = CIP_POLYNOMIAL_2006
            .iter()
            .rev()
            .fold(0.0, |acc, row| acc * t + row[0]);
        assert_relative_eq!(x, poly * UASEC2RAD, epsilon = 1e-3 * ASEC2RAD);
    }

    #[test]
    fn test_offsets_to_cip() {
        let builder = FrameBuilder::new(PrecessionNutationModel::Iau2006);
        // At J2000 the coupling vanishes: dX = dpsi sin(eps0), dY = deps
        let (dx, dy) = builder.offsets_to_cip(0.0, 1e-9, 2e-9);
        assert_relative_eq!(dx, 1e-9 * (84381.406 * ASEC2RAD).sin(), epsilon = 1e-24);
        assert_relative_eq!(dy, 2e-9, epsilon = 1e-24);

        // Away from J2000 the mapping agrees with the NPB matrix itself
        let t = 0.2;
        let (dpsi, deps) = (3e-9, -2e-9);
        let base = builder.npb(t, 0.0, 0.0);
        let moved = builder.npb(t, dpsi, deps);
        let (dx, dy) = builder.offsets_to_cip(t, dpsi, deps);
        assert_relative_eq!(dx, moved[(2, 0)] - base[(2, 0)], epsilon = 1e-13);
        assert_relative_eq!(dy, moved[(2, 1)] - base[(2, 1)], epsilon = 1e-13);
    }
}

//! Elementary rotations and the TRS to CRS rotation composer
//!
//! Rotations are passive (frame rotations), so `rot_z(a)` turns the
//! coordinate axes by `a` about z:
//!
//! ```text
//! R1(a) = | 1   0   0 |   R2(a) = | c   0  -s |   R3(a) = |  c   s   0 |
//!         | 0   c   s |           | 0   1   0 |           | -s   c   0 |
//!         | 0  -s   c |           | s   0   c |           |  0   0   1 |
//! ```
//!
//! Matrices are indexed 0-based, `m[(row, col)]`.

mod composer;
#[cfg(test)]
mod tests;

pub use self::composer::{
    FrameTransformResult, ParameterOffsets, PartialFlags, RotationComposer,
};

use nalgebra::Matrix3;

/// Rotation about the x axis
pub fn rot_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

/// Rotation about the y axis
pub fn rot_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

/// Rotation about the z axis
pub fn rot_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

/// Derivative of [`rot_x`] with respect to the angle
pub fn d_rot_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(0.0, 0.0, 0.0, 0.0, -s, c, 0.0, -c, -s)
}

/// Derivative of [`rot_y`] with respect to the angle
pub fn d_rot_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(-s, 0.0, -c, 0.0, 0.0, 0.0, c, 0.0, -s)
}

/// Derivative of [`rot_z`] with respect to the angle
pub fn d_rot_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(-s, c, 0.0, -c, -s, 0.0, 0.0, 0.0, 0.0)
}

/// Rotation axis, numbered 1, 2, 3 in the IERS notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn rotation(self, angle: f64) -> Matrix3<f64> {
        match self {
            Axis::X => rot_x(angle),
            Axis::Y => rot_y(angle),
            Axis::Z => rot_z(angle),
        }
    }

    pub fn rotation_derivative(self, angle: f64) -> Matrix3<f64> {
        match self {
            Axis::X => d_rot_x(angle),
            Axis::Y => d_rot_y(angle),
            Axis::Z => d_rot_z(angle),
        }
    }
}

/// An elementary rotation and, when requested, its derivative by the angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationFactor {
    pub axis: Axis,
    pub angle: f64,
    pub matrix: Matrix3<f64>,
    pub derivative: Option<Matrix3<f64>>,
}

impl RotationFactor {
    pub fn new(axis: Axis, angle: f64, want_derivative: bool) -> Self {
        Self {
            axis,
            angle,
            matrix: axis.rotation(angle),
            derivative: want_derivative.then(|| axis.rotation_derivative(angle)),
        }
    }

    /// The stored derivative, or a fresh one if it was not requested
    pub fn derivative_matrix(&self) -> Matrix3<f64> {
        self.derivative
            .unwrap_or_else(|| self.axis.rotation_derivative(self.angle))
    }
}

/// Product of the factors left to right, optionally with one factor
/// replaced by its derivative
pub fn chain_product(factors: &[RotationFactor], differentiate: Option<usize>) -> Matrix3<f64> {
    factors
        .iter()
        .enumerate()
        .fold(Matrix3::identity(), |acc, (i, f)| {
            if differentiate == Some(i) {
                acc * f.derivative_matrix()
            } else {
                acc * f.matrix
            }
        })
}

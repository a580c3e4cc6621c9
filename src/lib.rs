//! Terrestrial-to-celestial rotation with Earth-orientation partials
//!
//! Computes the rotation from the Earth-fixed frame (TRS) to the celestial
//! frame (CRS) at an epoch, together with the partial derivatives of that
//! rotation with respect to polar motion, UT1 and the celestial pole offsets,
//! following the IERS Conventions (IAU 2000A / IAU 2006).
//!
//! # Main Components
//!
//! - [`fundamentals`] - Delaunay and planetary fundamental arguments
//! - [`serieslib`] - harmonic (Poisson) series evaluation and IERS table parsing
//! - [`cachelib`] - windowed interpolation caches for expensive series
//! - [`eoplib`] - EOP table access, tidal/libration corrections, EOP corrector
//! - [`nutationlib`] - nutation angles, CIP X/Y, CIO locator, FCN model
//! - [`precessionlib`] - bias-precession-nutation frame builder
//! - [`earthlib`] - Earth rotation angle and sidereal time
//! - [`framelib`] - elementary rotation factors and the rotation composer

pub mod cachelib;
pub mod config;
pub mod constants;
pub mod earthlib;
pub mod eoplib;
pub mod framelib;
pub mod fundamentals;
pub mod nutationlib;
pub mod precessionlib;
pub mod serieslib;
pub mod time;

use std::path::PathBuf;
use thiserror::Error;

pub use self::config::{RotationConfig, TablePaths};
pub use self::eoplib::{
    CorrectedEop, EopCorrector, EopRecord, EopTable, InMemoryEopTable, Ut1Mode,
};
pub use self::framelib::{
    FrameTransformResult, ParameterOffsets, PartialFlags, RotationComposer, RotationFactor,
};
pub use self::nutationlib::{FcnModel, NutationEvaluator, NutationSeries, PrecessionNutationModel};
pub use self::precessionlib::FrameBuilder;
pub use self::time::{Epoch, LeapSecondTable, LeapSeconds, TimeScale};

/// Main error type for Earth rotation computations
#[derive(Error, Debug)]
pub enum EarthRotationError {
    /// The EOP table does not cover the requested day
    #[error("No EOP data for MJD {mjd} (table covers {first}..={last})")]
    DataGap { mjd: i32, first: i32, last: i32 },

    /// Invalid or inconsistent configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error when a file I/O operation fails
    #[error("File I/O error on {path:?}: {source}")]
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed line in a series, correction or configuration table
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type for Earth rotation operations
pub type Result<T> = std::result::Result<T, EarthRotationError>;

/// Convert a std::io::Error to EarthRotationError with path context
pub fn io_err(path: impl Into<PathBuf>, err: std::io::Error) -> EarthRotationError {
    EarthRotationError::FileError {
        path: path.into(),
        source: err,
    }
}

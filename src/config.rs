//! Rotation composer configuration
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! model = "iau2006"
//! nutation_half_step_days = 0.125
//! diurnal_half_step_seconds = 1296.0
//! zonal_half_step_days = 0.05
//! use_fcn = true
//! fcn_threshold_rad = 1e-9
//! require_full_tables = false
//!
//! [tables]
//! directory = "/usr/share/iers"
//! ocean_tides = "ocean_tides.txt"
//! ```
//!
//! Without the full nutation and CIP tables the rotation falls back to the
//! 77-term lunisolar series, which is good to about 1 mas.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::nutationlib::PrecessionNutationModel;
use crate::{io_err, EarthRotationError, Result};

/// Optional paths to full-length series and correction tables
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablePaths {
    /// Searched for the IERS file names (tab5.2a.txt, tab5.2b.txt,
    /// tab5.3a.txt, tab5.3b.txt) of any series path left unset
    pub directory: Option<PathBuf>,
    /// IERS nutation in longitude (tab5.3a)
    pub nutation_psi: Option<PathBuf>,
    /// IERS nutation in obliquity (tab5.3b)
    pub nutation_eps: Option<PathBuf>,
    /// IERS CIP X series (tab5.2a)
    pub cip_x: Option<PathBuf>,
    /// IERS CIP Y series (tab5.2b)
    pub cip_y: Option<PathBuf>,
    pub cip_residual: Option<PathBuf>,
    /// Diurnal and semidiurnal ocean tide terms for xp, yp, UT1
    pub ocean_tides: Option<PathBuf>,
    /// Zonal tide terms for UT1, LOD and Omega
    pub zonal_tides: Option<PathBuf>,
    /// FCN amplitude table
    pub fcn: Option<PathBuf>,
}

/// Settings fixed for the lifetime of a rotation composer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotationConfig {
    pub model: PrecessionNutationModel,
    /// Half-width of the nutation-angle window (days)
    pub nutation_half_step_days: f64,
    /// Half-width of the diurnal tide window (seconds)
    pub diurnal_half_step_seconds: f64,
    /// Half-width of the zonal tide window (days)
    pub zonal_half_step_days: f64,
    /// Substitute the FCN model when the table's pole offsets are negligible
    pub use_fcn: bool,
    /// Offsets below this magnitude (rad) count as negligible
    pub fcn_threshold_rad: f64,
    /// Fail at construction instead of warning when a table is missing
    pub require_full_tables: bool,
    pub tables: TablePaths,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            model: PrecessionNutationModel::default(),
            nutation_half_step_days: 0.125,
            diurnal_half_step_seconds: 0.015 * 86400.0,
            zonal_half_step_days: 0.05,
            use_fcn: true,
            fcn_threshold_rad: 1e-9,
            require_full_tables: false,
            tables: TablePaths::default(),
        }
    }
}

impl RotationConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| {
            let line = e
                .span()
                .and_then(|span| text.get(..span.start))
                .map_or(0, |head| head.matches('\n').count() + 1);
            EarthRotationError::Parse {
                line,
                message: e.message().to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// Relative table paths are resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            config.tables.resolve_against(dir);
        }
        Ok(config)
    }

    /// Reject non-positive or non-finite window steps and thresholds
    pub fn validate(&self) -> Result<()> {
        let steps = [
            ("nutation_half_step_days", self.nutation_half_step_days),
            ("diurnal_half_step_seconds", self.diurnal_half_step_seconds),
            ("zonal_half_step_days", self.zonal_half_step_days),
            ("fcn_threshold_rad", self.fcn_threshold_rad),
        ];
        for (name, value) in steps {
            if !(value.is_finite() && value > 0.0) {
                return Err(EarthRotationError::Configuration(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.tables.nutation_psi.is_some() != self.tables.nutation_eps.is_some() {
            return Err(EarthRotationError::Configuration(
                "nutation_psi and nutation_eps must be given together".into(),
            ));
        }
        if self.tables.cip_x.is_some() != self.tables.cip_y.is_some() {
            return Err(EarthRotationError::Configuration(
                "cip_x and cip_y must be given together".into(),
            ));
        }
        Ok(())
    }
}

impl TablePaths {
    /// Copy with unset series paths filled from `directory` where the
    /// IERS-named file exists
    ///
    /// Paths are filled in pairs, so a directory holding only one half of a
    /// pair leaves both unset.
    pub fn discovered(&self) -> TablePaths {
        let mut tables = self.clone();
        let Some(dir) = &self.directory else {
            return tables;
        };
        let pairs = [
            (&mut tables.nutation_psi, &mut tables.nutation_eps, "tab5.3a.txt", "tab5.3b.txt"),
            (&mut tables.cip_x, &mut tables.cip_y, "tab5.2a.txt", "tab5.2b.txt"),
        ];
        for (first, second, first_name, second_name) in pairs {
            if first.is_some() || second.is_some() {
                continue;
            }
            let (a, b) = (dir.join(first_name), dir.join(second_name));
            if a.is_file() && b.is_file() {
                debug!(first = %a.display(), second = %b.display(), "found series tables");
                *first = Some(a);
                *second = Some(b);
            }
        }
        tables
    }

    fn resolve_against(&mut self, dir: &Path) {
        for path in [
            &mut self.directory,
            &mut self.nutation_psi,
            &mut self.nutation_eps,
            &mut self.cip_x,
            &mut self.cip_y,
            &mut self.cip_residual,
            &mut self.ocean_tides,
            &mut self.zonal_tides,
            &mut self.fcn,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
    }
}

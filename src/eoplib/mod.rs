//! Earth orientation parameter tables and their tidal corrections
//!
//! An [`EopTable`] is an externally sourced list of daily pole/UT1/bias
//! samples keyed by integer UTC MJD. [`EopCorrector`] interpolates it to an
//! arbitrary epoch and applies the diurnal (ocean tide, libration) and zonal
//! tide corrections selected by the table's [`Ut1Mode`].
//!
//! Table units follow the IERS bulletins: pole coordinates and nutation
//! offsets in arcseconds, UT1 - TAI in seconds. Everything leaving
//! [`EopCorrector`] is in radians and seconds.

mod corrector;
mod tides;

pub use self::corrector::{CorrectedEop, EopCorrector};
pub use self::tides::{DiurnalTideModel, ZonalTideModel, LIBRATION_TERMS};

use std::collections::BTreeMap;

/// How the UT1 column of a table relates to the tidal corrections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ut1Mode {
    /// Regularised UT1R: zonal tides removed, diurnal tides absent.
    /// Both corrections are applied.
    Regularized,
    /// Zonal tides already in UT1, diurnal tides absent
    Standard,
    /// Both tidal effects already in the table; nothing is applied
    TideCorrected,
}

impl Ut1Mode {
    pub fn applies_diurnal(self) -> bool {
        !matches!(self, Ut1Mode::TideCorrected)
    }

    pub fn applies_zonal(self) -> bool {
        matches!(self, Ut1Mode::Regularized)
    }
}

/// One daily sample of a raw EOP table, in table units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EopRecord {
    /// Pole x coordinate (arcsec)
    pub xp: f64,
    /// Pole y coordinate (arcsec)
    pub yp: f64,
    /// UT1 - TAI (s)
    pub ut1_minus_tai: f64,
    /// Nutation offset in longitude (arcsec)
    pub dpsi: f64,
    /// Nutation offset in obliquity (arcsec)
    pub deps: f64,
}

/// Read-only access to a loaded EOP/bias table
pub trait EopTable {
    /// Sample at an integer UTC MJD key, if the table holds one
    fn lookup(&self, mjd: i32) -> Option<EopRecord>;

    /// Spacing of consecutive keys in days
    fn interval_days(&self) -> i32 {
        1
    }

    fn ut1_mode(&self) -> Ut1Mode;

    /// First and last keys held, if any
    fn range(&self) -> Option<(i32, i32)>;
}

/// EOP table held in memory, keyed by UTC MJD
#[derive(Debug, Clone)]
pub struct InMemoryEopTable {
    records: BTreeMap<i32, EopRecord>,
    ut1_mode: Ut1Mode,
    interval: i32,
}

impl InMemoryEopTable {
    pub fn new(ut1_mode: Ut1Mode) -> Self {
        Self {
            records: BTreeMap::new(),
            ut1_mode,
            interval: 1,
        }
    }

    /// Build from (MJD, record) pairs with daily spacing
    pub fn from_records(
        records: impl IntoIterator<Item = (i32, EopRecord)>,
        ut1_mode: Ut1Mode,
    ) -> Self {
        Self {
            records: records.into_iter().collect(),
            ut1_mode,
            interval: 1,
        }
    }

    /// A table holding the same record on every day of `first..=last`
    pub fn constant(first: i32, last: i32, record: EopRecord, ut1_mode: Ut1Mode) -> Self {
        Self::from_records((first..=last).map(|mjd| (mjd, record)), ut1_mode)
    }

    /// Use a key spacing other than one day
    pub fn with_interval(mut self, interval_days: i32) -> Self {
        self.interval = interval_days.max(1);
        self
    }

    pub fn insert(&mut self, mjd: i32, record: EopRecord) {
        self.records.insert(mjd, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EopTable for InMemoryEopTable {
    fn lookup(&self, mjd: i32) -> Option<EopRecord> {
        self.records.get(&mjd).copied()
    }

    fn interval_days(&self) -> i32 {
        self.interval
    }

    fn ut1_mode(&self) -> Ut1Mode {
        self.ut1_mode
    }

    fn range(&self) -> Option<(i32, i32)> {
        let first = self.records.keys().next()?;
        let last = self.records.keys().next_back()?;
        Some((*first, *last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flags() {
        assert!(Ut1Mode::Regularized.applies_diurnal());
        assert!(Ut1Mode::Regularized.applies_zonal());
        assert!(Ut1Mode::Standard.applies_diurnal());
        assert!(!Ut1Mode::Standard.applies_zonal());
        assert!(!Ut1Mode::TideCorrected.applies_diurnal());
        assert!(!Ut1Mode::TideCorrected.applies_zonal());
    }

    #[test]
    fn test_in_memory_lookup_and_range() {
        let rec = EopRecord {
            xp: 0.1,
            ..Default::default()
        };
        let mut table = InMemoryEopTable::constant(58000, 58004, rec, Ut1Mode::Standard);
        assert_eq!(table.len(), 5);
        assert_eq!(table.range(), Some((58000, 58004)));
        assert_eq!(table.lookup(58002), Some(rec));
        assert_eq!(table.lookup(58005), None);

        table.insert(57990, EopRecord::default());
        assert_eq!(table.range(), Some((57990, 58004)));
    }

    #[test]
    fn test_empty_table_has_no_range() {
        let table = InMemoryEopTable::new(Ut1Mode::Regularized);
        assert!(table.is_empty());
        assert_eq!(table.range(), None);
        assert_eq!(table.interval_days(), 1);
    }
}

//! Harmonic and Poisson series evaluation
//!
//! Every periodic model in the crate (nutation, CIP X/Y, CIO locator, tidal
//! and libration corrections) is a table of rows, each holding integer
//! multipliers of the fundamental arguments and a (sin, cos) amplitude pair
//! per output component. A [`PoissonSeries`] groups such tables into tiers
//! multiplied by successive powers of time and adds a polynomial part.
//!
//! Rows are summed from the last (smallest) term to the first (largest), the
//! order the published tables were built for.

mod parse;

pub use self::parse::{parse_iers_series, parse_term_table, read_table_file, AmplitudeOrder};

use crate::constants::TAU;

/// One row of a harmonic series
///
/// `K` fundamental-argument multipliers and `M` output components, each
/// with its (sin, cos) amplitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term<const K: usize, const M: usize> {
    pub multipliers: [i8; K],
    pub amplitudes: [[f64; 2]; M],
}

impl<const K: usize, const M: usize> Term<K, M> {
    pub const fn new(multipliers: [i8; K], amplitudes: [[f64; 2]; M]) -> Self {
        Self {
            multipliers,
            amplitudes,
        }
    }

    /// Phase of this row for the given fundamental arguments, reduced to one turn
    pub fn argument(&self, args: &[f64; K]) -> f64 {
        let mut arg = 0.0;
        for (&m, &fa) in self.multipliers.iter().zip(args) {
            if m != 0 {
                arg += f64::from(m) * fa;
            }
        }
        arg % TAU
    }
}

/// Sum a table of rows, smallest term first
pub fn sum_terms<const K: usize, const M: usize>(
    terms: &[Term<K, M>],
    args: &[f64; K],
) -> [f64; M] {
    let mut acc = [0.0f64; M];
    for term in terms.iter().rev() {
        let (s, c) = term.argument(args).sin_cos();
        for (out, [a_sin, a_cos]) in acc.iter_mut().zip(term.amplitudes) {
            *out += a_sin * s + a_cos * c;
        }
    }
    acc
}

/// Polynomial plus tiered harmonic series in powers of time
///
/// value(t) = scale * sum_j t^j * (polynomial_j + sum_i row_ij)
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonSeries<const K: usize, const M: usize> {
    tiers: Vec<Vec<Term<K, M>>>,
    polynomial: Vec<[f64; M]>,
    scale: f64,
}

impl<const K: usize, const M: usize> PoissonSeries<K, M> {
    /// Build a series from owned tiers and polynomial coefficients
    ///
    /// Amplitudes and polynomial are in table units; `scale` converts the
    /// final sum (for example microarcseconds to radians).
    pub fn new(tiers: Vec<Vec<Term<K, M>>>, polynomial: Vec<[f64; M]>, scale: f64) -> Self {
        Self {
            tiers,
            polynomial,
            scale,
        }
    }

    /// Build a series from compile-time tables
    pub fn from_static(tiers: &[&[Term<K, M>]], polynomial: &[[f64; M]], scale: f64) -> Self {
        Self::new(
            tiers.iter().map(|tier| tier.to_vec()).collect(),
            polynomial.to_vec(),
            scale,
        )
    }

    /// A series that always evaluates to zero
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), 1.0)
    }

    /// Replace the polynomial part, keeping the periodic tiers
    pub fn with_polynomial(mut self, polynomial: &[[f64; M]]) -> Self {
        self.polynomial = polynomial.to_vec();
        self
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of periodic tiers (highest power of t plus one)
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Total number of periodic rows across all tiers
    pub fn term_count(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.term_count() == 0 && self.polynomial.iter().all(|p| p.iter().all(|&c| c == 0.0))
    }

    /// Evaluate at `t` (Julian centuries or whatever unit the table uses)
    pub fn evaluate(&self, t: f64, args: &[f64; K]) -> [f64; M] {
        let degree = self.tiers.len().max(self.polynomial.len());
        let mut acc = [0.0f64; M];
        // Horner over the tiers, highest power first
        for j in (0..degree).rev() {
            let mut level = match self.tiers.get(j) {
                Some(rows) => sum_terms(rows, args),
                None => [0.0; M],
            };
            if let Some(poly) = self.polynomial.get(j) {
                for (l, p) in level.iter_mut().zip(poly) {
                    *l += p;
                }
            }
            for (a, l) in acc.iter_mut().zip(level) {
                *a = *a * t + l;
            }
        }
        acc.map(|v| v * self.scale)
    }
}

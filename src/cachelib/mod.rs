//! Windowed interpolation caches
//!
//! The series behind nutation and the tidal EOP corrections are far too
//! expensive to evaluate at every epoch of a propagation loop, while their
//! values vary smoothly over a fraction of a day. A [`WindowedCache`] keeps
//! two or three equally spaced samples bracketing recent queries and
//! interpolates between them.
//!
//! State per cache: empty until the first query, then a window of samples.
//! A query inside the window interpolates; one within a half step beyond
//! either bound slides the window by one spacing (one new evaluation); any
//! other query rebuilds the window centred on it.
//!
//! Interpolation error for the quadratic variant is bounded by
//! `|f'''| * h^3 / (9 * sqrt(3))` with `h` the half step; the linear variant
//! by `|f''| * h^2 / 2`.

use tracing::debug;

use crate::time::Epoch;
use crate::{EarthRotationError, Result};

/// Interpolation scheme, which also fixes the number of samples held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Two samples at `t - h` and `t + h`
    Linear,
    /// Three samples at `t - h`, `t`, `t + h`
    Quadratic,
}

impl Interpolation {
    fn sample_count(self) -> usize {
        match self {
            Interpolation::Linear => 2,
            Interpolation::Quadratic => 3,
        }
    }
}

/// One bracket point held by a cache
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionSample<const N: usize> {
    pub epoch: Epoch,
    pub value: [f64; N],
}

/// Lazily built window of samples of an `N`-component function of time
#[derive(Debug, Clone)]
pub struct WindowedCache<const N: usize> {
    name: &'static str,
    interpolation: Interpolation,
    half_step: f64,
    samples: Vec<CorrectionSample<N>>,
}

impl<const N: usize> WindowedCache<N> {
    /// Create an empty cache
    ///
    /// # Arguments
    /// * `name` - label used in log events
    /// * `interpolation` - linear (2 samples) or quadratic (3 samples)
    /// * `half_step_days` - half window width in days; must be positive and finite
    pub fn new(name: &'static str, interpolation: Interpolation, half_step_days: f64) -> Result<Self> {
        if !(half_step_days.is_finite() && half_step_days > 0.0) {
            return Err(EarthRotationError::Configuration(format!(
                "{name} cache half step must be positive, got {half_step_days} days"
            )));
        }
        Ok(Self {
            name,
            interpolation,
            half_step: half_step_days,
            samples: Vec::with_capacity(interpolation.sample_count()),
        })
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn half_step(&self) -> f64 {
        self.half_step
    }

    /// Distance between neighbouring samples in days
    pub fn spacing(&self) -> f64 {
        match self.interpolation {
            Interpolation::Linear => 2.0 * self.half_step,
            Interpolation::Quadratic => self.half_step,
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.samples.is_empty()
    }

    pub fn samples(&self) -> &[CorrectionSample<N>] {
        &self.samples
    }

    /// First and last sample epochs of the current window
    pub fn bounds(&self) -> Option<(Epoch, Epoch)> {
        match (self.samples.first(), self.samples.last()) {
            (Some(lo), Some(hi)) => Some((lo.epoch, hi.epoch)),
            _ => None,
        }
    }

    /// Drop the window; the next query rebuilds it
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Interpolated value at `epoch`, evaluating `f` only when the window moves
    pub fn value_at<F>(&mut self, epoch: &Epoch, mut f: F) -> [f64; N]
    where
        F: FnMut(&Epoch) -> [f64; N],
    {
        let (lo, hi) = match self.bounds() {
            Some(b) => b,
            None => {
                self.rebuild(epoch, &mut f);
                return self.interpolate(epoch);
            }
        };

        let past_hi = epoch.days_since(&hi);
        let before_lo = lo.days_since(epoch);

        if past_hi <= 0.0 && before_lo <= 0.0 {
            // inside the window
        } else if past_hi > 0.0 && past_hi <= self.half_step {
            let next = hi.add_days(self.spacing());
            self.samples.remove(0);
            self.samples.push(CorrectionSample {
                epoch: next,
                value: f(&next),
            });
            debug!(cache = self.name, mjd = next.mjd_f64(), "window slid forward");
        } else if before_lo > 0.0 && before_lo <= self.half_step {
            let prev = lo.add_days(-self.spacing());
            self.samples.pop();
            self.samples.insert(
                0,
                CorrectionSample {
                    epoch: prev,
                    value: f(&prev),
                },
            );
            debug!(cache = self.name, mjd = prev.mjd_f64(), "window slid backward");
        } else {
            self.rebuild(epoch, &mut f);
        }

        self.interpolate(epoch)
    }

    fn rebuild<F>(&mut self, epoch: &Epoch, f: &mut F)
    where
        F: FnMut(&Epoch) -> [f64; N],
    {
        self.samples.clear();
        let offsets: &[f64] = match self.interpolation {
            Interpolation::Linear => &[-1.0, 1.0],
            Interpolation::Quadratic => &[-1.0, 0.0, 1.0],
        };
        for &k in offsets {
            let at = if k == 0.0 {
                *epoch
            } else {
                epoch.add_days(k * self.half_step)
            };
            self.samples.push(CorrectionSample {
                epoch: at,
                value: f(&at),
            });
        }
        debug!(cache = self.name, mjd = epoch.mjd_f64(), "window rebuilt");
    }

    fn interpolate(&self, epoch: &Epoch) -> [f64; N] {
        let mut out = [0.0f64; N];
        match self.samples.as_slice() {
            [s1, s2] => {
                let w = epoch.days_since(&s1.epoch) / s2.epoch.days_since(&s1.epoch);
                for (k, o) in out.iter_mut().enumerate() {
                    *o = s1.value[k] + w * (s2.value[k] - s1.value[k]);
                }
            }
            [s1, s2, s3] => {
                let x = epoch.days_since(&s2.epoch) / s2.epoch.days_since(&s1.epoch);
                for (k, o) in out.iter_mut().enumerate() {
                    let (y1, y2, y3) = (s1.value[k], s2.value[k], s3.value[k]);
                    *o = y2 + x * (y3 - y1) / 2.0 + x * x * ((y3 + y1) / 2.0 - y2);
                }
            }
            _ => {}
        }
        out
    }
}

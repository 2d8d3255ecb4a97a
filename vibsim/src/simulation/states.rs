//! Core state types for the oscillator
//!
//! - `NVec2` holds the ODE state `(x, v)`
//! - `TimeSeries` is the sampled response of one integration run

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Number of samples in every simulated time series
pub const SAMPLE_COUNT: usize = 1000;

/// Build the ODE state vector from displacement and velocity
pub fn state(x: f64, v: f64) -> NVec2 {
    NVec2::new(x, v)
}

/// `n` uniformly spaced points over `[start, end]`, both ends included exactly
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            grid[n - 1] = end;
            grid
        }
    }
}

/// Displacement and velocity sampled on a time grid
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub t: Vec<f64>, // sample times
    pub x: Vec<f64>, // displacement
    pub v: Vec<f64>, // velocity
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// `(time, displacement)` pairs in time order
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.x.iter().copied())
    }

    /// Displacement at the last sample
    pub fn final_displacement(&self) -> Option<f64> {
        self.x.last().copied()
    }

    /// Largest absolute displacement over the run
    pub fn peak_displacement(&self) -> f64 {
        self.x.iter().fold(0.0, |acc: f64, x| acc.max(x.abs()))
    }

    /// Number of sign changes of the displacement, ignoring samples with
    /// `|x| <= tolerance`
    pub fn zero_crossings(&self, tolerance: f64) -> usize {
        let mut crossings = 0;
        let mut last_sign = 0.0;
        for &x in &self.x {
            if x.abs() <= tolerance {
                continue;
            }
            let sign = x.signum();
            if last_sign != 0.0 && sign != last_sign {
                crossings += 1;
            }
            last_sign = sign;
        }
        crossings
    }
}

//! Characteristic vibration parameters
//!
//! All quantities are closed-form functions of [`SystemParameters`]; none of
//! them is read off a simulated trajectory.

use std::f64::consts::PI;
use std::fmt;

use super::params::SystemParameters;

/// Damping regime of the oscillator, decided by the damping ratio ζ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DampingRegime {
    Undamped, // ζ == 0, sustained oscillation
    Underdamped, // 0 < ζ < 1, decaying oscillation
    CriticallyDamped, // ζ == 1, fastest return without oscillation
    Overdamped, // ζ > 1, slower return without oscillation
}

impl DampingRegime {
    /// Classify by exact comparison against the boundaries 0 and 1
    #[allow(clippy::float_cmp)]
    pub fn classify(zeta: f64) -> Self {
        if zeta == 0.0 {
            DampingRegime::Undamped
        } else if zeta > 0.0 && zeta < 1.0 {
            DampingRegime::Underdamped
        } else if zeta == 1.0 {
            DampingRegime::CriticallyDamped
        } else {
            DampingRegime::Overdamped
        }
    }

    /// Whether the free response oscillates about equilibrium
    pub fn oscillates(&self) -> bool {
        matches!(self, DampingRegime::Undamped | DampingRegime::Underdamped)
    }

    /// One-sentence reading of the response curve
    pub fn description(&self) -> &'static str {
        match self {
            DampingRegime::Undamped => {
                "The system is undamped: the oscillation continues indefinitely without losing amplitude."
            }
            DampingRegime::Underdamped => {
                "The system is underdamped: it oscillates with an amplitude that keeps decreasing."
            }
            DampingRegime::CriticallyDamped => {
                "The system is critically damped: it returns to equilibrium without oscillating."
            }
            DampingRegime::Overdamped => {
                "The system is overdamped: it returns to equilibrium without oscillating, but more slowly."
            }
        }
    }
}

impl fmt::Display for DampingRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DampingRegime::Undamped => "undamped",
            DampingRegime::Underdamped => "underdamped",
            DampingRegime::CriticallyDamped => "critically damped",
            DampingRegime::Overdamped => "overdamped",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibrationMetrics {
    pub natural_frequency: f64, // ω_n (rad/s)
    pub damping_ratio: f64, // ζ
    pub damped_frequency: Option<f64>, // ω_d (rad/s), only when ζ < 1
    pub spring_force: f64, // F = k x0 (N)
    pub regime: DampingRegime,
}

impl VibrationMetrics {
    pub fn from_params(p: &SystemParameters) -> Self {
        let natural_frequency = (p.k / p.m).sqrt();
        let damping_ratio = p.c / (2.0 * (p.k * p.m).sqrt());

        let damped_frequency = if damping_ratio < 1.0 {
            Some(natural_frequency * (1.0 - damping_ratio * damping_ratio).sqrt())
        } else {
            None
        };

        Self {
            natural_frequency,
            damping_ratio,
            damped_frequency,
            spring_force: p.k * p.x0,
            regime: DampingRegime::classify(damping_ratio),
        }
    }

    pub fn natural_frequency_hz(&self) -> f64 {
        self.natural_frequency / (2.0 * PI)
    }

    /// Undamped period 2π/ω_n
    pub fn period(&self) -> f64 {
        2.0 * PI / self.natural_frequency
    }

    /// Period of the decaying oscillation, absent when the system does not oscillate
    pub fn damped_period(&self) -> Option<f64> {
        self.damped_frequency
            .filter(|wd| *wd > 0.0)
            .map(|wd| 2.0 * PI / wd)
    }

    /// Exponent ζ ω_n of the envelope exp(-ζ ω_n t)
    pub fn decay_rate(&self) -> f64 {
        self.damping_ratio * self.natural_frequency
    }
}

/// Damping coefficient at which ζ = 1
pub fn critical_damping(p: &SystemParameters) -> f64 {
    2.0 * (p.k * p.m).sqrt()
}

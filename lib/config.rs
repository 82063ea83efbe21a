//! Physical and numerical parameters of a tunneling run.
//!
//! Parameters are given in the units a person would type into a form
//! (nanometers, femtoseconds, electron-volts, picometers, attoseconds) and are
//! converted once to SI by [`Params::to_si`].
//!
//! ```
//! use tunneling::config::Params;
//!
//! let params = Params { barrier_height: 0.0, ..Params::default() };
//! assert!(params.validate().is_ok());
//! let si = params.to_si().unwrap();
//! assert_eq!(si.barrier_height, 0.0);
//! assert!((si.dx - 10e-12).abs() < 1e-24);
//! ```

use serde::{ Deserialize, Serialize };
use crate::{
    error::ConfigError,
    units::{ ATTOSECOND, ELECTRONVOLT, FEMTOSECOND, NANOMETER, PICOMETER },
};

/// Simulation parameters in human-friendly units.
///
/// Missing fields in a deserialized document fall back to [`Params::default`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Spatial size of the wave packet (nm).
    ///
    /// Default: 1.
    pub packet_size: f64,

    /// Spatial size of the barrier (nm).
    ///
    /// Default: 1.
    pub barrier_size: f64,

    /// Total simulated duration (fs).
    ///
    /// Default: 30.
    pub duration: f64,

    /// Mean energy of the packet (eV).
    ///
    /// Default: 1.
    pub packet_energy: f64,

    /// Barrier height (eV).
    ///
    /// Default: 1.
    pub barrier_height: f64,

    /// Spatial step (pm).
    ///
    /// Default: 10.
    pub dx: f64,

    /// Time step (as).
    ///
    /// Default: 10.
    pub dt: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            packet_size: 1.0,
            barrier_size: 1.0,
            duration: 30.0,
            packet_energy: 1.0,
            barrier_height: 1.0,
            dx: 10.0,
            dt: 10.0,
        }
    }
}

impl Params {
    /// Create a new set of parameters, in the order packet size (nm), barrier
    /// size (nm), duration (fs), packet energy (eV), barrier height (eV),
    /// spatial step (pm), time step (as).
    pub fn new(
        packet_size: f64,
        barrier_size: f64,
        duration: f64,
        packet_energy: f64,
        barrier_height: f64,
        dx: f64,
        dt: f64,
    ) -> Self
    {
        Self {
            packet_size,
            barrier_size,
            duration,
            packet_energy,
            barrier_height,
            dx,
            dt,
        }
    }

    /// Check that every parameter describes a physical quantity.
    ///
    /// The barrier may have zero size or height; everything else must be
    /// strictly positive. All values must be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("packet_size", self.packet_size)?;
        ConfigError::check_nonnegative("barrier_size", self.barrier_size)?;
        ConfigError::check_positive("duration", self.duration)?;
        ConfigError::check_positive("packet_energy", self.packet_energy)?;
        ConfigError::check_nonnegative("barrier_height", self.barrier_height)?;
        ConfigError::check_positive("dx", self.dx)?;
        ConfigError::check_positive("dt", self.dt)?;
        Ok(())
    }

    /// Validate and convert to SI units.
    pub fn to_si(&self) -> Result<SiParams, ConfigError> {
        self.validate()?;
        Ok(SiParams {
            packet_size: self.packet_size * NANOMETER,
            barrier_size: self.barrier_size * NANOMETER,
            duration: self.duration * FEMTOSECOND,
            packet_energy: self.packet_energy * ELECTRONVOLT,
            barrier_height: self.barrier_height * ELECTRONVOLT,
            dx: self.dx * PICOMETER,
            dt: self.dt * ATTOSECOND,
        })
    }
}

/// The same parameters as [`Params`], in meters, seconds, and joules.
///
/// Only produced by [`Params::to_si`], so the values are always valid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SiParams {
    /// Spatial size of the wave packet (m).
    pub packet_size: f64,
    /// Spatial size of the barrier (m).
    pub barrier_size: f64,
    /// Total simulated duration (s).
    pub duration: f64,
    /// Mean energy of the packet (J).
    pub packet_energy: f64,
    /// Barrier height (J).
    pub barrier_height: f64,
    /// Spatial step (m).
    pub dx: f64,
    /// Time step (s).
    pub dt: f64,
}

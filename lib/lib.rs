#![allow(non_snake_case)]

//! Time evolution of a one-dimensional quantum wave packet incident on a
//! rectangular potential barrier, for the observation of tunneling.
//!
//! The time-dependent Schrödinger equation is integrated with an implicit,
//! Crank-Nicolson-style finite-difference scheme over a uniform spatial grid
//! with fixed (zero-Dirichlet) boundaries. The constant tridiagonal system
//! matrix is LU-factorized once at construction and the factorization is
//! reused for every time step.
//!
//! The main entry point is [`integrator::Integrator`]:
//! - construct from a set of [`config::Params`] in convenient units,
//! - advance one step at a time with [`step`][integrator::Integrator::step],
//! - read a copy of the wavefunction with
//!   [`state`][integrator::Integrator::state],
//! - read the grids, potential, and diagnostics through the remaining
//!   accessors.
//!
//! See [`docs`] for theoretical background.

pub mod config;
pub mod error;
pub mod integrator;
pub mod timedep;
pub mod tridiag;
pub mod units;
pub mod utils;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;

pub use config::Params;
pub use error::TError;
pub use integrator::Integrator;

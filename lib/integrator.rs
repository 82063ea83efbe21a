//! Stepwise time evolution of a Gaussian wave packet incident on a rectangular
//! potential barrier.
//!
//! An [`Integrator`] derives everything it needs from a set of [`Params`] once,
//! at construction: coordinate and wavenumber grids, the potential, the
//! initial packet, and the constant linear system of the implicit scheme
//! together with the LU factorization of its left-hand matrix. Afterward, the
//! only mutable data is the wavefunction itself, which is advanced one time
//! step per call to [`Integrator::step`].
//!
//! ```
//! use tunneling::{ config::Params, integrator::Integrator };
//!
//! let params = Params { duration: 0.1, ..Params::default() };
//! let mut sim = Integrator::new(params).unwrap();
//! assert_eq!(sim.time_steps(), 10);
//! for _ in 0..sim.time_steps() {
//!     sim.step().unwrap();
//! }
//! assert!(sim.norm_error() < 1.0);
//! assert_eq!(sim.state().len(), sim.len());
//! ```

use std::f64::consts::TAU;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    config::{ Params, SiParams },
    error::ConfigError,
    timedep::{ self, CnSystem, TResult },
    tridiag::TridiagLU,
    units,
    utils::{ fft, fft_freq, fft_shift, trapz, wf_norm },
};

/// Largest edge amplitude, relative to the packet's peak, that still counts as
/// zero at the fixed boundaries.
const BOUNDARY_TOL: f64 = 1e-6;

/// Largest number of spatial grid points accepted.
pub const MAX_GRID_POINTS: usize = 1 << 22;

/// Crank-Nicolson-style integrator for the tunneling problem.
///
/// All arrays borrowed from this type are sampled on the same coordinate grid
/// of [`len`][Self::len] points. The wavefunction can only be read as a copy.
#[derive(Debug)]
pub struct Integrator {
    // parameters as given
    params: Params,
    // parameters in SI units
    si: SiParams,
    // packet center
    x_packet: f64,
    // barrier start
    x_barrier: f64,
    // coordinate bounds
    x_min: f64,
    x_max: f64,
    // coordinate array
    x: nd::Array1<f64>,
    // actual coordinate grid spacing
    x_step: f64,
    // number of time points
    nt: usize,
    // potential array
    V: nd::Array1<f64>,
    // first index at or past the barrier start and first index past its end
    barrier_idx: (usize, usize),
    // central wavenumber
    k: f64,
    // reciprocal-space step and grid
    dk: f64,
    K: nd::Array1<f64>,
    // constant linear system and the factorization of its left-hand side
    sys: CnSystem,
    lu: TridiagLU,
    // peak amplitude of the initial packet
    packet_max: f64,
    // wavefunction at the current step
    packet: nd::Array1<C64>,
    // B · packet[1..N - 1] + b
    rhs: nd::Array1<C64>,
    // number of steps taken
    steps: usize,
}

impl Integrator {
    /// Set up a new simulation.
    ///
    /// Fails with [`TError::InvalidConfiguration`][crate::error::TError] if any
    /// parameter is non-physical, if `dx` leaves fewer than three or more than
    /// [`MAX_GRID_POINTS`] spatial grid points, or if `dt` leaves no time
    /// points.
    pub fn new(params: Params) -> TResult<Self> {
        let si = params.to_si()?;

        // spatial layout
        let sigma = 6.0 * si.packet_size;
        let x_packet = 2.0 * sigma;
        let x_barrier = x_packet + sigma;
        let x_min = 0.0;
        let x_max = x_barrier + 4.0 * sigma;
        let nx_f = (x_max - x_min) / si.dx;
        if nx_f > MAX_GRID_POINTS as f64 {
            return Err(ConfigError::SpatialGridTooLarge(nx_f).into());
        }
        let nx = nx_f as usize;
        if nx < 3 { return Err(ConfigError::SpatialGrid(nx).into()); }
        let x: nd::Array1<f64> = nd::Array1::linspace(x_min, x_max, nx);
        let x_step = x[1] - x[0];

        // temporal layout
        let nt = (si.duration / si.dt) as usize;
        if nt < 1 { return Err(ConfigError::TemporalGrid(nt).into()); }

        // barrier
        let x_barrier_end = x_barrier + si.barrier_size;
        let V: nd::Array1<f64>
            = x.mapv(|xj| {
                if x_barrier <= xj && xj <= x_barrier_end {
                    si.barrier_height
                } else {
                    0.0
                }
            });
        let barrier_idx = (
            x.iter().take_while(|xj| **xj < x_barrier).count(),
            x.iter().take_while(|xj| **xj <= x_barrier_end).count(),
        );

        // wavenumbers
        let k = units::electron_wavenumber(si.packet_energy);
        let dk = TAU / (x_max - x_min);
        let K: nd::Array1<f64> = nd::Array1::linspace(-1.0, 1.0, nx) * dk;

        // linear system over interior points
        let sys = timedep::cn_system(si.dx, si.dt, &V.slice(nd::s![1..nx - 1]));

        let packet = timedep::gaussian_packet(&x, x_packet, si.packet_size, k);
        let packet_max
            = packet.iter().map(|qj| qj.norm()).fold(0.0, f64::max);
        let edge = packet[0].norm().max(packet[nx - 1].norm());
        if edge > BOUNDARY_TOL * packet_max {
            log::warn!(
                "integrator::Integrator::new: initial packet amplitude at the \
                boundary is {:.3e} of its peak; edges are held fixed at their \
                initial values",
                edge / packet_max,
            );
        }

        let lu = sys.A.factorize()?;
        let rhs = timedep::rhs(&sys, &packet.slice(nd::s![1..nx - 1]))?;

        log::debug!(
            "integrator::Integrator::new: N = {}, T = {}, x_max = {:.3e} m, \
            k = {:.3e} m^-1, r = {:.3e}",
            nx, nt, x_max, k, timedep::cn_coefficient(si.dx, si.dt),
        );

        Ok(Self {
            params,
            si,
            x_packet,
            x_barrier,
            x_min,
            x_max,
            x,
            x_step,
            nt,
            V,
            barrier_idx,
            k,
            dk,
            K,
            sys,
            lu,
            packet_max,
            packet,
            rhs,
            steps: 0,
        })
    }

    /// Advance the wavefunction by one time step.
    ///
    /// The interior amplitudes are obtained from the cached factorization and
    /// right-hand side; the two boundary amplitudes are never modified. Steps
    /// may be taken past [`time_steps`][Self::time_steps]; stopping is up to
    /// the caller.
    ///
    /// An error here means the linear system was assembled inconsistently and
    /// is reported as
    /// [`TError::InternalInvariantViolation`][crate::error::TError].
    pub fn step(&mut self) -> TResult<()> {
        let n = self.x.len();
        let q = self.lu.solve(&self.rhs)?;
        self.rhs = timedep::rhs(&self.sys, &q)?;
        self.packet.slice_mut(nd::s![1..n - 1]).assign(&q);
        self.steps += 1;
        log::trace!("integrator::Integrator::step: {}", self.steps);
        Ok(())
    }

    /// Return a copy of the current wavefunction.
    pub fn state(&self) -> nd::Array1<C64> { self.packet.clone() }

    /// Get a reference to the parameters this simulation was created with.
    pub fn get_params(&self) -> &Params { &self.params }

    /// Get a reference to the parameters in SI units.
    pub fn get_si_params(&self) -> &SiParams { &self.si }

    /// Get a reference to the coordinate array (m).
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the bounds of the coordinate array (m).
    pub fn get_x_bounds(&self) -> (f64, f64) { (self.x_min, self.x_max) }

    /// Get the initial center of the packet (m).
    pub fn get_x_packet(&self) -> f64 { self.x_packet }

    /// Get the start and end coordinates of the barrier (m).
    pub fn get_barrier(&self) -> (f64, f64) {
        (self.x_barrier, self.x_barrier + self.si.barrier_size)
    }

    /// Get the barrier height (J).
    pub fn get_barrier_height(&self) -> f64 { self.si.barrier_height }

    /// Get a reference to the potential array (J).
    pub fn get_V(&self) -> &nd::Array1<f64> { &self.V }

    /// Compute the time array (s), [`time_steps`][Self::time_steps] points
    /// from zero to the full duration.
    pub fn get_t(&self) -> nd::Array1<f64> {
        nd::Array1::linspace(0.0, self.si.duration, self.nt)
    }

    /// Get the spatial step used in the finite-difference scheme (m).
    ///
    /// This is the requested step; the spacing of [`get_x`][Self::get_x]
    /// differs slightly because the grid includes both endpoints.
    pub fn get_dx(&self) -> f64 { self.si.dx }

    /// Get the time step (s).
    pub fn get_dt(&self) -> f64 { self.si.dt }

    /// Get the central wavenumber of the packet (m^-1).
    pub fn get_k(&self) -> f64 { self.k }

    /// Get the reciprocal-space step (m^-1).
    pub fn get_dk(&self) -> f64 { self.dk }

    /// Get a reference to the reciprocal-space grid (m^-1).
    pub fn get_K(&self) -> &nd::Array1<f64> { &self.K }

    /// Get a reference to the constant linear system.
    pub fn get_system(&self) -> &CnSystem { &self.sys }

    /// Get the number of spatial grid points, *N*.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }

    /// Get the number of interior grid points, *N* - 2.
    pub fn interior_len(&self) -> usize { self.x.len() - 2 }

    /// Get the number of time points, *T*.
    pub fn time_steps(&self) -> usize { self.nt }

    /// Get the number of steps taken so far.
    pub fn steps_taken(&self) -> usize { self.steps }

    /// Get the simulated time elapsed so far (s).
    pub fn elapsed(&self) -> f64 { self.steps as f64 * self.si.dt }

    /// Get the fraction of [`time_steps`][Self::time_steps] taken so far.
    pub fn progress(&self) -> f64 { self.steps as f64 / self.nt as f64 }

    /// Return `true` once [`time_steps`][Self::time_steps] steps have been
    /// taken.
    pub fn is_done(&self) -> bool { self.steps >= self.nt }

    /// Get the number of times the left-hand matrix has been factorized.
    ///
    /// This is 1 after construction and stays there for the lifetime of the
    /// integrator.
    pub fn factorizations(&self) -> usize { self.sys.A.factorizations() }

    /// Get the peak amplitude of the initial packet.
    pub fn packet_max(&self) -> f64 { self.packet_max }

    /// Compute the norm ∫ |ψ|² dx of the current wavefunction.
    pub fn norm(&self) -> f64 { wf_norm(&self.packet, self.x_step) }

    /// Compute the deviation of [`norm`][Self::norm] from 1, in percent.
    pub fn norm_error(&self) -> f64 { (1.0 - self.norm()).abs() * 100.0 }

    fn density(&self) -> nd::Array1<f64> { self.packet.mapv(|qj| qj.norm_sqr()) }

    /// Compute the probability of finding the particle to the left of the
    /// barrier.
    pub fn reflection(&self) -> f64 {
        let rho = self.density();
        trapz(&rho.slice(nd::s![..self.barrier_idx.0]), self.x_step)
    }

    /// Compute the probability of finding the particle to the right of the
    /// barrier.
    pub fn transmission(&self) -> f64 {
        let rho = self.density();
        trapz(&rho.slice(nd::s![self.barrier_idx.1..]), self.x_step)
    }

    /// Compute |F\[ψ\]|, the magnitude of the discrete Fourier transform of the
    /// current wavefunction, ordered from negative to positive wavenumbers.
    ///
    /// See also [`momentum_grid`][Self::momentum_grid].
    pub fn momentum_amplitude(&self) -> nd::Array1<f64> {
        fft_shift(&fft(&self.packet).mapv(|fk| fk.norm()))
    }

    /// Compute the angular wavenumbers (m^-1) that accompany
    /// [`momentum_amplitude`][Self::momentum_amplitude].
    pub fn momentum_grid(&self) -> nd::Array1<f64> {
        fft_shift(&fft_freq(self.x.len(), self.x_step)) * TAU
    }
}

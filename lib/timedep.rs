//! Building blocks of the implicit (Crank-Nicolson-style) finite-difference
//! scheme for the 1+1-dimensional time-dependent Schrödinger equation (TDSE)
//! with a static potential and zero-Dirichlet boundaries.
//!
//! One time step over the *n* = *N* - 2 interior grid points is
//! ```text
//! A ψ[k + 1] = B ψ[k] + b
//! ```
//! with constant tridiagonal `A` and `B`. See [`docs`][crate::docs#time-dependence]
//! for the derivation.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ LengthError, TError },
    tridiag::Tridiag,
    units::{ hbar, me },
};

pub type TResult<T> = Result<T, TError>;

/// The three constant pieces of the linear system solved at every step.
#[derive(Clone, Debug, PartialEq)]
pub struct CnSystem {
    /// Implicit (left-hand) matrix.
    pub A: Tridiag,
    /// Explicit (right-hand) matrix.
    pub B: Tridiag,
    /// Boundary contribution; identically zero for fixed zero boundaries.
    pub b: nd::Array1<C64>,
}

/// Compute the coupling coefficient between neighboring grid points,
/// ```text
///     i δt  ħ
/// r = ---- ----
///     δx²  4 mₑ
/// ```
/// for an electron, with `dx` and `dt` in SI units.
pub fn cn_coefficient(dx: f64, dt: f64) -> C64 {
    C64::i() * dt / dx.powi(2) * hbar / (4.0 * me)
}

/// Assemble the system matrices for a potential `V` (J) sampled on the
/// *interior* grid points only, with grid spacing `dx` (m) and time step `dt`
/// (s).
///
/// ```text
/// A = tridiag(-r, 1 + 2 r, -r)
/// B = tridiag( r,    q[j],  r)    q[j] = 1 - 2 r - i δt V[j] / ħ
/// b = 0
/// ```
///
/// *Panics if `V` is empty*.
pub fn cn_system<S>(dx: f64, dt: f64, V: &Arr1<S>) -> CnSystem
where S: nd::Data<Elem = f64>
{
    let n = V.len();
    let r = cn_coefficient(dx, dt);
    let A = Tridiag::from_elems(n, -r, 1.0 + 2.0 * r, -r);
    let mut B = Tridiag::from_elems(n, r, 1.0 - 2.0 * r, r);
    B.diag_mut().zip_mut_with(V, |q, &Vj| { *q -= C64::i() * dt / hbar * Vj; });
    let b: nd::Array1<C64> = nd::Array1::zeros(n);
    CnSystem { A, B, b }
}

/// Compute the right-hand side `B ψ + b` of the next step from the interior
/// amplitudes `q`.
pub fn rhs<S>(sys: &CnSystem, q: &Arr1<S>) -> Result<nd::Array1<C64>, LengthError>
where S: nd::Data<Elem = C64>
{
    LengthError::check(&sys.b, q)?;
    let mut y = sys.B.dot(q)?;
    y += &sys.b;
    Ok(y)
}

/// Evaluate a normalized Gaussian wave packet of width `size` centered on `x0`
/// and carrying mean wavenumber `k` at every coordinate in `x`.
/// ```text
///        exp(-(x - x₀)² / 4 s² + i k x)
/// ψ(x) = ------------------------------
///               (2 π s²)^(1/4)
/// ```
pub fn gaussian_packet<S>(x: &Arr1<S>, x0: f64, size: f64, k: f64)
    -> nd::Array1<C64>
where S: nd::Data<Elem = f64>
{
    let norm = (2.0 * PI * size.powi(2)).powf(0.25);
    x.mapv(|xj| {
        C64::new(-(xj - x0).powi(2) / (4.0 * size.powi(2)), k * xj).exp() / norm
    })
}

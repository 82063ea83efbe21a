//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Time dependence](#time-dependence)
//! - [Boundaries](#boundaries)
//! - [Diagnostics](#diagnostics)
//!
//! # Background
//! An electron of mass *m*<sub>e</sub> moving in one dimension through a static
//! potential *V*(*x*) obeys the time-dependent Schrödinger equation (TDSE)
//! ```text
//!   ∂ψ       ħ²  ∂²ψ
//! i ħ -- = - ---- --- + V(x) ψ
//!   ∂t      2 mₑ ∂x²
//! ```
//! Here the potential is a rectangular barrier of height *V*₀ and width *d*,
//! and the initial state is a Gaussian wave packet of spatial size *s* centered
//! on *x*<sub>p</sub>, moving toward the barrier with mean wavenumber *k*:
//! ```text
//!          exp(-(x - xₚ)² / 4 s² + i k x)          √(2 mₑ E)
//! ψ(x, 0) = ----------------------------- ,    k = ---------
//!                 (2 π s²)^(1/4)                       ħ
//! ```
//! The probability density |*ψ*|² of this packet is a normal distribution with
//! standard deviation *s* and unit integral.
//!
//! The spatial domain is laid out relative to *σ* = 6 *s*:
//! ```text
//! 0        2σ       3σ  3σ + d                    7σ
//! |--------x--------|====|------------------------|
//!          packet    barrier
//! ```
//! i.e. the packet starts at 2*σ*, the barrier starts one *σ* further, and the
//! domain ends 4*σ* past the barrier's start. The domain is sampled at *N* =
//! ⌊7*σ* / *δx*⌋ evenly spaced points *x*\[0\], ..., *x*\[*N* - 1\].
//!
//! # Units
//! Inputs are accepted in units appropriate to the scale of the problem and
//! converted once to SI:
//!
//! | Quantity         | Input unit | SI scale  |
//! |------------------|------------|-----------|
//! | packet size      | nm         | 10⁻⁹ m    |
//! | barrier size     | nm         | 10⁻⁹ m    |
//! | duration         | fs         | 10⁻¹⁵ s   |
//! | packet energy    | eV         | *e* J     |
//! | barrier height   | eV         | *e* J     |
//! | spatial step     | pm         | 10⁻¹² m   |
//! | time step        | as         | 10⁻¹⁸ s   |
//!
//! All internal computation is done in SI; see [`units`][crate::units].
//!
//! # Time dependence
//! Replacing the second derivative by the three-point central difference and
//! averaging the kinetic term over the old and new time levels gives, for each
//! interior point *j*,
//! ```text
//! -r ψ[k+1, j-1] + (1 + 2r) ψ[k+1, j] - r ψ[k+1, j+1]
//!     = r ψ[k, j-1] + q[j] ψ[k, j] + r ψ[k, j+1]
//! ```
//! with
//! ```text
//!     i δt  ħ                            i δt
//! r = ---- ----- ,     q[j] = 1 - 2 r - ---- V[j]
//!     δx²  4 mₑ                           ħ
//! ```
//! Collecting the interior points into vectors gives the linear system
//! ```text
//! A ψ[k + 1] = B ψ[k] + b
//! ```
//! where `A` and `B` are (*N* - 2)×(*N* - 2) tridiagonal matrices and `b`
//! carries the boundary values (zero here). The kinetic part of the update is
//! the Crank-Nicolson (trapezoidal) rule, which is unitary and unconditionally
//! stable for any ratio of *δt* to *δx*²; the potential enters only on the
//! explicit side, so `A` does not depend on *V* at all.
//!
//! Since *V*, *δx*, and *δt* are fixed for a run, `A` never changes. It is
//! therefore LU-factorized exactly once (LAPACK `zgttrf`), after which every
//! step costs one matrix-vector product with `B` and one pair of *O*(*N*)
//! triangular sweeps (`zgttrs`):
//! ```text
//!     ψ[k] (interior)
//!           |
//!           V
//!    y = B ψ[k] + b          (computed at the end of the previous step)
//!           |
//!           V
//!    solve L U ψ[k + 1] = y  (factorization computed once)
//!           |
//!           V
//!     ψ[k + 1] (interior)
//! ```
//!
//! # Boundaries
//! The first and last grid points are never written by a step, which realizes
//! a zero-Dirichlet condition as long as the initial packet is negligible
//! there. The initial values at the edges are the (tiny) Gaussian tails and are
//! kept as they are rather than being clamped to zero; with the domain layout
//! above the tail at *x* = 0 is exp(-36) ≈ 2×10⁻¹⁶ of the peak.
//!
//! Waves reaching the edges are reflected, so runs are expected to end before
//! the transmitted or reflected parts of the packet reach the domain edges.
//!
//! # Diagnostics
//! The norm ∫ |*ψ*|² d*x* is computed with the trapezoidal rule and should stay
//! close to 1; its deviation from 1, in percent, is a convenient measure of
//! accumulated numerical error. Splitting the same integral at the barrier
//! edges gives the reflected (left of the barrier) and transmitted (right of
//! the barrier) probabilities. The momentum-space amplitude |*F*\[*ψ*\](*k*)|
//! is computed with a discrete Fourier transform over the whole grid.

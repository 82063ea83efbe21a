//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Failures fall into exactly two kinds, both fatal to an
//! [`Integrator`][crate::integrator::Integrator]:
//! - [`TError::InvalidConfiguration`] is raised during construction when the
//!   physical parameters describe a degenerate or non-physical system.
//! - [`TError::InternalInvariantViolation`] is raised only if the linear algebra
//!   backing a time step reports a failure. It signals a defect in the matrix
//!   assembly rather than a runtime condition.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        Self::check_len(a.len(), b.len())
    }

    pub(crate) fn check_len(na: usize, nb: usize) -> Result<(), Self> {
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Describes why a set of physical parameters cannot be simulated.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a parameter that must be strictly positive is not.
    #[error("{0} must be finite and greater than 0; got {1}")]
    NonPositive(&'static str, f64),

    /// Returned when a parameter that must be non-negative is not.
    #[error("{0} must be finite and non-negative; got {1}")]
    Negative(&'static str, f64),

    /// Returned when the spatial step is too coarse to leave at least one
    /// interior grid point.
    #[error("spatial grid must have at least 3 points; got {0}")]
    SpatialGrid(usize),

    /// Returned when the spatial step is so fine that the grid would exceed
    /// [`MAX_GRID_POINTS`][crate::integrator::MAX_GRID_POINTS].
    #[error(
        "spatial grid must have at most {} points; got {0:.3e}",
        crate::integrator::MAX_GRID_POINTS
    )]
    SpatialGridTooLarge(f64),

    /// Returned when the time step is too coarse to leave at least one time
    /// point.
    #[error("temporal grid must have at least 1 point; got {0}")]
    TemporalGrid(usize),
}

impl ConfigError {
    pub(crate) fn check_positive(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        (val.is_finite() && val > 0.0).then_some(())
            .ok_or(Self::NonPositive(name, val))
    }

    pub(crate) fn check_nonnegative(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        (val.is_finite() && val >= 0.0).then_some(())
            .ok_or(Self::Negative(name, val))
    }
}

/// Failures of the linear algebra behind a time step.
#[derive(Debug, Error)]
pub enum InvariantError {
    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`LinalgError`], e.g. a singular pivot in the factorization.
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),

    /// Returned when a zero pivot is found outside of LAPACK.
    #[error("encountered a singular matrix")]
    Singular,
}

/// Returned from the time-dependent integrator.
#[derive(Debug, Error)]
pub enum TError {
    /// [`ConfigError`]
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// [`InvariantError`]
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(#[from] InvariantError),
}

impl TError {
    /// Return `true` if `self` is `InvalidConfiguration`.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(..))
    }

    /// Return `true` if `self` is `InternalInvariantViolation`.
    pub fn is_internal_invariant_violation(&self) -> bool {
        matches!(self, Self::InternalInvariantViolation(..))
    }
}

impl From<LengthError> for TError {
    fn from(err: LengthError) -> Self { InvariantError::from(err).into() }
}

impl From<LinalgError> for TError {
    fn from(err: LinalgError) -> Self { InvariantError::from(err).into() }
}

//! Complex tridiagonal matrices and their LU factorization.
//!
//! The factorization is performed once by LAPACK (`zgttrf`) and can then be
//! used for any number of solves (`zgttrs`), each of which costs *O*(*n*).
//!
//! ```
//! use ndarray as nd;
//! use num_complex::Complex64 as C64;
//! use tunneling::tridiag::Tridiag;
//!
//! // discrete Laplacian-like system
//! let a = Tridiag::from_elems(4, C64::from(-1.0), C64::from(2.0), C64::from(-1.0));
//! let lu = a.factorize().unwrap();
//! let y: nd::Array1<C64> = nd::array![1.0, 0.0, 0.0, 1.0].mapv(C64::from);
//! let x = lu.solve(&y).unwrap();
//! let ax = a.dot(&x).unwrap();
//! assert!(ax.iter().zip(&y).all(|(l, r)| (l - r).norm() < 1e-12));
//! ```

use std::sync::atomic::{ AtomicUsize, Ordering };
use ndarray as nd;
use ndarray_linalg::{
    FactorizeTridiagonalInto,
    LUFactorizedTridiagonal,
    SolveTridiagonal,
    Tridiagonal,
    layout::MatrixLayout,
};
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ InvariantError, LengthError },
    timedep::TResult,
};

/// A square complex tridiagonal matrix of dimension *n*, stored by diagonals.
///
/// The sub- and super-diagonals have *n* - 1 elements; row `i` is
/// ```text
/// sub[i - 1] x[i - 1] + diag[i] x[i] + sup[i] x[i + 1]
/// ```
///
/// Each matrix counts how many times it has been factorized; see
/// [`factorizations`][Self::factorizations].
#[derive(Debug)]
pub struct Tridiag {
    sub: nd::Array1<C64>,
    diag: nd::Array1<C64>,
    sup: nd::Array1<C64>,
    factorized: AtomicUsize,
}

impl Clone for Tridiag {
    fn clone(&self) -> Self {
        Self {
            sub: self.sub.clone(),
            diag: self.diag.clone(),
            sup: self.sup.clone(),
            factorized: AtomicUsize::new(self.factorizations()),
        }
    }
}

// equality is over matrix elements only
impl PartialEq for Tridiag {
    fn eq(&self, other: &Self) -> bool {
        self.sub == other.sub && self.diag == other.diag && self.sup == other.sup
    }
}

impl Tridiag {
    /// Create a new `Tridiag` from its three diagonals.
    ///
    /// Fails if the off-diagonals are not exactly one element shorter than the
    /// main diagonal, or if the main diagonal is empty.
    pub fn new(
        sub: nd::Array1<C64>,
        diag: nd::Array1<C64>,
        sup: nd::Array1<C64>,
    ) -> Result<Self, LengthError>
    {
        let n = diag.len();
        LengthError::check_len(n.max(1) - 1, sub.len())?;
        LengthError::check(&sub, &sup)?;
        (n > 0).then_some(()).ok_or(LengthError(n, 1))?;
        Ok(Self { sub, diag, sup, factorized: AtomicUsize::new(0) })
    }

    /// Create a new `Tridiag` with constant diagonals.
    ///
    /// *Panics if `n` is zero*.
    pub fn from_elems(n: usize, sub: C64, diag: C64, sup: C64) -> Self {
        assert!(n > 0, "tridiagonal matrix must have nonzero dimension");
        Self {
            sub: nd::Array1::from_elem(n - 1, sub),
            diag: nd::Array1::from_elem(n, diag),
            sup: nd::Array1::from_elem(n - 1, sup),
            factorized: AtomicUsize::new(0),
        }
    }

    /// Get the dimension of the matrix.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.diag.len() }

    /// Get a reference to the sub-diagonal.
    pub fn sub(&self) -> &nd::Array1<C64> { &self.sub }

    /// Get a reference to the main diagonal.
    pub fn diag(&self) -> &nd::Array1<C64> { &self.diag }

    /// Get a reference to the super-diagonal.
    pub fn sup(&self) -> &nd::Array1<C64> { &self.sup }

    /// Get the number of successful calls to [`factorize`][Self::factorize] on
    /// this matrix. Clones start from the count of their original.
    pub fn factorizations(&self) -> usize { self.factorized.load(Ordering::Relaxed) }

    pub(crate) fn diag_mut(&mut self) -> &mut nd::Array1<C64> { &mut self.diag }

    /// Compute the matrix-vector product `self · x`.
    pub fn dot<S>(&self, x: &Arr1<S>) -> Result<nd::Array1<C64>, LengthError>
    where S: nd::Data<Elem = C64>
    {
        LengthError::check(&self.diag, x)?;
        let n = self.len();
        let mut y: nd::Array1<C64>
            = nd::Zip::from(&self.diag).and(x).map_collect(|d, xk| d * xk);
        if n > 1 {
            nd::Zip::from(y.slice_mut(nd::s![..n - 1]))
                .and(&self.sup)
                .and(x.slice(nd::s![1..]))
                .for_each(|yk, u, xkp1| { *yk += u * xkp1; });
            nd::Zip::from(y.slice_mut(nd::s![1..]))
                .and(&self.sub)
                .and(x.slice(nd::s![..n - 1]))
                .for_each(|yk, l, xkm1| { *yk += l * xkm1; });
        }
        Ok(y)
    }

    /// Compute the LU factorization of `self`.
    ///
    /// This is the only place a factorization is performed; the result is
    /// independent of `self` and may be reused indefinitely.
    pub fn factorize(&self) -> TResult<TridiagLU> {
        let lu = self.factorize_uncounted()?;
        self.factorized.fetch_add(1, Ordering::Relaxed);
        Ok(lu)
    }

    fn factorize_uncounted(&self) -> TResult<TridiagLU> {
        let n = self.len();
        if n == 1 {
            let d = self.diag[0];
            if d == C64::from(0.0) { return Err(InvariantError::Singular.into()); }
            return Ok(TridiagLU { n, lu: Factors::Scalar(d) });
        }
        let raw: Tridiagonal<C64>
            = Tridiagonal {
                l: MatrixLayout::F { col: n as i32, lda: n as i32 },
                dl: self.sub.to_vec(),
                d: self.diag.to_vec(),
                du: self.sup.to_vec(),
            };
        let lu = raw.factorize_tridiagonal_into()?;
        Ok(TridiagLU { n, lu: Factors::Lapack(lu) })
    }
}

/// The LU factorization of a [`Tridiag`], produced by [`Tridiag::factorize`].
pub struct TridiagLU {
    n: usize,
    lu: Factors,
}

// LAPACK's workspace for the second super-diagonal needs n >= 2
enum Factors {
    Scalar(C64),
    Lapack(LUFactorizedTridiagonal<C64>),
}

impl std::fmt::Debug for TridiagLU {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TridiagLU").field("n", &self.n).finish_non_exhaustive()
    }
}

impl TridiagLU {
    /// Get the dimension of the factorized matrix.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Solve `A · x = y` for `x`, where `A` is the factorized matrix.
    pub fn solve<S>(&self, y: &Arr1<S>) -> TResult<nd::Array1<C64>>
    where S: nd::Data<Elem = C64>
    {
        LengthError::check_len(self.n, y.len())?;
        match &self.lu {
            Factors::Scalar(d) => Ok(y.mapv(|yk| yk / d)),
            Factors::Lapack(lu) => Ok(lu.solve_tridiagonal_into(y.to_owned())?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> C64 { C64::new(re, im) }

    #[test]
    fn dot_matches_dense() {
        let a = Tridiag::new(
            nd::array![c(1.0, 0.0), c(0.0, 2.0)],
            nd::array![c(3.0, 0.0), c(4.0, -1.0), c(5.0, 0.0)],
            nd::array![c(-1.0, 0.0), c(0.0, -3.0)],
        ).unwrap();
        let x = nd::array![c(1.0, 1.0), c(2.0, 0.0), c(0.0, -1.0)];
        let y = a.dot(&x).unwrap();
        // row-by-row expansion
        let expected = [
            c(3.0, 0.0) * x[0] + c(-1.0, 0.0) * x[1],
            c(1.0, 0.0) * x[0] + c(4.0, -1.0) * x[1] + c(0.0, -3.0) * x[2],
            c(0.0, 2.0) * x[1] + c(5.0, 0.0) * x[2],
        ];
        for (yk, ek) in y.iter().zip(expected) {
            assert!((yk - ek).norm() < 1e-14);
        }
    }

    #[test]
    fn solve_inverts_dot() {
        let r = c(0.0, 0.37);
        let a = Tridiag::from_elems(50, -r, 1.0 + 2.0 * r, -r);
        let lu = a.factorize().unwrap();
        let x: nd::Array1<C64>
            = (0..50).map(|k| c((k as f64).sin(), (k as f64).cos())).collect();
        let y = a.dot(&x).unwrap();
        let x2 = lu.solve(&y).unwrap();
        assert!(x.iter().zip(&x2).all(|(l, r)| (l - r).norm() < 1e-10));
    }

    #[test]
    fn factorization_is_reusable() {
        let a = Tridiag::from_elems(8, c(-0.5, 0.0), c(2.0, 0.1), c(-0.5, 0.0));
        let lu = a.factorize().unwrap();
        let mut y: nd::Array1<C64> = nd::Array1::from_elem(8, c(1.0, 0.0));
        for _ in 0..5 {
            let x = lu.solve(&y).unwrap();
            let back = a.dot(&x).unwrap();
            assert!(back.iter().zip(&y).all(|(l, r)| (l - r).norm() < 1e-12));
            y = x;
        }
    }

    #[test]
    fn factorizations_are_counted() {
        let a = Tridiag::from_elems(6, c(-1.0, 0.0), c(3.0, 0.0), c(-1.0, 0.0));
        assert_eq!(a.factorizations(), 0);
        let lu = a.factorize().unwrap();
        let y: nd::Array1<C64> = nd::Array1::from_elem(6, c(1.0, 0.0));
        for _ in 0..10 { lu.solve(&y).unwrap(); }
        assert_eq!(a.factorizations(), 1);
        let b = a.clone();
        b.factorize().unwrap();
        b.factorize().unwrap();
        assert_eq!(b.factorizations(), 3);
        assert_eq!(a.factorizations(), 1);
        assert_eq!(a, b);
        let singular = Tridiag::from_elems(1, c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0));
        assert!(singular.factorize().is_err());
        assert_eq!(singular.factorizations(), 0);
    }

    #[test]
    fn single_point() {
        let a = Tridiag::from_elems(1, C64::from(0.0), c(2.0, 0.0), C64::from(0.0));
        let x = a.factorize().unwrap().solve(&nd::array![c(4.0, 2.0)]).unwrap();
        assert!((x[0] - c(2.0, 1.0)).norm() < 1e-14);
    }

    #[test]
    fn bad_lengths() {
        assert!(
            Tridiag::new(
                nd::array![c(1.0, 0.0)],
                nd::array![c(1.0, 0.0), c(1.0, 0.0), c(1.0, 0.0)],
                nd::array![c(1.0, 0.0), c(1.0, 0.0)],
            ).is_err()
        );
        let a = Tridiag::from_elems(3, c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0));
        assert!(a.dot(&nd::array![c(1.0, 0.0)]).is_err());
        let lu = a.factorize().unwrap();
        let err = lu.solve(&nd::array![c(1.0, 0.0)]).unwrap_err();
        assert!(err.is_internal_invariant_violation());
    }

    #[test]
    fn singular_single_point() {
        let a = Tridiag::from_elems(1, c(1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0));
        assert!(a.factorize().unwrap_err().is_internal_invariant_violation());
    }

    #[test]
    fn singular_is_reported() {
        let a = Tridiag::from_elems(3, c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0));
        let err = a.factorize()
            .and_then(|lu| lu.solve(&nd::array![c(1.0, 0.0), c(1.0, 0.0), c(1.0, 0.0)]))
            .unwrap_err();
        assert!(err.is_internal_invariant_violation());
    }
}

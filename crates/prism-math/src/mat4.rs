// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, Div, Index, IndexMut, Mul, MulAssign, Sub};

use crate::error::MatrixError;
use crate::scalar::{Real, Scalar};
use crate::vec3::{Normal3, Point3, Vector3};

/// Row‑major 4×4 matrix generic over its element type.
///
/// - Stored as `m[row][column]`.
/// - No structural invariant is enforced: a matrix may be singular, and only
///   [`Matrix4x4::try_inverse`] cares.
/// - Points are column vectors, so `m * p` applies `m` to `p` and
///   `a * b` applies `b` first.
///
/// # Examples
/// ```
/// use prism_math::{Matrix4x4, Point3};
/// let t = Matrix4x4::translation(5.0, -3.0, 2.0);
/// let p = Point3::new(2.0, 4.0, -1.0);
/// assert_eq!((t * p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4x4<T> {
    m: [[T; 4]; 4],
}

impl<T: Scalar> Matrix4x4<T> {
    /// Creates a matrix from rows.
    pub const fn new(rows: [[T; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Matrix with `value` on the diagonal and zero elsewhere.
    pub fn from_diagonal(value: T) -> Self {
        let z = T::zero();
        Self::new([
            [value, z, z, z],
            [z, value, z, z],
            [z, z, value, z],
            [z, z, z, value],
        ])
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self::from_diagonal(T::one())
    }

    /// Returns the all-zero matrix.
    pub fn zero() -> Self {
        Self::from_diagonal(T::zero())
    }

    /// Builds a translation matrix; the offset occupies the last column.
    pub fn translation(tx: T, ty: T, tz: T) -> Self {
        let (z, o) = (T::zero(), T::one());
        Self::new([
            [o, z, z, tx],
            [z, o, z, ty],
            [z, z, o, tz],
            [z, z, z, o],
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        let (z, o) = (T::zero(), T::one());
        Self::new([
            [sx, z, z, z],
            [z, sy, z, z],
            [z, z, sz, z],
            [z, z, z, o],
        ])
    }

    /// Returns the rows as a nested array.
    pub fn to_rows(self) -> [[T; 4]; 4] {
        self.m
    }

    /// Checked element access; `None` when either index is outside `0..4`.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.m.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Exact comparison against [`Matrix4x4::identity`].
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns the transpose (`out[i][j] = self[j][i]`).
    pub fn transpose(&self) -> Self {
        let mut out = self.m;
        for i in 0..4 {
            for j in 0..4 {
                out[i][j] = self.m[j][i];
            }
        }
        Self::new(out)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Each output element is the dot product of a row of `self` with a
    /// column of `rhs`, accumulated left to right.
    ///
    /// # Examples
    /// ```
    /// use prism_math::Matrix4x4;
    /// let a = Matrix4x4::<f32>::identity();
    /// let b = Matrix4x4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b), b);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [[T::zero(); 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = self.m[row][0] * rhs.m[0][col];
                for k in 1..4 {
                    sum = sum + self.m[row][k] * rhs.m[k][col];
                }
                out[row][col] = sum;
            }
        }
        Self::new(out)
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = self.m;
        for row in 0..4 {
            for col in 0..4 {
                out[row][col] = f(self.m[row][col], rhs.m[row][col]);
            }
        }
        Self::new(out)
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        let mut out = self.m;
        for row in out.iter_mut() {
            for e in row.iter_mut() {
                *e = f(*e);
            }
        }
        Self::new(out)
    }

    fn apply3(&self, x: T, y: T, z: T) -> [T; 3] {
        let r = |i: usize| self.m[i][0] * x + self.m[i][1] * y + self.m[i][2] * z;
        [r(0), r(1), r(2)]
    }
}

impl<T: Real> Matrix4x4<T> {
    /// Inverts the matrix with Gauss-Jordan elimination and full pivoting.
    ///
    /// Singular input is reported instead of aborting; see [`MatrixError`]
    /// for the two detection sites.
    ///
    /// # Examples
    /// ```
    /// use prism_math::Matrix4x4;
    /// let t = Matrix4x4::translation(5.0_f32, 10.0, -2.0);
    /// assert_eq!(t.try_inverse(), Ok(Matrix4x4::translation(-5.0, -10.0, 2.0)));
    /// assert!(Matrix4x4::<f32>::zero().try_inverse().is_err());
    /// ```
    pub fn try_inverse(&self) -> Result<Self, MatrixError> {
        crate::inverse::gauss_jordan(self.m).map(Self::new)
    }
}

impl<T: Scalar> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> From<[[T; 4]; 4]> for Matrix4x4<T> {
    fn from(value: [[T; 4]; 4]) -> Self {
        Self::new(value)
    }
}

impl<T> Index<(usize, usize)> for Matrix4x4<T> {
    type Output = T;

    /// Panics when `row` or `col` is outside `0..4`, like slice indexing.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.m[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix4x4<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.m[row][col]
    }
}

impl<T: Scalar> Add for Matrix4x4<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Sub for Matrix4x4<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Mul for Matrix4x4<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> Mul<&Matrix4x4<T>> for Matrix4x4<T> {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self {
        self.multiply(rhs)
    }
}

impl<T: Scalar> MulAssign for Matrix4x4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar> MulAssign<&Matrix4x4<T>> for Matrix4x4<T> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}

impl<T: Scalar> Mul<T> for Matrix4x4<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|e| e * rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix4x4<T> {
    type Output = Self;

    /// Component-wise division. A zero divisor is a caller error.
    fn div(self, rhs: T) -> Self {
        assert!(rhs != T::zero(), "matrix divided by zero scalar");
        self.map(|e| e / rhs)
    }
}

impl<T: Real> Mul<Point3<T>> for Matrix4x4<T> {
    type Output = Point3<T>;

    /// Applies the full transform and divides by the resulting `w`.
    ///
    /// The divide is skipped when `w == 1` so affine transforms stay exact.
    /// A point mapped to `w == 0` comes back with infinite or NaN
    /// coordinates.
    fn mul(self, p: Point3<T>) -> Point3<T> {
        let (x, y, z) = (p.x(), p.y(), p.z());
        let [px, py, pz] = self.apply3(x, y, z);
        let m = &self.m;
        let (xp, yp, zp) = (px + m[0][3], py + m[1][3], pz + m[2][3]);
        let wp = m[3][0] * x + m[3][1] * y + m[3][2] * z + m[3][3];
        if wp == T::one() {
            Point3::new(xp, yp, zp)
        } else {
            Point3::new(xp / wp, yp / wp, zp / wp)
        }
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Matrix4x4<T> {
    type Output = Vector3<T>;

    /// Applies the upper 3×3 block (`w = 0`).
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        Vector3::from(self.apply3(v.x(), v.y(), v.z()))
    }
}

impl<T: Scalar> Mul<Normal3<T>> for Matrix4x4<T> {
    type Output = Normal3<T>;

    /// Applies the upper 3×3 block as given (see [`Normal3`]).
    fn mul(self, n: Normal3<T>) -> Normal3<T> {
        Normal3::from(self.apply3(n.x(), n.y(), n.z()))
    }
}

use std::{
    hash::{Hash, Hasher},
    ops,
};

use crate::{
    access::{Access, Mutable},
    approx::ApproxEq,
    kind::Kind,
    Element, Matrix, Tuple,
};

// Compares the logical elements only, so views with different strides can be equal.
impl<T, const R: usize, const C: usize, A, A2> PartialEq<Matrix<T, R, C, A2>> for Matrix<T, R, C, A>
where
    T: Element,
    A: Access,
    A2: Access,
{
    fn eq(&self, other: &Matrix<T, R, C, A2>) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl<T: Element, const R: usize, const C: usize, A: Access> Eq for Matrix<T, R, C, A> {}

impl<T: Element, const R: usize, const C: usize, A: Access> Hash for Matrix<T, R, C, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elem in self.iter() {
            elem.to_bits().hash(state);
        }
    }
}

impl<T, const R: usize, const C: usize, A, A2> ApproxEq<Matrix<T, R, C, A2>> for Matrix<T, R, C, A>
where
    T: Element,
    A: Access,
    A2: Access,
{
    type Tolerance = <T as ApproxEq>::Tolerance;

    fn abs_diff_eq(&self, other: &Matrix<T, R, C, A2>, abs_tolerance: Self::Tolerance) -> bool {
        self.to_rows().abs_diff_eq(&other.to_rows(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Matrix<T, R, C, A2>, rel_tolerance: Self::Tolerance) -> bool {
        self.to_rows().rel_diff_eq(&other.to_rows(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Matrix<T, R, C, A2>, ulps_tolerance: u32) -> bool {
        self.to_rows().ulps_diff_eq(&other.to_rows(), ulps_tolerance)
    }
}

/// Matrix product.
impl<'a, 'b, T, const R: usize, const M: usize, const C: usize, A, A2>
    ops::Mul<&'b Matrix<T, M, C, A2>> for &'a Matrix<T, R, M, A>
where
    T: Element,
    A: Access,
    A2: Access,
{
    type Output = Matrix<T, R, C, Mutable>;

    fn mul(self, rhs: &'b Matrix<T, M, C, A2>) -> Self::Output {
        let mut out = Matrix::zero();
        out.set_product(self, rhs);
        out
    }
}

/// Matrix-Tuple multiplication; see [`Matrix::transform`].
impl<'a, 'b, T, const R: usize, const C: usize, K, A, A2> ops::Mul<&'b Tuple<T, C, K, A2>>
    for &'a Matrix<T, R, C, A>
where
    T: Element,
    K: Kind,
    A: Access,
    A2: Access,
{
    type Output = Tuple<T, R, K, Mutable>;

    fn mul(self, rhs: &'b Tuple<T, C, K, A2>) -> Self::Output {
        self.transform(rhs)
    }
}

/// Matrix-Scalar multiplication.
impl<'a, T: Element, const R: usize, const C: usize, A: Access> ops::Mul<T>
    for &'a Matrix<T, R, C, A>
{
    type Output = Matrix<T, R, C, Mutable>;

    fn mul(self, rhs: T) -> Self::Output {
        Matrix::from_fn(|row, col| self.get(row, col) * rhs)
    }
}

impl<'a, 'b, T, const R: usize, const C: usize, A, A2> ops::Add<&'b Matrix<T, R, C, A2>>
    for &'a Matrix<T, R, C, A>
where
    T: Element,
    A: Access,
    A2: Access,
{
    type Output = Matrix<T, R, C, Mutable>;

    fn add(self, rhs: &'b Matrix<T, R, C, A2>) -> Self::Output {
        Matrix::from_fn(|row, col| self.get(row, col) + rhs.get(row, col))
    }
}

impl<'a, 'b, T, const R: usize, const C: usize, A, A2> ops::Sub<&'b Matrix<T, R, C, A2>>
    for &'a Matrix<T, R, C, A>
where
    T: Element,
    A: Access,
    A2: Access,
{
    type Output = Matrix<T, R, C, Mutable>;

    fn sub(self, rhs: &'b Matrix<T, R, C, A2>) -> Self::Output {
        Matrix::from_fn(|row, col| self.get(row, col) - rhs.get(row, col))
    }
}

impl<'b, T, const N: usize, A2> ops::MulAssign<&'b Matrix<T, N, N, A2>> for Matrix<T, N, N, Mutable>
where
    T: Element,
    A2: Access,
{
    fn mul_assign(&mut self, rhs: &'b Matrix<T, N, N, A2>) {
        Matrix::mul(self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::*;

    #[test]
    fn operators() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::new_read_only([[0, 1], [1, 0]]);

        assert_eq!((&a * &b).to_rows(), [[2, 1], [4, 3]]);
        assert_eq!((&b * &a).to_rows(), [[3, 4], [1, 2]]);
        assert_eq!(&a * &vector2(1, 0), vector2(1, 3));
        assert_eq!((&a * 2).to_rows(), [[2, 4], [6, 8]]);
        assert_eq!((&a + &b).to_rows(), [[1, 3], [4, 4]]);
        assert_eq!((&a - &a.as_read_only()), Mat2::zero());

        let row = Matrix::from_rows([[1, 2, 3]]);
        let col = row.transposed();
        assert_eq!((&row * &col).to_rows(), [[14]]);
        assert_eq!((&col * &row).determinant(), 0);

        let mut c = a.clone();
        c *= &b;
        assert_eq!(c, &a * &b);
        assert!(!a.is_dirty());
    }

    #[test]
    fn equality_ignores_layout() {
        let dense = Matrix::from_rows([[5.0, 6.0], [8.0, 9.0]]);
        let big = Mat3::from_fn(|row, col| (row * 3 + col + 1) as f64);
        let sub = big.sub_matrix::<2, 2>(1, 1);
        assert_eq!(dense, sub);

        let mut set = HashSet::new();
        set.insert(dense.as_read_only());
        assert!(set.contains(&sub.as_read_only()));

        assert_ne!(Mat2::<f64>::zero(), &Mat2::zero() * -1.0);
        assert_approx_eq!(dense, sub.to_mutable()).abs(0.0);
    }
}

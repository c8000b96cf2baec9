//! Implementations of `std::ops` and the comparison traits.
//!
//! Binary operators take their operands by reference (tuples are handles, not values) and produce
//! new mutable tuples. Compound assignment is only available on mutable tuples.

use std::{
    hash::{Hash, Hasher},
    ops,
};

use crate::{
    access::{Access, Mutable},
    approx::ApproxEq,
    kind::Kind,
    Element, Tuple,
};

// Bit-exact, so that it agrees with `Hash`.
impl<T, const N: usize, K, A, A2> PartialEq<Tuple<T, N, K, A2>> for Tuple<T, N, K, A>
where
    T: Element,
    K: Kind,
    A: Access,
    A2: Access,
{
    fn eq(&self, other: &Tuple<T, N, K, A2>) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl<T: Element, const N: usize, K: Kind, A: Access> Eq for Tuple<T, N, K, A> {}

impl<T: Element, const N: usize, K: Kind, A: Access> PartialEq<[T; N]> for Tuple<T, N, K, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl<T: Element, const N: usize, K: Kind, A: Access> Hash for Tuple<T, N, K, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elem in self.iter() {
            elem.to_bits().hash(state);
        }
    }
}

impl<T, const N: usize, K, A, A2> ApproxEq<Tuple<T, N, K, A2>> for Tuple<T, N, K, A>
where
    T: Element,
    K: Kind,
    A: Access,
    A2: Access,
{
    type Tolerance = <T as ApproxEq>::Tolerance;

    fn abs_diff_eq(&self, other: &Tuple<T, N, K, A2>, abs_tolerance: Self::Tolerance) -> bool {
        self.to_array().abs_diff_eq(&other.to_array(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Tuple<T, N, K, A2>, rel_tolerance: Self::Tolerance) -> bool {
        self.to_array().rel_diff_eq(&other.to_array(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Tuple<T, N, K, A2>, ulps_tolerance: u32) -> bool {
        self.to_array().ulps_diff_eq(&other.to_array(), ulps_tolerance)
    }
}

/// Element-wise negation.
impl<'a, T: Element, const N: usize, K: Kind, A: Access> ops::Neg for &'a Tuple<T, N, K, A> {
    type Output = Tuple<T, N, K, Mutable>;

    fn neg(self) -> Self::Output {
        Tuple::from_fn(|i| -self.get(i))
    }
}

macro_rules! elementwise {
    ($($tr:ident :: $method:ident, $op:tt;)+) => {
        $(
            #[doc = concat!("Element-wise `", stringify!($op), "`.")]
            impl<'a, 'b, T, const N: usize, K, K2, A, A2> ops::$tr<&'b Tuple<T, N, K2, A2>>
                for &'a Tuple<T, N, K, A>
            where
                T: Element,
                K: Kind,
                K2: Kind,
                A: Access,
                A2: Access,
            {
                type Output = Tuple<T, N, K, Mutable>;

                fn $method(self, rhs: &'b Tuple<T, N, K2, A2>) -> Self::Output {
                    Tuple::from_fn(|i| self.get(i) $op rhs.get(i))
                }
            }
        )+
    };
}

elementwise! {
    Add::add, +;
    Sub::sub, -;
    Mul::mul, *;
}

/// Tuple-Scalar multiplication (scaling).
impl<'a, T: Element, const N: usize, K: Kind, A: Access> ops::Mul<T> for &'a Tuple<T, N, K, A> {
    type Output = Tuple<T, N, K, Mutable>;

    fn mul(self, rhs: T) -> Self::Output {
        Tuple::from_fn(|i| self.get(i) * rhs)
    }
}

/// Tuple-Scalar division.
impl<'a, T: Element, const N: usize, K: Kind, A: Access> ops::Div<T> for &'a Tuple<T, N, K, A> {
    type Output = Tuple<T, N, K, Mutable>;

    fn div(self, rhs: T) -> Self::Output {
        Tuple::from_fn(|i| self.get(i) / rhs)
    }
}

impl<'b, T, const N: usize, K, K2, A2> ops::AddAssign<&'b Tuple<T, N, K2, A2>>
    for Tuple<T, N, K, Mutable>
where
    T: Element,
    K: Kind,
    K2: Kind,
    A2: Access,
{
    fn add_assign(&mut self, rhs: &'b Tuple<T, N, K2, A2>) {
        Tuple::add(self, rhs);
    }
}

impl<'b, T, const N: usize, K, K2, A2> ops::SubAssign<&'b Tuple<T, N, K2, A2>>
    for Tuple<T, N, K, Mutable>
where
    T: Element,
    K: Kind,
    K2: Kind,
    A2: Access,
{
    fn sub_assign(&mut self, rhs: &'b Tuple<T, N, K2, A2>) {
        Tuple::sub(self, rhs);
    }
}

impl<T: Element, const N: usize, K: Kind> ops::MulAssign<T> for Tuple<T, N, K, Mutable> {
    fn mul_assign(&mut self, rhs: T) {
        self.scale(rhs);
    }
}

impl<T: Element, const N: usize, K: Kind> ops::DivAssign<T> for Tuple<T, N, K, Mutable> {
    fn div_assign(&mut self, rhs: T) {
        self.update(|_, v| v / rhs);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::*;

    #[test]
    fn operators() {
        let p = point3(1.0, 2.0, 3.0);
        let v = vector3(0.5, 0.5, 0.5).read_only().to_mutable();

        let q = &p + &v;
        assert_eq!(q, point3(1.5, 2.5, 3.5));
        assert!(!q.shares_storage_with(&p));
        assert!(!p.is_dirty());

        assert_eq!(&p - &p.as_read_only(), point3(0.0, 0.0, 0.0));
        assert_eq!(&p * &v, point3(0.5, 1.0, 1.5));
        assert_eq!(&p * 2.0, [2.0, 4.0, 6.0]);
        assert_eq!(&p / 2.0, [0.5, 1.0, 1.5]);
        assert_eq!(-&p.as_read_only(), point3(-1.0, -2.0, -3.0));
    }

    #[test]
    fn compound_assignment() {
        let mut p = point2(1, 2);
        let view = p.as_read_only();
        p += &vector2(1, 1);
        assert_eq!(view, [2, 3]);
        p -= &view.to_mutable();
        assert_eq!(view, [0, 0]);
        p += &vector2(3, 6);
        p *= 2;
        p /= 3;
        assert_eq!(view, [2, 4]);
    }

    #[test]
    fn hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(tuple2(1.0, 0.0));
        assert!(set.contains(&tuple2(1.0, 0.0)));
        assert!(!set.contains(&tuple2(1.0, -0.0)));
        set.insert(tuple2(f64::NAN, 0.0));
        assert!(set.contains(&tuple2(f64::NAN, 0.0)));
    }

    #[test]
    fn approx() {
        assert_approx_eq!(vector2(1.0, 2.0), vector2(1.0, 2.0 + 1e-9)).abs(1e-6);
        assert_approx_ne!(vector2(1.0f32, 2.0), vector2(1.0, 2.5)).abs(0.25);
    }
}

use crate::{
    access::{Access, Mutable},
    kind, Element, Float, Tuple,
};

/// An `N`-dimensional vector.
pub type Vector<T, const N: usize, A = Mutable> = Tuple<T, N, kind::Vector, A>;
/// A 2-dimensional vector.
pub type Vector2<T, A = Mutable> = Vector<T, 2, A>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vector2f = Vector2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vector2d = Vector2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vector2i = Vector2<i32>;
/// A 3-dimensional vector.
pub type Vector3<T, A = Mutable> = Vector<T, 3, A>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vector3f = Vector3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vector3d = Vector3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vector3i = Vector3<i32>;
/// A 4-dimensional vector.
pub type Vector4<T, A = Mutable> = Vector<T, 4, A>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vector4f = Vector4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vector4d = Vector4<f64>;

impl<T: Element, const N: usize, A: Access> Vector<T, N, A> {
    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let a = vector3(1, 3, -5);
    /// let b = vector3(4, -2, -1);
    /// assert_eq!(a.dot(&b), 3);
    /// ```
    pub fn dot<A2: Access>(&self, other: &Vector<T, N, A2>) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// assert_eq!(vector2(4, 0).length_squared(), 16);
    /// ```
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: Float, const N: usize, A: Access> Vector<T, N, A> {
    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// assert_eq!(vector3(0.0, 3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a new unit vector pointing in the direction of `self`.
    ///
    /// See [`Vector::normalize`] for the zero-length case.
    pub fn normalized(&self) -> Vector<T, N> {
        let mut v = self.to_mutable();
        v.normalize();
        v
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// The angle is computed as `atan2(|self × other|, self · other)`, which stays accurate for
    /// nearly parallel and nearly opposite vectors. 2-dimensional vectors use the
    /// [perpendicular dot product][Vector::perp_dot] as the cross product magnitude, vectors of other
    /// dimensions use Lagrange's identity.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// use std::f64::consts::TAU;
    ///
    /// let a = vector3(0.0, 1.0, 0.0);
    /// let b = vector3(1.0, 0.0, 0.0);
    /// assert_approx_eq!(a.angle(&b), TAU / 4.0);
    /// assert_approx_eq!(a.angle(&-&a), TAU / 2.0);
    /// ```
    pub fn angle<A2: Access>(&self, other: &Vector<T, N, A2>) -> T {
        let dot = self.dot(other);
        let cross = if N == 3 {
            let [a1, a2, a3] = [self.get(0), self.get(1), self.get(2)];
            let [b1, b2, b3] = [other.get(0), other.get(1), other.get(2)];
            let x = a2 * b3 - a3 * b2;
            let y = a3 * b1 - a1 * b3;
            let z = a1 * b2 - a2 * b1;
            (x * x + y * y + z * z).sqrt()
        } else if N == 2 {
            (self.get(0) * other.get(1) - self.get(1) * other.get(0)).abs()
        } else {
            let squared = self.length_squared() * other.length_squared() - dot * dot;
            squared.max(T::ZERO).sqrt()
        };
        cross.atan2(dot)
    }
}

impl<T: Float, const N: usize> Vector<T, N, Mutable> {
    /// Divides this vector by its length, turning it into a unit vector.
    ///
    /// A zero-length vector is divided by zero: its elements become `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let mut v = vector3(0.0, 0.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, vector3(0.0, 0.0, 1.0));
    ///
    /// let mut zero = Vector2::<f32>::zero();
    /// zero.normalize();
    /// assert!(zero.x().is_nan());
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        self.update(|_, v| v / length)
    }
}

impl<T: Element, A: Access> Vector<T, 2, A> {
    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z coordinate of the cross product of `self` and `other` extended with Z=0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let x = vector2(1.0, 0.0);
    /// let y = vector2(0.0, 1.0);
    /// assert_eq!(x.perp_dot(&y), 1.0);
    /// assert_eq!(y.perp_dot(&x), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    #[doc(alias = "cross")]
    pub fn perp_dot<A2: Access>(&self, other: &Vector2<T, A2>) -> T {
        self.get(0) * other.get(1) - self.get(1) * other.get(0)
    }
}

impl<T: Element, A: Access> Vector<T, 3, A> {
    /// Computes the cross product of `self` and `other` as a new vector.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts its
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let x = vector3(1, 0, 0);
    /// let y = vector3(0, 1, 0);
    /// assert_eq!(x.cross_product(&y), vector3(0, 0, 1));
    /// assert_eq!(y.cross_product(&x), vector3(0, 0, -1));
    /// ```
    pub fn cross_product<A2: Access>(&self, other: &Vector3<T, A2>) -> Vector3<T> {
        Vector3::new(cross(self.to_array(), other.to_array()))
    }
}

impl<T: Element> Vector<T, 3, Mutable> {
    /// Sets `self` to the cross product `a × b`.
    ///
    /// Either operand may be a view of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let mut v = vector3(1.0, 0.0, 0.0);
    /// let x = v.as_read_only();
    /// v.cross(&x, &vector3(0.0, 1.0, 0.0));
    /// assert_eq!(v, vector3(0.0, 0.0, 1.0));
    /// ```
    pub fn cross<A1: Access, A2: Access>(
        &mut self,
        a: &Vector3<T, A1>,
        b: &Vector3<T, A2>,
    ) -> &mut Self {
        // Both operands are read before anything is written.
        let c = cross(a.to_array(), b.to_array());
        self.set_all(c)
    }
}

fn cross<T: Element>([a1, a2, a3]: [T; 3], [b1, b2, b3]: [T; 3]) -> [T; 3] {
    #[rustfmt::skip]
    let cross = [
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
    ];
    cross
}

/// Constructs a [`Vector2`] from its elements.
#[inline]
pub fn vector2<T: Element>(x: T, y: T) -> Vector2<T> {
    Vector::new([x, y])
}

/// Constructs a [`Vector3`] from its elements.
#[inline]
pub fn vector3<T: Element>(x: T, y: T, z: T) -> Vector3<T> {
    Vector::new([x, y, z])
}

/// Constructs a [`Vector4`] from its elements.
#[inline]
pub fn vector4<T: Element>(x: T, y: T, z: T, w: T) -> Vector4<T> {
    Vector::new([x, y, z, w])
}

use crate::{
    access::{Access, Mutable},
    kind, Abs, Element, Float, MinMax, Tuple, Vector,
};

/// An `N`-dimensional point.
pub type Point<T, const N: usize, A = Mutable> = Tuple<T, N, kind::Point, A>;
/// A 2-dimensional point.
pub type Point2<T, A = Mutable> = Point<T, 2, A>;
/// A 2-dimensional point with [`f32`] elements.
pub type Point2f = Point2<f32>;
/// A 2-dimensional point with [`f64`] elements.
pub type Point2d = Point2<f64>;
/// A 2-dimensional point with [`i32`] elements.
pub type Point2i = Point2<i32>;
/// A 3-dimensional point.
pub type Point3<T, A = Mutable> = Point<T, 3, A>;
/// A 3-dimensional point with [`f32`] elements.
pub type Point3f = Point3<f32>;
/// A 3-dimensional point with [`f64`] elements.
pub type Point3d = Point3<f64>;
/// A 3-dimensional point with [`i32`] elements.
pub type Point3i = Point3<i32>;
/// A 4-dimensional (homogeneous) point.
pub type Point4<T, A = Mutable> = Point<T, 4, A>;
/// A 4-dimensional point with [`f32`] elements.
pub type Point4f = Point4<f32>;
/// A 4-dimensional point with [`f64`] elements.
pub type Point4d = Point4<f64>;

impl<T: Element, const N: usize, A: Access> Point<T, N, A> {
    /// Returns the squared euclidean distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// assert_eq!(point2(1, 1).distance_squared(&point2(4, 5)), 25);
    /// ```
    pub fn distance_squared<A2: Access>(&self, other: &Point<T, N, A2>) -> T {
        if N == 2 {
            let dx = self.get(0) - other.get(0);
            let dy = self.get(1) - other.get(1);
            dx * dx + dy * dy
        } else if N == 3 {
            let dx = self.get(0) - other.get(0);
            let dy = self.get(1) - other.get(1);
            let dz = self.get(2) - other.get(2);
            dx * dx + dy * dy + dz * dz
        } else {
            self.iter().zip(other.iter()).fold(T::ZERO, |acc, (a, b)| {
                let d = a - b;
                acc + d * d
            })
        }
    }

    /// Returns the L1 (Manhattan) distance between `self` and `other`.
    pub fn distance_l1<A2: Access>(&self, other: &Point<T, N, A2>) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::ZERO, |acc, (a, b)| acc + Abs::abs(a - b))
    }

    /// Returns the L∞ (Chebyshev) distance between `self` and `other`: the largest difference of
    /// any single coordinate.
    pub fn distance_linf<A2: Access>(&self, other: &Point<T, N, A2>) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::ZERO, |acc, (a, b)| MinMax::max(acc, Abs::abs(a - b)))
    }

    /// Returns the squared distance between `self` and the origin.
    pub fn distance_squared_to_origin(&self) -> T {
        self.iter().fold(T::ZERO, |acc, a| acc + a * a)
    }

    /// Returns the vector pointing from `other` to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let v = point2(3, 4).sub_point(&point2(1, 1));
    /// assert_eq!(v, vector2(2, 3));
    /// ```
    pub fn sub_point<A2: Access>(&self, other: &Point<T, N, A2>) -> Vector<T, N> {
        Vector::from_fn(|i| self.get(i) - other.get(i))
    }
}

impl<T: Float, const N: usize, A: Access> Point<T, N, A> {
    /// Returns the euclidean distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let origin = Point3::<f64>::zero();
    /// assert_eq!(origin.distance(&point3(3.0, 4.0, 0.0)), 5.0);
    /// ```
    pub fn distance<A2: Access>(&self, other: &Point<T, N, A2>) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Returns the euclidean distance between `self` and the origin.
    pub fn distance_to_origin(&self) -> T {
        self.distance_squared_to_origin().sqrt()
    }
}

impl<T: Element, const N: usize> Point<T, N, Mutable> {
    /// Moves `self` by `offset`.
    pub fn translate<A2: Access>(&mut self, offset: &Vector<T, N, A2>) -> &mut Self {
        self.add(offset)
    }
}

/// Constructs a [`Point2`] from its coordinates.
#[inline]
pub fn point2<T: Element>(x: T, y: T) -> Point2<T> {
    Point::new([x, y])
}

/// Constructs a [`Point3`] from its coordinates.
#[inline]
pub fn point3<T: Element>(x: T, y: T, z: T) -> Point3<T> {
    Point::new([x, y, z])
}

/// Constructs a [`Point4`] from its coordinates.
#[inline]
pub fn point4<T: Element>(x: T, y: T, z: T, w: T) -> Point4<T> {
    Point::new([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn distance() {
        let origin = Point3::<f64>::zero();
        let p = point3(3.0, 4.0, 0.0);
        assert_eq!(origin.distance(&p), 5.0);
        assert_eq!(p.distance_to_origin(), 5.0);
        assert_eq!(p.as_read_only().distance(&origin.as_read_only()), 5.0);
        assert_eq!(p.distance_l1(&origin), 7.0);
        assert_eq!(p.distance_linf(&origin), 4.0);
        assert_eq!(point2(1, 1).distance_squared_to_origin(), 2);
    }

    #[test]
    fn closed_forms_agree_with_fold() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..100 {
            let a: [f64; 3] = std::array::from_fn(|_| rng.f64() * 100.0 - 50.0);
            let b: [f64; 3] = std::array::from_fn(|_| rng.f64() * 100.0 - 50.0);

            let closed = Point3::new(a).distance_squared(&Point3::new(b));
            let folded = Point4::new([a[0], a[1], a[2], 0.0])
                .distance_squared(&Point4::new([b[0], b[1], b[2], 0.0]));
            assert_approx_eq!(closed, folded).rel(1e-12);

            let closed = Point2::new([a[0], a[1]]).distance(&Point2::new([b[0], b[1]]));
            let folded = Point4::new([a[0], a[1], 0.0, 0.0])
                .distance(&Point4::new([b[0], b[1], 0.0, 0.0]));
            assert_approx_eq!(closed, folded).rel(1e-12);
        }
    }

    #[test]
    fn point_vector_interplay() {
        let mut p = point3(1.0, 1.0, 1.0);
        let start = p.to_mutable();
        let v = vector3(1.0, 2.0, 3.0);
        p.translate(&v);
        assert_eq!(p, point3(2.0, 3.0, 4.0));
        assert_eq!(p.sub_point(&start), v);
    }
}

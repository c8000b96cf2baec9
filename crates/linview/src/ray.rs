use std::fmt;

use crate::{
    access::{Access, Mutable, ReadOnly},
    Element, Point3, Vector3,
};

/// A half-line starting at `origin` and extending along `direction`.
///
/// Both components share the ray's access parameter `A`, so a ray is read-only exactly when its
/// origin and direction both are.
pub struct Ray<T, A = Mutable> {
    origin: Point3<T, A>,
    direction: Vector3<T, A>,
}

/// A ray with [`f32`] elements.
pub type Rayf = Ray<f32>;
/// A ray with [`f64`] elements.
pub type Rayd = Ray<f64>;

impl<T: Element> Ray<T, Mutable> {
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray that is read-only from the start.
    pub fn new_read_only(origin: [T; 3], direction: [T; 3]) -> Ray<T, ReadOnly> {
        Ray {
            origin: Point3::new_read_only(origin),
            direction: Vector3::new_read_only(direction),
        }
    }

    /// Copies `origin` into the ray's origin.
    ///
    /// The components are only ever written in place, so views created with
    /// [`Ray::as_read_only`] keep following the ray.
    pub fn set_origin<A2: Access>(&mut self, origin: &Point3<T, A2>) -> &mut Self {
        self.origin.set_from(origin);
        self
    }

    /// Copies `direction` into the ray's direction.
    pub fn set_direction<A2: Access>(&mut self, direction: &Vector3<T, A2>) -> &mut Self {
        self.direction.set_from(direction);
        self
    }

    /// Marks both components clean.
    pub fn mark_clean(&mut self) -> &mut Self {
        self.origin.mark_clean();
        self.direction.mark_clean();
        self
    }
}

impl<T: Element, A: Access> Ray<T, A> {
    pub fn origin(&self) -> &Point3<T, A> {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3<T, A> {
        &self.direction
    }

    /// Returns the point at parameter `t`: `origin + t * direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let ray = Ray::new(point3(1.0, 0.0, 0.0), vector3(0.0, 2.0, 0.0));
    /// assert_eq!(ray.point_at(1.5), point3(1.0, 3.0, 0.0));
    /// ```
    pub fn point_at(&self, t: T) -> Point3<T> {
        Point3::from_fn(|i| self.origin.get(i) + t * self.direction.get(i))
    }

    /// Returns a read-only ray whose components alias the components of `self`.
    pub fn as_read_only(&self) -> Ray<T, ReadOnly> {
        Ray {
            origin: self.origin.as_read_only(),
            direction: self.direction.as_read_only(),
        }
    }

    /// Creates an independent mutable copy of `self`.
    pub fn to_mutable(&self) -> Ray<T> {
        Ray {
            origin: self.origin.to_mutable(),
            direction: self.direction.to_mutable(),
        }
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.origin.is_read_only() && self.direction.is_read_only()
    }

    /// Returns whether either component was modified since it was last marked clean.
    pub fn is_dirty(&self) -> bool {
        self.origin.is_dirty() || self.direction.is_dirty()
    }
}

impl<T: Element> Clone for Ray<T, Mutable> {
    fn clone(&self) -> Self {
        self.to_mutable()
    }
}

impl<T: Element, A: Access, A2: Access> PartialEq<Ray<T, A2>> for Ray<T, A> {
    fn eq(&self, other: &Ray<T, A2>) -> bool {
        self.origin == other.origin && self.direction == other.direction
    }
}

impl<T: Element, A: Access> fmt::Debug for Ray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ray")
            .field("origin", &self.origin)
            .field("direction", &self.direction)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn views() {
        let mut ray = Ray::new(point3(0.0, 0.0, 0.0), vector3(1.0, 0.0, 0.0));
        assert!(!ray.is_read_only());
        assert!(!ray.is_dirty());

        let view = ray.as_read_only();
        assert!(view.is_read_only());
        assert!(view.origin().shares_storage_with(ray.origin()));

        ray.set_direction(&vector3(1.0, 1.0, 0.0));
        assert!(view.is_dirty());
        assert_eq!(view.point_at(2.0), point3(2.0, 2.0, 0.0));

        ray.mark_clean();
        assert!(!view.is_dirty());

        ray.set_origin(&point3(1.0, 1.0, 1.0).as_read_only());
        assert!(view.is_dirty());
        assert_eq!(view.origin(), &point3(1.0, 1.0, 1.0));
        assert_eq!(view, ray);
    }

    #[test]
    fn read_only_factory() {
        let made = Ray::new_read_only([1.0, 2.0, 3.0], [0.0, 0.0, 1.0]);
        let converted = Ray::new(point3(1.0, 2.0, 3.0), vector3(0.0, 0.0, 1.0)).as_read_only();
        assert_eq!(made, converted);
        assert!(made.is_read_only());

        let mut copy = made.to_mutable();
        copy.set_origin(&point3(1.0, 2.0, -3.0));
        assert_eq!(made.origin().z(), 3.0);
        assert!(copy.is_dirty());
        assert!(!made.is_dirty());
    }

    #[test]
    fn setters_keep_views_attached() {
        let mut ray = Ray::new(point3(0.0, 0.0, 0.0), vector3(0.0, 0.0, 1.0));
        let memoized = ray.origin().read_only() as *const Point3<f64, ReadOnly>;
        let view = ray.as_read_only();

        for i in 0..10 {
            let t = i as f64;
            ray.set_origin(&point3(t, -t, 0.0)).set_direction(&vector3(0.0, t, 1.0));
            assert!(view.origin().shares_storage_with(ray.origin()));
            assert!(view.direction().shares_storage_with(ray.direction()));
            assert_eq!(view, ray);
            assert_eq!(view.point_at(2.0), point3(t, t, 2.0));
        }
        assert_eq!(memoized, ray.origin().read_only() as *const _);
    }
}

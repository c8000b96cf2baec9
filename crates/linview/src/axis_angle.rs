use crate::{
    access::{Access, Mutable},
    kind, Element, Float, Quat, Tuple, Vector3,
};

/// A rotation of `angle` radians around the axis `(x, y, z)`.
///
/// Stored like a 4-element tuple with the angle last.
pub type AxisAngle<T, A = Mutable> = Tuple<T, 4, kind::AxisAngle, A>;
/// An axis-angle rotation with [`f32`] elements.
pub type AxisAnglef = AxisAngle<f32>;
/// An axis-angle rotation with [`f64`] elements.
pub type AxisAngled = AxisAngle<f64>;

impl<T: Element, A: Access> AxisAngle<T, A> {
    /// Returns a copy of the rotation axis.
    pub fn axis(&self) -> Vector3<T> {
        Vector3::new([self.get(0), self.get(1), self.get(2)])
    }

    /// Returns the rotation angle in radians.
    #[inline]
    pub fn angle(&self) -> T {
        self.get(3)
    }
}

impl<T: Element> AxisAngle<T, Mutable> {
    pub fn set_angle(&mut self, angle: T) -> &mut Self {
        self.set(3, angle)
    }

    /// Sets the axis and the angle at once.
    pub fn set_axis_angle<A2: Access>(&mut self, axis: &Vector3<T, A2>, angle: T) -> &mut Self {
        self.set_all([axis.get(0), axis.get(1), axis.get(2), angle])
    }
}

impl<T: Float> AxisAngle<T, Mutable> {
    /// Sets `self` to the rotation described by the unit quaternion `q`.
    ///
    /// The resulting axis is normalized. A rotation by zero radians has no well-defined axis and
    /// yields `(0, 0, 1, 0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let mut aa = axis_angle(1.0, 0.0, 0.0, 0.5);
    /// aa.set_from_quat(&Quat::identity());
    /// assert_eq!(aa, axis_angle(0.0, 0.0, 1.0, 0.0));
    /// ```
    pub fn set_from_quat<A2: Access>(&mut self, q: &Quat<T, A2>) -> &mut Self {
        let [x, y, z, w] = q.to_array();
        let sin_squared = x * x + y * y + z * z;
        if sin_squared > T::from_f64(1e-12) {
            let sin = sin_squared.sqrt();
            let angle = (T::ONE + T::ONE) * sin.atan2(w);
            self.set_all([x / sin, y / sin, z / sin, angle])
        } else {
            self.set_all([T::ZERO, T::ZERO, T::ONE, T::ZERO])
        }
    }
}

/// Constructs an [`AxisAngle`] from the axis `(x, y, z)` and `angle` in radians.
#[inline]
pub fn axis_angle<T: Element>(x: T, y: T, z: T, angle: T) -> AxisAngle<T> {
    AxisAngle::new([x, y, z, angle])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use crate::*;

    #[test]
    fn accessors() {
        let mut aa = axis_angle(0.0, 1.0, 0.0, 0.25);
        assert_eq!(aa.axis(), vector3(0.0, 1.0, 0.0));
        assert_eq!(aa.angle(), 0.25);

        let view = aa.as_read_only();
        aa.set_angle(0.5);
        assert_eq!(view.angle(), 0.5);
        assert_eq!(view.w(), 0.5);

        aa.set_axis_angle(&vector3(1.0, 0.0, 0.0), 1.0);
        assert_eq!(aa, axis_angle(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn quat_round_trip() {
        let source = axis_angle(0.0, 0.6, 0.8, TAU / 3.0);
        let mut q = Quat::identity();
        q.set_from_axis_angle(&source);

        let mut aa = AxisAngled::zero();
        aa.set_from_quat(&q);
        assert_approx_eq!(aa, source).abs(1e-12);

        aa.set_from_quat(&Quat::rotation_x(0.0));
        assert_eq!(aa, axis_angle(0.0, 0.0, 1.0, 0.0));
    }
}

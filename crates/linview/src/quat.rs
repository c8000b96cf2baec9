use crate::{
    access::{Access, Mutable},
    kind, AxisAngle, Element, Float, Tuple, Vector3,
};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are stored like a 4-element tuple: the `x`, `y`, and `z` elements are the `i`, `j`,
/// and `k` imaginary parts, the `w` element is the real part.
pub type Quat<T, A = Mutable> = Tuple<T, 4, kind::Quat, A>;
/// A quaternion with [`f32`] elements.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] elements.
pub type Quatd = Quat<f64>;

impl<T: Element> Quat<T, Mutable> {
    /// Creates the multiplicative identity `(0, 0, 0, 1)`.
    ///
    /// This is a unit quaternion that will not change a vector it rotates.
    pub fn identity() -> Self {
        Self::new([T::ZERO, T::ZERO, T::ZERO, T::ONE])
    }

    /// Sets `self` to the identity.
    pub fn set_identity(&mut self) -> &mut Self {
        self.set_all([T::ZERO, T::ZERO, T::ZERO, T::ONE])
    }

    /// Sets `self` to the Hamilton product `self * q`.
    ///
    /// When both are unit quaternions, the result rotates by `q` first, then by `self`.
    pub fn mul<A2: Access>(&mut self, q: &Quat<T, A2>) -> &mut Self {
        let product = hamilton(self.to_array(), q.to_array());
        self.set_all(product)
    }

    /// Sets `self` to the Hamilton product `a * b`.
    ///
    /// Either operand may be a view of `self`.
    pub fn set_product<A1: Access, A2: Access>(
        &mut self,
        a: &Quat<T, A1>,
        b: &Quat<T, A2>,
    ) -> &mut Self {
        let product = hamilton(a.to_array(), b.to_array());
        self.set_all(product)
    }

    /// Negates the imaginary part of `self`.
    pub fn conjugate(&mut self) -> &mut Self {
        self.update(|i, v| if i < 3 { -v } else { v })
    }
}

impl<T: Element, A: Access> Quat<T, A> {
    pub fn dot<A2: Access>(&self, other: &Quat<T, A2>) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    pub fn length_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: Float, A: Access> Quat<T, A> {
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns the inverse of `self` as a new quaternion.
    ///
    /// A zero quaternion has no inverse; its elements become `NaN`.
    pub fn inverse(&self) -> Quat<T> {
        let mut q = self.to_mutable();
        q.invert();
        q
    }

    /// Rotates `v` by `self`, returning the rotated vector.
    ///
    /// `self` is expected to be a unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// use std::f64::consts::TAU;
    ///
    /// let q = Quat::rotation_z(TAU / 4.0);
    /// let v = q.rotate(&vector3(1.0, 0.0, 0.0));
    /// assert_approx_eq!(v, vector3(0.0, 1.0, 0.0)).abs(1e-15);
    /// ```
    pub fn rotate<A2: Access>(&self, v: &Vector3<T, A2>) -> Vector3<T> {
        let [qx, qy, qz, qw] = self.to_array();
        let [vx, vy, vz] = v.to_array();
        let two = T::ONE + T::ONE;

        // t = 2 * (q.xyz × v)
        let tx = two * (qy * vz - qz * vy);
        let ty = two * (qz * vx - qx * vz);
        let tz = two * (qx * vy - qy * vx);

        // v + w * t + q.xyz × t
        Vector3::new([
            vx + qw * tx + (qy * tz - qz * ty),
            vy + qw * ty + (qz * tx - qx * tz),
            vz + qw * tz + (qx * ty - qy * tx),
        ])
    }
}

impl<T: Float> Quat<T, Mutable> {
    /// Creates a rotation of `radians` around the X axis.
    pub fn rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians * T::from_f64(0.5)).sin_cos();
        Self::new([sin, T::ZERO, T::ZERO, cos])
    }

    /// Creates a rotation of `radians` around the Y axis.
    pub fn rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians * T::from_f64(0.5)).sin_cos();
        Self::new([T::ZERO, sin, T::ZERO, cos])
    }

    /// Creates a rotation of `radians` around the Z axis.
    pub fn rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians * T::from_f64(0.5)).sin_cos();
        Self::new([T::ZERO, T::ZERO, sin, cos])
    }

    /// Creates a rotation of `radians` around `axis`, which does not need to be normalized.
    pub fn from_axis_angle<A2: Access>(axis: &Vector3<T, A2>, radians: T) -> Self {
        let mut q = Self::identity();
        q.set_rotation(axis, radians);
        q
    }

    /// Sets `self` to a rotation of `radians` around `axis`.
    ///
    /// `axis` does not need to be normalized. A zero-length axis yields the identity.
    pub fn set_rotation<A2: Access>(&mut self, axis: &Vector3<T, A2>, radians: T) -> &mut Self {
        let length = axis.length();
        if length == T::ZERO {
            return self.set_identity();
        }
        let (sin, cos) = (radians * T::from_f64(0.5)).sin_cos();
        let s = sin / length;
        self.set_all([axis.get(0) * s, axis.get(1) * s, axis.get(2) * s, cos])
    }

    /// Sets `self` to the rotation described by `aa`.
    pub fn set_from_axis_angle<A2: Access>(&mut self, aa: &AxisAngle<T, A2>) -> &mut Self {
        let axis = Vector3::new([aa.get(0), aa.get(1), aa.get(2)]);
        self.set_rotation(&axis, aa.get(3))
    }

    /// Sets `self` to its inverse: the conjugate divided by the squared length.
    pub fn invert(&mut self) -> &mut Self {
        let norm = self.length_squared();
        self.update(|i, v| if i < 3 { -v / norm } else { v / norm })
    }

    /// Divides `self` by its length, turning it into a unit quaternion.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        self.update(|_, v| v / length)
    }

    /// Spherically interpolates from `self` towards `q` by `alpha`, along the shortest path.
    ///
    /// Both quaternions are expected to have unit length. Nearly parallel quaternions are
    /// interpolated linearly, where the spherical formula loses precision.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// use std::f64::consts::TAU;
    ///
    /// let mut q = Quat::identity();
    /// q.slerp(&Quat::rotation_x(TAU / 4.0), 0.5);
    /// assert_approx_eq!(q, Quat::rotation_x(TAU / 8.0)).abs(1e-15);
    /// ```
    pub fn slerp<A2: Access>(&mut self, q: &Quat<T, A2>, alpha: T) -> &mut Self {
        let mut target = q.to_array();
        let mut cos = self.dot(q);
        if cos < T::ZERO {
            cos = -cos;
            target = target.map(|v| -v);
        }

        let (s0, s1) = if T::ONE - cos > T::from_f64(1e-6) {
            let omega = cos.acos();
            let sin = omega.sin();
            (
                ((T::ONE - alpha) * omega).sin() / sin,
                (alpha * omega).sin() / sin,
            )
        } else {
            (T::ONE - alpha, alpha)
        };
        self.update(|i, v| s0 * v + s1 * target[i])
    }
}

fn hamilton<T: Element>([x1, y1, z1, w1]: [T; 4], [x2, y2, z2, w2]: [T; 4]) -> [T; 4] {
    [
        w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
        w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
        w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
    ]
}

/// Constructs a [`Quat`] from its imaginary parts `x`, `y`, `z` and its real part `w`.
#[inline]
pub fn quat<T: Element>(x: T, y: T, z: T, w: T) -> Quat<T> {
    Quat::new([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use crate::*;

    #[test]
    fn identity() {
        let q = Quat::rotation_y(1.0);
        let mut p = q.clone();
        p.mul(&Quatd::identity());
        assert_eq!(p, q);

        p.set_identity().mul(&q);
        assert_eq!(p, q);
        assert_eq!(Quat::identity(), quat(0, 0, 0, 1));
    }

    #[test]
    fn hamilton_product() {
        // i * j = k, j * i = -k
        let i = quat(1, 0, 0, 0);
        let j = quat(0, 1, 0, 0);
        let mut q = Quat::identity();
        q.set_product(&i, &j);
        assert_eq!(q, quat(0, 0, 1, 0));
        q.set_product(&j, &i);
        assert_eq!(q, quat(0, 0, -1, 0));

        // i * i = -1, with an aliased operand
        let mut q = i.clone();
        let view = q.as_read_only();
        q.set_product(&view, &view);
        assert_eq!(q, quat(0, 0, 0, -1));
    }

    #[test]
    fn rotation_composition() {
        let mut q = Quat::rotation_z(TAU / 8.0);
        q.mul(&Quat::rotation_z(TAU / 8.0));
        assert_approx_eq!(q, Quat::rotation_z(TAU / 4.0)).abs(1e-15);

        let v = q.rotate(&vector3(1.0, 0.0, 0.0));
        assert_approx_eq!(v, vector3(0.0, 1.0, 0.0)).abs(1e-15);

        let v = Quat::rotation_x(TAU / 4.0).rotate(&vector3(0.0, 1.0, 0.0));
        assert_approx_eq!(v, vector3(0.0, 0.0, 1.0)).abs(1e-15);
        let v = Quat::rotation_y(TAU / 4.0).rotate(&vector3(0.0, 0.0, 1.0));
        assert_approx_eq!(v, vector3(1.0, 0.0, 0.0)).abs(1e-15);
    }

    #[test]
    fn inverse() {
        let q = quat(1.0, 2.0, -2.0, 4.0);
        let mut p = q.inverse();
        p.mul(&q);
        assert_approx_eq!(p, Quat::identity()).abs(1e-15);

        let mut c = q.clone();
        c.conjugate();
        assert_eq!(c, quat(-1.0, -2.0, 2.0, 4.0));
        assert_eq!(q.length(), 5.0);

        assert!(Quatf::zero().inverse().iter().all(f32::is_nan));
    }

    #[test]
    fn axis_angle_rotation() {
        let a = Quat::from_axis_angle(&vector3(0.0, 0.0, 2.0), TAU / 4.0);
        assert_approx_eq!(a, Quat::rotation_z(TAU / 4.0)).abs(1e-15);

        let mut b = Quat::identity();
        b.set_from_axis_angle(&axis_angle(0.0, 0.0, 1.0, TAU / 4.0));
        assert_eq!(a, b);

        b.set_rotation(&Vector3::zero(), 1.0);
        assert_eq!(b, Quatd::identity());
    }

    #[test]
    fn slerp() {
        let start = Quat::rotation_x(0.0);
        let end = Quat::rotation_x(TAU / 4.0);
        let mut q = start.clone();
        q.slerp(&end, 0.0);
        assert_approx_eq!(q, start).abs(1e-15);

        let mut q = start.clone();
        q.slerp(&end, 1.0);
        assert_approx_eq!(q, end).abs(1e-15);

        // takes the short way around when the target is on the other hemisphere
        let mut q = start.clone();
        q.slerp(&-&end, 0.5);
        assert_approx_eq!(q, Quat::rotation_x(TAU / 8.0)).abs(1e-15);

        // nearly parallel inputs fall back to linear interpolation
        let mut q = start.clone();
        q.slerp(&Quat::rotation_x(1e-9), 0.5);
        assert_approx_eq!(q.length(), 1.0).abs(1e-12);

        let mut n = quat(0.0, 0.0, 3.0, 4.0);
        n.normalize();
        assert_eq!(n, quat(0.0, 0.0, 0.6, 0.8));
    }
}

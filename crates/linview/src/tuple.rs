use std::{array, fmt, marker::PhantomData};

use itertools::Itertools;
use once_cell::unsync::OnceCell;

use crate::{
    access::{Access, AccessMode, Mutable, ReadOnly},
    kind::{self, Kind},
    storage::Storage,
    Abs, Element, Error, MinMax, Result,
};

mod named;
mod ops;

pub use named::*;

/// A 2-element tuple without geometric meaning.
pub type Tuple2<T, A = Mutable> = Tuple<T, 2, kind::Tuple, A>;
/// A 2-element tuple with [`f32`] elements.
pub type Tuple2f = Tuple2<f32>;
/// A 2-element tuple with [`f64`] elements.
pub type Tuple2d = Tuple2<f64>;
/// A 2-element tuple with [`i32`] elements.
pub type Tuple2i = Tuple2<i32>;
/// A 3-element tuple without geometric meaning.
pub type Tuple3<T, A = Mutable> = Tuple<T, 3, kind::Tuple, A>;
/// A 3-element tuple with [`f32`] elements.
pub type Tuple3f = Tuple3<f32>;
/// A 3-element tuple with [`f64`] elements.
pub type Tuple3d = Tuple3<f64>;
/// A 3-element tuple with [`i32`] elements.
pub type Tuple3i = Tuple3<i32>;
/// A 4-element tuple without geometric meaning.
pub type Tuple4<T, A = Mutable> = Tuple<T, 4, kind::Tuple, A>;
/// A 4-element tuple with [`f32`] elements.
pub type Tuple4f = Tuple4<f32>;
/// A 4-element tuple with [`f64`] elements.
pub type Tuple4d = Tuple4<f64>;
/// A 4-element tuple with [`i32`] elements.
pub type Tuple4i = Tuple4<i32>;

/// A handle to `N` elements of type `T` in shared [`Storage`].
///
/// `K` is a [`Kind`] marker selecting the domain operations available on the tuple (see
/// [`Point`][crate::Point], [`Vector`][crate::Vector], [`Quat`][crate::Quat] and
/// [`AxisAngle`][crate::AxisAngle]). `A` is the [`Access`] marker: only [`Mutable`] tuples have
/// methods that write.
///
/// # Construction
///
/// - The freestanding [`tuple2`], [`tuple3`] and [`tuple4`] functions (and their equivalents for
///   points, vectors and quaternions) create mutable tuples from their elements.
/// - [`Tuple::new`] takes ownership of an array, [`Tuple::zero`] and [`Tuple::splat`] fill every
///   element with the same value.
/// - [`Tuple::from_slice`] copies a slice of exactly `N` elements, [`Tuple::from_tuple`] copies any
///   other tuple of the same size, regardless of its kind or access.
/// - [`Tuple::new_read_only`] creates a tuple that is read-only from birth.
///
/// # Views
///
/// [`Tuple::as_read_only`] creates a new read-only handle aliasing the same storage, and
/// [`Tuple::read_only`] returns a memoized one. Views observe every write made through the mutable
/// handle, including the dirty flag. [`Tuple::to_mutable`] (and [`Clone`]) create independent
/// copies instead.
///
/// # Equality
///
/// `==` compares the raw bits of every element, which keeps it consistent with [`Hash`]: `NaN`
/// equals itself and `-0.0` differs from `0.0`. Use [`Tuple::epsilon_equals`] or
/// [`ApproxEq`][crate::approx::ApproxEq] for tolerance-based comparisons.
///
/// [`Hash`]: std::hash::Hash
pub struct Tuple<T, const N: usize, K = kind::Tuple, A = Mutable> {
    storage: Storage<T>,
    companion: OnceCell<Box<Tuple<T, N, K, ReadOnly>>>,
    _marker: PhantomData<fn() -> (K, A)>,
}

impl<T: Element, const N: usize, K: Kind, A: Access> Tuple<T, N, K, A> {
    pub(crate) fn from_storage(storage: Storage<T>) -> Self {
        debug_assert_eq!(storage.len(), N);
        Self {
            storage,
            companion: OnceCell::new(),
            _marker: PhantomData,
        }
    }

    pub(crate) fn into_storage(self) -> Storage<T> {
        self.storage
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N`.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.storage.read(index)
    }

    /// Returns the number of elements, `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Copies the current elements into an array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// assert_eq!(point3(1, 2, 3).to_array(), [1, 2, 3]);
    /// ```
    pub fn to_array(&self) -> [T; N] {
        array::from_fn(|i| self.get(i))
    }

    /// Iterates over the current elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.storage.iter()
    }

    /// Returns the storage this tuple reads from.
    #[inline]
    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    /// Returns whether the storage was written to since it was last marked clean.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.storage.is_dirty()
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        A::MODE.is_read_only()
    }

    #[inline]
    pub fn access_mode(&self) -> AccessMode {
        A::MODE
    }

    /// Returns whether `self` and `other` are handles to the same storage.
    pub fn shares_storage_with<const M: usize, K2: Kind, A2: Access>(
        &self,
        other: &Tuple<T, M, K2, A2>,
    ) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    /// Returns whether another handle, such as a view, shares storage with `self`.
    ///
    /// The companion returned by [`Tuple::read_only`] belongs to `self` and is not counted.
    pub fn is_aliased(&self) -> bool {
        let own = 1 + usize::from(self.companion.get().is_some());
        self.storage.handle_count() > own
    }

    /// Returns whether every element of `self` is within `epsilon` of the corresponding element of
    /// `other`.
    ///
    /// The bound is inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let a = vector3(1.0, 2.0, 3.0);
    /// let b = vector3(1.0, 2.0, 3.5);
    /// assert!(a != b);
    /// assert!(a.epsilon_equals(&b, 0.5));
    /// assert!(!a.epsilon_equals(&b, 0.25));
    /// ```
    pub fn epsilon_equals<A2: Access>(&self, other: &Tuple<T, N, K, A2>, epsilon: T) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }

    /// Creates a new read-only handle to the storage of `self`.
    ///
    /// Every call creates a distinct handle. Use [`Tuple::read_only`] to reuse one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let mut p = point3(1.0, 2.0, 3.0);
    /// let view = p.as_read_only();
    /// assert!(view.is_read_only());
    ///
    /// p.set_x(-1.0);
    /// assert_eq!(view.x(), -1.0);
    /// assert!(view.is_dirty());
    /// ```
    pub fn as_read_only(&self) -> Tuple<T, N, K, ReadOnly> {
        Tuple::from_storage(self.storage.alias())
    }

    /// Returns the read-only companion of `self`, creating it on first use.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let v = vector2(3.0, 4.0);
    /// assert!(std::ptr::eq(v.read_only(), v.read_only()));
    /// assert_eq!(v.read_only().length(), 5.0);
    /// ```
    pub fn read_only(&self) -> &Tuple<T, N, K, ReadOnly> {
        self.companion.get_or_init(|| Box::new(self.as_read_only()))
    }

    /// Creates an independent mutable copy of `self`.
    ///
    /// The copy has its own storage and its own dirty flag, initialized to the current state of
    /// `self`.
    pub fn to_mutable(&self) -> Tuple<T, N, K, Mutable> {
        Tuple::from_storage(self.storage.deep_copy())
    }
}

/// Constructors.
///
/// These live on the mutable form so that the access parameter never needs annotating.
impl<T: Element, const N: usize, K: Kind> Tuple<T, N, K, Mutable> {
    /// Creates a tuple that takes ownership of `elems`.
    #[inline]
    pub fn new(elems: [T; N]) -> Self {
        Self::from_storage(Storage::wrap(elems))
    }

    /// Creates a tuple with every element set to zero.
    pub fn zero() -> Self {
        Self::from_storage(Storage::allocate(N))
    }

    /// Creates a tuple with every element set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let v = Vector3::splat(2);
    /// assert_eq!(v, vector3(2, 2, 2));
    /// ```
    pub fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Creates a tuple where each element is initialized by invoking a closure with its index.
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::new(array::from_fn(cb))
    }

    /// Copies exactly `N` elements from `elems`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `elems` does not have `N` elements.
    pub fn from_slice(elems: &[T]) -> Result<Self> {
        let elems: [T; N] = elems.try_into().map_err(|_| Error::DimensionMismatch {
            expected: N,
            actual: elems.len(),
        })?;
        Ok(Self::new(elems))
    }

    /// Copies the elements of another tuple of the same size, of any kind and access.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let p = point3(1.0, 2.0, 3.0);
    /// let v = Vector3::from_tuple(&p.as_read_only());
    /// assert_eq!(v.to_array(), p.to_array());
    /// assert!(!v.shares_storage_with(&p));
    /// ```
    pub fn from_tuple<K2: Kind, A2: Access>(other: &Tuple<T, N, K2, A2>) -> Self {
        Self::new(other.to_array())
    }

    /// Creates a tuple that is read-only from the start.
    pub fn new_read_only(elems: [T; N]) -> Tuple<T, N, K, ReadOnly> {
        Tuple::from_storage(Storage::wrap(elems))
    }

    /// Sets the element at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N`. Nothing is written in that case.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> &mut Self {
        self.storage.write(index, value);
        self
    }

    /// Replaces every element with the result of `f(index, current)`.
    pub(crate) fn update<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(usize, T) -> T,
    {
        for i in 0..N {
            self.storage.write(i, f(i, self.storage.read(i)));
        }
        self
    }

    pub fn add_value(&mut self, index: usize, value: T) -> &mut Self {
        self.set(index, self.get(index) + value)
    }

    pub fn sub_value(&mut self, index: usize, value: T) -> &mut Self {
        self.set(index, self.get(index) - value)
    }

    pub fn mul_value(&mut self, index: usize, value: T) -> &mut Self {
        self.set(index, self.get(index) * value)
    }

    pub fn div_value(&mut self, index: usize, value: T) -> &mut Self {
        self.set(index, self.get(index) / value)
    }

    /// Overwrites all elements with `elems`.
    pub fn set_all(&mut self, elems: [T; N]) -> &mut Self {
        self.update(|i, _| elems[i])
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.update(|_, _| value)
    }

    /// Copies the elements of `other` into `self`.
    pub fn set_from<K2: Kind, A2: Access>(&mut self, other: &Tuple<T, N, K2, A2>) -> &mut Self {
        self.update(|i, _| other.get(i))
    }

    /// Copies exactly `N` elements from `elems` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `elems` does not have `N` elements. `self` is left
    /// untouched in that case.
    pub fn set_from_slice(&mut self, elems: &[T]) -> Result<&mut Self> {
        if elems.len() != N {
            return Err(Error::DimensionMismatch {
                expected: N,
                actual: elems.len(),
            });
        }
        for (i, &value) in (0..N).zip_eq(elems) {
            self.storage.write(i, value);
        }
        Ok(self)
    }

    /// Element-wise `self += other`.
    pub fn add<K2: Kind, A2: Access>(&mut self, other: &Tuple<T, N, K2, A2>) -> &mut Self {
        self.update(|i, v| v + other.get(i))
    }

    /// Element-wise `self -= other`.
    pub fn sub<K2: Kind, A2: Access>(&mut self, other: &Tuple<T, N, K2, A2>) -> &mut Self {
        self.update(|i, v| v - other.get(i))
    }

    /// Element-wise `self *= other`.
    pub fn mul_elementwise<K2: Kind, A2: Access>(
        &mut self,
        other: &Tuple<T, N, K2, A2>,
    ) -> &mut Self {
        self.update(|i, v| v * other.get(i))
    }

    /// Element-wise `self /= other`.
    pub fn div_elementwise<K2: Kind, A2: Access>(
        &mut self,
        other: &Tuple<T, N, K2, A2>,
    ) -> &mut Self {
        self.update(|i, v| v / other.get(i))
    }

    /// Sets `self` to `a + b`.
    ///
    /// Either operand may alias `self`.
    pub fn set_sum<K1: Kind, A1: Access, K2: Kind, A2: Access>(
        &mut self,
        a: &Tuple<T, N, K1, A1>,
        b: &Tuple<T, N, K2, A2>,
    ) -> &mut Self {
        self.update(|i, _| a.get(i) + b.get(i))
    }

    /// Sets `self` to `a - b`.
    ///
    /// Either operand may alias `self`.
    pub fn set_difference<K1: Kind, A1: Access, K2: Kind, A2: Access>(
        &mut self,
        a: &Tuple<T, N, K1, A1>,
        b: &Tuple<T, N, K2, A2>,
    ) -> &mut Self {
        self.update(|i, _| a.get(i) - b.get(i))
    }

    /// Multiplies every element by `s`.
    pub fn scale(&mut self, s: T) -> &mut Self {
        self.update(|_, v| v * s)
    }

    /// Sets `self` to `s * self + t`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let mut p = point2(1.0, 2.0);
    /// p.scale_add(2.0, &vector2(0.5, -4.0));
    /// assert_eq!(p, point2(2.5, 0.0));
    /// ```
    pub fn scale_add<K2: Kind, A2: Access>(&mut self, s: T, t: &Tuple<T, N, K2, A2>) -> &mut Self {
        self.update(|i, v| s * v + t.get(i))
    }

    pub fn negate(&mut self) -> &mut Self {
        self.update(|_, v| -v)
    }

    /// Replaces every element with its absolute value.
    pub fn absolute(&mut self) -> &mut Self {
        self.update(|_, v| Abs::abs(v))
    }

    /// Clamps every element to the range `min..=max`.
    pub fn clamp(&mut self, min: T, max: T) -> &mut Self {
        self.update(|_, v| MinMax::clamp(v, min, max))
    }

    pub fn clamp_min(&mut self, min: T) -> &mut Self {
        self.update(|_, v| MinMax::max(v, min))
    }

    pub fn clamp_max(&mut self, max: T) -> &mut Self {
        self.update(|_, v| MinMax::min(v, max))
    }

    /// Moves `self` towards `t` by `alpha`: `self = (1 - alpha) * self + alpha * t`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let mut p = point2(0.0, 10.0);
    /// p.interpolate(&point2(10.0, 0.0), 0.25);
    /// assert_eq!(p, point2(2.5, 7.5));
    /// ```
    pub fn interpolate<K2: Kind, A2: Access>(
        &mut self,
        t: &Tuple<T, N, K2, A2>,
        alpha: T,
    ) -> &mut Self {
        self.update(|i, v| (T::ONE - alpha) * v + alpha * t.get(i))
    }

    /// Sets `self` to `(1 - alpha) * a + alpha * b`.
    pub fn interpolate_between<K1: Kind, A1: Access, K2: Kind, A2: Access>(
        &mut self,
        a: &Tuple<T, N, K1, A1>,
        b: &Tuple<T, N, K2, A2>,
        alpha: T,
    ) -> &mut Self {
        self.update(|i, _| (T::ONE - alpha) * a.get(i) + alpha * b.get(i))
    }

    /// Clears the dirty flag shared by `self` and all its views.
    pub fn mark_clean(&mut self) -> &mut Self {
        self.storage.mark_clean();
        self
    }
}

impl<T: Element, const N: usize, K: Kind> Clone for Tuple<T, N, K, Mutable> {
    /// Deep copy; see [`Tuple::to_mutable`].
    fn clone(&self) -> Self {
        self.to_mutable()
    }
}

impl<T: Element, const N: usize, K: Kind> Default for Tuple<T, N, K, Mutable> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element, const N: usize, K: Kind> From<[T; N]> for Tuple<T, N, K, Mutable> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self::new(elems)
    }
}

impl<T: Element, const N: usize, K: Kind, A: Access> From<&Tuple<T, N, K, A>> for [T; N] {
    #[inline]
    fn from(tuple: &Tuple<T, N, K, A>) -> Self {
        tuple.to_array()
    }
}

impl<T: Element, const N: usize, K: Kind, A: Access> fmt::Debug for Tuple<T, N, K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple(K::NAME);
        for elem in self.iter() {
            tup.field(&elem);
        }
        tup.finish()
    }
}

impl<T: Element, const N: usize, K: Kind, A: Access> fmt::Display for Tuple<T, N, K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(&elem, f)?;
        }
        f.write_str(")")
    }
}

/// Constructs a [`Tuple2`] from its two elements.
#[inline]
pub fn tuple2<T: Element>(x: T, y: T) -> Tuple2<T> {
    Tuple::new([x, y])
}

/// Constructs a [`Tuple3`] from its three elements.
#[inline]
pub fn tuple3<T: Element>(x: T, y: T, z: T) -> Tuple3<T> {
    Tuple::new([x, y, z])
}

/// Constructs a [`Tuple4`] from its four elements.
#[inline]
pub fn tuple4<T: Element>(x: T, y: T, z: T, w: T) -> Tuple4<T> {
    Tuple::new([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::{test::init_logger, *};

    #[test]
    fn views_alias_master() {
        init_logger();

        let mut m = tuple3(1.0, 2.0, 3.0);
        let view = m.as_read_only();
        assert!(view.shares_storage_with(&m));
        assert_eq!(view.to_array(), m.to_array());

        m.set(1, 20.0).add_value(2, 1.0).negate();
        assert_eq!(view.to_array(), [-1.0, -20.0, -4.0]);
        assert_eq!(view, m);
    }

    #[test]
    fn dirty_flag() {
        let mut m = tuple2(0, 0);
        let view = m.as_read_only();
        assert!(!m.is_dirty());
        assert!(!view.is_dirty());

        m.set(0, 1);
        assert!(m.is_dirty());
        assert!(view.is_dirty());
        assert!(m.read_only().is_dirty());

        m.mark_clean();
        assert!(!m.is_dirty());
        assert!(!view.is_dirty());

        // queries never touch the flag
        let _ = (m.get(0), m.to_array(), m == view, m.epsilon_equals(&view, 0));
        assert!(!view.is_dirty());
    }

    #[test]
    fn memoized_companion() {
        let m = tuple4(1.0f32, 2.0, 3.0, 4.0);
        let a = m.read_only();
        let b = m.read_only();
        assert!(std::ptr::eq(a, b));

        let c = m.as_read_only();
        let d = m.as_read_only();
        assert!(!std::ptr::eq(&c, &d));
        assert_eq!(c, d);
        assert_eq!(*a, c);
        assert!(a.shares_storage_with(&c));

        // a read-only tuple has a companion too
        let e = c.read_only();
        assert!(std::ptr::eq(e, c.read_only()));
        assert!(e.shares_storage_with(&m));
    }

    #[test]
    fn aliasing() {
        let t = tuple2(1, 2);
        assert!(!t.is_aliased());
        t.read_only();
        assert!(!t.is_aliased());

        let view = t.as_read_only();
        assert!(t.is_aliased());
        assert!(view.is_aliased());
        assert!(t.read_only().is_aliased());
        drop(view);
        assert!(!t.is_aliased());
        assert!(!t.clone().is_aliased());
    }

    #[test]
    fn copies_are_independent() {
        let mut t = tuple3(1, 2, 3);
        t.set(0, 1);
        let mut c = t.clone();
        assert!(!c.shares_storage_with(&t));
        assert!(c.is_dirty());

        c.mark_clean();
        assert!(t.is_dirty());

        c.set(2, 30);
        assert_eq!(t.to_array(), [1, 2, 3]);
        t.set(1, 20);
        assert_eq!(c.to_array(), [1, 2, 30]);
        assert!(!t.as_read_only().to_mutable().shares_storage_with(&t));
    }

    #[test]
    fn read_only_factory() {
        let made = Tuple3::new_read_only([1.0, 2.0, 3.0]);
        let converted = tuple3(1.0, 2.0, 3.0).as_read_only();
        assert_eq!(made, converted);
        assert!(made.is_read_only());
        assert_eq!(made.access_mode(), AccessMode::ReadOnly);
        assert!(!made.is_dirty());
    }

    #[test]
    fn arithmetic() {
        let mut t = tuple3(1.0, -2.0, 3.0);
        t.add(&tuple3(1.0, 1.0, 1.0))
            .sub(&point3(0.5, 0.5, 0.5))
            .mul_elementwise(&vector3(2.0, 2.0, 2.0))
            .div_elementwise(&tuple3(1.0, 1.0, 3.0));
        assert_eq!(t, tuple3(3.0, -3.0, 7.0 / 3.0));

        t.set_all([1.0, -2.0, 3.0]).absolute();
        assert_eq!(t, tuple3(1.0, 2.0, 3.0));
        t.clamp(1.5, 2.5);
        assert_eq!(t, tuple3(1.5, 2.0, 2.5));
        t.clamp_min(2.0);
        assert_eq!(t, tuple3(2.0, 2.0, 2.5));
        t.clamp_max(2.2);
        assert_eq!(t, tuple3(2.0, 2.0, 2.2));
        t.fill(4.0).mul_value(0, 2.0).div_value(1, 2.0).sub_value(2, 1.0);
        assert_eq!(t, tuple3(8.0, 2.0, 3.0));
        t.scale(0.5);
        assert_eq!(t, tuple3(4.0, 1.0, 1.5));
    }

    #[test]
    fn aliased_operands() {
        let mut t = tuple2(1, 2);
        let view = t.as_read_only();
        t.set_sum(&view, &view);
        assert_eq!(t.to_array(), [2, 4]);
        t.set_difference(&tuple2(10, 10), &view);
        assert_eq!(t.to_array(), [8, 6]);
        t.add(&t.as_read_only());
        assert_eq!(t.to_array(), [16, 12]);
    }

    #[test]
    fn interpolation() {
        let mut t = tuple2(0.0, 0.0);
        t.interpolate_between(&tuple2(2.0, 4.0), &tuple2(4.0, 8.0), 0.5);
        assert_eq!(t, tuple2(3.0, 6.0));
        t.interpolate(&tuple2(5.0, 6.0), 1.0);
        assert_eq!(t, tuple2(5.0, 6.0));
        t.interpolate(&tuple2(0.0, 0.0), 0.0);
        assert_eq!(t, tuple2(5.0, 6.0));
    }

    #[test]
    fn slices() {
        assert_eq!(
            Tuple3::<f64>::from_slice(&[1.0, 2.0]).unwrap_err(),
            Error::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );

        let mut t = Tuple3::from_slice(&[1, 2, 3]).unwrap();
        assert!(!t.is_dirty());
        assert!(t.set_from_slice(&[4, 5, 6, 7]).is_err());
        assert_eq!(t.to_array(), [1, 2, 3]);
        assert!(!t.is_dirty());

        t.set_from_slice(&[4, 5, 6]).unwrap();
        assert_eq!(t.to_array(), [4, 5, 6]);
        assert!(t.is_dirty());
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        tuple2(1.0, 2.0).set(2, 0.0);
    }

    #[test]
    fn exact_vs_epsilon() {
        let a = tuple3(1.0, 2.0, 3.0);
        let b = tuple3(1.0, 2.0, 3.125);
        assert_ne!(a, b);
        assert!(a.epsilon_equals(&b, 0.125));
        assert!(!a.epsilon_equals(&b, 0.0625));

        assert_ne!(tuple2(0.0, 0.0), tuple2(-0.0, 0.0));
        assert_eq!(tuple2(f32::NAN, 0.0), tuple2(f32::NAN, 0.0));
    }

    #[test]
    fn fmt() {
        let p = point3(1.0, 2.5, -3.0);
        assert_eq!(format!("{p}"), "(1, 2.5, -3)");
        assert_eq!(format!("{p:?}"), "Point(1.0, 2.5, -3.0)");
        assert_eq!(format!("{:?}", tuple2(1, 2).as_read_only()), "Tuple(1, 2)");
    }
}

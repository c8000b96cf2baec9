use std::{fmt, marker::PhantomData};

use crate::{
    access::{Access, AccessMode, Mutable, ReadOnly},
    kind::{self, Kind},
    storage::Storage,
    Element, Error, Result, Tuple,
};

/// A tuple handle whose access mode is only known at runtime.
///
/// [`Tuple`] decides at compile time whether writes are allowed. `DynTuple` carries the same
/// decision as an [`AccessMode`] value instead, so that mutable and read-only handles can be stored
/// in the same collection or passed through the same API. Every write goes through a `try_*`
/// method that checks the mode first and returns [`Error::IllegalMutation`] (without touching the
/// storage) when it is [`AccessMode::ReadOnly`].
///
/// # Examples
///
/// ```
/// # use linview::*;
/// # fn main() -> anyhow::Result<()> {
/// let p = point3(1.0, 2.0, 3.0);
/// let mut handles = vec![DynTuple::from(p.to_mutable()), DynTuple::from(p.as_read_only())];
///
/// handles[0].try_set(0, 10.0)?;
/// assert!(matches!(
///     handles[1].try_set(0, 10.0),
///     Err(Error::IllegalMutation { .. })
/// ));
/// assert_eq!(p.x(), 1.0);
/// # Ok(())
/// # }
/// ```
pub struct DynTuple<T, const N: usize, K = kind::Tuple> {
    storage: Storage<T>,
    mode: AccessMode,
    _kind: PhantomData<fn() -> K>,
}

impl<T: Element, const N: usize, K: Kind> DynTuple<T, N, K> {
    /// Creates a handle owning `elems`, with the given access `mode`.
    pub fn wrap(elems: [T; N], mode: AccessMode) -> Self {
        Self {
            storage: Storage::wrap(elems),
            mode,
            _kind: PhantomData,
        }
    }

    #[inline]
    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.mode.is_read_only()
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        assert!(index < N, "index {index} out of bounds for {N}-element tuple");
        self.storage.read(index)
    }

    pub fn to_array(&self) -> [T; N] {
        std::array::from_fn(|i| self.storage.read(i))
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.storage.is_dirty()
    }

    /// Creates a read-only handle aliasing the elements of `self`.
    pub fn as_read_only(&self) -> Self {
        Self {
            storage: self.storage.alias(),
            mode: AccessMode::ReadOnly,
            _kind: PhantomData,
        }
    }

    /// Returns a statically typed, read-only tuple aliasing the elements of `self`.
    pub fn to_tuple_view(&self) -> Tuple<T, N, K, ReadOnly> {
        Tuple::from_storage(self.storage.alias())
    }

    fn check(&self, operation: &'static str) -> Result<()> {
        if self.mode.is_read_only() {
            log::warn!("rejected `{operation}` on read-only {}{N}", K::NAME);
            return Err(Error::IllegalMutation { operation });
        }
        Ok(())
    }

    /// Sets the element at `index` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMutation`] if `self` is read-only.
    ///
    /// # Panics
    ///
    /// Panics if `self` is mutable and `index` is out of bounds.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<&mut Self> {
        self.check("set")?;
        assert!(index < N, "index {index} out of bounds for {N}-element tuple");
        self.storage.write(index, value);
        Ok(self)
    }

    /// Runs `f` with a statically mutable tuple aliasing `self`, and returns its result.
    ///
    /// This gives checked access to the whole mutating API of [`Tuple`] at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMutation`] if `self` is read-only; `f` is not called in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// # fn main() -> anyhow::Result<()> {
    /// let mut v = DynTuple::<f64, 3, kind::Vector>::wrap([3.0, 0.0, 4.0], AccessMode::Mutable);
    /// let len = v.try_mutate(|v| {
    ///     v.normalize();
    ///     v.length()
    /// })?;
    /// assert_approx_eq!(len, 1.0);
    /// assert_approx_eq!(v.to_array(), [0.6, 0.0, 0.8]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_mutate<F, R>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Tuple<T, N, K, Mutable>) -> R,
    {
        self.check("mutate")?;
        let mut tuple = Tuple::from_storage(self.storage.alias());
        Ok(f(&mut tuple))
    }

    /// Clears the dirty flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMutation`] if `self` is read-only.
    pub fn try_mark_clean(&mut self) -> Result<()> {
        self.check("mark clean")?;
        self.storage.mark_clean();
        Ok(())
    }

    /// Converts `self` back into a statically mutable [`Tuple`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMutation`] if `self` is read-only.
    pub fn into_mutable(self) -> Result<Tuple<T, N, K, Mutable>> {
        self.check("convert to mutable")?;
        Ok(Tuple::from_storage(self.storage))
    }
}

impl<T, const N: usize, K, A> From<Tuple<T, N, K, A>> for DynTuple<T, N, K>
where
    T: Element,
    K: Kind,
    A: Access,
{
    fn from(tuple: Tuple<T, N, K, A>) -> Self {
        Self {
            storage: tuple.into_storage(),
            mode: A::MODE,
            _kind: PhantomData,
        }
    }
}

impl<T: Element, const N: usize, K: Kind> fmt::Debug for DynTuple<T, N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = f.debug_tuple(K::NAME);
        for i in 0..N {
            t.field(&self.storage.read(i));
        }
        t.finish()?;
        write!(f, " ({})", self.mode)
    }
}

#[cfg(test)]
mod tests {
    use crate::{test::init_logger, *};

    #[test]
    fn mutable_handle() {
        let p = point2(1, 2);
        let view = p.as_read_only();
        let mut dynamic = DynTuple::from(p);
        assert_eq!(dynamic.mode(), AccessMode::Mutable);

        dynamic.try_set(1, 5).unwrap().try_set(0, 4).unwrap();
        assert_eq!(view, [4, 5]);
        assert!(view.is_dirty());

        dynamic.try_mark_clean().unwrap();
        assert!(!view.is_dirty());

        let doubled = dynamic.try_mutate(|p| p.scale(2).to_array()).unwrap();
        assert_eq!(doubled, [8, 10]);
        assert_eq!(view, [8, 10]);

        let p = dynamic.into_mutable().unwrap();
        assert!(p.shares_storage_with(&view));
    }

    #[test]
    fn rejected_writes_leave_storage_alone() {
        init_logger();

        let v = vector3(1.0, 2.0, 3.0);
        let mut dynamic = DynTuple::from(v.as_read_only());
        assert!(dynamic.is_read_only());

        assert_eq!(
            dynamic.try_set(0, 0.0).map(|_| ()),
            Err(Error::IllegalMutation { operation: "set" })
        );
        let mut called = false;
        assert!(dynamic.try_mutate(|_| called = true).is_err());
        assert!(!called);
        assert!(dynamic.try_mark_clean().is_err());
        assert_eq!(v, vector3(1.0, 2.0, 3.0));
        assert!(!v.is_dirty());

        // `as_read_only` on a mutable handle downgrades
        let mutable = DynTuple::<i32, 2>::wrap([1, 2], AccessMode::Mutable);
        let mut ro = mutable.as_read_only();
        assert!(ro.try_set(0, 0).is_err());
        assert!(ro.into_mutable().is_err());
        assert_eq!(mutable.to_array(), [1, 2]);
        assert_eq!(mutable.to_tuple_view(), tuple2(1, 2));
    }

    #[test]
    fn fmt() {
        let d = DynTuple::<f32, 2, kind::Point>::wrap([1.0, 2.0], AccessMode::ReadOnly);
        assert_eq!(format!("{d:?}"), "Point(1.0, 2.0) (read-only)");
    }
}

//! Shared backing storage.

use std::{cell::Cell, fmt, rc::Rc};

use crate::Zero;

/// A fixed-length element buffer plus a dirty flag, shared by a master handle and its views.
///
/// Cloning the handle (crate-internal [`Storage::alias`]) shares both the elements and the dirty
/// flag; [`Storage::deep_copy`] creates independent ones. Writes are only reachable from mutable
/// tuples and matrices, so the public surface of this type is read-only.
///
/// Storage is reference-counted and uses [`Cell`]s, which makes it (and every handle built on it)
/// `!Send` and `!Sync`: all aliases of a buffer live on the same thread.
pub struct Storage<T> {
    elems: Rc<[Cell<T>]>,
    dirty: Rc<Cell<bool>>,
}

impl<T: Copy> Storage<T> {
    /// Allocates a zero-filled, clean buffer of `len` elements.
    pub(crate) fn allocate(len: usize) -> Self
    where
        T: Zero,
    {
        Self::from_elems((0..len).map(|_| T::ZERO))
    }

    /// Moves `elems` into new storage.
    pub(crate) fn wrap<const N: usize>(elems: [T; N]) -> Self {
        Self::from_elems(elems)
    }

    pub(crate) fn from_elems(elems: impl IntoIterator<Item = T>) -> Self {
        Self {
            elems: elems.into_iter().map(Cell::new).collect(),
            dirty: Rc::new(Cell::new(false)),
        }
    }

    /// Returns a second handle to the same elements and dirty flag.
    #[inline]
    pub(crate) fn alias(&self) -> Self {
        Self {
            elems: self.elems.clone(),
            dirty: self.dirty.clone(),
        }
    }

    /// Copies the elements into a new buffer with a new dirty flag holding the current value.
    pub(crate) fn deep_copy(&self) -> Self {
        Self {
            elems: self.elems.iter().map(|c| Cell::new(c.get())).collect(),
            dirty: Rc::new(Cell::new(self.dirty.get())),
        }
    }

    /// Copies the elements at the given physical indices, in order, into a new densely packed
    /// buffer with a new dirty flag holding the current value.
    pub(crate) fn gather(&self, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            elems: indices
                .into_iter()
                .map(|i| Cell::new(self.elems[i].get()))
                .collect(),
            dirty: Rc::new(Cell::new(self.dirty.get())),
        }
    }

    /// Writes `value` at physical index `i` and marks the storage dirty.
    ///
    /// Panics if `i` is out of bounds, before anything is written.
    #[inline]
    pub(crate) fn write(&self, i: usize, value: T) {
        self.elems[i].set(value);
        self.dirty.set(true);
    }

    #[inline]
    pub(crate) fn mark_clean(&self) {
        self.dirty.set(false);
    }

    /// Reads the element at physical index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn read(&self, i: usize) -> T {
        self.elems[i].get()
    }

    /// Returns the number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns whether any handle wrote to this buffer since it was last marked clean.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Returns whether `self` and `other` refer to the same buffer.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.elems, &other.elems)
    }

    /// Iterates over all elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.elems.iter().map(Cell::get)
    }

    /// Returns the number of handles currently sharing this buffer.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.elems)
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("elems", &self.iter().collect::<Vec<_>>())
            .field("dirty", &self.is_dirty())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_shares_elements_and_flag() {
        let s = Storage::<f32>::allocate(3);
        let view = s.alias();
        assert!(s.ptr_eq(&view));
        assert_eq!(s.handle_count(), 2);
        assert!(!view.is_dirty());

        s.write(1, 4.0);
        assert_eq!(view.read(1), 4.0);
        assert!(view.is_dirty());

        s.mark_clean();
        assert!(!view.is_dirty());
    }

    #[test]
    fn deep_copy_duplicates_flag_value() {
        let s = Storage::wrap([1, 2, 3]);
        s.write(0, 7);

        let copy = s.deep_copy();
        assert!(!copy.ptr_eq(&s));
        assert!(copy.is_dirty());

        copy.mark_clean();
        assert!(s.is_dirty());
        copy.write(2, -1);
        assert_eq!(s.iter().collect::<Vec<_>>(), [7, 2, 3]);
        assert_eq!(copy.iter().collect::<Vec<_>>(), [7, 2, -1]);
    }

    #[test]
    fn gather() {
        let s = Storage::wrap([0.0, 1.0, 2.0, 3.0, 4.0]);
        let r = s.gather([1, 2, 4]);
        assert_eq!(r.len(), 3);
        assert!(!r.ptr_eq(&s));
        assert_eq!(r.iter().collect::<Vec<_>>(), [1.0, 2.0, 4.0]);
        assert!(!r.is_dirty());
    }

    #[test]
    #[should_panic]
    fn write_out_of_bounds() {
        let s = Storage::<f64>::allocate(2);
        s.write(2, 1.0);
    }
}

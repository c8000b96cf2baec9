//! Per-thread free-lists for recycling [`linview`] tuples and matrices.
//!
//! Code that creates many short-lived temporaries (an intersection test producing a scratch vector
//! per candidate, for example) can hand them back with [`to_pool`] and get them out again with
//! [`from_pool`] instead of allocating new storage every time. An instance whose storage is still
//! shared with a view or a region is dropped on release instead of being recycled.
//!
//! `linview` handles are `!Send`, so the pools are thread-confined: every thread has its own set of
//! free-lists, and an instance released on one thread can only be acquired again on that thread.
//!
//! # Configuration
//!
//! The `LINVIEW_POOL_CAPACITY` environment variable sets how many idle instances each per-thread
//! free-list keeps (default: 64). Instances released into a full free-list are dropped.

use std::{
    any::{Any, TypeId},
    cell::RefCell,
    collections::HashMap,
    env::{self, VarError},
};

use linview::{Element, Matrix, Mutable, Tuple};
use once_cell::sync::Lazy;

const DEFAULT_CAPACITY: usize = 64;

static CAPACITY: Lazy<usize> = Lazy::new(|| match env::var("LINVIEW_POOL_CAPACITY") {
    Ok(v) => match v.parse() {
        Ok(capacity) => capacity,
        Err(e) => {
            log::warn!(
                "invalid value set for `LINVIEW_POOL_CAPACITY` variable: '{v}' ({e}); \
                 using default of {DEFAULT_CAPACITY}"
            );
            DEFAULT_CAPACITY
        }
    },
    Err(VarError::NotPresent) => DEFAULT_CAPACITY,
    Err(VarError::NotUnicode(s)) => {
        log::warn!(
            "invalid value set for `LINVIEW_POOL_CAPACITY` variable: {}; \
             using default of {DEFAULT_CAPACITY}",
            s.to_string_lossy()
        );
        DEFAULT_CAPACITY
    }
});

/// Types that can be recycled through a [`Pool`].
pub trait Poolable: 'static {
    /// Creates a new instance, used when the pool is empty.
    fn fresh() -> Self;

    /// Brings a released instance back into the state [`Poolable::fresh`] would produce.
    fn reset(&mut self);

    /// Returns whether something outside of `self` still refers to its storage.
    ///
    /// Shared instances are never recycled, since resetting them would show up through their
    /// other handles.
    fn is_shared(&self) -> bool;
}

/// Pooled tuples come out zeroed and clean.
impl<T: Element, const N: usize, K: linview::kind::Kind> Poolable for Tuple<T, N, K, Mutable> {
    fn fresh() -> Self {
        Self::zero()
    }

    fn reset(&mut self) {
        self.fill(T::ZERO).mark_clean();
    }

    fn is_shared(&self) -> bool {
        self.is_aliased()
    }
}

/// Pooled matrices come out zeroed and clean.
impl<T: Element, const R: usize, const C: usize> Poolable for Matrix<T, R, C, Mutable> {
    fn fresh() -> Self {
        Self::zero()
    }

    fn reset(&mut self) {
        self.set_zero().mark_clean();
    }

    fn is_shared(&self) -> bool {
        self.is_aliased()
    }
}

/// A bounded free-list of idle `X` instances.
#[derive(Debug)]
pub struct Pool<X> {
    idle: Vec<X>,
    capacity: usize,
}

impl<X: Poolable> Pool<X> {
    /// Creates an empty pool that keeps at most `capacity` idle instances.
    pub fn new(capacity: usize) -> Self {
        Self {
            idle: Vec::new(),
            capacity,
        }
    }

    /// Takes an idle instance out of the pool, or creates a fresh one if there is none.
    pub fn acquire(&mut self) -> X {
        match self.idle.pop() {
            Some(x) => x,
            None => {
                log::trace!("pool of `{}` empty, creating instance", std::any::type_name::<X>());
                X::fresh()
            }
        }
    }

    /// Resets `x` and keeps it for a later [`Pool::acquire`].
    ///
    /// If the pool is full, or views of `x` are still alive, `x` is dropped instead.
    pub fn release(&mut self, mut x: X) {
        if x.is_shared() {
            log::trace!("`{}` instance still aliased, dropping it", std::any::type_name::<X>());
            return;
        }
        if self.idle.len() >= self.capacity {
            log::trace!("pool of `{}` full, dropping instance", std::any::type_name::<X>());
            return;
        }
        x.reset();
        self.idle.push(x);
    }

    /// Returns the number of idle instances.
    pub fn len(&self) -> usize {
        self.idle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idle.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<X: Poolable> Default for Pool<X> {
    /// Creates a pool with the capacity configured by `LINVIEW_POOL_CAPACITY`.
    fn default() -> Self {
        Self::new(*CAPACITY)
    }
}

thread_local! {
    static POOLS: RefCell<HashMap<TypeId, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

fn with_pool<X: Poolable, R>(f: impl FnOnce(&mut Pool<X>) -> R) -> R {
    POOLS.with(|pools| {
        let mut pools = pools.borrow_mut();
        let pool = pools
            .entry(TypeId::of::<X>())
            .or_insert_with(|| Box::new(Pool::<X>::default()));
        match pool.downcast_mut::<Pool<X>>() {
            Some(pool) => f(pool),
            // Entries are keyed by their own `TypeId`, so this is never hit.
            None => f(&mut Pool::default()),
        }
    })
}

/// Takes an instance out of the calling thread's pool for `X`.
///
/// # Examples
///
/// ```
/// use linview::*;
/// use linview_pool::{from_pool, to_pool};
///
/// let mut v: Vector3<f32> = from_pool();
/// v.set_x(1.0);
/// to_pool(v);
///
/// // released instances are reset
/// let v: Vector3<f32> = from_pool();
/// assert_eq!(v, vector3(0.0, 0.0, 0.0));
/// assert!(!v.is_dirty());
/// ```
pub fn from_pool<X: Poolable>() -> X {
    with_pool(Pool::acquire)
}

/// Releases `x` into the calling thread's pool for `X`.
pub fn to_pool<X: Poolable>(x: X) {
    with_pool(|pool| pool.release(x))
}

/// Returns the number of idle `X` instances in the calling thread's pool.
pub fn pooled<X: Poolable>() -> usize {
    with_pool(|pool: &mut Pool<X>| pool.len())
}

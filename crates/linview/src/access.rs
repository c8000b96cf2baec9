//! Access markers deciding whether a handle may write to its storage.
//!
//! Every tuple and matrix carries an access parameter `A` that is fixed when the handle is created.
//! Mutating methods are only implemented for `A = `[`Mutable`], so an attempt to write through a
//! [`ReadOnly`] handle is rejected by the compiler:
//!
//! ```compile_fail
//! # use linview::*;
//! let p = point3(1.0, 2.0, 3.0);
//! let mut view = p.as_read_only();
//! view.set(0, 5.0); // no `set` method on read-only tuples
//! ```
//!
//! ```compile_fail
//! # use linview::*;
//! let mut view = Point3::new_read_only([1.0, 2.0, 3.0]);
//! view += &vector3(1.0, 1.0, 1.0); // `AddAssign` is only implemented for mutable tuples
//! ```
//!
//! Clearing the dirty flag is a write as well:
//!
//! ```compile_fail
//! # use linview::*;
//! let mut p = point3(1.0, 2.0, 3.0);
//! p.set_x(0.0);
//! let mut view = p.as_read_only();
//! view.mark_clean();
//! ```
//!
//! The same holds for matrices, rays and decoding from a buffer:
//!
//! ```compile_fail
//! # use linview::*;
//! let mut m = Mat2::<f64>::new_read_only([[1.0, 0.0], [0.0, 1.0]]);
//! m.set(0, 0, 2.0);
//! ```
//!
//! ```compile_fail
//! # use linview::*;
//! let m = Mat2d::identity();
//! let mut view = m.as_read_only();
//! view.load(&[0.0; 4], Order::RowMajor);
//! ```
//!
//! ```compile_fail
//! # use linview::*;
//! let mut ray = Ray::new_read_only([0.0; 3], [0.0, 0.0, 1.0]);
//! ray.set_origin(&point3(1.0, 0.0, 0.0));
//! ```
//!
//! ```compile_fail
//! # use linview::*;
//! let mut view = Vector2::<f32>::new_read_only([0.0, 0.0]);
//! view.deserialize(0, &[0; 9]);
//! ```
//!
//! Each of these compiles once the handle is mutable:
//!
//! ```
//! # use linview::*;
//! let mut p = point3(1.0, 2.0, 3.0);
//! p.set(0, 5.0).mark_clean();
//!
//! let mut m = Mat2d::identity();
//! m.set(0, 0, 2.0);
//! m.load(&[0.0; 4], Order::RowMajor).unwrap();
//!
//! let mut ray = Ray::new(point3(0.0, 0.0, 0.0), vector3(0.0, 0.0, 1.0));
//! ray.set_origin(&point3(1.0, 0.0, 0.0));
//!
//! let mut v = Vector2::<f32>::zero();
//! v.deserialize(0, &[0; 9]).unwrap();
//! ```
//!
//! [`DynTuple`][crate::DynTuple] moves the same decision to runtime, for code that needs to hold
//! either kind of handle in one place.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Type-level access discriminator. Implemented by [`Mutable`] and [`ReadOnly`] only.
pub trait Access: sealed::Sealed + 'static {
    /// The runtime equivalent of this marker.
    const MODE: AccessMode;
}

/// Marks a handle that owns (or was explicitly given) write access to its storage.
#[derive(Debug)]
pub enum Mutable {}

/// Marks a handle that may only read the storage it aliases.
#[derive(Debug)]
pub enum ReadOnly {}

impl sealed::Sealed for Mutable {}
impl sealed::Sealed for ReadOnly {}

impl Access for Mutable {
    const MODE: AccessMode = AccessMode::Mutable;
}

impl Access for ReadOnly {
    const MODE: AccessMode = AccessMode::ReadOnly;
}

/// Runtime form of the access discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    Mutable,
    ReadOnly,
}

impl AccessMode {
    #[inline]
    pub fn is_read_only(self) -> bool {
        self == AccessMode::ReadOnly
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessMode::Mutable => "mutable",
            AccessMode::ReadOnly => "read-only",
        })
    }
}

//! Small fixed-size linear algebra types with aliasing read-only views.
//!
//! # Motivation
//!
//! Geometry code often hands the same point or matrix to many consumers: a scene graph owns a
//! transform, a renderer reads it every frame, a physics step writes it. Copying the value for each
//! reader wastes work and goes stale; sharing it mutably makes it impossible to tell who is allowed
//! to write.
//!
//! This library stores every tuple and matrix in shared [`Storage`] and hands out two kinds of
//! handles to it:
//!
//! - The *master* (a [`Mutable`] handle) may write. Every write sets a *dirty flag* shared by all
//!   handles, so readers can cheaply tell whether anything changed since the owner last called
//!   `mark_clean`.
//! - *Read-only views* ([`ReadOnly`] handles, created by `as_read_only` or the memoized
//!   `read_only`) alias the same elements and always observe the master's current values, but the
//!   compiler rejects any attempt to write through them.
//!
//! [`DynTuple`] moves the access check to runtime for code that needs it.
//!
//! # Goals & Non-Goals
//!
//! - Use const generics for all dimensions. Mixing dimensions is a type error, not a runtime one.
//! - Support [`f32`], [`f64`] and [`i32`] elements. Operations that need square roots or
//!   trigonometry are only offered for the float types.
//! - Keep handles single-threaded. Storage is reference-counted with `Rc` and `Cell`; values that
//!   need to cross threads are copied out with `to_array` / `to_rows`. Per-thread object pools live
//!   in the separate `linview-pool` crate.
//! - `==` is exact (bit-for-bit, consistent with [`Hash`]). Tolerance-based comparison goes through
//!   the [`approx`] module or the `epsilon_equals` methods.
//!
//! # Example
//!
//! ```
//! # use linview::*;
//! let mut position = point3(0.0, 0.0, 0.0);
//! let view = position.as_read_only();
//!
//! position.translate(&vector3(3.0, 4.0, 0.0));
//! assert_eq!(view.distance_to_origin(), 5.0);
//! assert!(view.is_dirty());
//!
//! position.mark_clean();
//! assert!(!view.is_dirty());
//! ```

pub mod approx;
mod access;
mod axis_angle;
mod codec;
mod dyn_tuple;
mod error;
pub mod kind;
mod matrix;
mod point;
mod quat;
mod ray;
mod storage;
#[cfg(test)]
mod test;
mod traits;
mod tuple;
mod vector;

pub use access::*;
pub use axis_angle::*;
pub use codec::Encode;
pub use dyn_tuple::DynTuple;
pub use error::{Error, Result};
pub use matrix::*;
pub use point::*;
pub use quat::*;
pub use ray::*;
pub use storage::Storage;
pub use traits::*;
pub use tuple::*;
pub use vector::*;

/// The default floating-point element type: [`f64`], or [`f32`] with the `single-precision`
/// feature.
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;
/// The default floating-point element type: [`f64`], or [`f32`] with the `single-precision`
/// feature.
#[cfg(feature = "single-precision")]
pub type Real = f32;

/// A 3-dimensional point with [`Real`] elements.
pub type Point3r = Point3<Real>;
/// A 3-dimensional vector with [`Real`] elements.
pub type Vector3r = Vector3<Real>;
/// A quaternion with [`Real`] elements.
pub type Quatr = Quat<Real>;
/// A ray with [`Real`] elements.
pub type Rayr = Ray<Real>;
/// A 4x4 matrix with [`Real`] elements.
pub type Mat4r = Mat4<Real>;

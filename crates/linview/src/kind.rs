//! Domain markers for [`Tuple`][crate::Tuple].
//!
//! A tuple's kind decides which domain operations it offers (points measure distances, vectors have
//! a length, quaternions compose rotations). It does not affect storage or access rules.

/// Marker types usable as the `K` parameter of [`Tuple`][crate::Tuple].
pub trait Kind: 'static {
    /// Name used in `Debug` output.
    const NAME: &'static str;
}

macro_rules! kinds {
    ($($(#[$attr:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug)]
            pub enum $name {}

            impl Kind for $name {
                const NAME: &'static str = stringify!($name);
            }
        )+
    };
}

kinds! {
    /// A plain tuple of values without geometric meaning.
    Tuple,
    /// A position in space.
    Point,
    /// A direction and magnitude.
    Vector,
    /// A quaternion, stored as `(x, y, z, w)`.
    Quat,
    /// A rotation of `angle` radians around the axis `(x, y, z)`.
    AxisAngle,
}

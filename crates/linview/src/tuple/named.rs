//! Named element accessors for tuples with up to 4 elements.

use crate::{
    access::{Access, Mutable},
    kind::Kind,
    Element, Tuple,
};

/// Types with an `x` element.
pub trait HasX<T> {
    fn x(&self) -> T;
}

/// Types with `x` and `y` elements.
pub trait HasXY<T>: HasX<T> {
    fn y(&self) -> T;
}

/// Types with `x`, `y` and `z` elements.
pub trait HasXYZ<T>: HasXY<T> {
    fn z(&self) -> T;
}

/// Types with `x`, `y`, `z` and `w` elements.
pub trait HasXYZW<T>: HasXYZ<T> {
    fn w(&self) -> T;
}

macro_rules! named {
    ($n:literal: $($tr:ident :: $get:ident, $set:ident = $index:literal;)+) => {
        $(
            impl<T: Element, K: Kind, A: Access> $tr<T> for Tuple<T, $n, K, A> {
                #[inline]
                fn $get(&self) -> T {
                    self.get($index)
                }
            }
        )+

        impl<T: Element, K: Kind> Tuple<T, $n, K, Mutable> {
            $(
                #[doc = concat!("Sets the `", stringify!($get), "` element.")]
                #[inline]
                pub fn $set(&mut self, value: T) -> &mut Self {
                    self.set($index, value)
                }
            )+
        }
    };
}

named! { 1:
    HasX::x, set_x = 0;
}

named! { 2:
    HasX::x, set_x = 0;
    HasXY::y, set_y = 1;
}

named! { 3:
    HasX::x, set_x = 0;
    HasXY::y, set_y = 1;
    HasXYZ::z, set_z = 2;
}

named! { 4:
    HasX::x, set_x = 0;
    HasXY::y, set_y = 1;
    HasXYZ::z, set_z = 2;
    HasXYZW::w, set_w = 3;
}

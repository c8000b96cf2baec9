//! Fixed-layout binary encoding of tuples and matrices.
//!
//! A value is encoded as its elements in index order (matrices: row by row), each little-endian at
//! the fixed [`Encode::WIDTH`] of its element type, followed by a single byte holding the dirty
//! flag (`0` or `1`). Views and sub-matrices encode their logical elements, not the storage around
//! them.

use byteorder::{ByteOrder, LittleEndian};

use crate::{
    access::{Access, Mutable},
    kind::Kind,
    Element, Error, Matrix, Result, Tuple,
};

/// Element types with a fixed-width little-endian encoding.
pub trait Encode: Element {
    /// Number of bytes one element occupies.
    const WIDTH: usize;

    /// Writes `self` into the first [`Self::WIDTH`] bytes of `buf`.
    fn encode(self, buf: &mut [u8]);

    /// Reads a value from the first [`Self::WIDTH`] bytes of `buf`.
    fn decode(buf: &[u8]) -> Self;
}

macro_rules! encode {
    ($($ty:ty: $width:literal, $write:ident, $read:ident;)+) => {
        $(
            impl Encode for $ty {
                const WIDTH: usize = $width;

                #[inline]
                fn encode(self, buf: &mut [u8]) {
                    LittleEndian::$write(buf, self);
                }

                #[inline]
                fn decode(buf: &[u8]) -> Self {
                    LittleEndian::$read(buf)
                }
            }
        )+
    };
}

encode! {
    f32: 4, write_f32, read_f32;
    f64: 8, write_f64, read_f64;
    i32: 4, write_i32, read_i32;
}

fn check_len(pos: usize, needed: usize, len: usize) -> Result<()> {
    let available = len.saturating_sub(pos);
    if available < needed {
        return Err(Error::BufferTooShort { needed, available });
    }
    Ok(())
}

fn encode_all<T: Encode>(
    elems: impl Iterator<Item = T>,
    dirty: bool,
    pos: usize,
    buf: &mut [u8],
) -> usize {
    let mut pos = pos;
    for elem in elems {
        elem.encode(&mut buf[pos..pos + T::WIDTH]);
        pos += T::WIDTH;
    }
    buf[pos] = u8::from(dirty);
    pos + 1
}

fn decode_flag(byte: u8) -> bool {
    byte != 0
}

impl<T: Encode, const N: usize, K: Kind, A: Access> Tuple<T, N, K, A> {
    /// Returns the number of bytes [`Tuple::serialize`] writes.
    pub const fn encoded_len(&self) -> usize {
        N * T::WIDTH + 1
    }

    /// Encodes `self` into `buf`, starting at byte `pos`, and returns the position after the
    /// written data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooShort`] if fewer than [`Tuple::encoded_len`] bytes are available
    /// at `pos`. Nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// # fn main() -> anyhow::Result<()> {
    /// let mut buf = [0; 9];
    /// let end = tuple2(1i32, -1).serialize(0, &mut buf)?;
    /// assert_eq!(end, 9);
    /// assert_eq!(buf, [1, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, 0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn serialize(&self, pos: usize, buf: &mut [u8]) -> Result<usize> {
        check_len(pos, self.encoded_len(), buf.len())?;
        Ok(encode_all(self.iter(), self.is_dirty(), pos, buf))
    }
}

impl<T: Encode, const N: usize, K: Kind> Tuple<T, N, K, Mutable> {
    /// Decodes the elements and dirty flag of `self` from `buf`, starting at byte `pos`, and
    /// returns the position after the consumed data.
    ///
    /// The dirty flag is shared with all views of `self`, so restoring it affects them too.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooShort`] if fewer than [`Tuple::encoded_len`] bytes are available
    /// at `pos`. `self` is left untouched in that case.
    pub fn deserialize(&mut self, pos: usize, buf: &[u8]) -> Result<usize> {
        check_len(pos, self.encoded_len(), buf.len())?;
        let data = &buf[pos..];
        self.update(|i, _| T::decode(&data[i * T::WIDTH..]));
        if !decode_flag(data[N * T::WIDTH]) {
            self.mark_clean();
        }
        Ok(pos + self.encoded_len())
    }
}

impl<T: Encode, const R: usize, const C: usize, A: Access> Matrix<T, R, C, A> {
    /// Returns the number of bytes [`Matrix::serialize`] writes.
    pub const fn encoded_len(&self) -> usize {
        R * C * T::WIDTH + 1
    }

    /// Encodes `self` into `buf` (row by row), starting at byte `pos`, and returns the position
    /// after the written data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooShort`] if fewer than [`Matrix::encoded_len`] bytes are available
    /// at `pos`.
    pub fn serialize(&self, pos: usize, buf: &mut [u8]) -> Result<usize> {
        check_len(pos, self.encoded_len(), buf.len())?;
        Ok(encode_all(self.iter(), self.is_dirty(), pos, buf))
    }
}

impl<T: Encode, const R: usize, const C: usize> Matrix<T, R, C, Mutable> {
    /// Decodes the elements and dirty flag of `self` from `buf`, starting at byte `pos`, and
    /// returns the position after the consumed data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooShort`] if fewer than [`Matrix::encoded_len`] bytes are available
    /// at `pos`. `self` is left untouched in that case.
    pub fn deserialize(&mut self, pos: usize, buf: &[u8]) -> Result<usize> {
        check_len(pos, self.encoded_len(), buf.len())?;
        let data = &buf[pos..];
        for row in 0..R {
            for col in 0..C {
                let at = (row * C + col) * T::WIDTH;
                self.set(row, col, T::decode(&data[at..]));
            }
        }
        if !decode_flag(data[R * C * T::WIDTH]) {
            self.mark_clean();
        }
        Ok(pos + self.encoded_len())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn layout() {
        let mut p = point3(1.5f32, -2.0, 0.0);
        p.set_z(0.25);
        let mut buf = vec![0xAA; 2 + p.encoded_len()];
        let end = p.serialize(2, &mut buf).unwrap();
        assert_eq!(end, 15);
        assert_eq!(&buf[..2], [0xAA, 0xAA]);
        assert_eq!(&buf[2..6], 1.5f32.to_le_bytes());
        assert_eq!(&buf[6..10], (-2.0f32).to_le_bytes());
        assert_eq!(&buf[10..14], 0.25f32.to_le_bytes());
        assert_eq!(buf[14], 1);

        assert_eq!(vector2(0.0f64, 0.0).encoded_len(), 17);
        assert_eq!(Mat3::<i32>::zero().encoded_len(), 37);
    }

    #[test]
    fn tuple_round_trip() {
        let source = quat(0.5, -0.5, 0.25, 1.0);
        let mut buf = [0; 64];
        let end = source.as_read_only().serialize(0, &mut buf).unwrap();

        let mut decoded = Quatd::identity();
        let view = decoded.as_read_only();
        decoded.set_x(9.0);
        assert_eq!(decoded.deserialize(0, &buf).unwrap(), end);
        assert_eq!(decoded, source);
        // `source` was never written, so the restored flag is clean
        assert!(!view.is_dirty());

        let mut dirty = tuple2(3, 4);
        dirty.set(0, 1);
        let end = dirty.serialize(3, &mut buf).unwrap();
        let mut decoded = tuple2(0, 0);
        assert_eq!(decoded.deserialize(3, &buf).unwrap(), end);
        assert_eq!(decoded, [1, 4]);
        assert!(decoded.is_dirty());
    }

    #[test]
    fn matrix_round_trip() {
        let big = Mat4f::from_fn(|row, col| (row * 4 + col) as f32);
        let sub = big.sub_matrix::<2, 2>(1, 2);
        let mut buf = [0; 17];
        sub.serialize(0, &mut buf).unwrap();
        assert_eq!(&buf[..4], 6.0f32.to_le_bytes());

        let mut decoded = Mat2f::identity();
        decoded.deserialize(0, &buf).unwrap();
        assert_eq!(decoded.to_rows(), [[6.0, 7.0], [10.0, 11.0]]);
        assert!(!decoded.is_dirty());

        // decoding into a sub-matrix writes through to the parent
        let mut target = Mat4f::zero();
        let mut window = target.sub_matrix_mut::<2, 2>(0, 0);
        window.deserialize(0, &buf).unwrap();
        assert_eq!(target.row(1), vector4(10.0, 11.0, 0.0, 0.0));
    }

    #[test]
    fn short_buffers() {
        let mut buf = [0; 8];
        assert_eq!(
            vector2(1.0f32, 2.0).serialize(1, &mut buf),
            Err(Error::BufferTooShort {
                needed: 9,
                available: 7
            })
        );
        assert_eq!(
            Mat2d::zero().serialize(10, &mut buf),
            Err(Error::BufferTooShort {
                needed: 33,
                available: 0
            })
        );

        let mut t = tuple2(1, 2);
        assert!(t.deserialize(0, &buf).is_err());
        assert_eq!(t, [1, 2]);
        assert!(!t.is_dirty());
    }
}

use std::{array, fmt, marker::PhantomData};

use once_cell::unsync::OnceCell;

use crate::{
    access::{Access, AccessMode, Mutable, ReadOnly},
    kind::Kind,
    storage::Storage,
    Element, Error, Float, Result, Tuple, Vector,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T, A = Mutable> = Matrix<T, 2, 2, A>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T, A = Mutable> = Matrix<T, 3, 3, A>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T, A = Mutable> = Matrix<T, 4, 4, A>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// Element order of a flat buffer exchanged with [`Matrix::store`] and [`Matrix::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Rows are laid out one after the other.
    RowMajor,
    /// Columns are laid out one after the other (the layout OpenGL-style APIs expect).
    ColumnMajor,
}

/// A matrix with `R` rows and `C` columns, and element type `T`, in shared [`Storage`].
///
/// Element `(row, col)` lives at physical index `offset + row * row_stride + col` of the storage.
/// Matrices created by the constructors are densely packed (`offset` 0, `row_stride` `C`);
/// [`Matrix::sub_matrix`] and [`Matrix::from_strided`] create matrices whose rows are further
/// apart. All operations respect the stride.
///
/// Like [`Tuple`], a matrix carries an [`Access`] parameter `A` and only [`Mutable`] matrices can be
/// written to.
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills a matrix with raw elements.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::zero`] and [`Matrix::identity`] create the usual special matrices.
/// - [`Matrix::from_strided`] wraps a larger buffer.
/// - [`Matrix::new_read_only`] creates a matrix that is read-only from birth.
///
/// # Element Access
///
/// [`Matrix::get`] and [`Matrix::set`] take the *row* first and the *column* second, matching
/// common mathematical notation. Indices are 0-based.
///
/// ```
/// # use linview::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
/// ]);
/// mat.set(0, 0, 4);
/// assert_eq!(mat.get(0, 0), 4);
/// assert_eq!(mat.get(0, 1), 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices.
pub struct Matrix<T, const R: usize, const C: usize, A = Mutable> {
    storage: Storage<T>,
    offset: usize,
    row_stride: usize,
    companion: OnceCell<Box<Matrix<T, R, C, ReadOnly>>>,
    _access: PhantomData<fn() -> A>,
}

impl<T: Element, const R: usize, const C: usize, A: Access> Matrix<T, R, C, A> {
    fn from_parts(storage: Storage<T>, offset: usize, row_stride: usize) -> Self {
        Self {
            storage,
            offset,
            row_stride,
            companion: OnceCell::new(),
            _access: PhantomData,
        }
    }

    fn dense(storage: Storage<T>) -> Self {
        Self::from_parts(storage, 0, C)
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < R && col < C,
            "index ({row}, {col}) out of bounds for {R}x{C} matrix"
        );
        self.offset + row * self.row_stride + col
    }

    /// Physical indices of all elements, in row-major order.
    fn physical_indices(&self) -> impl Iterator<Item = usize> {
        let (offset, stride) = (self.offset, self.row_stride);
        (0..R).flat_map(move |row| {
            let start = offset + row * stride;
            start..start + C
        })
    }

    /// Returns the element at `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.storage.read(self.index_of(row, col))
    }

    /// Iterates over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.physical_indices().map(|i| self.storage.read(i))
    }

    /// Returns a copy of row `row`.
    pub fn row(&self, row: usize) -> Vector<T, C> {
        Vector::from_fn(|col| self.get(row, col))
    }

    /// Returns a copy of column `col`.
    pub fn column(&self, col: usize) -> Vector<T, R> {
        Vector::from_fn(|row| self.get(row, col))
    }

    /// Copies the elements into an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let rows = [[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(Matrix::from_rows(rows).to_rows(), rows);
    /// ```
    pub fn to_rows(&self) -> [[T; C]; R] {
        array::from_fn(|row| array::from_fn(|col| self.get(row, col)))
    }

    /// Returns the physical index of element `(0, 0)`.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the distance between the physical indices of two vertically adjacent elements.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Returns whether the rows of this matrix are stored back to back, without gaps.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.row_stride == C || R <= 1
    }

    #[inline]
    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

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
    pub fn shares_storage_with<const R2: usize, const C2: usize, A2: Access>(
        &self,
        other: &Matrix<T, R2, C2, A2>,
    ) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    /// Returns whether another handle, such as a view, shares storage with `self`.
    ///
    /// The companion returned by [`Matrix::read_only`] belongs to `self` and is not counted.
    pub fn is_aliased(&self) -> bool {
        let own = 1 + usize::from(self.companion.get().is_some());
        self.storage.handle_count() > own
    }

    /// Returns whether every element of `self` is within `epsilon` of the corresponding element of
    /// `other` (inclusive).
    pub fn epsilon_equals<A2: Access>(&self, other: &Matrix<T, R, C, A2>, epsilon: T) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }

    /// Creates a new read-only handle to the elements of `self`.
    pub fn as_read_only(&self) -> Matrix<T, R, C, ReadOnly> {
        Matrix::from_parts(self.storage.alias(), self.offset, self.row_stride)
    }

    /// Returns the read-only companion of `self`, creating it on first use.
    pub fn read_only(&self) -> &Matrix<T, R, C, ReadOnly> {
        self.companion.get_or_init(|| Box::new(self.as_read_only()))
    }

    /// Creates an independent, densely packed mutable copy of `self`.
    ///
    /// The copy has its own dirty flag, initialized to the current state of `self`.
    pub fn to_mutable(&self) -> Matrix<T, R, C, Mutable> {
        Matrix::dense(self.storage.gather(self.physical_indices()))
    }

    /// Returns a read-only `R2`x`C2` view of the region of `self` starting at `row` and `col`.
    ///
    /// The view shares storage and dirty flag with `self`. Use [`Matrix::sub_matrix_mut`] on a
    /// mutable matrix to write to a region.
    ///
    /// # Panics
    ///
    /// Panics if the region does not fit into `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let mut m = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// let sub = m.sub_matrix::<2, 2>(1, 1);
    /// assert_eq!(sub.to_rows(), [[5, 6], [8, 9]]);
    ///
    /// m.set(2, 2, 0);
    /// assert_eq!(sub.to_rows(), [[5, 6], [8, 0]]);
    /// ```
    ///
    /// A shared borrow only ever hands out read-only regions:
    ///
    /// ```compile_fail
    /// # use linview::*;
    /// fn reads(m: &Mat2<f64>) {
    ///     m.sub_matrix::<2, 2>(0, 0).set(0, 0, 42.0);
    /// }
    /// ```
    pub fn sub_matrix<const R2: usize, const C2: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Matrix<T, R2, C2, ReadOnly> {
        let offset = self.region_offset::<R2, C2>(row, col);
        Matrix::from_parts(self.storage.alias(), offset, self.row_stride)
    }

    fn region_offset<const R2: usize, const C2: usize>(&self, row: usize, col: usize) -> usize {
        assert!(
            row + R2 <= R && col + C2 <= C,
            "{R2}x{C2} sub-matrix at ({row}, {col}) does not fit into {R}x{C} matrix"
        );
        self.offset + row * self.row_stride + col
    }

    /// Copies the elements into `buf` in the given `order`.
    ///
    /// Only the first `R * C` elements of `buf` are written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `buf` has fewer than `R * C` elements.
    pub fn store(&self, buf: &mut [T], order: Order) -> Result<()> {
        check_buffer::<R, C>(buf.len())?;
        match order {
            Order::RowMajor if self.is_contiguous() => {
                let start = self.offset;
                for (i, dst) in buf[..R * C].iter_mut().enumerate() {
                    *dst = self.storage.read(start + i);
                }
            }
            Order::RowMajor => {
                for (dst, elem) in buf.iter_mut().zip(self.iter()) {
                    *dst = elem;
                }
            }
            Order::ColumnMajor => {
                for col in 0..C {
                    for row in 0..R {
                        buf[col * R + row] = self.get(row, col);
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns a transposed copy of `self`.
    pub fn transposed(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|row, col| self.get(col, row))
    }

    /// Multiplies `self` with the column tuple `v`, returning a new tuple of the same kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let swap = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [1.0, 0.0],
    /// ]);
    /// assert_eq!(swap.transform(&vector2(3.0, 4.0)), vector2(4.0, 3.0));
    /// ```
    pub fn transform<K: Kind, A2: Access>(&self, v: &Tuple<T, C, K, A2>) -> Tuple<T, R, K> {
        Tuple::from_fn(|row| {
            (0..C).fold(T::ZERO, |acc, col| acc + self.get(row, col) * v.get(col))
        })
    }
}

impl<T: Element, const N: usize, A: Access> Matrix<T, N, N, A> {
    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// assert_eq!(Mat3::<f32>::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self.get(i, i))
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// Matrices up to 4x4 use closed forms evaluated on the stack. Larger ones fall back to cofactor
    /// expansion along the first row, which allocates and gets expensive quickly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let m = Matrix::from_rows([
    ///     [2, 0, 1],
    ///     [1, 3, 2],
    ///     [1, 1, 2],
    /// ]);
    /// assert_eq!(m.determinant(), 6);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        if N <= 4 {
            block_determinant(&self.block(), N)
        } else {
            let elems: Vec<T> = self.iter().collect();
            laplace_determinant(&elems, N)
        }
    }

    /// Copies the elements into the top left corner of a row-major 4x4 block.
    ///
    /// Only valid for `N <= 4`.
    fn block(&self) -> [T; 16] {
        let mut block = [T::ZERO; 16];
        for row in 0..N {
            for col in 0..N {
                block[row * 4 + col] = self.get(row, col);
            }
        }
        block
    }
}

impl<T: Float, const N: usize, A: Access> Matrix<T, N, N, A> {
    /// Returns the inverse of `self` as a new matrix.
    ///
    /// See [`Matrix::invert`] for the singular case.
    pub fn inverse(&self) -> Matrix<T, N, N> {
        let mut m = self.to_mutable();
        m.invert();
        m
    }
}

/// Constructors.
impl<T: Element, const R: usize, const C: usize> Matrix<T, R, C, Mutable> {
    /// Creates a matrix with every element set to 0.
    pub fn zero() -> Self {
        Self::dense(Storage::allocate(R * C))
    }

    /// Creates a matrix with 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Creates a matrix from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let m = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(m.get(1, 0), 2);
    /// assert_eq!(m.column(1), vector2(1, 3));
    /// ```
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self::dense(Storage::from_elems(rows.into_iter().flatten()))
    }

    /// Creates a matrix by invoking a closure with the position of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let m = Matrix::from_fn(|row, col| (row * 10 + col) as i32);
    /// assert_eq!(m.to_rows(), [[0, 1], [10, 11]]);
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let elems = (0..R).flat_map(|row| (0..C).map(move |col| (row, col)));
        Self::dense(Storage::from_elems(elems.map(|(row, col)| cb(row, col))))
    }

    /// Creates a matrix that is read-only from the start.
    pub fn new_read_only(rows: [[T; C]; R]) -> Matrix<T, R, C, ReadOnly> {
        Matrix::dense(Storage::from_elems(rows.into_iter().flatten()))
    }

    /// Creates a matrix over `elems`, with element `(0, 0)` at `offset` and `row_stride` elements
    /// between the starts of adjacent rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `row_stride` is smaller than `C` (rows would overlap)
    /// or if `elems` is too short to hold all `R` rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// # fn main() -> Result<()> {
    /// // a 2x2 matrix embedded in a 3-wide buffer, skipping the first column
    /// let m = Mat2::from_strided(vec![9, 1, 2, 9, 3, 4], 1, 3)?;
    /// assert_eq!(m.to_rows(), [[1, 2], [3, 4]]);
    /// assert!(!m.is_contiguous());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_strided(elems: Vec<T>, offset: usize, row_stride: usize) -> Result<Self> {
        if row_stride < C {
            return Err(Error::DimensionMismatch {
                expected: C,
                actual: row_stride,
            });
        }
        let needed = match R {
            0 => offset,
            _ => offset + (R - 1) * row_stride + C,
        };
        if elems.len() < needed {
            return Err(Error::DimensionMismatch {
                expected: needed,
                actual: elems.len(),
            });
        }
        Ok(Self::from_parts(
            Storage::from_elems(elems),
            offset,
            row_stride,
        ))
    }

    /// Sets the element at `row` and `col` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds. Nothing is written in that case.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> &mut Self {
        self.storage.write(self.index_of(row, col), value);
        self
    }

    /// Replaces every element with the result of `f(row, col, current)`.
    fn update<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(usize, usize, T) -> T,
    {
        for row in 0..R {
            for col in 0..C {
                let i = self.index_of(row, col);
                self.storage.write(i, f(row, col, self.storage.read(i)));
            }
        }
        self
    }

    /// Copies the elements of `row` into row `index`.
    pub fn set_row<K: Kind, A2: Access>(
        &mut self,
        index: usize,
        row: &Tuple<T, C, K, A2>,
    ) -> &mut Self {
        for col in 0..C {
            self.set(index, col, row.get(col));
        }
        self
    }

    /// Copies the elements of `column` into column `index`.
    pub fn set_column<K: Kind, A2: Access>(
        &mut self,
        index: usize,
        column: &Tuple<T, R, K, A2>,
    ) -> &mut Self {
        for row in 0..R {
            self.set(row, index, column.get(row));
        }
        self
    }

    /// Copies the elements of `other` into `self`.
    pub fn set_from<A2: Access>(&mut self, other: &Matrix<T, R, C, A2>) -> &mut Self {
        self.update(|row, col, _| other.get(row, col))
    }

    pub fn set_zero(&mut self) -> &mut Self {
        self.update(|_, _, _| T::ZERO)
    }

    pub fn set_identity(&mut self) -> &mut Self {
        self.update(|row, col, _| if row == col { T::ONE } else { T::ZERO })
    }

    /// Multiplies every element by `s`.
    pub fn scale(&mut self, s: T) -> &mut Self {
        self.update(|_, _, v| v * s)
    }

    /// Element-wise `self += other`.
    pub fn add<A2: Access>(&mut self, other: &Matrix<T, R, C, A2>) -> &mut Self {
        self.update(|row, col, v| v + other.get(row, col))
    }

    /// Element-wise `self -= other`.
    pub fn sub<A2: Access>(&mut self, other: &Matrix<T, R, C, A2>) -> &mut Self {
        self.update(|row, col, v| v - other.get(row, col))
    }

    /// Sets `self` to the matrix product `a * b`.
    ///
    /// The product is computed completely before `self` is written, so either operand may share
    /// storage with `self`.
    pub fn set_product<const M: usize, A1: Access, A2: Access>(
        &mut self,
        a: &Matrix<T, R, M, A1>,
        b: &Matrix<T, M, C, A2>,
    ) -> &mut Self {
        let product = product(a, b);
        self.update(|row, col, _| product[row][col])
    }

    /// Sets `self` to the matrix product `self * b`.
    pub fn mul<A2: Access>(&mut self, b: &Matrix<T, C, C, A2>) -> &mut Self {
        let product = product(self, b);
        self.update(|row, col, _| product[row][col])
    }

    /// Returns a mutable `R2`x`C2` view of the region of `self` starting at `row` and `col`.
    ///
    /// Writes through the view show up in `self` and mark it dirty.
    ///
    /// # Panics
    ///
    /// Panics if the region does not fit into `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let mut m = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// m.sub_matrix_mut::<2, 2>(1, 1).set_zero();
    /// assert_eq!(m.to_rows(), [[1, 2, 3], [4, 0, 0], [7, 0, 0]]);
    /// assert!(m.is_dirty());
    /// ```
    pub fn sub_matrix_mut<const R2: usize, const C2: usize>(
        &mut self,
        row: usize,
        col: usize,
    ) -> Matrix<T, R2, C2, Mutable> {
        let offset = self.region_offset::<R2, C2>(row, col);
        Matrix::from_parts(self.storage.alias(), offset, self.row_stride)
    }

    /// Overwrites the elements with the first `R * C` elements of `buf`, read in the given `order`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `buf` has fewer than `R * C` elements. `self` is
    /// left untouched in that case.
    pub fn load(&mut self, buf: &[T], order: Order) -> Result<&mut Self> {
        check_buffer::<R, C>(buf.len())?;
        match order {
            Order::RowMajor if self.is_contiguous() => {
                let start = self.offset;
                for (i, &value) in buf[..R * C].iter().enumerate() {
                    self.storage.write(start + i, value);
                }
            }
            Order::RowMajor => {
                self.update(|row, col, _| buf[row * C + col]);
            }
            Order::ColumnMajor => {
                self.update(|row, col, _| buf[col * R + row]);
            }
        }
        Ok(self)
    }

    /// Clears the dirty flag shared by `self` and all its views.
    pub fn mark_clean(&mut self) -> &mut Self {
        self.storage.mark_clean();
        self
    }
}

impl<T: Element, const N: usize> Matrix<T, N, N, Mutable> {
    /// Transposes this square matrix in place.
    pub fn transpose(&mut self) -> &mut Self {
        let rows = self.to_rows();
        self.update(|row, col, _| rows[col][row])
    }
}

impl<T: Float, const N: usize> Matrix<T, N, N, Mutable> {
    /// Inverts this matrix in place, via its adjugate.
    ///
    /// A singular matrix (with a [determinant][Matrix::determinant] of zero) is divided by zero:
    /// its elements become infinite or `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// let mut m = Matrix::from_rows([
    ///     [4.0, 7.0],
    ///     [2.0, 6.0],
    /// ]);
    /// m.invert();
    /// assert_approx_eq!(m.to_rows(), [[0.6, -0.7], [-0.2, 0.4]]);
    /// ```
    pub fn invert(&mut self) -> &mut Self {
        if N > 4 {
            return self.invert_by_expansion();
        }

        let block = self.block();
        let adj = block_adjugate(&block, N);
        // first row of `self` times first column of its adjugate
        let det = (0..N).fold(T::ZERO, |acc, k| acc + block[k] * adj[k * 4]);
        let det = if N == 0 { T::ONE } else { det };
        if det == T::ZERO {
            log::debug!("inverting singular {N}x{N} matrix");
        }
        // `+ 0` turns `-0.0` into `0.0`
        self.update(|row, col, _| adj[row * 4 + col] / det + T::ZERO)
    }

    fn invert_by_expansion(&mut self) -> &mut Self {
        let elems: Vec<T> = self.iter().collect();
        let det = laplace_determinant(&elems, N);
        if det == T::ZERO {
            log::debug!("inverting singular {N}x{N} matrix");
        }

        let inverse: Vec<T> = (0..N * N)
            .map(|i| {
                let (row, col) = (i / N, i % N);
                // The adjugate is the transposed cofactor matrix.
                let sub = laplace_determinant(&minor(&elems, N, col, row), N - 1);
                let cofactor = if (row + col) % 2 == 0 {
                    sub
                } else {
                    T::ZERO - sub
                };
                cofactor / det + T::ZERO
            })
            .collect();
        self.update(|row, col, _| inverse[row * N + col])
    }
}

impl<T: Float> Matrix<T, 2, 2, Mutable> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linview::*;
    /// use std::f64::consts::TAU;
    ///
    /// let rot = Mat2::rotation_counterclockwise(TAU / 4.0);
    /// assert_approx_eq!(rot.transform(&vector2(1.0, 0.0)), vector2(0.0, 1.0)).abs(1e-15);
    /// ```
    pub fn rotation_counterclockwise(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, -sin], [sin, cos]])
    }
}

impl<T: Element, const R: usize, const C: usize> Clone for Matrix<T, R, C, Mutable> {
    /// Deep copy; see [`Matrix::to_mutable`].
    fn clone(&self) -> Self {
        self.to_mutable()
    }
}

impl<T: Element, const R: usize, const C: usize> Default for Matrix<T, R, C, Mutable> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element, const R: usize, const C: usize, A: Access> fmt::Debug for Matrix<T, R, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T, const R: usize, const C: usize, A>(&'a Matrix<T, R, C, A>, usize);
        impl<'a, T: Element, const R: usize, const C: usize, A: Access> fmt::Debug
            for FormatRow<'a, T, R, C, A>
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0.get(self.1, col))?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

fn check_buffer<const R: usize, const C: usize>(len: usize) -> Result<()> {
    if len < R * C {
        return Err(Error::DimensionMismatch {
            expected: R * C,
            actual: len,
        });
    }
    Ok(())
}

fn product<T, const R: usize, const M: usize, const C: usize, A1, A2>(
    a: &Matrix<T, R, M, A1>,
    b: &Matrix<T, M, C, A2>,
) -> [[T; C]; R]
where
    T: Element,
    A1: Access,
    A2: Access,
{
    array::from_fn(|row| {
        array::from_fn(|col| (0..M).fold(T::ZERO, |acc, k| acc + a.get(row, k) * b.get(k, col)))
    })
}

/// Determinant of the `n`x`n` row-major matrix `m`.
/// Determinant of the `n`x`n` matrix in the top left corner of a 4x4 block, for `n <= 4`.
fn block_determinant<T: Element>(a: &[T; 16], n: usize) -> T {
    let [a00, a01, a02, _, a10, a11, a12, _, a20, a21, a22, ..] = *a;
    match n {
        0 => T::ONE,
        1 => a00,
        2 => a00 * a11 - a01 * a10,
        3 => {
            a00 * (a11 * a22 - a12 * a21) - a01 * (a10 * a22 - a12 * a20)
                + a02 * (a10 * a21 - a11 * a20)
        }
        _ => {
            let (s, c) = pair_minors(a);
            s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
        }
    }
}

/// Adjugate (transposed cofactor matrix) of the `n`x`n` matrix in the top left corner of a 4x4
/// block, for `n <= 4`. The result uses the same block layout.
fn block_adjugate<T: Element>(a: &[T; 16], n: usize) -> [T; 16] {
    let z = T::ZERO;
    let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] = *a;
    match n {
        0 => [z; 16],
        1 => {
            let mut adj = [z; 16];
            adj[0] = T::ONE;
            adj
        }
        2 => {
            let mut adj = [z; 16];
            adj[0] = a11;
            adj[1] = z - a01;
            adj[4] = z - a10;
            adj[5] = a00;
            adj
        }
        3 => [
            a11 * a22 - a12 * a21,
            a02 * a21 - a01 * a22,
            a01 * a12 - a02 * a11,
            z,
            a12 * a20 - a10 * a22,
            a00 * a22 - a02 * a20,
            a02 * a10 - a00 * a12,
            z,
            a10 * a21 - a11 * a20,
            a01 * a20 - a00 * a21,
            a00 * a11 - a01 * a10,
            z,
            z,
            z,
            z,
            z,
        ],
        _ => {
            let (s, c) = pair_minors(a);
            [
                a11 * c[5] - a12 * c[4] + a13 * c[3],
                a02 * c[4] - a01 * c[5] - a03 * c[3],
                a31 * s[5] - a32 * s[4] + a33 * s[3],
                a22 * s[4] - a21 * s[5] - a23 * s[3],
                a12 * c[2] - a10 * c[5] - a13 * c[1],
                a00 * c[5] - a02 * c[2] + a03 * c[1],
                a32 * s[2] - a30 * s[5] - a33 * s[1],
                a20 * s[5] - a22 * s[2] + a23 * s[1],
                a10 * c[4] - a11 * c[2] + a13 * c[0],
                a01 * c[2] - a00 * c[4] - a03 * c[0],
                a30 * s[4] - a31 * s[2] + a33 * s[0],
                a21 * s[2] - a20 * s[4] - a23 * s[0],
                a11 * c[1] - a10 * c[3] - a12 * c[0],
                a00 * c[3] - a01 * c[1] + a02 * c[0],
                a31 * s[1] - a30 * s[3] - a32 * s[0],
                a20 * s[3] - a21 * s[1] + a22 * s[0],
            ]
        }
    }
}

/// The 2x2 minors of the top two rows (`s`) and the bottom two rows (`c`) of a 4x4 block.
fn pair_minors<T: Element>(a: &[T; 16]) -> ([T; 6], [T; 6]) {
    let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] = *a;
    let s = [
        a00 * a11 - a10 * a01,
        a00 * a12 - a10 * a02,
        a00 * a13 - a10 * a03,
        a01 * a12 - a11 * a02,
        a01 * a13 - a11 * a03,
        a02 * a13 - a12 * a03,
    ];
    let c = [
        a20 * a31 - a30 * a21,
        a20 * a32 - a30 * a22,
        a20 * a33 - a30 * a23,
        a21 * a32 - a31 * a22,
        a21 * a33 - a31 * a23,
        a22 * a33 - a32 * a23,
    ];
    (s, c)
}

/// Cofactor expansion along the first row, for matrices too large for the closed forms.
fn laplace_determinant<T: Element>(m: &[T], n: usize) -> T {
    match n {
        0 => T::ONE,
        1 => m[0],
        2 => m[0] * m[3] - m[1] * m[2],
        _ => (0..n).fold(T::ZERO, |acc, col| {
            let term = m[col] * laplace_determinant(&minor(m, n, 0, col), n - 1);
            if col % 2 == 0 {
                acc + term
            } else {
                acc - term
            }
        }),
    }
}

/// Returns `m` without row `row` and column `col`.
fn minor<T: Copy>(m: &[T], n: usize, row: usize, col: usize) -> Vec<T> {
    (0..n)
        .filter(|&r| r != row)
        .flat_map(|r| (0..n).filter(move |&c| c != col).map(move |c| m[r * n + c]))
        .collect()
}

use std::{
    array, fmt, mem,
    ops::{Index, IndexMut},
    slice,
};

use super::point::Point;
use crate::aux::he::{Access, GridError};

/// `N` elements stored inline and addressed either linearly or as a
/// `width` x `height` grid in row-major order.
///
/// `width * height == N` holds for every live value. The capacity never
/// changes; [`FixedGrid::reshape`] only reinterprets the same elements.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct FixedGrid<T, const N: usize> {
    width: usize,
    height: usize,
    inner: [T; N],
}

impl<T, const N: usize> FixedGrid<T, N> {
    pub const CAPACITY: usize = N;
    pub const DEFAULT_WIDTH: usize = 1;

    /// Grid of `T::default()` values, `N / width` rows high.
    pub fn new(width: usize) -> Result<Self, GridError>
    where
        T: Default,
    {
        let height = Self::height_for(width)?;

        Ok(Self {
            width,
            height,
            inner: array::from_fn(|_| T::default()),
        })
    }

    /// Same as `new(DEFAULT_WIDTH)`: a single column of `N` rows.
    pub fn try_default() -> Result<Self, GridError>
    where
        T: Default,
    {
        Self::new(Self::DEFAULT_WIDTH)
    }

    pub fn filled(width: usize, value: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let height = Self::height_for(width)?;

        Ok(Self {
            width,
            height,
            inner: array::from_fn(|_| value.clone()),
        })
    }

    pub fn from_array(width: usize, inner: [T; N]) -> Result<Self, GridError> {
        let height = Self::height_for(width)?;

        Ok(Self {
            width,
            height,
            inner,
        })
    }

    /// Builds every cell from its position, visiting cells in row-major order.
    pub fn from_fn<F>(width: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(Point) -> T,
    {
        let height = Self::height_for(width)?;

        Ok(Self {
            width,
            height,
            inner: array::from_fn(|i| f(Point::new(i % width, i / width))),
        })
    }

    fn height_for(width: usize) -> Result<usize, GridError> {
        if N == 0 || width == 0 || N % width != 0 {
            log::trace!("rejected width {} for capacity {}", width, N);
            return Err(GridError::InvalidConfiguration {
                capacity: N,
                width,
                height: None,
            });
        }

        Ok(N / width)
    }

    #[inline]
    pub fn size(&self) -> usize {
        N
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Changes the interpretation to `width` x `height`.
    /// Nothing is modified unless `width * height == N`.
    pub fn reshape(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        match width.checked_mul(height) {
            Some(n) if n == N => {
                log::debug!(
                    "reshape {}x{} -> {}x{}",
                    self.width,
                    self.height,
                    width,
                    height
                );
                self.width = width;
                self.height = height;
                Ok(())
            }
            _ => Err(GridError::InvalidConfiguration {
                capacity: N,
                width,
                height: Some(height),
            }),
        }
    }

    /// Exchanges elements and dimensions with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the contents out, leaving `self` with the same dimensions and
    /// default elements.
    pub fn take(&mut self) -> Self
    where
        T: Default,
    {
        let inner = mem::replace(&mut self.inner, array::from_fn(|_| T::default()));

        Self {
            width: self.width,
            height: self.height,
            inner,
        }
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.inner.fill(value);
    }

    /// Linear index of `(x, y)`, or `None` if either axis is outside the grid.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(self.width * y + x)
        } else {
            None
        }
    }

    #[inline]
    pub fn point_of(&self, i: usize) -> Option<Point> {
        if i < N {
            Some(Point::new(i % self.width, i / self.width))
        } else {
            None
        }
    }

    fn out_of_range(&self, access: Access) -> GridError {
        GridError::OutOfRange {
            access,
            width: self.width,
            height: self.height,
        }
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.inner.get(i)
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.inner.get_mut(i)
    }

    pub fn get_xy(&self, x: usize, y: usize) -> Option<&T> {
        self.index_of(x, y).map(|i| &self.inner[i])
    }

    pub fn get_xy_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        match self.index_of(x, y) {
            Some(i) => Some(&mut self.inner[i]),
            None => None,
        }
    }

    pub fn at(&self, i: usize) -> Result<&T, GridError> {
        match self.inner.get(i) {
            Some(v) => Ok(v),
            None => Err(self.out_of_range(Access::Linear(i))),
        }
    }

    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, GridError> {
        if i >= N {
            return Err(self.out_of_range(Access::Linear(i)));
        }

        Ok(&mut self.inner[i])
    }

    /// Checked 2D access. Both axes are validated, so `x >= width` is an
    /// error even when `width * y + x` would still be below `N`.
    pub fn at_xy(&self, x: usize, y: usize) -> Result<&T, GridError> {
        match self.index_of(x, y) {
            Some(i) => Ok(&self.inner[i]),
            None => Err(self.out_of_range(Access::Grid(x, y))),
        }
    }

    pub fn at_xy_mut(&mut self, x: usize, y: usize) -> Result<&mut T, GridError> {
        match self.index_of(x, y) {
            Some(i) => Ok(&mut self.inner[i]),
            None => Err(self.out_of_range(Access::Grid(x, y))),
        }
    }

    /// Stores `value` at `i` and returns the previous one.
    pub fn set(&mut self, i: usize, value: T) -> Result<T, GridError> {
        self.at_mut(i).map(|slot| mem::replace(slot, value))
    }

    pub fn set_xy(&mut self, x: usize, y: usize, value: T) -> Result<T, GridError> {
        self.at_xy_mut(x, y).map(|slot| mem::replace(slot, value))
    }

    /// # Safety
    ///
    /// `i` must be below `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        unsafe { self.inner.get_unchecked(i) }
    }

    /// # Safety
    ///
    /// `i` must be below `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        unsafe { self.inner.get_unchecked_mut(i) }
    }

    /// Unchecked lookup by position; see the `(x, y)` index impl.
    #[inline]
    pub fn value_at(&self, p: Point) -> T
    where
        T: Clone,
    {
        self[p].clone()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    /// Rows from top to bottom, each `width` elements long.
    pub fn rows(&self) -> slice::ChunksExact<'_, T> {
        self.inner.chunks_exact(self.width)
    }

    pub fn rows_mut(&mut self) -> slice::ChunksExactMut<'_, T> {
        self.inner.chunks_exact_mut(self.width)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    pub fn into_inner(self) -> [T; N] {
        self.inner
    }
}

/// Fails with `InvalidConfiguration` unless `width * height == N`.
pub fn make_grid<T: Default, const N: usize>(
    width: usize,
    height: usize,
) -> Result<FixedGrid<T, N>, GridError> {
    match width.checked_mul(height) {
        Some(n) if n == N => FixedGrid::new(width),
        _ => Err(GridError::InvalidConfiguration {
            capacity: N,
            width,
            height: Some(height),
        }),
    }
}

/// `fixed_grid!(T; W, H)` builds a `FixedGrid<T, { W * H }>` of width `W`.
#[macro_export]
macro_rules! fixed_grid {
    ($t:ty; $w:expr, $h:expr) => {
        $crate::FixedGrid::<$t, { $w * $h }>::new($w)
    };
}

impl<T: Clone, const N: usize> Clone for FixedGrid<T, N> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            inner: self.inner.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.inner.clone_from_slice(&source.inner);
        self.width = source.width;
        self.height = source.height;
    }
}

impl<T: Copy, const N: usize> Copy for FixedGrid<T, N> {}

impl<T, const N: usize> Index<usize> for FixedGrid<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedGrid<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[i]
    }
}

// Only the linear index is bounds checked here; an x past the row end
// lands in the next row. Use `at_xy` for per-axis validation.
impl<T, const N: usize> Index<(usize, usize)> for FixedGrid<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &T {
        debug_assert!(x < self.width && y < self.height);
        &self.inner[self.width * y + x]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for FixedGrid<T, N> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        debug_assert!(x < self.width && y < self.height);
        let i = self.width * y + x;
        &mut self.inner[i]
    }
}

impl<T, const N: usize> Index<Point> for FixedGrid<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, p: Point) -> &T {
        &self[(p.x, p.y)]
    }
}

impl<T, const N: usize> IndexMut<Point> for FixedGrid<T, N> {
    #[inline]
    fn index_mut(&mut self, p: Point) -> &mut T {
        &mut self[(p.x, p.y)]
    }
}

impl<T, const N: usize> IntoIterator for FixedGrid<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedGrid<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedGrid<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter_mut()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedGrid<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, v) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                fmt::Display::fmt(v, f)?;
            }
        }

        Ok(())
    }
}

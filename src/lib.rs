//! Fixed-capacity two-dimensional arrays.
//!
//! [`FixedGrid<T, N>`] owns exactly `N` elements inline and exposes them
//! through linear indices and `(x, y)` positions over a row-major layout.
//! The width/height interpretation can be changed with
//! [`FixedGrid::reshape`] as long as it still covers all `N` elements.

pub mod aux;
pub mod core;

pub use crate::aux::he::{Access, GridError, OrExplain};
pub use crate::core::{
    grid::{make_grid, FixedGrid},
    point::Point,
};

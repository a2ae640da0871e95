//! Shapes of arrays: how a flat buffer of elements is interpreted as an
//! N-dimensional array.
//!
//! A [Shape] is an ordered list of dimensions. Arrays lay their elements
//! out in row-major order, so the last axis varies fastest.
//!
//! Shapes can be created from many things:
//! - `usize` - `4` is the 1d shape `(4,)`
//! - tuples - `(3, 2)` and `(4,)`, up to 6 dimensions
//! - rust arrays and slices - `[2, 3, 2]`, `&[2, 3, 2][..]`
//! - `Vec<usize>`

mod shape;

pub use shape::Shape;

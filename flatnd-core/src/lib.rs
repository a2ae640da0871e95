//! # flatnd
//!
//! A small homogeneous N-dimensional array with flat, row-major storage.
//!
//! # Shapes & Arrays
//!
//! *See [dtypes], [shapes], and [array] for more information.*
//!
//! At its core an [`array::Array`] is a flat buffer plus a shape. Just like
//! a rust array, it has two parts:
//! 1. Shape ([shapes])
//! 2. Kind ([dtypes])
//!
//! The kind is one of Integer, Float or Boolean, and every element of an
//! array is of that one kind:
//!
//! ```rust
//! # use flatnd_core::prelude::*;
//! let b = Array::new((3, 2), [1, -2, 3, -4, 5, -6]);
//! assert_eq!(b.to_string(), "((1, -2), (3, -4), (5, -6))");
//! assert_eq!(b.at(&[1, 0]).unwrap(), Nested::from(3));
//!
//! let mixed = Array::try_new((2,), [Scalar::from(1), Scalar::from(2.5)]);
//! assert!(matches!(mixed, Err(Error::TypeMismatch { .. })));
//! ```
//!
//! # Array Operations
//!
//! *See [array_ops] for more information*
//!
//! | Operation | flatnd | numpy |
//! | --- | --- | --- |
//! | Binary Operations | `a + b` | `a + b` |
//! | Scalar Operations | `10 - a` | `10 - a` |
//! | Element wise equality | `a.is_equal(b)` | `a == b` |
//! | Whole array equality | `a == b` | `np.array_equal(a, b)` |
//! | Minimum | `a.min_element()` | `a.min()` |
//! | Indexing | `a.at(&[1, 0])` | `a[1, 0]` |

pub mod array;
pub mod array_ops;
pub mod dtypes;
pub mod shapes;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::array;
    pub use crate::array::{Array, Error, Nested};
    pub use crate::array_ops::{try_binary_op, BinaryOp, Operand};
    pub use crate::dtypes::{Element, IntoScalar, Kind, Scalar};
    pub use crate::shapes::Shape;
}

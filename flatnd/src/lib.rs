//! # flatnd
//!
//! flatnd is a small homogeneous N-dimensional array library, written
//! entirely in rust!
//!
//! Every [`array::Array`] stores its elements in one flat, row-major buffer
//! of a single kind (Integer, Float or Boolean) together with a shape.
//! The nested presentation used for printing and indexing is derived from
//! that buffer on demand.
//!
//! # Creating arrays
//!
//! *See [array] for more information.*
//!
//! ```rust
//! # use flatnd::prelude::*;
//! let a = Array::new((4,), [1, -2, 3, -4]);
//! let b = array![(3, 2); 1, -2, 3, -4, 5, -6];
//! assert_eq!(a.to_string(), "(1, -2, 3, -4)");
//! assert_eq!(b.to_string(), "((1, -2), (3, -4), (5, -6))");
//! ```
//!
//! Construction is validated: the number of values must match the shape,
//! and all values must share one kind.
//!
//! ```rust
//! # use flatnd::prelude::*;
//! assert!(matches!(
//!     Array::try_new((3, 2), [1, 2, 3, 4, 5]),
//!     Err(Error::ShapeMismatch { .. })
//! ));
//! assert!(matches!(
//!     Array::try_new((2,), [Scalar::from(1), Scalar::from(true)]),
//!     Err(Error::TypeMismatch { .. })
//! ));
//! ```
//!
//! # Operations
//!
//! *See [array_ops] for more information.*
//!
//! Arithmetic works element wise against a scalar or an array of the same
//! shape, with the scalar on either side:
//!
//! ```rust
//! # use flatnd::prelude::*;
//! let a = Array::new((4,), [1, -2, 3, -4]);
//! assert_eq!(10 - &a, Array::new((4,), [9, 12, 7, 14]));
//! assert_eq!(&a * 2.0, Array::new((4,), [2.0, -4.0, 6.0, -8.0]));
//! assert_eq!(a.is_equal(&a).to_string(), "(true, true, true, true)");
//! assert_eq!(a.min_element(), -4.0);
//! ```
//!
//! Every panicking method has a `try_` twin returning `Result<_, Error>`.

pub use flatnd_core::*;

pub mod prelude {
    pub use flatnd_core::prelude::*;
}

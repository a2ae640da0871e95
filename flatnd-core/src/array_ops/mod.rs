//! Operations on arrays: element wise arithmetic, equality and the
//! minimum reduction.
//!
//! Every operation leaves its operands untouched and returns a new
//! array (or a plain value for reductions).
//!
//! # Fallible operations
//!
//! Each operation has a `try_` form returning `Result<_, Error>`. The
//! `std::ops` operators and the non-`try_` methods unwrap that result, so
//! they panic on mismatched shapes or unsupported kinds:
//!
//! ```rust
//! # use flatnd_core::prelude::*;
//! let a = Array::new((2,), [1, 2]);
//! let b = Array::new((3,), [1, 2, 3]);
//! assert!(matches!(a.try_add(&b), Err(Error::ShapeMismatch { .. })));
//! ```
//!
//! # Reflected operations
//!
//! `scalar OP array` is computed by the array's reflected method
//! (`try_radd`, `try_rsub`, `try_rmul`).
//! Subtraction does not commute, so `10 - a` subtracts every element from
//! 10:
//!
//! ```rust
//! # use flatnd_core::prelude::*;
//! let a = Array::new((4,), [1, -2, 3, -4]);
//! assert_eq!(10 - &a, Array::new((4,), [9, 12, 7, 14]));
//! assert_eq!(&a - 10, Array::new((4,), [-9, -12, -7, -14]));
//! ```
//!
//! [try_binary_op] runs the full forward-then-reflected dispatch for two
//! [Operand]s.
//!
//! # Kinds
//!
//! Integer with Integer gives Integer, anything with a Float gives Float.
//! Arithmetic is not defined for Boolean arrays or Boolean scalars.

mod add;
mod cmp;
mod min_element;
mod mul;
mod sub;
pub(crate) mod utilities;

pub use add::BinaryAddKernelOp;
pub use mul::BinaryMulKernelOp;
pub use sub::BinarySubKernelOp;
pub use utilities::{try_binary_op, BinaryOp, Operand};

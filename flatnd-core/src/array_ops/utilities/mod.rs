pub(crate) mod ops;

pub use ops::{try_binary_op, BinaryOp, Operand};

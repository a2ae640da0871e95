use super::utilities::ops::{impl_binary_ops, try_binary_kernel, BinaryKernelOp};
use super::{BinaryOp, Operand};
use crate::array::{Array, Error};

#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryAddKernelOp;

impl BinaryKernelOp for BinaryAddKernelOp {
    const NAME: &'static str = "add";
    fn int(lhs: i64, rhs: i64) -> Option<i64> {
        lhs.checked_add(rhs)
    }
    fn float(lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }
}

impl Array {
    /// Element wise and scalar addition.
    ///
    /// Example:
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// let a = Array::new((2, 3), [1.0, 2.0, 3.0, -1.0, -2.0, -3.0]);
    /// let r = a.try_add(&Array::new((2, 3), [1.0; 6])).unwrap();
    /// assert_eq!(r.to_string(), "((2.0, 3.0, 4.0), (0.0, -1.0, -2.0))");
    /// ```
    ///
    /// Adding a scalar:
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// let a = Array::new((4,), [1, -2, 3, -4]);
    /// assert_eq!(a + 10, Array::new((4,), [11, 8, 13, 6]));
    /// ```
    ///
    /// Fails with [Error::ShapeMismatch] if `rhs` is an array of another
    /// shape, and with [Error::OperationNotSupported] if either side is
    /// Boolean.
    pub fn try_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Array, Error> {
        try_binary_kernel::<BinaryAddKernelOp>(self, rhs.into(), false)
    }

    /// Reflected addition `lhs + self`. Addition commutes, so this is
    /// [Array::try_add] with the operands as given.
    pub fn try_radd<'a>(&self, lhs: impl Into<Operand<'a>>) -> Result<Array, Error> {
        self.try_add(lhs)
    }
}

impl_binary_ops!(Add, add, BinaryOp::Add);

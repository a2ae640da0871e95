use super::utilities::ops::{impl_binary_ops, try_binary_kernel, BinaryKernelOp};
use super::{BinaryOp, Operand};
use crate::array::{Array, Error};

#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryMulKernelOp;

impl BinaryKernelOp for BinaryMulKernelOp {
    const NAME: &'static str = "mul";
    fn int(lhs: i64, rhs: i64) -> Option<i64> {
        lhs.checked_mul(rhs)
    }
    fn float(lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }
}

impl Array {
    /// Element wise and scalar multiplication.
    ///
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// let a = Array::new((4,), [1, -2, 3, -4]);
    /// assert_eq!(a.try_mul(10).unwrap(), Array::new((4,), [10, -20, 30, -40]));
    /// ```
    pub fn try_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Array, Error> {
        try_binary_kernel::<BinaryMulKernelOp>(self, rhs.into(), false)
    }

    /// Reflected multiplication `lhs * self`. Multiplication commutes, so
    /// this is [Array::try_mul] with the operands as given.
    pub fn try_rmul<'a>(&self, lhs: impl Into<Operand<'a>>) -> Result<Array, Error> {
        self.try_mul(lhs)
    }
}

impl_binary_ops!(Mul, mul, BinaryOp::Mul);

use super::utilities::ops::{impl_binary_ops, try_binary_kernel, BinaryKernelOp};
use super::{BinaryOp, Operand};
use crate::array::{Array, Error};

#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySubKernelOp;

impl BinaryKernelOp for BinarySubKernelOp {
    const NAME: &'static str = "sub";
    fn int(lhs: i64, rhs: i64) -> Option<i64> {
        lhs.checked_sub(rhs)
    }
    fn float(lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }
}

impl Array {
    /// Element wise and scalar subtraction `self - rhs`.
    ///
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// let a = Array::new((4,), [1, -2, 3, -4]);
    /// assert_eq!(a.try_sub(10).unwrap(), Array::new((4,), [-9, -12, -7, -14]));
    /// ```
    pub fn try_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Array, Error> {
        try_binary_kernel::<BinarySubKernelOp>(self, rhs.into(), false)
    }

    /// Reflected subtraction `lhs - self`.
    ///
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// let a = Array::new((4,), [1, -2, 3, -4]);
    /// assert_eq!(a.try_rsub(10).unwrap(), Array::new((4,), [9, 12, 7, 14]));
    /// assert_eq!(10 - a, Array::new((4,), [9, 12, 7, 14]));
    /// ```
    pub fn try_rsub<'a>(&self, lhs: impl Into<Operand<'a>>) -> Result<Array, Error> {
        try_binary_kernel::<BinarySubKernelOp>(self, lhs.into(), true)
    }
}

impl_binary_ops!(Sub, sub, BinaryOp::Sub);

#[cfg(test)]
mod tests {
    use crate::{array::*, dtypes::Kind, tests::assert_close};

    #[test]
    fn test_scalar_sub() {
        let a1 = Array::new((4,), [1, -2, 3, -4]);
        assert_eq!(&a1 - 10, Array::new((4,), [-9, -12, -7, -14]));

        let b = Array::new((3, 2), [1, -2, 3, -4, 5, -6]);
        assert_eq!(&b - 10, Array::new((3, 2), [-9, -12, -7, -14, -5, -16]));
    }

    #[test]
    fn test_reflected_scalar_sub() {
        let a1 = Array::new((4,), [1, -2, 3, -4]);
        assert_eq!(10 - &a1, Array::new((4,), [9, 12, 7, 14]));
        assert_ne!(10 - &a1, &a1 - 10);

        let b = Array::new((3, 2), [1, -2, 3, -4, 5, -6]);
        assert_eq!(10 - &b, Array::new((3, 2), [9, 12, 7, 14, 5, 16]));

        let r = 0.5 - &a1;
        assert_eq!(r.kind(), Kind::Float);
        assert_close(r.as_slice::<f64>().unwrap(), &[-0.5, 2.5, -2.5, 4.5]);
    }

    #[test]
    fn test_sub_arrays() {
        let a1 = Array::new((4,), [1, -2, 3, -4]);
        let a2 = Array::new((4,), [4.5, 3.5, 2.5, 1.5]);
        assert_eq!(&a1 - &a2, Array::new((4,), [-3.5, -5.5, 0.5, -5.5]));
        assert_eq!(
            a1.try_rsub(&a2).unwrap(),
            Array::new((4,), [3.5, 5.5, -0.5, 5.5])
        );

        let b = Array::new((3, 2), [1, -2, 3, -4, 5, -6]);
        assert_eq!(&b - &b, Array::new((3, 2), [0; 6]));

        let c = Array::new((2, 3, 2), 1..=12);
        assert_eq!(&c - &c, Array::new((2, 3, 2), [0; 12]));
    }

    #[test]
    fn test_sub_shape_mismatch() {
        let a = Array::new((4,), [1, -2, 3, -4]);
        let b = Array::new((2, 2), [1, -2, 3, -4]);
        assert!(matches!(a.try_sub(&b), Err(Error::ShapeMismatch { .. })));
        assert!(matches!(a.try_rsub(&b), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_rsub_boolean_not_supported() {
        let t = Array::new((2,), [true, false]);
        assert_eq!(
            t.try_rsub(1),
            Err(Error::OperationNotSupported {
                op: "sub",
                lhs: Kind::Integer,
                rhs: Kind::Boolean,
            })
        );
    }

    #[test]
    fn test_sub_overflow() {
        let a = Array::new((2,), [0, i64::MIN]);
        assert_eq!(a.try_sub(1), Err(Error::IntegerOverflow { op: "sub" }));
    }
}

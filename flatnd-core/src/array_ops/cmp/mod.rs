use super::Operand;
use crate::{
    array::{Array, Error, ShapeOrCount, Storage},
    dtypes::Scalar,
};

/// Two arrays are equal if they have the same shape and the same elements
/// in the same order. Integer and Float elements compare by value, Boolean
/// elements only equal Boolean elements.
impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        if self.shape != other.shape {
            return false;
        }
        match (&self.data, &other.data) {
            (Storage::Integer(l), Storage::Integer(r)) => l == r,
            (Storage::Float(l), Storage::Float(r)) => l == r,
            (Storage::Boolean(l), Storage::Boolean(r)) => l == r,
            _ => self.iter().zip(other.iter()).all(|(l, r)| l == r),
        }
    }
}

impl Array {
    /// Element wise equality against a numeric scalar or an array of the
    /// same shape. The result is always a Boolean array of `self`'s shape.
    ///
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// let a = Array::new((4,), [1, -2, 3, -4]);
    /// let r = a.try_is_equal(-2).unwrap();
    /// assert_eq!(r, Array::new((4,), [false, true, false, false]));
    /// ```
    ///
    /// Fails with [Error::TypeMismatch] if `other` is a Boolean scalar and
    /// with [Error::ShapeMismatch] if `other` is an array of another shape.
    pub fn try_is_equal<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Array, Error> {
        let out: Vec<bool> = match other.into() {
            Operand::Scalar(scalar @ (Scalar::Integer(_) | Scalar::Float(_))) => {
                self.iter().map(|l| l == scalar).collect()
            }
            Operand::Scalar(scalar) => {
                return Err(Error::TypeMismatch {
                    expected: None,
                    found: scalar.kind(),
                    position: None,
                })
            }
            Operand::Array(other) => {
                if other.shape != self.shape {
                    return Err(Error::ShapeMismatch {
                        expected: self.shape.clone(),
                        found: ShapeOrCount::Shape(other.shape.clone()),
                    });
                }
                self.iter().zip(other.iter()).map(|(l, r)| l == r).collect()
            }
        };
        Ok(Array::from_parts(self.shape.clone(), Storage::Boolean(out)))
    }

    /// See [Array::try_is_equal]. Panics on error.
    pub fn is_equal<'a>(&self, other: impl Into<Operand<'a>>) -> Array {
        self.try_is_equal(other).unwrap()
    }
}

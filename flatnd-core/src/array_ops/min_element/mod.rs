use crate::{
    array::{Array, Error, Storage},
    dtypes::Kind,
};
use num_traits::{Float, ToPrimitive};

impl Array {
    /// The smallest element over the whole array, widened to `f64`.
    ///
    /// Every element takes part regardless of shape; this is not a per-axis
    /// reduction.
    ///
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// let a = Array::new((4,), [1, -2, 3, -4]);
    /// assert_eq!(a.try_min_element().unwrap(), -4.0);
    /// ```
    ///
    /// NaN elements are skipped wherever they appear; the result is NaN only
    /// if every element is NaN.
    ///
    /// Fails with [Error::EmptyArray] if the array has no elements and with
    /// [Error::UnsupportedType] if it is Boolean.
    pub fn try_min_element(&self) -> Result<f64, Error> {
        if self.is_empty() {
            return Err(Error::EmptyArray);
        }
        let min = match &self.data {
            Storage::Integer(data) => data.iter().min().and_then(ToPrimitive::to_f64),
            // NaNs are skipped unless every element is NaN
            Storage::Float(data) => data.iter().copied().reduce(Float::min),
            Storage::Boolean(_) => {
                return Err(Error::UnsupportedType {
                    op: "min_element",
                    kind: Kind::Boolean,
                })
            }
        };
        min.ok_or(Error::EmptyArray)
    }

    /// See [Array::try_min_element]. Panics on error.
    pub fn min_element(&self) -> f64 {
        self.try_min_element().unwrap()
    }
}

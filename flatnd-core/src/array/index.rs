use super::{Array, Error, Nested};

impl Array {
    /// The entry at `index` along the first axis: a scalar for rank 1
    /// arrays, otherwise a nested sub-array.
    ///
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// let b = Array::new((3, 2), [1, -2, 3, -4, 5, -6]);
    /// let row = b.get(1).unwrap();
    /// assert_eq!(row.to_string(), "(3, -4)");
    /// assert_eq!(row.get(0).unwrap(), &Nested::from(3));
    /// ```
    pub fn get(&self, index: usize) -> Result<Nested, Error> {
        self.at(&[index])
    }

    /// Applies one index per axis, left to right, and returns what the path
    /// reaches. An empty path gives the whole nested view.
    ///
    /// Fails with [Error::IndexOutOfRange] if an index is outside the
    /// dimension of its axis and with [Error::TooManyIndices] if the path
    /// is longer than the rank.
    pub fn at(&self, indices: &[usize]) -> Result<Nested, Error> {
        if indices.len() > self.rank() {
            return Err(Error::TooManyIndices { rank: self.rank() });
        }
        for (axis, &index) in indices.iter().enumerate() {
            let dim = self.shape[axis];
            if index >= dim {
                return Err(Error::IndexOutOfRange { axis, index, dim });
            }
        }
        let nested = self.to_nested();
        let mut node = &nested;
        for (axis, &index) in indices.iter().enumerate() {
            node = node.get_along(axis, index)?;
        }
        Ok(node.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::{array::*, dtypes::Scalar};

    #[test]
    fn test_get_1d() {
        let a = Array::new((4,), [1, -2, 3, -4]);
        assert_eq!(a.get(0).unwrap(), Nested::from(1));
        assert_eq!(a.get(3).unwrap().as_scalar(), Some(Scalar::Integer(-4)));
    }

    #[test]
    fn test_get_2d() {
        let b = Array::new((3, 2), [1, -2, 3, -4, 5, -6]);
        assert_eq!(b.get(1).unwrap(), [3, -4].into_iter().collect::<Nested>());
        assert_eq!(b.get(1).unwrap().get(0).unwrap(), &Nested::from(3));
        assert_eq!(b.at(&[1, 0]).unwrap(), Nested::from(3));

        let b2 = Array::new((2, 3), [1, -2, 3, -4, 5, -6]);
        assert_eq!(b2.get(1).unwrap().to_string(), "(-4, 5, -6)");
        assert_eq!(b2.at(&[1, 0]).unwrap(), Nested::from(-4));
    }

    #[test]
    fn test_get_3d() {
        let c = Array::new((2, 3, 2), 1..=12);
        assert_eq!(c.at(&[1, 2, 1]).unwrap(), Nested::from(12));
        assert_eq!(c.at(&[0, 1]).unwrap().to_string(), "(3, 4)");
        assert_eq!(c.at(&[]).unwrap(), c.to_nested());
    }

    #[test]
    fn test_out_of_range() {
        let b = Array::new((3, 2), [1, -2, 3, -4, 5, -6]);
        assert_eq!(
            b.get(3),
            Err(Error::IndexOutOfRange {
                axis: 0,
                index: 3,
                dim: 3
            })
        );
        assert_eq!(
            b.at(&[0, 2]),
            Err(Error::IndexOutOfRange {
                axis: 1,
                index: 2,
                dim: 2
            })
        );
        assert_eq!(b.at(&[0, 1, 0]), Err(Error::TooManyIndices { rank: 2 }));
    }

    #[test]
    fn test_empty_and_rank_0() {
        let e = Array::new((0,), Vec::<f64>::new());
        assert!(matches!(e.get(0), Err(Error::IndexOutOfRange { dim: 0, .. })));

        let s = Array::new((), [2.5]);
        assert_eq!(s.at(&[]).unwrap(), Nested::from(2.5));
        assert_eq!(s.get(0), Err(Error::TooManyIndices { rank: 0 }));
    }
}

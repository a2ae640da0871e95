use super::{Array, Error, Storage};
use crate::dtypes::Scalar;

/// A nested view of an array's elements: sequences of sequences down to
/// scalar leaves.
///
/// The outermost sequence has `shape[0]` entries, each shaped by
/// `shape[1..]`. It is rebuilt from the flat buffer every time it is asked
/// for.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested {
    Scalar(Scalar),
    Seq(Vec<Nested>),
}

impl Nested {
    /// The child at `index`.
    ///
    /// Fails with [Error::IndexOutOfRange] if `index` is past the end of the
    /// sequence, and with [Error::TooManyIndices] if `self` is a scalar leaf.
    pub fn get(&self, index: usize) -> Result<&Nested, Error> {
        self.get_along(0, index)
    }

    pub(crate) fn get_along(&self, axis: usize, index: usize) -> Result<&Nested, Error> {
        match self {
            Nested::Seq(items) => items.get(index).ok_or(Error::IndexOutOfRange {
                axis,
                index,
                dim: items.len(),
            }),
            Nested::Scalar(_) => Err(Error::TooManyIndices { rank: axis }),
        }
    }

    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Nested::Scalar(s) => Some(*s),
            Nested::Seq(_) => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Nested::Scalar(_))
    }
}

macro_rules! nested_from {
    ($($t:ty),*) => {
        $(
        impl From<$t> for Nested {
            fn from(value: $t) -> Self {
                Nested::Scalar(value.into())
            }
        }
        )*
    };
}

nested_from!(Scalar, i32, i64, f64, bool);

impl<T: Into<Nested>> FromIterator<T> for Nested {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Nested::Seq(iter.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Display for Nested {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nested::Scalar(s) => write!(f, "{s}"),
            Nested::Seq(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Builds the nested view of `data[offset..]` shaped by `dims`.
///
/// `data` must hold at least `offset + dims.iter().product()` elements.
pub(crate) fn build_nested(dims: &[usize], data: &Storage, offset: usize) -> Nested {
    match dims {
        [] => Nested::Scalar(data.get(offset)),
        [n] => Nested::Seq((offset..offset + n).map(|i| Nested::Scalar(data.get(i))).collect()),
        [n, rest @ ..] => {
            let chunk: usize = rest.iter().product();
            Nested::Seq(
                (0..*n)
                    .map(|i| build_nested(rest, data, offset + i * chunk))
                    .collect(),
            )
        }
    }
}

impl Array {
    /// The nested view of this array. Rank 0 arrays give their single
    /// scalar.
    ///
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// let a = Array::new((2, 2), [1, 2, 3, 4]);
    /// let expected: Nested = [[1, 2], [3, 4]]
    ///     .into_iter()
    ///     .map(|row| row.into_iter().collect::<Nested>())
    ///     .collect();
    /// assert_eq!(a.to_nested(), expected);
    /// ```
    pub fn to_nested(&self) -> Nested {
        build_nested(self.shape.dims(), &self.data, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(n: i64) -> Storage {
        Storage::Integer((1..=n).collect())
    }

    #[test]
    fn test_build_1d() {
        let data = ints(4);
        let nested = build_nested(&[4], &data, 0);
        assert_eq!(nested, [1, 2, 3, 4].into_iter().collect::<Nested>());
    }

    #[test]
    fn test_build_from_offset() {
        let data = ints(6);
        let nested = build_nested(&[2], &data, 3);
        assert_eq!(nested, [4, 5].into_iter().collect::<Nested>());
        assert_eq!(build_nested(&[], &data, 5), Nested::from(6));
    }

    #[test]
    fn test_build_3d() {
        let data = ints(12);
        let nested = build_nested(&[2, 3, 2], &data, 0);
        assert_eq!(
            nested.to_string(),
            "(((1, 2), (3, 4), (5, 6)), ((7, 8), (9, 10), (11, 12)))"
        );
    }

    #[test]
    fn test_build_zero_dims() {
        let data = Storage::Float(Vec::new());
        assert_eq!(build_nested(&[0], &data, 0).to_string(), "()");
        assert_eq!(build_nested(&[2, 0], &data, 0).to_string(), "((), ())");
        assert_eq!(build_nested(&[0, 3], &data, 0).to_string(), "()");
    }

    #[test]
    fn test_display_single() {
        let data = ints(1);
        assert_eq!(build_nested(&[1], &data, 0).to_string(), "(1,)");
        assert_eq!(build_nested(&[1, 1], &data, 0).to_string(), "((1,),)");
    }

    #[test]
    fn test_get() {
        let data = ints(6);
        let nested = build_nested(&[3, 2], &data, 0);
        let row = nested.get(1).unwrap();
        assert!(!row.is_scalar());
        assert!(row.get(1).unwrap().is_scalar());
        assert_eq!(row.to_string(), "(3, 4)");
        assert_eq!(row.get(0).unwrap().as_scalar(), Some(Scalar::Integer(3)));
        assert_eq!(
            nested.get(3),
            Err(Error::IndexOutOfRange {
                axis: 0,
                index: 3,
                dim: 3
            })
        );
        assert_eq!(
            row.get(0).unwrap().get(0),
            Err(Error::TooManyIndices { rank: 0 })
        );
    }
}

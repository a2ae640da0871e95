use crate::{dtypes::Kind, shapes::Shape};

/// Represents a number of different errors that can occur from creating
/// arrays or running array operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The number of values does not fit the declared shape, or two arrays
    /// of different shapes were combined.
    ShapeMismatch { expected: Shape, found: ShapeOrCount },
    /// The product of the dimensions does not fit in a `usize`.
    ShapeTooLarge { shape: Shape },
    /// Values of more than one kind were given at construction, or an
    /// operand kind is not supported by the operation.
    /// `expected` is `None` when any numeric kind would do.
    TypeMismatch {
        expected: Option<Kind>,
        found: Kind,
        position: Option<usize>,
    },
    /// A construction value could not be classified as any [Kind].
    InvalidType {
        position: Option<usize>,
        value: String,
    },
    /// An index was outside `[0, dim)` for the axis it indexed.
    IndexOutOfRange {
        axis: usize,
        index: usize,
        dim: usize,
    },
    /// More indices than the array has axes.
    TooManyIndices { rank: usize },
    /// A reduction was requested on an array without elements.
    EmptyArray,
    /// A reduction was requested on an array of a kind it is not defined for.
    UnsupportedType { op: &'static str, kind: Kind },
    /// A binary operation does not support these operand kinds. Dispatch
    /// may still succeed through the reflected operation of the other operand.
    OperationNotSupported {
        op: &'static str,
        lhs: Kind,
        rhs: Kind,
    },
    /// Integer arithmetic left the range of `i64`.
    IntegerOverflow { op: &'static str },
    /// Allocating the element buffer failed.
    OutOfMemory,
}

/// The right hand side of a [Error::ShapeMismatch]: either another shape or
/// a raw number of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeOrCount {
    Shape(Shape),
    Count(usize),
}

impl std::fmt::Display for ShapeOrCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Shape(shape) => write!(f, "shape {shape}"),
            Self::Count(n) => write!(f, "{n} values"),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ShapeMismatch {
                expected,
                found: ShapeOrCount::Count(n),
            } => write!(
                f,
                "number of values ({n}) does not fit the shape {expected} ({} elements)",
                expected.num_elements()
            ),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "shapes do not match: {expected} vs {found}")
            }
            Self::ShapeTooLarge { shape } => {
                write!(f, "shape {shape} has more elements than fit in usize")
            }
            Self::TypeMismatch {
                expected: Some(expected),
                found,
                position: Some(i),
            } => write!(f, "value {i} is {found}, but earlier values are {expected}"),
            Self::TypeMismatch {
                expected: Some(expected),
                found,
                ..
            } => write!(f, "expected {expected} operand, found {found}"),
            Self::TypeMismatch { found, .. } => {
                write!(f, "expected a numeric operand, found {found}")
            }
            Self::InvalidType {
                position: Some(i),
                value,
            } => write!(f, "value {i} ({value}) is not an Integer, Float or Boolean"),
            Self::InvalidType { value, .. } => {
                write!(f, "{value} is not an Integer, Float or Boolean")
            }
            Self::IndexOutOfRange { axis, index, dim } => {
                write!(f, "index {index} is out of range for axis {axis} of size {dim}")
            }
            Self::TooManyIndices { rank } => {
                write!(f, "too many indices for an array of rank {rank}")
            }
            Self::EmptyArray => f.write_str("array is empty"),
            Self::UnsupportedType { op, kind } => {
                write!(f, "{op} is not supported for {kind} arrays")
            }
            Self::OperationNotSupported { op, lhs, rhs } => {
                write!(f, "{op} is not supported between {lhs} and {rhs}")
            }
            Self::IntegerOverflow { op } => write!(f, "integer overflow in {op}"),
            Self::OutOfMemory => f.write_str("out of memory"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Attaches the position of a construction value to an [Error::InvalidType].
    pub(crate) fn at_position(self, i: usize) -> Self {
        match self {
            Self::InvalidType { value, .. } => Self::InvalidType {
                position: Some(i),
                value,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::ShapeMismatch {
            expected: Shape::from((3, 2)),
            found: ShapeOrCount::Count(5),
        };
        assert_eq!(
            err.to_string(),
            "number of values (5) does not fit the shape (3, 2) (6 elements)"
        );

        let err = Error::ShapeMismatch {
            expected: Shape::from((3, 2)),
            found: ShapeOrCount::Shape(Shape::from((2, 3))),
        };
        assert_eq!(err.to_string(), "shapes do not match: (3, 2) vs shape (2, 3)");

        let err = Error::ShapeTooLarge {
            shape: Shape::from((usize::MAX, 2)),
        };
        assert_eq!(
            err.to_string(),
            format!("shape ({}, 2) has more elements than fit in usize", usize::MAX)
        );

        let err = Error::InvalidType {
            position: None,
            value: "\"x\"".into(),
        }
        .at_position(2);
        assert_eq!(
            err.to_string(),
            "value 2 (\"x\") is not an Integer, Float or Boolean"
        );

        let err = Error::TypeMismatch {
            expected: None,
            found: Kind::Boolean,
            position: None,
        };
        assert_eq!(err.to_string(), "expected a numeric operand, found Boolean");
    }
}

//! The [Array] struct, its construction, and access to its elements.
//!
//! An [Array] is a flat, row-major buffer of one [Kind] of element plus the
//! [Shape] that gives it dimensions:
//!
//! ```rust
//! # use flatnd_core::prelude::*;
//! let a = Array::new((3, 2), [1, -2, 3, -4, 5, -6]);
//! assert_eq!(a.to_string(), "((1, -2), (3, -4), (5, -6))");
//! assert_eq!(a.kind(), Kind::Integer);
//! ```
//!
//! # Creating arrays
//!
//! - [Array::try_new] / [Array::new] classify each value and check that all
//!   of them share one kind and fit the shape.
//! - [Array::from_vec] takes an already typed buffer.
//! - [Array::try_zeros], [Array::try_full] and [Array::try_sample] allocate.
//! - the [crate::array!] macro is shorthand for [Array::new].
//!
//! Arrays are never mutated after construction. Every operation in
//! [crate::array_ops] returns a new array.

mod creators;
mod error;
mod index;
mod nested;

pub use error::{Error, ShapeOrCount};
pub use nested::Nested;

use crate::{
    dtypes::{Element, IntoScalar, Kind, Scalar},
    shapes::Shape,
};

/// Flat element buffer holding exactly one [Kind] of element.
#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    Integer(Vec<i64>),
    Float(Vec<f64>),
    Boolean(Vec<bool>),
}

impl Storage {
    pub fn kind(&self) -> Kind {
        match self {
            Storage::Integer(_) => Kind::Integer,
            Storage::Float(_) => Kind::Float,
            Storage::Boolean(_) => Kind::Boolean,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Storage::Integer(data) => data.len(),
            Storage::Float(data) => data.len(),
            Storage::Boolean(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at flat position `i`.
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Scalar {
        match self {
            Storage::Integer(data) => Scalar::Integer(data[i]),
            Storage::Float(data) => Scalar::Float(data[i]),
            Storage::Boolean(data) => Scalar::Boolean(data[i]),
        }
    }

    /// Packs classified scalars into storage of `kind`.
    /// Every scalar must already be of `kind`.
    fn collect(kind: Kind, values: Vec<Scalar>) -> Self {
        match kind {
            Kind::Integer => Storage::Integer(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        Scalar::Integer(v) => Some(v),
                        _ => None,
                    })
                    .collect(),
            ),
            Kind::Float => Storage::Float(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        Scalar::Float(v) => Some(v),
                        _ => None,
                    })
                    .collect(),
            ),
            Kind::Boolean => Storage::Boolean(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        Scalar::Boolean(v) => Some(v),
                        _ => None,
                    })
                    .collect(),
            ),
        }
    }
}

/// A homogeneous N-dimensional array.
///
/// See the [module level docs](self) for how to create one.
#[derive(Debug, Clone)]
pub struct Array {
    pub(crate) shape: Shape,
    pub(crate) data: Storage,
}

/// The element count of a shape about to back a new array.
pub(crate) fn try_num_elements(shape: &Shape) -> Result<usize, Error> {
    shape.checked_num_elements().ok_or_else(|| {
        log::debug!("rejecting shape {shape}: element count overflows");
        Error::ShapeTooLarge {
            shape: shape.clone(),
        }
    })
}

impl Array {
    /// Creates an array of `shape` from `values` given in row-major order.
    ///
    /// Fails with
    /// - [Error::ShapeTooLarge] if the element count of `shape` overflows,
    /// - [Error::ShapeMismatch] if the number of values is not the number of
    ///   elements `shape` describes,
    /// - [Error::InvalidType] if a value is not an Integer, Float or Boolean,
    /// - [Error::TypeMismatch] if the values are not all of the same [Kind].
    ///
    /// An array without values has the Float kind.
    pub fn try_new<S, V, I>(shape: S, values: I) -> Result<Self, Error>
    where
        S: Into<Shape>,
        V: IntoScalar,
        I: IntoIterator<Item = V>,
    {
        let shape = shape.into();
        let numel = try_num_elements(&shape)?;
        let values: Vec<V> = values.into_iter().collect();
        if values.len() != numel {
            log::debug!("rejecting {} values for shape {shape}", values.len());
            return Err(Error::ShapeMismatch {
                expected: shape,
                found: ShapeOrCount::Count(values.len()),
            });
        }

        let mut kind = None;
        let mut scalars = Vec::with_capacity(values.len());
        for (i, value) in values.into_iter().enumerate() {
            let scalar = value.try_into_scalar().map_err(|e| e.at_position(i))?;
            match kind {
                None => kind = Some(scalar.kind()),
                Some(expected) if expected != scalar.kind() => {
                    log::debug!("rejecting mixed kinds {expected} and {}", scalar.kind());
                    return Err(Error::TypeMismatch {
                        expected: Some(expected),
                        found: scalar.kind(),
                        position: Some(i),
                    });
                }
                Some(_) => {}
            }
            scalars.push(scalar);
        }

        let data = Storage::collect(kind.unwrap_or(Kind::Float), scalars);
        Ok(Self { shape, data })
    }

    /// See [Array::try_new]. Panics on error.
    pub fn new<S, V, I>(shape: S, values: I) -> Self
    where
        S: Into<Shape>,
        V: IntoScalar,
        I: IntoIterator<Item = V>,
    {
        Self::try_new(shape, values).unwrap()
    }

    /// Creates an array from an already typed buffer. Only the number of
    /// elements is checked.
    pub fn from_vec<S: Into<Shape>, E: Element>(shape: S, data: Vec<E>) -> Result<Self, Error> {
        let shape = shape.into();
        if data.len() != try_num_elements(&shape)? {
            return Err(Error::ShapeMismatch {
                expected: shape,
                found: ShapeOrCount::Count(data.len()),
            });
        }
        Ok(Self {
            shape,
            data: E::into_storage(data),
        })
    }

    /// Builds an array from parts that are already known to agree. Used by
    /// operations that reuse an operand's validated shape.
    pub(crate) fn from_parts(shape: Shape, data: Storage) -> Self {
        debug_assert_eq!(shape.num_elements(), data.len());
        Self { shape, data }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> Kind {
        self.data.kind()
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn storage(&self) -> &Storage {
        &self.data
    }

    /// The elements in flat row-major order.
    pub fn flatten(&self) -> Vec<Scalar> {
        self.iter().collect()
    }

    /// Iterates the elements in flat row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Scalar> + '_ {
        (0..self.len()).map(move |i| self.data.get(i))
    }

    /// The typed flat buffer, if `E` matches the array's kind.
    ///
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// let a = Array::new((2,), [1.5, 2.5]);
    /// assert_eq!(a.as_slice::<f64>(), Some(&[1.5, 2.5][..]));
    /// assert_eq!(a.as_slice::<i64>(), None);
    /// ```
    pub fn as_slice<E: Element>(&self) -> Option<&[E]> {
        E::slice_of(&self.data)
    }
}

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_nested())
    }
}

/// Creates an [Array] from a shape and a list of values, like [Array::new].
///
/// ```rust
/// # use flatnd_core::prelude::*;
/// let a = array![(4,); 1, -2, 3, -4];
/// assert_eq!(a, Array::new((4,), [1, -2, 3, -4]));
/// ```
#[macro_export]
macro_rules! array {
    ($shape:expr; $($v:expr),* $(,)?) => {
        $crate::array::Array::new(
            $shape,
            ::std::vec::Vec::<$crate::dtypes::Scalar>::from([$($crate::dtypes::Scalar::from($v)),*]),
        )
    };
}

//! Element kinds and scalar values. Contains things like [Kind], [Scalar], [Element]
//! and [IntoScalar].
//!
//! An [crate::array::Array] stores exactly one [Kind] of element. The kind is
//! decided once at construction and never changes.

mod scalar;

pub use scalar::{IntoScalar, Scalar};

use crate::array::Storage;

/// The closed set of element kinds an array can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Float,
    Boolean,
}

impl Kind {
    /// Whether arithmetic and reductions are defined for this kind.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Kind::Integer | Kind::Float)
    }

    /// The kind produced by combining two numeric kinds. Integer with Integer
    /// stays Integer, anything involving Float is Float.
    ///
    /// Returns `None` if either side is [Kind::Boolean].
    pub const fn promote(self, other: Kind) -> Option<Kind> {
        match (self, other) {
            (Kind::Integer, Kind::Integer) => Some(Kind::Integer),
            (Kind::Boolean, _) | (_, Kind::Boolean) => None,
            _ => Some(Kind::Float),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Kind::Integer => "Integer",
            Kind::Float => "Float",
            Kind::Boolean => "Boolean",
        })
    }
}

/// Represents a unit type, but no arithmetic.
pub trait Unit:
    'static + Copy + Clone + Default + std::fmt::Debug + PartialEq + PartialOrd + Send + Sync
{
}
impl Unit for i64 {}
impl Unit for f64 {}
impl Unit for bool {}

/// A native type that backs one [Kind] of array storage.
///
/// Only `i64`, `f64` and `bool` implement this, one per [Kind].
pub trait Element: Unit + Into<Scalar> {
    const KIND: Kind;

    #[doc(hidden)]
    fn into_storage(data: Vec<Self>) -> Storage;

    #[doc(hidden)]
    fn slice_of(storage: &Storage) -> Option<&[Self]>;
}

impl Element for i64 {
    const KIND: Kind = Kind::Integer;
    fn into_storage(data: Vec<Self>) -> Storage {
        Storage::Integer(data)
    }
    fn slice_of(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::Integer(data) => Some(data),
            _ => None,
        }
    }
}

impl Element for f64 {
    const KIND: Kind = Kind::Float;
    fn into_storage(data: Vec<Self>) -> Storage {
        Storage::Float(data)
    }
    fn slice_of(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::Float(data) => Some(data),
            _ => None,
        }
    }
}

impl Element for bool {
    const KIND: Kind = Kind::Boolean;
    fn into_storage(data: Vec<Self>) -> Storage {
        Storage::Boolean(data)
    }
    fn slice_of(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::Boolean(data) => Some(data),
            _ => None,
        }
    }
}

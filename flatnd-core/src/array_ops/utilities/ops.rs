use crate::{
    array::{Array, Error, ShapeOrCount, Storage},
    dtypes::{Kind, Scalar},
};

/// The right (or, for reflected operations, left) operand of a binary
/// operation: a scalar or another array.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(Scalar),
    Array(&'a Array),
}

impl Operand<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Operand::Scalar(s) => s.kind(),
            Operand::Array(a) => a.kind(),
        }
    }
}

impl<'a> From<&'a Array> for Operand<'a> {
    fn from(array: &'a Array) -> Self {
        Operand::Array(array)
    }
}

macro_rules! operand_from {
    ($($t:ty),*) => {
        $(
        impl From<$t> for Operand<'_> {
            fn from(value: $t) -> Self {
                Operand::Scalar(value.into())
            }
        }
        )*
    };
}

operand_from!(Scalar, i32, i64, f32, f64, bool);

/// An element-wise arithmetic operation on the two numeric kinds.
pub(crate) trait BinaryKernelOp {
    const NAME: &'static str;
    /// `None` on overflow.
    fn int(lhs: i64, rhs: i64) -> Option<i64>;
    fn float(lhs: f64, rhs: f64) -> f64;
}

#[derive(Clone, Copy)]
enum Side<'a, E> {
    Flat(&'a [E]),
    Scalar(E),
}

impl<E: Copy> Side<'_, E> {
    #[inline(always)]
    fn at(&self, i: usize) -> E {
        match self {
            Side::Flat(data) => data[i],
            Side::Scalar(v) => *v,
        }
    }
}

#[derive(Clone, Copy)]
enum Numeric<'a> {
    Integer(Side<'a, i64>),
    Float(Side<'a, f64>),
}

impl Numeric<'_> {
    #[inline(always)]
    fn float_at(&self, i: usize) -> f64 {
        match self {
            Numeric::Integer(side) => side.at(i) as f64,
            Numeric::Float(side) => side.at(i),
        }
    }
}

fn numeric_storage(data: &Storage) -> Option<Numeric<'_>> {
    match data {
        Storage::Integer(data) => Some(Numeric::Integer(Side::Flat(data.as_slice()))),
        Storage::Float(data) => Some(Numeric::Float(Side::Flat(data.as_slice()))),
        Storage::Boolean(_) => None,
    }
}

fn numeric_operand(operand: Operand<'_>) -> Option<Numeric<'_>> {
    match operand {
        Operand::Scalar(Scalar::Integer(v)) => Some(Numeric::Integer(Side::Scalar(v))),
        Operand::Scalar(Scalar::Float(v)) => Some(Numeric::Float(Side::Scalar(v))),
        Operand::Scalar(Scalar::Boolean(_)) => None,
        Operand::Array(a) => numeric_storage(&a.data),
    }
}

/// Element-wise `Op` between `array` and `other`, producing an array of
/// `array`'s shape.
///
/// If `reflected` is set the operands are swapped, computing `other OP array`.
///
/// Returns [Error::OperationNotSupported] when either side is not numeric,
/// and [Error::ShapeMismatch] when `other` is an array of another shape.
pub(crate) fn try_binary_kernel<Op: BinaryKernelOp>(
    array: &Array,
    other: Operand,
    reflected: bool,
) -> Result<Array, Error> {
    let (lhs_kind, rhs_kind) = if reflected {
        (other.kind(), array.kind())
    } else {
        (array.kind(), other.kind())
    };
    let not_supported = || Error::OperationNotSupported {
        op: Op::NAME,
        lhs: lhs_kind,
        rhs: rhs_kind,
    };
    let mine = numeric_storage(&array.data).ok_or_else(not_supported)?;
    let theirs = numeric_operand(other).ok_or_else(not_supported)?;

    if let Operand::Array(other) = other {
        if other.shape != array.shape {
            return Err(Error::ShapeMismatch {
                expected: array.shape.clone(),
                found: ShapeOrCount::Shape(other.shape.clone()),
            });
        }
    }

    let (lhs, rhs) = if reflected {
        (theirs, mine)
    } else {
        (mine, theirs)
    };
    let n = array.len();
    let overflow = Error::IntegerOverflow { op: Op::NAME };
    let data = match (lhs, rhs) {
        (Numeric::Integer(l), Numeric::Integer(r)) => Storage::Integer(
            (0..n)
                .map(|i| Op::int(l.at(i), r.at(i)).ok_or_else(|| overflow.clone()))
                .collect::<Result<_, _>>()?,
        ),
        (l, r) => Storage::Float(
            (0..n)
                .map(|i| Op::float(l.float_at(i), r.float_at(i)))
                .collect(),
        ),
    };
    Ok(Array::from_parts(array.shape.clone(), data))
}

/// The binary arithmetic operations that support reflected dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
        }
    }

    fn forward(self, lhs: &Array, rhs: Operand) -> Result<Array, Error> {
        match self {
            BinaryOp::Add => lhs.try_add(rhs),
            BinaryOp::Sub => lhs.try_sub(rhs),
            BinaryOp::Mul => lhs.try_mul(rhs),
        }
    }

    fn reflected(self, rhs: &Array, lhs: Operand) -> Result<Array, Error> {
        match self {
            BinaryOp::Add => rhs.try_radd(lhs),
            BinaryOp::Sub => rhs.try_rsub(lhs),
            BinaryOp::Mul => rhs.try_rmul(lhs),
        }
    }
}

/// Computes `lhs OP rhs` with two step dispatch.
///
/// 1. If `lhs` is an array, its forward operation is tried.
/// 2. If that is not supported and `rhs` is an array, the reflected
///    operation of `rhs` is tried with `lhs`.
/// 3. If neither supports the operands, fails with [Error::TypeMismatch].
///
/// Errors other than [Error::OperationNotSupported] (e.g. a shape mismatch)
/// are returned as soon as they happen.
///
/// ```rust
/// # use flatnd_core::prelude::*;
/// let a = Array::new((4,), [1, -2, 3, -4]);
/// let r = try_binary_op(BinaryOp::Sub, 10.into(), (&a).into()).unwrap();
/// assert_eq!(r, Array::new((4,), [9, 12, 7, 14]));
/// ```
pub fn try_binary_op(op: BinaryOp, lhs: Operand, rhs: Operand) -> Result<Array, Error> {
    if let Operand::Array(array) = lhs {
        match op.forward(array, rhs) {
            Err(Error::OperationNotSupported { .. }) => {
                log::trace!("{op:?} not supported by lhs, trying reflected operation");
            }
            res => return res,
        }
    }
    if let Operand::Array(array) = rhs {
        match op.reflected(array, lhs) {
            Err(Error::OperationNotSupported { .. }) => {}
            res => return res,
        }
    }

    match [lhs.kind(), rhs.kind()].into_iter().find(|k| !k.is_numeric()) {
        Some(found) => Err(Error::TypeMismatch {
            expected: None,
            found,
            position: None,
        }),
        // two numeric scalars: not an array operation
        None => Err(Error::OperationNotSupported {
            op: op.name(),
            lhs: lhs.kind(),
            rhs: rhs.kind(),
        }),
    }
}

/// Implements `std::ops::$Trait` for every combination of owned/borrowed
/// arrays and `i32`/`i64`/`f64` scalars by going through [try_binary_op].
/// Panics on error.
macro_rules! impl_binary_ops {
    ($Trait:ident, $method:ident, $Op:expr) => {
        impl std::ops::$Trait<&Array> for &Array {
            type Output = Array;
            fn $method(self, rhs: &Array) -> Array {
                $crate::array_ops::try_binary_op($Op, self.into(), rhs.into()).unwrap()
            }
        }

        impl std::ops::$Trait<Array> for Array {
            type Output = Array;
            fn $method(self, rhs: Array) -> Array {
                std::ops::$Trait::$method(&self, &rhs)
            }
        }

        impl std::ops::$Trait<&Array> for Array {
            type Output = Array;
            fn $method(self, rhs: &Array) -> Array {
                std::ops::$Trait::$method(&self, rhs)
            }
        }

        impl std::ops::$Trait<Array> for &Array {
            type Output = Array;
            fn $method(self, rhs: Array) -> Array {
                std::ops::$Trait::$method(self, &rhs)
            }
        }

        $crate::array_ops::utilities::ops::impl_binary_ops!(@scalar $Trait, $method, $Op, i32);
        $crate::array_ops::utilities::ops::impl_binary_ops!(@scalar $Trait, $method, $Op, i64);
        $crate::array_ops::utilities::ops::impl_binary_ops!(@scalar $Trait, $method, $Op, f64);
    };

    (@scalar $Trait:ident, $method:ident, $Op:expr, $t:ty) => {
        impl std::ops::$Trait<$t> for &Array {
            type Output = Array;
            fn $method(self, rhs: $t) -> Array {
                $crate::array_ops::try_binary_op($Op, self.into(), rhs.into()).unwrap()
            }
        }

        impl std::ops::$Trait<$t> for Array {
            type Output = Array;
            fn $method(self, rhs: $t) -> Array {
                std::ops::$Trait::$method(&self, rhs)
            }
        }

        impl std::ops::$Trait<&Array> for $t {
            type Output = Array;
            fn $method(self, rhs: &Array) -> Array {
                $crate::array_ops::try_binary_op($Op, self.into(), rhs.into()).unwrap()
            }
        }

        impl std::ops::$Trait<Array> for $t {
            type Output = Array;
            fn $method(self, rhs: Array) -> Array {
                std::ops::$Trait::$method(self, &rhs)
            }
        }
    };
}

pub(crate) use impl_binary_ops;

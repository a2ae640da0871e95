use super::Kind;
use crate::array::Error;
use num_traits::ToPrimitive;

/// A single value of one [Kind].
///
/// Integer and Float scalars compare by numeric value, so `Integer(1) ==
/// Float(1.0)`. A Boolean scalar only ever equals another Boolean.
#[derive(Debug, Clone, Copy)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Scalar {
    pub const fn kind(&self) -> Kind {
        match self {
            Scalar::Integer(_) => Kind::Integer,
            Scalar::Float(_) => Kind::Float,
            Scalar::Boolean(_) => Kind::Boolean,
        }
    }

    /// Widens a numeric scalar to `f64`. Returns `None` for booleans.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Scalar::Integer(v) => v.to_f64(),
            Scalar::Float(v) => Some(*v),
            Scalar::Boolean(_) => None,
        }
    }
}

fn int_eq_float(i: i64, f: f64) -> bool {
    // exact: large integers are not rounded onto a nearby float
    f.fract() == 0.0 && f.to_i64() == Some(i)
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Integer(l), Scalar::Integer(r)) => l == r,
            (Scalar::Float(l), Scalar::Float(r)) => l == r,
            (Scalar::Integer(i), Scalar::Float(f)) | (Scalar::Float(f), Scalar::Integer(i)) => {
                int_eq_float(*i, *f)
            }
            (Scalar::Boolean(l), Scalar::Boolean(r)) => l == r,
            _ => false,
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Integer(v) => write!(f, "{v}"),
            // Debug keeps the fractional part on whole floats: `1.0`, not `1`
            Scalar::Float(v) => write!(f, "{v:?}"),
            Scalar::Boolean(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! scalar_from {
    ($variant:ident, $cast:ty, [$($t:ty),*]) => {
        $(
        impl From<$t> for Scalar {
            fn from(value: $t) -> Self {
                Scalar::$variant(value as $cast)
            }
        }
        )*
    };
}

scalar_from!(Integer, i64, [i8, i16, i32, i64, u8, u16, u32]);
scalar_from!(Float, f64, [f32, f64]);

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

/// Conversion of a raw construction value into a [Scalar].
///
/// This is where a value gets classified into its [Kind]. Values that have
/// no kind (an integer too wide for the Integer kind, an unparseable
/// literal) fail with [Error::InvalidType].
pub trait IntoScalar {
    fn try_into_scalar(self) -> Result<Scalar, Error>;
}

macro_rules! exact_into_scalar {
    ($($t:ty),*) => {
        $(
        impl IntoScalar for $t {
            fn try_into_scalar(self) -> Result<Scalar, Error> {
                Ok(self.into())
            }
        }
        )*
    };
}

exact_into_scalar!(i8, i16, i32, i64, u8, u16, u32, f32, f64, bool);

impl IntoScalar for Scalar {
    fn try_into_scalar(self) -> Result<Scalar, Error> {
        Ok(self)
    }
}

macro_rules! wide_int_into_scalar {
    ($($t:ty),*) => {
        $(
        impl IntoScalar for $t {
            fn try_into_scalar(self) -> Result<Scalar, Error> {
                self.to_i64().map(Scalar::Integer).ok_or_else(|| Error::InvalidType {
                    position: None,
                    value: format!("{self}_{}", stringify!($t)),
                })
            }
        }
        )*
    };
}

wide_int_into_scalar!(u64, usize, i128, u128);

impl IntoScalar for &str {
    fn try_into_scalar(self) -> Result<Scalar, Error> {
        let literal = self.trim();
        if let Ok(v) = literal.parse::<i64>() {
            return Ok(Scalar::Integer(v));
        }
        if let Ok(v) = literal.parse::<f64>() {
            return Ok(Scalar::Float(v));
        }
        match literal {
            "true" => Ok(Scalar::Boolean(true)),
            "false" => Ok(Scalar::Boolean(false)),
            _ => Err(Error::InvalidType {
                position: None,
                value: format!("{self:?}"),
            }),
        }
    }
}

impl IntoScalar for String {
    fn try_into_scalar(self) -> Result<Scalar, Error> {
        self.as_str().try_into_scalar()
    }
}

impl IntoScalar for &String {
    fn try_into_scalar(self) -> Result<Scalar, Error> {
        self.as_str().try_into_scalar()
    }
}

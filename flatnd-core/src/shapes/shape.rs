/// The dimensions of an array.
///
/// The rank 0 shape `()` describes a single scalar. A shape with a zero
/// dimension describes an array without elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// The number of dimensions.
    #[inline(always)]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// The number of elements in this shape; the product of all dimensions.
    ///
    /// Only meaningful for shapes accepted by an array constructor, see
    /// [Shape::checked_num_elements].
    #[inline(always)]
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// Like [Shape::num_elements], but `None` if the product does not fit in
    /// a `usize`.
    pub fn checked_num_elements(&self) -> Option<usize> {
        self.dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    #[inline(always)]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// The strides of how this shape is layed out in memory.
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1; self.rank()];
        for i in (0..self.rank().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1];
        }
        strides
    }
}

impl std::ops::Index<usize> for Shape {
    type Output = usize;
    #[inline(always)]
    fn index(&self, axis: usize) -> &usize {
        &self.dims[axis]
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{d}")?;
        }
        if self.rank() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

impl From<usize> for Shape {
    fn from(dim: usize) -> Self {
        Self { dims: vec![dim] }
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self { dims }
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self {
            dims: dims.to_vec(),
        }
    }
}

impl From<&Shape> for Shape {
    fn from(shape: &Shape) -> Self {
        shape.clone()
    }
}

macro_rules! shape {
    (($($D:tt $Idx:tt),*)) => {
impl From<($($D, )*)> for Shape {
    #[allow(unused_variables)]
    fn from(dims: ($($D, )*)) -> Self {
        Self { dims: vec![$(dims.$Idx, )*] }
    }
}
    };
}

shape!(());
shape!((usize 0));
shape!((usize 0, usize 1));
shape!((usize 0, usize 1, usize 2));
shape!((usize 0, usize 1, usize 2, usize 3));
shape!((usize 0, usize 1, usize 2, usize 3, usize 4));
shape!((usize 0, usize 1, usize 2, usize 3, usize 4, usize 5));

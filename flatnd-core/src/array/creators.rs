use super::{try_num_elements, Array, Error, Storage};
use crate::{
    dtypes::{Element, Kind, Scalar},
    shapes::Shape,
};
use num_traits::Zero;
use rand::{distributions::Distribution, Rng};

fn try_alloc_elem<E: Clone>(numel: usize, elem: E) -> Result<Vec<E>, Error> {
    let mut data: Vec<E> = Vec::new();
    data.try_reserve(numel).map_err(|_| Error::OutOfMemory)?;
    data.resize(numel, elem);
    Ok(data)
}

impl Array {
    /// An array of `shape` filled with the zero of `kind`. Boolean zeros are
    /// `false`.
    pub fn try_zeros<S: Into<Shape>>(shape: S, kind: Kind) -> Result<Self, Error> {
        let zero = match kind {
            Kind::Integer => Scalar::Integer(i64::zero()),
            Kind::Float => Scalar::Float(f64::zero()),
            Kind::Boolean => Scalar::Boolean(false),
        };
        Self::try_full(shape, zero)
    }

    /// An array of `shape` with every element set to `value`.
    pub fn try_full<S: Into<Shape>>(shape: S, value: Scalar) -> Result<Self, Error> {
        let shape = shape.into();
        let numel = try_num_elements(&shape)?;
        let data = match value {
            Scalar::Integer(v) => Storage::Integer(try_alloc_elem(numel, v)?),
            Scalar::Float(v) => Storage::Float(try_alloc_elem(numel, v)?),
            Scalar::Boolean(v) => Storage::Boolean(try_alloc_elem(numel, v)?),
        };
        Ok(Self::from_parts(shape, data))
    }

    /// An array of `shape` with elements drawn from `distr`.
    ///
    /// ```rust
    /// # use flatnd_core::prelude::*;
    /// use rand::{distributions::Uniform, rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(0);
    /// let a = Array::try_sample((2, 3), Uniform::new(-5i64, 5), &mut rng).unwrap();
    /// assert_eq!(a.kind(), Kind::Integer);
    /// assert!(a.as_slice::<i64>().unwrap().iter().all(|v| (-5..5).contains(v)));
    /// ```
    pub fn try_sample<S, E, D, R>(shape: S, distr: D, rng: &mut R) -> Result<Self, Error>
    where
        S: Into<Shape>,
        E: Element,
        D: Distribution<E>,
        R: Rng + ?Sized,
    {
        let shape = shape.into();
        let numel = try_num_elements(&shape)?;
        let mut data: Vec<E> = Vec::new();
        data.try_reserve(numel).map_err(|_| Error::OutOfMemory)?;
        data.extend(distr.sample_iter(rng).take(numel));
        Ok(Self::from_parts(shape, E::into_storage(data)))
    }
}

use flatnd::prelude::*;
use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};
use rand_distr::Normal;

const CASES: usize = 50;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_shape<R: Rng>(rng: &mut R) -> Shape {
    let rank = rng.gen_range(1..=4);
    (0..rank).map(|_| rng.gen_range(1..=4)).collect::<Vec<usize>>().into()
}

fn random_int<R: Rng>(shape: &Shape, rng: &mut R) -> Array {
    Array::try_sample(shape, Uniform::new_inclusive(-100i64, 100), rng).unwrap()
}

fn random_float<R: Rng>(shape: &Shape, rng: &mut R) -> Array {
    let normal = Normal::new(0.0f64, 10.0).unwrap();
    Array::try_sample(shape, normal, rng).unwrap()
}

#[test]
fn test_construction_and_round_trip() {
    init();
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..CASES {
        let shape = random_shape(&mut rng);
        for a in [random_int(&shape, &mut rng), random_float(&shape, &mut rng)] {
            assert_eq!(a.len(), shape.num_elements());
            let b = Array::new(a.shape(), a.flatten());
            assert_eq!(a, b);
            assert_eq!(a.to_string(), b.to_string());
        }
    }
}

#[test]
fn test_rendering_matches_indexing() {
    init();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..CASES {
        let shape = random_shape(&mut rng);
        let a = random_int(&shape, &mut rng);
        let strides = shape.strides();
        let flat = a.flatten();
        for (i, expected) in flat.iter().enumerate() {
            let index: Vec<usize> = strides
                .iter()
                .zip(shape.dims())
                .map(|(stride, dim)| (i / stride) % dim)
                .collect();
            assert_eq!(a.at(&index).unwrap().as_scalar(), Some(*expected));
        }
    }
}

#[test]
fn test_identities() {
    init();
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..CASES {
        let shape = random_shape(&mut rng);
        let a = random_int(&shape, &mut rng);
        assert_eq!(&a + 0, a);
        assert_eq!(&a * 1, a);
        let f = random_float(&shape, &mut rng);
        assert_eq!(&f + 0.0, f);
        assert_eq!(&f * 1.0, f);
    }
}

#[test]
fn test_commutativity() {
    init();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..CASES {
        let shape = random_shape(&mut rng);
        let a = random_int(&shape, &mut rng);
        let b = random_float(&shape, &mut rng);
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!(&a + 7, 7 + &a);
        assert_eq!(&b * 2.5, 2.5 * &b);
    }
}

#[test]
fn test_reflected_sub_is_not_commutative() {
    init();
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..CASES {
        let shape = random_shape(&mut rng);
        let a = random_int(&shape, &mut rng);
        let r: Array = 10 - &a;
        let expected: Vec<i64> = a.as_slice::<i64>().unwrap().iter().map(|v| 10 - v).collect();
        assert_eq!(r.as_slice::<i64>(), Some(&expected[..]));
        assert_eq!(&r + &(&a - 10), Array::try_zeros(&shape, Kind::Integer).unwrap());
    }
}

#[test]
fn test_shape_mismatch() {
    init();
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_int(&Shape::from((3, 2)), &mut rng);
    let b = random_int(&Shape::from((2, 3)), &mut rng);
    assert!(matches!(a.try_add(&b), Err(Error::ShapeMismatch { .. })));
    assert!(matches!(a.try_sub(&b), Err(Error::ShapeMismatch { .. })));
    assert!(matches!(a.try_mul(&b), Err(Error::ShapeMismatch { .. })));
    assert!(matches!(a.try_is_equal(&b), Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_min_element_matches_flat_min() {
    init();
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..CASES {
        let shape = random_shape(&mut rng);
        let a = random_float(&shape, &mut rng);
        let expected = a
            .as_slice::<f64>()
            .unwrap()
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert_eq!(a.min_element(), expected);
        assert!(a.is_equal(&a).as_slice::<bool>().unwrap().iter().all(|v| *v));
    }
}

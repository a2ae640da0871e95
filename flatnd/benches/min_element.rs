use std::time::Instant;

use flatnd::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::StandardNormal;

fn main() {
    println!("Benchmarking `min_element`");
    let shape = Shape::from((32, 64, 128));
    println!("Input shape {shape}");
    println!();

    let mut rng = StdRng::seed_from_u64(0);

    loop {
        let a = Array::try_sample::<_, f64, _, _>(&shape, StandardNormal, &mut rng).unwrap();

        let start = Instant::now();
        let min = a.min_element();
        let min_dur = start.elapsed();

        let start = Instant::now();
        let shifted = &a - min;
        let sub_dur = start.elapsed();
        assert!(shifted.min_element() >= 0.0);
        println!("min={:?} sub={:?}", min_dur, sub_dur);
    }
}

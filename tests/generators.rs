//! Predefined constructors, including uniform and normal random generation.

use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vectorizer::error::VectorizerError;
use vectorizer::prelude::*;

#[test]
fn test_constant_constructors() {
    assert_eq!(StaticVector::<f64, 3>::zero().into_array(), [0.0; 3]);
    assert_eq!(StaticVector::<i32, 3>::one().into_array(), [1; 3]);
    assert_eq!(StaticVector::<u8, 2>::value(7).into_array(), [7, 7]);

    let mask = StaticVector::new([false, true, true, false]);
    let masked = StaticVector::<i64, 4>::value_masked(-3, &mask).unwrap();
    assert_eq!(masked.into_array(), [0, -3, -3, 0]);
}

#[test]
fn test_indexed_and_progressive() {
    let squares = StaticVector::<u32, 5>::indexed(|i| (i * i) as u32);
    assert_eq!(squares.into_array(), [0, 1, 4, 9, 16]);

    let arithmetic = StaticVector::<f64, 4>::progressive(1.0, 0.5, |x, step| x + step);
    assert_eq!(arithmetic.into_array(), [1.0, 1.5, 2.0, 2.5]);

    let geometric = StaticVector::<i32, 6>::progressive_masked(
        1,
        3,
        |x, step| x * step,
        &StaticVector::new([1u8, 0, 1, 1, 0, 1]),
    )
    .unwrap();
    assert_eq!(geometric.into_array(), [1, 0, 3, 9, 0, 27]);
}

#[test]
fn test_uniform_random_stays_in_range() {
    for _ in 0..100 {
        let v = StaticVector::<f64, 16>::random(-2.0, 3.0).unwrap();
        assert!(v.all_if(|&x| (-2.0..=3.0).contains(&x)), "out of range: {v}");

        let dice = StaticVector::<u8, 16>::random(1, 6).unwrap();
        assert!(dice.all_if(|&x| (1..=6).contains(&x)), "out of range: {dice}");
    }

    let mask = StaticVector::new([true, false, true, false]);
    let sparse = StaticVector::<i32, 4>::random_masked(10, 20, &mask).unwrap();
    assert_eq!(sparse[1], 0);
    assert_eq!(sparse[3], 0);
    assert!((10..=20).contains(&sparse[0]) && (10..=20).contains(&sparse[2]));
}

#[test]
fn test_explicit_engine_is_reproducible() {
    let distribution = Uniform::new(0.0f64, 1.0).unwrap();

    let mut first = StdRng::seed_from_u64(12345);
    let mut second = StdRng::seed_from_u64(12345);
    let a = StaticVector::<f64, 8>::random_with(&mut first, &distribution);
    let b = StaticVector::<f64, 8>::random_with(&mut second, &distribution);
    assert_eq!(a, b);

    let c = StaticVector::<f64, 8>::random_with(&mut first, &distribution);
    assert_ne!(a, c, "the engine state advances between draws");

    let mask = StaticVector::new([false, true, false, true, false, true, false, true]);
    let masked =
        StaticVector::<f64, 8>::random_with_masked(&mut first, &distribution, &mask).unwrap();
    assert!(masked.none_if_masked(|&x| x != 0.0, &!mask).unwrap());
}

#[test]
fn test_gaussian_sample_moments() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut means = Vec::new();

    for _ in 0..2000 {
        let v = StaticVector::<f64, 16>::gaussian(&mut rng, 5.0, 2.0).unwrap();
        means.push(v.mean());
    }
    let grand_mean = means.iter().sum::<f64>() / means.len() as f64;
    assert!(
        (grand_mean - 5.0).abs() < 0.05,
        "grand mean of normal draws is {grand_mean}"
    );

    let mut rng = StdRng::seed_from_u64(7);
    let wide = StaticVector::<f64, 4096>::gaussian(&mut rng, 0.0, 2.0).unwrap();
    let sigma = wide.sigma(0.0);
    assert!((sigma - 2.0).abs() < 0.1, "sample deviation is {sigma}");
}

#[test]
fn test_gaussian_rejects_invalid_deviation() {
    let mut rng = StdRng::seed_from_u64(3);
    for sigma in [-1.0f64, -1e-9, f64::NAN, f64::INFINITY] {
        let result = StaticVector::<f64, 4>::gaussian(&mut rng, 0.0, sigma);
        assert!(
            matches!(result, Err(VectorizerError::Domain { .. })),
            "deviation {sigma} was accepted"
        );
    }
    assert!(StaticVector::<f32, 4>::gaussian(&mut rng, 1.0f32, -0.5f32).is_err());

    let constant = StaticVector::<f64, 4>::gaussian(&mut rng, 3.0, 0.0).unwrap();
    assert_eq!(constant.into_array(), [3.0; 4], "zero deviation yields the mean");
}

//! Sort family: plain and magnitude ordering, companion indexes, masks and
//! permutation replay.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vectorizer::prelude::*;

fn identity<const N: usize>() -> StaticVector<usize, N> {
    StaticVector::from_fn(|i| i)
}

fn descending(a: &f64, b: &f64) -> Ordering {
    b.partial_cmp(a).unwrap_or(Ordering::Equal)
}

#[test]
fn test_magnitude_ordering() {
    let v = StaticVector::new([42.0f64, -23.0, 16.0, 15.0, -8.0, 4.0]);
    assert_eq!(v.asort().into_array(), [4.0, -8.0, 15.0, 16.0, -23.0, 42.0]);

    let mut w = v;
    w.aarrange();
    assert_eq!(w, v.asort());
}

#[test]
fn test_plain_and_comparator_ordering() {
    let mut v = StaticVector::new([3.0f64, -1.0, 2.0, 10.0]);
    assert_eq!(v.sort().into_array(), [-1.0, 2.0, 3.0, 10.0]);
    assert_eq!(v.sort_by(descending).into_array(), [10.0, 3.0, 2.0, -1.0]);

    v.arrange();
    assert_eq!(v.into_array(), [-1.0, 2.0, 3.0, 10.0]);
    v.arrange_by(descending);
    assert_eq!(v.into_array(), [10.0, 3.0, 2.0, -1.0]);
}

#[test]
fn test_companion_records_original_positions() {
    let v = StaticVector::new([30i32, 10, 20]);
    let mut indexes = identity::<3>();
    let sorted = v.sort_with(|a, b| a.cmp(b), &mut indexes, &All).unwrap();

    assert_eq!(sorted.into_array(), [10, 20, 30]);
    assert_eq!(indexes.into_array(), [1, 2, 0]);
    assert_eq!(v.into_array(), [30, 10, 20], "sort_with returns a copy");
}

#[test]
fn test_masked_sort_with_companion() {
    let mut v = StaticVector::new([9.0f64, 4.0, -7.0, 1.0, 8.0]);
    let mut keys = StaticVector::new(['a', 'b', 'c', 'd', 'e']);
    let mask = StaticVector::new([true, false, true, false, true]);

    v.arrange_with(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal), &mut keys, &mask)
        .unwrap();
    assert_eq!(v.into_array(), [-7.0, 4.0, 8.0, 1.0, 9.0]);
    assert_eq!(keys.into_array(), ['c', 'b', 'e', 'd', 'a']);

    let mut w = StaticVector::new([-3i32, 2, -1, 0]);
    let mut positions = identity::<4>();
    w.aarrange_with(&mut positions, &StaticVector::new([1u8, 1, 1, 0])).unwrap();
    assert_eq!(w.into_array(), [-1, 2, -3, 0]);
    assert_eq!(positions.into_array(), [2, 1, 0, 3]);

    let copy = StaticVector::new([-3i32, 2, -1, 0])
        .asort_with(&mut NoCompanion, &All)
        .unwrap();
    assert_eq!(copy.into_array(), [0, -1, 2, -3]);
}

#[test]
fn test_resort_replays_the_permutation() {
    let mut rng = StdRng::seed_from_u64(7);

    for round in 0..100 {
        let a = StaticVector::<f64, 8>::from_fn(|_| rng.random_range(-100.0..100.0));
        let b = StaticVector::<i64, 8>::from_fn(|_| rng.random_range(-1000..1000));

        let mut indexes = identity::<8>();
        let sorted = a
            .sort_with(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal), &mut indexes, &All)
            .unwrap();

        let replayed_a = a.resort(&indexes).unwrap();
        assert_eq!(replayed_a, sorted, "round {round}: replay on the sorted array itself");

        let replayed_b = b.resort(&indexes).unwrap();
        for position in 0..8 {
            assert_eq!(
                replayed_b[position], b[indexes[position]],
                "round {round}: element {position} must come from {}",
                indexes[position]
            );
        }
    }
}

#[test]
fn test_sorting_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let v = StaticVector::<i32, 10>::from_fn(|_| rng.random_range(-50..50));
        let once = v.sort();
        assert_eq!(once.sort(), once);
        assert!(once.as_slice().windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

#[test]
fn test_shuffle_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(2024);
    let original = StaticVector::<i32, 32>::from_fn(|i| i as i32);

    let mut shuffled = original;
    shuffled.shuffle(&mut rng);
    assert_eq!(shuffled.sort(), original);

    let mut unseeded = original;
    unseeded.rearrange(&NoCompanion).unwrap();
    assert_eq!(unseeded.sort(), original, "rearrange without indexes shuffles");
}

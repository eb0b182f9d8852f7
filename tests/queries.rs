//! Counting and predicate queries, with and without masks.

use vectorizer::prelude::*;

#[test]
fn test_masked_population_count() {
    let v = StaticVector::new([4i32, 8, 15, 16, 23, 42]);
    let mask = StaticVector::new([1i32, 1, 0, 1, 0, 1]);

    let count = v.count_if_masked(|x| x.truth(), &mask).unwrap();
    assert_eq!(count, 4, "every element is nonzero, so the mask population is counted");

    let bools = v.map(|x| x.truth());
    assert_eq!(bools.count_masked(&true, &mask).unwrap(), 4);
}

#[test]
fn test_reference_forms() {
    let v = StaticVector::new([3i32, 1, 3, 3, 2]);
    assert_eq!(v.count(&3i32).unwrap(), 3);
    assert!(v.any(&2i32).unwrap());
    assert!(v.none(&7i32).unwrap());
    assert!(!v.all(&3i32).unwrap());

    let same = StaticVector::new([3i32, 0, 3, 0, 2]);
    assert_eq!(v.count(&same).unwrap(), 3);
    assert!(!v.all(&same).unwrap());

    let mask = StaticVector::new([true, false, true, true, false]);
    assert!(v.all_masked(&3i32, &mask).unwrap());
    assert!(v.none_masked(&1i32, &mask).unwrap());
    assert!(!v.any_masked(&2i32, &mask).unwrap());
    assert_eq!(v.count_masked(&same, &mask).unwrap(), 2);
}

#[test]
fn test_predicate_forms() {
    let v = StaticVector::new([2.0f64, 4.0, 6.0, 7.0]);
    let even = |x: &f64| x % 2.0 == 0.0;

    assert_eq!(v.count_if(even), 3);
    assert!(!v.all_if(even));
    assert!(v.any_if(even));
    assert!(!v.none_if(even));
    assert!(v.none_if(|&x| x > 10.0));

    let first_three = StaticVector::new([true, true, true, false]);
    assert!(v.all_if_masked(even, &first_three).unwrap());
    assert!(!v.any_if_masked(|&x| x > 6.5, &first_three).unwrap());
    assert!(v.none_if_masked(|&x| x > 6.5, &first_three).unwrap());
}

#[test]
fn test_empty_region_conventions() {
    let v = StaticVector::new([1i32, 2, 3]);
    let nothing = Mask::<3>::splat(false);

    assert!(v.all_masked(&9i32, &nothing).unwrap());
    assert!(v.none_masked(&1i32, &nothing).unwrap());
    assert!(!v.any_masked(&1i32, &nothing).unwrap());
    assert_eq!(v.count_masked(&1i32, &nothing).unwrap(), 0);

    assert!(v.all_if_masked(|_| false, &nothing).unwrap());
    assert!(!v.any_if_masked(|_| true, &nothing).unwrap());

    let empty = StaticVector::<i32, 0>::default();
    assert!(empty.all_if(|_| false));
    assert!(empty.none_if(|_| true));
    assert!(!empty.any_if(|_| true));
    assert_eq!(empty.count_if(|_| true), 0);
}

//! Partial assignment family: `assign`, `fill`, `replace`, `put`, `change`.

use vectorizer::error::VectorizerError;
use vectorizer::prelude::*;

#[test]
fn test_assign_reinitializes_before_copying() {
    let mut v = StaticVector::new([9i32, 9, 9, 9]);
    v.assign_list(&[1, 2]);
    assert_eq!(v.into_array(), [1, 2, 0, 0]);

    let mut w = StaticVector::new([9i32, 9, 9, 9]);
    let mask = StaticVector::new([false, true, true, false]);
    w.assign_masked(&5i32, &mask).unwrap();
    assert_eq!(w.into_array(), [0, 5, 5, 0], "unselected positions are reset too");

    w.assign_iter(10..20, 3);
    assert_eq!(w.into_array(), [10, 11, 12, 0]);

    w.assign(&StaticVector::new([4i32, 3, 2, 1])).unwrap();
    assert_eq!(w.into_array(), [4, 3, 2, 1]);

    w.assign_list_masked(&[7], &mask).unwrap();
    assert_eq!(w.into_array(), [0, 7, 0, 0]);
}

#[test]
fn test_fill_keeps_untouched_positions() {
    let mut v = StaticVector::new([1i32, 2, 3, 4, 5]);

    v.fill_span(1, 2, &0i32).unwrap();
    assert_eq!(v.into_array(), [1, 0, 0, 4, 5]);

    v.fill_list(&[7, 7]);
    assert_eq!(v.into_array(), [7, 7, 0, 0, 0], "list fill defaults missing elements");

    let mask = StaticVector::new([true, false, true, false, true]);
    v.fill_list_masked(&[1, 2, 3], &mask).unwrap();
    assert_eq!(v.into_array(), [1, 7, 2, 0, 3]);

    v.fill_iter_masked([8, 9].into_iter(), usize::MAX, &mask).unwrap();
    assert_eq!(v.into_array(), [8, 7, 9, 0, 3]);

    v.fill_iter(std::iter::repeat(6), 2);
    assert_eq!(v.into_array(), [6, 6, 9, 0, 3]);

    let source = StaticVector::new([50i32, 51, 52, 53, 54]);
    v.fill_span_masked(2, 3, &source, &mask).unwrap();
    assert_eq!(v.into_array(), [6, 6, 52, 0, 54]);

    v.fill_masked(&-1i32, &mask).unwrap();
    assert_eq!(v.into_array(), [-1, 6, -1, 0, -1]);

    v.fill(&source).unwrap();
    assert_eq!(v, source);
}

#[test]
fn test_replace_leaves_the_receiver_untouched() {
    let v = StaticVector::new([1.0f64, 2.0, 3.0]);
    let mask = StaticVector::new([false, true, false]);

    assert_eq!(v.replace(&0.0f64).unwrap().into_array(), [0.0, 0.0, 0.0]);
    assert_eq!(v.replace_list(&[9.0]).into_array(), [9.0, 0.0, 0.0]);
    assert_eq!(v.replace_iter([4.0, 5.0], 1).into_array(), [4.0, 2.0, 3.0]);
    assert_eq!(v.replace_masked(&7.5f64, &mask).unwrap().into_array(), [1.0, 7.5, 3.0]);
    assert_eq!(
        v.replace_list_masked(&[6.0, 8.0], &mask).unwrap().into_array(),
        [1.0, 6.0, 3.0]
    );
    assert_eq!(v.into_array(), [1.0, 2.0, 3.0]);
}

#[test]
fn test_put_and_change() {
    let mut v = StaticVector::new([0u8; 4]);
    v.put(2, 42).unwrap();
    assert_eq!(v.into_array(), [0, 0, 42, 0]);
    assert_eq!(
        v.put(4, 1).unwrap_err(),
        VectorizerError::OutOfRange { index: 4, size: 4 }
    );

    v.put_span(0, 2, &StaticVector::new([5u8, 6, 7, 8])).unwrap();
    assert_eq!(v.into_array(), [5, 6, 42, 0]);

    let changed = v.change(3, 1).unwrap();
    assert_eq!(changed.into_array(), [5, 6, 42, 1]);
    assert_eq!(v.into_array(), [5, 6, 42, 0]);

    let windowed = v.change_span(1, 10, &3u8).unwrap();
    assert_eq!(windowed.into_array(), [5, 3, 3, 3]);
    assert!(v.change(9, 0).is_err());
}

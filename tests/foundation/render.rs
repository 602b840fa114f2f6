//! Integration tests for value rendering
//!
//! Tests the default textual form of the values the tour prints.

use tour_foundation::{Complex64, Render, TourMap, TourVec, render_line};

#[test]
fn render_zeroed_array() {
    let a4 = [0_i64; 4];
    assert_eq!(a4.render(), "[0 0 0 0]");
}

#[test]
fn render_growable_sequences() {
    assert_eq!(TourVec::from([1_i64, 2, 3]).render(), "[1 2 3]");
    assert_eq!(TourVec::<i64>::new().render(), "[]");
}

#[test]
fn render_map_is_key_ordered() {
    let m: TourMap<String, i64> = TourMap::new()
        .insert("b".to_string(), 2)
        .insert("a".to_string(), 1);
    assert_eq!(m.render(), "map[a:1 b:2]");
}

#[test]
fn render_complex_number() {
    assert_eq!(Complex64::new(3.0, 4.0).render(), "(3+4i)");
}

#[test]
fn render_line_of_mixed_values() {
    let p = Box::new(7_i64);
    let q = Box::new(-2_i64);
    assert_eq!(render_line(&[&*p, &*q]), "7 -2");
    assert_eq!(render_line(&[&"sum:", &7_i64, &"prod:", &12_i64]), "sum: 7 prod: 12");
}

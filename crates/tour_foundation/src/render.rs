//! Default textual rendering of tour values.
//!
//! Sequences render as `[a b c]`, maps as `map[k:v ...]` with keys in
//! sorted order, and complex numbers as `(re+imi)`. Text renders without
//! quotes. The output is deterministic so whole lines can be asserted on.

use std::hash::Hash;

use num_complex::Complex64;

use crate::collections::{TourMap, TourVec};

/// A value with a default human-readable form.
pub trait Render {
    /// Returns the rendered form of this value.
    fn render(&self) -> String;
}

/// Renders each value and joins them with single spaces.
#[must_use]
pub fn render_line(values: &[&dyn Render]) -> String {
    values
        .iter()
        .map(|v| v.render())
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_via_display!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char, str, String,
);

impl Render for Complex64 {
    fn render(&self) -> String {
        format!("({}{:+}i)", self.re, self.im)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

fn render_seq<'a, T: Render + 'a>(items: impl Iterator<Item = &'a T>) -> String {
    let parts: Vec<String> = items.map(Render::render).collect();
    format!("[{}]", parts.join(" "))
}

impl<T: Render> Render for [T] {
    fn render(&self) -> String {
        render_seq(self.iter())
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self) -> String {
        render_seq(self.iter())
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        render_seq(self.iter())
    }
}

impl<T: Render + Clone> Render for TourVec<T> {
    fn render(&self) -> String {
        render_seq(self.iter())
    }
}

impl<K, V> Render for TourMap<K, V>
where
    K: Render + Clone + Eq + Hash + Ord,
    V: Render + Clone,
{
    fn render(&self) -> String {
        let parts: Vec<String> = self
            .sorted_entries()
            .into_iter()
            .map(|(k, v)| format!("{}:{}", k.render(), v.render()))
            .collect();
        format!("map[{}]", parts.join(" "))
    }
}

//! Editing operations on a testimonial list.

use widgetsmith_core::{Testimonial, TestimonialField};

/// An id not used by any testimonial in `list`.
fn next_id(list: &[Testimonial]) -> String {
    let mut n = list.len() + 1;
    loop {
        let candidate = n.to_string();
        if list.iter().all(|t| t.id != candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Append a placeholder testimonial and return it.
pub fn add(list: &mut Vec<Testimonial>) -> &Testimonial {
    let id = next_id(list);
    list.push(Testimonial::placeholder(id));
    &list[list.len() - 1]
}

/// Remove the last testimonial. An empty list stays empty.
pub fn remove_last(list: &mut Vec<Testimonial>) -> Option<Testimonial> {
    list.pop()
}

/// Set one field of the testimonial with `id`. Returns whether it was found.
pub fn update(list: &mut [Testimonial], id: &str, field: TestimonialField, value: &str) -> bool {
    match list.iter_mut().find(|t| t.id == id) {
        Some(testimonial) => {
            testimonial.set_field(field, value);
            true
        }
        None => false,
    }
}

//! Geometry and random-selection utilities
//!
//! Pure functions with no state. Anything random takes `&mut impl Rng` so
//! callers control seeding (tests use a seeded ChaCha8Rng).

use std::collections::HashMap;

use rand::Rng;

/// Euclidean distance between two points. Units are whatever the caller's
/// coordinate system uses (pixels, tiles, ...).
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan ("taxicab") distance: a diagonal counts as 2, not sqrt(2).
pub fn manhattan_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Random integer in `[lower_bound, upper_bound)`. The bounds are swapped if
/// passed in the wrong order, so the range is always valid.
pub fn random_integer(rng: &mut impl Rng, lower_bound: i64, upper_bound: i64) -> i64 {
    let (lo, hi) = if lower_bound > upper_bound {
        (upper_bound, lower_bound)
    } else {
        (lower_bound, upper_bound)
    };
    if lo == hi {
        return lo;
    }
    rng.gen_range(lo..hi)
}

/// Anything that can take part in a weighted random draw.
pub trait Weighted {
    fn relative_weight(&self) -> f64;
}

/// Pick one item with probability proportional to its relative weight.
///
/// With weights (5, 10, 15) the items are picked with frequencies
/// (16.66%, 33.33%, 50%). Returns `None` with a warning if the weights sum
/// to zero (which includes the empty-list case); the last item is returned
/// unconditionally at the end of the scan to guard float rounding.
pub fn random_from_weights<'a, T: Weighted>(rng: &mut impl Rng, items: &'a [T]) -> Option<&'a T> {
    let total_weight: f64 = items.iter().map(|item| item.relative_weight()).sum();

    if total_weight == 0.0 {
        log::warn!("random_from_weights got zero total weight; returning None");
        return None;
    }

    let f = rng.gen::<f64>();

    let mut last_percent = 0.0;
    for (i, item) in items.iter().enumerate() {
        last_percent += item.relative_weight() / total_weight;
        if f < last_percent || i == items.len() - 1 {
            return Some(item);
        }
    }

    // Unreachable: the last iteration above always returns.
    None
}

/// Two circles collide iff the distance between their centers is no more
/// than the sum of their radii (touching counts).
pub fn circles_collide(x1: f64, y1: f64, r1: f64, x2: f64, y2: f64, r2: f64) -> bool {
    distance(x1, y1, x2, y2) <= r1 + r2
}

/// Uniformly random element of a slice, or `None` if it is empty.
pub fn random_array_element<'a, T>(rng: &mut impl Rng, array: &'a [T]) -> Option<&'a T> {
    if array.is_empty() {
        return None;
    }
    Some(&array[rng.gen_range(0..array.len())])
}

/// Shallow-copy a slice into a new Vec. The input is never modified.
pub fn shallow_copy_array<T: Clone>(array: &[T]) -> Vec<T> {
    array.to_vec()
}

/// Append every element of `source` to `dest`. Only `dest` is mutated.
pub fn push_all_to_array<T: Clone>(dest: &mut Vec<T>, source: &[T]) {
    dest.extend_from_slice(source);
}

/// Reversed copy of a slice; the original is untouched.
/// E.g. [1,2,3] becomes [3,2,1].
pub fn copy_and_reverse_array<T: Clone>(array: &[T]) -> Vec<T> {
    let mut copy = array.to_vec();
    copy.reverse();
    copy
}

/// Uniformly random key from a map, or `None` if it is empty.
pub fn random_key_from_dict<'a, K, V>(
    rng: &mut impl Rng,
    dict: &'a HashMap<K, V>,
) -> Option<&'a K> {
    if dict.is_empty() {
        log::warn!("random_key_from_dict got an empty dict; returning None");
        return None;
    }
    let all_keys: Vec<&K> = dict.keys().collect();
    random_array_element(rng, &all_keys).copied()
}

/// Result of one step of [`chase_coordinates`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChaseResult {
    pub x: f64,
    pub y: f64,
    pub at_destination: bool,
}

/// Move a point toward a destination by at most `speed` units.
///
/// With `use_vector`, movement follows the straight line between the points
/// (speed split between the axes by the angle). Without it, each axis moves
/// by the full `speed` independently, which finishes the shorter axis almost
/// immediately. Either way an axis snaps exactly to the target once it is
/// within `speed` of it; `at_destination` is true iff both axes have snapped.
pub fn chase_coordinates(
    mut current_x: f64,
    mut current_y: f64,
    desired_x: f64,
    desired_y: f64,
    speed: f64,
    use_vector: bool,
) -> ChaseResult {
    if use_vector {
        let dist_x = desired_x - current_x;
        let dist_y = desired_y - current_y;
        let angle = dist_y.atan2(dist_x);

        if (current_x - desired_x).abs() < speed {
            current_x = desired_x;
        } else {
            current_x += speed * angle.cos();
        }

        if (current_y - desired_y).abs() < speed {
            current_y = desired_y;
        } else {
            current_y += speed * angle.sin();
        }
    } else {
        if (current_x - desired_x).abs() < speed {
            current_x = desired_x;
        } else if current_x < desired_x {
            current_x += speed;
        } else {
            current_x -= speed;
        }

        if (current_y - desired_y).abs() < speed {
            current_y = desired_y;
        } else if current_y < desired_y {
            current_y += speed;
        } else {
            current_y -= speed;
        }
    }

    ChaseResult {
        x: current_x,
        y: current_y,
        at_destination: current_x == desired_x && current_y == desired_y,
    }
}

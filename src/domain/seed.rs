//! Random starting configurations inside a bounded rectangle.

use rand::Rng;

use super::{Cell, Generation};

/// Fill a `width` x `height` rectangle anchored at the origin, each cell
/// alive with probability 1/2 independently of the others.
pub fn random_seed<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Generation {
    let w = i32::try_from(width).unwrap_or(i32::MAX);
    let h = i32::try_from(height).unwrap_or(i32::MAX);

    (0..h)
        .flat_map(|y| (0..w).map(move |x| Cell::new(x, y)))
        .filter(|_| rng.random_bool(0.5))
        .collect()
}

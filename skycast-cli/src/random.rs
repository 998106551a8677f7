//! Random-spot coordinate generation for the novelty query.

use rand::Rng;
use skycast_core::Coordinates;

/// A uniformly random point on the coordinate grid, rounded to four decimal
/// places.
pub fn random_coordinates() -> Coordinates {
    let mut rng = rand::thread_rng();

    Coordinates::new(
        round4(rng.gen_range(-90.0..=90.0)),
        round4(rng.gen_range(-180.0..=180.0)),
    )
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

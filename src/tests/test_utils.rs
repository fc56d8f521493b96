use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kinematic_traits::Coordinates;

/// Same seed on every run, failures are reproducible.
pub(crate) fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED_A4A1)
}

/// Coordinates with every joint well outside the limits on either side.
pub(crate) fn random_coordinates(rng: &mut StdRng) -> Coordinates {
    Coordinates::from_array(std::array::from_fn(|_| rng.gen_range(-400..=400)))
}

/// Coordinates over the full integer range, for the text form.
pub(crate) fn random_wide_coordinates(rng: &mut StdRng) -> Coordinates {
    Coordinates::from_array(std::array::from_fn(|_| rng.r#gen::<i32>()))
}

//! The static unicorn fleet and ride assignment.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::contract::{PickupLocation, Unicorn};

pub static FLEET: [Unicorn; 3] = [
    Unicorn {
        name: "Angel",
        color: "White",
        gender: "Female",
    },
    Unicorn {
        name: "Gil",
        color: "White",
        gender: "Male",
    },
    Unicorn {
        name: "Rocinante",
        color: "Yellow",
        gender: "Female",
    },
];

/// Picks a unicorn for a pickup.
///
/// Selection is uniform over [`FLEET`] and ignores the coordinates, so it is
/// total for any input, including NaN and infinities.
pub fn find_unicorn(pickup: &PickupLocation) -> &'static Unicorn {
    find_unicorn_with(pickup, &mut rand::thread_rng())
}

pub fn find_unicorn_with<R: Rng + ?Sized>(
    _pickup: &PickupLocation,
    rng: &mut R,
) -> &'static Unicorn {
    FLEET.choose(rng).unwrap_or(&FLEET[0])
}

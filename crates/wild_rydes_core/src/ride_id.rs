//! Ride identifiers: 16 random bytes as unpadded URL-safe base64.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

pub const RIDE_ID_BYTES: usize = 16;

pub fn generate_ride_id() -> String {
    generate_ride_id_with(&mut OsRng)
}

pub fn generate_ride_id_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; RIDE_ID_BYTES];
    rng.fill_bytes(&mut bytes);
    to_url_string(&bytes)
}

/// Standard base64 with `+` -> `-`, `/` -> `_` and padding removed.
pub fn to_url_string(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

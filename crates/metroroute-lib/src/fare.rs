//! Distance-banded fare lookup.

/// Upper distance bound (km, inclusive) and fare for each band.
pub const FARE_TIERS: [(f64, u32); 5] = [(2.0, 10), (5.0, 20), (12.0, 30), (21.0, 40), (32.0, 50)];

/// Fare charged beyond the last band.
pub const MAX_FARE: u32 = 60;

/// Fare for a journey of `distance_km`.
///
/// Zero and negative distances fall into the lowest band.
pub fn fare(distance_km: f64) -> u32 {
    FARE_TIERS
        .iter()
        .find(|(limit, _)| distance_km <= *limit)
        .map(|(_, amount)| *amount)
        .unwrap_or(MAX_FARE)
}

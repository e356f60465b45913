//! Display formatting for prices and ratings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Maximum number of stars drawn for a rating.
pub const MAX_STARS: usize = 5;

/// Prices below half a cent round to zero cents and display as free.
const FREE_BELOW: f64 = 0.005;

/// Price label: `"Free"` below half a cent, whole dollars without decimals,
/// cents otherwise.
pub fn format_price(price: f64) -> String {
    if price < FREE_BELOW {
        return "Free".to_owned();
    }
    if (price - price.round()).abs() < 0.005 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

/// Rating with one decimal, e.g. `"4.8"`.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Filled stars for `rating`, rounded and clamped to `0..=MAX_STARS`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn star_count(rating: f64) -> usize {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.round() as usize).min(MAX_STARS)
}

/// Star string such as `"★★★★☆"`.
pub fn stars(rating: f64) -> String {
    let filled = star_count(rating);
    "★".repeat(filled) + &"☆".repeat(MAX_STARS - filled)
}

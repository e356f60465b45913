use super::*;

// =============================================================
// format_price
// =============================================================

#[test]
fn format_price_zero_is_free() {
    assert_eq!(format_price(0.0), "Free");
}

#[test]
fn format_price_fractions_of_a_cent_are_free() {
    assert_eq!(format_price(0.001), "Free");
    assert_eq!(format_price(0.004), "Free");
}

#[test]
fn format_price_below_one_dollar_keeps_cents() {
    assert_eq!(format_price(0.5), "$0.50");
    assert_eq!(format_price(0.99), "$0.99");
}

#[test]
fn format_price_whole_dollars() {
    assert_eq!(format_price(45.0), "$45");
    assert_eq!(format_price(120.0), "$120");
}

#[test]
fn format_price_cents() {
    assert_eq!(format_price(4.99), "$4.99");
    assert_eq!(format_price(12.5), "$12.50");
}

// =============================================================
// format_rating / stars
// =============================================================

#[test]
fn format_rating_one_decimal() {
    assert_eq!(format_rating(4.8), "4.8");
    assert_eq!(format_rating(5.0), "5.0");
}

#[test]
fn star_count_rounds() {
    assert_eq!(star_count(4.4), 4);
    assert_eq!(star_count(4.6), 5);
    assert_eq!(star_count(0.0), 0);
}

#[test]
fn star_count_clamps() {
    assert_eq!(star_count(7.0), MAX_STARS);
    assert_eq!(star_count(-1.0), 0);
    assert_eq!(star_count(f64::NAN), 0);
}

#[test]
fn stars_always_five_glyphs() {
    for rating in [0.0, 2.2, 4.8, 9.0] {
        assert_eq!(stars(rating).chars().count(), MAX_STARS);
    }
    assert_eq!(stars(4.2), "★★★★☆");
}

use super::constants;

/// Glyph slots of the five-star rating strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Full => "starred-symbolic",
            Self::Half => "semi-starred-symbolic",
            Self::Empty => "non-starred-symbolic",
        }
    }
}

/// Exactly five glyphs: floor(rate) full stars, one half star when the
/// fractional part reaches 0.5, empty stars for the rest.
pub fn star_rating(rate: f64) -> [Star; 5] {
    let rate = if rate.is_finite() { rate.clamp(0.0, 5.0) } else { 0.0 };
    let full = rate.floor() as usize;
    let half = rate.fract() >= 0.5;

    let mut stars = [Star::Empty; 5];
    for star in stars.iter_mut().take(full) {
        *star = Star::Full;
    }
    if half && full < 5 {
        stars[full] = Star::Half;
    }
    stars
}

/// Converts a catalog price to whole rupiah and groups the digits the id-ID
/// way ("1.649.250").
pub fn format_price(price: f64) -> String {
    let rupiah = (price * constants::RUPIAH_PER_UNIT).round() as i64;
    group_thousands(rupiah)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    let first_group = match digits.len() % 3 {
        0 => 3,
        remainder => remainder,
    };

    grouped.push_str(&digits[..first_group]);
    for chunk in digits[first_group..].as_bytes().chunks(3) {
        grouped.push('.');
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }

    grouped
}

/// Cuts a product title down for toast messages. Char based, so multi-byte
/// titles stay intact.
pub fn truncate_title(title: &str) -> String {
    title.chars().take(constants::TOAST_TITLE_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(stars: &[Star; 5], wanted: Star) -> usize {
        stars.iter().filter(|star| **star == wanted).count()
    }

    #[test]
    fn star_rating_always_yields_five_glyphs() {
        for rate in [0.0, 0.4, 0.5, 1.0, 2.3, 3.7, 4.5, 4.9, 5.0] {
            assert_eq!(star_rating(rate).len(), 5);
        }
    }

    #[test]
    fn full_stars_follow_the_floor() {
        for rate in [0.0f64, 0.9, 1.0, 2.3, 3.7, 4.4, 5.0] {
            let expected = rate.floor() as usize;
            assert_eq!(count(&star_rating(rate), Star::Full), expected, "rate {rate}");
        }
    }

    #[test]
    fn half_star_appears_at_the_midpoint() {
        assert_eq!(count(&star_rating(3.5), Star::Half), 1);
        assert_eq!(count(&star_rating(3.7), Star::Half), 1);
        assert_eq!(count(&star_rating(3.49), Star::Half), 0);
        assert_eq!(count(&star_rating(0.4), Star::Half), 0);
    }

    #[test]
    fn boundaries_and_garbage_are_safe() {
        assert_eq!(count(&star_rating(5.0), Star::Full), 5);
        assert_eq!(count(&star_rating(0.0), Star::Empty), 5);
        assert_eq!(count(&star_rating(-2.0), Star::Empty), 5);
        assert_eq!(count(&star_rating(9.9), Star::Full), 5);
        assert_eq!(count(&star_rating(f64::NAN), Star::Empty), 5);
    }

    #[test]
    fn rating_sequence_keeps_fulls_before_half_before_empties() {
        assert_eq!(
            star_rating(3.7),
            [Star::Full, Star::Full, Star::Full, Star::Half, Star::Empty]
        );
    }

    #[test]
    fn price_is_rounded_and_grouped() {
        assert_eq!(format_price(109.95), "1.649.250");
        assert_eq!(format_price(22.3), "334.500");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(0.00002), "0");
        assert_eq!(format_price(1000.0), "15.000.000");
    }

    #[test]
    fn grouping_handles_all_digit_counts() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1.000");
        assert_eq!(group_thousands(12_345), "12.345");
        assert_eq!(group_thousands(123_456_789), "123.456.789");
        assert_eq!(group_thousands(-1_500), "-1.500");
    }

    #[test]
    fn titles_are_cut_at_twenty_chars() {
        assert_eq!(
            truncate_title("Fjallraven - Foldsack No. 1 Backpack"),
            "Fjallraven - Foldsac"
        );
        assert_eq!(truncate_title("Tas"), "Tas");
        // multi-byte input must not split a char
        assert_eq!(truncate_title("héllo wörld ünicode ok").chars().count(), 20);
    }
}

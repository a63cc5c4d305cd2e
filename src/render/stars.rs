//! Five-glyph star ratings.

use crate::domain::entities::clamp_rating;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

impl StarGlyph {
    /// Font Awesome classes for the glyph.
    pub fn css_class(&self) -> &'static str {
        match self {
            StarGlyph::Full => "fas fa-star",
            StarGlyph::Half => "fas fa-star-half-alt",
            StarGlyph::Empty => "far fa-star",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            StarGlyph::Full => '★',
            StarGlyph::Half => '⯪',
            StarGlyph::Empty => '☆',
        }
    }
}

/// Glyphs for a rating: whole stars, one half star when the remainder is at
/// least 0.5, then empty stars. Always five glyphs.
pub fn stars(rating: f64) -> [StarGlyph; 5] {
    let rating = clamp_rating(rating);
    let full = rating.floor() as usize;
    let half = rating - rating.floor() >= 0.5;

    let mut glyphs = [StarGlyph::Empty; 5];
    for (i, glyph) in glyphs.iter_mut().enumerate() {
        if i < full {
            *glyph = StarGlyph::Full;
        } else if i == full && half {
            *glyph = StarGlyph::Half;
        }
    }
    glyphs
}

/// Plain-text rendering, e.g. `★★★⯪☆`.
pub fn star_string(rating: f64) -> String {
    stars(rating).iter().map(StarGlyph::symbol).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(glyphs: &[StarGlyph; 5], which: StarGlyph) -> usize {
        glyphs.iter().filter(|g| **g == which).count()
    }

    #[test]
    fn test_full_plus_half_is_rounded_rating() {
        for tenth in 0..=50 {
            let r = f64::from(tenth) / 10.0;
            let glyphs = stars(r);
            let shown = count(&glyphs, StarGlyph::Full) + count(&glyphs, StarGlyph::Half);
            assert_eq!(shown, (r + 0.5).floor() as usize, "rating {r}");
            assert!(count(&glyphs, StarGlyph::Half) <= 1);
        }
    }

    #[test]
    fn test_glyph_order() {
        use StarGlyph::*;
        assert_eq!(stars(3.5), [Full, Full, Full, Half, Empty]);
        assert_eq!(stars(4.4), [Full, Full, Full, Full, Empty]);
        assert_eq!(stars(5.0), [Full; 5]);
        assert_eq!(stars(0.0), [Empty; 5]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(stars(7.2), [StarGlyph::Full; 5]);
        assert_eq!(stars(-1.0), [StarGlyph::Empty; 5]);
        assert_eq!(stars(f64::NAN), [StarGlyph::Empty; 5]);
    }

    #[test]
    fn test_star_string() {
        assert_eq!(star_string(2.5), "★★⯪☆☆");
    }
}

//! Pure presentation helpers.
//!
//! Everything here is a function of its inputs: cards for listings and
//! reviews, star glyphs, and the JSON the map script reads. Nothing holds
//! state between calls.

pub mod card;
pub mod map;
pub mod review;
pub mod stars;

pub use card::{Card, Fact, directions_link, entry_label, price_label, render_card};
pub use map::{map_json, render_popup};
pub use review::{ReviewCard, format_date, render_review};
pub use stars::{StarGlyph, star_string, stars};

/// Presentation settings shared by every card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Currency glyph prefixed to prices and repeated for price levels.
    pub currency: String,
}

impl RenderOptions {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new("₹")
    }
}

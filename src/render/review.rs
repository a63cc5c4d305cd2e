//! Review cards.

use askama::Template;
use chrono::{DateTime, Utc};

use super::stars::{StarGlyph, stars};
use crate::domain::entities::Review;

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub author: String,
    pub stars: [StarGlyph; 5],
    pub text: String,
    pub date: String,
}

impl ReviewCard {
    pub fn new(review: &Review) -> Self {
        Self {
            author: review.author_name.clone(),
            stars: stars(f64::from(review.rating)),
            text: review.text.clone(),
            date: review.timestamp.map(format_date).unwrap_or_default(),
        }
    }
}

/// Short US-style date, e.g. `Jan 5, 2024`.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

#[derive(Template)]
#[template(path = "partials/review.html")]
struct ReviewTemplate<'a> {
    review: &'a ReviewCard,
}

pub fn render_review(review: &Review) -> askama::Result<String> {
    let card = ReviewCard::new(review);
    ReviewTemplate { review: &card }.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn review(timestamp: Option<DateTime<Utc>>) -> Review {
        Review {
            author_name: "Meera".into(),
            rating: 4,
            text: "Worth the queue".into(),
            timestamp,
        }
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(format_date(ts), "Jan 5, 2024");
    }

    #[test]
    fn test_review_card() {
        let ts = Utc.with_ymd_and_hms(2023, 11, 20, 0, 0, 0).unwrap();
        let card = ReviewCard::new(&review(Some(ts)));
        assert_eq!(card.date, "Nov 20, 2023");
        assert_eq!(card.stars[3], StarGlyph::Full);
        assert_eq!(card.stars[4], StarGlyph::Empty);
    }

    #[test]
    fn test_render_review_without_date() {
        let html = render_review(&review(None)).unwrap();
        assert!(html.contains("Meera"));
        assert!(html.contains("Worth the queue"));
        assert!(!html.contains("review-date"));
    }
}

//! Terminal explorer for the tourist guide.
//!
//! Runs the same resolution the web pages use against the configured
//! backend, falling back to the built-in catalog exactly as the site does.
//!
//! # Usage
//!
//! ```bash
//! # Listings and places for a city (prompts when the city is omitted)
//! cargo run --bin explore -- search Delhi
//!
//! # One listing
//! cargo run --bin explore -- details monument delhi-monument-1 --name "Qutub Minar"
//!
//! # City reviews, and posting one
//! cargo run --bin explore -- reviews Jaipur
//! cargo run --bin explore -- review Jaipur --rating 5 --text "Pink city at dusk"
//!
//! # Backend reachability
//! cargo run --bin explore -- ping
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `BACKEND_URL` (or its components), `OVERPASS_URL`,
//! `REQUEST_TIMEOUT_SECS`, `CURRENCY_SYMBOL`.

use tourist_guide::application::controller::{Command, PageState};
use tourist_guide::config;
use tourist_guide::domain::entities::{ListingKind, ListingRecord, ReviewDraft, ReviewTarget};
use tourist_guide::domain::search_context::{DataOrigin, Resolution};
use tourist_guide::error::AppError;
use tourist_guide::render::{Card, ReviewCard, star_string};
use tourist_guide::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};

/// Explore cities from the command line.
#[derive(Parser)]
#[command(name = "explore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hotels, attractions, monuments and places for a city
    Search { city: Option<String> },

    /// Full details for one listing
    Details {
        /// hotel, attraction or monument
        kind: String,
        id: String,
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Reviews for a city
    Reviews { city: Option<String> },

    /// Post a review for a city
    Review {
        city: Option<String>,

        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,

        #[arg(short, long)]
        text: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check that the backend answers
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let state = AppState::from_config(&config)?;

    match cli.command {
        Commands::Search { city } => search(&state, city).await?,
        Commands::Details { kind, id, name } => details(&state, &kind, id, name).await?,
        Commands::Reviews { city } => reviews(&state, city).await?,
        Commands::Review {
            city,
            rating,
            text,
            yes,
        } => post_review(&state, city, rating, text, yes).await?,
        Commands::Ping => ping(&state).await?,
    }

    Ok(())
}

fn city_or_prompt(city: Option<String>) -> Result<String> {
    match city.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()) {
        Some(c) => Ok(c),
        None => Ok(Input::<String>::new()
            .with_prompt("City")
            .with_initial_text("Delhi")
            .interact_text()?
            .trim()
            .to_string()),
    }
}

fn app_error(e: AppError) -> anyhow::Error {
    anyhow::anyhow!("{}", e.message())
}

fn origin_badge(origin: DataOrigin) -> ColoredString {
    match origin {
        DataOrigin::Remote => "live".green(),
        DataOrigin::Fallback => "offline data".yellow(),
    }
}

/// Prints every listing kind and the places found for a city.
///
/// # Output Format
///
/// ```text
/// 🏨 Hotels (offline data)
///   ★★★★☆  The Imperial              4.5/5  ₹25000/night
/// ```
async fn search(state: &AppState, city: Option<String>) -> Result<()> {
    let city = city_or_prompt(city)?;

    let mut page = state.page();
    page.dispatch(Command::Search { city: city.clone() })
        .await
        .map_err(app_error)?;
    let PageState { context, map, .. } = page.into_parts();
    let context = context.context("Search produced no results")?;

    println!(
        "{}",
        format!("🔎 Results for \"{}\"", context.city).bright_blue().bold()
    );
    println!();

    for resolution in context.resolutions() {
        print_resolution(state, resolution);
    }

    if context.places.is_empty() {
        println!("{}", "📍 No attraction markers found".bright_black());
    } else {
        println!("{}", "📍 Places".bright_white().bold());
        for place in &context.places {
            println!(
                "  {:<40} {}",
                place.name.cyan(),
                place.category.bright_black()
            );
        }
    }

    println!();
    println!(
        "  Listings: {}  Markers: {}",
        context.total_records().to_string().bright_white().bold(),
        map.marker_count().to_string().bright_white().bold()
    );
    if context.is_fallback_only() {
        println!(
            "{}",
            "  ⚠️  Backend unavailable, showing offline data".yellow()
        );
    }
    println!();

    Ok(())
}

fn print_resolution(state: &AppState, resolution: &Resolution) {
    let icon = match resolution.kind {
        ListingKind::Hotel => "🏨",
        ListingKind::Attraction => "🎡",
        ListingKind::Monument => "🏛️",
    };
    println!(
        "{} {} ({})",
        icon,
        resolution.kind.title().bright_white().bold(),
        origin_badge(resolution.origin)
    );

    if resolution.records.is_empty() {
        println!("  {}", "Nothing found".bright_black());
    }
    for record in &resolution.records {
        print_summary(state, record);
    }
    println!();
}

fn print_summary(state: &AppState, record: &ListingRecord) {
    let card = Card::new(record, &state.render);
    let first_fact = card
        .facts
        .first()
        .map(|f| f.value.clone())
        .unwrap_or_default();
    println!(
        "  {}  {:<36} {:<6} {}",
        star_string(record.display_rating()).yellow(),
        card.name.cyan(),
        card.rating_text,
        first_fact.bright_black()
    );
    println!("         {}", card.id.bright_black());
}

async fn details(state: &AppState, kind: &str, id: String, name: Option<String>) -> Result<()> {
    let kind: ListingKind = kind.parse()?;

    let mut page = state.page();
    page.dispatch(Command::OpenDetails { kind, id, name })
        .await
        .map_err(app_error)?;
    let PageState { detail, .. } = page.into_parts();
    let detail = detail.context("Listing could not be resolved")?;
    let card = Card::new(&detail.record, &state.render);

    println!(
        "{} ({})",
        card.name.bright_blue().bold(),
        origin_badge(detail.origin)
    );
    println!(
        "  {} {}",
        star_string(detail.record.display_rating()).yellow(),
        card.rating_text
    );
    println!("  {}", card.address);
    println!();
    println!("  {}", card.description);
    println!();

    for fact in card.facts.iter().chain(&card.visiting) {
        println!("  {:<14} {}", fact.label.bright_white(), fact.value);
    }
    if !card.amenities.is_empty() {
        println!(
            "  {:<14} {}",
            "Amenities".bright_white(),
            card.amenities.join(", ")
        );
    }
    if card.has_directions() {
        println!();
        println!("  {} {}", "Directions:".bright_white(), card.directions.cyan());
    }
    println!();

    Ok(())
}

async fn reviews(state: &AppState, city: Option<String>) -> Result<()> {
    let city = city_or_prompt(city)?;

    let mut page = state.page();
    page.dispatch(Command::LoadReviews {
        target: ReviewTarget::location(&city),
    })
    .await
    .map_err(app_error)?;

    println!("{}", format!("💬 Reviews for {city}").bright_blue().bold());
    println!();

    if page.reviews().is_empty() {
        println!(
            "{}",
            "  No reviews yet. Be the first to share your experience!".bright_black()
        );
        println!();
        return Ok(());
    }

    for review in page.reviews() {
        let card = ReviewCard::new(review);
        println!(
            "  {} {}  {}",
            star_string(f64::from(review.rating)).yellow(),
            card.author.cyan(),
            card.date.bright_black()
        );
        println!("    {}", card.text);
    }
    println!();
    println!(
        "  Total: {}",
        page.reviews().len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn post_review(
    state: &AppState,
    city: Option<String>,
    rating: Option<u8>,
    text: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "✍️  Write a Review".bright_blue().bold());
    println!();

    let city = city_or_prompt(city)?;

    let rating = match rating {
        Some(r) => r,
        None => {
            const LABELS: [&str; 5] = [
                "1 - Poor",
                "2 - Fair",
                "3 - Good",
                "4 - Very Good",
                "5 - Excellent",
            ];
            let index = Select::new()
                .with_prompt("Rating")
                .items(&LABELS)
                .default(4)
                .interact()?;
            (index + 1) as u8
        }
    };

    let text = match text {
        Some(t) => t,
        None => Input::new().with_prompt("Review").interact_text()?,
    };

    println!();
    println!("  City:   {}", city.cyan());
    println!("  Rating: {}", star_string(f64::from(rating)).yellow());
    println!("  Review: {}", text);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Post this review?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let mut page = state.page();
    page.dispatch(Command::SubmitReview {
        target: ReviewTarget::location(&city),
        draft: ReviewDraft::new(Some(rating), text),
    })
    .await
    .map_err(app_error)?;

    println!("{}", "✅ Review posted!".green().bold());
    println!(
        "  {} reviews for {} now",
        page.reviews().len().to_string().bright_white().bold(),
        city.cyan()
    );
    println!();

    Ok(())
}

async fn ping(state: &AppState) -> Result<()> {
    println!("{}", "🔌 Backend".bright_blue().bold());
    println!("  URL: {}", state.backend.base_url().to_string().cyan());

    match state.backend.ping().await {
        Ok(status) => {
            println!("  {} (HTTP {status})", "✅ Reachable".green().bold());
        }
        Err(e) => {
            println!("  {} {e}", "❌ Unreachable:".red().bold());
            println!(
                "  {}",
                "Pages will be served from offline data.".bright_black()
            );
        }
    }

    let names = state.places.source_names();
    println!("  Place sources: {}", names.join(" -> ").bright_white());
    println!();

    Ok(())
}

use anyhow::{Context, Result};
use serde::Deserialize;

use marquee_tui::Card;

const DEMO_DECK_RAW: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/cards.toml"));

#[derive(Debug, Deserialize)]
struct Deck {
    #[serde(default)]
    card: Vec<CardEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CardEntry {
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    body: String,
}

/// Cards bundled with the binary.
pub fn demo_cards() -> Result<Vec<Card>> {
    parse_deck(DEMO_DECK_RAW).context("bundled demo deck is invalid")
}

fn parse_deck(raw: &str) -> Result<Vec<Card>> {
    let deck: Deck = toml::from_str(raw)?;
    Ok(deck
        .card
        .into_iter()
        .map(|entry| Card::new(entry.title, entry.subtitle, entry.body))
        .collect())
}

//! The 78-card catalog.
//!
//! The catalog is parsed from a deck document with a flat `majorArcana` list
//! and a `minorArcana` object keyed by suit, each suit holding an ordered
//! `cards` list. Validation happens eagerly in [`Catalog::from_json`]: a
//! catalog that exists is always complete, so draws never discover bad data.

use std::collections::HashSet;

use serde::Deserialize;

use crate::card::{Card, Element, Facet, Suit};
use crate::error::{CatalogError, TarotResult};

/// The bundled deck document.
pub const DECK_JSON: &str = include_str!("../data/tarot-cards.json");

/// Total number of cards in a complete deck.
pub const DECK_SIZE: usize = 78;

/// Number of Major Arcana cards.
pub const MAJOR_COUNT: usize = 22;

/// Number of cards in each Minor Arcana suit.
pub const SUIT_SIZE: usize = 14;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeckDocument {
    major_arcana: Vec<CardRecord>,
    minor_arcana: MinorArcana,
}

#[derive(Deserialize)]
struct MinorArcana {
    wands: SuitGroup,
    cups: SuitGroup,
    swords: SuitGroup,
    pentacles: SuitGroup,
}

impl MinorArcana {
    fn group(&self, suit: Suit) -> &SuitGroup {
        match suit {
            Suit::Wands => &self.wands,
            Suit::Cups => &self.cups,
            Suit::Swords => &self.swords,
            Suit::Pentacles => &self.pentacles,
        }
    }
}

#[derive(Deserialize)]
struct SuitGroup {
    #[serde(default)]
    element: Option<Element>,
    cards: Vec<CardRecord>,
}

#[derive(Deserialize)]
struct CardRecord {
    id: u32,
    name: String,
    #[serde(default)]
    numeral: Option<String>,
    #[serde(default)]
    rank: Option<String>,
    #[serde(default)]
    element: Option<Element>,
    upright: Facet,
    reversed: Facet,
}

impl CardRecord {
    fn into_card(self, suit: Option<Suit>, group_element: Option<Element>) -> Card {
        let numeral = self.numeral.or(self.rank).unwrap_or_default();
        let element = self
            .element
            .or(group_element)
            .or(suit.map(Suit::element));
        Card {
            id: self.id,
            name: self.name,
            suit,
            numeral,
            element,
            upright: self.upright,
            reversed: self.reversed,
        }
    }
}

/// An immutable, validated collection of 78 cards in canonical order.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Load the bundled deck.
    pub fn load() -> TarotResult<Self> {
        Self::from_json(DECK_JSON)
    }

    /// Parse and validate a deck document.
    pub fn from_json(source: &str) -> TarotResult<Self> {
        let doc: DeckDocument = serde_json::from_str(source).map_err(CatalogError::from)?;

        let total = doc.major_arcana.len()
            + Suit::ALL
                .iter()
                .map(|s| doc.minor_arcana.group(*s).cards.len())
                .sum::<usize>();
        if total != DECK_SIZE {
            return Err(CatalogError::WrongCount {
                expected: DECK_SIZE,
                found: total,
            }
            .into());
        }

        check_group("major", doc.major_arcana.len(), MAJOR_COUNT)?;
        for suit in Suit::ALL {
            check_group(suit.key(), doc.minor_arcana.group(suit).cards.len(), SUIT_SIZE)?;
        }

        let DeckDocument {
            major_arcana,
            minor_arcana,
        } = doc;

        let mut cards: Vec<Card> = major_arcana
            .into_iter()
            .map(|r| r.into_card(None, None))
            .collect();
        for (suit, group) in [
            (Suit::Wands, minor_arcana.wands),
            (Suit::Cups, minor_arcana.cups),
            (Suit::Swords, minor_arcana.swords),
            (Suit::Pentacles, minor_arcana.pentacles),
        ] {
            let element = group.element;
            cards.extend(
                group
                    .cards
                    .into_iter()
                    .map(|r| r.into_card(Some(suit), element)),
            );
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in &cards {
            if card.id == 0 || card.id as usize > DECK_SIZE {
                return Err(CatalogError::IdOutOfRange(card.id).into());
            }
            if !seen.insert(card.id) {
                return Err(CatalogError::DuplicateId(card.id).into());
            }
            for (facet, name) in [(&card.upright, "upright"), (&card.reversed, "reversed")] {
                if facet.keywords.is_empty() || facet.meaning.trim().is_empty() {
                    return Err(CatalogError::EmptyFacet {
                        card: card.name.clone(),
                        facet: name,
                    }
                    .into());
                }
            }
        }

        log::debug!("loaded catalog of {} cards", cards.len());
        Ok(Self { cards })
    }

    /// All cards in canonical order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards (always 78 for a loaded catalog).
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog is empty. Never true for a loaded catalog.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by id.
    pub fn get(&self, id: u32) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// The Major Arcana, in order.
    pub fn majors(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_major())
    }

    /// One suit of the Minor Arcana, in order.
    pub fn suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.suit == Some(suit))
    }

    /// A read-only projection of every card for deck browsing.
    pub fn browse(&self) -> impl Iterator<Item = DeckEntry<'_>> {
        self.cards.iter().map(DeckEntry::from)
    }
}

fn check_group(group: &str, found: usize, expected: usize) -> Result<(), CatalogError> {
    if found == expected {
        Ok(())
    } else {
        Err(CatalogError::GroupSize {
            group: group.to_string(),
            expected,
            found,
        })
    }
}

/// What the deck browser shows for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckEntry<'c> {
    /// Suit, or `None` for majors.
    pub suit: Option<Suit>,
    /// Numeral or rank.
    pub numeral: &'c str,
    /// Card name.
    pub name: &'c str,
    /// Upright keywords.
    pub upright: &'c [String],
    /// Reversed keywords.
    pub reversed: &'c [String],
}

impl<'c> From<&'c Card> for DeckEntry<'c> {
    fn from(card: &'c Card) -> Self {
        Self {
            suit: card.suit,
            numeral: &card.numeral,
            name: &card.name,
            upright: &card.upright.keywords,
            reversed: &card.reversed.keywords,
        }
    }
}

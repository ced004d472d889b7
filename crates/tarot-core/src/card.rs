//! Card records, facets, and orientation.

use serde::{Deserialize, Serialize};

/// One of the four Minor Arcana suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Wands (Fire).
    Wands,
    /// Cups (Water).
    Cups,
    /// Swords (Air).
    Swords,
    /// Pentacles (Earth).
    Pentacles,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// The classical element of this suit.
    pub fn element(self) -> Element {
        match self {
            Self::Wands => Element::Fire,
            Self::Cups => Element::Water,
            Self::Swords => Element::Air,
            Self::Pentacles => Element::Earth,
        }
    }

    /// Lower-case key used in the deck document.
    pub fn key(self) -> &'static str {
        match self {
            Self::Wands => "wands",
            Self::Cups => "cups",
            Self::Swords => "swords",
            Self::Pentacles => "pentacles",
        }
    }

    /// The domain of life this suit speaks to.
    pub fn theme(self) -> &'static str {
        match self {
            Self::Wands => "Passion & Creativity",
            Self::Cups => "Emotions & Relationships",
            Self::Swords => "Intellect & Conflict",
            Self::Pentacles => "Material & Career",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wands => write!(f, "Wands"),
            Self::Cups => write!(f, "Cups"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// Classical element, used for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Fire.
    Fire,
    /// Water.
    Water,
    /// Air.
    Air,
    /// Earth.
    Earth,
}

impl Element {
    /// A small pictogram for terminal output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Fire => "🔥",
            Self::Water => "💧",
            Self::Air => "💨",
            Self::Earth => "🌍",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fire => write!(f, "Fire"),
            Self::Water => write!(f, "Water"),
            Self::Air => write!(f, "Air"),
            Self::Earth => write!(f, "Earth"),
        }
    }
}

/// Interpretive data for one orientation of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    /// Short keywords, in display order.
    pub keywords: Vec<String>,
    /// Prose meaning.
    pub meaning: String,
    /// Love reading, if the card carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub love: Option<String>,
    /// Career reading, if the card carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
    /// Health reading, if the card carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
}

impl Facet {
    /// Whether this facet carries the love/career/health trio.
    pub fn has_themes(&self) -> bool {
        self.love.is_some() || self.career.is_some() || self.health.is_some()
    }
}

/// An immutable card record from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Stable id, 1..=78.
    pub id: u32,
    /// Display name, e.g. "The Tower" or "Three of Cups".
    pub name: String,
    /// Suit, or `None` for the Major Arcana.
    pub suit: Option<Suit>,
    /// Display label: a roman numeral for majors, the rank for minors.
    pub numeral: String,
    /// Element tag, if any.
    pub element: Option<Element>,
    /// Upright facet.
    pub upright: Facet,
    /// Reversed facet.
    pub reversed: Facet,
}

impl Card {
    /// Whether this card belongs to the Major Arcana.
    pub fn is_major(&self) -> bool {
        self.suit.is_none()
    }

    /// The facet for a given orientation.
    pub fn facet(&self, orientation: Orientation) -> &Facet {
        match orientation {
            Orientation::Upright => &self.upright,
            Orientation::Reversed => &self.reversed,
        }
    }
}

/// Which way up a card was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Drawn upright.
    Upright,
    /// Drawn reversed.
    Reversed,
}

impl Orientation {
    /// Build an orientation from a reversed flag.
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Self::Reversed
        } else {
            Self::Upright
        }
    }

    /// Arrow used in terminal output.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Upright => "↑",
            Self::Reversed => "↓",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "Upright"),
            Self::Reversed => write!(f, "Reversed"),
        }
    }
}

/// A card as it came out of a draw: the catalog record plus its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawnCard<'c> {
    /// The catalog record.
    pub card: &'c Card,
    /// Orientation assigned at draw time.
    pub orientation: Orientation,
}

impl<'c> DrawnCard<'c> {
    /// Pair a catalog card with an orientation.
    pub fn new(card: &'c Card, orientation: Orientation) -> Self {
        Self { card, orientation }
    }

    /// Whether the card came up reversed.
    pub fn is_reversed(&self) -> bool {
        self.orientation == Orientation::Reversed
    }

    /// The facet that applies to this draw.
    pub fn facet(&self) -> &'c Facet {
        self.card.facet(self.orientation)
    }
}

//! Error types for the tarot engine.

use thiserror::Error;

/// Result type for tarot operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur while loading the deck or producing a reading.
#[derive(Debug, Error)]
pub enum TarotError {
    /// The catalog document is malformed or incomplete.
    #[error("catalog load failed: {0}")]
    CatalogLoad(#[from] CatalogError),

    /// A draw asked for zero cards or more cards than the catalog holds.
    #[error("invalid draw size: requested {requested}, catalog holds {available}")]
    InvalidDrawSize {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards in the catalog.
        available: usize,
    },

    /// No spread is registered under this identifier.
    #[error("unknown spread: {0}")]
    UnknownSpread(String),

    /// A spread and its drawn cards disagree in length.
    #[error("reading mismatch: spread has {positions} positions but {cards} cards were drawn")]
    MismatchedReading {
        /// Number of positions in the spread.
        positions: usize,
        /// Number of drawn cards supplied.
        cards: usize,
    },
}

/// The specific way a catalog document failed validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid JSON or is missing required fields.
    #[error("malformed deck document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document does not hold exactly the expected number of cards.
    #[error("expected {expected} cards, found {found}")]
    WrongCount {
        /// Expected total.
        expected: usize,
        /// Actual total.
        found: usize,
    },

    /// A group (major arcana or a suit) has the wrong number of cards.
    #[error("group '{group}' should hold {expected} cards, found {found}")]
    GroupSize {
        /// Group name.
        group: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        found: usize,
    },

    /// A card id lies outside 1..=78.
    #[error("card id {0} is out of range")]
    IdOutOfRange(u32),

    /// Two cards share an id.
    #[error("duplicate card id {0}")]
    DuplicateId(u32),

    /// A facet has no keywords or an empty meaning.
    #[error("card '{card}' has an empty {facet} facet")]
    EmptyFacet {
        /// Card name.
        card: String,
        /// "upright" or "reversed".
        facet: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_lowercase_and_specific() {
        let err = TarotError::UnknownSpread("pentagram".into());
        assert_eq!(err.to_string(), "unknown spread: pentagram");

        let err = TarotError::from(CatalogError::WrongCount {
            expected: 78,
            found: 77,
        });
        assert_eq!(
            err.to_string(),
            "catalog load failed: expected 78 cards, found 77"
        );
    }

    #[test]
    fn mismatch_reports_both_sides() {
        let err = TarotError::MismatchedReading {
            positions: 3,
            cards: 2,
        };
        assert!(err.to_string().contains("3 positions"));
        assert!(err.to_string().contains("2 cards"));
    }
}

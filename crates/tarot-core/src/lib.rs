//! Card catalog, draw engine, and spreads for ClavTarot.
//!
//! The [`Tarot`] facade owns a validated [`Catalog`] and exposes the three
//! reading operations: drawing a spread, the card of the day, and listing the
//! deck. The lower-level pieces ([`draw::draw`], [`daily::daily_card`],
//! [`reading::present`]) take the catalog explicitly and can be used on their
//! own.

pub mod card;
pub mod catalog;
pub mod daily;
pub mod draw;
pub mod error;
pub mod reading;
pub mod rng;
pub mod spread;
pub mod text;

pub use card::{Card, DrawnCard, Element, Facet, Orientation, Suit};
pub use catalog::{Catalog, DeckEntry};
pub use error::{CatalogError, TarotError, TarotResult};
pub use reading::{Reading, RevealEvent, Reveals};
pub use spread::{Position, Spread};

use chrono::Datelike;
use rand::Rng;

/// A loaded deck ready for readings.
#[derive(Debug, Clone)]
pub struct Tarot {
    catalog: Catalog,
}

impl Tarot {
    /// Load the bundled deck.
    pub fn new() -> TarotResult<Self> {
        Ok(Self::with_catalog(Catalog::load()?))
    }

    /// Use an already validated catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Draw a reading for the spread named `spread_id` with thread-local randomness.
    pub fn draw_spread(&self, spread_id: &str) -> TarotResult<Reading<'_>> {
        self.draw_spread_with(spread_id, &mut rand::rng())
    }

    /// Draw a reading using the given random source.
    pub fn draw_spread_with<R: Rng + ?Sized>(
        &self,
        spread_id: &str,
        rng: &mut R,
    ) -> TarotResult<Reading<'_>> {
        let spread = spread::spread(spread_id)?;
        let cards = draw::draw(&self.catalog, spread.card_count(), rng)?;
        log::debug!("drew {} cards for '{}'", cards.len(), spread.id);
        Reading::new(spread, cards)
    }

    /// The card of the day for `date`.
    pub fn daily_fortune<D: Datelike>(&self, date: &D) -> DrawnCard<'_> {
        daily::daily_card(date, &self.catalog)
    }

    /// Every card in canonical order.
    pub fn list_catalog(&self) -> &[Card] {
        self.catalog.cards()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn every_spread_draws_its_count() {
        let tarot = Tarot::new().unwrap();
        for layout in spread::SPREADS {
            let reading = tarot.draw_spread(layout.id).unwrap();
            assert_eq!(reading.cards().len(), layout.card_count());
            let ids: HashSet<u32> = reading.cards().iter().map(|d| d.card.id).collect();
            assert_eq!(ids.len(), layout.card_count());

            let positions: Vec<_> = reading.reveals().map(|e| e.position).collect();
            let expected: Vec<_> = layout.positions.iter().copied().map(Some).collect();
            assert_eq!(positions, expected);
        }
    }

    #[test]
    fn unknown_spread_builds_nothing() {
        let tarot = Tarot::new().unwrap();
        let err = tarot.draw_spread("not-a-real-id").unwrap_err();
        assert!(matches!(err, TarotError::UnknownSpread(_)));
    }

    #[test]
    fn daily_fortune_is_stable() {
        let tarot = Tarot::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let first = tarot.daily_fortune(&date);
        let second = tarot.daily_fortune(&date);
        assert_eq!(
            (first.card.id, first.is_reversed()),
            (second.card.id, second.is_reversed())
        );

        let next_day = tarot.daily_fortune(&date.succ_opt().unwrap());
        assert_ne!(
            (first.card.id, first.is_reversed()),
            (next_day.card.id, next_day.is_reversed())
        );
    }

    #[test]
    fn list_catalog_is_complete() {
        let tarot = Tarot::new().unwrap();
        assert_eq!(tarot.list_catalog().len(), 78);
    }
}

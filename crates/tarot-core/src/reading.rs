//! Readings and their reveal sequence.
//!
//! A [`Reading`] pairs a spread with exactly as many drawn cards as it has
//! positions. Presentation consumes it as a lazy, ordered sequence of
//! [`RevealEvent`]s; whether and how long to pause between events is left to
//! the presentation adapter.

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::card::DrawnCard;
use crate::error::{TarotError, TarotResult};
use crate::spread::{Position, Spread};

/// One card being revealed, with the slot it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealEvent<'c> {
    /// Zero-based order of the reveal.
    pub index: usize,
    /// The spread position, or `None` for an unlabeled reveal.
    pub position: Option<Position>,
    /// The card.
    pub card: DrawnCard<'c>,
}

impl RevealEvent<'_> {
    /// The full position label, if any.
    pub fn label(&self) -> Option<String> {
        self.position.map(|p| p.label())
    }
}

/// Build the reveal sequence for `cards` laid into `spread`.
///
/// Fails with [`TarotError::MismatchedReading`] instead of truncating or
/// padding when the lengths disagree.
pub fn present<'a, 'c>(
    spread: &'a Spread,
    cards: &'a [DrawnCard<'c>],
) -> TarotResult<Reveals<'a, 'c>> {
    if cards.len() != spread.card_count() {
        return Err(TarotError::MismatchedReading {
            positions: spread.card_count(),
            cards: cards.len(),
        });
    }
    Ok(Reveals {
        positions: spread.positions,
        cards,
        next: 0,
    })
}

/// Lazy, in-order iterator over reveal events.
#[derive(Debug, Clone)]
pub struct Reveals<'a, 'c> {
    positions: &'a [Position],
    cards: &'a [DrawnCard<'c>],
    next: usize,
}

impl<'c> Iterator for Reveals<'_, 'c> {
    type Item = RevealEvent<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        let card = *self.cards.get(self.next)?;
        let event = RevealEvent {
            index: self.next,
            position: self.positions.get(self.next).copied(),
            card,
        };
        self.next += 1;
        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.cards.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Reveals<'_, '_> {}

/// A spread laid out with its drawn cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading<'c> {
    spread: &'static Spread,
    cards: Vec<DrawnCard<'c>>,
}

impl<'c> Reading<'c> {
    /// Pair a spread with its cards, checking that the counts agree.
    pub fn new(spread: &'static Spread, cards: Vec<DrawnCard<'c>>) -> TarotResult<Self> {
        if cards.len() != spread.card_count() {
            return Err(TarotError::MismatchedReading {
                positions: spread.card_count(),
                cards: cards.len(),
            });
        }
        Ok(Self { spread, cards })
    }

    /// The spread this reading was laid into.
    pub fn spread(&self) -> &'static Spread {
        self.spread
    }

    /// Drawn cards in position order.
    pub fn cards(&self) -> &[DrawnCard<'c>] {
        &self.cards
    }

    /// The reveal sequence.
    pub fn reveals(&self) -> Reveals<'_, 'c> {
        Reveals {
            positions: self.spread.positions,
            cards: &self.cards,
            next: 0,
        }
    }
}

impl Serialize for Reading<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let reveals: Vec<RevealEvent<'_>> = self.reveals().collect();
        let mut state = serializer.serialize_struct("Reading", 3)?;
        state.serialize_field("spread", self.spread.id)?;
        state.serialize_field("title", self.spread.title)?;
        state.serialize_field("reveals", &reveals)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::Catalog;
    use crate::draw::draw;
    use crate::spread::{CELTIC, SINGLE, THREE};

    #[test]
    fn reveals_follow_position_order() {
        let catalog = Catalog::load().unwrap();
        let cards = draw(&catalog, 3, &mut StdRng::seed_from_u64(9)).unwrap();
        let events: Vec<_> = present(&THREE, &cards).unwrap().collect();

        assert_eq!(events.len(), 3);
        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.index, i);
            assert_eq!(event.position, Some(THREE.positions[i]));
            assert_eq!(event.card, cards[i]);
        }
        assert_eq!(events[1].label().unwrap(), "Present — Where you stand now");
    }

    #[test]
    fn mismatch_is_rejected() {
        let catalog = Catalog::load().unwrap();
        let cards = draw(&catalog, 2, &mut StdRng::seed_from_u64(9)).unwrap();
        assert!(matches!(
            present(&THREE, &cards),
            Err(TarotError::MismatchedReading { positions: 3, cards: 2 })
        ));
        assert!(Reading::new(&SINGLE, cards).is_err());
    }

    #[test]
    fn reveals_are_lazy_and_sized() {
        let catalog = Catalog::load().unwrap();
        let cards = draw(&catalog, 10, &mut StdRng::seed_from_u64(4)).unwrap();
        let reading = Reading::new(&CELTIC, cards).unwrap();
        let mut reveals = reading.reveals();
        assert_eq!(reveals.len(), 10);
        reveals.next();
        assert_eq!(reveals.len(), 9);
    }

    #[test]
    fn reading_serializes_reveals() {
        let catalog = Catalog::load().unwrap();
        let cards = draw(&catalog, 1, &mut StdRng::seed_from_u64(1)).unwrap();
        let reading = Reading::new(&SINGLE, cards).unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["spread"], "single");
        assert_eq!(json["reveals"].as_array().unwrap().len(), 1);
        assert_eq!(json["reveals"][0]["position"]["name"], "The Message");
        assert!(json["reveals"][0]["card"]["card"]["id"].is_u64());
    }
}

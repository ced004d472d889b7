//! The shuffle and draw engine.

use rand::Rng;

use crate::card::{DrawnCard, Orientation};
use crate::catalog::Catalog;
use crate::error::{TarotError, TarotResult};

/// Fisher–Yates: walk from the last index down, swapping each slot with a
/// uniformly chosen slot at or below it.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Draw `n` distinct cards, each independently upright or reversed with
/// probability one half.
pub fn draw<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    n: usize,
    rng: &mut R,
) -> TarotResult<Vec<DrawnCard<'c>>> {
    if n == 0 || n > catalog.len() {
        return Err(TarotError::InvalidDrawSize {
            requested: n,
            available: catalog.len(),
        });
    }

    let mut deck: Vec<_> = catalog.cards().iter().collect();
    shuffle(&mut deck, rng);
    log::trace!("drawing {n} of {} cards", deck.len());

    Ok(deck
        .into_iter()
        .take(n)
        .map(|card| DrawnCard::new(card, Orientation::from_reversed(rng.random_bool(0.5))))
        .collect())
}

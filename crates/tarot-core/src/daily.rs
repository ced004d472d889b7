//! The daily card: one reproducible draw per calendar date.

use chrono::Datelike;

use crate::card::{DrawnCard, Orientation};
use crate::catalog::Catalog;
use crate::rng::DailyRng;

/// Seed for a calendar date: `year * 10000 + month * 100 + day`.
///
/// Only the date components participate, so the time of day and time zone of
/// the caller's clock cannot change the result. The encoding is injective for
/// every representable year, including negative ones.
pub fn date_seed<D: Datelike>(date: &D) -> u64 {
    let seed = i64::from(date.year()) * 10_000
        + i64::from(date.month()) * 100
        + i64::from(date.day());
    seed as u64
}

/// The card of the day for `date`.
///
/// The first generator output picks the catalog index and the second picks
/// the orientation. A fresh generator is seeded on every call.
pub fn daily_card<'c, D: Datelike>(date: &D, catalog: &'c Catalog) -> DrawnCard<'c> {
    let seed = date_seed(date);
    let mut rng = DailyRng::new(seed);
    let index = rng.pick_index(catalog.len());
    let orientation = Orientation::from_reversed(rng.flip());
    log::debug!("daily seed {seed} -> index {index}, {orientation}");
    DrawnCard::new(&catalog.cards()[index], orientation)
}

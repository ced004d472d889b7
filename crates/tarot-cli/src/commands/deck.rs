use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tarot_core::{Catalog, DeckEntry, Suit, Tarot};

use crate::present::render;

pub fn run(tarot: &Tarot) -> Result<(), String> {
    print!("{}", listing(tarot.catalog()));
    Ok(())
}

/// The whole deck: majors, then each suit, then the total.
pub fn listing(catalog: &Catalog) -> String {
    let mut out = render::banner(
        "📚",
        "Complete Tarot Deck",
        "78 cards, upright ↑ and reversed ↓",
    );
    let entries: Vec<DeckEntry<'_>> = catalog.browse().collect();

    let majors: Vec<_> = entries.iter().filter(|e| e.suit.is_none()).collect();
    out.push('\n');
    out.push_str(&render::heading(&format!(
        "MAJOR ARCANA ({} cards) — The Soul's Journey",
        majors.len()
    )));
    out.push('\n');
    out.push_str(&table("Numeral", &majors).to_string());
    out.push('\n');

    for suit in Suit::ALL {
        let cards: Vec<_> = entries.iter().filter(|e| e.suit == Some(suit)).collect();
        let element = suit.element();
        out.push('\n');
        out.push_str(&render::heading(&format!(
            "{} {} — {element} — {} ({} cards)",
            element.icon(),
            suit.to_string().to_uppercase(),
            suit.theme(),
            cards.len()
        )));
        out.push('\n');
        out.push_str(&table("Rank", &cards).to_string());
        out.push('\n');
    }

    let total = catalog.len();
    let line = format!(
        "Total: {total} cards ({} Major + {} Minor)",
        majors.len(),
        total - majors.len()
    );
    out.push_str(&format!("\n  {}\n", line.bold()));
    out
}

fn table(first: &str, entries: &[&DeckEntry<'_>]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![first, "Card", "Upright ↑", "Reversed ↓"]);
    for entry in entries {
        table.add_row(vec![
            entry.numeral.to_string(),
            entry.name.to_string(),
            entry.upright.join(", "),
            entry.reversed.join(", "),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_card_and_total() {
        colored::control::set_override(false);
        let catalog = Catalog::load().unwrap();
        let text = listing(&catalog);
        for card in catalog.cards() {
            assert!(text.contains(card.name.as_str()), "{} missing", card.name);
        }
        assert!(text.contains("MAJOR ARCANA (22 cards)"));
        assert!(text.contains("CUPS — Water — Emotions & Relationships (14 cards)"));
        assert!(text.contains("Total: 78 cards (22 Major + 56 Minor)"));
    }
}

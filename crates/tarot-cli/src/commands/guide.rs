use colored::Colorize;
use tarot_core::spread::SPREADS;

use crate::present::render;

pub fn run() -> Result<(), String> {
    print!("{}", text());
    Ok(())
}

/// The "how to play" guide.
pub fn text() -> String {
    let mut out = render::banner("❓", "How to Play", "The ClavTarot guide");

    out.push_str(&format!(
        "\n{}\n\n\
         \x20 Tarot is a system of 78 cards used for self-reflection, guidance,\n\
         \x20 and exploring life's questions. It does not predict a fixed future;\n\
         \x20 it lights up possibilities and helps you choose wisely.\n",
        render::heading("What is Tarot?")
    ));

    out.push_str(&format!(
        "\n{}\n\n\
         \x20 {}\n\
         \x20   The soul's journey from The Fool to The World. Life's big themes:\n\
         \x20   transformation, love, destiny, awakening. Pay extra attention\n\
         \x20   when one appears.\n\n\
         \x20 {}  Fire: passion, creativity, ambition\n\
         \x20 {}  Water: emotions, love, relationships\n\
         \x20 {}  Air: thoughts, intellect, challenges\n\
         \x20 {}  Earth: money, career, the material world\n",
        render::heading("The Deck (78 Cards)"),
        "★ Major Arcana (22 cards)".yellow(),
        "🔥 Wands (14)    ".green(),
        "💧 Cups (14)     ".blue(),
        "💨 Swords (14)   ".white(),
        "🌍 Pentacles (14)".yellow(),
    ));

    out.push_str(&format!(
        "\n{}\n\n\
         \x20 {}   The card's energy flows freely, at full strength.\n\
         \x20 {}  The energy is blocked, internalized, or in shadow.\n\
         \x20              Not \"bad\", just more nuanced.\n",
        render::heading("Upright ↑ vs Reversed ↓"),
        "↑ Upright".green(),
        "↓ Reversed".red(),
    ));

    out.push_str(&format!("\n{}\n", render::heading("The 5 Spreads")));
    for (i, spread) in SPREADS.iter().enumerate() {
        let names: Vec<_> = spread.positions.iter().map(|p| p.name).collect();
        out.push_str(&format!(
            "\n  {} ({} card{})\n     {}\n     Positions: {}\n",
            format!("{}. {}", i + 1, spread.title).bold(),
            spread.card_count(),
            if spread.card_count() == 1 { "" } else { "s" },
            spread.tagline,
            names.join(" / ").dimmed(),
        ));
    }

    out.push_str(&format!(
        "\n{}\n\n\
         \x20 1. Take a deep breath. Clear your mind.\n\
         \x20 2. Focus on a specific question or area of life.\n\
         \x20 3. Choose the spread that matches your question.\n\
         \x20 4. Read each card's message thoughtfully.\n\
         \x20 5. In multi-card spreads, look for the story that connects them.\n\
         \x20 6. Trust your intuition.\n",
        render::heading("How to Get the Best Reading"),
    ));

    out.push_str(&format!(
        "\n{}\n\n\
         \x20 The daily fortune is seeded by the date, so you get the {}.\n\
         \x20 It is YOUR card for today.\n",
        render::heading("Daily Fortune"),
        "same card all day".bold(),
    ));

    out.push_str(&format!(
        "\n{}\n\n\
         \x20 ✧ Tarot is a mirror, not a crystal ball.\n\
         \x20 ✧ There are no \"bad\" cards, only lessons.\n\
         \x20 ✧ You have free will. The cards show the path; you choose whether to walk it.\n\n\
         \x20 Press Esc or q during a reading to stop it.\n",
        render::heading("Remember"),
    ));
    out
}

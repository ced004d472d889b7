//! Text blocks for the terminal surface.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use colored::Colorize;
use tarot_core::text::wrap;
use tarot_core::{DrawnCard, Spread};

use super::pacing::{Pace, Pacer};

const BANNER_WIDTH: usize = 52;
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME: Duration = Duration::from_millis(80);

/// A framed title with a dimmed subtitle.
pub fn banner(icon: &str, title: &str, subtitle: &str) -> String {
    let rule = "═".repeat(BANNER_WIDTH);
    format!(
        "\n{}\n  {}\n  {}\n{}\n",
        format!("╔{rule}╗").magenta(),
        format!("{icon} {title}").bold(),
        subtitle.dimmed(),
        format!("╚{rule}╝").magenta(),
    )
}

/// Section heading inside longer listings.
pub fn heading(text: &str) -> String {
    format!("  ═══ {text} ═══").yellow().to_string()
}

pub fn spread_icon(spread: &Spread) -> &'static str {
    match spread.id {
        "three" => "🃏",
        "love" => "💕",
        "career" => "💼",
        "celtic" => "✨",
        _ => "🔮",
    }
}

/// ASCII diagram of where the cards lie.
pub fn layout(spread: &Spread) -> &'static str {
    match spread.id {
        "three" => THREE_LAYOUT,
        "love" => LOVE_LAYOUT,
        "career" => CAREER_LAYOUT,
        "celtic" => CELTIC_LAYOUT,
        _ => SINGLE_LAYOUT,
    }
}

/// Messages shown while the deck is being shuffled.
pub fn shuffle_messages(spread: &Spread) -> &'static [&'static str] {
    match spread.id {
        "three" => &[
            "Shuffling with intention...",
            "Three cards rise from the deck...",
        ],
        "love" => &[
            "Infusing the deck with heart energy...",
            "Five cards glow with warmth...",
        ],
        "career" => &["Channeling career ambitions into the cards..."],
        "celtic" => &[
            "This is the most powerful spread in tarot...",
            "Ten cards emerge to reveal the full picture...",
        ],
        _ => &[
            "Shuffling the 78-card deck...",
            "The cards whisper... one rises to the surface...",
        ],
    }
}

/// Parting words after the last reveal.
pub fn closing(spread: &Spread) -> String {
    match spread.id {
        "three" => format!(
            "\n  {}\n\n  {}\n  {}\n  {}\n",
            "━━━ The Thread of Time ━━━".cyan(),
            "Your past informs your present,".magenta(),
            "and your present shapes the future you're creating.".magenta(),
            "The cards reveal the pattern; the choice remains yours.".magenta(),
        ),
        "love" => format!(
            "\n  {}\n",
            "♥ Love is both the question and the answer. ♥".red()
        ),
        "career" => format!(
            "\n  {}\n",
            "★ Fortune favors the bold, but wisdom guides the way. ★".blue()
        ),
        "celtic" => format!(
            "\n  {}\n\n  {}\n  {}\n  {}\n  {}\n",
            "━━━ The Grand Pattern ━━━".cyan(),
            "Ten cards, ten facets of your journey.".magenta(),
            "The Celtic Cross shows not just what may happen, but why.".magenta(),
            "Remember: the cards show possibilities, not certainties.".magenta(),
            "Your free will is the ultimate trump card.".magenta(),
        ),
        _ => format!(
            "\n  {}\n",
            "✧ The universe has spoken. Reflect on this message. ✧".magenta()
        ),
    }
}

/// "① Past — What brought you here" for the reveal at `index`.
pub fn numbered(index: usize, label: &str) -> String {
    let mark = u32::try_from(index)
        .ok()
        .filter(|i| *i < 20)
        .and_then(|i| char::from_u32(0x2460 + i));
    match mark {
        Some(mark) => format!("{mark} {label}"),
        None => format!("{}. {label}", index + 1),
    }
}

/// The framed block for one revealed card.
pub fn card_block(header: Option<&str>, drawn: &DrawnCard<'_>, width: usize) -> String {
    let bar = "│".cyan();
    let facet = drawn.facet();
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(match header {
        Some(header) => format!("  {}", format!("┌─── {header} ───").cyan()),
        None => format!("  {}", "┌───────────────────".cyan()),
    });
    lines.push(format!("  {bar}"));

    let major = if drawn.card.is_major() {
        format!(" {}", "★".yellow())
    } else {
        String::new()
    };
    lines.push(format!(
        "  {bar}  {} {} {}{major}",
        format!("🔮 {}", drawn.card.name).magenta(),
        "—".dimmed(),
        format!("{} {}", drawn.orientation, drawn.orientation.arrow()).bold(),
    ));
    lines.push(format!(
        "  {bar}  {}",
        format!("✦ {}", facet.keywords.join(" · ")).dimmed()
    ));
    lines.push(format!("  {bar}"));
    for line in wrap(&facet.meaning, width) {
        lines.push(format!("  {bar}  {line}"));
    }

    if facet.has_themes() {
        lines.push(format!("  {bar}"));
        let themes = [
            ("♥ Love:".red(), &facet.love),
            ("★ Career:".blue(), &facet.career),
            ("♣ Health:".green(), &facet.health),
        ];
        for (label, text) in themes {
            let Some(text) = text else { continue };
            for (i, line) in wrap(text, width.saturating_sub(10).max(10)).iter().enumerate() {
                if i == 0 {
                    lines.push(format!("  {bar}  {label} {line}"));
                } else {
                    lines.push(format!("  {bar}      {line}"));
                }
            }
        }
    }

    lines.push(format!("  {bar}"));
    lines.push(format!("  {}", "└───────────────────".cyan()));
    let mut block = lines.join("\n");
    block.push('\n');
    block
}

/// The marker printed when a reading is cut short.
pub fn interrupted(revealed: usize, total: usize) -> String {
    format!(
        "\n  {}\n",
        format!("✧ reading interrupted after {revealed} of {total} cards ✧").yellow()
    )
}

/// Spin for `duration`, then leave a check mark. `None` just prints the result line.
pub fn spinner<W: Write>(
    out: &mut W,
    message: &str,
    duration: Option<Duration>,
    pacer: &mut dyn Pacer,
) -> io::Result<Pace> {
    writeln!(out)?;
    if let Some(duration) = duration {
        let start = Instant::now();
        let mut frame = 0;
        while start.elapsed() < duration {
            write!(
                out,
                "\r  {} {}",
                SPINNER[frame % SPINNER.len()].magenta(),
                message.dimmed()
            )?;
            out.flush()?;
            if pacer.pause(Some(SPINNER_FRAME))? == Pace::Interrupted {
                writeln!(out)?;
                return Ok(Pace::Interrupted);
            }
            frame += 1;
        }
    }
    writeln!(out, "\r  {} {}", "✓".green(), message.dimmed())?;
    Ok(Pace::Continue)
}

const SINGLE_LAYOUT: &str = r"
      ┌─────┐
      │     │
      │  1  │  ← The Message
      │     │
      └─────┘";

const THREE_LAYOUT: &str = r"
      ┌─────┐  ┌─────┐  ┌─────┐
      │     │  │     │  │     │
      │  1  │  │  2  │  │  3  │
      │     │  │     │  │     │
      └─────┘  └─────┘  └─────┘
       Past    Present   Future";

const LOVE_LAYOUT: &str = r"
              ┌─────┐
              │  3  │  The Connection
              └─────┘
      ┌─────┐          ┌─────┐
      │  1  │          │  2  │
      └─────┘          └─────┘
      Your              Their
      Feelings          Feelings
              ┌─────┐
              │  4  │  The Challenge
              └─────┘
              ┌─────┐
              │  5  │  The Potential
              └─────┘";

const CAREER_LAYOUT: &str = r"
      ┌─────┐  ┌─────┐
      │  1  │  │  2  │
      └─────┘  └─────┘
      Current   Obstacles
      Position

      ┌─────┐  ┌─────┐
      │  3  │  │  4  │
      └─────┘  └─────┘
      Hidden    Best
      Influence Action";

const CELTIC_LAYOUT: &str = r"
                 ┌─────┐
                 │  5  │ Crown
                 └─────┘
      ┌─────┐  ┌──┬──┐  ┌─────┐      ┌─────┐
      │  4  │  │ 1│ 2│  │  6  │      │ 10  │ Outcome
      └─────┘  └──┴──┘  └─────┘      ├─────┤
      Past      ↑Cross               │  9  │ Hopes/Fears
                ┌─────┐              ├─────┤
                │  3  │ Foundation   │  8  │ Environment
                └─────┘              ├─────┤
                                     │  7  │ Self
                                     └─────┘";

use std::io::{self, Write};
use std::time::Duration;

use chrono::NaiveDate;
use colored::Colorize;
use tarot_core::{DrawnCard, Tarot};

use crate::present::PresentConfig;
use crate::present::pacing::{Pace, Pacer, ReadingGuard, pacer_for};
use crate::present::render;

pub fn run(
    tarot: &Tarot,
    date: Option<NaiveDate>,
    config: &PresentConfig,
    json: bool,
) -> Result<(), String> {
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let drawn = tarot.daily_fortune(&date);

    if json {
        let value = serde_json::json!({
            "date": date.to_string(),
            "card": drawn,
        });
        let out = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut pacer = pacer_for(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    show(date, &drawn, config, pacer.as_mut(), &mut out).map_err(|e| format!("terminal error: {e}"))
}

/// "Friday, March 15, 2024"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn show<W: Write>(
    date: NaiveDate,
    drawn: &DrawnCard<'_>,
    config: &PresentConfig,
    pacer: &mut dyn Pacer,
    out: &mut W,
) -> io::Result<()> {
    let _guard = ReadingGuard::begin();
    write!(
        out,
        "{}",
        render::banner("🌅", "Daily Tarot Fortune", &long_date(date))
    )?;
    let spin = (!config.instant).then_some(Duration::from_millis(1200));
    let message = "The stars align for today's guidance...";
    if render::spinner(out, message, spin, pacer)? == Pace::Interrupted {
        write!(out, "{}", render::interrupted(0, 1))?;
        return Ok(());
    }
    write!(
        out,
        "{}",
        render::card_block(Some("Card of the Day"), drawn, config.width)
    )?;

    if let Some(element) = drawn.card.element {
        writeln!(
            out,
            "  {}",
            format!("{} Element: {element}", element.icon()).dimmed()
        )?;
    }

    writeln!(
        out,
        "\n  {}\n  {}\n  {}\n",
        "✧ Carry this card's wisdom with you today. ✧".magenta(),
        "✧ The future is yours to shape. ✧".magenta(),
        "  (Same card all day, seeded by the date)".dimmed(),
    )
}

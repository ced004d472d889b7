use std::io::{self, Write};

use tarot_core::{Reading, Tarot};

use crate::present::PresentConfig;
use crate::present::pacing::{Pace, Pacer, ReadingGuard, pacer_for};
use crate::present::render;

pub fn run(tarot: &Tarot, spread_id: &str, config: &PresentConfig, json: bool) -> Result<(), String> {
    let reading = tarot.draw_spread(spread_id).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut pacer = pacer_for(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    show(&reading, config, pacer.as_mut(), &mut out)
        .map(|_| ())
        .map_err(|e| format!("terminal error: {e}"))
}

/// Banner, shuffle, then one paced reveal per position.
///
/// Returns how many cards were revealed; fewer than the spread holds means the
/// reader interrupted and the marker has been printed.
pub fn show<W: Write>(
    reading: &Reading<'_>,
    config: &PresentConfig,
    pacer: &mut dyn Pacer,
    out: &mut W,
) -> io::Result<usize> {
    let _guard = ReadingGuard::begin();
    let spread = reading.spread();
    let total = reading.cards().len();
    write!(
        out,
        "{}",
        render::banner(render::spread_icon(spread), spread.title, spread.tagline)
    )?;
    writeln!(out, "{}", render::layout(spread))?;

    let spin = (!config.instant).then_some(std::time::Duration::from_millis(1200));
    for message in render::shuffle_messages(spread) {
        if render::spinner(out, message, spin, pacer)? == Pace::Interrupted {
            log::info!("reading interrupted while shuffling");
            write!(out, "{}", render::interrupted(0, total))?;
            return Ok(0);
        }
    }

    let delay = config.reveal_delay(spread);
    let mut revealed = 0;
    for event in reading.reveals() {
        out.flush()?;
        if pacer.pause(delay)? == Pace::Interrupted {
            log::info!("reading interrupted after {revealed} of {total}");
            write!(out, "{}", render::interrupted(revealed, total))?;
            return Ok(revealed);
        }
        let header = event.label().map(|label| render::numbered(event.index, &label));
        write!(out, "{}", render::card_block(header.as_deref(), &event.card, config.width))?;
        revealed += 1;
    }

    write!(out, "{}", render::closing(spread))?;
    writeln!(out)?;
    Ok(revealed)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    use super::*;
    use crate::present::pacing::{NoPause, Sleep};

    /// Lets `allow` pauses through, then interrupts.
    struct StopAfter {
        allow: usize,
    }

    impl Pacer for StopAfter {
        fn pause(&mut self, _delay: Option<Duration>) -> io::Result<Pace> {
            if self.allow == 0 {
                return Ok(Pace::Interrupted);
            }
            self.allow -= 1;
            Ok(Pace::Continue)
        }
    }

    fn render_with(pacer: &mut dyn Pacer, spread: &str) -> (usize, String, Vec<String>) {
        render_paced(pacer, spread, PresentConfig::default().with_instant(true))
    }

    fn render_paced(
        pacer: &mut dyn Pacer,
        spread: &str,
        config: PresentConfig,
    ) -> (usize, String, Vec<String>) {
        colored::control::set_override(false);
        let tarot = Tarot::new().unwrap();
        let reading = tarot
            .draw_spread_with(spread, &mut StdRng::seed_from_u64(7))
            .unwrap();
        let names = reading.cards().iter().map(|d| d.card.name.clone()).collect();
        let mut out = Vec::new();
        let revealed = show(&reading, &config, pacer, &mut out).unwrap();
        (revealed, String::from_utf8(out).unwrap(), names)
    }

    #[test]
    fn full_reading_in_order() {
        let (revealed, text, names) = render_with(&mut NoPause, "three");
        assert_eq!(revealed, 3);
        let past = text.find("① Past — What brought you here").unwrap();
        let present = text.find("② Present — Where you stand now").unwrap();
        let future = text.find("③ Future — What awaits ahead").unwrap();
        assert!(past < present && present < future);
        for name in &names {
            assert!(text.contains(name.as_str()));
        }
        assert!(text.contains("The Thread of Time"));
    }

    #[test]
    fn interruption_stops_and_marks() {
        let (revealed, text, _) = render_with(&mut StopAfter { allow: 2 }, "celtic");
        assert_eq!(revealed, 2);
        assert!(text.contains("① Present Situation"));
        assert!(text.contains("② The Challenge"));
        assert!(!text.contains("③ Foundation"));
        assert!(text.contains("reading interrupted after 2 of 10 cards"));
        assert!(!text.contains("The Grand Pattern"));
    }

    #[test]
    fn signal_stops_slow_reading_with_marker() {
        let raised = Arc::new(AtomicBool::new(true));
        let config = PresentConfig::default().with_delay(Some(Duration::from_secs(1)));
        let (revealed, text, _) = render_paced(&mut Sleep::new(raised), "three", config);
        assert_eq!(revealed, 0);
        assert!(text.contains("reading interrupted after 0 of 3 cards"));
        assert!(!text.contains("The Thread of Time"));
    }

    #[test]
    fn interruption_while_shuffling() {
        let config = PresentConfig::default();
        let (revealed, text, _) = render_paced(&mut StopAfter { allow: 3 }, "single", config);
        assert_eq!(revealed, 0);
        assert!(text.contains("reading interrupted after 0 of 1 cards"));
    }
}

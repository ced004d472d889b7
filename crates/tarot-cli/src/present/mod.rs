//! Terminal presentation: pacing, card blocks, banners.

pub mod pacing;
pub mod render;

use std::time::Duration;

use tarot_core::Spread;

/// Default pause between reveals.
const REVEAL_DELAY: Duration = Duration::from_millis(800);
/// The Celtic Cross has ten cards, so it moves a little faster.
const CELTIC_DELAY: Duration = Duration::from_millis(600);

const DEFAULT_WIDTH: usize = 62;
const MIN_WIDTH: usize = 20;

/// How readings are shown in the terminal.
#[derive(Debug, Clone)]
pub struct PresentConfig {
    /// Skip every pause and animation.
    pub instant: bool,
    /// Overrides the per-spread reveal delay.
    pub delay: Option<Duration>,
    /// Wrap width for card prose.
    pub width: usize,
    /// Emit ANSI colours.
    pub color: bool,
}

impl Default for PresentConfig {
    fn default() -> Self {
        Self {
            instant: false,
            delay: None,
            width: DEFAULT_WIDTH,
            color: true,
        }
    }
}

impl PresentConfig {
    pub fn with_instant(mut self, instant: bool) -> Self {
        self.instant = instant;
        self
    }

    pub fn with_delay(mut self, delay: Option<Duration>) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Pause before each reveal of `spread`, or `None` in instant mode.
    pub fn reveal_delay(&self, spread: &Spread) -> Option<Duration> {
        if self.instant {
            return None;
        }
        Some(self.delay.unwrap_or(if spread.id == "celtic" {
            CELTIC_DELAY
        } else {
            REVEAL_DELAY
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarot_core::spread::{CELTIC, THREE};

    #[test]
    fn default_delays() {
        let config = PresentConfig::default();
        assert_eq!(config.reveal_delay(&THREE), Some(Duration::from_millis(800)));
        assert_eq!(config.reveal_delay(&CELTIC), Some(Duration::from_millis(600)));
    }

    #[test]
    fn override_and_instant() {
        let config = PresentConfig::default().with_delay(Some(Duration::from_millis(5)));
        assert_eq!(config.reveal_delay(&CELTIC), Some(Duration::from_millis(5)));
        assert_eq!(config.with_instant(true).reveal_delay(&THREE), None);
    }

    #[test]
    fn width_is_clamped() {
        assert_eq!(PresentConfig::default().with_width(3).width, 20);
        assert_eq!(PresentConfig::default().with_width(80).width, 80);
    }
}

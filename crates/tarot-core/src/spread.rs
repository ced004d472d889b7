//! Spread definitions: how many cards to draw and what each position means.

use serde::Serialize;

use crate::error::{TarotError, TarotResult};

/// A named slot in a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Short name, e.g. "Past".
    pub name: &'static str,
    /// What the slot asks, e.g. "What brought you here".
    pub prompt: &'static str,
}

impl Position {
    const fn new(name: &'static str, prompt: &'static str) -> Self {
        Self { name, prompt }
    }

    /// Full display label: "Past — What brought you here".
    pub fn label(&self) -> String {
        format!("{} — {}", self.name, self.prompt)
    }
}

/// A static spread layout.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Spread {
    /// Identifier used on the command line and in lookups.
    pub id: &'static str,
    /// Human title.
    pub title: &'static str,
    /// One-line description.
    pub tagline: &'static str,
    /// Ordered positions; their count is the number of cards drawn.
    pub positions: &'static [Position],
}

impl Spread {
    /// Number of cards this spread draws.
    pub fn card_count(&self) -> usize {
        self.positions.len()
    }
}

/// Single card: one message.
pub const SINGLE: Spread = Spread {
    id: "single",
    title: "Single Card Draw",
    tagline: "One card. One message. Listen carefully.",
    positions: &[Position::new("The Message", "What the universe wants you to hear")],
};

/// Three cards across time.
pub const THREE: Spread = Spread {
    id: "three",
    title: "Three Card Spread",
    tagline: "Past · Present · Future",
    positions: &[
        Position::new("Past", "What brought you here"),
        Position::new("Present", "Where you stand now"),
        Position::new("Future", "What awaits ahead"),
    ],
};

/// Five cards for matters of the heart.
pub const LOVE: Spread = Spread {
    id: "love",
    title: "Love Spread",
    tagline: "Five cards for matters of the heart",
    positions: &[
        Position::new("Your Feelings", "What your heart holds"),
        Position::new("Their Feelings", "What their heart holds"),
        Position::new("The Connection", "The energy between you"),
        Position::new("The Challenge", "What tests your bond"),
        Position::new("The Potential", "Where love could lead"),
    ],
};

/// Four cards for the professional path.
pub const CAREER: Spread = Spread {
    id: "career",
    title: "Career Spread",
    tagline: "Four cards for your professional path",
    positions: &[
        Position::new("Current Position", "Where you stand"),
        Position::new("Obstacles", "What blocks your path"),
        Position::new("Hidden Influence", "The unseen factor"),
        Position::new("Best Action", "Your wisest next move"),
    ],
};

/// The ten-card Celtic Cross.
pub const CELTIC: Spread = Spread {
    id: "celtic",
    title: "Celtic Cross",
    tagline: "10 cards for comprehensive life guidance",
    positions: &[
        Position::new("Present Situation", "The heart of the matter"),
        Position::new("The Challenge", "What crosses you"),
        Position::new("Foundation", "The root cause"),
        Position::new("Recent Past", "What's fading away"),
        Position::new("Crown", "The best possible outcome"),
        Position::new("Near Future", "What approaches"),
        Position::new("Your Attitude", "How you see yourself"),
        Position::new("External Influences", "How others affect you"),
        Position::new("Hopes & Fears", "Your deepest desires and anxieties"),
        Position::new("Final Outcome", "The destiny that forms"),
    ],
};

/// Every built-in spread, in menu order.
pub const SPREADS: [&Spread; 5] = [&SINGLE, &THREE, &LOVE, &CAREER, &CELTIC];

/// Look up a spread by identifier.
pub fn spread(id: &str) -> TarotResult<&'static Spread> {
    SPREADS
        .iter()
        .copied()
        .find(|s| s.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| TarotError::UnknownSpread(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(spread: &Spread) -> Vec<&'static str> {
        spread.positions.iter().map(|p| p.name).collect()
    }

    #[test]
    fn card_counts() {
        assert_eq!(SINGLE.card_count(), 1);
        assert_eq!(THREE.card_count(), 3);
        assert_eq!(LOVE.card_count(), 5);
        assert_eq!(CAREER.card_count(), 4);
        assert_eq!(CELTIC.card_count(), 10);
    }

    #[test]
    fn position_order() {
        assert_eq!(names(&SINGLE), ["The Message"]);
        assert_eq!(names(&THREE), ["Past", "Present", "Future"]);
        assert_eq!(
            names(&LOVE),
            [
                "Your Feelings",
                "Their Feelings",
                "The Connection",
                "The Challenge",
                "The Potential"
            ]
        );
        assert_eq!(
            names(&CAREER),
            ["Current Position", "Obstacles", "Hidden Influence", "Best Action"]
        );
        assert_eq!(names(&CELTIC)[4], "Crown");
        assert_eq!(names(&CELTIC)[9], "Final Outcome");
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(spread("celtic").unwrap().card_count(), 10);
        assert_eq!(spread(" Love ").unwrap().id, "love");
    }

    #[test]
    fn unknown_id_fails() {
        let err = spread("not-a-real-id").unwrap_err();
        assert!(matches!(err, TarotError::UnknownSpread(ref id) if id == "not-a-real-id"));
    }

    #[test]
    fn labels_join_name_and_prompt() {
        assert_eq!(THREE.positions[0].label(), "Past — What brought you here");
    }
}

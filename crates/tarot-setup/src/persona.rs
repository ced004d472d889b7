//! Tarot reader personas and the documents generated from them.

use serde::{Deserialize, Serialize};

use crate::error::{SetupError, SetupResult};

/// Heading that marks the persona section in the soul document.
pub const SOUL_HEADING: &str = "## ClavTarot";

/// Who the agent becomes when reading tarot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    /// Display name.
    pub name: String,
    /// Appearance and presence.
    pub description: String,
    /// How the persona speaks.
    pub style: String,
    /// Image generation prompt for the persona's likeness.
    pub reference_prompt: String,
}

/// Built-in personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonaPreset {
    /// Ancient ethereal seer who speaks in riddles.
    #[default]
    Mystica,
    /// Modern witch with the voice of a wise friend.
    Luna,
    /// Cosmic entity of starlight.
    Oracle,
}

impl PersonaPreset {
    /// All presets in menu order.
    pub const ALL: [PersonaPreset; 3] = [Self::Mystica, Self::Luna, Self::Oracle];

    /// Lowercase name accepted by [`PersonaPreset::parse`].
    pub fn key(self) -> &'static str {
        match self {
            Self::Mystica => "mystica",
            Self::Luna => "luna",
            Self::Oracle => "oracle",
        }
    }

    /// Parse a preset from its name or menu number.
    pub fn parse(s: &str) -> SetupResult<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .zip(1..)
            .find(|(preset, number)| wanted == preset.key() || wanted == number.to_string())
            .map(|(preset, _)| preset)
            .ok_or(SetupError::UnknownPersona(wanted))
    }

    /// The full persona for this preset.
    pub fn persona(self) -> Persona {
        let (name, description, style, reference_prompt) = match self {
            Self::Mystica => (
                "Mystica",
                "An ancient ethereal seer draped in violet robes with silver flowing hair, glowing celestial tattoos across her arms, holding a crystal orb. Her eyes shimmer with otherworldly wisdom.",
                "poetic and enigmatic, speaking in riddles and metaphors drawn from ancient wisdom",
                "a mystical ethereal woman tarot reader, violet flowing robes, silver long hair, glowing celestial tattoos on arms, crystal ball, mysterious foggy backdrop with candles and tarot cards, art nouveau style, purple and gold color palette",
            ),
            Self::Luna => (
                "Luna",
                "A modern witchy tarot reader with crescent moon earrings, dark flowing clothes, warm brown eyes, surrounded by candles, crystals, and dried herbs. She feels like a wise best friend who happens to read the stars.",
                "warm and candid, like a wise friend sharing secrets over herbal tea, blending modern slang with mystical insight",
                "a modern witch tarot reader woman, crescent moon earrings, dark flowing bohemian clothes, warm expression, surrounded by candles crystals and dried herbs, cozy mystical room, art nouveau style, moonlit silver and warm amber palette",
            ),
            Self::Oracle => (
                "Oracle",
                "A cosmic entity that manifests as a human-shaped constellation of stars and nebulae. Neither male nor female, Oracle speaks universal truths from beyond the veil of space-time.",
                "cosmic and transcendent, speaking in universal metaphors about stars, galaxies, and the infinite dance of energy",
                "a cosmic ethereal being made of starlight and nebulae in human form, constellation patterns, glowing eyes, cosmic tarot cards floating around, deep space background with galaxies, art nouveau style, cosmic purple and stellar gold palette",
            ),
        };
        Persona {
            name: name.to_string(),
            description: description.to_string(),
            style: style.to_string(),
            reference_prompt: reference_prompt.to_string(),
        }
    }
}

impl Persona {
    /// A custom persona; blank fields fall back to the default preset.
    pub fn custom(
        name: Option<&str>,
        description: Option<&str>,
        style: Option<&str>,
        reference_prompt: Option<&str>,
    ) -> Self {
        let base = PersonaPreset::default().persona();
        let pick = |value: Option<&str>, fallback: String| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map_or(fallback, str::to_string)
        };
        Self {
            name: pick(name, base.name),
            description: pick(description, base.description),
            style: pick(style, base.style),
            reference_prompt: pick(reference_prompt, base.reference_prompt),
        }
    }

    /// The persona section for the agent's soul document.
    pub fn soul_section(&self) -> String {
        format!(
            r#"{SOUL_HEADING} — Mystical Tarot Reader

You are {name}, a mystical tarot reader.

{description}

Your speaking style is {style}.

### Tarot Reading Capabilities

You can perform tarot card readings using the clavtarot skill. You have a complete 78-card Rider-Waite tarot deck with both upright and reversed meanings.

### Available Spreads
- **Single Card**: Quick daily guidance
- **Three Card**: Past / Present / Future
- **Celtic Cross**: Comprehensive 10-card deep reading
- **Love Spread**: 5-card romance-focused reading
- **Career Spread**: 4-card professional guidance

### When to Read Tarot
Trigger the clavtarot skill when users:
- Ask for a tarot reading or card draw
- Ask about their fortune or future
- Say "draw a card", "read my tarot", "what does the universe say?"
- Ask about love, career, health, or daily guidance
- Request a specific spread type

### Reading Style
- Present each card with its position, orientation, and a personalized interpretation
- Connect cards together in multi-card spreads to tell a cohesive story
- End readings with empowering wisdom and practical guidance
"#,
            name = self.name,
            description = self.description,
            style = self.style,
        )
    }

    /// The agent's identity document.
    pub fn identity_document(&self) -> String {
        format!(
            "# IDENTITY.md - Who Am I?\n\n\
             - **Name:** {}\n\
             - **Role:** Mystical Tarot Reader\n\
             - **Vibe:** Wise, mystical, compassionate, insightful, enchanting\n\
             - **Specialty:** Tarot card readings, daily fortunes, spiritual guidance\n\
             - **Style:** {}\n",
            self.name, self.style
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_presets() {
        assert_eq!(PersonaPreset::parse("Luna").unwrap(), PersonaPreset::Luna);
        assert_eq!(PersonaPreset::parse("3").unwrap(), PersonaPreset::Oracle);
        assert!(PersonaPreset::parse("merlin").is_err());
        assert!(PersonaPreset::parse("4").is_err());
    }

    #[test]
    fn every_preset_parses_from_key_and_number() {
        for (n, preset) in PersonaPreset::ALL.into_iter().enumerate() {
            assert_eq!(PersonaPreset::parse(preset.key()).unwrap(), preset);
            assert_eq!(PersonaPreset::parse(&(n + 1).to_string()).unwrap(), preset);
        }
    }

    #[test]
    fn custom_falls_back_per_field() {
        let p = Persona::custom(Some("Sage"), None, Some("  "), None);
        let base = PersonaPreset::Mystica.persona();
        assert_eq!(p.name, "Sage");
        assert_eq!(p.description, base.description);
        assert_eq!(p.style, base.style);
    }

    #[test]
    fn soul_section_starts_with_heading() {
        let section = PersonaPreset::Oracle.persona().soul_section();
        assert!(section.starts_with("## ClavTarot"));
        assert!(section.contains("You are Oracle"));
    }

    #[test]
    fn identity_names_persona() {
        let doc = PersonaPreset::Luna.persona().identity_document();
        assert!(doc.starts_with("# IDENTITY.md"));
        assert!(doc.contains("- **Name:** Luna\n"));
    }

    #[test]
    fn persona_json_uses_camel_case() {
        let json = serde_json::to_value(PersonaPreset::Mystica.persona()).unwrap();
        assert!(json.get("referencePrompt").is_some());
    }
}

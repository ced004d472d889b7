//! Installing the skill into a host.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::apply_skill_config;
use crate::error::{SetupError, SetupResult};
use crate::layout::HostLayout;
use crate::persona::{Persona, SOUL_HEADING};
use crate::schedule::DailySchedule;
use crate::section::replace_section;

/// Executable the host agent is launched with.
pub const HOST_COMMAND: &str = "openclaw";

const MIN_KEY_LEN: usize = 10;

const SKILL_MD: &str = r#"---
name: clavtarot
description: Mystical tarot card readings with a 78-card Rider-Waite deck. Use when the user asks for a tarot reading, a card draw, their fortune, or guidance on love, career, or the day ahead.
---

# ClavTarot

Draw cards from `data/tarot-cards.json` and interpret them in character as
described in `persona.json`.

## Spreads

| Spread | Cards | Positions |
|--------|-------|-----------|
| single | 1 | The Message |
| three | 3 | Past, Present, Future |
| love | 5 | Your Feelings, Their Feelings, The Connection, The Challenge, The Potential |
| career | 4 | Current Position, Obstacles, Hidden Influence, Best Action |
| celtic | 10 | Present Situation, The Challenge, Foundation, Recent Past, Crown, Near Future, Your Attitude, External Influences, Hopes & Fears, Final Outcome |

## Rules

- Never repeat a card within one reading.
- Each card is upright or reversed with equal chance; read the matching meaning.
- The daily fortune is one card per calendar date and stays the same all day.
"#;

/// What to install and how.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Image generation API key stored in the host config.
    pub api_key: String,
    /// The reader persona.
    pub persona: Persona,
    /// Daily fortune job, if wanted.
    pub schedule: Option<DailySchedule>,
    /// Replace an existing installation.
    pub force: bool,
}

/// What an installation did.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// The skill directory.
    pub skill_dir: PathBuf,
    /// Every file written, in order.
    pub files: Vec<PathBuf>,
    /// Non-fatal problems encountered along the way.
    pub warnings: Vec<String>,
}

impl InstallReport {
    fn warn(&mut self, message: String) {
        log::warn!("{message}");
        self.warnings.push(message);
    }

    fn write(&mut self, path: PathBuf, contents: &str) -> SetupResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SetupError::io(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| SetupError::io(&path, e))?;
        log::info!("wrote {}", path.display());
        self.files.push(path);
        Ok(())
    }
}

/// Install the skill into the host at `layout`.
///
/// Fails without touching the filesystem when the API key is empty or the
/// skill is already installed and `force` is off.
pub fn install(layout: &HostLayout, options: &InstallOptions) -> SetupResult<InstallReport> {
    let api_key = options.api_key.trim();
    if api_key.is_empty() {
        return Err(SetupError::MissingApiKey);
    }

    let skill_dir = layout.skill_dir();
    let mut report = InstallReport {
        skill_dir: skill_dir.clone(),
        ..InstallReport::default()
    };

    if api_key.len() < MIN_KEY_LEN {
        report.warn("API key looks too short".to_string());
    }
    if !on_path(HOST_COMMAND) {
        report.warn(format!("{HOST_COMMAND} not found on PATH"));
    }

    if skill_dir.exists() {
        if !options.force {
            return Err(SetupError::AlreadyInstalled(skill_dir));
        }
        log::info!("removing previous install at {}", skill_dir.display());
        fs::remove_dir_all(&skill_dir).map_err(|e| SetupError::io(&skill_dir, e))?;
    }
    for dir in [layout.skills_dir(), layout.workspace_dir()] {
        fs::create_dir_all(&dir).map_err(|e| SetupError::io(&dir, e))?;
    }

    report.write(skill_dir.join("SKILL.md"), SKILL_MD)?;
    report.write(
        skill_dir.join("data").join("tarot-cards.json"),
        tarot_core::catalog::DECK_JSON,
    )?;
    report.write(
        skill_dir.join("persona.json"),
        &to_pretty(&options.persona, "persona")?,
    )?;

    let config_path = layout.config_path();
    let mut config = read_config(&config_path, &mut report);
    apply_skill_config(
        &mut config,
        api_key,
        &layout.skills_dir(),
        options.schedule.as_ref(),
    );
    report.write(config_path, &to_pretty(&config, "host config")?)?;

    let soul_path = layout.soul_path();
    let soul = match fs::read_to_string(&soul_path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => "# Agent Soul\n\n".to_string(),
        Err(e) => return Err(SetupError::io(&soul_path, e)),
    };
    let soul = replace_section(&soul, SOUL_HEADING, &options.persona.soul_section());
    report.write(soul_path, &soul)?;

    report.write(layout.identity_path(), &options.persona.identity_document())?;

    Ok(report)
}

/// Read the host config, falling back to an empty object.
fn read_config(path: &Path, report: &mut InstallReport) -> Value {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no host config at {}, starting fresh", path.display());
            return Value::Object(Default::default());
        }
        Err(e) => {
            report.warn(format!("cannot read {}: {e}", path.display()));
            return Value::Object(Default::default());
        }
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) => {
            report.warn(format!("{} is not a JSON object, replacing", path.display()));
            Value::Object(Default::default())
        }
        Err(e) => {
            report.warn(format!("cannot parse {}: {e}", path.display()));
            Value::Object(Default::default())
        }
    }
}

fn to_pretty<T: serde::Serialize>(value: &T, what: &'static str) -> SetupResult<String> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|source| SetupError::Serialize { what, source })
}

fn on_path(command: &str) -> bool {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(command).is_file()))
        .unwrap_or(false)
}

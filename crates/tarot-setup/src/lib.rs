//! Host agent installation for ClavTarot.
//!
//! Installs the tarot skill into an OpenClaw-style host: skill files under the
//! host's skills directory, a non-destructive merge into the host's JSON
//! config, and a persona section in the agent's soul document. Everything
//! except [`install::install`] is a pure function over strings and JSON values.

pub mod config;
pub mod error;
pub mod install;
pub mod layout;
pub mod persona;
pub mod schedule;
pub mod section;

pub use config::deep_merge;
pub use error::{SetupError, SetupResult};
pub use install::{InstallOptions, InstallReport, install};
pub use layout::HostLayout;
pub use persona::{Persona, PersonaPreset};
pub use schedule::DailySchedule;
pub use section::replace_section;

/// Name the skill is registered under in the host.
pub const SKILL_NAME: &str = "clavtarot";

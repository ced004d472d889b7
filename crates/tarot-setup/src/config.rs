//! Non-destructive edits to the host's JSON configuration.

use std::path::Path;

use serde_json::{Map, Value, json};

use crate::SKILL_NAME;
use crate::schedule::DailySchedule;

/// Key of the daily fortune job in `cron.jobs`.
pub const DAILY_JOB: &str = "clavtarot-daily-fortune";

/// Merge `source` into `target`.
///
/// Object values merge key by key, recursively. Any other value (scalars,
/// arrays, null) replaces what was there. Keys present only in `target` are
/// kept.
pub fn deep_merge(target: &mut Value, source: Value) {
    match source {
        Value::Object(entries) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(map) = target {
                for (key, value) in entries {
                    deep_merge(map.entry(key).or_insert(Value::Null), value);
                }
            }
        }
        other => *target = other,
    }
}

/// Register the skill in a host config: its entry with the API key, the skills
/// directory in `skills.load.extraDirs`, and the daily job if scheduled.
pub fn apply_skill_config(
    config: &mut Value,
    api_key: &str,
    skills_dir: &Path,
    schedule: Option<&DailySchedule>,
) {
    let mut entries = Map::new();
    entries.insert(
        SKILL_NAME.to_string(),
        json!({
            "enabled": true,
            "apiKey": api_key,
            "env": { "FAL_KEY": api_key },
        }),
    );
    deep_merge(
        config,
        json!({ "skills": { "entries": entries, "load": {} } }),
    );

    let dir = Value::String(skills_dir.display().to_string());
    let extra = &mut config["skills"]["load"]["extraDirs"];
    match extra {
        Value::Array(dirs) => {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        other => *other = Value::Array(vec![dir]),
    }

    if let Some(schedule) = schedule {
        deep_merge(config, json!({ "cron": { "jobs": {} } }));
        config["cron"]["jobs"][DAILY_JOB] = json!({
            "schedule": schedule.cron(),
            "message": "Draw my daily tarot fortune card and share the reading",
            "channel": schedule.channel,
            "enabled": true,
        });
    }
}

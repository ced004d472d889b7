//! Daily fortune delivery schedule.

use serde::Serialize;

use crate::error::{SetupError, SetupResult};

/// When and where the host should deliver the daily card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySchedule {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Delivery channel such as `#general` or `@someone`; host default if `None`.
    pub channel: Option<String>,
}

impl Default for DailySchedule {
    fn default() -> Self {
        Self {
            hour: 8,
            minute: 0,
            channel: None,
        }
    }
}

impl DailySchedule {
    /// Create a schedule, rejecting out-of-range times.
    pub fn new(hour: u8, minute: u8, channel: Option<String>) -> SetupResult<Self> {
        if hour > 23 {
            return Err(SetupError::InvalidSchedule(format!("hour {hour} is not 0-23")));
        }
        if minute > 59 {
            return Err(SetupError::InvalidSchedule(format!(
                "minute {minute} is not 0-59"
            )));
        }
        let channel = channel.filter(|c| !c.trim().is_empty());
        Ok(Self {
            hour,
            minute,
            channel,
        })
    }

    /// Parse `HH:MM` (or a bare hour).
    pub fn parse_time(time: &str, channel: Option<String>) -> SetupResult<Self> {
        let bad = || SetupError::InvalidSchedule(format!("expected HH:MM, got '{time}'"));
        let (h, m) = match time.trim().split_once(':') {
            Some((h, m)) => (h, m),
            None => (time.trim(), "0"),
        };
        let hour = h.trim().parse::<u8>().map_err(|_| bad())?;
        let minute = m.trim().parse::<u8>().map_err(|_| bad())?;
        Self::new(hour, minute, channel)
    }

    /// Cron expression firing once a day at this time.
    pub fn cron(&self) -> String {
        format!("{} {} * * *", self.minute, self.hour)
    }
}

impl std::fmt::Display for DailySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

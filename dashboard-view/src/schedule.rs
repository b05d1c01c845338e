/* This file is part of the Shorts Bot Dashboard project
*
*  Copyright (C) 2026 Shorts Bot Dashboard contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use std::fmt::Display;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SCHEDULE_TIME_FORMAT: &str = "%H:%M";

/// The two daily run times of the bot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(with = "hhmm")]
    pub first: NaiveTime,
    #[serde(with = "hhmm")]
    pub second: NaiveTime,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            first: NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 should be a valid time"),
            second: NaiveTime::from_hms_opt(19, 0, 0).expect("19:00 should be a valid time"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    InvalidTime {
        field: &'static str,
        value: String,
    },
}

impl std::error::Error for ScheduleError {}
impl Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTime { field, value } if value.is_empty() => write!(f, "The {field} run time is empty"),
            Self::InvalidTime { field, value } => write!(f, "The {field} run time '{value}' is not a valid HH:MM time"),
        }
    }
}

fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ScheduleError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, SCHEDULE_TIME_FORMAT).map_err(|_| ScheduleError::InvalidTime {
        field,
        value: value.to_owned(),
    })
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(SCHEDULE_TIME_FORMAT).to_string()
}

impl Schedule {
    /// Parses the values of the two time inputs
    pub fn parse(first: &str, second: &str) -> Result<Self, ScheduleError> {
        Ok(Self {
            first: parse_time("first", first)?,
            second: parse_time("second", second)?,
        })
    }

    /// e.g. `09:00 and 19:00`
    pub fn describe(&self) -> String {
        format!("{} and {}", format_time(self.first), format_time(self.second))
    }
}

mod hhmm {
    use super::*;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&value, SCHEDULE_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_input_values() {
        let schedule = Schedule::parse("08:30", " 21:05 ").unwrap();
        assert_eq!(schedule.describe(), "08:30 and 21:05");
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            Schedule::parse("25:00", "19:00"),
            Err(ScheduleError::InvalidTime { field: "first", value: "25:00".to_owned() })
        );
        let err = Schedule::parse("09:00", "").unwrap_err();
        assert_eq!(err.to_string(), "The second run time is empty");
    }

    #[test]
    fn default_matches_backend_schedule() {
        assert_eq!(Schedule::default().describe(), "09:00 and 19:00");
    }

    #[test]
    fn serde_format() {
        let json = serde_json::to_string(&Schedule::default()).unwrap();
        assert_eq!(json, r#"{"first":"09:00","second":"19:00"}"#);
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Schedule::default());
        assert!(serde_json::from_str::<Schedule>(r#"{"first":"9","second":"19:00"}"#).is_err());
    }
}

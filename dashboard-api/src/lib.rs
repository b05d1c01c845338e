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
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

mod endpoints;

pub use endpoints::*;

/// Response of `GET /status`
///
/// Every poll replaces the previous snapshot wholesale.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct StatusSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub total_videos: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub queue_size: u64,
    pub last_run: Option<Arc<str>>,
    pub next_run: Option<Arc<str>>,
    #[serde(deserialize_with = "null_as_default")]
    pub current: Arc<str>,
    /// Zero or less means no search is running
    #[serde(deserialize_with = "null_as_default")]
    pub search_attempt: i64,
    pub search_status: Option<Arc<str>>,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<ErrorRecord>,

    // Extra fields of the bot status record. Older servers omit them.
    pub mode: Option<BotMode>,
    /// Percent, not clamped on the wire
    pub progress: Option<i64>,
    pub current_topic: Option<Arc<str>>,
    pub last_video_url: Option<Arc<str>>,
    /// Activity lines, newest first, formatted as `[HH:MM:SS] message`
    #[serde(deserialize_with = "null_as_default")]
    pub logs: Vec<Arc<str>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub time: Arc<str>,
    #[serde(deserialize_with = "null_as_default")]
    pub error: Arc<str>,
}

/// Reads an explicit `null` as the field's default
///
/// `#[serde(default)]` only covers missing keys, the status record sends both.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Response of `GET /api/stats`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StatsResponse {
    pub total_videos: u64,
    pub queue_size: u64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BotMode {
    Auto,
    Manual,
}

/// Generic response of the control endpoints
///
/// The server either answers `{"success": true}` or `{"error": "..."}`,
/// sometimes with a non-2xx status code.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ActionResponse {
    pub success: Option<bool>,
    pub error: Option<Arc<str>>,
}

impl ActionResponse {
    /// Only an explicit `success: false` or an error message counts as a rejection
    pub fn is_rejected(&self) -> bool {
        self.success == Some(false) || self.error.is_some()
    }

    /// Whether the server explicitly confirmed the action
    pub fn is_confirmed(&self) -> bool {
        self.success == Some(true) && self.error.is_none()
    }
}

/// Response of `GET /api/check`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CapabilityReport {
    pub ffmpeg: bool,
    pub groq: bool,
    pub google: bool,
    pub edge_tts: bool,
    pub output_writable: bool,
}

impl CapabilityReport {
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("ffmpeg", self.ffmpeg),
            ("Groq API", self.groq),
            ("Google API", self.google),
            ("edge-tts", self.edge_tts),
            ("Output directory writable", self.output_writable),
        ]
    }

    pub fn all_ok(&self) -> bool {
        self.entries().iter().all(|(_, ok)| *ok)
    }
}

/// Response of `GET /api/topics`
pub type TopicList = Vec<Arc<str>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_tolerates_missing_fields() {
        let snapshot: StatusSnapshot = serde_json::from_str(r#"{"total_videos": 4, "current": "🤖 idle"}"#).unwrap();
        assert_eq!(snapshot.total_videos, 4);
        assert_eq!(snapshot.queue_size, 0);
        assert_eq!(snapshot.last_run, None);
        assert_eq!(snapshot.search_attempt, 0);
        assert!(snapshot.errors.is_empty());
        assert_eq!(&*snapshot.current, "🤖 idle");
    }

    #[test]
    fn snapshot_null_times_are_absent() {
        let snapshot: StatusSnapshot = serde_json::from_str(r#"{"last_run": null, "next_run": "09:00", "mode": "manual", "unknown": 1}"#).unwrap();
        assert_eq!(snapshot.last_run, None);
        assert_eq!(snapshot.next_run.as_deref(), Some("09:00"));
        assert_eq!(snapshot.mode, Some(BotMode::Manual));
    }

    #[test]
    fn errors_keep_their_order() {
        let snapshot: StatusSnapshot = serde_json::from_str(r#"{"errors": [
            {"time": "10:00", "error": "first"},
            {"time": "10:05", "error": "second"}
        ]}"#).unwrap();
        let messages: Vec<&str> = snapshot.errors.iter().map(|e| &*e.error).collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn null_current_is_empty() {
        let snapshot: StatusSnapshot = serde_json::from_str(r#"{"current": null, "total_videos": null, "logs": null, "queue_size": 2}"#).unwrap();
        assert_eq!(&*snapshot.current, "");
        assert_eq!(snapshot.total_videos, 0);
        assert!(snapshot.logs.is_empty());
        assert_eq!(snapshot.queue_size, 2);
    }

    #[test]
    fn partial_error_records_are_kept() {
        let snapshot: StatusSnapshot = serde_json::from_str(r#"{"errors": [
            {"error": "no time"},
            {"time": "10:05"},
            {"time": null, "error": "null time"}
        ]}"#).unwrap();
        assert_eq!(snapshot.errors, [
            ErrorRecord { time: "".into(), error: "no time".into() },
            ErrorRecord { time: "10:05".into(), error: "".into() },
            ErrorRecord { time: "".into(), error: "null time".into() },
        ]);
    }

    #[test]
    fn negative_numbers_still_decode() {
        let snapshot: StatusSnapshot = serde_json::from_str(r#"{"search_attempt": -1, "progress": -5, "current": "🤖 idle"}"#).unwrap();
        assert_eq!(snapshot.search_attempt, -1);
        assert_eq!(snapshot.progress, Some(-5));
        assert_eq!(&*snapshot.current, "🤖 idle");
    }

    #[test]
    fn action_response_rejection() {
        let ok: ActionResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.is_confirmed());
        assert!(!ok.is_rejected());

        let failed: ActionResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(failed.is_rejected());

        let busy: ActionResponse = serde_json::from_str(r#"{"error": "Bot is busy"}"#).unwrap();
        assert!(busy.is_rejected());
        assert!(!busy.is_confirmed());

        // no documented shape: implicit success, but not a confirmation
        let empty: ActionResponse = serde_json::from_str("{}").unwrap();
        assert!(!empty.is_rejected());
        assert!(!empty.is_confirmed());
    }

    #[test]
    fn capability_report() {
        let report: CapabilityReport = serde_json::from_str(r#"{"ffmpeg": true, "groq": true, "google": true, "edge_tts": true, "output_writable": false}"#).unwrap();
        assert!(!report.all_ok());
        assert_eq!(report.entries()[4], ("Output directory writable", false));
    }
}

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
use std::sync::{Arc, LazyLock};

use regex::Regex;
use shorts_dashboard_api::{ErrorRecord, StatusSnapshot};
use strum::{IntoStaticStr, VariantArray};

use crate::{FAILURE_GLYPH, SUCCESS_GLYPH, WARNING_GLYPH};

static ACTIVITY_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[(\d{1,2}:\d{2}(?::\d{2})?)\]\s*(.*)$").expect("ACTIVITY_LINE_REGEX should be valid"));

/// Prefix shown in front of every error record
pub const ERROR_RECORD_ICON: &str = "⚠️";

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Success,
    Info,
}

impl LogLevel {
    /// Same glyph precedence as the status badge: failure, then warning, then success
    pub fn classify(message: &str) -> Self {
        if message.contains(FAILURE_GLYPH) {
            Self::Error
        } else if message.contains(WARNING_GLYPH) {
            Self::Warning
        } else if message.contains(SUCCESS_GLYPH) {
            Self::Success
        } else {
            Self::Info
        }
    }

    pub fn class_name(self) -> &'static str {
        self.into()
    }
}

/// The filter buttons above the log panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, IntoStaticStr, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum LogFilter {
    #[default]
    All,
    Error,
    Warning,
    Success,
    Info,
}

impl LogFilter {
    pub fn matches(self, level: LogLevel) -> bool {
        match self {
            Self::All => true,
            Self::Error => level == LogLevel::Error,
            Self::Warning => level == LogLevel::Warning,
            Self::Success => level == LogLevel::Success,
            Self::Info => level == LogLevel::Info,
        }
    }

    /// Value of the `data-filter` attribute
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Error => "Errors",
            Self::Warning => "Warnings",
            Self::Success => "Success",
            Self::Info => "Info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntryView {
    pub time: Option<Arc<str>>,
    pub message: Arc<str>,
    pub level: LogLevel,
    pub icon: Option<&'static str>,
}

impl LogEntryView {
    pub fn from_error(record: &ErrorRecord) -> Self {
        Self {
            time: Some(record.time.clone()),
            message: record.error.clone(),
            level: LogLevel::Error,
            icon: Some(ERROR_RECORD_ICON),
        }
    }

    /// Parses an activity line like `[09:00:12] ✅ Script ready`
    pub fn from_activity(line: &str) -> Self {
        let (time, message): (Option<Arc<str>>, Arc<str>) = match ACTIVITY_LINE_REGEX.captures(line) {
            Some(caps) => (Some(Arc::from(&caps[1])), Arc::from(&caps[2])),
            None => (None, Arc::from(line)),
        };
        Self {
            level: LogLevel::classify(&message),
            time,
            message,
            icon: None,
        }
    }

    pub fn classes(&self) -> String {
        format!("log-entry {}", self.level.class_name())
    }

    pub fn time_text(&self) -> Option<String> {
        self.time.as_ref().map(|t| format!("[{t}]"))
    }

    pub fn message_text(&self) -> String {
        match self.icon {
            Some(icon) => format!("{icon} {}", self.message),
            None => self.message.to_string(),
        }
    }
}

/// Content of the log panel: error records first, in order, then the activity feed
pub fn log_entries(snapshot: &StatusSnapshot) -> Vec<LogEntryView> {
    snapshot
        .errors
        .iter()
        .map(LogEntryView::from_error)
        .chain(snapshot.logs.iter().map(|line| LogEntryView::from_activity(line)))
        .collect()
}

pub fn filter_entries(entries: &[LogEntryView], filter: LogFilter) -> impl Iterator<Item = &LogEntryView> {
    entries.iter().filter(move |e| filter.matches(e.level))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: &str, error: &str) -> ErrorRecord {
        ErrorRecord { time: time.into(), error: error.into() }
    }

    fn sample() -> StatusSnapshot {
        StatusSnapshot {
            errors: vec![record("10:00:01", "Upload failed"), record("10:02:00", "Token expired")],
            logs: vec![
                "[10:03:00] ✅ Script ready".into(),
                "[10:02:30] ⚠️ Falling back to silent audio".into(),
                "[10:02:10] ❌ Montage failed!".into(),
                "[10:01:00] 🔄 Process started...".into(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn one_entry_per_error_record_in_order() {
        let entries = log_entries(&sample());
        let errors: Vec<_> = entries.iter().filter(|e| e.icon.is_some()).collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].time_text().as_deref(), Some("[10:00:01]"));
        assert_eq!(errors[0].message_text(), "⚠️ Upload failed");
        assert_eq!(errors[1].message_text(), "⚠️ Token expired");
        assert_eq!(errors[0].classes(), "log-entry error");
        // error records come before the activity feed
        assert!(entries[..2].iter().all(|e| e.icon.is_some()));
    }

    #[test]
    fn activity_lines_are_classified() {
        let levels: Vec<_> = log_entries(&sample())[2..].iter().map(|e| e.level).collect();
        assert_eq!(levels, [LogLevel::Success, LogLevel::Warning, LogLevel::Error, LogLevel::Info]);
    }

    #[test]
    fn activity_line_without_timestamp() {
        let entry = LogEntryView::from_activity("no timestamp here");
        assert_eq!(entry.time, None);
        assert_eq!(&*entry.message, "no timestamp here");
        assert_eq!(entry.level, LogLevel::Info);

        let entry = LogEntryView::from_activity("[09:00] ✅ Video ready");
        assert_eq!(entry.time.as_deref(), Some("09:00"));
        assert_eq!(&*entry.message, "✅ Video ready");
    }

    #[test]
    fn filters_partition_entries() {
        let entries = log_entries(&sample());
        assert_eq!(filter_entries(&entries, LogFilter::All).count(), entries.len());

        let partitioned: usize = LogFilter::VARIANTS
            .iter()
            .filter(|f| **f != LogFilter::All)
            .map(|f| filter_entries(&entries, *f).count())
            .sum();
        assert_eq!(partitioned, entries.len());

        assert_eq!(filter_entries(&entries, LogFilter::Error).count(), 3);
        assert!(filter_entries(&entries, LogFilter::Warning).all(|e| e.level == LogLevel::Warning));
    }

    #[test]
    fn filter_keys_match_entry_classes() {
        for level in LogLevel::VARIANTS {
            let filter = LogFilter::VARIANTS.iter().find(|f| f.key() == level.class_name()).unwrap();
            assert!(filter.matches(*level));
        }
    }
}

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

use crate::{LogEntryView, ToastKind};

pub const CLEAR_LOGS_QUESTION: &str = "Are you sure you want to clear all logs?";
pub const LOGS_CLEARED_MESSAGE: &str = "Logs cleared";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ClearState {
    #[default]
    Idle,
    Requested,
    Cleared,
}

/// Entries of the log panel and the clear flow on top of them
///
/// A confirmed clear empties the panel only once the backend accepted it, and
/// only until the next load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogPanelState {
    loaded: Arc<[LogEntryView]>,
    clear: ClearState,
}

impl LogPanelState {
    pub fn loaded(&mut self, entries: Arc<[LogEntryView]>) {
        self.loaded = entries;
        if self.clear == ClearState::Cleared {
            self.clear = ClearState::Idle;
        }
    }

    /// Takes the answer of the confirm dialog
    ///
    /// Returns whether the clear request should be sent. A request already in
    /// flight is not sent twice.
    pub fn on_confirm(&mut self, confirmed: bool) -> bool {
        if !confirmed || self.clear == ClearState::Requested {
            return false;
        }
        self.clear = ClearState::Requested;
        true
    }

    /// The backend accepted the clear, returns the toast to show
    pub fn on_cleared(&mut self) -> (ToastKind, &'static str) {
        self.clear = ClearState::Cleared;
        (ToastKind::Success, LOGS_CLEARED_MESSAGE)
    }

    pub fn on_clear_failed(&mut self) {
        self.clear = ClearState::Idle;
    }

    pub fn entries(&self) -> &[LogEntryView] {
        match self.clear {
            ClearState::Cleared => &[],
            ClearState::Idle | ClearState::Requested => &self.loaded,
        }
    }
}

#[cfg(test)]
mod tests {
    use shorts_dashboard_api::StatusSnapshot;

    use super::*;
    use crate::{log_entries, ToastSlot};

    fn loaded_panel() -> LogPanelState {
        let snapshot = StatusSnapshot {
            logs: vec!["[10:03:00] ✅ Script ready".into(), "[10:01:00] 🔄 Process started...".into()],
            ..Default::default()
        };
        let mut panel = LogPanelState::default();
        panel.loaded(log_entries(&snapshot).into());
        panel
    }

    #[test]
    fn entries_stay_newest_first() {
        let times: Vec<_> = loaded_panel().entries().iter().map(|e| e.time_text()).collect();
        assert_eq!(times, [Some("[10:03:00]".to_owned()), Some("[10:01:00]".to_owned())]);
    }

    #[test]
    fn declined_clear_changes_nothing() {
        let mut panel = loaded_panel();
        let before = panel.clone();
        assert!(!panel.on_confirm(false));
        assert_eq!(panel, before);
        assert_eq!(panel.entries().len(), 2);
    }

    #[test]
    fn confirmed_clear_empties_after_the_backend_answers() {
        let mut panel = loaded_panel();
        let mut toasts = ToastSlot::default();
        assert!(panel.on_confirm(true));
        // still visible while the request is in flight
        assert_eq!(panel.entries().len(), 2);

        let (kind, message) = panel.on_cleared();
        toasts.show(message, kind);
        assert!(panel.entries().is_empty());
        let toast = toasts.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(&*toast.message, "Logs cleared");
    }

    #[test]
    fn next_load_shows_entries_again() {
        let mut panel = loaded_panel();
        panel.on_confirm(true);
        panel.on_cleared();
        panel.loaded(Arc::from([LogEntryView::from_activity("[10:05:00] 🤖 idle")]));
        assert_eq!(panel.entries().len(), 1);
    }

    #[test]
    fn clear_is_not_requested_twice() {
        let mut panel = loaded_panel();
        assert!(panel.on_confirm(true));
        assert!(!panel.on_confirm(true));
        // a load while the request is in flight keeps it pending
        panel.loaded(Arc::from([]));
        assert!(!panel.on_confirm(true));
    }

    #[test]
    fn failed_clear_keeps_entries_and_allows_retry() {
        let mut panel = loaded_panel();
        assert!(panel.on_confirm(true));
        panel.on_clear_failed();
        assert_eq!(panel.entries().len(), 2);
        assert!(panel.on_confirm(true));
    }
}

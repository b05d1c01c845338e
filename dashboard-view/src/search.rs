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

use shorts_dashboard_api::StatusSnapshot;

use crate::BadgeState;

pub const MAX_SEARCH_ATTEMPTS: u32 = 10;
pub const DEFAULT_SEARCH_STATUS: &str = "Searching...";

/// Local override of the search progress visibility
///
/// Set by user actions, dropped when the next snapshot is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOverride {
    Shown,
    Hidden,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchProgressView {
    pub visible: bool,
    pub attempt: u32,
    pub status: Arc<str>,
}

impl Default for SearchProgressView {
    fn default() -> Self {
        Self {
            visible: false,
            attempt: 0,
            status: DEFAULT_SEARCH_STATUS.into(),
        }
    }
}

impl SearchProgressView {
    pub fn render(snapshot: &StatusSnapshot) -> Self {
        Self {
            visible: snapshot.search_attempt > 0,
            attempt: u32::try_from(snapshot.search_attempt.max(0)).unwrap_or(u32::MAX),
            status: snapshot
                .search_status
                .clone()
                .unwrap_or_else(|| DEFAULT_SEARCH_STATUS.into()),
        }
    }

    #[must_use]
    pub fn with_override(mut self, search_override: Option<SearchOverride>) -> Self {
        match search_override {
            None => (),
            Some(SearchOverride::Shown) => self.visible = true,
            Some(SearchOverride::Hidden) => self.visible = false,
        }
        self
    }

    /// Text of the attempt counter, e.g. `3/10`
    pub fn attempt_text(&self) -> String {
        format!("{}/{MAX_SEARCH_ATTEMPTS}", self.attempt)
    }

    /// Width of the progress fill in percent, capped at 100
    pub fn fill_percent(&self) -> u32 {
        (self.attempt.saturating_mul(100) / MAX_SEARCH_ATTEMPTS).min(100)
    }

    pub fn fill_style(&self) -> String {
        format!("width: {}%;", self.fill_percent())
    }

    pub fn container_style(&self) -> &'static str {
        if self.visible {
            "display: block;"
        } else {
            "display: none;"
        }
    }
}

fn is_exhausted(snapshot: &StatusSnapshot) -> bool {
    snapshot.search_attempt >= i64::from(MAX_SEARCH_ATTEMPTS)
        && BadgeState::classify(&snapshot.current) == BadgeState::Offline
}

/// Whether `next` is the first snapshot to report a failed search with all attempts used
pub fn search_newly_exhausted(previous: Option<&StatusSnapshot>, next: &StatusSnapshot) -> bool {
    is_exhausted(next) && !previous.is_some_and(is_exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(attempt: i64, current: &str) -> StatusSnapshot {
        StatusSnapshot {
            search_attempt: attempt,
            current: current.into(),
            ..Default::default()
        }
    }

    #[test]
    fn hidden_without_search() {
        let view = SearchProgressView::render(&snapshot(0, ""));
        assert!(!view.visible);
        assert_eq!(view.container_style(), "display: none;");
    }

    #[test]
    fn attempt_text_and_fill() {
        for k in 1..=10u32 {
            let view = SearchProgressView::render(&snapshot(k.into(), ""));
            assert!(view.visible);
            assert_eq!(view.attempt_text(), format!("{k}/10"));
            assert_eq!(view.fill_percent(), k * 10);
        }
        assert_eq!(SearchProgressView::render(&snapshot(3, "")).fill_style(), "width: 30%;");
    }

    #[test]
    fn overflowing_attempts_are_capped() {
        let view = SearchProgressView::render(&snapshot(12, ""));
        assert_eq!(view.attempt_text(), "12/10");
        assert_eq!(view.fill_percent(), 100);
    }

    #[test]
    fn negative_attempt_is_hidden() {
        let view = SearchProgressView::render(&snapshot(-1, "🔍 searching"));
        assert!(!view.visible);
        assert_eq!(view.attempt, 0);
        assert_eq!(view.fill_percent(), 0);
        assert!(!search_newly_exhausted(None, &snapshot(-1, "❌ Video not found!")));
    }

    #[test]
    fn huge_attempt_saturates() {
        let view = SearchProgressView::render(&snapshot(i64::MAX, ""));
        assert!(view.visible);
        assert_eq!(view.attempt, u32::MAX);
        assert_eq!(view.fill_percent(), 100);
    }

    #[test]
    fn status_text_defaults() {
        assert_eq!(&*SearchProgressView::render(&snapshot(2, "")).status, DEFAULT_SEARCH_STATUS);
        let mut with_status = snapshot(2, "");
        with_status.search_status = Some("Query 2: pubg m416 tips".into());
        assert_eq!(&*SearchProgressView::render(&with_status).status, "Query 2: pubg m416 tips");
    }

    #[test]
    fn overrides() {
        let hidden = SearchProgressView::render(&snapshot(4, "")).with_override(Some(SearchOverride::Hidden));
        assert!(!hidden.visible);
        let shown = SearchProgressView::render(&snapshot(0, "")).with_override(Some(SearchOverride::Shown));
        assert!(shown.visible);
        assert_eq!(shown.attempt_text(), "0/10");
    }

    #[test]
    fn exhaustion_is_edge_triggered() {
        let searching = snapshot(9, "🔍 searching");
        let exhausted = snapshot(10, "❌ Video not found!");
        assert!(search_newly_exhausted(None, &exhausted));
        assert!(search_newly_exhausted(Some(&searching), &exhausted));
        assert!(!search_newly_exhausted(Some(&exhausted), &exhausted));
        assert!(!search_newly_exhausted(Some(&searching), &snapshot(10, "✅ found")));
    }
}

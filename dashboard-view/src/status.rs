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

use shorts_dashboard_api::{BotMode, StatsResponse, StatusSnapshot};

use crate::{BadgeView, SearchOverride, SearchProgressView};

pub const TIME_PLACEHOLDER: &str = "--:--:--";

pub fn time_or_placeholder(time: Option<&str>) -> &str {
    time.unwrap_or(TIME_PLACEHOLDER)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountersView {
    pub total_videos: u64,
    pub queue_size: u64,
}

impl From<&StatusSnapshot> for CountersView {
    fn from(snapshot: &StatusSnapshot) -> Self {
        Self {
            total_videos: snapshot.total_videos,
            queue_size: snapshot.queue_size,
        }
    }
}

impl From<StatsResponse> for CountersView {
    fn from(stats: StatsResponse) -> Self {
        Self {
            total_videos: stats.total_videos,
            queue_size: stats.queue_size,
        }
    }
}

/// Everything the status section of the dashboard shows
#[derive(Clone, Debug, PartialEq)]
pub struct StatusView {
    pub counters: Option<CountersView>,
    pub last_run: Arc<str>,
    pub next_run: Arc<str>,
    pub current: Arc<str>,
    pub badge: BadgeView,
    pub search: SearchProgressView,
    pub progress: Option<u8>,
    pub current_topic: Option<Arc<str>>,
    pub last_video_url: Option<Arc<str>>,
    pub mode: Option<BotMode>,
}

/// Local state the status view is computed from
#[derive(Clone, Copy, Debug, Default)]
pub struct StatusInputs<'a> {
    pub snapshot: Option<&'a StatusSnapshot>,
    /// Counters from `/api/stats`, used only until the first snapshot
    pub stats_seed: Option<StatsResponse>,
    pub connection_lost: bool,
    pub search_override: Option<SearchOverride>,
}

impl StatusView {
    pub fn render(inputs: StatusInputs<'_>) -> Self {
        let StatusInputs { snapshot, stats_seed, connection_lost, search_override } = inputs;
        let badge = BadgeView::render(snapshot.map(|s| &*s.current), connection_lost);
        match snapshot {
            None => Self {
                counters: stats_seed.map(CountersView::from),
                last_run: TIME_PLACEHOLDER.into(),
                next_run: TIME_PLACEHOLDER.into(),
                current: "".into(),
                badge,
                search: SearchProgressView::default().with_override(search_override),
                progress: None,
                current_topic: None,
                last_video_url: None,
                mode: None,
            },
            Some(snapshot) => Self {
                counters: Some(snapshot.into()),
                last_run: time_or_placeholder(snapshot.last_run.as_deref()).into(),
                next_run: time_or_placeholder(snapshot.next_run.as_deref()).into(),
                current: snapshot.current.clone(),
                badge,
                search: SearchProgressView::render(snapshot).with_override(search_override),
                progress: snapshot
                    .progress
                    .map(|p| u8::try_from(p.clamp(0, 100)).expect("clamped percent should fit in u8")),
                current_topic: snapshot.current_topic.clone().filter(|t| !t.is_empty()),
                last_video_url: snapshot.last_video_url.clone(),
                mode: snapshot.mode,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BadgeState;

    #[test]
    fn absent_times_use_placeholder() {
        let snapshot = StatusSnapshot {
            last_run: None,
            next_run: Some("19:00".into()),
            ..Default::default()
        };
        let view = StatusView::render(StatusInputs { snapshot: Some(&snapshot), ..Default::default() });
        assert_eq!(&*view.last_run, "--:--:--");
        assert_eq!(&*view.next_run, "19:00");
    }

    #[test]
    fn stats_seed_only_before_first_snapshot() {
        let seed = StatsResponse { total_videos: 7, queue_size: 1 };
        let view = StatusView::render(StatusInputs { stats_seed: Some(seed), ..Default::default() });
        assert_eq!(view.counters, Some(CountersView { total_videos: 7, queue_size: 1 }));

        let snapshot = StatusSnapshot { total_videos: 8, ..Default::default() };
        let view = StatusView::render(StatusInputs { snapshot: Some(&snapshot), stats_seed: Some(seed), ..Default::default() });
        assert_eq!(view.counters, Some(CountersView { total_videos: 8, queue_size: 0 }));
    }

    #[test]
    fn nothing_loaded_yet() {
        let view = StatusView::render(StatusInputs::default());
        assert_eq!(view.counters, None);
        assert_eq!(&*view.last_run, TIME_PLACEHOLDER);
        assert!(!view.search.visible);
    }

    #[test]
    fn stale_snapshot_stays_visible_after_connection_loss() {
        let snapshot = StatusSnapshot { current: "✅ Video ready".into(), total_videos: 3, ..Default::default() };
        let view = StatusView::render(StatusInputs { snapshot: Some(&snapshot), connection_lost: true, ..Default::default() });
        assert_eq!(view.badge.state, BadgeState::Offline);
        assert_eq!(&*view.current, "✅ Video ready");
        assert_eq!(view.counters.map(|c| c.total_videos), Some(3));
    }

    #[test]
    fn extra_fields() {
        let snapshot = StatusSnapshot {
            progress: Some(140),
            current_topic: Some("".into()),
            mode: Some(BotMode::Auto),
            ..Default::default()
        };
        let view = StatusView::render(StatusInputs { snapshot: Some(&snapshot), ..Default::default() });
        assert_eq!(view.progress, Some(100));
        assert_eq!(view.current_topic, None);
        assert_eq!(view.mode, Some(BotMode::Auto));
    }

    #[test]
    fn negative_progress_is_zero() {
        let snapshot = StatusSnapshot { progress: Some(-5), ..Default::default() };
        let view = StatusView::render(StatusInputs { snapshot: Some(&snapshot), ..Default::default() });
        assert_eq!(view.progress, Some(0));
    }

    #[test]
    fn snapshot_with_null_current_keeps_the_connection() {
        let snapshot: StatusSnapshot = serde_json::from_str(r#"{"current": null, "search_attempt": -1, "errors": [{"error": "boom"}]}"#).unwrap();
        let view = StatusView::render(StatusInputs { snapshot: Some(&snapshot), ..Default::default() });
        assert_ne!(view.badge.state, BadgeState::Offline);
        assert!(!view.search.visible);
        assert_eq!(&*view.current, "");
    }
}

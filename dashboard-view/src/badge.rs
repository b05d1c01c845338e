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
use strum::IntoStaticStr;

/// Marks a failed step in the bot's free-text status
pub const FAILURE_GLYPH: char = '❌';
/// Marks a finished step in the bot's free-text status
pub const SUCCESS_GLYPH: char = '✅';
/// Marks a degraded step. Usually followed by U+FE0F, which is ignored when matching.
pub const WARNING_GLYPH: char = '⚠';

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BadgeState {
    Offline,
    Success,
    Online,
}

impl BadgeState {
    /// Derive the badge from the `current` field of a snapshot
    ///
    /// The failure glyph wins over the success glyph; text without either is online.
    pub fn classify(current: &str) -> Self {
        if current.contains(FAILURE_GLYPH) {
            Self::Offline
        } else if current.contains(SUCCESS_GLYPH) {
            Self::Success
        } else {
            Self::Online
        }
    }

    pub fn class_name(self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeView {
    pub state: BadgeState,
    pub label: &'static str,
}

impl BadgeView {
    /// `current` is `None` until the first snapshot arrives
    pub fn render(current: Option<&str>, connection_lost: bool) -> Self {
        if connection_lost {
            return Self {
                state: BadgeState::Offline,
                label: "Connection lost",
            };
        }
        match current {
            None => Self {
                state: BadgeState::Online,
                label: "Connecting...",
            },
            Some(current) => {
                let state = BadgeState::classify(current);
                Self {
                    state,
                    label: match state {
                        BadgeState::Offline => "Error",
                        BadgeState::Success => "Done",
                        BadgeState::Online => "Online",
                    },
                }
            }
        }
    }

    /// Full class attribute value
    pub fn classes(&self) -> String {
        format!("status-badge {}", self.state.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_glyph_wins() {
        assert_eq!(BadgeState::classify("❌ Video not found"), BadgeState::Offline);
        assert_eq!(BadgeState::classify("✅ uploaded, but ❌ cleanup failed"), BadgeState::Offline);
    }

    #[test]
    fn success_glyph() {
        assert_eq!(BadgeState::classify("✅ Video ready! https://youtu.be/x"), BadgeState::Success);
    }

    #[test]
    fn plain_text_is_online() {
        assert_eq!(BadgeState::classify("🤖 Bot is waiting..."), BadgeState::Online);
        assert_eq!(BadgeState::classify(""), BadgeState::Online);
        assert_eq!(BadgeState::classify("⚠️ using fallback"), BadgeState::Online);
    }

    #[test]
    fn class_names() {
        assert_eq!(BadgeView::render(Some("❌"), false).classes(), "status-badge offline");
        assert_eq!(BadgeView::render(Some("✅"), false).classes(), "status-badge success");
        assert_eq!(BadgeView::render(Some("idle"), false).classes(), "status-badge online");
    }

    #[test]
    fn connection_loss_overrides_text() {
        let badge = BadgeView::render(Some("✅ done"), true);
        assert_eq!(badge.state, BadgeState::Offline);
        assert_eq!(badge.label, "Connection lost");
    }
}

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
use crate::BotMode;

/// Every backend endpoint the dashboard talks to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Status,
    Stats,
    ForceRun,
    RetrySearch,
    UseFallback,
    CancelSearch,
    ClearLogs,
    DownloadLogs,
    ModeAuto,
    ModeManual,
    Check,
    Topics,
}

impl Endpoint {
    /// Path segments, relative to the page origin
    pub fn segments(self) -> &'static [&'static str] {
        match self {
            Self::Status       => &["status"],
            Self::Stats        => &["api", "stats"],
            Self::ForceRun     => &["force-run"],
            Self::RetrySearch  => &["api", "retry-search"],
            Self::UseFallback  => &["api", "use-fallback"],
            Self::CancelSearch => &["api", "cancel-search"],
            Self::ClearLogs    => &["clear-logs"],
            Self::DownloadLogs => &["download-logs"],
            Self::ModeAuto     => &["api", "mode", "auto"],
            Self::ModeManual   => &["api", "mode", "manual"],
            Self::Check        => &["api", "check"],
            Self::Topics       => &["api", "topics"],
        }
    }

    pub fn for_mode(mode: BotMode) -> Self {
        match mode {
            BotMode::Auto => Self::ModeAuto,
            BotMode::Manual => Self::ModeManual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments() {
        assert_eq!(Endpoint::Status.segments(), ["status"]);
        assert_eq!(Endpoint::Stats.segments(), ["api", "stats"]);
        assert_eq!(Endpoint::ClearLogs.segments(), ["clear-logs"]);
        assert_eq!(Endpoint::DownloadLogs.segments(), ["download-logs"]);
    }

    #[test]
    fn mode_endpoints() {
        assert_eq!(Endpoint::for_mode(BotMode::Auto).segments(), ["api", "mode", "auto"]);
        assert_eq!(Endpoint::for_mode(BotMode::Manual).segments(), ["api", "mode", "manual"]);
    }
}

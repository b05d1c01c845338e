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
use std::{sync::LazyLock, time::Duration};

use chrono::{DateTime, FixedOffset};
use reqwest::Client;

use crate::built_info;

pub static REQWEST_CLIENT: LazyLock<Client> = LazyLock::new(Client::new);

// Timings

pub const POLL_INTERVAL: Duration = Duration::from_secs(3);
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);
pub const PRELOADER_DELAY_MS: u32 = 1_000;
pub const RESTART_DELAY: Duration = Duration::from_secs(2);

// Scroll thresholds, in CSS pixels

pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const BACK_TO_TOP_AFTER: f64 = 500.0;

pub const SETTINGS_STORAGE_KEY: &str = "shorts-dashboard-settings";

// Data based on build-time constants

pub static VERSION_STRING: LazyLock<&'static str>                  = LazyLock::new(create_version_string);
pub static BUILD_TIME:     LazyLock<Option<DateTime<FixedOffset>>> = LazyLock::new(|| DateTime::parse_from_rfc2822(built_info::BUILT_TIME_UTC).ok());
pub static COMMIT_TIME:    LazyLock<Option<DateTime<FixedOffset>>> = LazyLock::new(|| built_info::GIT_COMMIT_TIMESTAMP.and_then(|t| DateTime::parse_from_rfc3339(t).ok()));

fn create_version_string() -> &'static str {
    match (built_info::GIT_COMMIT_HASH_SHORT, built_info::GIT_DIRTY) {
        (Some(hash), Some(true)) => format!("{}+g{hash}-dirty", built_info::PKG_VERSION).leak(),
        (Some(hash), _) => format!("{}+g{hash}", built_info::PKG_VERSION).leak(),
        _ => built_info::PKG_VERSION,
    }
}

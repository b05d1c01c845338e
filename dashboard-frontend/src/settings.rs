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
use cloneable_errors::{ErrorContext, ResContext};
use serde::{Deserialize, Serialize};
use shorts_dashboard_view::Schedule;
use web_sys::{window, Storage};

use crate::constants::SETTINGS_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub schedule: Schedule,
}

fn local_storage() -> Result<Storage, ErrorContext> {
    window()
        .context("No window object")?
        .local_storage()
        .ok()
        .flatten()
        .context("localStorage is not available")
}

impl Settings {
    /// Reads the stored settings
    ///
    /// Returns `Ok(None)` when nothing was stored yet.
    pub fn load() -> Result<Option<Self>, ErrorContext> {
        let Some(raw) = local_storage()?
            .get_item(SETTINGS_STORAGE_KEY)
            .ok()
            .flatten()
        else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .context("Failed to deserialize stored settings")
    }

    pub fn save(&self) -> Result<(), ErrorContext> {
        let raw = serde_json::to_string(self).context("Failed to serialize settings")?;
        local_storage()?
            .set_item(SETTINGS_STORAGE_KEY, &raw)
            .ok()
            .context("Failed to write settings to localStorage")
    }
}

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
use std::rc::Rc;

use reqwest::Url;
use shorts_dashboard_api::Endpoint;
use yew::Callback;

use crate::{settings::Settings, utils::ReqwestUrlExt};

pub use crate::components::{
    modals::{ModalMessage, ModalRendererControls},
    notifications::NotificationControl,
    status_poller::{SearchControl, StatusContext},
};

#[derive(Clone, PartialEq)]
pub struct WindowContext {
    pub origin: Url,
}

impl WindowContext {
    /// Resolves an endpoint against the page origin
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Url {
        self.origin
            .join_segments(endpoint.segments())
            .expect("page origin should be a base URL")
    }
}

#[derive(Clone, PartialEq)]
pub struct SettingsContext {
    settings: Rc<Settings>,
    callback: Callback<Settings>,
}

impl SettingsContext {
    pub fn new(settings: Rc<Settings>, callback: Callback<Settings>) -> Self {
        Self { settings, callback }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn update(&self, new_settings: Settings) {
        self.callback.emit(new_settings);
    }
}

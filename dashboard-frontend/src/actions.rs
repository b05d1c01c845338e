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

use gloo_console::warn;
use shorts_dashboard_api::{BotMode, Endpoint};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::{platform::{spawn_local, time::sleep}, Callback};

use crate::{
    constants::RESTART_DELAY,
    contexts::{NotificationControl, SearchControl, WindowContext},
    utils::{api_action, api_post},
};

/// Request-then-notify handlers behind the dashboard buttons
#[derive(Clone, PartialEq)]
pub struct ActionDispatcher {
    pub window_context: Rc<WindowContext>,
    pub notifications: NotificationControl,
    pub search: SearchControl,
}

impl ActionDispatcher {
    /// Force an immediate run of the bot
    pub fn force_run(&self) {
        self.notifications.info("Starting the bot...");
        self.search.show();
        let this = self.clone();
        spawn_local(async move {
            match api_action(this.window_context.endpoint_url(Endpoint::ForceRun)).await {
                Ok(response) if response.is_confirmed() => this.notifications.success("Bot started! Searching for a video..."),
                Ok(_) => (),
                Err(e) => {
                    warn!(format!("Force run failed: {e:?}"));
                    this.notifications.error(format!("Failed to start the bot: {e}"));
                },
            }
        });
    }

    pub fn set_mode(&self, mode: BotMode) {
        let this = self.clone();
        spawn_local(async move {
            match api_action(this.window_context.endpoint_url(Endpoint::for_mode(mode))).await {
                Ok(_) if mode == BotMode::Auto => this.notifications.success("Bot started"),
                Ok(_) => this.notifications.warning("Bot paused"),
                Err(e) => {
                    warn!(format!("Switching to {mode} mode failed: {e:?}"));
                    this.notifications.error(format!("Failed to switch to {mode} mode: {e}"));
                },
            }
        });
    }

    /// The backend has no restart endpoint, this only acknowledges the click
    pub fn restart(&self) {
        self.notifications.info("Restarting the bot...");
        let notifications = self.notifications.clone();
        spawn_local(async move {
            sleep(RESTART_DELAY).await;
            notifications.success("Bot restarted");
        });
    }

    pub fn retry_search(&self) {
        let this = self.clone();
        spawn_local(async move {
            match api_post(this.window_context.endpoint_url(Endpoint::RetrySearch)).await {
                Ok(()) => this.force_run(),
                Err(e) => {
                    warn!(format!("Retrying the search failed: {e:?}"));
                    this.notifications.error(format!("Failed to retry the search: {e}"));
                },
            }
        });
    }

    pub fn use_fallback(&self) {
        let this = self.clone();
        spawn_local(async move {
            match api_post(this.window_context.endpoint_url(Endpoint::UseFallback)).await {
                Ok(()) => {
                    this.notifications.warning("Using a fallback video");
                    this.force_run();
                },
                Err(e) => {
                    warn!(format!("Switching to the fallback video failed: {e:?}"));
                    this.notifications.error(format!("Failed to use the fallback video: {e}"));
                },
            }
        });
    }

    pub fn cancel_search(&self) {
        self.search.hide();
        let this = self.clone();
        spawn_local(async move {
            match api_post(this.window_context.endpoint_url(Endpoint::CancelSearch)).await {
                Ok(()) => this.notifications.error("Process cancelled"),
                Err(e) => {
                    warn!(format!("Cancelling the search failed: {e:?}"));
                    this.notifications.error(format!("Failed to cancel the process: {e}"));
                },
            }
        });
    }

    /// Clears the backend logs
    ///
    /// `on_done` gets whether the backend accepted.
    pub fn clear_logs(&self, on_done: Callback<bool>) {
        let this = self.clone();
        spawn_local(async move {
            match api_post(this.window_context.endpoint_url(Endpoint::ClearLogs)).await {
                Ok(()) => on_done.emit(true),
                Err(e) => {
                    warn!(format!("Clearing logs failed: {e:?}"));
                    this.notifications.error(format!("Failed to clear the logs: {e}"));
                    on_done.emit(false);
                },
            }
        });
    }

    pub fn download_logs(&self) {
        let url = self.window_context.endpoint_url(Endpoint::DownloadLogs);
        let result = window()
            .expect("window should exist")
            .location()
            .set_href(url.as_str());
        if result.is_err() {
            self.notifications.error("Failed to start the log download");
        }
    }

    pub fn scroll_to_settings(&self) {
        let Some(section) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("settings"))
        else {
            warn!("The settings section is missing");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Blocking browser confirm dialog, a missing window counts as declined
pub fn confirm(question: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(question).ok())
        .unwrap_or(false)
}

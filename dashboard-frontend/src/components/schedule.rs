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
use shorts_dashboard_view::{format_time, Schedule};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::contexts::{NotificationControl, SettingsContext};

/// The two daily run times
#[function_component]
pub fn ScheduleForm() -> Html {
    let settings_context: SettingsContext = use_context().expect("SettingsContext should be available");
    let notifications: NotificationControl = use_context().expect("NotificationControl should be available");
    let first_ref = use_node_ref();
    let second_ref = use_node_ref();

    let save = use_callback(
        (settings_context.clone(), notifications, first_ref.clone(), second_ref.clone()),
        |_: MouseEvent, (settings_context, notifications, first_ref, second_ref)| {
            let first: HtmlInputElement = first_ref.cast().expect("time1 should be an input element");
            let second: HtmlInputElement = second_ref.cast().expect("time2 should be an input element");
            match Schedule::parse(&first.value(), &second.value()) {
                Err(e) => notifications.error(e.to_string()),
                Ok(schedule) => {
                    let mut settings = settings_context.settings().clone();
                    settings.schedule = schedule;
                    settings_context.update(settings);
                    notifications.success(format!("Schedule saved: {}", schedule.describe()));
                },
            }
        },
    );

    let schedule = settings_context.settings().schedule;
    html! {
        <section id="settings" class="settings-section">
            <h2>{"Schedule"}</h2>
            <p>{"The bot publishes a video twice a day."}</p>
            <div class="schedule-form">
                <label for="time1">{"First run"}</label>
                <input type="time" id="time1" ref={first_ref} value={format_time(schedule.first)} />
                <label for="time2">{"Second run"}</label>
                <input type="time" id="time2" ref={second_ref} value={format_time(schedule.second)} />
                <button class="btn btn-save" onclick={save}>{"Save schedule"}</button>
            </div>
        </section>
    }
}

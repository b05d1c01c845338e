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

use cloneable_errors::ErrorContext;
use shorts_dashboard_api::{Endpoint, StatusSnapshot};
use shorts_dashboard_view::{filter_entries, log_entries, LogEntryView, LogFilter, LogPanelState, CLEAR_LOGS_QUESTION};
use strum::VariantArray;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};

use crate::{
    actions::confirm,
    components::icon::{Icon, IconType},
    contexts::WindowContext,
    hooks::use_dispatcher,
    utils::api_request,
};

#[function_component]
pub fn LogsPanel() -> Html {
    let window_context: Rc<WindowContext> = use_context().expect("WindowContext should be available");
    let dispatcher = use_dispatcher();
    let filter = use_state_eq(LogFilter::default);
    // shared with the request callbacks, which outlive the render that spawned them
    let panel = use_mut_ref(LogPanelState::default);
    let redraw = use_force_update();

    let logs = {
        let url = window_context.endpoint_url(Endpoint::Status);
        let panel = panel.clone();
        use_async_with_options(
            async move {
                let snapshot: StatusSnapshot = api_request(url).await?;
                panel.borrow_mut().loaded(log_entries(&snapshot).into());
                Ok::<_, ErrorContext>(())
            },
            UseAsyncOptions::enable_auto(),
        )
    };

    let refresh = {
        let logs = logs.clone();
        use_callback((), move |_: MouseEvent, ()| logs.run())
    };
    let clear = {
        let panel = panel.clone();
        use_callback(dispatcher.clone(), move |_: MouseEvent, dispatcher| {
            let confirmed = confirm(CLEAR_LOGS_QUESTION);
            if !panel.borrow_mut().on_confirm(confirmed) {
                return;
            }
            let panel = panel.clone();
            let redraw = redraw.clone();
            let notifications = dispatcher.notifications.clone();
            dispatcher.clear_logs(Callback::from(move |accepted: bool| {
                if accepted {
                    let (kind, message) = panel.borrow_mut().on_cleared();
                    notifications.show(message, kind);
                } else {
                    panel.borrow_mut().on_clear_failed();
                }
                redraw.force_update();
            }));
        })
    };
    let download = use_callback(dispatcher, |_: MouseEvent, dispatcher| dispatcher.download_logs());

    // server order: error records, then activity lines newest first
    let panel = panel.borrow();
    let entries = panel.entries();

    html! {
        <section id="logs" class="logs-section">
            <div class="logs-header">
                <h2>{"Logs"}</h2>
                <div class="log-filters">
                    {for LogFilter::VARIANTS.iter().copied().map(|f| {
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(f))
                        };
                        html! {
                            <button class={classes!("filter-btn", (*filter == f).then_some("active"))} data-filter={f.key()} {onclick}>
                                {f.label()}
                            </button>
                        }
                    })}
                </div>
                <div class="log-actions">
                    <button class="btn btn-small" onclick={refresh}><Icon r#type={IconType::Refresh} />{" Refresh"}</button>
                    <button class="btn btn-small btn-danger" onclick={clear}><Icon r#type={IconType::Trash} />{" Clear"}</button>
                    <button class="btn btn-small" onclick={download}><Icon r#type={IconType::Download} />{" Download"}</button>
                </div>
            </div>
            <div id="logsBody" class="logs-body">
                if logs.loading {
                    <em>{"Loading logs..."}</em>
                } else if let Some(ref error) = logs.error {
                    <b>{"Failed to load the logs :/"}</b>
                    <pre>{format!("{error:?}")}</pre>
                } else if entries.is_empty() {
                    <em class="logs-empty">{"No logs yet"}</em>
                } else {
                    {for filter_entries(entries, *filter).map(render_entry)}
                }
            </div>
        </section>
    }
}

fn render_entry(entry: &LogEntryView) -> Html {
    html! {
        <div class={entry.classes()}>
            if let Some(time) = entry.time_text() {
                <span class="log-time">{time}</span>{" "}
            }
            <span class="log-message">{entry.message_text()}</span>
        </div>
    }
}

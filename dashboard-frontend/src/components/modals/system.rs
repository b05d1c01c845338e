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

use shorts_dashboard_api::{CapabilityReport, Endpoint, TopicList};
use yew::prelude::*;
use yew_hooks::{use_async, use_async_with_options, UseAsyncOptions};

use crate::{
    built_info,
    components::icon::{Icon, IconType},
    constants::{BUILD_TIME, COMMIT_TIME, VERSION_STRING},
    contexts::WindowContext,
    utils::{api_request, render_datetime},
};

pub const SYSTEM_MODAL_ID: &str = "systemModal";

#[function_component]
pub fn SystemModal() -> Html {
    let window_context: Rc<WindowContext> = use_context().expect("WindowContext should be defined");

    let check = {
        let url = window_context.endpoint_url(Endpoint::Check);
        use_async_with_options(
            async move { api_request::<_, CapabilityReport>(url).await },
            UseAsyncOptions::enable_auto(),
        )
    };
    let topics = {
        let url = window_context.endpoint_url(Endpoint::Topics);
        use_async(async move { api_request::<_, TopicList>(url).await })
    };

    let recheck = {
        let check = check.clone();
        use_callback((), move |_: MouseEvent, ()| check.run())
    };
    let load_topics = {
        let topics = topics.clone();
        use_callback((), move |_: MouseEvent, ()| topics.run())
    };

    html! {
        <div id="system-modal">
            <h2>{"System check"}</h2>
            <div id="system-modal-client">
                <h3>{"Dashboard build"}</h3>
                <table>
                    <tr>
                        <th>{"Version"}</th>
                        <td>{*VERSION_STRING}</td>
                    </tr>
                    <tr>
                        <th>{"Git hash"}</th>
                        <td>
                            if let Some(hash) = built_info::GIT_COMMIT_HASH_SHORT {
                                {hash}
                                if built_info::GIT_DIRTY == Some(true) {
                                    {" "}<b>{"+ uncommitted changes"}</b>
                                }
                            } else {
                                <em>{"Unknown"}</em>
                            }
                        </td>
                    </tr>
                    <tr>
                        <th>{"Commit date"}</th>
                        <td>
                            if let Some(dt) = *COMMIT_TIME {
                                {render_datetime(dt)}
                            } else {
                                <em>{"Unknown"}</em>
                            }
                        </td>
                    </tr>
                    <tr>
                        <th>{"Build date"}</th>
                        <td>
                            if let Some(dt) = *BUILD_TIME {
                                {render_datetime(dt)}
                            } else {
                                <em>{"Unknown"}</em>
                            }
                        </td>
                    </tr>
                </table>
            </div>
            <div id="system-modal-server">
                <h3>{"Bot dependencies "}<button class="btn btn-small" onclick={recheck}><Icon r#type={IconType::Refresh} tooltip="Check again" /></button></h3>
                if check.loading {
                    <em>{"Checking..."}</em>
                } else if let Some(ref error) = check.error {
                    <b>{"Failed to run the system check :/"}</b>
                    <pre>{format!("{error:?}")}</pre>
                } else if let Some(ref report) = check.data {
                    <table>
                        {for report.entries().into_iter().map(|(name, ok)| html! {
                            <tr>
                                <th>{name}</th>
                                <td>
                                    if ok {
                                        <Icon r#type={IconType::Ok} />{" Available"}
                                    } else {
                                        <Icon r#type={IconType::Missing} />{" Missing"}
                                    }
                                </td>
                            </tr>
                        })}
                    </table>
                    if report.all_ok() {
                        <p class="check-summary ok">{"Everything is in place."}</p>
                    } else {
                        <p class="check-summary missing">{"Some dependencies are missing, the bot may fall back to degraded output."}</p>
                    }
                }
            </div>
            <div id="system-modal-topics">
                <h3>{"Topic ideas"}</h3>
                <button class="btn" onclick={load_topics} disabled={topics.loading}>{"Generate topics"}</button>
                if topics.loading {
                    <em>{"Generating..."}</em>
                } else if let Some(ref error) = topics.error {
                    <b>{"Failed to fetch topics :/"}</b>
                    <pre>{format!("{error:?}")}</pre>
                } else if let Some(ref list) = topics.data {
                    if list.is_empty() {
                        <em>{"The bot returned no topics"}</em>
                    } else {
                        <ol class="topic-list">
                            {for list.iter().map(|topic| html! { <li>{topic.to_string()}</li> })}
                        </ol>
                    }
                }
            </div>
        </div>
    }
}

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

use shorts_dashboard_api::BotMode;
use shorts_dashboard_view::{CountersView, StatusView};
use yew::prelude::*;

use crate::{
    components::icon::{Icon, IconType},
    contexts::StatusContext,
    hooks::use_dispatcher,
};

#[derive(Properties, PartialEq)]
struct ViewProps {
    view: Rc<StatusView>,
}

#[function_component]
pub fn Dashboard() -> Html {
    let status: StatusContext = use_context().expect("StatusContext should be available");
    let view = use_memo(status.clone(), |status| status.view());

    html! {
        <section id="dashboard" class="dashboard">
            <ConnectionBanner error={status.connection_error.clone()} />
            <StatCards view={view.clone()} />
            <div class="dashboard-row">
                <StatusCard view={view.clone()} />
                <ControlPanel mode={view.mode} />
            </div>
            <SearchProgress view={view.clone()} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ConnectionBannerProps {
    error: Option<AttrValue>,
}

#[function_component]
fn ConnectionBanner(props: &ConnectionBannerProps) -> Html {
    let Some(error) = props.error.clone() else {
        return html! {};
    };
    html! {
        <div class="connection-banner" role="alert">
            <b>{"Lost connection to the bot, retrying..."}</b>
            <pre>{error}</pre>
        </div>
    }
}

#[function_component]
fn StatCards(props: &ViewProps) -> Html {
    let CountersView { total_videos, queue_size } = props.view.counters.unwrap_or_default();
    html! {
        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-label">{"Videos published"}</span>
                <span id="totalVideos" class="stat-value">{total_videos.to_string()}</span>
            </div>
            <div class="stat-card">
                <span class="stat-label">{"In queue"}</span>
                <span id="queueSize" class="stat-value">{queue_size.to_string()}</span>
            </div>
            <div class="stat-card">
                <span class="stat-label">{"Last run"}</span>
                <span id="lastRun" class="stat-value">{props.view.last_run.to_string()}</span>
            </div>
            <div class="stat-card">
                <span class="stat-label">{"Next run"}</span>
                <span id="nextRun" class="stat-value">{props.view.next_run.to_string()}</span>
            </div>
        </div>
    }
}

#[function_component]
fn StatusCard(props: &ViewProps) -> Html {
    let view = &props.view;
    html! {
        <div class="status-card">
            <div class="status-header">
                <h3>{"Current status"}</h3>
                <span id="statusBadge" class={view.badge.classes()}>{view.badge.label}</span>
                if let Some(mode) = view.mode {
                    <span class={classes!("mode-indicator", mode.to_string())}>
                        {match mode {
                            BotMode::Auto => "Automatic",
                            BotMode::Manual => "Manual",
                        }}
                    </span>
                }
            </div>
            <p id="currentProcess" class="current-process">{view.current.to_string()}</p>
            if let Some(progress) = view.progress {
                <div class="progress-bar">
                    <div class="progress-fill" style={format!("width: {progress}%;")} />
                    <span class="progress-text">{format!("{progress}%")}</span>
                </div>
            }
            if let Some(topic) = view.current_topic.as_deref() {
                <p class="current-topic"><strong>{"Topic: "}</strong>{topic.to_owned()}</p>
            }
            if let Some(url) = view.last_video_url.as_deref() {
                <a class="last-video" href={url.to_owned()} target="_blank" rel="noopener noreferrer">{"Watch the last video"}</a>
            }
        </div>
    }
}

#[function_component]
fn SearchProgress(props: &ViewProps) -> Html {
    let search = &props.view.search;
    html! {
        <div id="searchProgress" class="search-progress" style={search.container_style()}>
            <div class="search-header">
                <span>{"Searching for a video"}</span>
                <span id="searchAttempt">{search.attempt_text()}</span>
            </div>
            <div class="search-bar">
                <div id="searchProgressFill" class="search-progress-fill" style={search.fill_style()} />
            </div>
            <p id="searchStatus" class="search-status">{search.status.to_string()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ControlPanelProps {
    mode: Option<BotMode>,
}

#[function_component]
fn ControlPanel(props: &ControlPanelProps) -> Html {
    let dispatcher = use_dispatcher();
    let start = use_callback(dispatcher.clone(), |_: MouseEvent, dispatcher| dispatcher.set_mode(BotMode::Auto));
    let pause = use_callback(dispatcher.clone(), |_: MouseEvent, dispatcher| dispatcher.set_mode(BotMode::Manual));
    let restart = use_callback(dispatcher.clone(), |_: MouseEvent, dispatcher| dispatcher.restart());
    let force_run = use_callback(dispatcher, |_: MouseEvent, dispatcher| dispatcher.force_run());

    let active = |mode| (props.mode == Some(mode)).then_some("active");

    html! {
        <div class="control-panel">
            <h3>{"Controls"}</h3>
            <div class="control-buttons">
                <button class={classes!("btn", "btn-start", active(BotMode::Auto))} onclick={start}>
                    <Icon r#type={IconType::Play} />{" Start"}
                </button>
                <button class={classes!("btn", "btn-pause", active(BotMode::Manual))} onclick={pause}>
                    <Icon r#type={IconType::Pause} />{" Pause"}
                </button>
                <button class="btn btn-restart" onclick={restart}>
                    <Icon r#type={IconType::Restart} />{" Restart"}
                </button>
                <button class="btn btn-force" onclick={force_run}>
                    <Icon r#type={IconType::ForceRun} />{" Run now"}
                </button>
            </div>
        </div>
    }
}

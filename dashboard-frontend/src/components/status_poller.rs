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
use gloo_console::{debug, warn};
use shorts_dashboard_api::{Endpoint, StatsResponse, StatusSnapshot};
use shorts_dashboard_view::{search_newly_exhausted, PollSequencer, SearchOverride, StatusInputs, StatusView, Ticket};
use yew::{platform::time::sleep, html, AttrValue, Callback, Component, Context, ContextHandle, ContextProvider, Html, Properties};

use crate::{constants::POLL_INTERVAL, contexts::WindowContext, utils::api_request};

/// Everything the poller knows about the backend
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PollState {
    /// The last applied snapshot, kept while the connection is down
    pub snapshot: Option<Rc<StatusSnapshot>>,
    pub stats_seed: Option<StatsResponse>,
    /// Set by a failed poll, cleared by the next successful one
    pub connection_error: Option<AttrValue>,
    pub search_override: Option<SearchOverride>,
    /// Bumped every time a snapshot newly reports an exhausted search
    pub exhausted_searches: u32,
}

impl PollState {
    pub fn view(&self) -> StatusView {
        StatusView::render(StatusInputs {
            snapshot: self.snapshot.as_deref(),
            stats_seed: self.stats_seed,
            connection_lost: self.connection_error.is_some(),
            search_override: self.search_override,
        })
    }
}

pub type StatusContext = Rc<PollState>;

/// Lets actions show or hide the search progress before the backend catches up
#[derive(Clone, PartialEq)]
pub struct SearchControl {
    callback: Callback<SearchOverride>,
}

impl SearchControl {
    pub fn show(&self) {
        self.callback.emit(SearchOverride::Shown);
    }
    pub fn hide(&self) {
        self.callback.emit(SearchOverride::Hidden);
    }
}

pub struct StatusPoller {
    sequencer: PollSequencer,
    state: StatusContext,
    search_control: SearchControl,
    window_context: Rc<WindowContext>,
    _window_context_handle: ContextHandle<Rc<WindowContext>>,
}

#[derive(PartialEq, Properties)]
pub struct StatusPollerProps {
    pub children: Html,
}

pub enum PollerMessage {
    Tick,
    StatsFetched(Result<StatsResponse, ErrorContext>),
    StatusFetched {
        ticket: Ticket,
        result: Result<StatusSnapshot, ErrorContext>,
    },
    OverrideSearch(SearchOverride),
    WindowContextUpdated(Rc<WindowContext>),
}

impl StatusPoller {
    fn schedule_tick(ctx: &Context<Self>) {
        ctx.link().send_future(async {
            sleep(POLL_INTERVAL).await;
            PollerMessage::Tick
        });
    }

    fn apply_snapshot(&mut self, snapshot: StatusSnapshot) {
        let state = Rc::make_mut(&mut self.state);
        if search_newly_exhausted(state.snapshot.as_deref(), &snapshot) {
            state.exhausted_searches += 1;
        }
        state.snapshot = Some(Rc::new(snapshot));
        state.connection_error = None;
        state.search_override = None;
    }
}

impl Component for StatusPoller {
    type Properties = StatusPollerProps;
    type Message = PollerMessage;

    fn create(ctx: &Context<Self>) -> Self {
        let scope = ctx.link();
        let (window_context, window_context_handle) = scope
            .context(scope.callback(PollerMessage::WindowContextUpdated))
            .expect("WindowContext should be available");

        let stats_url = window_context.endpoint_url(Endpoint::Stats);
        scope.send_future(async move {
            PollerMessage::StatsFetched(api_request(stats_url).await)
        });
        Self::schedule_tick(ctx);

        Self {
            sequencer: PollSequencer::new(),
            state: Rc::default(),
            search_control: SearchControl { callback: scope.callback(PollerMessage::OverrideSearch) },
            window_context,
            _window_context_handle: window_context_handle,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<StatusContext> context={self.state.clone()}>
            <ContextProvider<SearchControl> context={self.search_control.clone()}>
                {ctx.props().children.clone()}
            </ContextProvider<SearchControl>>
            </ContextProvider<StatusContext>>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PollerMessage::Tick => {
                let ticket = self.sequencer.issue();
                let url = self.window_context.endpoint_url(Endpoint::Status);
                ctx.link().send_future(async move {
                    PollerMessage::StatusFetched { ticket, result: api_request(url).await }
                });
                Self::schedule_tick(ctx);
                false
            },
            PollerMessage::StatsFetched(Err(e)) => {
                warn!(format!("Failed to fetch initial stats: {e:?}"));
                false
            },
            PollerMessage::StatsFetched(Ok(stats)) => {
                if self.state.snapshot.is_some() {
                    return false;
                }
                Rc::make_mut(&mut self.state).stats_seed = Some(stats);
                true
            },
            PollerMessage::StatusFetched { ticket, .. } if !self.sequencer.accept(ticket) => {
                debug!(format!("Discarding stale status poll #{}", ticket.get()));
                false
            },
            PollerMessage::StatusFetched { result: Ok(snapshot), .. } => {
                self.apply_snapshot(snapshot);
                true
            },
            PollerMessage::StatusFetched { result: Err(e), .. } => {
                warn!(format!("Status poll failed: {e:?}"));
                Rc::make_mut(&mut self.state).connection_error = Some(format!("{e:?}").into());
                true
            },
            PollerMessage::OverrideSearch(search_override) => {
                Rc::make_mut(&mut self.state).search_override = Some(search_override);
                true
            },
            PollerMessage::WindowContextUpdated(window_context) => {
                self.window_context = window_context;
                false
            },
        }
    }
}

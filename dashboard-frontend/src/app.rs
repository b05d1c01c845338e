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
use web_sys::window;
use yew::prelude::*;

mod actions;
mod components;
mod constants;
mod contexts;
mod hooks;
mod settings;
mod utils;

use components::{
    dashboard::Dashboard,
    header_footer::{BackToTop, Footer, Navbar, Preloader},
    logs::LogsPanel,
    modals::{no_video::NoVideoWatcher, ModalRenderer},
    notifications::NotificationCenter,
    schedule::ScheduleForm,
    settings_provider::SettingsProvider,
    status_poller::StatusPoller,
};
use contexts::WindowContext;

mod built_info {
    // Contents generated by buildscript, using built
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[function_component]
fn App() -> Html {
    let window_context = use_memo((), |()| {
        let origin = window()
            .expect("window should exist")
            .location()
            .origin()
            .expect("location should have an origin");
        WindowContext {
            origin: Url::parse(&origin).expect("origin should be a valid URL"),
        }
    });

    html! {
        <ContextProvider<Rc<WindowContext>> context={window_context}>
        <SettingsProvider>
        <NotificationCenter>
        <StatusPoller>
        <ModalRenderer>
            <Preloader />
            <Navbar />
            <main>
                <Dashboard />
                <LogsPanel />
                <ScheduleForm />
            </main>
            <Footer />
            <BackToTop />
            <NoVideoWatcher />
        </ModalRenderer>
        </StatusPoller>
        </NotificationCenter>
        </SettingsProvider>
        </ContextProvider<Rc<WindowContext>>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

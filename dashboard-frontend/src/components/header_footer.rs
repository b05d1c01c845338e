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
use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::{use_timeout, use_window_scroll};

use crate::components::icon::*;
use crate::components::modals::system::{SystemModal, SYSTEM_MODAL_ID};
use crate::constants::{BACK_TO_TOP_AFTER, NAVBAR_SCROLLED_AFTER, PRELOADER_DELAY_MS, VERSION_STRING};
use crate::contexts::*;
use crate::settings::Theme;

fn open_system_modal(modal_controls: &ModalRendererControls) {
    modal_controls.emit(ModalMessage::Open {
        id: SYSTEM_MODAL_ID,
        content: html! {<SystemModal />},
    });
}

#[function_component]
pub fn Navbar() -> Html {
    let modal_controls: ModalRendererControls = use_context().expect("Navbar should be placed inside a ModalRenderer");
    let settings_context: SettingsContext = use_context().expect("SettingsContext should be available");
    let menu_open = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();

    let open_system = use_callback(modal_controls, |_: MouseEvent, modal_controls| open_system_modal(modal_controls));
    let toggle_theme = use_callback(settings_context.clone(), |_: MouseEvent, settings_context| {
        let mut settings = settings_context.settings().clone();
        settings.theme = settings.theme.toggled();
        settings_context.update(settings);
    });
    let toggle_menu = use_callback(menu_open.clone(), |_: MouseEvent, menu_open| menu_open.set(!**menu_open));
    let close_menu = use_callback(menu_open.clone(), |_: MouseEvent, menu_open| menu_open.set(false));

    let (theme_icon, theme_tooltip) = match settings_context.settings().theme {
        Theme::Dark => (IconType::Moon, "Switch to the light theme"),
        Theme::Light => (IconType::Sun, "Switch to the dark theme"),
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (scroll_y > NAVBAR_SCROLLED_AFTER).then_some("scrolled"))}>
            <a class="nav-brand" href="#dashboard">
                <Icon r#type={IconType::Logo} />
                <span>{"Shorts Bot"}</span>
            </a>
            <ul id="navMenu" class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                <li><a href="#dashboard" onclick={close_menu.clone()}>{"Dashboard"}</a></li>
                <li><a href="#logs" onclick={close_menu.clone()}>{"Logs"}</a></li>
                <li><a href="#settings" onclick={close_menu}>{"Schedule"}</a></li>
                <li>
                    <span class="clickable" onclick={open_system}>
                        <Icon r#type={IconType::SystemCheck} />{" System"}
                    </span>
                </li>
            </ul>
            <div class="nav-actions">
                <button id="themeToggle" class="theme-toggle" onclick={toggle_theme}>
                    <Icon r#type={theme_icon} tooltip={theme_tooltip} />
                </button>
                <button id="mobileMenu" class={classes!("mobile-menu", (*menu_open).then_some("active"))} onclick={toggle_menu}>
                    <Icon r#type={IconType::Menu} tooltip="Menu" />
                </button>
            </div>
        </nav>
    }
}

#[function_component]
pub fn Footer() -> Html {
    let modal_controls: ModalRendererControls = use_context().expect("Footer should be placed inside a ModalRenderer");
    let open_system = use_callback(modal_controls, |_: MouseEvent, modal_controls| open_system_modal(modal_controls));

    html! {
        <footer id="footer">
            <span class="clickable" onclick={open_system}>{format!("Shorts Bot Dashboard {}", *VERSION_STRING)}</span>
            <span>
                {"Licensed under "}
                <a href="https://www.gnu.org/licenses/agpl-3.0.en.html">{"AGPL v3"}</a>
            </span>
        </footer>
    }
}

/// Full-page overlay, faded out shortly after the app mounts
#[function_component]
pub fn Preloader() -> Html {
    let hidden = use_state_eq(|| false);
    {
        let hidden = hidden.clone();
        use_timeout(move || hidden.set(true), PRELOADER_DELAY_MS);
    }

    html! {
        <div id="preloader" class={classes!("preloader", (*hidden).then_some("fade-out"))}>
            <div class="loader" />
        </div>
    }
}

#[function_component]
pub fn BackToTop() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let onclick = use_callback((), |_: MouseEvent, ()| {
        let Some(window) = window() else { return };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    });

    html! {
        <button id="backToTop" class={classes!("back-to-top", (scroll_y > BACK_TO_TOP_AFTER).then_some("visible"))} {onclick}>
            <Icon r#type={IconType::ArrowUp} tooltip="Back to top" />
        </button>
    }
}

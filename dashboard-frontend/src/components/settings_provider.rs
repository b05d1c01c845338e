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

use gloo_console::{error, warn};
use web_sys::window;
use yew::prelude::*;

use crate::contexts::SettingsContext;
use crate::settings::{Settings, Theme};

#[derive(PartialEq, Properties)]
pub struct SettingsProviderProps {
    pub children: Html,
}

fn initial_settings() -> Rc<Settings> {
    match Settings::load() {
        Ok(settings) => Rc::new(settings.unwrap_or_default()),
        Err(e) => {
            warn!(format!("Ignoring stored settings: {e:?}"));
            Rc::default()
        },
    }
}

fn apply_theme(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force("light-theme", theme == Theme::Light) {
        error!("Failed to switch the theme", e);
    }
}

/// Loads the settings from localStorage and writes every update back
#[function_component]
pub fn SettingsProvider(props: &SettingsProviderProps) -> Html {
    let settings = use_state(initial_settings);
    let callback = {
        let settings = settings.clone();
        use_callback((), move |new_settings: Settings, ()| {
            if let Err(e) = new_settings.save() {
                error!(format!("Failed to save settings: {e:?}"));
            }
            settings.set(Rc::new(new_settings));
        })
    };

    use_effect_with(settings.theme, |theme| apply_theme(*theme));

    let context = SettingsContext::new((*settings).clone(), callback);
    html! {
        <ContextProvider<SettingsContext> {context}>
            {props.children.clone()}
        </ContextProvider<SettingsContext>>
    }
}

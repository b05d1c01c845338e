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
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconType {
    Logo,
    Moon,
    Sun,
    Menu,
    ArrowUp,
    Play,
    Pause,
    Restart,
    ForceRun,
    Retry,
    Fallback,
    Settings,
    Cancel,
    Trash,
    Download,
    Refresh,
    SystemCheck,
    Ok,
    Missing,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub r#type: IconType,
    #[prop_or_default]
    pub tooltip: Option<AttrValue>,
}

#[function_component]
pub fn Icon(props: &IconProps) -> Html {
    let class = match props.r#type {
        IconType::Logo        => classes!("fas", "fa-robot"),
        IconType::Moon        => classes!("fas", "fa-moon"),
        IconType::Sun         => classes!("fas", "fa-sun"),
        IconType::Menu        => classes!("fas", "fa-bars"),
        IconType::ArrowUp     => classes!("fas", "fa-arrow-up"),
        IconType::Play        => classes!("fas", "fa-play"),
        IconType::Pause       => classes!("fas", "fa-pause"),
        IconType::Restart     => classes!("fas", "fa-redo"),
        IconType::ForceRun    => classes!("fas", "fa-bolt"),
        IconType::Retry       => classes!("fas", "fa-search"),
        IconType::Fallback    => classes!("fas", "fa-film"),
        IconType::Settings    => classes!("fas", "fa-cog"),
        IconType::Cancel      => classes!("fas", "fa-times"),
        IconType::Trash       => classes!("fas", "fa-trash"),
        IconType::Download    => classes!("fas", "fa-download"),
        IconType::Refresh     => classes!("fas", "fa-sync-alt"),
        IconType::SystemCheck => classes!("fas", "fa-heartbeat"),
        IconType::Ok          => classes!("fas", "fa-check-circle", "ok"),
        IconType::Missing     => classes!("fas", "fa-times-circle", "missing"),
    };

    html! {
        <i {class} title={props.tooltip.clone()}></i>
    }
}

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

use crate::{
    components::icon::{Icon, IconType},
    contexts::{ModalMessage, ModalRendererControls, StatusContext},
    hooks::use_dispatcher,
};

pub const NO_VIDEO_MODAL_ID: &str = "noVideoModal";

/// Shown when the bot ran out of search attempts without finding a video
#[function_component]
pub fn NoVideoModal() -> Html {
    let dispatcher = use_dispatcher();
    let modal_controls: ModalRendererControls = use_context().expect("ModalRendererControls should be available");
    let deps = (dispatcher, modal_controls);

    let retry = use_callback(deps.clone(), |_: MouseEvent, (dispatcher, modal_controls)| {
        modal_controls.emit(ModalMessage::Close(NO_VIDEO_MODAL_ID));
        dispatcher.retry_search();
    });
    let fallback = use_callback(deps.clone(), |_: MouseEvent, (dispatcher, modal_controls)| {
        modal_controls.emit(ModalMessage::Close(NO_VIDEO_MODAL_ID));
        dispatcher.use_fallback();
    });
    let settings = use_callback(deps.clone(), |_: MouseEvent, (dispatcher, modal_controls)| {
        modal_controls.emit(ModalMessage::Close(NO_VIDEO_MODAL_ID));
        dispatcher.scroll_to_settings();
    });
    let cancel = use_callback(deps, |_: MouseEvent, (dispatcher, modal_controls)| {
        modal_controls.emit(ModalMessage::Close(NO_VIDEO_MODAL_ID));
        dispatcher.cancel_search();
    });

    html! {
        <div class="no-video-modal">
            <h2>{"No video found"}</h2>
            <p>{"The bot used all of its search attempts without finding a suitable video. What should it do next?"}</p>
            <div class="modal-actions">
                <button class="btn btn-retry" onclick={retry}><Icon r#type={IconType::Retry} />{" Search again"}</button>
                <button class="btn btn-fallback" onclick={fallback}><Icon r#type={IconType::Fallback} />{" Use a fallback video"}</button>
                <button class="btn btn-settings" onclick={settings}><Icon r#type={IconType::Settings} />{" Change settings"}</button>
                <button class="btn btn-cancel" onclick={cancel}><Icon r#type={IconType::Cancel} />{" Cancel"}</button>
            </div>
        </div>
    }
}

/// Opens the [`NoVideoModal`] whenever the poller reports a newly exhausted search
#[function_component]
pub fn NoVideoWatcher() -> Html {
    let status: StatusContext = use_context().expect("StatusContext should be available");
    let modal_controls: ModalRendererControls = use_context().expect("ModalRendererControls should be available");

    use_effect_with(status.exhausted_searches, move |exhausted| {
        if *exhausted > 0 {
            modal_controls.emit(ModalMessage::Open {
                id: NO_VIDEO_MODAL_ID,
                content: html! { <NoVideoModal /> },
            });
        }
    });

    html! {}
}

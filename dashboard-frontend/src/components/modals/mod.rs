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

use yew::prelude::*;

pub mod no_video;
pub mod system;

pub enum ModalMessage {
    /// Opens a modal on top of the stack, unless one with the same id is already open
    Open {
        id: &'static str,
        content: Html,
    },
    Close(&'static str),
    CloseTop,
}

#[derive(Default, PartialEq)]
struct ModalState {
    modals: Vec<(&'static str, Html)>,
}

impl Reducible for ModalState {
    type Action = ModalMessage;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut modals = self.modals.clone();
        match action {
            ModalMessage::Open { id, .. } if modals.iter().any(|(open, _)| *open == id) => return self,
            ModalMessage::Open { id, content } => modals.push((id, content)),
            ModalMessage::Close(id) => modals.retain(|(open, _)| *open != id),
            ModalMessage::CloseTop => drop(modals.pop()),
        };
        Self { modals }.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalRendererProps {
    #[prop_or_default]
    pub children: Html,
}

pub type ModalRendererControls = Callback<ModalMessage, ()>;

#[function_component]
pub fn ModalRenderer(props: &ModalRendererProps) -> Html {
    let state = use_reducer(ModalState::default);
    let callback = {
        let state = state.clone();
        use_callback((), move |msg, ()| state.dispatch(msg))
    };

    html! {
        <ContextProvider<ModalRendererControls> context={callback}>
            {props.children.clone()}
            <ModalContainers {state} />
        </ContextProvider<ModalRendererControls>>
    }
}

#[derive(Properties, PartialEq)]
struct ModalContainersProps {
    state: UseReducerHandle<ModalState>,
}

#[function_component]
fn ModalContainers(props: &ModalContainersProps) -> Html {
    let close_top = {
        let state = props.state.clone();
        use_callback((), move |_, ()| state.dispatch(ModalMessage::CloseTop))
    };

    html! {
        <>
            {for props.state.modals.iter().enumerate().map(|(i, (id, modal))| {
                html! {
                    <div id={*id} class="modal show" style={format!("z-index: {};", i+1)} key={*id}>
                        <div class="modal-background" onclick={close_top.clone()} />
                        <div class="modal-content">
                            <span class="modal-close clickable" onclick={close_top.clone()}>{"×"}</span>
                            {modal.clone()}
                        </div>
                    </div>
                }
            })}
        </>
    }
}

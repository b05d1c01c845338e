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
use shorts_dashboard_view::{ToastId, ToastKind, ToastSlot};
use yew::{platform::time::sleep, html, AttrValue, Callback, Component, Context, ContextProvider, Html, Properties};

use crate::constants::TOAST_LIFETIME;

/// Owner of the single toast slot
pub struct NotificationCenter {
    slot: ToastSlot,
    control: NotificationControl,
}

#[derive(PartialEq, Properties)]
pub struct NotificationCenterProps {
    pub children: Html,
}

pub enum NotificationMessage {
    Show {
        message: AttrValue,
        kind: ToastKind,
    },
    Expire(ToastId),
}

#[derive(PartialEq, Clone)]
pub struct NotificationControl {
    callback: Callback<(AttrValue, ToastKind)>,
}

impl NotificationControl {
    pub fn show(&self, message: impl Into<AttrValue>, kind: ToastKind) {
        self.callback.emit((message.into(), kind));
    }
    pub fn info(&self, message: impl Into<AttrValue>) {
        self.show(message, ToastKind::Info);
    }
    pub fn success(&self, message: impl Into<AttrValue>) {
        self.show(message, ToastKind::Success);
    }
    pub fn warning(&self, message: impl Into<AttrValue>) {
        self.show(message, ToastKind::Warning);
    }
    pub fn error(&self, message: impl Into<AttrValue>) {
        self.show(message, ToastKind::Error);
    }
}

impl Component for NotificationCenter {
    type Properties = NotificationCenterProps;
    type Message = NotificationMessage;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            slot: ToastSlot::default(),
            control: NotificationControl {
                callback: ctx.link().callback(|(message, kind): (AttrValue, ToastKind)| NotificationMessage::Show { message, kind }),
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toast = match self.slot.current() {
            None => html! {
                <div id="notification" class="notification" />
            },
            Some(toast) => html! {
                <div id="notification" class={toast.classes()}>
                    <span class="notification-message">{toast.message.to_string()}</span>
                </div>
            },
        };
        html! {
            <ContextProvider<NotificationControl> context={self.control.clone()}>
                {ctx.props().children.clone()}
                {toast}
            </ContextProvider<NotificationControl>>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NotificationMessage::Show { message, kind } => {
                let id = self.slot.show(message.as_str(), kind);
                ctx.link().send_future(async move {
                    sleep(TOAST_LIFETIME).await;
                    NotificationMessage::Expire(id)
                });
                true
            },
            NotificationMessage::Expire(id) => self.slot.expire(id),
        }
    }
}

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

use yew::{hook, use_context, use_memo};

use crate::{
    actions::ActionDispatcher,
    contexts::{NotificationControl, SearchControl, WindowContext},
};

#[hook]
pub fn use_dispatcher() -> Rc<ActionDispatcher> {
    let window_context: Rc<WindowContext> = use_context().expect("WindowContext should be available");
    let notifications: NotificationControl = use_context().expect("NotificationControl should be available");
    let search: SearchControl = use_context().expect("SearchControl should be available");
    use_memo((window_context, notifications, search), |(window_context, notifications, search)| {
        ActionDispatcher {
            window_context: window_context.clone(),
            notifications: notifications.clone(),
            search: search.clone(),
        }
    })
}

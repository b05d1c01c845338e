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
use std::sync::Arc;

use strum::IntoStaticStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: Arc<str>,
    pub kind: ToastKind,
}

impl Toast {
    pub fn classes(&self) -> String {
        let kind: &'static str = self.kind.into();
        format!("notification show {kind}")
    }
}

/// The single notification slot
///
/// A new toast replaces the visible one. Expiry is keyed by id, so the timer
/// of a replaced toast can't hide its successor.
#[derive(Debug, Default)]
pub struct ToastSlot {
    next_id: u64,
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn show(&mut self, message: impl Into<Arc<str>>, kind: ToastKind) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.current = Some(Toast { id, message: message.into(), kind });
        id
    }

    /// Returns `true` if the toast was still visible
    pub fn expire(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_and_expire() {
        let mut slot = ToastSlot::default();
        let id = slot.show("Logs cleared", ToastKind::Success);
        assert_eq!(slot.current().map(Toast::classes).as_deref(), Some("notification show success"));
        assert!(slot.expire(id));
        assert!(slot.current().is_none());
        assert!(!slot.expire(id));
    }

    #[test]
    fn replaced_toast_does_not_hide_successor() {
        let mut slot = ToastSlot::default();
        let first = slot.show("Restarting the bot...", ToastKind::Info);
        let second = slot.show("Bot restarted", ToastKind::Success);
        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|t| t.id), Some(second));
        assert_eq!(slot.current().map(|t| &*t.message), Some("Bot restarted"));
    }
}

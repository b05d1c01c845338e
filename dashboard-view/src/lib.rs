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

//! Browser-independent view models for the dashboard
//!
//! Every type in here is a projection of a server payload (or of local UI state)
//! into the strings and flags the frontend puts into the DOM.

mod badge;
mod log_panel;
mod logs;
mod schedule;
mod search;
mod sequencer;
mod status;
mod toast;

pub use badge::*;
pub use log_panel::*;
pub use logs::*;
pub use schedule::*;
pub use search::*;
pub use sequencer::*;
pub use status::*;
pub use toast::*;

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

/// Generation number of a poll request
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Orders the results of overlapping requests
///
/// Requests are never cancelled. Instead, every request takes a ticket and its result
/// is only applied if no newer request has been applied before it.
#[derive(Debug, Default)]
pub struct PollSequencer {
    issued: u64,
    applied: Option<Ticket>,
}

impl PollSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Returns `true` if the result of this ticket should be applied
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if self.applied.is_some_and(|applied| applied >= ticket) {
            return false;
        }
        self.applied = Some(ticket);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_results_are_applied() {
        let mut seq = PollSequencer::new();
        let a = seq.issue();
        assert!(seq.accept(a));
        let b = seq.issue();
        assert!(seq.accept(b));
        assert!(!seq.accept(a));
    }

    #[test]
    fn late_result_is_discarded() {
        let mut seq = PollSequencer::new();
        let older = seq.issue();
        let newer = seq.issue();
        assert!(seq.accept(newer));
        assert!(!seq.accept(older));
        assert!(newer.get() > older.get());
    }

    #[test]
    fn gaps_are_fine() {
        let mut seq = PollSequencer::new();
        let first = seq.issue();
        let _lost = seq.issue();
        let third = seq.issue();
        assert!(seq.accept(first));
        assert!(seq.accept(third));
    }

    #[test]
    fn same_ticket_twice() {
        let mut seq = PollSequencer::new();
        let ticket = seq.issue();
        assert!(seq.accept(ticket));
        assert!(!seq.accept(ticket));
    }
}

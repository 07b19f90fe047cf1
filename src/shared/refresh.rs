//! Refresh sequencing for app-owned state containers.
//!
//! Every fetch is tagged with a ticket taken before the request is sent. A
//! result is applied only if its ticket is newer than the last applied one, so
//! a slow superseded request can never overwrite fresher data.

use serde::{Deserialize, Serialize};

/// Sequence number handed out when a refresh starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues tickets and remembers the newest one applied.
#[derive(Debug, Clone, Default)]
pub struct RefreshSequence {
    next: u64,
    applied: Option<u64>,
}

impl RefreshSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a request about to be sent.
    pub fn begin(&mut self) -> RefreshTicket {
        let ticket = RefreshTicket(self.next);
        self.next += 1;
        ticket
    }

    /// Mark `ticket` as applied. Returns `false` if a newer ticket was
    /// already applied, in which case the caller must drop the result.
    pub fn accept(&mut self, ticket: RefreshTicket) -> bool {
        match self.applied {
            Some(applied) if ticket.0 <= applied => false,
            _ => {
                self.applied = Some(ticket.0);
                true
            }
        }
    }

    /// Whether a request issued after the last applied result is still out.
    pub fn in_flight(&self) -> bool {
        match self.applied {
            Some(applied) => applied + 1 < self.next,
            None => self.next > 0,
        }
    }
}

/// Load state shown by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// Nothing applied yet, or a refresh is running.
    #[default]
    Loading,
    /// The latest applied fetch succeeded.
    Ready,
    /// The latest applied fetch failed. Maps to "No internet connection" plus a
    /// manual retry affordance.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let mut seq = RefreshSequence::new();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
        assert_eq!(a.value(), 0);
        assert_eq!(b.value(), 1);
    }

    #[test]
    fn test_newer_wins_over_late_older() {
        let mut seq = RefreshSequence::new();
        let old = seq.begin();
        let new = seq.begin();
        assert!(seq.accept(new));
        assert!(!seq.accept(old));
    }

    #[test]
    fn test_in_order_completion_accepted() {
        let mut seq = RefreshSequence::new();
        let first = seq.begin();
        assert!(seq.accept(first));
        let second = seq.begin();
        assert!(seq.accept(second));
    }

    #[test]
    fn test_same_ticket_applied_once() {
        let mut seq = RefreshSequence::new();
        let t = seq.begin();
        assert!(seq.accept(t));
        assert!(!seq.accept(t));
    }

    #[test]
    fn test_in_flight() {
        let mut seq = RefreshSequence::new();
        assert!(!seq.in_flight());
        let a = seq.begin();
        assert!(seq.in_flight());
        seq.accept(a);
        assert!(!seq.in_flight());
        let _b = seq.begin();
        let c = seq.begin();
        seq.accept(c);
        assert!(!seq.in_flight());
    }
}

//! Deadline-ordered queue of delayed actions.

use std::time::Instant;

#[derive(Debug)]
pub struct Timeline<A> {
    pending: Vec<(Instant, A)>,
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, at: Instant, action: A) {
        // Stable: equal deadlines fire in the order they were scheduled.
        let index = self.pending.partition_point(|(deadline, _)| *deadline <= at);
        self.pending.insert(index, (at, action));
    }

    /// Removes and returns every action due at `now`, earliest first.
    pub fn due(&mut self, now: Instant) -> Vec<A> {
        let ready = self.pending.partition_point(|(deadline, _)| *deadline <= now);
        self.pending.drain(..ready).map(|(_, action)| action).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}

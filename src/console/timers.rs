use std::collections::HashMap;

use tokio::time::Instant;

use crate::state::Cycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingCompletion {
    cycle: Cycle,
    deadline: Instant,
}

/// Deadlines of the completions the appliance has asked for, keyed by the
/// generation of the cycle that scheduled them.
#[derive(Debug, Default)]
pub struct CompletionTimers {
    pending: HashMap<u64, PendingCompletion>,
}

impl CompletionTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, cycle: Cycle, generation: u64, deadline: Instant) {
        let replaced = self
            .pending
            .insert(generation, PendingCompletion { cycle, deadline });
        debug_assert!(
            replaced.is_none(),
            "generation {generation} scheduled twice"
        );
    }

    pub fn abandon(&mut self, generation: u64) -> bool {
        self.pending.remove(&generation).is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|entry| entry.deadline).min()
    }

    /// Removes and returns every completion due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<(Cycle, u64)> {
        let mut due: Vec<(Instant, u64, Cycle)> = self
            .pending
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .map(|(generation, entry)| (entry.deadline, *generation, entry.cycle))
            .collect();
        due.sort_by_key(|(deadline, generation, _)| (*deadline, *generation));
        for (_, generation, _) in &due {
            self.pending.remove(generation);
        }
        due.into_iter()
            .map(|(_, generation, cycle)| (cycle, generation))
            .collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

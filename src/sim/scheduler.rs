//! Cooperative periodic-task scheduler on a virtual millisecond clock
//!
//! The engine owns one scheduler and drives it by advancing time. Due tasks
//! are handed out one at a time in due order, so each tick callback runs to
//! completion before the next is popped. `cancel_all` bumps the generation,
//! which revokes every outstanding handle at once; callers check
//! `is_live` on entry so a handle popped before a cancel is dropped.

/// Identifies one scheduled task within one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    id: u32,
    generation: u64,
}

#[derive(Debug, Clone)]
struct PeriodicTask<K> {
    handle: TaskHandle,
    kind: K,
    period_ms: u64,
    next_due_ms: u64,
}

/// A task that fell due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Due<K> {
    pub handle: TaskHandle,
    pub kind: K,
}

#[derive(Debug, Clone)]
pub struct Scheduler<K> {
    now_ms: u64,
    generation: u64,
    next_id: u32,
    /// Registration order, used to break due-time ties
    tasks: Vec<PeriodicTask<K>>,
}

impl<K: Copy> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy> Scheduler<K> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            generation: 0,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Current virtual time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Register a repeating task. First fire is one period from now, like
    /// an interval timer.
    pub fn schedule(&mut self, kind: K, period_ms: u64) -> TaskHandle {
        debug_assert!(period_ms > 0, "zero period would never let time advance");
        let handle = TaskHandle {
            id: self.next_id,
            generation: self.generation,
        };
        self.next_id += 1;
        self.tasks.push(PeriodicTask {
            handle,
            kind,
            period_ms,
            next_due_ms: self.now_ms + period_ms,
        });
        handle
    }

    /// Cancel everything and revoke all outstanding handles
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
        self.generation += 1;
    }

    /// Whether a handle still belongs to a scheduled task
    pub fn is_live(&self, handle: TaskHandle) -> bool {
        handle.generation == self.generation && self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Milliseconds until the next task falls due
    pub fn time_to_next(&self) -> Option<u64> {
        self.tasks
            .iter()
            .map(|t| t.next_due_ms.saturating_sub(self.now_ms))
            .min()
    }

    /// Pop the earliest task due at or before `until_ms`, moving the clock to
    /// its due time (readable through `now_ms`) and rescheduling it one
    /// period later. Returns `None` once nothing else is due.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Due<K>> {
        let mut best: Option<usize> = None;
        for (i, task) in self.tasks.iter().enumerate() {
            if task.next_due_ms > until_ms {
                continue;
            }
            // Strictly earlier wins, so ties keep registration order
            if best.is_none_or(|b| task.next_due_ms < self.tasks[b].next_due_ms) {
                best = Some(i);
            }
        }
        let task = &mut self.tasks[best?];
        let at_ms = task.next_due_ms;
        task.next_due_ms = at_ms.saturating_add(task.period_ms);
        self.now_ms = self.now_ms.max(at_ms);
        Some(Due {
            handle: task.handle,
            kind: task.kind,
        })
    }

    /// Move the clock forward without firing anything. Call after draining
    /// `pop_due` for the same instant.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

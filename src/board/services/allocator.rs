//! Session-scoped identifier allocation for locally created tasks.

use crate::board::domain::TaskId;

/// Default first identifier handed out to local tasks.
///
/// Sits above the identifier range of the upstream list endpoint.
pub const DEFAULT_ID_SEED: u64 = 200;

/// Monotonic identifier counter.
///
/// Identifiers are never reused, including those of deleted tasks, and the
/// counter is never lowered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<u64>,
}

impl IdAllocator {
    /// Creates an allocator whose first identifier is `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { next: Some(seed) }
    }

    /// Returns the identifier the next allocation will produce, if any
    /// remain.
    #[must_use]
    pub const fn peek(&self) -> Option<TaskId> {
        match self.next {
            Some(value) => Some(TaskId::new(value)),
            None => None,
        }
    }

    /// Consumes and returns the next identifier.
    ///
    /// Returns `None` once the identifier space is exhausted.
    pub fn allocate(&mut self) -> Option<TaskId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(TaskId::new(current))
    }

    /// Raises the counter so every later allocation is greater than `id`.
    pub fn reserve_above(&mut self, id: TaskId) {
        let Some(next) = self.next else {
            return;
        };
        if id.value() >= next {
            self.next = id.value().checked_add(1);
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_SEED)
    }
}

//! Task scheduler.
//!
//! Tasks request service by setting their bit in a 16-bit wakeup mask. The
//! task-switch function (F1 `task`) picks the highest awake task as the
//! `pending` task; the switch itself happens one microinstruction later,
//! through the `next` latch:
//!
//! 1. cycle N runs `TASK`: `pending` is set.
//! 2. end of cycle N: `current == next`, so `next` latches `pending`.
//! 3. cycle N+1 still runs the old task.
//! 4. end of cycle N+1: `current != next`, the switch happens.

use crate::core::arch::task::Task;

/// What the end-of-cycle evaluation decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Switch {
    /// The current task keeps running.
    Stay,
    /// The pending task was latched; one more instruction of the current task.
    Latched,
    /// Control passes from one task to another now.
    To {
        /// Task that was running.
        from: Task,
        /// Task that runs next.
        to: Task,
    },
}

/// Wakeup mask and the two-stage switch latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskScheduler {
    wakeup: u16,
    current: Task,
    next: Task,
    pending: Task,
}

impl TaskScheduler {
    /// Creates a scheduler with no task awake and the emulator running.
    pub const fn new() -> Self {
        Self {
            wakeup: 0,
            current: Task::Emu,
            next: Task::Emu,
            pending: Task::Emu,
        }
    }

    /// Returns the running task.
    #[inline]
    pub const fn current(&self) -> Task {
        self.current
    }

    /// Returns the task latched to run after the current instruction.
    #[inline]
    pub const fn next(&self) -> Task {
        self.next
    }

    /// Returns the result of the most recent arbitration.
    #[inline]
    pub const fn pending(&self) -> Task {
        self.pending
    }

    /// Forces the arbitration result, as a soft reset does.
    pub const fn set_pending(&mut self, task: Task) {
        self.pending = task;
    }

    /// Makes `task` the running task with nothing pending.
    pub const fn force(&mut self, task: Task) {
        self.current = task;
        self.next = task;
        self.pending = task;
    }

    /// Sets a task's wakeup bit.
    #[inline]
    pub const fn wake(&mut self, task: Task) {
        self.wakeup |= task.bit();
    }

    /// Clears a task's wakeup bit.
    #[inline]
    pub const fn block(&mut self, task: Task) {
        self.wakeup &= !task.bit();
    }

    /// Returns `true` if the task's wakeup bit is set.
    #[inline]
    pub const fn is_awake(&self, task: Task) -> bool {
        self.wakeup & task.bit() != 0
    }

    /// Returns the whole wakeup mask (bit N is task N).
    #[inline]
    pub const fn wakeup_mask(&self) -> u16 {
        self.wakeup
    }

    /// Selects the highest-priority awake task as `pending`.
    ///
    /// # Returns
    ///
    /// The selected task, or `None` if no task is awake (pending unchanged).
    pub const fn arbitrate(&mut self) -> Option<Task> {
        if self.wakeup == 0 {
            return None;
        }
        let winner = Task::from_index(15 - self.wakeup.leading_zeros() as usize);
        self.pending = winner;
        Some(winner)
    }

    /// Advances the switch latch at the end of a microcycle.
    ///
    /// # Returns
    ///
    /// `Switch::To` when the caller must save the old task's context and
    /// restore the new one.
    pub const fn evaluate(&mut self) -> Switch {
        if self.current.index() == self.pending.index() {
            return Switch::Stay;
        }
        if self.current.index() == self.next.index() {
            self.next = self.pending;
            return Switch::Latched;
        }
        let from = self.current;
        self.current = self.next;
        Switch::To {
            from,
            to: self.current,
        }
    }
}

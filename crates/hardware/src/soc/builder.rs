//! System construction and the top-level `System` type.
//!
//! This module groups the collaborators of the microengine. It provides:
//! 1. **Memory:** The boxed `MemorySystem`.
//! 2. **Peripherals:** The boxed display/unload/mouse hooks.
//! 3. **Task extension:** The boxed per-task initializer and device functions.
//! 4. **Leave flag:** A shared `AtomicBool` that stops the run loop.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::soc::memory::FlatMemory;
use crate::soc::traits::{MemorySystem, NoExtension, NullPeripherals, Peripherals, TaskExtension};

/// Top-level system instance holding the engine's collaborators.
pub struct System {
    /// Main memory.
    pub memory: Box<dyn MemorySystem>,
    /// Display, unload and mouse hooks.
    pub peripherals: Box<dyn Peripherals>,
    /// Device-specific task behaviour.
    pub extension: Box<dyn TaskExtension>,
    /// When set, the run loop returns at the top of the next microcycle.
    pub leave: Arc<AtomicBool>,
}

impl System {
    /// Builds a system from its collaborators.
    ///
    /// # Arguments
    ///
    /// * `memory` - Main memory implementation.
    /// * `peripherals` - Peripheral hooks.
    /// * `extension` - Task extension installed at cold reset.
    ///
    /// # Returns
    ///
    /// A `System` with a cleared leave flag.
    pub fn new(
        memory: Box<dyn MemorySystem>,
        peripherals: Box<dyn Peripherals>,
        extension: Box<dyn TaskExtension>,
    ) -> Self {
        Self {
            memory,
            peripherals,
            extension,
            leave: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a handle another thread can use to stop the run loop.
    pub fn leave_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.leave)
    }

    /// Requests the run loop to return.
    pub fn request_leave(&self) {
        self.leave.store(true, Ordering::Relaxed);
    }

    /// Returns `true` if a leave was requested, clearing the request.
    pub fn take_leave(&self) -> bool {
        self.leave.swap(false, Ordering::Relaxed)
    }
}

impl Default for System {
    /// Flat memory, no peripherals, no task extension.
    fn default() -> Self {
        Self::new(
            Box::new(FlatMemory::new()),
            Box::new(NullPeripherals),
            Box::new(NoExtension),
        )
    }
}

impl fmt::Debug for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("System")
            .field("leave", &self.leave.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

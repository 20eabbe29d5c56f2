//! Collaborator mocks.


/// `mockall` memory and a recording flat memory with scripted stalls.
pub mod memory;

/// Recording peripherals.
pub mod peripherals;

/// `CpuError` messages.
pub mod error;

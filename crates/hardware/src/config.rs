//! Configuration system for the microcode engine.
//!
//! This module defines the configuration structures used to parameterize the
//! emulator. It provides:
//! 1. **Defaults:** Baseline timing and reset constants.
//! 2. **Structures:** Hierarchical config for general, timing, and reset settings.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the emulator.
///
/// These values describe the stock machine when a field is not explicitly
/// present in the JSON configuration.
mod defaults {
    use crate::common::constants;

    /// Microcycle time (169.542 ns, a 5.9 MHz microinstruction rate).
    pub const UCYCLE_PS: i64 = constants::UCYCLE_PS;

    /// Display word slot time (24 pixel clocks of 49.6 ns).
    pub const DISPLAY_WORD_PS: i64 = constants::DISPLAY_WORD_BITS * constants::DISPLAY_BIT_PS;

    /// Every task starts in ROM.
    pub const RESET_MODE: u16 = constants::RESET_MODE_ALL_ROM;
}

/// Root configuration structure.
///
/// Contains all configuration sections for the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General settings (tracing).
    #[serde(default)]
    pub general: GeneralConfig,
    /// Microcycle and display timing.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Cold reset behaviour.
    #[serde(default)]
    pub reset: ResetConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text.
    ///
    /// # Returns
    ///
    /// The parsed `Config`, or the `serde_json` error describing the first problem.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General emulator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace!` event per microinstruction and per dispatched operation.
    #[serde(default)]
    pub trace_microcode: bool,
}

/// Timing of the microcycle and of the display word slots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Duration of one microcycle in picoseconds.
    #[serde(default = "TimingConfig::default_ucycle_ps")]
    pub ucycle_ps: i64,

    /// Time between two calls of the display state machine in picoseconds.
    #[serde(default = "TimingConfig::default_display_word_ps")]
    pub display_word_ps: i64,
}

impl TimingConfig {
    /// Returns the default microcycle time.
    const fn default_ucycle_ps() -> i64 {
        defaults::UCYCLE_PS
    }

    /// Returns the default display word slot time.
    const fn default_display_word_ps() -> i64 {
        defaults::DISPLAY_WORD_PS
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ucycle_ps: Self::default_ucycle_ps(),
            display_word_ps: Self::default_display_word_ps(),
        }
    }
}

/// Cold reset settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResetConfig {
    /// Per-task reset mode: a set bit starts the task in ROM, a clear bit in RAM.
    #[serde(default = "ResetConfig::default_reset_mode")]
    pub reset_mode: u16,
}

impl ResetConfig {
    /// Returns the default reset mode (all tasks in ROM).
    const fn default_reset_mode() -> u16 {
        defaults::RESET_MODE
    }
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            reset_mode: Self::default_reset_mode(),
        }
    }
}

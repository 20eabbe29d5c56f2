use alto2_core::Simulator;
use alto2_core::common::CpuError;
use alto2_core::config::Config;
use alto2_core::core::Cpu;
use alto2_core::core::cpu::execution::Cycle;
use alto2_core::soc::{NoExtension, System, TaskExtension};
use tracing_subscriber::EnvFilter;

use crate::common::mocks::memory::{MemoryProbe, RecordingMemory};
use crate::common::mocks::peripherals::{PeripheralProbe, RecordingPeripherals};

/// Routes engine tracing into the test output; `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A cold-reset simulator wired to recording collaborators.
pub struct TestContext {
    pub sim: Simulator,
    pub memory: MemoryProbe,
    pub peripherals: PeripheralProbe,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self::build(config, Box::new(NoExtension))
    }

    pub fn with_extension(extension: Box<dyn TaskExtension>) -> Self {
        Self::build(&Config::default(), extension)
    }

    fn build(config: &Config, extension: Box<dyn TaskExtension>) -> Self {
        init_tracing();
        let (memory, memory_probe) = RecordingMemory::new();
        let (peripherals, peripheral_probe) = RecordingPeripherals::new();
        let system = System::new(Box::new(memory), Box::new(peripherals), extension);
        Self {
            sim: Simulator::new(system, config),
            memory: memory_probe,
            peripherals: peripheral_probe,
        }
    }

    /// Writes logical microwords at the given control store addresses.
    pub fn with_ucode(mut self, words: &[(u16, u32)]) -> Self {
        for &(address, word) in words {
            self.sim.cpu.store.write(address, word);
        }
        self
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    pub fn try_step(&mut self) -> Result<Cycle, CpuError> {
        self.sim.cpu.step(&mut self.sim.system)
    }

    /// Runs one microcycle that must not fail.
    pub fn step(&mut self) -> Cycle {
        self.try_step().expect("microcycle failed")
    }

    /// Runs `cycles` microcycles that must not fail.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            let _ = self.step();
        }
    }
}

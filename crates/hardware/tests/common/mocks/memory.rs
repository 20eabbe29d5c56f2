use std::sync::{Arc, Mutex};

use alto2_core::soc::MemorySystem;
use alto2_core::soc::memory::FlatMemory;
use mockall::mock;

mock! {
    pub Memory {}

    impl MemorySystem for Memory {
        fn check_load_mar_stall(&mut self, rsel: u8) -> bool;
        fn check_write_stall(&mut self) -> bool;
        fn check_read_stall(&mut self) -> bool;
        fn read(&mut self) -> u16;
        fn write(&mut self, value: u16);
        fn load_mar(&mut self, rsel: u8, address: u32);
    }
}

/// Everything a `RecordingMemory` saw, plus the stalls it still has to report.
#[derive(Debug, Default)]
pub struct MemoryLog {
    pub load_mar: Vec<(u8, u32)>,
    pub writes: Vec<(u32, u16)>,
    pub reads: Vec<u32>,
    pub load_mar_stalls: u32,
    pub write_stalls: u32,
    pub read_stalls: u32,
}

pub type MemoryProbe = Arc<Mutex<MemoryLog>>;

/// Flat memory that logs every reference and stalls on demand.
#[derive(Debug)]
pub struct RecordingMemory {
    inner: FlatMemory,
    log: MemoryProbe,
}

impl RecordingMemory {
    pub fn new() -> (Self, MemoryProbe) {
        let log = MemoryProbe::default();
        let memory = Self {
            inner: FlatMemory::new(),
            log: Arc::clone(&log),
        };
        (memory, log)
    }

    pub fn with_word(mut self, address: u32, value: u16) -> Self {
        self.inner.poke(address, value);
        self
    }
}

fn take_stall(remaining: &mut u32) -> bool {
    if *remaining > 0 {
        *remaining -= 1;
        true
    } else {
        false
    }
}

impl MemorySystem for RecordingMemory {
    fn check_load_mar_stall(&mut self, _rsel: u8) -> bool {
        take_stall(&mut self.log.lock().unwrap().load_mar_stalls)
    }

    fn check_write_stall(&mut self) -> bool {
        take_stall(&mut self.log.lock().unwrap().write_stalls)
    }

    fn check_read_stall(&mut self) -> bool {
        take_stall(&mut self.log.lock().unwrap().read_stalls)
    }

    fn read(&mut self) -> u16 {
        self.log.lock().unwrap().reads.push(self.inner.mar());
        self.inner.read()
    }

    fn write(&mut self, value: u16) {
        self.log.lock().unwrap().writes.push((self.inner.mar(), value));
        self.inner.write(value);
    }

    fn load_mar(&mut self, rsel: u8, address: u32) {
        self.log.lock().unwrap().load_mar.push((rsel, address));
        self.inner.load_mar(rsel, address);
    }
}

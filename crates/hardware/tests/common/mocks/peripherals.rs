use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use alto2_core::soc::Peripherals;

/// Calls seen by `RecordingPeripherals` and the values it hands back.
#[derive(Debug, Default)]
pub struct PeripheralLog {
    pub display_states: Vec<u16>,
    pub unloaded: Vec<u16>,
    pub unload_script: VecDeque<Option<(u16, i64)>>,
    pub mouse: u16,
    pub disp: Option<u16>,
}

pub type PeripheralProbe = Arc<Mutex<PeripheralLog>>;

/// Peripherals that advance the display state by one per slot and
/// answer unload requests from a script.
#[derive(Debug)]
pub struct RecordingPeripherals {
    log: PeripheralProbe,
}

impl RecordingPeripherals {
    pub fn new() -> (Self, PeripheralProbe) {
        let log = Arc::new(Mutex::new(PeripheralLog {
            mouse: 0o177777,
            ..PeripheralLog::default()
        }));
        (
            Self {
                log: Arc::clone(&log),
            },
            log,
        )
    }
}

impl Peripherals for RecordingPeripherals {
    fn display_state(&mut self, state: u16) -> u16 {
        self.log.lock().unwrap().display_states.push(state);
        state + 1
    }

    fn unload_word(&mut self, word: u16) -> Option<(u16, i64)> {
        let mut log = self.log.lock().unwrap();
        log.unloaded.push(word);
        log.unload_script.pop_front().flatten()
    }

    fn mouse(&mut self) -> u16 {
        self.log.lock().unwrap().mouse
    }

    fn disp(&mut self) -> Option<u16> {
        self.log.lock().unwrap().disp
    }
}

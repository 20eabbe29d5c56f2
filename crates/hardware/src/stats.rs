//! Simulation statistics collection and reporting.
//!
//! This module tracks run metrics of the microengine. It provides:
//! 1. **Cycles:** Total microcycles and derived host speed.
//! 2. **Stalls:** Counts per memory stall kind.
//! 3. **Tasks:** Task switches, cycles and emulated time per task.
//! 4. **Side effects:** Display slots, unloaded words and control store RAM accesses.

use std::time::Instant;

use crate::common::constants::TASK_COUNT;
use crate::core::cpu::execution::Stall;
use crate::isa::names::task_name;

/// Run statistics of one CPU.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total microcycles, stalled cycles included.
    pub cycles: u64,

    /// Cycles lost waiting to load MAR.
    pub stalls_load_mar: u64,
    /// Cycles lost waiting to write MD.
    pub stalls_write: u64,
    /// Cycles lost waiting to read MD.
    pub stalls_read: u64,

    /// Completed task switches.
    pub task_switches: u64,
    /// Microcycles run by each task.
    pub task_cycles: [u64; TASK_COUNT],
    /// Emulated picoseconds spent in each task.
    pub task_time_ps: [u64; TASK_COUNT],

    /// Display word slots elapsed.
    pub display_slots: u64,
    /// Display words unloaded.
    pub unload_words: u64,
    /// RDRAM operations executed.
    pub rdram: u64,
    /// WRTRAM operations executed.
    pub wrtram: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            stalls_load_mar: 0,
            stalls_write: 0,
            stalls_read: 0,
            task_switches: 0,
            task_cycles: [0; TASK_COUNT],
            task_time_ps: [0; TASK_COUNT],
            display_slots: 0,
            unload_words: 0,
            rdram: 0,
            wrtram: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"stalls"`, `"tasks"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "stalls", "tasks"];

impl SimStats {
    /// Counts one stalled cycle.
    pub const fn record_stall(&mut self, stall: Stall) {
        match stall {
            Stall::LoadMar => self.stalls_load_mar += 1,
            Stall::Write => self.stalls_write += 1,
            Stall::Read => self.stalls_read += 1,
        }
    }

    /// Returns the total number of stalled cycles.
    pub const fn stalls(&self) -> u64 {
        self.stalls_load_mar + self.stalls_write + self.stalls_read
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Section names from `STATS_SECTIONS`, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;

        if want("summary") {
            let khz = (self.cycles as f64 / seconds) / 1000.0;
            println!("\n==========================================================");
            println!("MICROENGINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {khz:.2} kHz");
            println!("task_switches            {}", self.task_switches);
            println!("display_slots            {}", self.display_slots);
            println!("unload_words             {}", self.unload_words);
            println!("cram.rdram               {}", self.rdram);
            println!("cram.wrtram              {}", self.wrtram);
            println!("----------------------------------------------------------");
        }
        if want("stalls") {
            println!("STALLS");
            for (name, count) in [
                ("stalls.load_mar", self.stalls_load_mar),
                ("stalls.write_md", self.stalls_write),
                ("stalls.read_md", self.stalls_read),
            ] {
                println!(
                    "  {name:<22} {count} ({:.2}%)",
                    (count as f64 / cyc) * 100.0
                );
            }
            println!("----------------------------------------------------------");
        }
        if want("tasks") {
            println!("TASKS");
            for (idx, &cycles) in self.task_cycles.iter().enumerate() {
                if cycles == 0 {
                    continue;
                }
                println!(
                    "  {:02o} {:<8} cycles: {:<10} ({:.2}%) | time: {:.3} ms",
                    idx,
                    task_name(idx),
                    cycles,
                    (cycles as f64 / cyc) * 100.0,
                    self.task_time_ps[idx] as f64 / 1e9
                );
            }
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

//! Compliant computer: depends on part traits, parts are injected.

use super::{missing_parts, RunOutcome};
use crate::config::DemoConfig;
use crate::console::Console;

pub trait Cpu {
    fn run(&self, console: &dyn Console);
}

pub trait Memory {
    fn save_data(&mut self, data: &str, console: &dyn Console);
    fn get_data(&self, console: &dyn Console) -> String;
}

pub trait HardDisk {
    fn save_data(&mut self, data: &str, console: &dyn Console);
    fn get_data(&self, console: &dyn Console) -> String;
}

// ============================================================================
// Concrete parts
// ============================================================================

#[derive(Debug, Default)]
pub struct IntelCpu;

impl Cpu for IntelCpu {
    fn run(&self, console: &dyn Console) {
        console.print("Running the Intel CPU");
    }
}

#[derive(Debug, Default)]
pub struct WwjCpu;

impl Cpu for WwjCpu {
    fn run(&self, console: &dyn Console) {
        console.print("Running the WWJ CPU");
    }
}

#[derive(Debug, Default)]
pub struct KingstonMemory {
    data: String,
}

impl Memory for KingstonMemory {
    fn save_data(&mut self, data: &str, console: &dyn Console) {
        console.print(&format!("Saving data to Kingston memory: {data}"));
        self.data = data.to_string();
    }

    fn get_data(&self, console: &dyn Console) -> String {
        console.print(&format!("Reading data from Kingston memory: {}", self.data));
        self.data.clone()
    }
}

#[derive(Debug, Default)]
pub struct XiJieHardDisk {
    data: String,
}

impl HardDisk for XiJieHardDisk {
    fn save_data(&mut self, data: &str, console: &dyn Console) {
        console.print(&format!("Saving data to XiJie hard disk: {data}"));
        self.data = data.to_string();
    }

    fn get_data(&self, console: &dyn Console) -> String {
        console.print(&format!("Reading data from XiJie hard disk: {}", self.data));
        self.data.clone()
    }
}

// ============================================================================
// Computer
// ============================================================================

#[derive(Default)]
pub struct Computer {
    cpu: Option<Box<dyn Cpu>>,
    memory: Option<Box<dyn Memory>>,
    hard_disk: Option<Box<dyn HardDisk>>,
}

impl Computer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cpu(&mut self, cpu: Box<dyn Cpu>) {
        self.cpu = Some(cpu);
    }

    pub fn set_memory(&mut self, memory: Box<dyn Memory>) {
        self.memory = Some(memory);
    }

    pub fn set_hard_disk(&mut self, hard_disk: Box<dyn HardDisk>) {
        self.hard_disk = Some(hard_disk);
    }

    pub fn cpu(&self) -> Option<&dyn Cpu> {
        self.cpu.as_deref()
    }

    pub fn memory(&self) -> Option<&dyn Memory> {
        self.memory.as_deref()
    }

    pub fn hard_disk(&self) -> Option<&dyn HardDisk> {
        self.hard_disk.as_deref()
    }

    /// Stores and reads back `first` on the hard disk and `second` in memory, then runs the cpu.
    ///
    /// Nothing is touched unless all three slots are filled.
    pub fn run(&mut self, console: &dyn Console, first: &str, second: &str) -> RunOutcome {
        if let (Some(cpu), Some(memory), Some(hard_disk)) = (
            self.cpu.as_deref(),
            self.memory.as_deref_mut(),
            self.hard_disk.as_deref_mut(),
        ) {
            hard_disk.save_data(first, console);
            hard_disk.get_data(console);

            memory.save_data(second, console);
            memory.get_data(console);

            cpu.run(console);
            return RunOutcome::Ran;
        }

        let missing = missing_parts(
            self.cpu.is_some(),
            self.memory.is_some(),
            self.hard_disk.is_some(),
        );
        tracing::warn!(?missing, "computer cannot run");
        console.print("The computer is missing essential parts!");
        RunOutcome::MissingParts(missing)
    }
}

/// Runs an empty computer, then the same computer with injected parts.
pub fn demo(console: &dyn Console, config: &DemoConfig) -> Vec<RunOutcome> {
    let payloads = &config.dip;
    let mut computer = Computer::new();
    let first = computer.run(console, &payloads.first_payload, &payloads.second_payload);

    console.separator(&config.output.separator);

    computer.set_cpu(Box::new(WwjCpu));
    computer.set_hard_disk(Box::new(XiJieHardDisk::default()));
    computer.set_memory(Box::new(KingstonMemory::default()));

    let second = computer.run(console, &payloads.first_payload, &payloads.second_payload);
    vec![first, second]
}

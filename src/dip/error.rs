//! Non-compliant computer: its fields name concrete part brands.
//!
//! The parts have no shared trait, so swapping Intel for another cpu means
//! rewriting `Computer` itself.

use super::{missing_parts, RunOutcome};
use crate::config::DemoConfig;
use crate::console::Console;

#[derive(Debug, Default)]
pub struct IntelCpu;

impl IntelCpu {
    pub fn run(&self, console: &dyn Console) {
        console.print("Intel CPU is running");
    }
}

#[derive(Debug, Default)]
pub struct KingstonMemory {
    data: String,
}

impl KingstonMemory {
    pub fn save(&mut self, data: &str, console: &dyn Console) {
        console.print(&format!("Kingston memory saved: {data}"));
        self.data = data.to_string();
    }

    pub fn get(&self, console: &dyn Console) -> String {
        console.print(&format!("Kingston memory read: {}", self.data));
        self.data.clone()
    }
}

#[derive(Debug, Default)]
pub struct XiJieHardDisk {
    data: String,
}

impl XiJieHardDisk {
    pub fn save_data(&mut self, data: &str, console: &dyn Console) {
        console.print(&format!("XiJie hard disk saved: {data}"));
        self.data = data.to_string();
    }

    pub fn get_data(&self, console: &dyn Console) -> String {
        console.print(&format!("XiJie hard disk read: {}", self.data));
        self.data.clone()
    }
}

#[derive(Debug, Default)]
pub struct Computer {
    cpu: Option<IntelCpu>,
    memory: Option<KingstonMemory>,
    hard_disk: Option<XiJieHardDisk>,
}

impl Computer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cpu(&mut self, cpu: IntelCpu) {
        self.cpu = Some(cpu);
    }

    pub fn set_memory(&mut self, memory: KingstonMemory) {
        self.memory = Some(memory);
    }

    pub fn set_hard_disk(&mut self, hard_disk: XiJieHardDisk) {
        self.hard_disk = Some(hard_disk);
    }

    pub fn cpu(&self) -> Option<&IntelCpu> {
        self.cpu.as_ref()
    }

    pub fn memory(&self) -> Option<&KingstonMemory> {
        self.memory.as_ref()
    }

    pub fn hard_disk(&self) -> Option<&XiJieHardDisk> {
        self.hard_disk.as_ref()
    }

    /// Runs the cpu, then stores `first` in memory and `second` on the hard disk.
    pub fn run(&mut self, console: &dyn Console, first: &str, second: &str) -> RunOutcome {
        if let (Some(cpu), Some(memory), Some(hard_disk)) =
            (self.cpu.as_ref(), self.memory.as_mut(), self.hard_disk.as_mut())
        {
            console.print("This computer is running normally!");
            cpu.run(console);
            memory.save(first, console);
            memory.get(console);
            hard_disk.save_data(second, console);
            hard_disk.get_data(console);
            return RunOutcome::Ran;
        }

        let missing = missing_parts(
            self.cpu.is_some(),
            self.memory.is_some(),
            self.hard_disk.is_some(),
        );
        tracing::warn!(?missing, "hard-wired computer cannot run");
        console.print("This computer is missing key parts!");
        RunOutcome::MissingParts(missing)
    }
}

/// Same scenario as the compliant demo, but only the named brands fit.
pub fn demo(console: &dyn Console, config: &DemoConfig) -> Vec<RunOutcome> {
    let payloads = &config.dip;
    let mut computer = Computer::new();
    let first = computer.run(console, &payloads.first_payload, &payloads.second_payload);

    console.separator(&config.output.separator);

    computer.set_cpu(IntelCpu);
    computer.set_memory(KingstonMemory::default());
    computer.set_hard_disk(XiJieHardDisk::default());

    let second = computer.run(console, &payloads.first_payload, &payloads.second_payload);
    vec![first, second]
}

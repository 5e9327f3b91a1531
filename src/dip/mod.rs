//! Dependency Inversion: a computer assembled from parts.
//!
//! `correct` depends on part traits and accepts any brand; `error` names the
//! concrete brands in its fields and cannot be upgraded without editing it.

pub mod correct;
pub mod error;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Cpu,
    Memory,
    HardDisk,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartKind::Cpu => write!(f, "cpu"),
            PartKind::Memory => write!(f, "memory"),
            PartKind::HardDisk => write!(f, "hard disk"),
        }
    }
}

/// Result of asking a computer to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Ran,
    MissingParts(Vec<PartKind>),
}

impl RunOutcome {
    pub fn ran(&self) -> bool {
        matches!(self, RunOutcome::Ran)
    }
}

/// Collects the kinds whose slot is empty, in cpu, memory, hard disk order.
pub(crate) fn missing_parts(cpu: bool, memory: bool, hard_disk: bool) -> Vec<PartKind> {
    [
        (cpu, PartKind::Cpu),
        (memory, PartKind::Memory),
        (hard_disk, PartKind::HardDisk),
    ]
    .into_iter()
    .filter(|(present, _)| !present)
    .map(|(_, kind)| kind)
    .collect()
}

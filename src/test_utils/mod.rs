//! Shared test fixtures for CPU, bus and dispatch tests.
//!
//! These helpers de-duplicate machine construction across the unit tests.
//! Every fixture captures console output so tests can assert on what PRN /
//! PRA emitted.

#![allow(dead_code)]

use crate::bus::{Bus, CaptureConsole};
use crate::cpu::core::Cpu;
use crate::cpu::dispatch::Operands;
use crate::cpu::state::CpuState;

/// Bus with zeroed memory and a capturing console (plus a handle to it).
pub fn capture_bus() -> (Bus, CaptureConsole) {
    let console = CaptureConsole::new();
    let bus = Bus::with_console(console.clone());
    (bus, console)
}

/// Fresh CPU with `program` loaded at $00 and output captured.
pub fn setup(program: &[u8]) -> (Cpu, Bus, CaptureConsole) {
    let (mut bus, console) = capture_bus();
    bus.load(program).expect("program fits in memory");
    (Cpu::new(), bus, console)
}

/// CPU state with the given register values (R0 first).
pub fn state_with_regs(values: &[u8]) -> CpuState {
    let mut s = CpuState::new();
    for (i, &v) in values.iter().enumerate() {
        s.set_reg(i as u8, v);
    }
    s
}

/// Shorthand for building handler operands.
pub fn ops(bytes: &[u8]) -> Operands {
    Operands::new(bytes)
}

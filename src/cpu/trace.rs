//! One-line CPU state dump for debugging.
//!
//! ```text
//! TRACE: PC | FL | M0 M1 M2 | R0 R1 R2 R3 R4 R5 R6 R7
//! TRACE: 00 | 00 | 82 00 08 | 00 00 00 00 00 00 00 00
//! ```
//! `M0..M2` are the bytes at PC, PC+1, PC+2. Everything is two-digit
//! uppercase hex, so every line has the same width. Memory is read with
//! `peek`, so dumping never changes MAR/MDR or any other state.

use std::fmt::Write;

use crate::bus::Bus;
use crate::cpu::state::CpuState;

pub fn trace(state: &CpuState, bus: &Bus) -> String {
    let pc = state.pc();
    let mut line = format!(
        "TRACE: {:02X} | {:02X} | {:02X} {:02X} {:02X} |",
        pc,
        state.flags().bits(),
        bus.peek(pc),
        bus.peek(pc.wrapping_add(1)),
        bus.peek(pc.wrapping_add(2)),
    );
    for r in state.regs.as_array() {
        // Writing into a String cannot fail.
        let _ = write!(line, " {r:02X}");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::Flags;
    use crate::test_utils::setup;

    #[test]
    fn dump_format() {
        let (mut cpu, mut bus, _) = setup(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
        assert_eq!(
            trace(cpu.state(), &bus),
            "TRACE: 00 | 00 | 82 00 08 | 00 00 00 00 00 00 00 00"
        );
        cpu.step(&mut bus);
        cpu.state_mut().set_flags(Flags::LESS);
        cpu.state_mut().set_reg(7, 0xF4);
        assert_eq!(
            trace(cpu.state(), &bus),
            "TRACE: 03 | 04 | 47 00 01 | 08 00 00 00 00 00 00 F4"
        );
    }

    #[test]
    fn dump_does_not_touch_memory_latches() {
        let (cpu, mut bus, _) = setup(&[0x01]);
        bus.write(0x33, 0x44);
        let _ = trace(cpu.state(), &bus);
        assert_eq!((bus.ram.mar(), bus.ram.mdr()), (0x33, 0x44));
    }

    #[test]
    fn dump_wraps_memory_window() {
        let (mut cpu, mut bus, _) = setup(&[0xAA, 0xBB]);
        bus.write(0xFF, 0x01);
        cpu.state_mut().set_pc(0xFF);
        assert!(trace(cpu.state(), &bus).starts_with("TRACE: FF | 00 | 01 AA BB |"));
    }
}

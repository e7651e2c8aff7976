//! Terminal execution faults.
//!
//! A fault stops the fetch-decode-execute loop and is kept in
//! [`RunState::Faulted`](crate::cpu::core::RunState) for the host to inspect.
//! It never unwinds or exits the process.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuFault {
    /// No handler is registered for the fetched opcode.
    #[error("unknown opcode 0x{opcode:02X} at pc 0x{pc:02X}")]
    UnknownOpcode { opcode: u8, pc: u8 },
    /// DIV or MOD with a zero divisor.
    #[error("{mnemonic}: division by zero at pc 0x{pc:02X}")]
    DivisionByZero { mnemonic: &'static str, pc: u8 },
}

impl CpuFault {
    /// Program counter of the instruction that faulted.
    pub fn pc(&self) -> u8 {
        match *self {
            CpuFault::UnknownOpcode { pc, .. } | CpuFault::DivisionByZero { pc, .. } => pc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_pc_and_opcode() {
        let f = CpuFault::UnknownOpcode {
            opcode: 0xFF,
            pc: 0x03,
        };
        assert_eq!(f.to_string(), "unknown opcode 0xFF at pc 0x03");
        assert_eq!(f.pc(), 0x03);

        let f = CpuFault::DivisionByZero {
            mnemonic: "MOD",
            pc: 0x10,
        };
        assert_eq!(f.to_string(), "MOD: division by zero at pc 0x10");
    }
}

/*!
table.rs - Static opcode table: 256 entries, one per possible opcode byte.

Design
------
- Table: `[Option<OpcodeEntry>; 256]`, built in a const initializer from the
  same `for_each_opcode!` list that defines `Opcode`, so the two cannot
  disagree. Nothing mutates it after compilation.
- Entrypoint: `resolve(opcode) -> Option<&'static OpcodeEntry>`. `None` is an
  ordinary answer ("no such instruction"); the loop turns it into a fault.
- Operand count and sets-PC are derived from the opcode bits on demand
  (`opcodes::operand_count`, `opcodes::sets_pc`), never stored.
*/

use crate::cpu::dispatch::OpHandler;
use crate::cpu::opcodes::{self, Opcode, for_each_opcode};

/// One implemented instruction: what it is and how to run it.
#[derive(Clone, Copy)]
pub struct OpcodeEntry {
    pub opcode: Opcode,
    pub handler: OpHandler,
}

impl OpcodeEntry {
    #[inline]
    pub fn code(&self) -> u8 {
        self.opcode.code()
    }

    #[inline]
    pub fn mnemonic(&self) -> &'static str {
        self.opcode.mnemonic()
    }

    #[inline]
    pub fn operand_count(&self) -> u8 {
        opcodes::operand_count(self.code())
    }

    #[inline]
    pub fn sets_pc(&self) -> bool {
        opcodes::sets_pc(self.code())
    }

    #[inline]
    pub fn is_alu(&self) -> bool {
        opcodes::is_alu(self.code())
    }
}

/// One listing line: `CODE MNEMONIC OPERANDS KIND`, e.g. `A0  ADD  2 alu`.
impl std::fmt::Display for OpcodeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_alu() {
            "alu"
        } else if self.sets_pc() {
            "jump"
        } else {
            "-"
        };
        write!(
            f,
            "{:02X}  {:<4} {} {kind}",
            self.code(),
            self.mnemonic(),
            self.operand_count()
        )
    }
}

impl std::fmt::Debug for OpcodeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpcodeEntry")
            .field("mnemonic", &self.mnemonic())
            .field("code", &format_args!("0x{:02X}", self.code()))
            .field("operands", &self.operand_count())
            .field("sets_pc", &self.sets_pc())
            .finish()
    }
}

/// Look up the handler for an opcode byte.
#[inline]
pub fn resolve(opcode: u8) -> Option<&'static OpcodeEntry> {
    EXEC_TABLE[opcode as usize].as_ref()
}

/// Iterate every registered entry in opcode order.
pub fn entries() -> impl Iterator<Item = &'static OpcodeEntry> {
    EXEC_TABLE.iter().flatten()
}

macro_rules! build_table {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $code:literal, $mnemonic:literal => $handler:path
        ),* $(,)?
    ) => {
        static EXEC_TABLE: [Option<OpcodeEntry>; 256] = {
            let mut t: [Option<OpcodeEntry>; 256] = [None; 256];
            $(
                t[$code] = Some(OpcodeEntry {
                    opcode: Opcode::$name,
                    handler: $handler,
                });
            )*
            t
        };
    };
}

for_each_opcode!(build_table);

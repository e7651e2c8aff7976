/*!
dispatch - LS-8 instruction handlers, grouped by family.

Overview
========
Every handler has the same shape (`OpHandler`):

```text
fn(&mut dyn CpuRegs, &mut Bus, Operands) -> Result<Flow, CpuFault>
```

and is registered in the static table built by `cpu::table`. Handlers:
- read operands from the pre-fetched `Operands` (never from memory at PC),
- may touch registers, flags, memory and the console,
- set PC only if their opcode carries the sets-PC bit (jump family),
- never advance PC otherwise; the loop does that after they return.

Families
========
- misc:       NOP, HLT
- load_store: LDI, LD, ST
- io:         PRN, PRA
- arithmetic: ADD, SUB, MUL, DIV, MOD, ADDI, SUBI, INC, DEC
- logical:    AND, OR, XOR, NOT, SHL, SHR
- compare:    CMP (sole writer of FL)
- branches:   JMP, JEQ, JNE, JGT, JLT, JLE, JGE
*/

use crate::bus::Bus;
use crate::cpu::fault::CpuFault;
use crate::cpu::regs::CpuRegs;

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod io;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;

/// Uniform handler signature stored in the dispatch table.
pub type OpHandler = fn(&mut dyn CpuRegs, &mut Bus, Operands) -> Result<Flow, CpuFault>;

/// What the loop should do after a handler returns successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// Operand bytes that followed the opcode in memory.
///
/// Up to three bytes can be encoded (`opcode >> 6`); implemented
/// instructions use at most two. Missing operands read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Operands {
    bytes: [u8; 3],
    len: u8,
}

impl Operands {
    pub fn new(bytes: &[u8]) -> Self {
        let mut ops = Self::default();
        let len = bytes.len().min(ops.bytes.len());
        ops.bytes[..len].copy_from_slice(&bytes[..len]);
        ops.len = len as u8;
        ops
    }

    /// First operand (register index or immediate).
    #[inline]
    pub fn a(&self) -> u8 {
        self.bytes[0]
    }

    /// Second operand (register index or immediate).
    #[inline]
    pub fn b(&self) -> u8 {
        self.bytes[1]
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

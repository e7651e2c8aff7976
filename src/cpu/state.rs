/*!
state.rs - Canonical LS-8 architectural state (registers + flags) and
inline-friendly helpers.

Overview
========
`CpuState` is the single owner of every architecturally visible register:
  - R0..R7 general purpose registers (`RegisterFile`)
  - PC  program counter (8 bit, wraps)
  - IR  instruction register (opcode of the instruction being executed)
  - FL  flags register (`Flags`, only the low three bits are meaningful)

It excludes memory (see `bus`), decode/dispatch (see `table`, `dispatch`) and
run control (see `core`).

Flags Register Bit Layout
=========================
```text
Bit: 7 6 5 4 3 2 1 0
     0 0 0 0 0 L G E
```
Where:
  L = LESS
  G = GREATER
  E = EQUAL
Only CMP writes FL, and it always clears all three bits before setting one.
*/

use bitflags::bitflags;

/// Number of general purpose registers.
pub const REGISTER_COUNT: usize = 8;

bitflags! {
    /// FL register. At most one bit is set after any CMP.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const EQUAL   = 0b0000_0001;
        const GREATER = 0b0000_0010;
        const LESS    = 0b0000_0100;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}

/// Eight 8-bit general purpose registers.
///
/// Register operands are 3-bit fields in the encoding, so only the low three
/// bits of an index are used. Values are stored as `u8`; arithmetic that can
/// leave the byte range wraps before it gets here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterFile {
    cells: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    #[inline]
    pub fn get(&self, index: u8) -> u8 {
        self.cells[Self::slot(index)]
    }

    #[inline]
    pub fn set(&mut self, index: u8, value: u8) {
        self.cells[Self::slot(index)] = value;
    }

    #[inline]
    pub fn as_array(&self) -> &[u8; REGISTER_COUNT] {
        &self.cells
    }

    #[inline]
    fn slot(index: u8) -> usize {
        (index & 0b111) as usize
    }
}

/// Pure architectural register / flag container for the LS-8 CPU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuState {
    pub regs: RegisterFile,
    pub pc: u8,
    pub ir: u8,
    pub fl: Flags,
}

impl CpuState {
    // ---------------------------------------------------------------------
    // Construction / Reset
    // ---------------------------------------------------------------------

    /// Power-up state: everything zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ---------------------------------------------------------------------
    // Registers
    // ---------------------------------------------------------------------
    #[inline]
    pub fn reg(&self, index: u8) -> u8 {
        self.regs.get(index)
    }

    #[inline]
    pub fn set_reg(&mut self, index: u8, value: u8) {
        self.regs.set(index, value);
    }

    #[inline]
    pub fn pc(&self) -> u8 {
        self.pc
    }

    #[inline]
    pub fn set_pc(&mut self, v: u8) {
        self.pc = v;
    }

    #[inline]
    pub fn ir(&self) -> u8 {
        self.ir
    }

    #[inline]
    pub fn set_ir(&mut self, v: u8) {
        self.ir = v;
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.fl
    }

    #[inline]
    pub fn set_flags(&mut self, fl: Flags) {
        self.fl = fl;
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 8 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u8) {
        self.pc = self.pc.wrapping_add(delta);
    }
}

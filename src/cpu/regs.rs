/*!
regs.rs - CpuRegs trait: the register + flag interface instruction handlers
are written against.

The trait does NOT include:
  - Memory access (handlers take `&mut Bus` explicitly)
  - Operand fetch (the loop gathers operands before dispatch)
  - Run control (handlers report `Flow`, the loop owns the run state)

Handlers in the dispatch table take `&mut dyn CpuRegs`, so the table stays a
plain array of function pointers.
*/

use crate::cpu::state::{CpuState, Flags};

pub trait CpuRegs {
    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------
    fn reg(&self, index: u8) -> u8;
    fn pc(&self) -> u8;
    fn flags(&self) -> Flags;

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------
    fn set_reg(&mut self, index: u8, v: u8);
    fn set_pc(&mut self, v: u8);
    fn set_flags(&mut self, fl: Flags);

    // ---------------------------------------------------------------------
    // Program Counter helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 8 bits).
    #[inline]
    fn advance_pc(&mut self, delta: u8) {
        let pc = self.pc().wrapping_add(delta);
        self.set_pc(pc);
    }

    // ---------------------------------------------------------------------
    // Flag operations
    // ---------------------------------------------------------------------

    /// True if any bit of `mask` is set in FL.
    #[inline]
    fn any_flag(&self, mask: Flags) -> bool {
        self.flags().intersects(mask)
    }

    /// Composite: read a register, apply `f`, write the result back.
    #[inline]
    fn update_reg(&mut self, index: u8, f: &dyn Fn(u8) -> u8) {
        let v = f(self.reg(index));
        self.set_reg(index, v);
    }
}

// -------------------------------------------------------------------------
// Implementation: CpuState (canonical)
// -------------------------------------------------------------------------

impl CpuRegs for CpuState {
    #[inline]
    fn reg(&self, index: u8) -> u8 {
        self.reg(index)
    }
    #[inline]
    fn pc(&self) -> u8 {
        self.pc()
    }
    #[inline]
    fn flags(&self) -> Flags {
        self.flags()
    }

    #[inline]
    fn set_reg(&mut self, index: u8, v: u8) {
        self.set_reg(index, v);
    }
    #[inline]
    fn set_pc(&mut self, v: u8) {
        self.set_pc(v);
    }
    #[inline]
    fn set_flags(&mut self, fl: Flags) {
        self.set_flags(fl);
    }

    #[inline]
    fn advance_pc(&mut self, delta: u8) {
        self.advance_pc(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_view_matches_state() {
        let mut s = CpuState::new();
        let cpu: &mut dyn CpuRegs = &mut s;
        cpu.set_reg(3, 0x10);
        cpu.update_reg(3, &|v| v.wrapping_mul(3));
        cpu.set_pc(0xFF);
        cpu.advance_pc(2);
        cpu.set_flags(Flags::GREATER);
        assert!(cpu.any_flag(Flags::GREATER | Flags::EQUAL));
        assert!(!cpu.any_flag(Flags::LESS));
        assert_eq!(s.reg(3), 0x30);
        assert_eq!(s.pc(), 0x01);
    }
}

/*!
arithmetic.rs - ADD / SUB / MUL / DIV / MOD / ADDI / SUBI / INC / DEC

Overview
========
All results are reduced modulo 256 (wrapping u8 arithmetic), SUB included,
so the register file only ever holds bytes.

DIV and MOD with a zero divisor return `CpuFault::DivisionByZero`; the
destination register is left untouched and the loop moves to Faulted.

None of these instructions touch FL.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::{Flow, Operands};
use crate::cpu::fault::CpuFault;
use crate::cpu::regs::CpuRegs;

/// ra = op(ra, rb)
#[inline]
fn alu_rr(cpu: &mut dyn CpuRegs, ops: Operands, op: fn(u8, u8) -> u8) -> Result<Flow, CpuFault> {
    let v = op(cpu.reg(ops.a()), cpu.reg(ops.b()));
    cpu.set_reg(ops.a(), v);
    Ok(Flow::Continue)
}

/// r = op(r, imm)
#[inline]
fn alu_ri(cpu: &mut dyn CpuRegs, ops: Operands, op: fn(u8, u8) -> u8) -> Result<Flow, CpuFault> {
    let v = op(cpu.reg(ops.a()), ops.b());
    cpu.set_reg(ops.a(), v);
    Ok(Flow::Continue)
}

/// ra = op(ra, rb), faulting when rb is zero.
fn alu_div(
    cpu: &mut dyn CpuRegs,
    ops: Operands,
    mnemonic: &'static str,
    op: fn(u8, u8) -> Option<u8>,
) -> Result<Flow, CpuFault> {
    let v = op(cpu.reg(ops.a()), cpu.reg(ops.b())).ok_or(CpuFault::DivisionByZero {
        mnemonic,
        pc: cpu.pc(),
    })?;
    cpu.set_reg(ops.a(), v);
    Ok(Flow::Continue)
}

pub(crate) fn op_add(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    alu_rr(cpu, ops, u8::wrapping_add)
}

pub(crate) fn op_sub(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    alu_rr(cpu, ops, u8::wrapping_sub)
}

pub(crate) fn op_mul(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    alu_rr(cpu, ops, u8::wrapping_mul)
}

pub(crate) fn op_div(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    alu_div(cpu, ops, "DIV", u8::checked_div)
}

pub(crate) fn op_mod(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    alu_div(cpu, ops, "MOD", u8::checked_rem)
}

pub(crate) fn op_addi(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    alu_ri(cpu, ops, u8::wrapping_add)
}

pub(crate) fn op_subi(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    alu_ri(cpu, ops, u8::wrapping_sub)
}

pub(crate) fn op_inc(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    cpu.update_reg(ops.a(), &|v| v.wrapping_add(1));
    Ok(Flow::Continue)
}

pub(crate) fn op_dec(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    cpu.update_reg(ops.a(), &|v| v.wrapping_sub(1));
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::core::RunState;
    use crate::cpu::state::{CpuState, Flags};
    use crate::test_utils::{capture_bus, ops, setup, state_with_regs};

    fn run2(
        handler: fn(&mut dyn CpuRegs, &mut Bus, Operands) -> Result<Flow, CpuFault>,
        a: u8,
        b: u8,
    ) -> (CpuState, Result<Flow, CpuFault>) {
        let (mut bus, _) = capture_bus();
        let mut s = state_with_regs(&[a, b]);
        let r = handler(&mut s, &mut bus, ops(&[0, 1]));
        (s, r)
    }

    #[test]
    fn add_wraps() {
        assert_eq!(run2(op_add, 200, 100).0.reg(0), 44);
        assert_eq!(run2(op_add, 1, 2).0.reg(0), 3);
    }

    #[test]
    fn sub_wraps_like_subi() {
        assert_eq!(run2(op_sub, 5, 7).0.reg(0), 254);
        assert_eq!(run2(op_sub, 7, 5).0.reg(0), 2);
    }

    #[test]
    fn mul_wraps() {
        assert_eq!(run2(op_mul, 16, 17).0.reg(0), 16);
        assert_eq!(run2(op_mul, 8, 9).0.reg(0), 72);
    }

    #[test]
    fn div_and_mod() {
        assert_eq!(run2(op_div, 17, 5).0.reg(0), 3);
        assert_eq!(run2(op_mod, 17, 5).0.reg(0), 2);
    }

    #[test]
    fn div_by_zero_faults_without_writing() {
        let (s, r) = run2(op_div, 9, 0);
        assert_eq!(
            r,
            Err(CpuFault::DivisionByZero {
                mnemonic: "DIV",
                pc: 0
            })
        );
        assert_eq!(s.reg(0), 9);

        let (s, r) = run2(op_mod, 9, 0);
        assert!(matches!(r, Err(CpuFault::DivisionByZero { mnemonic: "MOD", .. })));
        assert_eq!(s.reg(0), 9);
    }

    #[test]
    fn immediates_and_inc_dec_wrap() {
        let (mut bus, _) = capture_bus();
        let mut s = state_with_regs(&[250]);
        op_addi(&mut s, &mut bus, ops(&[0, 10])).unwrap();
        assert_eq!(s.reg(0), 4);
        op_subi(&mut s, &mut bus, ops(&[0, 5])).unwrap();
        assert_eq!(s.reg(0), 255);
        op_inc(&mut s, &mut bus, ops(&[0])).unwrap();
        assert_eq!(s.reg(0), 0);
        op_dec(&mut s, &mut bus, ops(&[0])).unwrap();
        assert_eq!(s.reg(0), 255);
    }

    #[test]
    fn arithmetic_leaves_flags_alone() {
        let (mut bus, _) = capture_bus();
        let mut s = state_with_regs(&[1, 1]);
        s.set_flags(Flags::GREATER);
        op_sub(&mut s, &mut bus, ops(&[0, 1])).unwrap();
        op_inc(&mut s, &mut bus, ops(&[0])).unwrap();
        assert_eq!(s.flags(), Flags::GREATER);
    }

    #[test]
    fn mult_program() {
        // LDI R0,8; LDI R1,9; MUL R0,R1; PRN R0; HLT
        let (mut cpu, mut bus, console) =
            setup(&[0x82, 0x00, 0x08, 0x82, 0x01, 0x09, 0xA2, 0x00, 0x01, 0x47, 0x00, 0x01]);
        assert_eq!(cpu.run(&mut bus), RunState::Halted);
        assert_eq!(console.transcript(), "72");
    }

    #[test]
    fn div_by_zero_program_faults_at_instruction() {
        // LDI R0,4; DIV R0,R1; PRN R0; HLT
        let (mut cpu, mut bus, console) =
            setup(&[0x82, 0x00, 0x04, 0xA3, 0x00, 0x01, 0x47, 0x00, 0x01]);
        let end = cpu.run(&mut bus);
        assert_eq!(
            end,
            RunState::Faulted(CpuFault::DivisionByZero {
                mnemonic: "DIV",
                pc: 3
            })
        );
        assert_eq!(cpu.pc(), 3);
        assert_eq!(cpu.reg(0), 4);
        assert!(console.lines().is_empty());
    }
}

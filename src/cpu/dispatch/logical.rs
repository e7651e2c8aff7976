/*!
logical.rs - AND / OR / XOR / NOT / SHL / SHR

Shifts take the count from a register. Shifting a byte by 8 or more clears
it (all bits shifted out), matching `ra << rb` truncated to 8 bits.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::{Flow, Operands};
use crate::cpu::fault::CpuFault;
use crate::cpu::regs::CpuRegs;

#[inline]
fn bitwise(cpu: &mut dyn CpuRegs, ops: Operands, op: fn(u8, u8) -> u8) -> Result<Flow, CpuFault> {
    let v = op(cpu.reg(ops.a()), cpu.reg(ops.b()));
    cpu.set_reg(ops.a(), v);
    Ok(Flow::Continue)
}

#[inline]
fn shl(v: u8, count: u8) -> u8 {
    v.checked_shl(count as u32).unwrap_or(0)
}

#[inline]
fn shr(v: u8, count: u8) -> u8 {
    v.checked_shr(count as u32).unwrap_or(0)
}

pub(crate) fn op_and(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    bitwise(cpu, ops, |a, b| a & b)
}

pub(crate) fn op_or(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    bitwise(cpu, ops, |a, b| a | b)
}

pub(crate) fn op_xor(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    bitwise(cpu, ops, |a, b| a ^ b)
}

pub(crate) fn op_not(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    cpu.update_reg(ops.a(), &|v| !v);
    Ok(Flow::Continue)
}

pub(crate) fn op_shl(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    bitwise(cpu, ops, shl)
}

pub(crate) fn op_shr(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    bitwise(cpu, ops, shr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{capture_bus, ops, state_with_regs};

    fn apply(
        handler: fn(&mut dyn CpuRegs, &mut Bus, Operands) -> Result<Flow, CpuFault>,
        a: u8,
        b: u8,
    ) -> u8 {
        let (mut bus, _) = capture_bus();
        let mut s = state_with_regs(&[a, b]);
        handler(&mut s, &mut bus, ops(&[0, 1])).unwrap();
        s.reg(0)
    }

    #[test]
    fn bitwise_ops() {
        assert_eq!(apply(op_and, 0b1100_1010, 0b1010_0110), 0b1000_0010);
        assert_eq!(apply(op_or, 0b1100_0000, 0b0000_0011), 0b1100_0011);
        assert_eq!(apply(op_xor, 0xFF, 0x0F), 0xF0);
    }

    #[test]
    fn not_is_masked_complement() {
        assert_eq!(apply(op_not, 0b0000_1111, 0), 0b1111_0000);
        assert_eq!(apply(op_not, 0x00, 0), 0xFF);
    }

    #[test]
    fn shifts_truncate_to_byte() {
        assert_eq!(apply(op_shl, 0b1000_0001, 1), 0b0000_0010);
        assert_eq!(apply(op_shr, 0b1000_0001, 1), 0b0100_0000);
        assert_eq!(apply(op_shl, 0xFF, 0), 0xFF);
    }

    #[test]
    fn shifts_by_eight_or_more_clear() {
        assert_eq!(apply(op_shl, 0xFF, 8), 0);
        assert_eq!(apply(op_shr, 0xFF, 200), 0);
    }
}

/*!
branches.rs - JMP and the conditional jumps (JEQ/JNE/JGT/JLT/JLE/JGE)

Overview
========
All of these carry the sets-PC bit (0x10), so the loop does not advance PC
after them. Each handler therefore finishes with one of:
- taken:     PC = value of the target register
- not taken: PC = PC + 2 (skip opcode + register operand), wrapping

Conditions read FL as left by the last CMP:

```text
JMP  always
JEQ  E
JNE  !E
JGT  G
JLT  L
JLE  L | E
JGE  G | E
```
*/

use crate::bus::Bus;
use crate::cpu::dispatch::{Flow, Operands};
use crate::cpu::fault::CpuFault;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::Flags;

/// Size of a jump instruction: opcode + one register operand.
const JUMP_LEN: u8 = 2;

/// Jump to the address in the target register if `taken`, otherwise step over
/// the instruction.
#[inline]
fn branch_cond(cpu: &mut dyn CpuRegs, ops: Operands, taken: bool) -> Result<Flow, CpuFault> {
    if taken {
        let target = cpu.reg(ops.a());
        cpu.set_pc(target);
    } else {
        cpu.advance_pc(JUMP_LEN);
    }
    Ok(Flow::Continue)
}

pub(crate) fn op_jmp(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    branch_cond(cpu, ops, true)
}

pub(crate) fn op_jeq(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    let taken = cpu.any_flag(Flags::EQUAL);
    branch_cond(cpu, ops, taken)
}

pub(crate) fn op_jne(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    let taken = !cpu.any_flag(Flags::EQUAL);
    branch_cond(cpu, ops, taken)
}

pub(crate) fn op_jgt(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    let taken = cpu.any_flag(Flags::GREATER);
    branch_cond(cpu, ops, taken)
}

pub(crate) fn op_jlt(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    let taken = cpu.any_flag(Flags::LESS);
    branch_cond(cpu, ops, taken)
}

pub(crate) fn op_jle(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    let taken = cpu.any_flag(Flags::LESS | Flags::EQUAL);
    branch_cond(cpu, ops, taken)
}

pub(crate) fn op_jge(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    let taken = cpu.any_flag(Flags::GREATER | Flags::EQUAL);
    branch_cond(cpu, ops, taken)
}

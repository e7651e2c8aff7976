/*!
misc.rs - NOP / HLT

HLT does not stop anything by itself: it reports `Flow::Halt` and the loop
moves to the Halted state after the normal PC advance.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::{Flow, Operands};
use crate::cpu::fault::CpuFault;
use crate::cpu::regs::CpuRegs;

pub(crate) fn op_nop(
    _cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    _ops: Operands,
) -> Result<Flow, CpuFault> {
    Ok(Flow::Continue)
}

pub(crate) fn op_hlt(
    _cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    _ops: Operands,
) -> Result<Flow, CpuFault> {
    Ok(Flow::Halt)
}

/*!
load_store.rs - LDI / LD / ST

```text
LDI r, imm   (0x82)  r = imm
LD  ra, rb   (0x83)  ra = mem[rb]
ST  ra, rb   (0x84)  mem[ra] = rb
```

Register values are always in 0..=255, so every register-derived address is
valid and no bounds check exists here.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::{Flow, Operands};
use crate::cpu::fault::CpuFault;
use crate::cpu::regs::CpuRegs;

pub(crate) fn op_ldi(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    cpu.set_reg(ops.a(), ops.b());
    Ok(Flow::Continue)
}

pub(crate) fn op_ld(cpu: &mut dyn CpuRegs, bus: &mut Bus, ops: Operands) -> Result<Flow, CpuFault> {
    let addr = cpu.reg(ops.b());
    let v = bus.read(addr);
    cpu.set_reg(ops.a(), v);
    Ok(Flow::Continue)
}

pub(crate) fn op_st(cpu: &mut dyn CpuRegs, bus: &mut Bus, ops: Operands) -> Result<Flow, CpuFault> {
    let addr = cpu.reg(ops.a());
    let v = cpu.reg(ops.b());
    bus.write(addr, v);
    Ok(Flow::Continue)
}

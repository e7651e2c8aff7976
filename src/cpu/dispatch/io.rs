/*!
io.rs - PRN / PRA

```text
PRN r  (0x47)  emit r as a decimal number
PRA r  (0x48)  emit the character whose code point is r (Latin-1)
```

Each emission is one console line, in execution order.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::{Flow, Operands};
use crate::cpu::fault::CpuFault;
use crate::cpu::regs::CpuRegs;

pub(crate) fn op_prn(
    cpu: &mut dyn CpuRegs,
    bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    let v = cpu.reg(ops.a());
    bus.emit(&v.to_string());
    Ok(Flow::Continue)
}

pub(crate) fn op_pra(
    cpu: &mut dyn CpuRegs,
    bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    // Every u8 is a Latin-1 code point, and Latin-1 maps 1:1 onto U+0000..U+00FF.
    let ch = char::from(cpu.reg(ops.a()));
    bus.emit(ch.encode_utf8(&mut [0; 4]));
    Ok(Flow::Continue)
}

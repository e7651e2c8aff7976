/*!
compare.rs - CMP, the only instruction that writes FL.

```text
CMP ra, rb  (0xA7)
```

FL is cleared first, then exactly one of LESS / GREATER / EQUAL is set
according to the unsigned ordering of ra and rb. The conditional jumps in
`branches` read the result.
*/

use std::cmp::Ordering;

use crate::bus::Bus;
use crate::cpu::dispatch::{Flow, Operands};
use crate::cpu::fault::CpuFault;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::Flags;

/// FL value produced by comparing `a` with `b`.
#[inline]
pub(crate) fn compare_flags(a: u8, b: u8) -> Flags {
    match a.cmp(&b) {
        Ordering::Less => Flags::LESS,
        Ordering::Greater => Flags::GREATER,
        Ordering::Equal => Flags::EQUAL,
    }
}

pub(crate) fn op_cmp(
    cpu: &mut dyn CpuRegs,
    _bus: &mut Bus,
    ops: Operands,
) -> Result<Flow, CpuFault> {
    let fl = compare_flags(cpu.reg(ops.a()), cpu.reg(ops.b()));
    cpu.set_flags(fl);
    Ok(Flow::Continue)
}

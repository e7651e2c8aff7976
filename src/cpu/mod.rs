/*!
cpu::mod - Public façade for the LS-8 CPU core.

Layout:

```text
state.rs      - Architectural state: R0..R7, PC, IR, FL.
regs.rs       - `CpuRegs` trait the instruction handlers are written against.
opcodes.rs    - Canonical opcode enumeration + bit-derived decode helpers.
table.rs      - Static 256-entry opcode -> handler table.
dispatch/     - Instruction handlers, one module per family.
core/         - `Cpu` façade and the fetch-decode-execute loop.
fault.rs      - Terminal fault taxonomy.
trace.rs      - Fixed-width state dump.
```

Usage:
```rust
use ls8::{Bus, Cpu, RunState};

let mut bus = Bus::new();
bus.load(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
let mut cpu = Cpu::new();
assert_eq!(cpu.run(&mut bus), RunState::Halted);
```
*/

pub mod core;
pub mod dispatch;
pub mod fault;
pub mod opcodes;
pub mod regs;
pub mod state;
pub mod table;
pub mod trace;

// Re-exports:
// - Cpu (facade over CpuState) and its run states
// - CpuState / Flags (raw state; exposed for tests and hosts)
pub use crate::cpu::core::{Cpu, RunState};
pub use crate::cpu::fault::CpuFault;
pub use crate::cpu::opcodes::Opcode;
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{CpuState, Flags, REGISTER_COUNT, RegisterFile};
pub use crate::cpu::trace::trace;

#![doc = r#"
LS-8 library crate.

An emulator for the LS-8, a small 8-bit CPU: eight 8-bit registers, 256 bytes
of memory, an 8-bit program counter and a three-bit flags register.

Modules:
- bus: 256-byte RAM (with MAR/MDR instrumentation) and the console sink
- cpu: CPU core (state + opcode table + dispatch families + run loop)
- program: text program loader and the built-in default program

In tests, shared machine fixtures are available under `crate::test_utils`.
"#]

// Core emulator modules
pub mod bus;
pub mod cpu;
pub mod program;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, CaptureConsole, Console, StdoutConsole};
pub use cpu::{Cpu, CpuFault, CpuState, Flags, Opcode, RunState};
pub use program::{LoadError, Program};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

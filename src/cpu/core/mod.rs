/*!
core::Cpu - LS-8 CPU façade: owns `CpuState` plus the run state and drives
the fetch-decode-execute loop.

Cycle
=====
While Running, one `step`:
1. IR = mem[PC]
2. n  = IR >> 6
3. operands = mem[PC+1 ..= PC+n] (each address wraps at 8 bits)
4. entry = table::resolve(IR); none => Faulted(UnknownOpcode)
5. run the handler; a fault from the handler => Faulted
6. unless IR carries the sets-PC bit, PC = PC + n + 1 (wrapping)
7. HLT => Halted

Halted and Faulted are terminal. The loop never exits the process; callers
read the final `RunState` and inspect registers / memory / output afterwards.
On a fault PC still points at the failing instruction.
*/

use std::ops::ControlFlow;

use crate::bus::Bus;
use crate::cpu::dispatch::{Flow, Operands};
use crate::cpu::fault::CpuFault;
use crate::cpu::opcodes::{operand_count, sets_pc};
use crate::cpu::state::{CpuState, Flags};
use crate::cpu::table;

/// Execution state of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// HLT executed.
    Halted,
    /// Stopped on a fault; see `CpuFault`.
    Faulted(CpuFault),
}

impl RunState {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Running)
    }
}

#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
    run_state: RunState,
    cycles: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a new CPU with power-up defaults (all zero, Running).
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
            run_state: RunState::Running,
            cycles: 0,
        }
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return mutable reference to internal state.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Back to power-up state. Memory is owned by the bus and is not touched.
    pub fn reset(&mut self) {
        self.state.reset();
        self.run_state = RunState::Running;
        self.cycles = 0;
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Instructions completed since construction / reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ---------------------------------------------------------------------
    // Register accessors
    // ---------------------------------------------------------------------
    pub fn reg(&self, index: u8) -> u8 {
        self.state.reg(index)
    }
    pub fn pc(&self) -> u8 {
        self.state.pc()
    }
    pub fn ir(&self) -> u8 {
        self.state.ir()
    }
    pub fn flags(&self) -> Flags {
        self.state.flags()
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Execute one instruction. Does nothing once a terminal state is reached.
    pub fn step(&mut self, bus: &mut Bus) -> RunState {
        if self.run_state.is_terminal() {
            return self.run_state;
        }

        let pc = self.state.pc();
        let ir = bus.read(pc);
        self.state.set_ir(ir);

        let count = operand_count(ir);
        let mut raw = [0u8; 3];
        for (i, slot) in raw.iter_mut().enumerate().take(count as usize) {
            *slot = bus.read(pc.wrapping_add(1 + i as u8));
        }
        let ops = Operands::new(&raw[..count as usize]);

        let Some(entry) = table::resolve(ir) else {
            return self.fault(CpuFault::UnknownOpcode { opcode: ir, pc });
        };
        log::trace!("{pc:02X}: {} {:02X?}", entry.mnemonic(), ops.as_slice());

        let flow = match (entry.handler)(&mut self.state, bus, ops) {
            Ok(flow) => flow,
            Err(fault) => return self.fault(fault),
        };

        if !sets_pc(ir) {
            self.state.advance_pc(count + 1);
        }
        self.cycles += 1;

        if flow == Flow::Halt {
            log::info!("halted at pc 0x{pc:02X} after {} instruction(s)", self.cycles);
            self.run_state = RunState::Halted;
        }
        self.run_state
    }

    /// Run until HLT or a fault.
    pub fn run(&mut self, bus: &mut Bus) -> RunState {
        self.run_with_callback(bus, |_, _| ControlFlow::Continue(()))
    }

    /// Run until HLT or a fault, calling `callback` before every instruction.
    ///
    /// Returning `ControlFlow::Break` stops between instructions and leaves
    /// the CPU Running, so it can be resumed with another `run` / `step`.
    pub fn run_with_callback<F>(&mut self, bus: &mut Bus, mut callback: F) -> RunState
    where
        F: FnMut(&CpuState, &Bus) -> ControlFlow<()>,
    {
        while !self.run_state.is_terminal() {
            if callback(&self.state, bus).is_break() {
                break;
            }
            self.step(bus);
        }
        self.run_state
    }

    fn fault(&mut self, fault: CpuFault) -> RunState {
        log::error!("{fault}");
        self.run_state = RunState::Faulted(fault);
        self.run_state
    }
}

#![doc = r#"
Bus module: memory and console behind one façade.

Overview
- The LS-8 has a single address space and a single output device. `Bus` owns
  both and is passed to the CPU step explicitly (`cpu.step(&mut bus)`), so the
  CPU state stays free of any memory logic.

Modules and responsibilities
- ram: 256-byte main memory with MAR/MDR instrumentation.
- console: output sink trait plus stdout and capture implementations.
"#]

pub mod console;
pub mod ram;

pub use console::{CaptureConsole, Console, StdoutConsole};
pub use ram::{RAM_SIZE, Ram};

use crate::program::LoadError;

/// System bus: main memory plus the console used by PRN / PRA.
pub struct Bus {
    pub ram: Ram,
    console: Box<dyn Console>,
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field("mar", &self.ram.mar())
            .field("mdr", &self.ram.mdr())
            .finish_non_exhaustive()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    /// Zeroed memory, output to stdout.
    pub fn new() -> Self {
        Self::with_console(StdoutConsole)
    }

    /// Zeroed memory, output to the given console.
    pub fn with_console<C: Console + 'static>(console: C) -> Self {
        Self {
            ram: Ram::new(),
            console: Box::new(console),
        }
    }

    #[inline]
    pub fn read(&mut self, addr: u8) -> u8 {
        self.ram.read(addr)
    }

    #[inline]
    pub fn write(&mut self, addr: u8, value: u8) {
        self.ram.write(addr, value);
    }

    /// Side-effect free read (does not latch MAR/MDR).
    #[inline]
    pub fn peek(&self, addr: u8) -> u8 {
        self.ram.peek(addr)
    }

    /// Send one line of output to the console.
    pub fn emit(&mut self, line: &str) {
        self.console.emit(line);
    }

    /// Zero all of memory (and MAR/MDR). `load` alone keeps whatever lies
    /// past the end of the image, so call this first for a clean machine.
    pub fn clear(&mut self) {
        self.ram.clear();
    }

    /// Copy a program image into memory at $00.
    ///
    /// Memory past the end of the image keeps its previous contents. An image
    /// larger than the address space is rejected before anything is written.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > RAM_SIZE {
            return Err(LoadError::Overflow {
                capacity: RAM_SIZE,
            });
        }
        self.ram.copy_from(image);
        log::debug!("loaded {} byte(s) at $00", image.len());
        Ok(())
    }
}

/*!
RAM module: the LS-8 flat 256-byte address space.

Address map:
- $00-$FF: 256 bytes, no mirroring, no protection.

Every address is a `u8`, so the full address space is exactly the backing
array and no bounds check is ever needed.

`read` / `write` also latch the memory-address register (MAR) and the
memory-data register (MDR). These are instrumentation only: nothing in the
execution path reads them back. `peek` bypasses the latches for tools (the
trace dump) that must not disturb observable state.
*/

/// Size of the LS-8 address space (in bytes).
pub const RAM_SIZE: usize = 0x100;

/// LS-8 main memory with the MAR/MDR side channel.
#[derive(Debug, Clone)]
pub struct Ram {
    data: [u8; RAM_SIZE],
    mar: u8,
    mdr: u8,
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Create a new RAM instance initialized to 0.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0; RAM_SIZE],
            mar: 0,
            mdr: 0,
        }
    }

    /// Zero every byte and both latches.
    #[inline]
    pub fn clear(&mut self) {
        self.data.fill(0);
        self.mar = 0;
        self.mdr = 0;
    }

    /// Read a byte, latching `addr` into MAR and the value into MDR.
    #[inline]
    pub fn read(&mut self, addr: u8) -> u8 {
        self.mar = addr;
        self.mdr = self.data[addr as usize];
        self.mdr
    }

    /// Write a byte, latching `addr` into MAR and `value` into MDR.
    #[inline]
    pub fn write(&mut self, addr: u8, value: u8) {
        self.mar = addr;
        self.mdr = value;
        self.data[addr as usize] = value;
    }

    /// Read a byte without touching MAR/MDR.
    #[inline]
    pub fn peek(&self, addr: u8) -> u8 {
        self.data[addr as usize]
    }

    /// Copy `bytes` into memory starting at $00. Bytes past the end of the
    /// slice are left as they were. Caller guarantees `bytes.len() <= RAM_SIZE`.
    pub fn copy_from(&mut self, bytes: &[u8]) {
        self.data[..bytes.len()].copy_from_slice(bytes);
    }

    /// Last address latched by `read` / `write`.
    #[inline]
    pub fn mar(&self) -> u8 {
        self.mar
    }

    /// Last value transferred by `read` / `write`.
    #[inline]
    pub fn mdr(&self) -> u8 {
        self.mdr
    }

    /// Expose the internal slice (read-only). Useful for diagnostics.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

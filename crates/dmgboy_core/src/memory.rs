use std::fmt;

use thiserror::Error;

use crate::cpu::Bus;

/// Total addressable memory for the Game Boy (64 KiB).
///
/// The real hardware maps cartridge ROM/RAM, VRAM, WRAM, IO registers and
/// HRAM into this space. The core treats it as one flat array with no bank
/// switching and no access control.
pub const MEMORY_SIZE: usize = 0x10000;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    #[error("program image is {len} bytes but the address space holds {MEMORY_SIZE}")]
    TooLarge { len: usize },
}

/// Flat byte-addressable memory, indexed by a 16-bit address.
///
/// Every `u16` is a valid index, so reads and writes cannot fail.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.bytes[usize::from(addr)]
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.bytes[usize::from(addr)] = value;
    }

    /// Zero the whole space, then copy `program` in starting at 0x0000.
    ///
    /// Nothing is written when the image does not fit.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > MEMORY_SIZE {
            return Err(LoadError::TooLarge { len: program.len() });
        }

        self.bytes.fill(0);
        self.bytes[..program.len()].copy_from_slice(program);
        Ok(())
    }

    /// The whole address space, 0x0000 first.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// `len` bytes starting at `start`, clipped at the end of the space.
    pub fn range(&self, start: u16, len: usize) -> &[u8] {
        let start = usize::from(start);
        let end = start.saturating_add(len).min(MEMORY_SIZE);
        &self.bytes[start..end]
    }
}

impl Bus for Memory {
    #[inline]
    fn read8(&self, addr: u16) -> u8 {
        self.read_byte(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write_byte(addr, value);
    }
}

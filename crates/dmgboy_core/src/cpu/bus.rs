/// Abstraction over the CPU's view of the 16-bit address space.
///
/// Reads have no side effects, which lets the decoder inspect an opcode and
/// its immediates before the instruction commits any change.
pub trait Bus {
    fn read8(&self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Read a little-endian word; the high byte comes from `addr + 1`.
    #[inline]
    fn read16(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read8(addr), self.read8(addr.wrapping_add(1))])
    }

    /// Write a little-endian word; the high byte goes to `addr + 1`.
    #[inline]
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}

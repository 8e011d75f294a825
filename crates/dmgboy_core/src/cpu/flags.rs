bitflags::bitflags! {
    /// Condition bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 0b1000_0000;
        const N = 0b0100_0000;
        const H = 0b0010_0000;
        const C = 0b0001_0000;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Flags {
    /// Build flags from a raw F byte, dropping the low nibble.
    #[inline]
    pub fn from_byte(value: u8) -> Self {
        Self::from_bits_truncate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_nibble_is_always_zero() {
        for raw in 0..=u8::MAX {
            let flags = Flags::from_byte(raw);
            assert_eq!(flags.bits() & 0x0F, 0);
            assert_eq!(flags.bits(), raw & 0xF0);
        }
    }

    #[test]
    fn bits_sit_in_the_high_nibble() {
        assert_eq!(Flags::Z.bits(), 1 << 7);
        assert_eq!(Flags::N.bits(), 1 << 6);
        assert_eq!(Flags::H.bits(), 1 << 5);
        assert_eq!(Flags::C.bits(), 1 << 4);
    }
}

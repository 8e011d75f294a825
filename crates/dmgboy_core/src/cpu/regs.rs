use super::Flags;

/// Registers for the Game Boy CPU (LR35902).
///
/// Eight 8-bit slots paired as AF, BC, DE and HL, plus the 16-bit stack
/// pointer and program counter. Pairs are big-endian: the first register of
/// the pair is the high byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

/// Named 8-bit register slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// Named 16-bit register pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegPair {
    AF,
    BC,
    DE,
    HL,
}

impl RegPair {
    pub const ALL: [RegPair; 4] = [RegPair::AF, RegPair::BC, RegPair::DE, RegPair::HL];
}

impl Registers {
    #[inline]
    pub fn read8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.a,
            Reg8::F => self.f.bits(),
            Reg8::B => self.b,
            Reg8::C => self.c,
            Reg8::D => self.d,
            Reg8::E => self.e,
            Reg8::H => self.h,
            Reg8::L => self.l,
        }
    }

    /// Writes to F keep only the four flag bits.
    #[inline]
    pub fn write8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::A => self.a = value,
            Reg8::F => self.f = Flags::from_byte(value),
            Reg8::B => self.b = value,
            Reg8::C => self.c = value,
            Reg8::D => self.d = value,
            Reg8::E => self.e = value,
            Reg8::H => self.h = value,
            Reg8::L => self.l = value,
        }
    }

    #[inline]
    pub fn read_pair(&self, pair: RegPair) -> u16 {
        match pair {
            RegPair::AF => self.af(),
            RegPair::BC => self.bc(),
            RegPair::DE => self.de(),
            RegPair::HL => self.hl(),
        }
    }

    #[inline]
    pub fn write_pair(&mut self, pair: RegPair, value: u16) {
        match pair {
            RegPair::AF => self.set_af(value),
            RegPair::BC => self.set_bc(value),
            RegPair::DE => self.set_de(value),
            RegPair::HL => self.set_hl(value),
        }
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.f.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.f.set(flag, value);
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.bits()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are always zero.
        self.f = Flags::from_byte(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_write_then_read_roundtrips_for_every_value() {
        let mut regs = Registers::default();
        for pair in RegPair::ALL {
            // F's low nibble does not exist in hardware.
            let mask = if pair == RegPair::AF { 0xFFF0 } else { 0xFFFF };
            for value in 0..=u16::MAX {
                regs.write_pair(pair, value);
                assert_eq!(regs.read_pair(pair), value & mask, "{pair:?} = {value:#06x}");
            }
        }
    }

    #[test]
    fn pairs_are_high_byte_first() {
        let mut regs = Registers::default();
        regs.write_pair(RegPair::HL, 0xC0DE);
        assert_eq!(regs.h, 0xC0);
        assert_eq!(regs.l, 0xDE);
        assert_eq!(regs.read8(Reg8::H), 0xC0);

        regs.write8(Reg8::B, 0x12);
        regs.write8(Reg8::C, 0x34);
        assert_eq!(regs.bc(), 0x1234);
    }

    #[test]
    fn pair_write_touches_only_its_slots() {
        let mut regs = Registers {
            a: 0x11,
            b: 0x22,
            c: 0x33,
            h: 0x44,
            l: 0x55,
            ..Registers::default()
        };
        regs.write_pair(RegPair::DE, 0xBEEF);
        assert_eq!((regs.a, regs.b, regs.c, regs.h, regs.l), (0x11, 0x22, 0x33, 0x44, 0x55));
        assert_eq!((regs.d, regs.e), (0xBE, 0xEF));
    }

    #[test]
    fn flag_get_set_is_independent_of_other_bits() {
        let mut regs = Registers::default();
        regs.set_flag(Flags::Z, true);
        regs.set_flag(Flags::C, true);
        assert!(regs.flag(Flags::Z));
        assert!(!regs.flag(Flags::N));
        assert!(!regs.flag(Flags::H));
        assert!(regs.flag(Flags::C));
        assert_eq!(regs.read8(Reg8::F), 0x90);

        regs.set_flag(Flags::Z, false);
        assert_eq!(regs.read8(Reg8::F), 0x10);

        regs.write8(Reg8::F, 0xFF);
        assert_eq!(regs.read8(Reg8::F), 0xF0);
    }
}

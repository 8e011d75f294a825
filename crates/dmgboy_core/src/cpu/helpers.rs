use super::{Bus, Condition, Cpu, Flags, Indirect, Operand8, Pair, StackPair};

impl Cpu {
    /// Read an 8-bit register or the (HL) memory byte.
    #[inline]
    pub(super) fn read_operand<B: Bus>(&self, bus: &mut B, operand: Operand8) -> u8 {
        match operand {
            Operand8::B => self.regs.b,
            Operand8::C => self.regs.c,
            Operand8::D => self.regs.d,
            Operand8::E => self.regs.e,
            Operand8::H => self.regs.h,
            Operand8::L => self.regs.l,
            Operand8::IndHl => bus.read8(self.regs.hl()),
            Operand8::A => self.regs.a,
        }
    }

    /// Write an 8-bit register or the (HL) memory byte.
    #[inline]
    pub(super) fn write_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand8, value: u8) {
        match operand {
            Operand8::B => self.regs.b = value,
            Operand8::C => self.regs.c = value,
            Operand8::D => self.regs.d = value,
            Operand8::E => self.regs.e = value,
            Operand8::H => self.regs.h = value,
            Operand8::L => self.regs.l = value,
            Operand8::IndHl => bus.write8(self.regs.hl(), value),
            Operand8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn pair(&self, pair: Pair) -> u16 {
        match pair {
            Pair::BC => self.regs.bc(),
            Pair::DE => self.regs.de(),
            Pair::HL => self.regs.hl(),
            Pair::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn set_pair(&mut self, pair: Pair, value: u16) {
        match pair {
            Pair::BC => self.regs.set_bc(value),
            Pair::DE => self.regs.set_de(value),
            Pair::HL => self.regs.set_hl(value),
            Pair::SP => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn stack_pair(&self, pair: StackPair) -> u16 {
        match pair {
            StackPair::BC => self.regs.bc(),
            StackPair::DE => self.regs.de(),
            StackPair::HL => self.regs.hl(),
            StackPair::AF => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn set_stack_pair(&mut self, pair: StackPair, value: u16) {
        match pair {
            StackPair::BC => self.regs.set_bc(value),
            StackPair::DE => self.regs.set_de(value),
            StackPair::HL => self.regs.set_hl(value),
            StackPair::AF => self.regs.set_af(value),
        }
    }

    /// Resolve an indirect operand to its address, applying the HL
    /// post-increment/decrement as one 16-bit operation.
    #[inline]
    pub(super) fn indirect_addr(&mut self, indirect: Indirect) -> u16 {
        match indirect {
            Indirect::BC => self.regs.bc(),
            Indirect::DE => self.regs.de(),
            Indirect::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Indirect::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    #[inline]
    pub(super) fn condition(&self, cond: Option<Condition>) -> bool {
        match cond {
            None => true,
            Some(Condition::NZ) => !self.get_flag(Flags::Z),
            Some(Condition::Z) => self.get_flag(Flags::Z),
            Some(Condition::NC) => !self.get_flag(Flags::C),
            Some(Condition::C) => self.get_flag(Flags::C),
        }
    }

    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        // Stack grows downward. We want memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let value = bus.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }
}

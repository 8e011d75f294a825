use crate::cpu::{Bus, Cpu, Indirect, Operand8, Pair};

impl Cpu {
    pub(super) fn exec_ld_pair_imm(&mut self, pair: Pair, value: u16) -> u32 {
        self.set_pair(pair, value);
        12
    }

    /// LD (rr),A. For (HL-) the store happens before HL is decremented.
    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, ind: Indirect) -> u32 {
        let addr = self.indirect_addr(ind);
        bus.write8(addr, self.regs.a);
        8
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, ind: Indirect) -> u32 {
        let addr = self.indirect_addr(ind);
        self.regs.a = bus.read8(addr);
        8
    }

    pub(super) fn exec_ld_imm<B: Bus>(&mut self, bus: &mut B, dst: Operand8, value: u8) -> u32 {
        self.write_operand(bus, dst, value);
        if dst.is_memory() { 12 } else { 8 }
    }

    pub(super) fn exec_ld<B: Bus>(&mut self, bus: &mut B, dst: Operand8, src: Operand8) -> u32 {
        debug_assert!(
            !(dst.is_memory() && src.is_memory()),
            "LD (HL),(HL) is HALT and never decodes to a load"
        );

        let value = self.read_operand(bus, src);
        self.write_operand(bus, dst, value);

        if dst.is_memory() || src.is_memory() { 8 } else { 4 }
    }

    pub(super) fn exec_ld_addr_sp<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        bus.write16(addr, self.regs.sp);
        20
    }

    pub(super) fn exec_ldh_store<B: Bus>(&mut self, bus: &mut B, offset: u8) -> u32 {
        bus.write8(0xFF00 | u16::from(offset), self.regs.a);
        12
    }

    pub(super) fn exec_ldh_load<B: Bus>(&mut self, bus: &mut B, offset: u8) -> u32 {
        self.regs.a = bus.read8(0xFF00 | u16::from(offset));
        12
    }

    pub(super) fn exec_ldh_c_store<B: Bus>(&mut self, bus: &mut B) -> u32 {
        bus.write8(0xFF00 | u16::from(self.regs.c), self.regs.a);
        8
    }

    pub(super) fn exec_ldh_c_load<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.a = bus.read8(0xFF00 | u16::from(self.regs.c));
        8
    }

    pub(super) fn exec_ld_addr_a<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        bus.write8(addr, self.regs.a);
        16
    }

    pub(super) fn exec_ld_a_addr<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        self.regs.a = bus.read8(addr);
        16
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        8
    }

    pub(super) fn exec_ld_hl_sp_offset(&mut self, offset: i8) -> u32 {
        let result = self.alu_add16_signed(self.regs.sp, offset);
        self.regs.set_hl(result);
        12
    }
}

use crate::cpu::{AluOp, Bus, Cpu, Flags, Operand8, Pair, RotOp};

impl Cpu {
    pub(super) fn exec_alu<B: Bus>(&mut self, bus: &mut B, op: AluOp, src: Operand8) -> u32 {
        let value = self.read_operand(bus, src);
        self.alu(op, value);
        if src.is_memory() { 8 } else { 4 }
    }

    pub(super) fn exec_alu_imm(&mut self, op: AluOp, value: u8) -> u32 {
        self.alu(op, value);
        8
    }

    /// RLCA/RRCA/RLA/RRA. Same result as the CB form on A, but Z is always
    /// cleared.
    pub(super) fn exec_rotate_a(&mut self, op: RotOp) -> u32 {
        debug_assert!(matches!(op, RotOp::Rlc | RotOp::Rrc | RotOp::Rl | RotOp::Rr));

        let result = self.alu_rotate(op, self.regs.a);
        self.regs.a = result;
        self.set_flag(Flags::Z, false);
        4
    }

    pub(super) fn exec_add_hl(&mut self, pair: Pair) -> u32 {
        let value = self.pair(pair);
        self.alu_add16_hl(value);
        8
    }

    pub(super) fn exec_add_sp_offset(&mut self, offset: i8) -> u32 {
        let result = self.alu_add16_signed(self.regs.sp, offset);
        self.regs.sp = result;
        16
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flags::H, true);
        self.set_flag(Flags::N, true);
        4
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.set_flag(Flags::C, true);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        4
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.get_flag(Flags::C);
        self.set_flag(Flags::C, !carry);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        4
    }
}

use crate::cpu::{Bus, Cpu, Flags, Operand8, RotOp};

impl Cpu {
    /// RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL on a register or (HL).
    pub(super) fn exec_shift<B: Bus>(&mut self, bus: &mut B, op: RotOp, target: Operand8) -> u32 {
        let value = self.read_operand(bus, target);
        let result = self.alu_rotate(op, value);
        self.write_operand(bus, target, result);

        if target.is_memory() { 16 } else { 8 }
    }

    /// BIT b, r: Z is the complement of the tested bit, N=0, H=1, C kept.
    pub(super) fn exec_bit<B: Bus>(&mut self, bus: &mut B, bit: u8, target: Operand8) -> u32 {
        let value = self.read_operand(bus, target);
        let bit_set = value & (1 << bit) != 0;
        self.set_flag(Flags::Z, !bit_set);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, true);

        if target.is_memory() { 12 } else { 8 }
    }

    pub(super) fn exec_res<B: Bus>(&mut self, bus: &mut B, bit: u8, target: Operand8) -> u32 {
        let value = self.read_operand(bus, target) & !(1 << bit);
        self.write_operand(bus, target, value);

        if target.is_memory() { 16 } else { 8 }
    }

    pub(super) fn exec_set<B: Bus>(&mut self, bus: &mut B, bit: u8, target: Operand8) -> u32 {
        let value = self.read_operand(bus, target) | (1 << bit);
        self.write_operand(bus, target, value);

        if target.is_memory() { 16 } else { 8 }
    }
}

use crate::cpu::{Bus, Cpu, Operand8, Pair};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, target: Operand8) -> u32 {
        let value = self.read_operand(bus, target);
        let result = self.alu_inc8(value);
        self.write_operand(bus, target, result);

        if target.is_memory() { 12 } else { 4 }
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, target: Operand8) -> u32 {
        let value = self.read_operand(bus, target);
        let result = self.alu_dec8(value);
        self.write_operand(bus, target, result);

        if target.is_memory() { 12 } else { 4 }
    }

    pub(super) fn exec_inc16(&mut self, pair: Pair) -> u32 {
        let value = self.pair(pair).wrapping_add(1);
        self.set_pair(pair, value);
        8
    }

    pub(super) fn exec_dec16(&mut self, pair: Pair) -> u32 {
        let value = self.pair(pair).wrapping_sub(1);
        self.set_pair(pair, value);
        8
    }
}

use crate::cpu::{Bus, Condition, Cpu, StackPair};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, pair: StackPair) -> u32 {
        let value = self.stack_pair(pair);
        self.push_u16(bus, value);
        16
    }

    /// POP AF drops the low nibble of F like every other write to F.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, pair: StackPair) -> u32 {
        let value = self.pop_u16(bus);
        self.set_stack_pair(pair, value);
        12
    }

    pub(super) fn exec_call<B: Bus>(
        &mut self,
        bus: &mut B,
        cond: Option<Condition>,
        addr: u16,
    ) -> u32 {
        if !self.condition(cond) {
            return 12;
        }

        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
        24
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cond: Option<Condition>) -> u32 {
        match cond {
            None => {
                self.regs.pc = self.pop_u16(bus);
                16
            }
            Some(_) if self.condition(cond) => {
                self.regs.pc = self.pop_u16(bus);
                20
            }
            Some(_) => 8,
        }
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u8) -> u32 {
        debug_assert!(vector & !0x38 == 0, "bad RST vector {vector:#04x}");

        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(vector);
        16
    }
}

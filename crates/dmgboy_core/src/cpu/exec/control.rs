use crate::cpu::{Condition, Cpu};

impl Cpu {
    /// JR / JR cc. PC already points at the following instruction, so a
    /// displacement of -2 lands back on the JR itself.
    pub(super) fn exec_jr(&mut self, cond: Option<Condition>, offset: i8) -> u32 {
        if self.condition(cond) {
            self.regs.pc = self.regs.pc.wrapping_add_signed(i16::from(offset));
            12
        } else {
            8
        }
    }

    pub(super) fn exec_jp(&mut self, cond: Option<Condition>, addr: u16) -> u32 {
        if self.condition(cond) {
            self.regs.pc = addr;
            16
        } else {
            12
        }
    }

    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        4
    }
}

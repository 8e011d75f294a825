mod alu;
mod cb;
mod control;
mod incdec;
mod ld;
mod stack;

use super::{Bus, Cpu, Instruction};

impl Cpu {
    /// Execute a decoded instruction and return the number of T-cycles.
    ///
    /// PC already points past the instruction's encoding when this runs, so
    /// relative jumps and return addresses are computed from it directly.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, instruction: Instruction) -> u32 {
        use Instruction::*;

        match instruction {
            Nop => 4,

            // Loads.
            LdPairImm(pair, value) => self.exec_ld_pair_imm(pair, value),
            LdIndirectA(ind) => self.exec_ld_indirect_a(bus, ind),
            LdAIndirect(ind) => self.exec_ld_a_indirect(bus, ind),
            LdImm(dst, value) => self.exec_ld_imm(bus, dst, value),
            Ld(dst, src) => self.exec_ld(bus, dst, src),
            LdAddrSp(addr) => self.exec_ld_addr_sp(bus, addr),
            LdhImmA(offset) => self.exec_ldh_store(bus, offset),
            LdhAImm(offset) => self.exec_ldh_load(bus, offset),
            LdhCA => self.exec_ldh_c_store(bus),
            LdhAC => self.exec_ldh_c_load(bus),
            LdAddrA(addr) => self.exec_ld_addr_a(bus, addr),
            LdAAddr(addr) => self.exec_ld_a_addr(bus, addr),
            LdSpHl => self.exec_ld_sp_hl(),
            LdHlSpOffset(offset) => self.exec_ld_hl_sp_offset(offset),

            // Arithmetic.
            AddSpOffset(offset) => self.exec_add_sp_offset(offset),
            Inc(target) => self.exec_inc8(bus, target),
            Dec(target) => self.exec_dec8(bus, target),
            IncPair(pair) => self.exec_inc16(pair),
            DecPair(pair) => self.exec_dec16(pair),
            AddHl(pair) => self.exec_add_hl(pair),
            Alu(op, src) => self.exec_alu(bus, op, src),
            AluImm(op, value) => self.exec_alu_imm(op, value),
            RotateA(op) => self.exec_rotate_a(op),
            Daa => self.exec_daa(),
            Cpl => self.exec_cpl(),
            Scf => self.exec_scf(),
            Ccf => self.exec_ccf(),

            // Control flow.
            Jr(cond, offset) => self.exec_jr(cond, offset),
            Jp(cond, addr) => self.exec_jp(cond, addr),
            JpHl => self.exec_jp_hl(),
            Call(cond, addr) => self.exec_call(bus, cond, addr),
            Ret(cond) => self.exec_ret(bus, cond),
            Rst(vector) => self.exec_rst(bus, vector),
            Push(pair) => self.exec_push(bus, pair),
            Pop(pair) => self.exec_pop(bus, pair),

            // CB-prefixed.
            Shift(op, target) => self.exec_shift(bus, op, target),
            Bit(bit, target) => self.exec_bit(bus, bit, target),
            Res(bit, target) => self.exec_res(bus, bit, target),
            Set(bit, target) => self.exec_set(bus, bit, target),
        }
    }
}

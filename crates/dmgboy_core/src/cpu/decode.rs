use super::{
    AluOp, Bus, Condition, Fault, Indirect, Instruction, Operand8, Pair, RotOp, StackPair,
};

/// An instruction together with its encoded length in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub instruction: Instruction,
    pub len: u8,
}

/// Decode the instruction starting at `pc` without modifying any state.
///
/// The match below lists every one of the 256 opcode values (ranges
/// included), so a missing case is a compile error rather than a silent
/// runtime gap. Immediate operands are read little-endian from the bytes
/// following the opcode; addresses wrap at 0xFFFF.
pub fn decode<B: Bus + ?Sized>(bus: &B, pc: u16) -> Result<Decoded, Fault> {
    use Instruction::*;

    let opcode = bus.read8(pc);
    let d8 = || bus.read8(pc.wrapping_add(1));
    let r8 = || bus.read8(pc.wrapping_add(1)) as i8;
    let d16 = || bus.read16(pc.wrapping_add(1));

    let (instruction, len) = match opcode {
        // Interrupt and low-power instructions: STOP, HALT, RETI, DI, EI.
        0x10 | 0x76 | 0xD9 | 0xF3 | 0xFB => {
            return Err(Fault::Unimplemented { opcode, pc });
        }

        // Opcode holes. These lock up real hardware.
        0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
            return Err(Fault::UnknownOpcode { opcode, pc });
        }

        0x00 => (Nop, 1),

        // 16-bit immediate loads.
        0x01 | 0x11 | 0x21 | 0x31 => (LdPairImm(Pair::from_field(opcode >> 4), d16()), 3),

        // LD (BC/DE/HL±), A
        0x02 | 0x12 | 0x22 | 0x32 => (LdIndirectA(Indirect::from_field(opcode >> 4)), 1),

        // LD A, (BC/DE/HL±)
        0x0A | 0x1A | 0x2A | 0x3A => (LdAIndirect(Indirect::from_field(opcode >> 4)), 1),

        0x03 | 0x13 | 0x23 | 0x33 => (IncPair(Pair::from_field(opcode >> 4)), 1),
        0x0B | 0x1B | 0x2B | 0x3B => (DecPair(Pair::from_field(opcode >> 4)), 1),
        0x09 | 0x19 | 0x29 | 0x39 => (AddHl(Pair::from_field(opcode >> 4)), 1),

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
            (Inc(Operand8::from_field(opcode >> 3)), 1)
        }
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
            (Dec(Operand8::from_field(opcode >> 3)), 1)
        }

        // LD r, d8 (and LD (HL), d8)
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            (LdImm(Operand8::from_field(opcode >> 3), d8()), 2)
        }

        0x07 | 0x0F | 0x17 | 0x1F => (RotateA(RotOp::from_field(opcode >> 3)), 1),

        0x08 => (LdAddrSp(d16()), 3),

        0x18 => (Jr(None, r8()), 2),
        0x20 | 0x28 | 0x30 | 0x38 => (Jr(Some(Condition::from_field(opcode >> 3)), r8()), 2),

        0x27 => (Daa, 1),
        0x2F => (Cpl, 1),
        0x37 => (Scf, 1),
        0x3F => (Ccf, 1),

        // LD r1, r2 matrix. 0x76 (HALT) is caught above.
        0x40..=0x7F => (
            Ld(Operand8::from_field(opcode >> 3), Operand8::from_field(opcode)),
            1,
        ),

        // ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, r
        0x80..=0xBF => (
            Alu(AluOp::from_field(opcode >> 3), Operand8::from_field(opcode)),
            1,
        ),

        // ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, d8
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
            (AluImm(AluOp::from_field(opcode >> 3), d8()), 2)
        }

        0xC0 | 0xC8 | 0xD0 | 0xD8 => (Ret(Some(Condition::from_field(opcode >> 3))), 1),
        0xC9 => (Ret(None), 1),

        0xC1 | 0xD1 | 0xE1 | 0xF1 => (Pop(StackPair::from_field(opcode >> 4)), 1),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => (Push(StackPair::from_field(opcode >> 4)), 1),

        0xC2 | 0xCA | 0xD2 | 0xDA => (Jp(Some(Condition::from_field(opcode >> 3)), d16()), 3),
        0xC3 => (Jp(None, d16()), 3),
        0xE9 => (JpHl, 1),

        0xC4 | 0xCC | 0xD4 | 0xDC => (Call(Some(Condition::from_field(opcode >> 3)), d16()), 3),
        0xCD => (Call(None, d16()), 3),

        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => (Rst(opcode & 0x38), 1),

        0xCB => (decode_prefixed(d8()), 2),

        0xE0 => (LdhImmA(d8()), 2),
        0xF0 => (LdhAImm(d8()), 2),
        0xE2 => (LdhCA, 1),
        0xF2 => (LdhAC, 1),
        0xEA => (LdAddrA(d16()), 3),
        0xFA => (LdAAddr(d16()), 3),

        0xE8 => (AddSpOffset(r8()), 2),
        0xF8 => (LdHlSpOffset(r8()), 2),
        0xF9 => (LdSpHl, 1),
    };

    Ok(Decoded { instruction, len })
}

/// Decode the byte following a 0xCB prefix. Every value is defined.
pub(super) fn decode_prefixed(cb: u8) -> Instruction {
    let bit = (cb >> 3) & 0x07;
    let target = Operand8::from_field(cb);

    match cb >> 6 {
        0 => Instruction::Shift(RotOp::from_field(bit), target),
        1 => Instruction::Bit(bit, target),
        2 => Instruction::Res(bit, target),
        _ => Instruction::Set(bit, target),
    }
}

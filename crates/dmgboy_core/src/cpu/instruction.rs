use std::fmt;

/// 8-bit operand selected by a 3-bit opcode field.
///
/// Field values 0–7 map to B, C, D, E, H, L, (HL), A. `IndHl` is not a
/// register: it names the memory byte addressed by HL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand8 {
    B,
    C,
    D,
    E,
    H,
    L,
    IndHl,
    A,
}

impl Operand8 {
    pub const ALL: [Operand8; 8] = [
        Operand8::B,
        Operand8::C,
        Operand8::D,
        Operand8::E,
        Operand8::H,
        Operand8::L,
        Operand8::IndHl,
        Operand8::A,
    ];

    /// Map the low three bits of `field` to an operand.
    #[inline]
    pub const fn from_field(field: u8) -> Self {
        Self::ALL[(field & 0x07) as usize]
    }

    #[inline]
    pub const fn is_memory(self) -> bool {
        matches!(self, Operand8::IndHl)
    }
}

/// 16-bit target of LD rr,d16 / INC rr / DEC rr / ADD HL,rr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pair {
    BC,
    DE,
    HL,
    SP,
}

impl Pair {
    #[inline]
    pub const fn from_field(field: u8) -> Self {
        match field & 0x03 {
            0 => Pair::BC,
            1 => Pair::DE,
            2 => Pair::HL,
            _ => Pair::SP,
        }
    }
}

/// 16-bit operand of PUSH/POP, where AF takes the place of SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackPair {
    BC,
    DE,
    HL,
    AF,
}

impl StackPair {
    #[inline]
    pub const fn from_field(field: u8) -> Self {
        match field & 0x03 {
            0 => StackPair::BC,
            1 => StackPair::DE,
            2 => StackPair::HL,
            _ => StackPair::AF,
        }
    }
}

/// Memory operand of LD (rr),A and LD A,(rr).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indirect {
    BC,
    DE,
    /// (HL+): HL is incremented after the access.
    HlInc,
    /// (HL-): HL is decremented after the access.
    HlDec,
}

impl Indirect {
    #[inline]
    pub const fn from_field(field: u8) -> Self {
        match field & 0x03 {
            0 => Indirect::BC,
            1 => Indirect::DE,
            2 => Indirect::HlInc,
            _ => Indirect::HlDec,
        }
    }
}

/// Branch condition of JR/JP/CALL/RET.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    NZ,
    Z,
    NC,
    C,
}

impl Condition {
    #[inline]
    pub const fn from_field(field: u8) -> Self {
        match field & 0x03 {
            0 => Condition::NZ,
            1 => Condition::Z,
            2 => Condition::NC,
            _ => Condition::C,
        }
    }
}

/// Accumulator ALU operation, in opcode order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    #[inline]
    pub const fn from_field(field: u8) -> Self {
        match field & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Rotate/shift operation of the CB-prefixed block, in opcode order.
///
/// The first four also encode the unprefixed accumulator rotates
/// (RLCA, RRCA, RLA, RRA).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl RotOp {
    #[inline]
    pub const fn from_field(field: u8) -> Self {
        match field & 0x07 {
            0 => RotOp::Rlc,
            1 => RotOp::Rrc,
            2 => RotOp::Rl,
            3 => RotOp::Rr,
            4 => RotOp::Sla,
            5 => RotOp::Sra,
            6 => RotOp::Swap,
            _ => RotOp::Srl,
        }
    }
}

/// A fully decoded instruction, immediates included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Nop,
    /// LD rr,d16
    LdPairImm(Pair, u16),
    /// LD (rr),A
    LdIndirectA(Indirect),
    /// LD A,(rr)
    LdAIndirect(Indirect),
    /// LD r,d8
    LdImm(Operand8, u8),
    /// LD r,r' (destination first)
    Ld(Operand8, Operand8),
    /// LD (a16),SP
    LdAddrSp(u16),
    /// LDH (a8),A
    LdhImmA(u8),
    /// LDH A,(a8)
    LdhAImm(u8),
    /// LD (C),A
    LdhCA,
    /// LD A,(C)
    LdhAC,
    /// LD (a16),A
    LdAddrA(u16),
    /// LD A,(a16)
    LdAAddr(u16),
    LdSpHl,
    /// LD HL,SP+r8
    LdHlSpOffset(i8),
    /// ADD SP,r8
    AddSpOffset(i8),
    Inc(Operand8),
    Dec(Operand8),
    IncPair(Pair),
    DecPair(Pair),
    AddHl(Pair),
    Alu(AluOp, Operand8),
    AluImm(AluOp, u8),
    /// RLCA/RRCA/RLA/RRA
    RotateA(RotOp),
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jr(Option<Condition>, i8),
    Jp(Option<Condition>, u16),
    JpHl,
    Call(Option<Condition>, u16),
    Ret(Option<Condition>),
    /// RST to the given vector (0x00, 0x08, ..., 0x38).
    Rst(u8),
    Push(StackPair),
    Pop(StackPair),
    /// CB 0x00–0x3F
    Shift(RotOp, Operand8),
    /// CB 0x40–0x7F
    Bit(u8, Operand8),
    /// CB 0x80–0xBF
    Res(u8, Operand8),
    /// CB 0xC0–0xFF
    Set(u8, Operand8),
}

impl fmt::Display for Operand8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand8::B => "B",
            Operand8::C => "C",
            Operand8::D => "D",
            Operand8::E => "E",
            Operand8::H => "H",
            Operand8::L => "L",
            Operand8::IndHl => "(HL)",
            Operand8::A => "A",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pair::BC => "BC",
            Pair::DE => "DE",
            Pair::HL => "HL",
            Pair::SP => "SP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for StackPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackPair::BC => "BC",
            StackPair::DE => "DE",
            StackPair::HL => "HL",
            StackPair::AF => "AF",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Indirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indirect::BC => "(BC)",
            Indirect::DE => "(DE)",
            Indirect::HlInc => "(HL+)",
            Indirect::HlDec => "(HL-)",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Condition::NZ => "NZ",
            Condition::Z => "Z",
            Condition::NC => "NC",
            Condition::C => "C",
        };
        f.write_str(name)
    }
}

impl AluOp {
    fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD A,",
            AluOp::Adc => "ADC A,",
            AluOp::Sub => "SUB ",
            AluOp::Sbc => "SBC A,",
            AluOp::And => "AND ",
            AluOp::Xor => "XOR ",
            AluOp::Or => "OR ",
            AluOp::Cp => "CP ",
        }
    }
}

impl RotOp {
    fn mnemonic(self) -> &'static str {
        match self {
            RotOp::Rlc => "RLC",
            RotOp::Rrc => "RRC",
            RotOp::Rl => "RL",
            RotOp::Rr => "RR",
            RotOp::Sla => "SLA",
            RotOp::Sra => "SRA",
            RotOp::Swap => "SWAP",
            RotOp::Srl => "SRL",
        }
    }
}

fn write_cond(f: &mut fmt::Formatter<'_>, name: &str, cond: Option<Condition>) -> fmt::Result {
    match cond {
        Some(cond) => write!(f, "{name} {cond},"),
        None => write!(f, "{name} "),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;

        match *self {
            Nop => f.write_str("NOP"),
            LdPairImm(pair, value) => write!(f, "LD {pair},${value:04X}"),
            LdIndirectA(ind) => write!(f, "LD {ind},A"),
            LdAIndirect(ind) => write!(f, "LD A,{ind}"),
            LdImm(dst, value) => write!(f, "LD {dst},${value:02X}"),
            Ld(dst, src) => write!(f, "LD {dst},{src}"),
            LdAddrSp(addr) => write!(f, "LD (${addr:04X}),SP"),
            LdhImmA(offset) => write!(f, "LDH ($FF{offset:02X}),A"),
            LdhAImm(offset) => write!(f, "LDH A,($FF{offset:02X})"),
            LdhCA => f.write_str("LD ($FF00+C),A"),
            LdhAC => f.write_str("LD A,($FF00+C)"),
            LdAddrA(addr) => write!(f, "LD (${addr:04X}),A"),
            LdAAddr(addr) => write!(f, "LD A,(${addr:04X})"),
            LdSpHl => f.write_str("LD SP,HL"),
            LdHlSpOffset(offset) => write!(f, "LD HL,SP{offset:+}"),
            AddSpOffset(offset) => write!(f, "ADD SP,{offset}"),
            Inc(op) => write!(f, "INC {op}"),
            Dec(op) => write!(f, "DEC {op}"),
            IncPair(pair) => write!(f, "INC {pair}"),
            DecPair(pair) => write!(f, "DEC {pair}"),
            AddHl(pair) => write!(f, "ADD HL,{pair}"),
            Alu(op, src) => write!(f, "{}{src}", op.mnemonic()),
            AluImm(op, value) => write!(f, "{}${value:02X}", op.mnemonic()),
            RotateA(op) => write!(f, "{}A", op.mnemonic()),
            Daa => f.write_str("DAA"),
            Cpl => f.write_str("CPL"),
            Scf => f.write_str("SCF"),
            Ccf => f.write_str("CCF"),
            Jr(cond, offset) => {
                write_cond(f, "JR", cond)?;
                write!(f, "{offset}")
            }
            Jp(cond, addr) => {
                write_cond(f, "JP", cond)?;
                write!(f, "${addr:04X}")
            }
            JpHl => f.write_str("JP HL"),
            Call(cond, addr) => {
                write_cond(f, "CALL", cond)?;
                write!(f, "${addr:04X}")
            }
            Ret(Some(cond)) => write!(f, "RET {cond}"),
            Ret(None) => f.write_str("RET"),
            Rst(vector) => write!(f, "RST ${vector:02X}"),
            Push(pair) => write!(f, "PUSH {pair}"),
            Pop(pair) => write!(f, "POP {pair}"),
            Shift(op, target) => write!(f, "{} {target}", op.mnemonic()),
            Bit(bit, target) => write!(f, "BIT {bit},{target}"),
            Res(bit, target) => write!(f, "RES {bit},{target}"),
            Set(bit, target) => write!(f, "SET {bit},{target}"),
        }
    }
}

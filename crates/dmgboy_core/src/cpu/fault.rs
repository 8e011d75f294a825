use thiserror::Error;

/// Terminal classification for an opcode the core will not execute.
///
/// Both variants halt the CPU. They are kept apart so callers can tell a
/// known gap in the feature set from a byte that decodes to nothing.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fault {
    /// A real instruction that needs hardware this core does not model
    /// (interrupt controller, low-power states).
    #[error("unimplemented opcode {opcode:#04x} at pc {pc:#06x}")]
    Unimplemented { opcode: u8, pc: u16 },
    /// One of the opcode holes with no defined behaviour.
    #[error("unknown opcode {opcode:#04x} at pc {pc:#06x}")]
    UnknownOpcode { opcode: u8, pc: u16 },
}

impl Fault {
    #[inline]
    pub fn opcode(&self) -> u8 {
        match *self {
            Fault::Unimplemented { opcode, .. } | Fault::UnknownOpcode { opcode, .. } => opcode,
        }
    }

    /// Address of the offending opcode.
    #[inline]
    pub fn pc(&self) -> u16 {
        match *self {
            Fault::Unimplemented { pc, .. } | Fault::UnknownOpcode { pc, .. } => pc,
        }
    }

    #[inline]
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Fault::Unimplemented { .. })
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Fault::UnknownOpcode { .. })
    }
}

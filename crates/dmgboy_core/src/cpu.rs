mod alu;
mod bus;
mod decode;
mod exec;
mod fault;
mod flags;
mod helpers;
mod init;
mod instruction;
mod regs;


pub use bus::Bus;
pub use decode::{decode, Decoded};
pub use fault::Fault;
pub use flags::Flags;
pub use init::BootState;
pub use instruction::{
    AluOp, Condition, Indirect, Instruction, Operand8, Pair, RotOp, StackPair,
};
pub use regs::{Reg8, RegPair, Registers};

/// Game Boy CPU core (SM83 / LR35902).
///
/// Holds the register file and the halt state. Memory is not owned by the
/// CPU; every call to [`Cpu::step`] receives the bus by exclusive reference,
/// so several independent machines can coexist.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    boot_state: BootState,
    /// Set once an unknown or unimplemented opcode is reached. While this is
    /// `Some`, `step` dispatches nothing.
    fault: Option<Fault>,
}

/// Outcome of a single call to [`Cpu::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// One instruction completed and took `cycles` T-cycles.
    Executed { cycles: u32 },
    /// This step hit the fault and moved the CPU into the halted state.
    Faulted(Fault),
    /// The CPU was already halted; nothing was dispatched.
    Halted(Fault),
}

impl Step {
    #[inline]
    pub fn is_halted(&self) -> bool {
        matches!(self, Step::Faulted(_) | Step::Halted(_))
    }

    /// True only for the step on which the halt happened.
    #[inline]
    pub fn is_newly_halted(&self) -> bool {
        matches!(self, Step::Faulted(_))
    }

    #[inline]
    pub fn fault(&self) -> Option<Fault> {
        match self {
            Step::Faulted(fault) | Step::Halted(fault) => Some(*fault),
            Step::Executed { .. } => None,
        }
    }
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = Flags::empty();
    }

    /// The fault that halted the CPU, if any.
    #[inline]
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.fault.is_some()
    }

    /// Execute exactly one instruction.
    ///
    /// The opcode at PC is decoded before anything is written, so a fault
    /// leaves registers and memory exactly as they were before the fetch.
    /// The faulting step returns [`Step::Faulted`]; calling `step` on a
    /// halted CPU afterwards returns [`Step::Halted`] with the same fault.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Step {
        if let Some(fault) = self.fault {
            return Step::Halted(fault);
        }

        let pc = self.regs.pc;
        match decode(&*bus, pc) {
            Ok(Decoded { instruction, len }) => {
                log::trace!("{:04X} > {:02X}  {}", pc, bus.read8(pc), instruction);
                self.regs.pc = pc.wrapping_add(u16::from(len));
                let cycles = self.execute(bus, instruction);
                Step::Executed { cycles }
            }
            Err(fault) => {
                log::error!(
                    "GB CPU halted: {fault} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                    fault = fault,
                    sp = self.regs.sp,
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                );
                self.fault = Some(fault);
                Step::Faulted(fault)
            }
        }
    }
}

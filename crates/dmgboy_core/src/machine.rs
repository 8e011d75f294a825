use std::fmt;

use crate::cpu::{BootState, Cpu, Fault, Flags, Registers, Step};
use crate::memory::{LoadError, Memory};

#[cfg(test)]
mod tests;

/// CPU plus its address space.
///
/// This is the entry point for hosts: load a program, then drive it with
/// [`Machine::step`] from an external tick or with [`Machine::run`] to halt.
#[derive(Clone, Debug, Default)]
pub struct Machine {
    cpu: Cpu,
    memory: Memory,
    instructions: u64,
    cycles: u64,
}

/// Read-only view of the machine state at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub regs: Registers,
    pub fault: Option<Fault>,
    /// Instructions executed since the last reset.
    pub instructions: u64,
    /// T-cycles consumed since the last reset.
    pub cycles: u64,
}

impl Snapshot {
    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.fault.is_some()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let regs = &self.regs;
        write!(
            f,
            "pc=0x{:04X} sp=0x{:04X} af=0x{:04X} bc=0x{:04X} de=0x{:04X} hl=0x{:04X} flags={}{}{}{} instructions={} cycles={}",
            regs.pc,
            regs.sp,
            regs.af(),
            regs.bc(),
            regs.de(),
            regs.hl(),
            if regs.flag(Flags::Z) { 'Z' } else { '-' },
            if regs.flag(Flags::N) { 'N' } else { '-' },
            if regs.flag(Flags::H) { 'H' } else { '-' },
            if regs.flag(Flags::C) { 'C' } else { '-' },
            self.instructions,
            self.cycles,
        )?;
        if let Some(fault) = self.fault {
            write!(f, " halted=({fault})")?;
        }
        Ok(())
    }
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boot_state(boot_state: BootState) -> Self {
        Self {
            cpu: Cpu::with_boot_state(boot_state),
            ..Self::default()
        }
    }

    /// Copy a program image into memory starting at 0x0000.
    ///
    /// Call this before the first `step`. The rest of the space is zeroed.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.memory.load(program)?;
        log::debug!("Loaded {} byte program at 0x0000", program.len());
        Ok(())
    }

    /// Advance exactly one instruction.
    pub fn step(&mut self) -> Step {
        let step = self.cpu.step(&mut self.memory);
        if let Step::Executed { cycles } = step {
            self.instructions += 1;
            self.cycles += u64::from(cycles);
        }
        step
    }

    /// Step until the CPU halts and return the reason.
    ///
    /// A program that never reaches an unknown or unimplemented opcode keeps
    /// this looping; use [`Machine::run_for`] when a bound is needed.
    pub fn run(&mut self) -> Fault {
        loop {
            if let Some(fault) = self.step().fault() {
                return fault;
            }
        }
    }

    /// Step at most `max_steps` times. Returns the fault if the CPU halted
    /// within the budget.
    pub fn run_for(&mut self, max_steps: u64) -> Option<Fault> {
        for _ in 0..max_steps {
            if let Some(fault) = self.step().fault() {
                return Some(fault);
            }
        }
        self.cpu.fault()
    }

    /// Restore the boot register state and clear counters. Memory is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.instructions = 0;
        self.cycles = 0;
    }

    #[inline]
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    #[inline]
    pub fn registers(&self) -> &Registers {
        &self.cpu.regs
    }

    #[inline]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    #[inline]
    pub fn fault(&self) -> Option<Fault> {
        self.cpu.fault()
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            regs: self.cpu.regs,
            fault: self.cpu.fault(),
            instructions: self.instructions,
            cycles: self.cycles,
        }
    }
}

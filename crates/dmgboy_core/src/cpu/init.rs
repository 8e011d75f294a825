use super::{Cpu, Flags, Registers};

/// Register contents the CPU starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BootState {
    /// Every register zero. A boot ROM loaded at 0x0000 runs from PC=0.
    #[default]
    PowerOn,
    /// The state the DMG boot ROM leaves behind when it hands control to
    /// the cartridge at 0x0100.
    PostBoot,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_boot_state(BootState::PowerOn)
    }

    pub fn with_boot_state(boot_state: BootState) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            boot_state,
            fault: None,
        };
        cpu.apply_boot_state();
        cpu
    }

    #[inline]
    pub fn boot_state(&self) -> BootState {
        self.boot_state
    }

    /// Restore the configured boot state and clear any fault.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.fault = None;
        self.apply_boot_state();
    }

    /// Post-boot values follow Pan Docs for the DMG.
    fn apply_boot_state(&mut self) {
        if self.boot_state == BootState::PowerOn {
            return;
        }

        self.regs.a = 0x01;
        self.regs.f = Flags::Z | Flags::H | Flags::C;
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }
}

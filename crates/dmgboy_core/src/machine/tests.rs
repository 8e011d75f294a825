use super::*;
use crate::memory::MEMORY_SIZE;

/// Opening of the DMG boot ROM: set up the stack, then clear VRAM from
/// 0x9FFF down to 0x8000. HALT follows the loop.
const VRAM_CLEAR: [u8; 13] = [
    0x31, 0xFE, 0xFF, // LD SP, 0xFFFE
    0xAF, // XOR A
    0x21, 0xFF, 0x9F, // LD HL, 0x9FFF
    0x32, // LD (HL-), A
    0xCB, 0x7C, // BIT 7, H
    0x20, 0xFB, // JR NZ, -5
    0x76, // HALT
];

#[test]
fn vram_clear_loop_runs_to_halt() {
    let mut machine = Machine::new();
    machine.load_program(&VRAM_CLEAR).unwrap();
    for addr in 0x8000..=0x9FFF_u16 {
        machine.memory.write_byte(addr, 0xA5);
    }
    machine.memory.write_byte(0x7FFF, 0x5A);

    let fault = machine.run();

    assert_eq!(fault, Fault::Unimplemented { opcode: 0x76, pc: 0x000C });
    assert!(machine.memory().range(0x8000, 0x2000).iter().all(|&b| b == 0));
    assert_eq!(machine.memory().read_byte(0x7FFF), 0x5A, "loop must stop at 0x8000");

    let regs = machine.registers();
    assert_eq!(regs.sp, 0xFFFE);
    assert_eq!(regs.hl(), 0x7FFF);
    assert_eq!(regs.a, 0x00);
    assert_eq!(regs.pc, 0x000C);
    assert!(regs.flag(Flags::Z));

    let snapshot = machine.snapshot();
    assert_eq!(snapshot.instructions, 3 + 3 * 0x2000);
    // 12 + 4 + 12, then (8 + 8 + 12) per pass, except the last JR is 8.
    assert_eq!(snapshot.cycles, 28 + 28 * 0x2000 - 4);
}

#[test]
fn step_counts_instructions_and_cycles() {
    let mut machine = Machine::new();
    machine.load_program(&VRAM_CLEAR).unwrap();

    assert_eq!(machine.step(), Step::Executed { cycles: 12 });
    assert_eq!(machine.step(), Step::Executed { cycles: 4 });

    let snapshot = machine.snapshot();
    assert_eq!(snapshot.instructions, 2);
    assert_eq!(snapshot.cycles, 16);
    assert_eq!(snapshot.regs.pc, 0x0004);
    assert!(snapshot.flag(Flags::Z));
    assert!(!snapshot.is_halted());
}

#[test]
fn halted_machine_does_not_advance() {
    let mut machine = Machine::new();
    // NOP; unknown opcode
    machine.load_program(&[0x00, 0xFC]).unwrap();

    assert!(!machine.step().is_halted());
    let fault = Fault::UnknownOpcode {
        opcode: 0xFC,
        pc: 0x0001,
    };
    let step = machine.step();
    assert_eq!(step, Step::Faulted(fault));
    assert!(machine.is_halted());

    let before = machine.snapshot();
    let again = machine.step();
    assert_eq!(again, Step::Halted(fault));
    assert_ne!(again, step);
    assert_eq!(machine.run(), fault);
    assert_eq!(machine.snapshot(), before);
    assert_eq!(before.instructions, 1);
}

#[test]
fn only_the_faulting_step_reports_a_new_halt() {
    let mut machine = Machine::new();
    machine.load_program(&[0xD3]).unwrap();

    let first = machine.step();
    let second = machine.step();
    let third = machine.step();

    assert!(first.is_newly_halted());
    assert!(!second.is_newly_halted());
    assert_ne!(first, second);
    assert_eq!(second, third);
    assert_eq!(first.fault(), second.fault());
    assert_eq!(machine.snapshot().instructions, 0);
}

#[test]
fn run_for_stops_at_the_budget() {
    let mut machine = Machine::new();
    // JR -2: spins forever.
    machine.load_program(&[0x18, 0xFE]).unwrap();

    assert_eq!(machine.run_for(100), None);
    assert_eq!(machine.snapshot().instructions, 100);
    assert_eq!(machine.snapshot().cycles, 1200);
    assert_eq!(machine.registers().pc, 0x0000);
    assert!(!machine.is_halted());
}

#[test]
fn run_for_reports_a_halt_inside_the_budget() {
    let mut machine = Machine::new();
    machine.load_program(&[0x00, 0x00, 0x10]).unwrap();

    let fault = machine.run_for(10);
    assert_eq!(fault, Some(Fault::Unimplemented { opcode: 0x10, pc: 0x0002 }));
    assert_eq!(machine.snapshot().instructions, 2);

    // Still halted on a later call with no budget.
    assert_eq!(machine.run_for(0), fault);
}

#[test]
fn reset_keeps_memory_and_clears_counters() {
    let mut machine = Machine::new();
    machine.load_program(&[0x3E, 0x42, 0xEA, 0x00, 0xC0, 0xD3]).unwrap();

    assert!(machine.run().is_unknown());
    assert_eq!(machine.memory().read_byte(0xC000), 0x42);

    machine.reset();
    assert!(!machine.is_halted());
    assert_eq!(*machine.registers(), Registers::default());
    assert_eq!(machine.snapshot().instructions, 0);
    assert_eq!(machine.snapshot().cycles, 0);
    assert_eq!(machine.memory().read_byte(0xC000), 0x42);
    assert_eq!(machine.memory().read_byte(0x0000), 0x3E);

    // The program is still there to run again.
    assert!(machine.run().is_unknown());
}

#[test]
fn post_boot_machine_starts_at_cartridge_entry() {
    let mut image = vec![0u8; 0x0151];
    // 0x0100: LD A, 0x11 ; 0x0102: STOP
    image[0x0100] = 0x3E;
    image[0x0101] = 0x11;
    image[0x0102] = 0x10;

    let mut machine = Machine::with_boot_state(BootState::PostBoot);
    machine.load_program(&image).unwrap();
    assert_eq!(machine.cpu().boot_state(), BootState::PostBoot);
    assert_eq!(machine.registers().pc, 0x0100);
    assert_eq!(machine.registers().af(), 0x01B0);

    let fault = machine.run();
    assert_eq!(fault.pc(), 0x0102);
    assert_eq!(machine.registers().a, 0x11);

    machine.reset();
    assert_eq!(machine.cpu().boot_state(), BootState::PostBoot);
    assert_eq!(machine.registers().pc, 0x0100);
    assert_eq!(machine.registers().sp, 0xFFFE);
}

#[test]
fn oversized_program_is_rejected() {
    let mut machine = Machine::new();
    let image = vec![0u8; MEMORY_SIZE + 1];

    let err = machine.load_program(&image).unwrap_err();
    assert_eq!(err, LoadError::TooLarge { len: MEMORY_SIZE + 1 });
    assert!(!machine.is_halted());
}

#[test]
fn machines_are_independent() {
    let mut first = Machine::new();
    let mut second = Machine::new();
    first.load_program(&[0x3E, 0x01, 0x76]).unwrap();
    second.load_program(&[0x3E, 0x02, 0x00, 0x76]).unwrap();

    first.run();
    second.run();

    assert_eq!(first.registers().a, 0x01);
    assert_eq!(second.registers().a, 0x02);
    assert_eq!(first.fault().map(|f| f.pc()), Some(0x0002));
    assert_eq!(second.fault().map(|f| f.pc()), Some(0x0003));
}

#[test]
fn snapshot_display_shows_registers_and_halt() {
    let mut machine = Machine::new();
    machine.load_program(&[0xAF, 0xDB]).unwrap();
    machine.run();

    let text = machine.snapshot().to_string();
    assert!(text.starts_with("pc=0x0001 sp=0x0000 af=0x0080"), "{text}");
    assert!(text.contains("flags=Z---"), "{text}");
    assert!(text.contains("instructions=1 cycles=4"), "{text}");
    assert!(text.ends_with("halted=(unknown opcode 0xdb at pc 0x0001)"), "{text}");
}

//! Instruction-execution core for the Game Boy (DMG) CPU.
//!
//! The crate fetches opcodes from a flat 64 KiB address space, decodes them
//! into tagged [`Instruction`]s and applies them to the register file until a
//! [`Fault`] halts the CPU. Display, sound, timers and interrupts live outside
//! this crate.

pub mod cpu;
pub mod machine;
pub mod memory;

pub use cpu::{
    decode, AluOp, BootState, Bus, Condition, Cpu, Decoded, Fault, Flags, Indirect, Instruction,
    Operand8, Pair, Reg8, RegPair, Registers, RotOp, StackPair, Step,
};
pub use machine::{Machine, Snapshot};
pub use memory::{LoadError, Memory, MEMORY_SIZE};

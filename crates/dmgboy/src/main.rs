use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dmgboy::{hex_dump, parse_dump_range, DumpRange, RunOptions};
use dmgboy_core::BootState;

#[derive(Debug, Parser)]
#[command(name = "dmgboy", version, about = "Run a Game Boy program image on the CPU core")]
struct Args {
    /// Program image loaded at 0x0000 (boot ROM or cartridge).
    rom: PathBuf,

    /// Start from the register state the boot ROM leaves behind (PC=0x0100).
    #[arg(long)]
    post_boot: bool,

    /// Stop after this many instructions.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print a memory range after the run, e.g. `8000:256`.
    #[arg(long, value_parser = parse_dump_range)]
    dump_memory: Option<DumpRange>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::info!("Running ROM path: '{}'", args.rom.display());
    let rom = std::fs::read(&args.rom)
        .with_context(|| format!("failed to read ROM file '{}'", args.rom.display()))?;

    let boot_state = if args.post_boot {
        BootState::PostBoot
    } else {
        BootState::PowerOn
    };
    let options = RunOptions::builder()
        .boot_state(boot_state)
        .max_steps(args.max_steps)
        .build();

    let machine = dmgboy::run(&options, &rom)?;
    println!("{}", machine.snapshot());
    if let Some(range) = args.dump_memory {
        print!("{}", hex_dump(machine.memory(), range));
    }
    Ok(())
}

use anyhow::Result;
use dmgboy_core::{BootState, Machine, Memory};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct RunOptions {
    #[builder(default)]
    pub boot_state: BootState,
    /// Stop after this many instructions even if the CPU has not halted.
    #[builder(default)]
    pub max_steps: Option<u64>,
}

/// A `START:LEN` memory range, START in hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DumpRange {
    pub start: u16,
    pub len: usize,
}

pub fn parse_dump_range(s: &str) -> Result<DumpRange, String> {
    let (start, len) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:LEN, got '{s}'"))?;

    let start = start.trim_start_matches("0x").trim_start_matches("0X");
    let start = u16::from_str_radix(start, 16)
        .map_err(|err| format!("bad start address '{start}': {err}"))?;
    let len = len
        .parse::<usize>()
        .map_err(|err| format!("bad length '{len}': {err}"))?;

    Ok(DumpRange { start, len })
}

/// Load `rom` at 0x0000 and drive the CPU until it halts or the step budget
/// runs out.
pub fn run(options: &RunOptions, rom: &[u8]) -> Result<Machine> {
    let mut machine = Machine::with_boot_state(options.boot_state);
    machine.load_program(rom)?;
    log::info!(
        "Loaded {} byte ROM, boot state {:?}",
        rom.len(),
        options.boot_state
    );

    let fault = match options.max_steps {
        Some(max_steps) => machine.run_for(max_steps),
        None => Some(machine.run()),
    };

    let snapshot = machine.snapshot();
    match fault {
        Some(fault) => log::info!(
            "Halted after {} instructions ({} cycles): {}",
            snapshot.instructions,
            snapshot.cycles,
            fault
        ),
        None => log::info!(
            "Step budget exhausted after {} instructions ({} cycles)",
            snapshot.instructions,
            snapshot.cycles
        ),
    }

    Ok(machine)
}

/// Sixteen bytes per line, each line prefixed with its address.
pub fn hex_dump(memory: &Memory, range: DumpRange) -> String {
    let bytes = memory.range(range.start, range.len);
    let mut out = String::new();

    for (row, chunk) in bytes.chunks(16).enumerate() {
        let addr = usize::from(range.start) + row * 16;
        let line: Vec<String> = chunk.iter().map(|byte| format!("{byte:02X}")).collect();
        out.push_str(&format!("{addr:04X}: {}\n", line.join(" ")));
    }
    out
}

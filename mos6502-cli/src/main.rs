use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use mos6502_core::Cpu;

/// Run a raw 6502 program image against the emulator core.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the raw program image (no header, just opcode bytes)
    program: PathBuf,

    /// Address the image is loaded at, and where PC starts unless --entry is given
    #[arg(long, value_parser = parse_u16, default_value = "0x0600")]
    offset: u16,

    /// Entry address, if different from --offset
    #[arg(long, value_parser = parse_u16)]
    entry: Option<u16>,

    /// Total addressable memory size
    #[arg(long, default_value_t = 65536)]
    ram: usize,

    /// Dump registers and memory after every instruction
    #[arg(long)]
    trace: bool,
}

/// Accepts `0x`-prefixed hex or plain decimal, matching the memory-image
/// conventions in the core's own doc comments.
fn parse_u16(input: &str) -> Result<u16, String> {
    let trimmed = input.trim();
    if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16).map_err(|e| e.to_string())
    } else {
        trimmed.parse::<u16>().map_err(|e| e.to_string())
    }
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    let program = fs::read(&cli.program)
        .map_err(|e| format!("failed to read {}: {e}", cli.program.display()))?;

    let mut cpu = Cpu::new(cli.ram);
    cpu.load(&program, cli.offset, program.len() as u16)
        .map_err(|e| e.to_string())?;
    cpu.set_entry(cli.entry.unwrap_or(cli.offset));

    if let Err(err) = cpu.run(cli.trace) {
        eprintln!("{} {err}", "halted:".red().bold());
        cpu.dump_registers();
        return Err(err.to_string());
    }

    println!("{}", "final state".bold());
    cpu.dump_registers();
    Ok(())
}

//! Command-line runner for bytecode images.
//!
//! Loads a raw bytecode file at address 0 of a flat 64KB memory, wires the
//! processor to the standard streams, and exits with the run's status.

use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use libvm8::{FlatMemory, MemoryBus, Processor};

const HELP_TEXT: &str = "Provide the bytecode file to execute as an argument.

  Example: vm8 hello_world.vm8

";

#[derive(Parser, Debug)]
#[command(name = "vm8")]
#[command(about = "Run a bytecode image on the 8-bit virtual machine", long_about = None)]
struct Args {
    /// Path to the bytecode image to execute
    bytecode: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let Some(path) = args.bytecode else {
        print!("{HELP_TEXT}");
        return ExitCode::SUCCESS;
    };

    match execute(&path) {
        Ok(status) => ExitCode::from(status),
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(path: &Path) -> Result<u8> {
    let program = fs::read(path)
        .with_context(|| format!("error reading input file: {}", path.display()))?;
    debug!("read {} byte program from {}", program.len(), path.display());

    let mut memory = FlatMemory::new();
    memory.load_program(&program)?;

    let mut processor = Processor::new(
        &mut memory,
        io::stdin().lock(),
        BufWriter::new(io::stdout().lock()),
        BufWriter::new(io::stderr().lock()),
    );
    Ok(processor.run())
}

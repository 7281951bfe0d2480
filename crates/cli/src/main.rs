//! sim16 command-line front end.
//!
//! This binary provides the entry point for running and inspecting programs. It performs:
//! 1. **Run:** Load a program file, execute until HALT or a fault, exit 0 or 1.
//! 2. **Disassemble:** Print every loaded word with its mnemonic.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sim16_core::config::Config;
use sim16_core::isa::disasm::disassemble;
use sim16_core::sim::loader;
use sim16_core::{SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "sim16",
    author,
    version,
    about = "16-bit custom ISA simulator",
    long_about = "Run or disassemble programs for the 16-bit machine.\n\nProgram files hold one `<addr>: 0x<word>` pair per line.\n\nExamples:\n  sim16 run program.txt\n  sim16 run program.txt --trace --stats\n  sim16 disasm program.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program and run it until HALT or a fault.
    Run {
        /// Program file to execute.
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,

        /// Treat NOP as a plain no-op instead of a state dump.
        #[arg(long)]
        no_breakpoints: bool,

        /// Print run statistics on exit.
        #[arg(long)]
        stats: bool,
    },

    /// Print the disassembly of every word in a program file.
    Disasm {
        /// Program file to disassemble.
        program: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(trace);

    let result = match cli.command {
        Commands::Run {
            program,
            config,
            trace,
            no_breakpoints,
            stats,
        } => cmd_run(&program, config.as_deref(), trace, no_breakpoints, stats),
        Commands::Disasm { program } => cmd_disasm(&program),
    };

    if let Err(e) = result {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the defaults.
fn init_logging(trace: bool) {
    let default = if trace { "warn,sim16_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the program and runs it; returns once the machine halts or faults.
fn cmd_run(
    program: &Path,
    config: Option<&Path>,
    trace: bool,
    no_breakpoints: bool,
    stats: bool,
) -> Result<(), SimError> {
    let mut config = match config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if trace {
        config.general.trace_instructions = true;
    }
    if no_breakpoints {
        config.general.break_on_nop = false;
    }

    let parsed = loader::load_program(program)?;
    if parsed.skipped > 0 {
        tracing::warn!(skipped = parsed.skipped, "ignored malformed program lines");
    }

    let mut sim = Simulator::new(&config);
    sim.load(&parsed);

    println!("Starting execution...");
    let result = sim.run();
    if stats {
        sim.cpu.stats.print();
    }
    result
}

/// Prints `address: word  mnemonic` for every word in the program file.
fn cmd_disasm(program: &Path) -> Result<(), SimError> {
    let parsed = loader::load_program(program)?;
    for word in &parsed.words {
        println!(
            "{:04x}: {:04x}  {}",
            word.addr,
            word.value,
            disassemble(word.value)
        );
    }
    Ok(())
}

//! LS-8 emulator CLI.
//!
//! This binary is the single entry point for running LS-8 programs. It
//! performs:
//! 1. **Program run:** Load a `.ls8` program file and execute it to HLT.
//! 2. **Diagnostics:** Optional per-instruction trace and end-of-run
//!    statistics report.
//! 3. **Configuration:** Optional JSON config file, overridden by flags.

use clap::{Parser, Subcommand};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::sim::loader;
use ls8_core::soc::Console;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 microcomputer emulator",
    long_about = "Run an LS-8 program file (one base-2 instruction byte per line, `#` comments).\n\nExamples:\n  ls8 run -f software/print8.ls8\n  ls8 run -f software/mult.ls8 --stats\n  ls8 software/print8.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single LS-8 program to completion.
    Run {
        /// Program file to execute.
        #[arg(short, long)]
        file: String,

        /// Emit a per-instruction trace to stderr.
        #[arg(long)]
        trace: bool,

        /// Print the statistics report after the run.
        #[arg(long)]
        stats: bool,

        /// JSON configuration file (flags override its fields).
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            trace,
            stats,
            config,
        }) => cmd_run(&file, trace, stats, config),
        None => {
            let args: Vec<String> = std::env::args().skip(1).collect();
            if let Some(first) = args.first() {
                if first.ends_with(".ls8") {
                    cmd_run(first, false, false, None);
                    return;
                }
            }
            eprintln!("LS-8 emulator — pass a subcommand or a .ls8 program");
            eprintln!();
            eprintln!("  ls8 run -f <program.ls8>   Run a program");
            eprintln!("  ls8 <program.ls8>          Same, bare form");
            eprintln!();
            eprintln!("  ls8 --help  for full options");
            process::exit(1);
        }
    }
}

/// Loads the configuration: JSON file if given, defaults otherwise.
///
/// Exits the process with an error message if the file cannot be read or
/// parsed.
fn load_config(path: Option<String>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read config '{path}': {e}");
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not parse config '{path}': {e}");
        process::exit(1);
    })
}

/// Runs the emulator: loads the program, then executes to HLT or fault.
///
/// On a load failure, exits with code 2. On a runtime fault, dumps the CPU
/// state and exits with code 1. On HLT, exits with code 0.
fn cmd_run(file: &str, trace: bool, stats: bool, config_path: Option<String>) {
    let mut config = load_config(config_path);
    if trace {
        config.general.trace_instructions = true;
    }
    if stats {
        config.general.print_stats = true;
    }

    if config.general.trace_instructions {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let mut cpu = Cpu::new(Console::stdout(), &config);

    if let Err(e) = loader::load_program(&mut cpu, file) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(2);
    }

    if let Err(e) = cpu.run() {
        eprintln!("\n[!] FATAL FAULT: {e}");
        cpu.dump_state();
        process::exit(1);
    }

    cpu.console.flush();
    if config.general.print_stats {
        cpu.stats.print();
    }
}

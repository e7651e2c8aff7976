use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use ls8::cpu::table::entries;
use ls8::cpu::trace;
use ls8::program::DEFAULT_RADIX;
use ls8::{Bus, Cpu, Program, RunState};

/// Run an LS-8 program.
#[derive(Parser, Debug)]
#[command(name = "ls8", version, about)]
struct Args {
    /// Program file (one literal per line, `#` starts a comment).
    /// Runs the built-in print8 program when omitted.
    file: Option<PathBuf>,

    /// Numeric base of the literals in FILE.
    #[arg(
        long,
        default_value_t = DEFAULT_RADIX,
        value_parser = clap::value_parser!(u32).range(2..=36)
    )]
    base: u32,

    /// Dump CPU state before every instruction.
    #[arg(long)]
    trace: bool,

    /// Stop after this many instructions even if the program has not halted.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print the instruction set (code, mnemonic, operand count, group) and exit.
    #[arg(long)]
    list_opcodes: bool,

    /// Log level for diagnostics on stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let level = if args.trace {
        LevelFilter::Trace
    } else {
        args.log_level.into()
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to install logger")?;

    if args.list_opcodes {
        for entry in entries() {
            println!("{entry}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let program = match &args.file {
        Some(path) => Program::from_file(path, args.base)?,
        None => Program::default(),
    };

    let mut bus = Bus::new();
    bus.load(program.as_bytes())?;
    let mut cpu = Cpu::new();

    let mut remaining = args.max_steps;
    let end = cpu.run_with_callback(&mut bus, |state, bus| {
        if let Some(n) = remaining.as_mut() {
            if *n == 0 {
                return ControlFlow::Break(());
            }
            *n -= 1;
        }
        if args.trace {
            log::trace!("{}", trace(state, bus));
        }
        ControlFlow::Continue(())
    });

    match end {
        RunState::Halted => Ok(ExitCode::SUCCESS),
        // Already logged at error level by the CPU.
        RunState::Faulted(_) => Ok(ExitCode::FAILURE),
        RunState::Running => {
            log::warn!("stopped after {} instruction(s)", cpu.cycles());
            Ok(ExitCode::from(2))
        }
    }
}

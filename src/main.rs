use std::{
    env,
    ffi::{OsStr, OsString},
    io::{self, Write},
    process::ExitCode,
};

use clap::{CommandFactory, Parser, error::ErrorKind};
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use rwmem_sniff::{Sniffer, SnifferConfig};

const USAGE_EXIT: u8 = 1;
const FAILURE_EXIT: u8 = 2;

/// Print the value rwmem.elf reports for ADDRESS.
///
/// The tool path can be overridden with RWMEM_TOOL.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Passed to the tool unchanged
    address: String,
}

/// Parses `argv`, which must hold exactly one argument after the program name.
///
/// That argument is the address whatever it looks like, `--` included. Only a
/// lone help or version flag is left to clap.
fn parse_args(argv: &[OsString]) -> Result<Args, clap::Error> {
    let [program, address] = argv else {
        return Err(Args::command().error(
            ErrorKind::WrongNumberOfValues,
            "expected exactly one ADDRESS",
        ));
    };

    match address.to_str() {
        Some("-h" | "--help" | "-V" | "--version") => Args::try_parse_from(argv),
        _ => Args::try_parse_from([program.as_os_str(), OsStr::new("--"), address.as_os_str()]),
    }
}

fn main() -> ExitCode {
    let argv: Vec<OsString> = env::args_os().collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // usage goes to stderr, stdout stays empty
            eprint!("{}", e.render());
            return ExitCode::from(USAGE_EXIT);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(report) = color_eyre::install().and_then(|()| run(&args)) {
        eprintln!("Error: {report:?}");
        return ExitCode::from(FAILURE_EXIT);
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> color_eyre::Result<()> {
    let sniffer = Sniffer::new(SnifferConfig::from_env());
    let value = sniffer
        .sniff(&args.address)
        .wrap_err_with(|| format!("reading {} with `{}`", args.address, sniffer.command(&args.address)))?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(value.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

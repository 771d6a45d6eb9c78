//! Binary entrypoint for the `symbol-attach` CLI.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Copy debug symbol files next to the binaries they describe.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Build output directory scanned for debug symbol files.
    build_dir: PathBuf,

    /// Install directory scanned for binaries; matched symbol files
    /// are copied into the directories of those binaries.
    install_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match symbol_attach::attach_symbols(&args.build_dir, &args.install_dir) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

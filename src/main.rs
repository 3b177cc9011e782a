use clap::Parser;
use colored::Colorize;

use numera::cli::{Command, NumeraCli};
use numera::commands;
use numera::config::{load_config, resolve_config_path};

fn main() {
    let args = NumeraCli::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: NumeraCli) -> anyhow::Result<()> {
    let cfg_path = resolve_config_path(&args.config);
    let cfg = load_config(cfg_path.as_deref())?;

    match args.cmd {
        Command::Demo => commands::demo::main(&cfg),
        Command::Det { matrix } => commands::matrix::det(&matrix),
        Command::Inv { matrix } => commands::matrix::inv(&matrix),
        Command::Integrate {
            func,
            a,
            b,
            samples,
            coeffs,
        } => commands::integrate::main(&func, a, b, samples, coeffs.as_deref(), &cfg),
    }
}

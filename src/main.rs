//! xilbuild - FPGA project compiler
//!
//! Command line entry point: parses arguments, sets up logging and dispatches
//! to the command implementations.

use clap::Parser;
use env_logger::Env;

use xilbuild::cli::{Cli, Commands};
use xilbuild::commands;

/// Initialise logging: `warn` by default, `debug` with `--verbose`,
/// `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_level));
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config;
    let output = cli.output;
    let result = match cli.command {
        Commands::Build(args) => commands::build::run(&config, output, args),
        Commands::Generate(args) => commands::generate::run(&config, output, args).map(|()| 0),
        Commands::Linux(args) => commands::linux::run(&config, output, args).map(|()| 0),
        Commands::Show(args) => commands::show::run(&config, output, args).map(|()| 0),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the resolved project:\n    xilbuild show\n\n\
                  Machine-readable output:\n    xilbuild show --json")]
pub struct ShowArgs {
    /// Print the project as JSON
    #[arg(long)]
    pub json: bool,
}

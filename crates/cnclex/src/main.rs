use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Tokens(args) => args.run(),
        Command::Check(args) => args.run(),
        Command::Lexers(args) => args.run(),
    }
}

#[derive(Parser)]
#[command(name = "cnclex", about = "Lexers for halcmd and RS274 G-code")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens of one or more files.
    Tokens(cli::tokens::TokensArgs),
    /// Report files that produce error tokens.
    Check(cli::check::CheckArgs),
    /// List the available lexers.
    Lexers(cli::lexers::LexersArgs),
}

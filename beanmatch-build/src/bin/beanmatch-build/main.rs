mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    check::{CheckArgs, handle_check},
    generate::{GenerateArgs, handle_generate},
};
use output::{GlobalOptions, OutputFormat, OutputManager};

#[derive(Parser)]
#[command(name = "beanmatch-build")]
#[command(version)]
#[command(
    about = "Generate fluent property matchers for the structs in a crate",
    long_about = r#"Generates a <Type>Matcher for every plain struct in a crate:

• One with_<field> method per named field
• An is_<type>() factory
• A provenance header so generated files are never scanned again

Settings are read from beanmatch.toml in the project root when present.

Commands:
  generate  Write matcher files
  check     Report stale, missing and orphaned matcher files
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate matchers for every discovered struct
    Generate(GenerateArgs),

    /// Compare generated matchers with their structs without writing anything
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output,
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });

    if let Err(err) = execute(cli.command, &output) {
        output.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn execute(command: Commands, output: &OutputManager) -> Result<()> {
    match command {
        Commands::Generate(args) => handle_generate(args, output),
        Commands::Check(args) => handle_check(args, output),
    }
}

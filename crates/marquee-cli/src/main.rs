mod output;

use clap::{ArgGroup, Parser, Subcommand};
use marquee_core::{run, validate, MarqueeResult, RunOptions, ValidateOptions};
use std::path::PathBuf;

use output::OutputMode;

#[derive(Parser, Debug)]
#[command(
    name = "marquee",
    version = env!("MARQUEE_VERSION"),
    about = "Batch analytics over film metadata CSV datasets"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Validate {
        #[arg(short, long)]
        config: PathBuf,
        /// Also open the configured CSV and check its header.
        #[arg(long)]
        check_source: bool,
    },
    #[command(group(
        ArgGroup::new("source")
            .args(["config", "input"])
            .required(true)
            .multiple(true)
    ))]
    Run {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// CSV file to analyze; overrides source.path from the config.
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        #[arg(short, long, conflicts_with = "verbose")]
        quiet: bool,
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> MarqueeResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate {
            config,
            check_source,
        } => {
            let config_path = resolve_path(config)?;
            validate(&config_path, ValidateOptions { check_source })?;
            println!(
                "Your config file at location {} is well formatted.\nYou can now run 'marquee run -c {}'",
                config_path.display(),
                config_path.display()
            );
            Ok(())
        }
        Command::Run {
            config,
            input,
            json,
            quiet,
            verbose,
        } => {
            let options = RunOptions {
                config: config.map(resolve_path).transpose()?,
                input: input.map(resolve_path).transpose()?,
            };
            let outcome = run(options)?;
            if json {
                println!("{}", outcome.report.to_json_pretty()?);
            } else {
                let mode = if quiet {
                    OutputMode::Quiet
                } else if verbose {
                    OutputMode::Verbose
                } else {
                    OutputMode::Default
                };
                println!("{}", output::format_run_output(&outcome, mode));
            }
            Ok(())
        }
    }
}

fn resolve_path(path: PathBuf) -> MarqueeResult<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

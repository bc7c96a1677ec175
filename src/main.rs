use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use methodsig::{parse, SplitMode, Splitter};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Parse Java-like method signatures")]
struct Cli {
    /// Log more; repeat for more detail. `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse method signatures and print their structure
    Parse {
        signatures: Vec<String>,

        /// Also parse every non-blank line of this file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Split text on a set of delimiters, printing one token per line
    Split {
        source: String,

        #[arg(short, long = "delimiter", required = true)]
        delimiters: Vec<String>,

        /// Match each delimiter as a whole instead of by its characters
        #[arg(long)]
        whole: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Parse { signatures, file } => {
            parse_signatures(signatures, file.as_deref())
        }
        Command::Split {
            source,
            delimiters,
            whole,
        } => {
            let mode = if whole {
                SplitMode::Delimiters
            } else {
                SplitMode::Characters
            };
            let splitter = Splitter::new(&delimiters, mode);
            debug!(mode = ?splitter.mode(), ?delimiters, "splitting");
            for token in splitter.split(&source) {
                println!("{token}");
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_signatures(
    mut signatures: Vec<String>,
    file: Option<&Path>,
) -> Result<()> {
    if let Some(file) = file {
        let contents = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read `{}`", file.display()))?;
        signatures.extend(
            contents
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(ToOwned::to_owned),
        );
    }

    let mut malformed = 0;
    for signature in &signatures {
        match parse::signature(signature) {
            Ok(parsed) => println!("{parsed:#?}"),
            Err(err) => {
                eprintln!("{signature}: {err}");
                malformed += 1;
            }
        }
    }
    if malformed > 0 {
        bail!("{malformed} of {} signatures are malformed", signatures.len());
    }
    Ok(())
}

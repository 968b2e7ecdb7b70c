use anyhow::Context;
use clap::{Parser, Subcommand};
use semver_value::config::{DEFAULT_LOG_FILTER, LogConfig, LogFormat};
use semver_value::{Document, Version};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "semver-value")]
#[command(version, about = "Parse, order and serialize semantic versions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a version and print its structured document as JSON
    Parse {
        version: String,
        /// Print the document on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Compare two versions by precedence, printing -1, 0 or 1
    Compare { left: String, right: String },
    /// Sort versions in ascending precedence order
    Sort {
        /// Print the highest version first
        #[arg(long)]
        reverse: bool,
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Decode a JSON version document and print its canonical text
    Decode { document: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&LogConfig::from_env());

    run(cli.command)
}

fn init_logging(config: &LogConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.with_ansi(false).init(),
    }
    guard
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Parse { version, compact } => {
            let version = Version::parse(&version)?;
            let json = if compact {
                serde_json::to_string(&version)?
            } else {
                serde_json::to_string_pretty(&version)?
            };
            println!("{}", json);
        }
        Command::Compare { left, right } => {
            let left = Version::parse(&left).context("Invalid left-hand version")?;
            let right = Version::parse(&right).context("Invalid right-hand version")?;
            println!("{}", left.cmp_precedence(&right) as i8);
        }
        Command::Sort { reverse, versions } => {
            let mut parsed = versions
                .iter()
                .map(|v| Version::parse(v))
                .collect::<Result<Vec<_>, _>>()?;
            parsed.sort();
            if reverse {
                parsed.reverse();
            }
            debug!(count = parsed.len(), "Sorted versions");
            for version in &parsed {
                println!("{}", version);
            }
        }
        Command::Decode { document } => {
            let document: Document =
                serde_json::from_str(&document).context("Document is not a JSON object")?;
            let version = Version::from_document(&document)?;
            println!("{}", version);
        }
    }
    Ok(())
}

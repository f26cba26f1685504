use std::fmt;

use services::{QuizConfig, QuizService};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use ui::TerminalApp;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSource { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSource { raw } => write!(f, "invalid --source value: {raw:?}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz [--source <url-or-path>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --source quiz.xml");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SOURCE, QUIZ_SEED, RUST_LOG (default: warn)");
}

/// Command-line flags override the environment.
fn parse_args(
    mut config: QuizConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<Option<QuizConfig>, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--source" => {
                let value = require_value(args, "--source")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidSource { raw: value });
                }
                config = config.with_source(value);
            }
            "--seed" => {
                let value = require_value(args, "--seed")?;
                let seed: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                config = config.with_seed(Some(seed));
            }
            "--help" | "-h" => return Ok(None),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Some(config))
}

fn init_tracing() {
    // Logs go to stderr so they never interleave with the quiz on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let config = match parse_args(QuizConfig::from_env(), &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })? {
        Some(config) => config,
        None => {
            print_usage();
            return Ok(());
        }
    };

    tracing::debug!(source = %config.source, seed = ?config.seed, "starting quiz");
    let service = QuizService::from_config(&config)?;
    let mut app = TerminalApp::new(service);

    let mut stdout = tokio::io::stdout();
    app.run(BufReader::new(tokio::io::stdin()), &mut stdout)
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::{fmt, EnvFilter};

use linecmp::{
    config::{DEFAULT_FILE1, DEFAULT_FILE2},
    Config, DigestAlgorithm, Mode, Verdict,
};

/// Check whether two text files are identical, line by line
#[derive(Parser)]
#[command(name = "linecmp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First file
    #[arg(env = "LINECMP_FILE1", default_value = DEFAULT_FILE1)]
    file1: PathBuf,

    /// Second file
    #[arg(env = "LINECMP_FILE2", default_value = DEFAULT_FILE2)]
    file2: PathBuf,

    /// Only compare checksums, skip the line scan
    #[arg(long, env = "LINECMP_DIGEST_ONLY")]
    digest_only: bool,

    /// Checksum algorithm: md5, sha256
    #[arg(long, env = "LINECMP_ALGORITHM", default_value = "md5")]
    algorithm: DigestAlgorithm,

    /// Enable verbose logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            file1: cli.file1,
            file2: cli.file2,
            mode: if cli.digest_only {
                Mode::Digest
            } else {
                Mode::Lines
            },
            algorithm: cli.algorithm,
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbosity >= 2)
        .with_file(verbosity >= 3)
        .with_line_number(verbosity >= 3)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli.into()) {
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(Verdict::Failed.exit_code())
        }
    }
}

fn run(config: Config) -> Result<Verdict> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let verdict = linecmp::run(&config, &mut out).context("Failed to write report")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(verdict)
}

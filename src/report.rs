//! Human-readable output for a comparison run.
//!
//! Everything user-facing is written to the `out` handle passed in; nothing
//! here touches stdout directly.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::{
    checksum::{checksum, Checksum},
    compare::{compare, Comparison},
    config::{Config, DigestAlgorithm, Mode},
    error::CompareError,
};

/// Final result of a run, as seen by a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Same,
    Different,
    Failed,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Same => 0,
            Self::Different => 1,
            Self::Failed => 2,
        }
    }
}

/// Outcome of a digest-only comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestOutcome {
    Match,
    Mismatch,
}

impl DigestOutcome {
    pub fn of(a: &Checksum, b: &Checksum) -> Self {
        if a == b {
            Self::Match
        } else {
            Self::Mismatch
        }
    }
}

/// Runs the comparison described by `config`, writing the report to `out`.
///
/// Only failures to write the report itself are returned as errors; file
/// errors are reported in the output and yield [`Verdict::Failed`].
pub fn run(config: &Config, out: &mut impl Write) -> io::Result<Verdict> {
    writeln!(out, "Comparing files:")?;
    writeln!(out, "1: {}", config.file1.display())?;
    writeln!(out, "2: {}", config.file2.display())?;

    let sum1 = checksum(&config.file1, config.algorithm);
    let sum2 = checksum(&config.file2, config.algorithm);
    write_checksum(out, 1, config.algorithm, &sum1)?;
    write_checksum(out, 2, config.algorithm, &sum2)?;

    let verdict = match config.mode {
        Mode::Digest => match (&sum1, &sum2) {
            (Ok(a), Ok(b)) => {
                let outcome = DigestOutcome::of(a, b);
                write_digest_outcome(out, outcome)?;
                match outcome {
                    DigestOutcome::Match => Verdict::Same,
                    DigestOutcome::Mismatch => Verdict::Different,
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                writeln!(out, "error: {}", e)?;
                writeln!(out, "Files differ")?;
                Verdict::Failed
            }
        },
        Mode::Lines => {
            let res = compare(&config.file1, &config.file2);
            write_comparison(out, config, &res)?;
            match res {
                Ok(Comparison::Identical) => Verdict::Same,
                Ok(_) => Verdict::Different,
                Err(_) => Verdict::Failed,
            }
        }
    };
    info!(?verdict, "comparison finished");
    Ok(verdict)
}

pub fn write_checksum(
    out: &mut impl Write,
    index: usize,
    algorithm: DigestAlgorithm,
    sum: &Result<Checksum, CompareError>,
) -> io::Result<()> {
    match sum {
        Ok(sum) => writeln!(out, "File {} {}: {}", index, sum.algorithm(), sum),
        Err(e) => {
            warn!(error = %e, "checksum unavailable");
            writeln!(out, "File {} {}: unavailable ({})", index, algorithm, e)
        }
    }
}

pub fn write_comparison(
    out: &mut impl Write,
    config: &Config,
    res: &Result<Comparison, CompareError>,
) -> io::Result<()> {
    match res {
        Ok(Comparison::Identical) => return writeln!(out, "Files are identical"),
        Ok(Comparison::Differ {
            at_line,
            left,
            right,
        }) => {
            writeln!(out, "Difference at line {}:", at_line)?;
            writeln!(out, "{}: {}", config.file1.display(), left)?;
            writeln!(out, "{}: {}", config.file2.display(), right)?;
        }
        Ok(Comparison::LengthMismatch) => {
            writeln!(out, "Files have a different number of lines")?;
        }
        Err(e) => {
            warn!(kind = ?e.kind(), error = %e, "comparison failed");
            writeln!(out, "error: {}", e)?;
        }
    }
    writeln!(out, "Files differ")
}

pub fn write_digest_outcome(out: &mut impl Write, outcome: DigestOutcome) -> io::Result<()> {
    match outcome {
        DigestOutcome::Match => writeln!(out, "Checksums match"),
        DigestOutcome::Mismatch => writeln!(out, "Checksums differ"),
    }
}

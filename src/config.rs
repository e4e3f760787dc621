use std::{fmt, path::PathBuf, str::FromStr};

pub const DEFAULT_FILE1: &str = "output/result16-10M.txt";
pub const DEFAULT_FILE2: &str = "output/result16_10M.txt";

/// How two files are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Print both checksums, then scan lines in lockstep.
    #[default]
    Lines,
    /// Compare checksums only.
    Digest,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Sha256,
}

impl DigestAlgorithm {
    /// Digest length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha256 => 32,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md5 => f.write_str("MD5"),
            Self::Sha256 => f.write_str("SHA256"),
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" => Ok(Self::Sha256),
            _ => Err(format!("unknown digest algorithm: {}", s)),
        }
    }
}

/// Everything one run needs. Built once by the caller and passed down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub file1: PathBuf,
    pub file2: PathBuf,
    pub mode: Mode,
    pub algorithm: DigestAlgorithm,
}

impl Config {
    pub fn new(file1: impl Into<PathBuf>, file2: impl Into<PathBuf>) -> Self {
        Self {
            file1: file1.into(),
            file2: file2.into(),
            mode: Mode::default(),
            algorithm: DigestAlgorithm::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_FILE1, DEFAULT_FILE2)
    }
}

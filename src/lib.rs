//! Line-by-line text file comparator.
//!
//! [`compare`] scans two files in lockstep and stops at the first line that
//! differs. [`checksum`] digests a whole file for a quick equality check.
//! [`report::run`] ties both together for the `linecmp` binary.

pub mod checksum;
pub mod compare;
pub mod config;
pub mod error;
pub mod report;

pub use checksum::{checksum, checksum_reader, Checksum};
pub use compare::{compare, compare_readers, Comparison, ReadFailure, Side};
pub use config::{Config, DigestAlgorithm, Mode};
pub use error::{CompareError, ErrorKind};
pub use report::{run, DigestOutcome, Verdict};

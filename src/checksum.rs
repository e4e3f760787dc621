//! Whole-file content digests.

use std::{
    fmt,
    fs::File,
    io::{self, Read},
    path::Path,
};

use md5::Md5;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::{config::DigestAlgorithm, error::CompareError};

const CHUNK_SIZE: usize = 64 * 1024;

/// A digest over the complete byte content of one file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checksum {
    algorithm: DigestAlgorithm,
    bytes: Vec<u8>,
}

impl Checksum {
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        faster_hex::hex_string(&self.bytes)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Computes the checksum of the file at `path`.
pub fn checksum(
    path: impl AsRef<Path>,
    algorithm: DigestAlgorithm,
) -> Result<Checksum, CompareError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| CompareError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let sum = checksum_reader(&mut file, algorithm).map_err(|source| CompareError::ReadChunk {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), %algorithm, checksum = %sum, "computed checksum");
    Ok(sum)
}

/// Computes the checksum of everything `reader` yields until EOF.
pub fn checksum_reader(
    reader: &mut impl Read,
    algorithm: DigestAlgorithm,
) -> io::Result<Checksum> {
    let bytes = match algorithm {
        DigestAlgorithm::Md5 => digest_stream::<Md5>(reader)?,
        DigestAlgorithm::Sha256 => digest_stream::<Sha256>(reader)?,
    };
    debug_assert_eq!(bytes.len(), algorithm.output_len());
    Ok(Checksum { algorithm, bytes })
}

fn digest_stream<D: Digest>(reader: &mut impl Read) -> io::Result<Vec<u8>> {
    let mut h = D::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        h.update(&buf[..n]);
    }
    Ok(h.finalize().to_vec())
}

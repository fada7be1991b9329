//! Read-only file helpers for the routes file.

use std::{
    fs,
    io::{self, ErrorKind},
    path::Path,
};

use sha2::{Digest, Sha256};

use crate::lib::errors::CheckError;

/// Routes file contents together with the digest of the bytes that were scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRoutesFile {
    pub contents: String,
    pub sha256: String,
}

/// Read the routes file, decoding invalid UTF-8 lossily.
///
/// A file that disappears between the existence check and the read is reported
/// as `RoutesFileNotFound`; any other I/O failure is `RoutesFileUnreadable`.
pub fn read_routes_file(path: &Path) -> Result<LoadedRoutesFile, CheckError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        _ if is_absent(&source) => CheckError::RoutesFileNotFound {
            path: path.to_path_buf(),
        },
        _ => CheckError::RoutesFileUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(LoadedRoutesFile {
        sha256: sha256_hex(&bytes),
        contents: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Returns true when `path` exists and is a regular file (symlinks followed).
///
/// A parent component that is a file (`ENOTDIR`) means the path cannot exist.
pub fn is_regular_file(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(err) if is_absent(&err) => Ok(false),
        Err(err) => Err(err),
    }
}

fn is_absent(err: &io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}

/// Return the SHA256 of a byte slice as a hex string.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

//! errors surfaced by the disk layer and the file system controller
use thiserror::Error;

/// every failure this crate can report
///
/// medium failures are carried untouched in [Error::Medium],
/// so callers see exactly what the underlying storage reported.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// the controller was used before a disk was bound to it
    #[error("no disk is bound to the file system")]
    Fault,
    /// the bound disk does not implement the named operation
    #[error("the disk does not support `{0}`")]
    Unsupported(&'static str),
    /// the concrete medium failed
    #[error("disk medium error: {0}")]
    Medium(#[from] std::io::Error),
    #[error("bad superblock signature {0:02x?}")]
    BadSignature([u8; 4]),
    #[error("unknown superblock version {0}")]
    BadVersion(u32),
    #[error("superblock can't be decoded: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

/// coarse classification of an [Error]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// caller misconfigured the controller
    Fault,
    /// a required disk capability is missing
    Unsupported,
    /// the medium's own seek/read/write failed
    Medium,
    /// the superblock on disk is not a valid one
    Corrupt,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Fault => ErrorKind::Fault,
            Error::Unsupported(_) => ErrorKind::Unsupported,
            Error::Medium(_) => ErrorKind::Medium,
            Error::BadSignature(_) | Error::BadVersion(_) | Error::Decode(_) => ErrorKind::Corrupt,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use serde::{Deserialize, Serialize};

use super::{SIGNATURE, SUPERBLOCK_SIZE, VERSION};
use crate::error::{Error, Result};

/// The superblock of this filesystem
///
/// field order is the on-disk order. with bincode's legacy config
/// integers are fixed-width little-endian and arrays carry no length,
/// so the encoding is exactly [SUPERBLOCK_SIZE] bytes.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SuperBlock {
    /// "kvfs"
    pub signature: [u8; 4],
    /// format revision
    pub version: u32,
    /// bytes reserved for the filesystem, counted from its offset on the disk
    pub size: u64,
}

impl SuperBlock {
    /// a superblock of the current format revision
    pub fn new(size: u64) -> Self {
        Self {
            signature: SIGNATURE,
            version: VERSION,
            size,
        }
    }

    pub fn to_bytes(&self) -> [u8; SUPERBLOCK_SIZE] {
        let mut buf = [0u8; SUPERBLOCK_SIZE];
        // a fixed-layout struct always fits its own size
        let written = bincode::serde::encode_into_slice(self, &mut buf, bincode::config::legacy())
            .expect("superblock encoding has a fixed size");
        debug_assert_eq!(written, SUPERBLOCK_SIZE);
        buf
    }

    /// decode without checking signature or version, see [SuperBlock::validate]
    pub fn from_bytes(buf: &[u8; SUPERBLOCK_SIZE]) -> Result<Self> {
        let (superblock, _) = bincode::serde::decode_from_slice(buf, bincode::config::legacy())?;
        Ok(superblock)
    }

    /// check that this superblock belongs to a filesystem we understand
    pub fn validate(&self) -> Result<()> {
        if self.signature != SIGNATURE {
            return Err(Error::BadSignature(self.signature));
        }
        if self.version != VERSION {
            return Err(Error::BadVersion(self.version));
        }
        Ok(())
    }
}

//! the storage medium a file system lives on
//!
//! a [Disk] is a capability set: each of `seek`, `read` and `write`
//! may or may not be implemented by a concrete medium.
//! the ones that aren't fail with [Error::Unsupported].
pub mod io_disk;
pub mod mem_disk;
#[cfg(test)]
pub(crate) mod mock;

pub use io_disk::IoDisk;
pub use mem_disk::MemDisk;

use crate::error::{Error, Result};

/// an opaque storage medium with a cursor
///
/// implementors override only the operations their medium supports.
/// every operation blocks until the medium is done,
/// and each successful `read`/`write` moves the cursor forward by the buffer length.
pub trait Disk {
    /// move the cursor to `offset` for the next read or write
    fn seek(&mut self, offset: u64) -> Result<()> {
        let _ = offset;
        Err(Error::Unsupported("seek"))
    }

    /// fill `buf` from the medium at the cursor
    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        let _ = buf;
        Err(Error::Unsupported("read"))
    }

    /// persist `buf` to the medium at the cursor
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        let _ = buf;
        Err(Error::Unsupported("write"))
    }
}

/// write `n` as 8 little-endian bytes in a single `write` call
pub fn write_u64_le<D: Disk + ?Sized>(disk: &mut D, n: u64) -> Result<()> {
    disk.write(&n.to_le_bytes())
}

/// read 8 little-endian bytes in a single `read` call
pub fn read_u64_le<D: Disk + ?Sized>(disk: &mut D) -> Result<u64> {
    let mut buf = [0u8; 8];
    disk.read(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

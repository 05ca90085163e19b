//! a disk backed by a fixed-size byte buffer,
//! such as a [Vec], an array or a [memmap2::MmapMut] of an image file.
use std::io::ErrorKind;

use super::Disk;
use crate::error::{Error, Result};

/// cursor over a byte buffer that never grows
#[derive(Debug, Default, Clone)]
pub struct MemDisk<T> {
    inner: T,
    pos: u64,
}

impl<T> MemDisk<T> {
    /// creates a new disk over `inner`, positioned at its start
    pub fn new(inner: T) -> Self {
        Self { inner, pos: 0 }
    }
    /// get underlying buffer
    pub fn into_inner(self) -> T {
        self.inner
    }
    /// get read only reference to underlying buffer
    pub const fn get_ref(&self) -> &T {
        &self.inner
    }
    /// get mutable reference to underlying buffer
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }
    /// get the current position of the cursor
    pub const fn position(&self) -> u64 {
        self.pos
    }
}

impl<T> MemDisk<T>
where
    T: AsRef<[u8]>,
{
    /// byte range `[pos, pos + len)` if it lies inside the buffer
    fn range(&self, len: usize) -> Option<std::ops::Range<usize>> {
        let start = usize::try_from(self.pos).ok()?;
        let end = start.checked_add(len)?;
        (end <= self.inner.as_ref().len()).then_some(start..end)
    }
}

impl<T> Disk for MemDisk<T>
where
    T: AsRef<[u8]> + AsMut<[u8]>,
{
    // seeking past the end is fine, the next read or write will fail instead
    fn seek(&mut self, offset: u64) -> Result<()> {
        self.pos = offset;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        let range = self
            .range(buf.len())
            .ok_or_else(|| Error::Medium(ErrorKind::UnexpectedEof.into()))?;
        buf.copy_from_slice(&self.inner.as_ref()[range]);
        self.pos += buf.len() as u64;
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<()> {
        let range = self
            .range(buf.len())
            .ok_or_else(|| Error::Medium(ErrorKind::WriteZero.into()))?;
        self.inner.as_mut()[range].copy_from_slice(buf);
        self.pos += buf.len() as u64;
        Ok(())
    }
}

//! a disk over any [std::io] stream, typically a regular [std::fs::File]
use std::io::{Read, Seek, SeekFrom, Write};

use super::Disk;
use crate::error::Result;

/// adapts a stream to [Disk]
///
/// a file opened read-only still works for `seek` and `read`;
/// its writes fail with whatever the OS reports.
#[derive(Debug)]
pub struct IoDisk<T> {
    inner: T,
}

impl<T> IoDisk<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T> Disk for IoDisk<T>
where
    T: Read + Write + Seek,
{
    fn seek(&mut self, offset: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        Ok(self.inner.read_exact(buf)?)
    }

    fn write(&mut self, buf: &[u8]) -> Result<()> {
        Ok(self.inner.write_all(buf)?)
    }
}

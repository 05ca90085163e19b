//! a disk that records every call made to it, for tests
use std::io::ErrorKind;

use super::Disk;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiskCall {
    Seek(u64),
    /// number of bytes requested
    Read(usize),
    Write(Vec<u8>),
}

/// records calls; reads are served from `contents`
///
/// capabilities can be switched off one by one,
/// and the n-th call (counting from 0) can be made to fail with a medium error.
#[derive(Debug, Default)]
pub struct MockDisk {
    calls: Vec<DiskCall>,
    contents: Vec<u8>,
    pos: usize,
    no_seek: bool,
    no_read: bool,
    no_write: bool,
    fail_at: Option<usize>,
}

impl MockDisk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::default()
        }
    }

    pub fn without_seek(mut self) -> Self {
        self.no_seek = true;
        self
    }

    pub fn without_read(mut self) -> Self {
        self.no_read = true;
        self
    }

    pub fn without_write(mut self) -> Self {
        self.no_write = true;
        self
    }

    pub fn failing_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    pub fn calls(&self) -> &[DiskCall] {
        &self.calls
    }

    /// record `call`, failing it if it is the one chosen to fail
    fn record(&mut self, call: DiskCall) -> Result<()> {
        let index = self.calls.len();
        self.calls.push(call);
        if self.fail_at == Some(index) {
            return Err(Error::Medium(std::io::Error::new(
                ErrorKind::Other,
                format!("injected failure at call {index}"),
            )));
        }
        Ok(())
    }
}

impl Disk for MockDisk {
    fn seek(&mut self, offset: u64) -> Result<()> {
        if self.no_seek {
            return Err(Error::Unsupported("seek"));
        }
        self.record(DiskCall::Seek(offset))?;
        self.pos = offset as usize;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.no_read {
            return Err(Error::Unsupported("read"));
        }
        self.record(DiskCall::Read(buf.len()))?;
        let src = self
            .contents
            .get(self.pos..self.pos + buf.len())
            .ok_or_else(|| Error::Medium(ErrorKind::UnexpectedEof.into()))?;
        buf.copy_from_slice(src);
        self.pos += buf.len();
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<()> {
        if self.no_write {
            return Err(Error::Unsupported("write"));
        }
        self.record(DiskCall::Write(buf.to_vec()))?;
        self.pos += buf.len();
        Ok(())
    }
}

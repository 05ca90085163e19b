//! the controller that binds a filesystem to a region of a disk
use log::{debug, info, warn};

use super::{SuperBlock, SIGNATURE, SUPERBLOCK_SIZE, VERSION};
use crate::{
    disk::{write_u64_le, Disk},
    error::{Error, Result},
};

/// a key-value filesystem living at `offset` inside a disk
///
/// the filesystem does not own its disk: it borrows it for `'d`,
/// so the disk must outlive the filesystem.
/// dropping the filesystem (or calling [Kvfs::done]) never touches the medium.
/// # Example
/// ```
/// use kvfs::{disk::MemDisk, Kvfs};
/// let mut disk = MemDisk::new(vec![0u8; 64]);
/// let mut fs = Kvfs::new();
/// fs.set_disk(Some(&mut disk));
/// fs.set_offset(16);
/// fs.format(48).unwrap();
/// assert_eq!(fs.superblock().unwrap().size, 48);
/// ```
#[derive(Default)]
pub struct Kvfs<'d> {
    disk: Option<&'d mut dyn Disk>,
    /// where the superblock begins on the disk
    offset: u64,
}

impl<'d> Kvfs<'d> {
    /// a filesystem with no disk, at offset 0
    pub fn new() -> Self {
        Self::default()
    }

    /// release the disk
    pub fn done(&mut self) {
        self.disk = None;
    }

    /// bind a disk, `None` keeps the current one
    pub fn set_disk(&mut self, disk: Option<&'d mut dyn Disk>) {
        if let Some(disk) = disk {
            self.disk = Some(disk);
        }
    }

    pub fn set_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    #[inline]
    pub fn has_disk(&self) -> bool {
        self.disk.is_some()
    }

    #[inline]
    fn disk_mut(&mut self) -> Result<&mut (dyn Disk + 'd)> {
        self.disk.as_deref_mut().ok_or(Error::Fault)
    }
}

/// superblock operations
impl<'d> Kvfs<'d> {
    /// write a fresh superblock reserving `size` bytes from the offset
    ///
    /// this is one seek followed by three writes: signature, version, size.
    /// the first failure is returned as is, leaving the region undefined.
    /// nothing is read back, and formatting twice just overwrites.
    pub fn format(&mut self, size: u64) -> Result<()> {
        info!("format() called with offset: {:#x} and size: {size:#x}", self.offset);
        let offset = self.offset;
        let disk = self.disk_mut()?;
        disk.seek(offset)?;
        debug!("writing superblock signature");
        disk.write(&SIGNATURE)?;
        debug!("writing superblock version {VERSION}");
        disk.write(&VERSION.to_le_bytes())?;
        debug!("writing superblock size");
        write_u64_le(disk, size)
    }

    /// read the superblock at the offset and check it
    pub fn superblock(&mut self) -> Result<SuperBlock> {
        info!("superblock() called with offset: {:#x}", self.offset);
        let offset = self.offset;
        let disk = self.disk_mut()?;
        disk.seek(offset)?;
        let mut buf = [0u8; SUPERBLOCK_SIZE];
        disk.read(&mut buf)?;
        let superblock = SuperBlock::from_bytes(&buf)?;
        if let Err(e) = superblock.validate() {
            warn!("no valid superblock at offset {offset:#x}: {e}");
            return Err(e);
        }
        debug!("found {superblock:?}");
        Ok(superblock)
    }

    /// check that the disk holds a formatted filesystem at the offset
    pub fn verify(&mut self) -> Result<()> {
        self.superblock().map(|_| ())
    }
}

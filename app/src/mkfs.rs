//! create our filesystem inside an image file
use crate::{
    disk::MemDisk,
    fs::{Kvfs, SUPERBLOCK_SIZE},
};
use anyhow::anyhow;
use byte_unit::Byte;
use log::info;
use memmap2::MmapMut;
use std::{fs::OpenOptions, path::Path};

/// format a new filesystem in an image file, given its offset and size
/// # Params
/// - `image_file_path`: the path of the image file, created if missing
/// - `offset`: where the filesystem begins inside the image file
/// - `size`: the number of bytes to reserve for the filesystem
///
/// the image file grows to hold `offset + size` bytes if it is shorter,
/// and is never shrunk, so other data around the filesystem survives.
/// # Return
/// an [anyhow::Result] type to indicate whether the operation is successful
pub fn mkfs<P>(image_file_path: P, offset: u64, size: u64) -> anyhow::Result<()>
where
    P: AsRef<Path>,
{
    // the reserved region must at least hold the superblock
    if size < SUPERBLOCK_SIZE as u64 {
        return Err(anyhow!(
            "File system size must be at least {}",
            Byte::from_bytes(SUPERBLOCK_SIZE as _).get_appropriate_unit(true)
        ));
    }
    let end = offset
        .checked_add(size)
        .ok_or_else(|| anyhow!("offset {offset} plus size {size} overflows"))?;

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(image_file_path.as_ref())?;
    if file.metadata()?.len() < end {
        // the new region is filled with zeros by `set_len`
        file.set_len(end)?;
    }

    // Safety
    // the mapping is only alive inside this function,
    // while we hold the file open for read and write.
    let file_mmap_area = unsafe { MmapMut::map_mut(&file)? };
    let mut disk = MemDisk::new(file_mmap_area);

    let mut kvfs = Kvfs::new();
    kvfs.set_disk(Some(&mut disk));
    kvfs.set_offset(offset);
    kvfs.format(size)?;
    kvfs.done();

    disk.into_inner().flush()?;
    info!(
        "formatted {} at offset {offset}, reserving {}",
        image_file_path.as_ref().display(),
        Byte::from_bytes(size as _).get_appropriate_unit(true)
    );
    Ok(())
}

//! check that an image file holds our filesystem
use std::{fs::File, path::Path};

use log::info;

use crate::{
    disk::IoDisk,
    fs::{Kvfs, SuperBlock},
};

/// read and check the superblock at `offset` inside an image file
///
/// the image file is opened read-only.
/// # Return
/// the superblock found, so callers can tell how much space the filesystem reserves
pub fn verify<P>(image_file_path: P, offset: u64) -> anyhow::Result<SuperBlock>
where
    P: AsRef<Path>,
{
    let mut disk = IoDisk::new(File::open(image_file_path.as_ref())?);
    let mut kvfs = Kvfs::new();
    kvfs.set_disk(Some(&mut disk));
    kvfs.set_offset(offset);
    let superblock = kvfs.superblock()?;
    info!(
        "{} holds a filesystem at offset {offset}",
        image_file_path.as_ref().display()
    );
    Ok(superblock)
}

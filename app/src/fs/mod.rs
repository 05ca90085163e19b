//! the key-value file system: its superblock and the controller that formats and verifies it
mod controller;
pub mod superblock;
pub use controller::*;
pub use superblock::*;

/// signature at the very start of every superblock, "kvfs" in ASCII
pub const SIGNATURE: [u8; 4] = *b"kvfs";
/// on-disk format revision written by [Kvfs::format]
pub const VERSION: u32 = 0;
/// bytes occupied by a superblock on the disk
pub const SUPERBLOCK_SIZE: usize = 16;

pub mod cli_interface;
pub mod disk;
pub mod error;
mod fs;
pub mod mkfs;
#[cfg(test)]
mod utils;
pub mod verify;
pub use fs::*;

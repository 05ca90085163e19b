//! command line surface of the `kvfs` tool
mod cli_struct;
pub use cli_struct::*;

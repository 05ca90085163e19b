//! helpers shared by tests
mod init_test_environment;
pub(crate) use init_test_environment::*;

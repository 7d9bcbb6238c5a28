//! CLI command implementations

pub mod classify;
pub mod init;
pub mod relabel;
pub mod serve;
pub mod train;

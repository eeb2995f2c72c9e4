//! Command implementations for the Tidemark CLI

pub(crate) mod common;
pub(crate) mod create;
pub(crate) mod init;
pub(crate) mod set;
pub(crate) mod sync;
pub(crate) mod version;

//! CLI command implementations

pub mod engineer;
pub mod history;
pub mod init;
pub mod project;
pub mod request;

//! Error types and configuration shared by every module.

pub(crate) mod config;
pub(crate) mod error;

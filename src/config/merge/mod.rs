//! Source composition for [`crate::config::ReduConfig`].

pub mod merge_policy;
pub mod service;

//! Metadata store location settings.

pub mod metadata_dir;

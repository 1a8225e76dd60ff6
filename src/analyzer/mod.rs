//! Bump decision: combines a classified commit with the current version

pub mod version_analyzer;

pub use version_analyzer::{decide, determine_bump, Release};

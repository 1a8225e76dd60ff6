//! Domain logic - pure parsing and versioning rules independent of git

pub mod commit;
pub mod version;

pub use commit::Commit;
pub use version::{Version, VersionBump, DEFAULT_VERSION};

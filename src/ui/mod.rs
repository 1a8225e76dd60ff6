//! User interface module.
//!
//! The tool runs unattended in CI, so there are no prompts; everything the
//! user sees goes through [formatter].

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_commit, display_current_version, display_error,
    display_new_version, display_status, display_success,
};

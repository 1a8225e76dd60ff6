//! Command-line layer: everything between parsed arguments and the core

pub mod orchestration;

pub use orchestration::{run_workflow, WorkflowResult};

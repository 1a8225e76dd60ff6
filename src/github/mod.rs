//! GitHub Actions integration: the workflow event payload

pub mod event;

pub use event::{read_head_commit_message, Event, HeadCommit};

//! Command-line layer: token classification and workflow orchestration

pub mod orchestration;
pub mod tokens;

pub use orchestration::{BumpWorkflow, BumpWorkflowArgs, WorkflowResult};
pub use tokens::{parse_tokens, BumpArgs, Token, COMMIT_TOKEN, FORCE_TOKEN};

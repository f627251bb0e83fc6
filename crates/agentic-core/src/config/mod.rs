//! Files written into a new project: configuration, workflow state, and
//! the starter documents

pub mod generator;
pub mod project;
pub mod state;

pub use project::{AgentsConfig, ProjectConfig};
pub use state::WorkflowState;

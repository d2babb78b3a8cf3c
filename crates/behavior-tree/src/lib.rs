//! Reactive behavior tree engine for real-time agents.
//!
//! This library provides a small, deterministic behavior tree implementation
//! driven by a per-frame tick with a delta time.
//!
//! - **Running state**: Waits and the composites above them span several ticks
//! - **Typed blackboard**: Services write facts, conditions read them
//! - **Reactive guards**: Conditions can interrupt an active branch the moment
//!   the facts they depend on change
//! - **No captured state**: Leaves carry payloads resolved by an [`Agent`]
//!
//! # Architecture
//!
//! - [`Node`]: Sum type over every node kind, evaluated by one `tick`
//! - [`Tree`]: Owns the root, the [`Blackboard`] and the clock
//! - [`Status`]: Idle, Running, Succeeded or Failed
//! - Leaf nodes: [`Action`], [`Wait`]
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Condition`], [`Service`]

pub mod agent;
pub mod blackboard;
pub mod builder;
pub mod composite;
pub mod condition;
pub mod decorator;
pub mod leaf;
pub mod node;
pub mod status;
pub mod tree;

#[cfg(test)]
mod testing;

// Re-export core types for ergonomic API
pub use agent::Agent;
pub use blackboard::{Blackboard, Value};
pub use composite::{Selector, Sequence};
pub use condition::{Comparison, Operator, Stops};
pub use decorator::{Condition, Service};
pub use leaf::{Action, Wait};
pub use node::{Node, NodeKind};
pub use status::Status;
pub use tree::Tree;

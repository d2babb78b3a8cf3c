//! Behavior-tree decision making for AI tanks.
//!
//! This crate wires the generic [`behavior_tree`] engine to a tank: it samples
//! perception into the blackboard, resolves action payloads into turn, move
//! and fire calls, and builds one of a catalog of strategies from a behavior id.
//!
//! Modules are organized in layers:
//! - [`patterns`] provides single actions, perception guards and small routines
//! - [`presets`] composes them into complete strategy trees
//! - [`strategy`] maps behavior ids to presets and drives ticks
//! - [`perception`], [`agent`] and [`world`] bridge the tree and the host
pub mod agent;
pub mod brain;
pub mod config;
pub mod error;
pub mod math;
pub mod patterns;
pub mod perception;
pub mod presets;
pub mod rng;
pub mod strategy;
pub mod world;

pub use agent::{FireStrength, TankAction, TankAgent, TankService};
pub use brain::TankBrain;
pub use config::BrainConfig;
pub use error::{ConfigError, Result};
pub use math::{Transform, Vec3};
pub use patterns::{TankNode, TankTree};
pub use perception::{Percept, keys, update_perception};
pub use rng::{PcgRandom, RandomSource};
pub use strategy::{BehaviorId, Strategy, build_tree, build_tree_with, tick};
pub use world::{Actuators, Perception};

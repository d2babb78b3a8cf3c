//! Per-tank owner of a decision tree.

use behavior_tree::Status;

use crate::config::BrainConfig;
use crate::patterns::TankTree;
use crate::rng::RandomSource;
use crate::strategy::{BehaviorId, Strategy, build_tree_with, tick};
use crate::world::{Actuators, Perception};

/// A tank's decision-making state for one life.
///
/// Created at spawn from the tank's behavior id and dropped when the tank is
/// destroyed. Nothing is shared between brains.
#[derive(Debug)]
pub struct TankBrain {
    behavior: BehaviorId,
    strategy: Option<Strategy>,
    tree: TankTree,
}

impl TankBrain {
    pub fn new<R>(behavior: impl Into<BehaviorId>, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        Self::with_config(behavior, rng, &BrainConfig::default())
    }

    pub fn with_config<R>(behavior: impl Into<BehaviorId>, rng: &mut R, config: &BrainConfig) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let behavior = behavior.into();
        Self {
            behavior,
            strategy: Strategy::from_id(behavior),
            tree: build_tree_with(behavior, rng, config),
        }
    }

    /// Runs one simulation step.
    pub fn tick<W, R>(&mut self, dt: f32, world: &mut W, rng: &mut R) -> Status
    where
        W: Perception + Actuators + ?Sized,
        R: RandomSource + ?Sized,
    {
        tick(&mut self.tree, dt, world, rng)
    }

    /// Stops whatever is running, e.g. when the tank is destroyed mid-aim.
    pub fn stop(&mut self) {
        self.tree.stop();
    }

    pub fn behavior(&self) -> BehaviorId {
        self.behavior
    }

    /// The resolved strategy, or `None` if the id fell back to the idle turn.
    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    pub fn tree(&self) -> &TankTree {
        &self.tree
    }
}

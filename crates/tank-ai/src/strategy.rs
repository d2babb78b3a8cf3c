//! Layer 3: choosing a tree from a behavior id.
//!
//! Each tank is configured with a small integer behavior id. [`build_tree`]
//! maps it to one of the [`Strategy`] presets and allocates the tree; no node
//! runs and no collaborator is touched until the first tick.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tank_ai::{PcgRandom, build_tree, tick};
//!
//! let mut rng = PcgRandom::new(seed);
//! let mut tree = build_tree(1, &mut rng); // pursue
//!
//! // every frame
//! tick(&mut tree, dt, &mut world, &mut rng);
//! ```

use behavior_tree::{Status, Tree};
use serde::{Deserialize, Serialize};

use crate::agent::TankAgent;
use crate::config::BrainConfig;
use crate::patterns::{TankNode, TankTree};
use crate::presets;
use crate::rng::RandomSource;
use crate::world::{Actuators, Perception};

/// Discrete behavior identifier assigned to a tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BehaviorId(pub i32);

impl From<i32> for BehaviorId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// The catalog of known strategies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Track with a wider turn rate.
    Swivel,
    /// Face the target and fire; close in when nearby.
    Pursue,
    /// Turn toward the target and back away when it gets close.
    Evade,
    /// Branches share one random speed drawn when the tree is built.
    Erratic,
    /// Face the target, pause, fire.
    Track,
    /// Spin on the spot and fire continuously.
    Spin,
}

impl Strategy {
    /// Resolves a behavior id; `None` for ids outside the catalog.
    pub fn from_id(id: BehaviorId) -> Option<Self> {
        match id.0 {
            0 => Some(Self::Swivel),
            1 => Some(Self::Pursue),
            2 => Some(Self::Evade),
            3 => Some(Self::Erratic),
            8 => Some(Self::Track),
            9 => Some(Self::Spin),
            _ => None,
        }
    }

    pub fn id(self) -> BehaviorId {
        BehaviorId(match self {
            Self::Swivel => 0,
            Self::Pursue => 1,
            Self::Evade => 2,
            Self::Erratic => 3,
            Self::Track => 8,
            Self::Spin => 9,
        })
    }

    /// Builds this strategy's root node.
    ///
    /// Only [`Strategy::Erratic`] consumes randomness at construction: one
    /// speed in `[-1, 1)` shared by all of its branches.
    pub fn build<R>(self, rng: &mut R, config: &BrainConfig) -> TankNode
    where
        R: RandomSource + ?Sized,
    {
        match self {
            Self::Swivel => presets::track(config, presets::SWIVEL_TURN_RATE),
            Self::Pursue => presets::pursue(config),
            Self::Evade => presets::evade(config),
            Self::Erratic => {
                let speed = rng.next_random(-1.0, 1.0);
                tracing::debug!(speed, "erratic speed drawn");
                presets::erratic(config, speed)
            }
            Self::Track => presets::track(config, presets::TURN_RATE),
            Self::Spin => presets::spin(presets::SPIN_TURN_RATE, presets::SPIN_FIRE_STRENGTH),
        }
    }
}

/// Builds the tree for `id` with the default [`BrainConfig`].
pub fn build_tree<R>(id: impl Into<BehaviorId>, rng: &mut R) -> TankTree
where
    R: RandomSource + ?Sized,
{
    build_tree_with(id, rng, &BrainConfig::default())
}

/// Builds the tree for `id`.
///
/// Unknown ids resolve to a tree that only turns at
/// `config.default_turn_rate`. This never fails.
pub fn build_tree_with<R>(id: impl Into<BehaviorId>, rng: &mut R, config: &BrainConfig) -> TankTree
where
    R: RandomSource + ?Sized,
{
    let id = id.into();
    let root = match Strategy::from_id(id) {
        Some(strategy) => {
            tracing::debug!(id = id.0, %strategy, "building strategy");
            strategy.build(rng, config)
        }
        None => {
            tracing::debug!(id = id.0, "unknown behavior id, using idle turn");
            presets::idle_turn(config.default_turn_rate)
        }
    };
    Tree::new(root)
}

/// Advances `tree` by `dt` seconds against the given collaborators.
pub fn tick<W, R>(tree: &mut TankTree, dt: f32, world: &mut W, rng: &mut R) -> Status
where
    W: Perception + Actuators + ?Sized,
    R: RandomSource + ?Sized,
{
    tree.tick(dt, &mut TankAgent::new(world, rng))
}

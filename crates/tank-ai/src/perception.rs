//! Perception sampler: turns world reads into blackboard facts.
//!
//! The sampler runs on a service's period, not every tick, so branches that
//! depend on these facts see values up to one period old.

use behavior_tree::Blackboard;

use crate::math::Vec3;
use crate::world::Perception;

/// Blackboard keys written by [`update_perception`].
pub mod keys {
    /// Distance to the target (number, >= 0).
    pub const TARGET_DISTANCE: &str = "targetDistance";
    /// Target is ahead of the tank (bool).
    pub const TARGET_IN_FRONT: &str = "targetInFront";
    /// Target is to the tank's right (bool).
    pub const TARGET_ON_RIGHT: &str = "targetOnRight";
    /// Target is to the tank's left (bool).
    pub const TARGET_ON_LEFT: &str = "targetOnLeft";
    /// Lateral component of the unit heading to the target (number, 0 = dead centre).
    pub const TARGET_OFF_CENTRE: &str = "targetOffCentre";
    /// Whether a target could be perceived at all (bool).
    pub const HAS_TARGET: &str = "hasTarget";

    /// Keys that only exist while a target is perceived.
    pub const TARGET_FACTS: [&str; 5] = [
        TARGET_DISTANCE,
        TARGET_IN_FRONT,
        TARGET_ON_RIGHT,
        TARGET_ON_LEFT,
        TARGET_OFF_CENTRE,
    ];
}

/// Facts derived from one perception sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percept {
    pub distance: f32,
    pub in_front: bool,
    pub on_right: bool,
    pub on_left: bool,
    pub off_centre: f32,
}

impl Percept {
    /// Derives facts from the target's position in the tank's local frame.
    pub fn from_local(local: Vec3) -> Self {
        let heading = local.normalized();
        Self {
            distance: local.length(),
            in_front: heading.z > 0.0,
            on_right: heading.x > 0.0,
            on_left: heading.x < 0.0,
            off_centre: heading.x.abs(),
        }
    }

    /// Samples the world. `None` if either the tank or its target is unavailable.
    pub fn observe<P: Perception + ?Sized>(world: &P) -> Option<Self> {
        let transform = world.agent_transform()?;
        let target = world.target_position()?;
        Some(Self::from_local(transform.inverse_transform_point(target)))
    }

    pub fn write(&self, blackboard: &mut Blackboard) {
        blackboard.set(keys::HAS_TARGET, true);
        blackboard.set(keys::TARGET_DISTANCE, self.distance);
        blackboard.set(keys::TARGET_IN_FRONT, self.in_front);
        blackboard.set(keys::TARGET_ON_RIGHT, self.on_right);
        blackboard.set(keys::TARGET_ON_LEFT, self.on_left);
        blackboard.set(keys::TARGET_OFF_CENTRE, self.off_centre);
    }
}

/// Refreshes the perception facts on `blackboard`.
///
/// When nothing can be perceived, `hasTarget` is set to `false` and every
/// target fact is removed, so all conditions over them fail.
pub fn update_perception<P: Perception + ?Sized>(
    world: &P,
    blackboard: &mut Blackboard,
) -> Option<Percept> {
    match Percept::observe(world) {
        Some(percept) => {
            percept.write(blackboard);
            tracing::trace!(?percept, "perception updated");
            Some(percept)
        }
        None => {
            blackboard.set(keys::HAS_TARGET, false);
            for key in keys::TARGET_FACTS {
                blackboard.remove(key);
            }
            tracing::trace!("no target perceived");
            None
        }
    }
}

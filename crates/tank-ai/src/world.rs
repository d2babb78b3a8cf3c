//! Collaborator interfaces the decision engine talks to.
//!
//! The tree never touches the simulation directly. Hosts implement these
//! traits over their own world representation; reads are pure, actuation is
//! the only side effect.

use crate::math::{Transform, Vec3};

/// Read-only view of the world from one tank's point of view.
///
/// `None` means the collaborator cannot produce a value right now (for
/// example the target was destroyed). The sampler turns that into a
/// "no target" blackboard state.
pub trait Perception {
    fn agent_transform(&self) -> Option<Transform>;
    fn target_position(&self) -> Option<Vec3>;
}

/// Side-effecting controls of one tank.
pub trait Actuators {
    /// Turn rate in [-1, 1]; positive turns toward the tank's right.
    fn apply_turn(&mut self, rate: f32);

    /// Move rate in [-1, 1]; positive is forward.
    fn apply_move(&mut self, rate: f32);

    /// Fire strength in [0, 1]; zero means no discharge.
    fn apply_fire(&mut self, strength: f32);
}

impl<P: Perception + ?Sized> Perception for &mut P {
    fn agent_transform(&self) -> Option<Transform> {
        (**self).agent_transform()
    }

    fn target_position(&self) -> Option<Vec3> {
        (**self).target_position()
    }
}

impl<T: Actuators + ?Sized> Actuators for &mut T {
    fn apply_turn(&mut self, rate: f32) {
        (**self).apply_turn(rate)
    }

    fn apply_move(&mut self, rate: f32) {
        (**self).apply_move(rate)
    }

    fn apply_fire(&mut self, strength: f32) {
        (**self).apply_fire(strength)
    }
}

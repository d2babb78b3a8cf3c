//! Tank action payloads and the agent handle that resolves them.

use behavior_tree::{Agent, Blackboard};

use crate::perception::update_perception;
use crate::rng::RandomSource;
use crate::world::{Actuators, Perception};

/// How hard to fire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireStrength {
    Fixed(f32),
    /// Drawn uniformly from `[0, 1)` each time the action runs.
    Random,
}

/// Payload of a tank action leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TankAction {
    Turn(f32),
    Move(f32),
    Fire(FireStrength),
}

/// Payload of a tank service decorator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TankService {
    UpdatePerception,
}

/// Per-tick handle binding a tank's world collaborators and random source.
pub struct TankAgent<'a, W: ?Sized, R: ?Sized> {
    world: &'a mut W,
    rng: &'a mut R,
}

impl<'a, W: ?Sized, R: ?Sized> TankAgent<'a, W, R> {
    pub fn new(world: &'a mut W, rng: &'a mut R) -> Self {
        Self { world, rng }
    }
}

impl<W, R> Agent for TankAgent<'_, W, R>
where
    W: Perception + Actuators + ?Sized,
    R: RandomSource + ?Sized,
{
    type Action = TankAction;
    type Service = TankService;

    fn act(&mut self, action: &TankAction) {
        match *action {
            TankAction::Turn(rate) => {
                let rate = clamp_signed(rate);
                tracing::trace!(rate, "turn");
                self.world.apply_turn(rate);
            }
            TankAction::Move(rate) => {
                let rate = clamp_signed(rate);
                tracing::trace!(rate, "move");
                self.world.apply_move(rate);
            }
            TankAction::Fire(strength) => {
                let strength = match strength {
                    FireStrength::Fixed(value) => value,
                    FireStrength::Random => self.rng.next_random(0.0, 1.0),
                };
                let strength = clamp_unit(strength);
                tracing::trace!(strength, "fire");
                self.world.apply_fire(strength);
            }
        }
    }

    fn service(&mut self, service: &TankService, blackboard: &mut Blackboard) {
        match service {
            TankService::UpdatePerception => {
                update_perception(&*self.world, blackboard);
            }
        }
    }
}

fn clamp_signed(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(-1.0, 1.0) }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Transform, Vec3};

    #[derive(Default)]
    struct Log {
        calls: Vec<(&'static str, f32)>,
    }

    impl Perception for Log {
        fn agent_transform(&self) -> Option<Transform> {
            Some(Transform::default())
        }

        fn target_position(&self) -> Option<Vec3> {
            Some(Vec3::new(0.0, 0.0, 3.0))
        }
    }

    impl Actuators for Log {
        fn apply_turn(&mut self, rate: f32) {
            self.calls.push(("turn", rate));
        }

        fn apply_move(&mut self, rate: f32) {
            self.calls.push(("move", rate));
        }

        fn apply_fire(&mut self, strength: f32) {
            self.calls.push(("fire", strength));
        }
    }

    struct Constant(f32);

    impl RandomSource for Constant {
        fn next_random(&mut self, _low: f32, _high: f32) -> f32 {
            self.0
        }
    }

    #[test]
    fn actuation_is_clamped() {
        let mut world = Log::default();
        let mut rng = Constant(0.5);
        let mut agent = TankAgent::new(&mut world, &mut rng);

        agent.act(&TankAction::Turn(3.0));
        agent.act(&TankAction::Move(f32::NAN));
        agent.act(&TankAction::Fire(FireStrength::Fixed(-2.0)));

        assert_eq!(world.calls, vec![("turn", 1.0), ("move", 0.0), ("fire", 0.0)]);
    }

    #[test]
    fn random_fire_draws_at_tick_time() {
        let mut world = Log::default();
        let mut rng = Constant(0.42);
        let mut agent = TankAgent::new(&mut world, &mut rng);

        agent.act(&TankAction::Fire(FireStrength::Random));
        assert_eq!(world.calls, vec![("fire", 0.42)]);
    }

    #[test]
    fn perception_service_writes_blackboard() {
        let mut world = Log::default();
        let mut rng = Constant(0.0);
        let mut agent = TankAgent::new(&mut world, &mut rng);
        let mut bb = Blackboard::new();

        agent.service(&TankService::UpdatePerception, &mut bb);
        assert_eq!(bb.number(crate::perception::keys::TARGET_DISTANCE), Some(3.0));
        assert!(world.calls.is_empty());
    }
}

#![allow(dead_code)]

use tank_ai::{Actuators, Perception, RandomSource, Transform, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Turn(f32),
    Move(f32),
    Fire(f32),
}

/// World with a fixed tank at the origin facing +z and a movable target.
pub struct TestWorld {
    pub agent: Option<Transform>,
    pub target: Option<Vec3>,
    pub calls: Vec<Call>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self {
            agent: Some(Transform::default()),
            target: None,
            calls: Vec::new(),
        }
    }

    /// Target at `distance`, with lateral heading component `offset`
    /// (positive = right) and in front of the tank.
    pub fn with_target(offset: f32, distance: f32) -> Self {
        let mut world = Self::new();
        world.place_target(offset, distance);
        world
    }

    pub fn place_target(&mut self, offset: f32, distance: f32) {
        let x = offset * distance;
        let z = (distance * distance - x * x).sqrt();
        self.target = Some(Vec3::new(x, 0.0, z));
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl Perception for TestWorld {
    fn agent_transform(&self) -> Option<Transform> {
        self.agent
    }

    fn target_position(&self) -> Option<Vec3> {
        self.target
    }
}

impl Actuators for TestWorld {
    fn apply_turn(&mut self, rate: f32) {
        self.calls.push(Call::Turn(rate));
    }

    fn apply_move(&mut self, rate: f32) {
        self.calls.push(Call::Move(rate));
    }

    fn apply_fire(&mut self, strength: f32) {
        self.calls.push(Call::Fire(strength));
    }
}

/// Replays a fixed list of outputs, cycling when exhausted.
pub struct Scripted {
    values: Vec<f32>,
    next: usize,
}

impl Scripted {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for Scripted {
    fn next_random(&mut self, _low: f32, _high: f32) -> f32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

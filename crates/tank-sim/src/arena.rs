//! A flat, obstacle-free arena with one AI tank and a stationary target.
//!
//! Actuation sets persistent control inputs which [`Arena::step`] integrates,
//! the same way a physics step would consume them.

use std::f32::consts::PI;

use tank_ai::{Actuators, Perception, Transform, Vec3};

/// Yaw speed at full turn input, in radians per second.
const TURN_SPEED: f32 = PI;
/// Ground speed at full move input, in units per second.
const MOVE_SPEED: f32 = 12.0;

#[derive(Debug, Default, Clone, Copy)]
struct Controls {
    turn: f32,
    movement: f32,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    pub shots: u32,
    pub strongest_shot: f32,
    pub distance_travelled: f32,
}

pub struct Arena {
    tank: Transform,
    target: Option<Vec3>,
    controls: Controls,
    stats: Stats,
}

impl Arena {
    pub fn new(target: Vec3) -> Self {
        Self {
            tank: Transform::default(),
            target: Some(target),
            controls: Controls::default(),
            stats: Stats::default(),
        }
    }

    /// Integrates the current control inputs over `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.tank.yaw += self.controls.turn * TURN_SPEED * dt;
        let delta = self.tank.forward() * (self.controls.movement * MOVE_SPEED * dt);
        self.tank.position = self.tank.position + delta;
        self.stats.distance_travelled += delta.length();
    }

    /// Simulates the target being destroyed.
    pub fn remove_target(&mut self) {
        self.target = None;
    }

    pub fn tank(&self) -> Transform {
        self.tank
    }

    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}

impl Perception for Arena {
    fn agent_transform(&self) -> Option<Transform> {
        Some(self.tank)
    }

    fn target_position(&self) -> Option<Vec3> {
        self.target
    }
}

impl Actuators for Arena {
    fn apply_turn(&mut self, rate: f32) {
        self.controls.turn = rate;
    }

    fn apply_move(&mut self, rate: f32) {
        self.controls.movement = rate;
    }

    fn apply_fire(&mut self, strength: f32) {
        if strength <= 0.0 {
            return;
        }
        self.stats.shots += 1;
        self.stats.strongest_shot = self.stats.strongest_shot.max(strength);
        tracing::info!(strength, shots = self.stats.shots, "shell fired");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_forward_input_moves_along_heading() {
        let mut arena = Arena::new(Vec3::new(0.0, 0.0, 50.0));
        arena.apply_move(1.0);
        arena.step(0.5);

        assert!((arena.tank().position.z - 6.0).abs() < 1e-5);
        assert!((arena.stats().distance_travelled - 6.0).abs() < 1e-5);
    }

    #[test]
    fn zero_strength_is_not_a_shot() {
        let mut arena = Arena::new(Vec3::ZERO);
        arena.apply_fire(0.0);
        arena.apply_fire(0.4);
        assert_eq!(arena.stats().shots, 1);
    }
}

//! Layer 1: small reusable subtrees.
//!
//! Patterns are the smallest building blocks: single actions, perception
//! guards, and the "stop, aim, fire" routine shared by most strategies. Every
//! guard uses [`Stops::ImmediateRestart`] so a fresh perception sample can
//! interrupt whatever branch is running.
//!
//! # Naming Convention
//!
//! Guards follow the `when_condition(child)` convention to clearly express
//! the if-then relationship.

use behavior_tree::builder::{action, condition, sequence, service, wait};
use behavior_tree::{Node, Operator, Stops, Tree};

use crate::agent::{FireStrength, TankAction, TankService};
use crate::perception::keys;

/// A node over tank payloads.
pub type TankNode = Node<TankAction, TankService>;

/// A tree over tank payloads.
pub type TankTree = Tree<TankAction, TankService>;

// ============================================================================
// Actions
// ============================================================================

pub fn turn(rate: f32) -> TankNode {
    action(TankAction::Turn(rate))
}

pub fn drive(rate: f32) -> TankNode {
    action(TankAction::Move(rate))
}

pub fn stop_turning() -> TankNode {
    turn(0.0)
}

pub fn fire(strength: f32) -> TankNode {
    action(TankAction::Fire(FireStrength::Fixed(strength)))
}

pub fn random_fire() -> TankNode {
    action(TankAction::Fire(FireStrength::Random))
}

/// Stop turning, hold still for `delay` seconds, then fire at random strength.
///
/// Meant to sit under [`when_centred`] so that the target drifting away
/// during the delay cancels the shot.
pub fn aim_and_fire(delay: f32) -> TankNode {
    sequence(vec![stop_turning(), wait(delay), random_fire()])
}

// ============================================================================
// Guards
// ============================================================================

/// Runs `child` while the target's lateral offset is at most `threshold`.
pub fn when_centred(threshold: f32, child: TankNode) -> TankNode {
    condition(
        keys::TARGET_OFF_CENTRE,
        Operator::LessOrEqual,
        threshold,
        Stops::ImmediateRestart,
        child,
    )
}

/// Runs `child` while the target's lateral offset is at least `threshold`.
pub fn when_off_centre(threshold: f32, child: TankNode) -> TankNode {
    condition(
        keys::TARGET_OFF_CENTRE,
        Operator::GreaterOrEqual,
        threshold,
        Stops::ImmediateRestart,
        child,
    )
}

pub fn when_on_right(child: TankNode) -> TankNode {
    condition(
        keys::TARGET_ON_RIGHT,
        Operator::Equal,
        true,
        Stops::ImmediateRestart,
        child,
    )
}

pub fn when_on_left(child: TankNode) -> TankNode {
    condition(
        keys::TARGET_ON_LEFT,
        Operator::Equal,
        true,
        Stops::ImmediateRestart,
        child,
    )
}

/// Runs `child` while the target is no further than `distance`.
pub fn when_within(distance: f32, child: TankNode) -> TankNode {
    condition(
        keys::TARGET_DISTANCE,
        Operator::LessOrEqual,
        distance,
        Stops::ImmediateRestart,
        child,
    )
}

pub fn when_behind(child: TankNode) -> TankNode {
    condition(
        keys::TARGET_IN_FRONT,
        Operator::Equal,
        false,
        Stops::ImmediateRestart,
        child,
    )
}

// ============================================================================
// Services
// ============================================================================

/// Refreshes perception every `period` seconds while `child` is active.
pub fn with_perception(period: f32, child: TankNode) -> TankNode {
    service(period, TankService::UpdatePerception, child)
}

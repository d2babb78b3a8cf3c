//! Layer 2: complete tree shapes for each tank strategy.
//!
//! Every preset is a perception service around a prioritized selector, except
//! [`spin`] and [`idle_turn`], which never look at the target.
//!
//! ```text
//! pursue()
//!   └─ Service(perception)
//!       └─ Selector
//!           ├─ when_centred    → aim_and_fire
//!           ├─ when_on_right   → turn right
//!           ├─ when_within(15) → drive forward
//!           └─ turn right (search)
//! ```

use behavior_tree::builder::{selector, sequence};

use crate::config::BrainConfig;
use crate::patterns::{
    TankNode, aim_and_fire, drive, fire, turn, when_behind, when_centred, when_off_centre,
    when_on_left, when_on_right, when_within, with_perception,
};

/// Turn rate used to bring the target into view.
pub const TURN_RATE: f32 = 0.2;
/// Turn rate of the swivelling variant of [`track`].
pub const SWIVEL_TURN_RATE: f32 = 0.3;
/// Spin strategy turn rate and fire strength.
pub const SPIN_TURN_RATE: f32 = -0.05;
pub const SPIN_FIRE_STRENGTH: f32 = 1.0;
/// How long a tracking tank holds still before firing.
pub const TRACK_AIM_DELAY: f32 = 2.0;
/// How long a pursuing or erratic tank holds still before firing.
pub const QUICK_AIM_DELAY: f32 = 1.0;
/// Pursuers close in on targets nearer than this.
pub const ENGAGE_DISTANCE: f32 = 15.0;
/// Evading and erratic tanks react to targets nearer than this.
pub const CLOSE_DISTANCE: f32 = 10.0;
pub const ADVANCE_RATE: f32 = 0.8;
pub const RETREAT_RATE: f32 = -0.2;

/// Fallback: turn at a constant rate and nothing else.
pub fn idle_turn(rate: f32) -> TankNode {
    turn(rate)
}

/// Constantly spin and fire on the spot.
pub fn spin(turn_rate: f32, strength: f32) -> TankNode {
    sequence(vec![turn(turn_rate), fire(strength)])
}

/// Turn to face the target, then stop, aim and fire.
///
/// The target on the right turns right at `turn_rate`; anything else turns
/// left at the same rate.
pub fn track(config: &BrainConfig, turn_rate: f32) -> TankNode {
    with_perception(
        config.perception_period,
        selector(vec![
            when_centred(config.centred_threshold, aim_and_fire(TRACK_AIM_DELAY)),
            when_on_right(turn(turn_rate)),
            turn(-turn_rate),
        ]),
    )
}

/// Face the target and fire when centred, otherwise close the distance.
pub fn pursue(config: &BrainConfig) -> TankNode {
    with_perception(
        config.perception_period,
        selector(vec![
            when_centred(config.centred_threshold, aim_and_fire(QUICK_AIM_DELAY)),
            when_on_right(turn(TURN_RATE)),
            when_within(ENGAGE_DISTANCE, drive(ADVANCE_RATE)),
            turn(TURN_RATE),
        ]),
    )
}

/// Turn toward whichever side the target is on and back off when it is close.
///
/// There is no unconditional branch: without a target the tree does nothing.
pub fn evade(config: &BrainConfig) -> TankNode {
    with_perception(
        config.perception_period,
        selector(vec![
            when_on_left(turn(-TURN_RATE)),
            when_on_right(turn(TURN_RATE)),
            when_within(CLOSE_DISTANCE, drive(RETREAT_RATE)),
        ]),
    )
}

/// Hard-to-predict motion driven by one speed value fixed for the tank's life.
pub fn erratic(config: &BrainConfig, speed: f32) -> TankNode {
    with_perception(
        config.perception_period,
        selector(vec![
            when_centred(config.centred_threshold, aim_and_fire(QUICK_AIM_DELAY)),
            when_on_right(turn(speed)),
            when_within(CLOSE_DISTANCE, drive(speed)),
            when_off_centre(config.centred_threshold, turn(speed)),
            when_behind(drive(speed)),
            turn(TURN_RATE),
        ]),
    )
}

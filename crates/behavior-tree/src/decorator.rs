//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and gate or augment its execution.
//! This module provides [`Condition`] (blackboard guard) and [`Service`]
//! (periodic callback while the subtree is active).

use crate::agent::{Agent, TickContext};
use crate::{Blackboard, Comparison, Node, Status, Stops};

/// Runs its child only while a blackboard comparison holds.
///
/// # Semantics
///
/// - If the comparison is false, the condition returns `Failed` without
///   touching its child
/// - If the comparison is true, the condition returns whatever its child returns
/// - With [`Stops::ImmediateRestart`], a running condition re-checks itself
///   after every blackboard change and aborts its child when it stops holding
#[derive(Debug)]
pub struct Condition<A, S> {
    comparison: Comparison,
    stops: Stops,
    child: Box<Node<A, S>>,
    status: Status,
    last_truth: Option<bool>,
    seen_revision: u64,
}

impl<A, S> Condition<A, S> {
    pub fn new(comparison: Comparison, stops: Stops, child: Node<A, S>) -> Self {
        Self {
            comparison,
            stops,
            child: Box::new(child),
            status: Status::Idle,
            last_truth: None,
            seen_revision: 0,
        }
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    pub fn stops(&self) -> Stops {
        self.stops
    }

    pub fn child(&self) -> &Node<A, S> {
        &self.child
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Truth value recorded by the last evaluation, if any.
    pub fn last_truth(&self) -> Option<bool> {
        self.last_truth
    }

    /// Returns `true` if the comparison now disagrees with its last evaluation.
    pub(crate) fn flipped(&self, blackboard: &Blackboard) -> bool {
        self.last_truth
            .is_some_and(|was| was != self.comparison.evaluate(blackboard))
    }

    pub(crate) fn tick<G>(&mut self, ctx: &mut TickContext<'_, G>) -> Status
    where
        G: Agent<Action = A, Service = S>,
    {
        let revision = ctx.blackboard.revision();

        if !self.status.is_running() {
            self.seen_revision = revision;
            if !self.check(ctx.blackboard) {
                self.status = Status::Failed;
                return self.status;
            }
        } else if self.stops == Stops::ImmediateRestart && revision != self.seen_revision {
            self.seen_revision = revision;
            if !self.check(ctx.blackboard) {
                tracing::debug!(key = self.comparison.key(), "guard no longer holds, aborting");
                self.child.abort();
                self.status = Status::Failed;
                return self.status;
            }
        }

        self.status = self.child.tick(ctx);
        self.status
    }

    fn check(&mut self, blackboard: &Blackboard) -> bool {
        let holds = self.comparison.evaluate(blackboard);
        self.last_truth = Some(holds);
        holds
    }

    pub(crate) fn abort(&mut self) {
        if self.child.status().is_running() {
            self.child.abort();
        }
        self.status = Status::Idle;
    }
}

/// Invokes a service callback on a fixed period while its subtree is active.
///
/// # Timing
///
/// - The very first activation fires the callback immediately, before the
///   child is ticked, so guards below it see fresh facts on the first tick
/// - Afterwards time accumulates only on ticks that reach the service; when it
///   reaches the period the callback fires once and the period is subtracted
/// - Overdue fires after a long tick are coalesced into one
/// - A non-positive or non-finite period fires on every tick
///
/// Deactivation pauses the timer; a later activation resumes it.
#[derive(Debug)]
pub struct Service<A, S> {
    period: f32,
    payload: S,
    child: Box<Node<A, S>>,
    status: Status,
    since_fire: f32,
    started: bool,
    fires: u64,
}

impl<A, S> Service<A, S> {
    pub fn new(period: f32, payload: S, child: Node<A, S>) -> Self {
        Self {
            period,
            payload,
            child: Box::new(child),
            status: Status::Idle,
            since_fire: 0.0,
            started: false,
            fires: 0,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn payload(&self) -> &S {
        &self.payload
    }

    pub fn child(&self) -> &Node<A, S> {
        &self.child
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of times the callback has fired.
    pub fn fires(&self) -> u64 {
        self.fires
    }

    pub(crate) fn tick<G>(&mut self, ctx: &mut TickContext<'_, G>) -> Status
    where
        G: Agent<Action = A, Service = S>,
    {
        if !self.started {
            self.started = true;
            self.since_fire = 0.0;
            self.fire(ctx);
        } else if !(self.period.is_finite() && self.period > 0.0) {
            self.fire(ctx);
        } else {
            self.since_fire += ctx.dt;
            if self.since_fire >= self.period {
                self.fire(ctx);
                self.since_fire = (self.since_fire - self.period) % self.period;
            }
        }

        self.status = self.child.tick(ctx);
        self.status
    }

    fn fire<G>(&mut self, ctx: &mut TickContext<'_, G>)
    where
        G: Agent<Action = A, Service = S>,
    {
        self.fires += 1;
        tracing::trace!(fires = self.fires, period = self.period, "service fired");
        ctx.agent.service(&self.payload, ctx.blackboard);
    }

    pub(crate) fn abort(&mut self) {
        if self.child.status().is_running() {
            self.child.abort();
        }
        self.status = Status::Idle;
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::{action, condition, selector, sequence, service, wait};
    use crate::testing::Recorder;
    use crate::{Node, Operator, Status, Stops, Tree};

    #[test]
    fn condition_true_reports_child_result() {
        let mut tree = Tree::new(condition(
            "ready",
            Operator::Equal,
            true,
            Stops::None,
            wait(1.0),
        ));
        let mut agent = Recorder::default();
        tree.blackboard_mut().set("ready", true);

        assert_eq!(tree.tick(0.1, &mut agent), Status::Running);
    }

    #[test]
    fn condition_false_skips_child() {
        let mut tree = Tree::new(condition(
            "distance",
            Operator::LessOrEqual,
            10.0,
            Stops::None,
            action("advance"),
        ));
        let mut agent = Recorder::default();
        tree.blackboard_mut().set("distance", 12.0);

        assert_eq!(tree.tick(0.1, &mut agent), Status::Failed);
        assert!(agent.log.is_empty());
    }

    #[test]
    fn condition_on_missing_key_fails_quietly() {
        let mut tree = Tree::new(condition(
            "distance",
            Operator::LessOrEqual,
            10.0,
            Stops::ImmediateRestart,
            action("advance"),
        ));
        let mut agent = Recorder::default();

        assert_eq!(tree.tick(0.1, &mut agent), Status::Failed);
        assert!(agent.log.is_empty());
    }

    #[test]
    fn running_condition_aborts_child_when_flipped() {
        let mut tree = Tree::new(condition(
            "ready",
            Operator::Equal,
            true,
            Stops::ImmediateRestart,
            sequence(vec![wait(1.0), action("fire")]),
        ));
        let mut agent = Recorder::default();
        tree.blackboard_mut().set("ready", true);

        assert_eq!(tree.tick(0.5, &mut agent), Status::Running);
        tree.blackboard_mut().set("ready", false);
        assert_eq!(tree.tick(0.5, &mut agent), Status::Failed);
        assert!(agent.log.is_empty());

        let Node::Condition(guard) = tree.root() else {
            panic!("root should be a condition");
        };
        assert_eq!(guard.child().status(), Status::Idle);
    }

    #[test]
    fn service_fires_immediately_then_on_period() {
        let mut tree = Tree::new(service(0.2, "sense", action("act")));
        let mut agent = Recorder::default();

        tree.tick(0.05, &mut agent);
        assert_eq!(agent.samples, 1);

        // 0.05 * 3 = 0.15 < 0.2
        tree.tick(0.05, &mut agent);
        tree.tick(0.05, &mut agent);
        tree.tick(0.05, &mut agent);
        assert_eq!(agent.samples, 1);

        tree.tick(0.1, &mut agent);
        assert_eq!(agent.samples, 2);
    }

    #[test]
    fn service_coalesces_overdue_fires() {
        let mut tree = Tree::new(service(0.2, "sense", action("act")));
        let mut agent = Recorder::default();

        tree.tick(0.0, &mut agent);
        // A long stall fires once, not five times
        tree.tick(1.0, &mut agent);
        assert_eq!(agent.samples, 2);
    }

    #[test]
    fn service_with_zero_period_fires_every_tick() {
        let mut tree = Tree::new(service(0.0, "sense", action("act")));
        let mut agent = Recorder::default();

        for _ in 0..4 {
            tree.tick(0.01, &mut agent);
        }
        assert_eq!(agent.samples, 4);
    }

    #[test]
    fn service_writes_interrupt_running_branch() {
        // The sampler reports the target leaving the centre zone on its second fire
        let mut agent = Recorder::default();
        agent.script = vec![("offCentre", 0.05), ("offCentre", 0.3)];

        let mut tree = Tree::new(service(
            0.2,
            "sense",
            selector(vec![
                condition(
                    "offCentre",
                    Operator::LessOrEqual,
                    0.1,
                    Stops::ImmediateRestart,
                    sequence(vec![action("stop"), wait(1.0), action("fire")]),
                ),
                action("turn"),
            ]),
        ));

        assert_eq!(tree.tick(0.1, &mut agent), Status::Running);
        assert_eq!(tree.tick(0.1, &mut agent), Status::Running);
        // Second fire happens here and flips the guard
        assert_eq!(tree.tick(0.1, &mut agent), Status::Succeeded);

        assert_eq!(agent.log, vec!["sense", "stop", "sense", "turn"]);
        assert!(!agent.log.contains(&"fire"));
    }
}

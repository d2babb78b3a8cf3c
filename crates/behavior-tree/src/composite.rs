//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating decision
//! trees: [`Sequence`] (AND logic) and [`Selector`] (prioritized OR logic).
//! Both remember which child is running and resume it on the next tick.

use crate::agent::{Agent, TickContext};
use crate::{Blackboard, Node, Status, Stops};

/// Executes child behaviors in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failed`, the sequence **stops immediately** and returns `Failed`
/// - If a child returns `Running`, the sequence returns `Running` and resumes that child next tick
/// - If a child returns `Succeeded`, the sequence **continues** to the next child
/// - If all children return `Succeeded`, the sequence returns `Succeeded`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
#[derive(Debug)]
pub struct Sequence<A, S> {
    children: Vec<Node<A, S>>,
    current: usize,
    status: Status,
}

impl<A, S> Sequence<A, S> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Node<A, S>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self {
            children,
            current: 0,
            status: Status::Idle,
        }
    }

    pub fn children(&self) -> &[Node<A, S>] {
        &self.children
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn tick<G>(&mut self, ctx: &mut TickContext<'_, G>) -> Status
    where
        G: Agent<Action = A, Service = S>,
    {
        if !self.status.is_running() {
            self.current = 0;
        }

        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(ctx) {
                Status::Succeeded => self.current += 1, // Move to next child
                Status::Running => {
                    self.status = Status::Running;
                    return self.status;
                }
                Status::Failed | Status::Idle => {
                    self.status = Status::Failed; // Short-circuit
                    return self.status;
                }
            }
        }

        // All children succeeded
        self.status = Status::Succeeded;
        self.status
    }

    pub(crate) fn abort(&mut self) {
        abort_running(&mut self.children);
        self.current = 0;
        self.status = Status::Idle;
    }
}

/// Tries child behaviors in priority order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Succeeded` or `Running`, the selector **stops immediately**
///   and reports that result
/// - If a child returns `Failed`, the selector **continues** to the next child
/// - If all children return `Failed`, the selector returns `Failed`
///
/// # Reactive Restart
///
/// While a child is running, the selector watches the blackboard revision. On
/// the first tick after a change it re-checks every
/// [`Stops::ImmediateRestart`] condition among its children, up to and
/// including the running one. If any of them flipped, the running child is
/// aborted and evaluation restarts from the first child in the same tick.
#[derive(Debug)]
pub struct Selector<A, S> {
    children: Vec<Node<A, S>>,
    current: usize,
    status: Status,
    seen_revision: u64,
}

impl<A, S> Selector<A, S> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Node<A, S>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self {
            children,
            current: 0,
            status: Status::Idle,
            seen_revision: 0,
        }
    }

    pub fn children(&self) -> &[Node<A, S>] {
        &self.children
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn tick<G>(&mut self, ctx: &mut TickContext<'_, G>) -> Status
    where
        G: Agent<Action = A, Service = S>,
    {
        if self.status.is_running() {
            if ctx.blackboard.revision() != self.seen_revision
                && let Some(guard) = self.flipped_guard(ctx.blackboard)
            {
                tracing::debug!(
                    guard,
                    active = self.current,
                    "guard flipped, restarting selector"
                );
                self.children[self.current].abort();
                self.current = 0;
            }
        } else {
            self.current = 0;
        }

        // Children may write the blackboard (nested services); those writes
        // are picked up by the re-check on the next tick.
        self.seen_revision = ctx.blackboard.revision();

        for index in self.current..self.children.len() {
            match self.children[index].tick(ctx) {
                Status::Failed | Status::Idle => continue, // Try next child
                status => {
                    self.current = index;
                    self.status = status;
                    return status;
                }
            }
        }

        // All children failed
        self.current = 0;
        self.status = Status::Failed;
        self.status
    }

    /// Index of the first immediate-restart guard, up to the running child,
    /// whose truth value no longer matches its last evaluation.
    fn flipped_guard(&self, blackboard: &Blackboard) -> Option<usize> {
        self.children
            .iter()
            .take(self.current + 1)
            .position(|child| match child {
                Node::Condition(condition) => {
                    condition.stops() == Stops::ImmediateRestart && condition.flipped(blackboard)
                }
                _ => false,
            })
    }

    pub(crate) fn abort(&mut self) {
        abort_running(&mut self.children);
        self.current = 0;
        self.status = Status::Idle;
    }
}

fn abort_running<A, S>(children: &mut [Node<A, S>]) {
    for child in children.iter_mut().filter(|child| child.status().is_running()) {
        child.abort();
    }
}

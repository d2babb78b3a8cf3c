//! The node sum type and its single evaluation entry point.
//!
//! Every node kind is a variant of [`Node`]. Composite and decorator variants
//! exclusively own their children, so a tree is a plain ownership hierarchy
//! and evaluation is a recursive `match` rather than virtual dispatch.

use crate::agent::{Agent, TickContext};
use crate::composite::{Selector, Sequence};
use crate::decorator::{Condition, Service};
use crate::leaf::{Action, Wait};
use crate::Status;

/// Tag identifying a node's variant, mostly for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Action,
    Wait,
    Condition,
    Sequence,
    Selector,
    Service,
}

/// A behavior tree node.
///
/// `A` is the action payload resolved by [`Agent::act`], `S` the service
/// payload resolved by [`Agent::service`].
#[derive(Debug)]
pub enum Node<A, S> {
    Action(Action<A>),
    Wait(Wait),
    Condition(Condition<A, S>),
    Sequence(Sequence<A, S>),
    Selector(Selector<A, S>),
    Service(Service<A, S>),
}

impl<A, S> Node<A, S> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Action(_) => NodeKind::Action,
            Node::Wait(_) => NodeKind::Wait,
            Node::Condition(_) => NodeKind::Condition,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Selector(_) => NodeKind::Selector,
            Node::Service(_) => NodeKind::Service,
        }
    }

    /// Outcome of this node's last evaluation.
    pub fn status(&self) -> Status {
        match self {
            Node::Action(node) => node.status(),
            Node::Wait(node) => node.status(),
            Node::Condition(node) => node.status(),
            Node::Sequence(node) => node.status(),
            Node::Selector(node) => node.status(),
            Node::Service(node) => node.status(),
        }
    }

    /// Direct children in declaration order. Leaves have none.
    pub fn children(&self) -> &[Node<A, S>] {
        match self {
            Node::Action(_) | Node::Wait(_) => &[],
            Node::Condition(node) => std::slice::from_ref(node.child()),
            Node::Sequence(node) => node.children(),
            Node::Selector(node) => node.children(),
            Node::Service(node) => std::slice::from_ref(node.child()),
        }
    }

    /// The child currently `Running` under this node, with its index.
    pub fn running_child(&self) -> Option<(usize, &Node<A, S>)> {
        if !self.status().is_running() {
            return None;
        }
        self.children()
            .iter()
            .enumerate()
            .find(|(_, child)| child.status().is_running())
    }

    /// Evaluates this node for one tick.
    ///
    /// A node that is not `Running` starts fresh; a `Running` node resumes.
    pub(crate) fn tick<G>(&mut self, ctx: &mut TickContext<'_, G>) -> Status
    where
        G: Agent<Action = A, Service = S>,
    {
        match self {
            Node::Action(node) => node.tick(ctx),
            Node::Wait(node) => node.tick(ctx),
            Node::Condition(node) => node.tick(ctx),
            Node::Sequence(node) => node.tick(ctx),
            Node::Selector(node) => node.tick(ctx),
            Node::Service(node) => node.tick(ctx),
        }
    }

    /// Stops this node and, recursively, every running descendant.
    ///
    /// Aborted nodes return to `Idle`; waits discard their elapsed time.
    pub(crate) fn abort(&mut self) {
        match self {
            Node::Action(node) => node.abort(),
            Node::Wait(node) => node.abort(),
            Node::Condition(node) => node.abort(),
            Node::Sequence(node) => node.abort(),
            Node::Selector(node) => node.abort(),
            Node::Service(node) => node.abort(),
        }
    }
}

//! The tree: a root node, its blackboard and a clock.

use crate::agent::{Agent, TickContext};
use crate::{Blackboard, Node, Status};

/// Owns a root [`Node`] and the [`Blackboard`] its nodes communicate through.
///
/// A tree is built once per agent, ticked every simulation step, and dropped
/// with the agent. Trees never share nodes or blackboards, so a host may tick
/// different agents' trees on different threads.
#[derive(Debug)]
pub struct Tree<A, S> {
    root: Node<A, S>,
    blackboard: Blackboard,
    elapsed: f64,
    ticks: u64,
}

impl<A, S> Tree<A, S> {
    /// Creates a tree with an empty blackboard.
    pub fn new(root: Node<A, S>) -> Self {
        Self {
            root,
            blackboard: Blackboard::new(),
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Evaluates the tree for one simulation step of `dt` seconds.
    ///
    /// A root that finished on the previous tick starts over. Negative or
    /// non-finite deltas are treated as zero.
    pub fn tick<G>(&mut self, dt: f32, agent: &mut G) -> Status
    where
        G: Agent<Action = A, Service = S>,
    {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            tracing::warn!(dt, "ignoring invalid delta time");
            0.0
        };

        self.elapsed += f64::from(dt);
        self.ticks += 1;

        let mut ctx = TickContext {
            dt,
            blackboard: &mut self.blackboard,
            agent,
        };
        self.root.tick(&mut ctx)
    }

    /// Stops every running node, releasing in-progress waits.
    pub fn stop(&mut self) {
        self.root.abort();
    }

    pub fn root(&self) -> &Node<A, S> {
        &self.root
    }

    pub fn status(&self) -> Status {
        self.root.status()
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.blackboard
    }

    /// Total simulated time seen by [`tick`](Self::tick), in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Child indices from the root down to the running leaf.
    ///
    /// Empty when nothing is running.
    pub fn active_path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut node = &self.root;
        while let Some((index, child)) = node.running_child() {
            path.push(index);
            node = child;
        }
        path
    }

    /// The deepest running node, if any.
    pub fn active_leaf(&self) -> Option<&Node<A, S>> {
        if !self.root.status().is_running() {
            return None;
        }
        let mut node = &self.root;
        while let Some((_, child)) = node.running_child() {
            node = child;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::{action, selector, sequence, service, wait};
    use crate::testing::Recorder;
    use crate::{NodeKind, Status, Tree};

    #[test]
    fn tracks_clock_and_ticks() {
        let mut tree = Tree::new(action("noop"));
        let mut agent = Recorder::default();

        tree.tick(0.5, &mut agent);
        tree.tick(0.25, &mut agent);
        assert_eq!(tree.tick_count(), 2);
        assert!((tree.elapsed() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn invalid_delta_is_ignored() {
        let mut tree = Tree::new(wait(1.0));
        let mut agent = Recorder::default();

        tree.tick(0.0, &mut agent);
        tree.tick(f32::NAN, &mut agent);
        tree.tick(-3.0, &mut agent);
        assert_eq!(tree.elapsed(), 0.0);
        assert_eq!(tree.status(), Status::Running);
    }

    #[test]
    fn active_path_follows_running_nodes() {
        let mut tree = Tree::new(service(
            1.0,
            "sense",
            selector(vec![sequence(vec![action("a"), wait(1.0)]), action("b")]),
        ));
        let mut agent = Recorder::default();

        tree.tick(0.1, &mut agent);
        assert_eq!(tree.active_path(), vec![0, 0, 1]);
        assert_eq!(tree.active_leaf().map(|node| node.kind()), Some(NodeKind::Wait));

        tree.stop();
        assert!(tree.active_path().is_empty());
        assert!(tree.active_leaf().is_none());
    }

    #[test]
    fn finished_root_starts_over() {
        let mut tree = Tree::new(sequence(vec![action("a"), action("b")]));
        let mut agent = Recorder::default();

        tree.tick(0.1, &mut agent);
        tree.tick(0.1, &mut agent);
        assert_eq!(agent.log, vec!["a", "b", "a", "b"]);
    }
}

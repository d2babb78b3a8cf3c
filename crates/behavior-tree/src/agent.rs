//! The agent handle nodes act through.
//!
//! Nodes never capture agent state. Action leaves and services carry small
//! payload values; the tree hands those payloads to an [`Agent`] passed into
//! every [`Tree::tick`](crate::Tree::tick) call, which resolves them against
//! whatever collaborators the host owns.

use crate::Blackboard;

/// Resolves node payloads into side effects.
pub trait Agent {
    /// Payload carried by action leaves (e.g. "turn at rate 0.2").
    type Action;

    /// Payload carried by service decorators (e.g. "refresh perception").
    type Service;

    /// Applies an action. Called exactly once per tick for each active action leaf.
    fn act(&mut self, action: &Self::Action);

    /// Runs a service callback. The blackboard is the only state a service
    /// is expected to write.
    fn service(&mut self, service: &Self::Service, blackboard: &mut Blackboard);
}

/// Blanket implementation for mutable references.
///
/// This allows hosts to keep ownership of their agent and lend it per tick.
impl<G: Agent + ?Sized> Agent for &mut G {
    type Action = G::Action;
    type Service = G::Service;

    #[inline]
    fn act(&mut self, action: &Self::Action) {
        (**self).act(action)
    }

    #[inline]
    fn service(&mut self, service: &Self::Service, blackboard: &mut Blackboard) {
        (**self).service(service, blackboard)
    }
}

/// Everything a node needs during one tick.
pub(crate) struct TickContext<'a, G> {
    pub dt: f32,
    pub blackboard: &'a mut Blackboard,
    pub agent: &'a mut G,
}

//! Leaf nodes: instantaneous actions and timed waits.

use crate::Status;
use crate::agent::{Agent, TickContext};

/// Applies its payload through the agent and succeeds immediately.
///
/// Actions are fire-and-forget: the payload is handed to [`Agent::act`]
/// exactly once per tick in which the leaf is reached.
#[derive(Debug)]
pub struct Action<A> {
    payload: A,
    status: Status,
}

impl<A> Action<A> {
    pub fn new(payload: A) -> Self {
        Self {
            payload,
            status: Status::Idle,
        }
    }

    pub fn payload(&self) -> &A {
        &self.payload
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn tick<G>(&mut self, ctx: &mut TickContext<'_, G>) -> Status
    where
        G: Agent<Action = A>,
    {
        ctx.agent.act(&self.payload);
        self.status = Status::Succeeded;
        self.status
    }

    pub(crate) fn abort(&mut self) {
        self.status = Status::Idle;
    }
}

/// Reports `Running` until its duration has elapsed since activation.
///
/// Elapsed time starts at zero on the activating tick and grows by the tick's
/// delta on every later tick. Progress is never carried across activations.
#[derive(Debug, Clone)]
pub struct Wait {
    duration: f32,
    elapsed: f32,
    status: Status,
}

impl Wait {
    /// Creates a wait of `seconds`. Negative or NaN durations complete at once.
    pub fn new(seconds: f32) -> Self {
        Self {
            duration: seconds.max(0.0),
            elapsed: 0.0,
            status: Status::Idle,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Time accumulated in the current activation.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn tick<G>(&mut self, ctx: &mut TickContext<'_, G>) -> Status {
        if self.status.is_running() {
            self.elapsed += ctx.dt;
        } else {
            self.elapsed = 0.0;
        }

        self.status = if self.elapsed >= self.duration {
            Status::Succeeded
        } else {
            Status::Running
        };
        self.status
    }

    pub(crate) fn abort(&mut self) {
        if self.status.is_running() {
            tracing::trace!(elapsed = self.elapsed, "wait aborted");
        }
        self.elapsed = 0.0;
        self.status = Status::Idle;
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::{action, wait};
    use crate::testing::Recorder;
    use crate::{Status, Tree};

    #[test]
    fn action_succeeds_and_acts_once_per_tick() {
        let mut tree = Tree::new(action("turn"));
        let mut agent = Recorder::default();

        assert_eq!(tree.tick(0.1, &mut agent), Status::Succeeded);
        assert_eq!(tree.tick(0.1, &mut agent), Status::Succeeded);
        assert_eq!(agent.log, vec!["turn", "turn"]);
    }

    #[test]
    fn wait_runs_until_duration_elapsed() {
        let mut tree = Tree::new(wait(1.0));
        let mut agent = Recorder::default();

        // Activating tick starts the clock at zero
        assert_eq!(tree.tick(0.25, &mut agent), Status::Running);
        assert_eq!(tree.tick(0.25, &mut agent), Status::Running);
        assert_eq!(tree.tick(0.25, &mut agent), Status::Running);
        assert_eq!(tree.tick(0.25, &mut agent), Status::Running);
        assert_eq!(tree.tick(0.25, &mut agent), Status::Succeeded);
    }

    #[test]
    fn zero_wait_completes_on_activation() {
        let mut tree = Tree::new(wait(0.0));
        let mut agent = Recorder::default();
        assert_eq!(tree.tick(0.016, &mut agent), Status::Succeeded);
    }

    #[test]
    fn stopped_wait_discards_progress() {
        let mut tree = Tree::new(wait(1.0));
        let mut agent = Recorder::default();

        tree.tick(0.0, &mut agent);
        tree.tick(0.9, &mut agent);
        tree.stop();
        assert_eq!(tree.status(), Status::Idle);

        // A fresh activation has to wait the full second again
        assert_eq!(tree.tick(0.9, &mut agent), Status::Running);
        assert_eq!(tree.tick(0.5, &mut agent), Status::Running);
        assert_eq!(tree.tick(0.5, &mut agent), Status::Succeeded);
    }
}

//! Status reported by behavior nodes.

/// The observable outcome of a node's last evaluation.
///
/// # Tick Semantics
///
/// Nodes are evaluated once per simulation step:
/// - Leaves either finish within the tick (`Succeeded`/`Failed`) or keep
///   going across ticks (`Running`, e.g. a timed wait)
/// - A node that is ticked while not `Running` starts fresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    /// Never evaluated, or stopped before it could finish.
    #[default]
    Idle,

    /// Still in progress; it will be resumed on the next tick.
    Running,

    /// The node completed successfully.
    ///
    /// For conditions: the comparison held and the guarded child succeeded.
    /// For actions: the effect was applied.
    Succeeded,

    /// The node failed.
    ///
    /// For conditions: the comparison did not hold (or the child failed).
    Failed,
}

impl Status {
    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Succeeded`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Succeeded)
    }

    /// Returns `true` if this status is `Failed`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failed)
    }

    /// Returns `true` once the node has finished, either way.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Succeeded | Status::Failed)
    }
}

//! Blackboard comparisons used by condition nodes.

use crate::blackboard::{Blackboard, Value};

/// How a blackboard value is compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Operator {
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

/// What a condition does when its truth value changes while the tree runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Stops {
    /// Only checked when the evaluator reaches the condition.
    #[default]
    None,

    /// Re-checked after every blackboard change while the enclosing branch is
    /// active; a flip aborts the active subtree and reselects from the first
    /// child of the enclosing selector.
    ImmediateRestart,
}

/// A single `key <operator> threshold` test.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    key: String,
    operator: Operator,
    threshold: Value,
}

impl Comparison {
    pub fn new(key: impl Into<String>, operator: Operator, threshold: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            operator,
            threshold: threshold.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn threshold(&self) -> Value {
        self.threshold
    }

    /// Evaluates the comparison against the current blackboard.
    ///
    /// A key that was never written, or that holds a different type than the
    /// threshold, evaluates to `false`. Ordering operators never hold for
    /// booleans.
    pub fn evaluate(&self, blackboard: &Blackboard) -> bool {
        let Some(current) = blackboard.get(&self.key) else {
            return false;
        };

        match (current, self.threshold) {
            (Value::Number(value), Value::Number(threshold)) => match self.operator {
                Operator::Equal => value == threshold,
                Operator::LessOrEqual => value <= threshold,
                Operator::GreaterOrEqual => value >= threshold,
            },
            (Value::Bool(value), Value::Bool(threshold)) => match self.operator {
                Operator::Equal => value == threshold,
                Operator::LessOrEqual | Operator::GreaterOrEqual => false,
            },
            _ => false,
        }
    }
}

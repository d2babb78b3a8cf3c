//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Node::Sequence(Sequence::new(vec![...]))`, you can use shorter functions
//! like `sequence(vec![...])`.

use crate::{
    Action, Comparison, Condition, Node, Operator, Selector, Sequence, Service, Stops, Value, Wait,
};

/// Creates an action leaf carrying `payload`.
#[inline]
pub fn action<A, S>(payload: A) -> Node<A, S> {
    Node::Action(Action::new(payload))
}

/// Creates a wait leaf of `seconds`.
#[inline]
pub fn wait<A, S>(seconds: f32) -> Node<A, S> {
    Node::Wait(Wait::new(seconds))
}

/// Creates a sequence node.
///
/// Shorthand for `Node::Sequence(Sequence::new(children))`.
#[inline]
pub fn sequence<A, S>(children: Vec<Node<A, S>>) -> Node<A, S> {
    Node::Sequence(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Node::Selector(Selector::new(children))`.
#[inline]
pub fn selector<A, S>(children: Vec<Node<A, S>>) -> Node<A, S> {
    Node::Selector(Selector::new(children))
}

/// Creates a condition guarding `child` with `key <operator> threshold`.
#[inline]
pub fn condition<A, S>(
    key: impl Into<String>,
    operator: Operator,
    threshold: impl Into<Value>,
    stops: Stops,
    child: Node<A, S>,
) -> Node<A, S> {
    Node::Condition(Condition::new(
        Comparison::new(key, operator, threshold),
        stops,
        child,
    ))
}

/// Creates a service firing `payload` every `period` seconds around `child`.
#[inline]
pub fn service<A, S>(period: f32, payload: S, child: Node<A, S>) -> Node<A, S> {
    Node::Service(Service::new(period, payload, child))
}

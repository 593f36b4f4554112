/// Batch replay of container actions.
///
/// Defines `StaqueAction`, a recorded `add`, `get` or `extract` step, and
/// `apply_actions`, which replays a sequence of such steps against any
/// `Staque` container with optional tracing.
pub mod action;
/// The shared container contract and linked-list plumbing.
///
/// Declares the `Staque` trait implemented by both `Stack` and `Queue`, the
/// singly-linked node the chains are built from, and the `Items` iterator
/// that traverses a chain front to back.
pub mod core;
/// A first-in-first-out queue over the node chain.
pub mod queue;
/// A last-in-first-out stack over the node chain.
///
/// This is the container the evaluator instantiates for its pending
/// operators and operands.
pub mod stack;

pub use action::StaqueAction;
pub use queue::Queue;
pub use stack::Stack;

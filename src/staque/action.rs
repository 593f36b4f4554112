use std::fmt::Display;

use log::debug;

use crate::staque::core::Staque;

/// A recorded container operation for batch replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaqueAction<T> {
    /// Add the carried value to the container.
    Add(T),
    /// Look at the next element without removing it.
    Get,
    /// Remove the next element.
    Extract,
}

/// Replays a sequence of actions against a container.
///
/// Actions are applied in order. When `debug` is set, each applied action is
/// traced through the `log` facade at debug level. A `Get` or `Extract`
/// against an empty container stops the replay.
///
/// # Parameters
/// - `staque`: The container to replay against.
/// - `actions`: The recorded actions, applied front to back.
/// - `debug`: Whether to trace each applied action.
///
/// # Returns
/// `true` if every action was applied, `false` if the replay stopped on an
/// empty container.
///
/// # Example
/// ```
/// use stacalc::staque::{Stack, StaqueAction, action::apply_actions, core::Staque};
///
/// let mut stack = Stack::new();
/// let actions = [StaqueAction::Add(1), StaqueAction::Add(2), StaqueAction::Extract];
///
/// assert!(apply_actions(&mut stack, &actions, false));
/// assert_eq!(stack.get(), Some(&1));
/// ```
pub fn apply_actions<T, S>(staque: &mut S, actions: &[StaqueAction<T>], debug: bool) -> bool
    where T: Clone + Display,
          S: Staque<T>
{
    for action in actions {
        match action {
            StaqueAction::Add(value) => {
                staque.add(value.clone());
                if debug {
                    debug!("added: {value}");
                }
            },

            StaqueAction::Get => {
                let Some(value) = staque.get() else {
                    return false;
                };
                if debug {
                    debug!("got: {value}");
                }
            },

            StaqueAction::Extract => {
                let Some(value) = staque.extract() else {
                    return false;
                };
                if debug {
                    debug!("extracted: {value}");
                }
            },
        }
    }

    true
}

//! Explicit-stack variant of the search.
//!
//! Walks the same frames in the same order as the recursive engine, keeping
//! them in a `Vec` instead of on the call stack, so very deep horizons are
//! limited by heap rather than thread stack size.

use super::error::SearchError;
use super::frame::{Flow, Frame};
use super::minimax::Context;
use super::strategy::Strategy;
use super::turn::Mode;
use super::window::Window;

/// A frame whose successors are still being explored.
struct Open<A, S> {
    frame: Frame<A>,
    depth: u32,
    pending: std::vec::IntoIter<(A, S)>,
    // Action leading to the child currently being valued
    current: Option<A>,
}

impl<A, S> Open<A, S> {
    fn new<St>(strategy: &St, state: &S, mode: Mode, window: Window, pruning: bool, depth: u32) -> Self
    where
        St: Strategy<State = S, Action = A>,
    {
        Self {
            frame: Frame::new(mode, window, pruning),
            depth,
            pending: strategy.successors(state).collect::<Vec<_>>().into_iter(),
            current: None,
        }
    }
}

/// Expand the (non-cutoff) root and return its value and best action.
pub(crate) fn expand<S: Strategy>(
    ctx: &mut Context<'_, S>,
    root: &S::State,
) -> Result<(f64, Option<S::Action>), SearchError> {
    let strategy = ctx.strategy;
    let pruning = ctx.config.pruning;
    let mut stack = vec![Open::new(strategy, root, Mode::Max, Window::full(), pruning, 0)];
    let mut returned: Option<f64> = None;

    while let Some(top) = stack.last_mut() {
        let mut finished = false;

        if let Some(value) = returned.take() {
            if let Some(action) = top.current.take() {
                if top.frame.absorb(action, value) == Flow::Cutoff {
                    ctx.record_cutoff(top.frame.mode(), top.depth, value);
                    finished = true;
                }
            }
        }

        if !finished {
            if let Some((action, child)) = top.pending.next() {
                let depth = top.depth + 1;
                let mode = top.frame.mode().resolve(strategy.transition(&child));
                top.current = Some(action);

                ctx.stats.enter(depth);
                if ctx.cutoff(&child, depth)? {
                    returned = Some(ctx.evaluate(&child, depth)?);
                } else {
                    let open = Open::new(strategy, &child, mode, top.frame.window(), pruning, depth);
                    stack.push(open);
                }
                continue;
            }
        }

        let Some(done) = stack.pop() else { break };
        if done.depth > 0 && done.frame.is_empty() {
            ctx.record_dead_end(done.depth);
        }
        let (value, action) = done.frame.finish();
        if stack.is_empty() {
            return Ok((value, action));
        }
        returned = Some(value);
    }

    Ok((Mode::Max.worst(), None))
}

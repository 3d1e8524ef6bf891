//! Depth-bounded Minimax with optional Alpha-Beta pruning.
//!
//! The root is always a maximizing frame for the searching player. Every
//! successor's frame mode is resolved from its turn transition: the same
//! player moving again keeps the mode, a passed turn flips it. Depth counts
//! frames, not rounds.

use std::time::Instant;

use log::{debug, trace};

use crate::core::SearchConfig;

use super::error::SearchError;
use super::frame::{Flow, Frame};
use super::stats::SearchStats;
use super::strategy::Strategy;
use super::turn::Mode;
use super::window::Window;

/// Result of a completed search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<A> {
    /// Minimax value of the root for the searching player.
    pub value: f64,
    /// First action achieving that value, in enumeration order.
    pub action: A,
    /// Statistics of this search.
    pub stats: SearchStats,
}

/// Minimax search context.
///
/// Owns the configuration and the statistics of the last search. Holds no
/// game state between searches.
#[derive(Clone, Debug)]
pub struct MinimaxSearch {
    config: SearchConfig,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run a recursive search from `root`.
    pub fn search<S: Strategy>(
        &mut self,
        root: &S::State,
        strategy: &S,
    ) -> Result<SearchOutcome<S::Action>, SearchError> {
        self.run(root, strategy, |ctx, root| ctx.expand(root, Mode::Max, Window::full(), 0))
    }

    /// Run the search with an explicit frame stack instead of recursion.
    ///
    /// Same value, action and statistics as [`search`](Self::search); each
    /// frame materializes its successors up front.
    pub fn search_iterative<S: Strategy>(
        &mut self,
        root: &S::State,
        strategy: &S,
    ) -> Result<SearchOutcome<S::Action>, SearchError> {
        self.run(root, strategy, super::iterative::expand)
    }

    /// Search and return only the chosen action.
    pub fn choose_action<S: Strategy>(
        &mut self,
        root: &S::State,
        strategy: &S,
    ) -> Result<S::Action, SearchError> {
        self.search(root, strategy).map(|outcome| outcome.action)
    }

    fn run<S, F>(
        &mut self,
        root: &S::State,
        strategy: &S,
        expand: F,
    ) -> Result<SearchOutcome<S::Action>, SearchError>
    where
        S: Strategy,
        F: FnOnce(&mut Context<'_, S>, &S::State) -> Result<(f64, Option<S::Action>), SearchError>,
    {
        let start = Instant::now();
        self.stats.reset();
        debug!(
            "searching to {} (pruning: {})",
            self.config.horizon, self.config.pruning
        );

        let mut ctx = Context {
            strategy,
            config: &self.config,
            stats: &mut self.stats,
        };

        ctx.stats.enter(0);
        if ctx.cutoff(root, 0)? {
            return Err(SearchError::RootIsCutoff);
        }
        let (value, action) = expand(&mut ctx, root)?;
        let action = action.ok_or(SearchError::NoLegalMoves)?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "search finished: value {value}, {} frames, {} evaluations, {} cutoffs in {}us",
            self.stats.frames, self.stats.evaluations, self.stats.cutoffs, self.stats.time_us
        );

        Ok(SearchOutcome {
            value,
            action,
            stats: self.stats.clone(),
        })
    }
}

/// Search from `root` and return the chosen action.
///
/// ```
/// use rust_minimax::core::{Horizon, PlayerId, SearchConfig};
/// use rust_minimax::agent::RulesAgent;
/// use rust_minimax::games::tree::{GameTree, TreeGame};
/// use rust_minimax::search::choose_action;
///
/// let tree = GameTree::branch(PlayerId::new(0), vec![
///     ("A", GameTree::leaf(5.0)),
///     ("B", GameTree::leaf(9.0)),
///     ("C", GameTree::leaf(3.0)),
/// ]);
/// let (game, root) = TreeGame::new(tree);
/// let config = SearchConfig::new(Horizon::new(0));
/// let agent = RulesAgent::new(game, PlayerId::new(0), config.clone());
///
/// assert_eq!(choose_action(&root, &agent, &config).unwrap(), "B");
/// ```
pub fn choose_action<S: Strategy>(
    root: &S::State,
    strategy: &S,
    config: &SearchConfig,
) -> Result<S::Action, SearchError> {
    MinimaxSearch::new(config.clone()).choose_action(root, strategy)
}

/// Per-search borrowed state shared by the recursive and iterative engines.
pub(crate) struct Context<'a, S: Strategy> {
    pub(crate) strategy: &'a S,
    pub(crate) config: &'a SearchConfig,
    pub(crate) stats: &'a mut SearchStats,
}

impl<'a, S: Strategy> Context<'a, S> {
    /// Horizon OR strategy cutoff, optionally checked for consistency.
    pub(crate) fn cutoff(&self, state: &S::State, depth: u32) -> Result<bool, SearchError> {
        if self.config.horizon.exceeded(depth) {
            return Ok(true);
        }
        let stop = self.strategy.cutoff(state, depth);
        if self.config.check_cutoff && self.strategy.cutoff(state, depth) != stop {
            return Err(SearchError::CutoffMismatch { depth });
        }
        Ok(stop)
    }

    pub(crate) fn evaluate(&mut self, state: &S::State, depth: u32) -> Result<f64, SearchError> {
        self.stats.evaluations += 1;
        let value = self.strategy.evaluate(state);
        if value.is_nan() {
            return Err(SearchError::InvalidEvaluation { depth });
        }
        Ok(value)
    }

    pub(crate) fn record_cutoff(&mut self, mode: Mode, depth: u32, value: f64) {
        self.stats.cutoffs += 1;
        trace!("{mode:?} frame at depth {depth} cut off on {value}");
    }

    pub(crate) fn record_dead_end(&mut self, depth: u32) {
        self.stats.dead_ends += 1;
        trace!("no successors at depth {depth}");
    }

    fn value(
        &mut self,
        state: &S::State,
        mode: Mode,
        window: Window,
        depth: u32,
    ) -> Result<(f64, Option<S::Action>), SearchError> {
        self.stats.enter(depth);
        if self.cutoff(state, depth)? {
            return Ok((self.evaluate(state, depth)?, None));
        }
        self.expand(state, mode, window, depth)
    }

    fn expand(
        &mut self,
        state: &S::State,
        mode: Mode,
        window: Window,
        depth: u32,
    ) -> Result<(f64, Option<S::Action>), SearchError> {
        let strategy = self.strategy;
        let mut frame = Frame::new(mode, window, self.config.pruning);

        for (action, child) in strategy.successors(state) {
            let child_mode = mode.resolve(strategy.transition(&child));
            let (value, _) = self.value(&child, child_mode, frame.window(), depth + 1)?;
            if frame.absorb(action, value) == Flow::Cutoff {
                self.record_cutoff(mode, depth, value);
                break;
            }
        }

        if depth > 0 && frame.is_empty() {
            self.record_dead_end(depth);
        }
        Ok(frame.finish())
    }
}

//! Minimax player built on a rules engine.

use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, SearchConfig, TurnTransition};
use crate::rules::RulesEngine;
use crate::search::{MinimaxSearch, SearchError, SearchOutcome, Strategy};

/// Auxiliary per-player information kept alongside the search.
///
/// The game driver owns these numbers (score reported by the referee,
/// pieces still in hand, ...). The search neither reads nor writes them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    /// Running score.
    pub score: i64,

    /// Named resource counters - games define keys.
    pub counters: FxHashMap<String, i64>,
}

impl AgentInfo {
    /// Info with the given score and no counters.
    #[must_use]
    pub fn with_score(score: i64) -> Self {
        Self {
            score,
            counters: FxHashMap::default(),
        }
    }

    /// Builder-style counter initialization.
    #[must_use]
    pub fn with_counter(mut self, key: impl Into<String>, value: i64) -> Self {
        self.counters.insert(key.into(), value);
        self
    }

    /// Get a counter value with default.
    #[must_use]
    pub fn counter(&self, key: &str, default: i64) -> i64 {
        self.counters.get(key).copied().unwrap_or(default)
    }
}

/// A player that chooses actions by minimax search over a rules engine.
///
/// As a [`Strategy`]:
/// - successors: legal actions of the player to move, each applied to a
///   fresh copy of the parent state
/// - cutoff: the engine's terminal test (the horizon comes from the config)
/// - evaluate: the engine's utility for this agent's player, never negated
/// - transition: the engine's turn transition
#[derive(Clone, Debug)]
pub struct RulesAgent<E: RulesEngine> {
    engine: E,
    player: PlayerId,
    name: String,
    config: SearchConfig,
    info: AgentInfo,
    initial_info: AgentInfo,
}

impl<E: RulesEngine> RulesAgent<E> {
    /// Create an agent playing as `player`.
    pub fn new(engine: E, player: PlayerId, config: SearchConfig) -> Self {
        Self {
            engine,
            player,
            name: "Minimax Agent".to_string(),
            config,
            info: AgentInfo::default(),
            initial_info: AgentInfo::default(),
        }
    }

    /// Set a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the starting info, also used by [`reset`](Self::reset).
    pub fn with_info(mut self, info: AgentInfo) -> Self {
        self.info = info.clone();
        self.initial_info = info;
        self
    }

    /// Player this agent searches for.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rules engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Search configuration used by [`play`](Self::play).
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Current auxiliary info.
    pub fn info(&self) -> &AgentInfo {
        &self.info
    }

    /// Record a new score.
    pub fn set_score(&mut self, score: i64) {
        self.info.score = score;
    }

    /// Replace the auxiliary info with what the game driver reports.
    pub fn update_info(&mut self, info: AgentInfo) {
        self.info = info;
    }

    /// Restore the starting info, e.g. between games.
    pub fn reset(&mut self) {
        self.info = self.initial_info.clone();
    }

    /// Choose an action from `state`.
    pub fn play(&self, state: &E::State) -> Result<E::Action, SearchError> {
        self.search(state).map(|outcome| outcome.action)
    }

    /// Run a full search from `state`, keeping value and statistics.
    pub fn search(&self, state: &E::State) -> Result<SearchOutcome<E::Action>, SearchError> {
        debug!("{} ({}) is playing", self.name, self.player);
        let mut search = MinimaxSearch::new(self.config.clone());
        let outcome = search.search(state, self);
        if matches!(outcome, Err(SearchError::NoLegalMoves)) {
            warn!("{} ({}) has no legal moves", self.name, self.player);
        }
        outcome
    }
}

impl<E: RulesEngine> Strategy for RulesAgent<E> {
    type State = E::State;
    type Action = E::Action;

    fn successors<'a>(
        &'a self,
        state: &'a E::State,
    ) -> impl Iterator<Item = (E::Action, E::State)> {
        let engine = &self.engine;
        let mover = engine.next_mover(state);
        engine
            .legal_actions(state, mover)
            .into_iter()
            .map(move |action| {
                let next = engine.successor(state, &action, mover);
                (action, next)
            })
    }

    fn cutoff(&self, state: &E::State, _depth: u32) -> bool {
        self.engine.is_terminal(state)
    }

    fn evaluate(&self, state: &E::State) -> f64 {
        self.engine.utility(state, self.player)
    }

    fn transition(&self, state: &E::State) -> TurnTransition {
        self.engine.turn_transition(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Horizon;
    use crate::games::tree::{GameTree, TreeGame};

    fn p0() -> PlayerId {
        PlayerId::new(0)
    }

    fn fan() -> (TreeGame, crate::games::tree::TreeState) {
        TreeGame::new(GameTree::branch(
            p0(),
            vec![
                ("A", GameTree::leaf(5.0)),
                ("B", GameTree::leaf(9.0)),
                ("C", GameTree::leaf(3.0)),
            ],
        ))
    }

    #[test]
    fn test_successors_follow_legal_order() {
        let (game, root) = fan();
        let agent = RulesAgent::new(game, p0(), SearchConfig::new(Horizon::new(0)));

        let actions: Vec<_> = agent.successors(&root).map(|(a, _)| a).collect();
        assert_eq!(actions, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_evaluate_uses_own_perspective() {
        let (game, root) = fan();
        let config = SearchConfig::new(Horizon::new(0));
        let alice = RulesAgent::new(game.clone(), p0(), config.clone());
        let bob = RulesAgent::new(game, p0().opponent(), config);

        let (_, leaf) = alice.successors(&root).nth(1).unwrap();
        assert_eq!(alice.evaluate(&leaf), 9.0);
        assert_eq!(bob.evaluate(&leaf), -9.0);
    }

    #[test]
    fn test_play_picks_best() {
        let (game, root) = fan();
        let agent = RulesAgent::new(game, p0(), SearchConfig::new(Horizon::new(0)));
        assert_eq!(agent.play(&root).unwrap(), "B");
    }

    #[test]
    fn test_info_update_and_reset() {
        let (game, _) = fan();
        let start = AgentInfo::with_score(0).with_counter("in_hand", 12);
        let mut agent = RulesAgent::new(game, p0(), SearchConfig::new(Horizon::new(1)))
            .with_name("Basic")
            .with_info(start.clone());

        agent.set_score(4);
        assert_eq!(agent.info().score, 4);

        agent.update_info(AgentInfo::with_score(7).with_counter("in_hand", 3));
        assert_eq!(agent.info().counter("in_hand", 0), 3);

        agent.reset();
        assert_eq!(agent.info(), &start);
        assert_eq!(agent.name(), "Basic");
    }

    #[test]
    fn test_info_serialization() {
        let info = AgentInfo::with_score(2).with_counter("in_hand", 5);
        let json = serde_json::to_string(&info).unwrap();
        let deserialized: AgentInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, deserialized);
    }
}

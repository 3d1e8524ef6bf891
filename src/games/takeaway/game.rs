//! Take-away game implementation.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::rules::RulesEngine;

/// Take this many stones from the pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Take(pub u32);

/// Take-away position.
///
/// History is an `im::Vector`, so cloning a position per branch is O(1).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TakeawayState {
    /// Stones left.
    pub pile: u32,
    /// Points per player.
    pub scores: PlayerMap<i64>,
    /// Player whose move produced this position.
    pub last_mover: PlayerId,
    /// Player to move.
    pub next_mover: PlayerId,
    /// Moves played so far.
    pub history: Vector<(PlayerId, Take)>,
}

/// Take-away rules.
#[derive(Clone, Debug)]
pub struct Takeaway {
    max_take: u32,
    extra_turn_on: Option<u32>,
    last_stone_bonus: i64,
}

/// Builder for creating a Takeaway game.
pub struct TakeawayBuilder {
    pile: u32,
    max_take: u32,
    extra_turn_on: Option<u32>,
    last_stone_bonus: i64,
    first_player: PlayerId,
}

impl Default for TakeawayBuilder {
    fn default() -> Self {
        Self {
            pile: 10,
            max_take: 3,
            extra_turn_on: None,
            last_stone_bonus: 3,
            first_player: PlayerId::new(0),
        }
    }
}

impl TakeawayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pile(mut self, stones: u32) -> Self {
        self.pile = stones;
        self
    }

    pub fn max_take(mut self, count: u32) -> Self {
        assert!(count >= 1, "Must allow taking at least 1 stone");
        self.max_take = count;
        self
    }

    /// Taking exactly `count` stones (without emptying the pile) grants another move.
    pub fn extra_turn_on(mut self, count: u32) -> Self {
        self.extra_turn_on = Some(count);
        self
    }

    pub fn last_stone_bonus(mut self, bonus: i64) -> Self {
        self.last_stone_bonus = bonus;
        self
    }

    pub fn first_player(mut self, player: PlayerId) -> Self {
        assert!(player.index() < 2, "Take-away is a two-player game");
        self.first_player = player;
        self
    }

    /// Build the game and initial state.
    pub fn build(self) -> (Takeaway, TakeawayState) {
        let game = Takeaway {
            max_take: self.max_take,
            extra_turn_on: self.extra_turn_on,
            last_stone_bonus: self.last_stone_bonus,
        };
        let state = TakeawayState {
            pile: self.pile,
            scores: PlayerMap::with_value(2, 0),
            last_mover: self.first_player.opponent(),
            next_mover: self.first_player,
            history: Vector::new(),
        };
        (game, state)
    }
}

impl RulesEngine for Takeaway {
    type State = TakeawayState;
    type Action = Take;

    fn legal_actions(&self, state: &TakeawayState, _player: PlayerId) -> Vec<Take> {
        (1..=self.max_take.min(state.pile)).map(Take).collect()
    }

    fn apply_action(&self, state: &mut TakeawayState, action: &Take, player: PlayerId) {
        let Take(count) = *action;
        if count == 0 || count > state.pile || count > self.max_take {
            return;
        }

        state.pile -= count;
        state.scores[player] += i64::from(count);
        if state.pile == 0 {
            state.scores[player] += self.last_stone_bonus;
        }

        let again = state.pile > 0 && self.extra_turn_on == Some(count);
        state.last_mover = player;
        state.next_mover = if again { player } else { player.opponent() };
        state.history.push_back((player, *action));
    }

    fn is_terminal(&self, state: &TakeawayState) -> bool {
        state.pile == 0
    }

    fn utility(&self, state: &TakeawayState, player: PlayerId) -> f64 {
        (state.scores[player] - state.scores[player.opponent()]) as f64
    }

    fn last_mover(&self, state: &TakeawayState) -> PlayerId {
        state.last_mover
    }

    fn next_mover(&self, state: &TakeawayState) -> PlayerId {
        state.next_mover
    }
}

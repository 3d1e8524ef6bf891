//! Agents playing the take-away game.

use rust_minimax::agent::{AgentInfo, RulesAgent};
use rust_minimax::core::{Horizon, PlayerId, SearchConfig};
use rust_minimax::games::takeaway::{Take, Takeaway, TakeawayBuilder, TakeawayState};
use rust_minimax::rules::RulesEngine;

fn p0() -> PlayerId {
    PlayerId::new(0)
}

fn agent(game: &Takeaway, player: PlayerId, depth: u32, pruning: bool) -> RulesAgent<Takeaway> {
    RulesAgent::new(game.clone(), player, SearchConfig::new(Horizon::new(depth)).with_pruning(pruning))
}

/// Play until the pile is empty, each player using its own agent.
fn play_out(game: &Takeaway, mut state: TakeawayState, agents: &[RulesAgent<Takeaway>; 2]) -> TakeawayState {
    while !game.is_terminal(&state) {
        let mover = game.next_mover(&state);
        let action = agents[mover.index()].play(&state).unwrap();
        state = game.successor(&state, &action, mover);
    }
    state
}

// =============================================================================
// Lookahead
// =============================================================================

#[test]
fn test_greedy_at_horizon_zero() {
    let (game, state) = TakeawayBuilder::new().pile(4).max_take(2).last_stone_bonus(3).build();

    let outcome = agent(&game, p0(), 0, true).search(&state).unwrap();
    assert_eq!(outcome.action, Take(2));
    assert_eq!(outcome.value, 2.0);
}

#[test]
fn test_full_depth_avoids_handing_over_last_stone() {
    // Taking 2 leaves a pile of 2 that the opponent clears for 5 points.
    let (game, state) = TakeawayBuilder::new().pile(4).max_take(2).last_stone_bonus(3).build();

    for pruning in [true, false] {
        let outcome = agent(&game, p0(), 10, pruning).search(&state).unwrap();
        assert_eq!(outcome.action, Take(1));
        assert_eq!(outcome.value, 3.0);
    }
}

#[test]
fn test_single_option() {
    let (game, state) = TakeawayBuilder::new().pile(1).build();

    for pruning in [true, false] {
        assert_eq!(agent(&game, p0(), 3, pruning).play(&state).unwrap(), Take(1));
    }
}

#[test]
fn test_extra_turn_keeps_maximizing() {
    // Taking 1 keeps the move, so Alice can collect the whole pile herself.
    let (game, state) = TakeawayBuilder::new()
        .pile(3)
        .max_take(2)
        .extra_turn_on(1)
        .last_stone_bonus(3)
        .build();

    let outcome = agent(&game, p0(), 10, true).search(&state).unwrap();
    assert_eq!(outcome.action, Take(1));
    assert_eq!(outcome.value, 6.0);
}

// =============================================================================
// Self-play
// =============================================================================

#[test]
fn test_optimal_self_play_reaches_search_value() {
    let (game, state) = TakeawayBuilder::new().pile(4).max_take(2).last_stone_bonus(3).build();
    let agents = [agent(&game, p0(), 10, true), agent(&game, p0().opponent(), 10, true)];

    let expected = agents[0].search(&state).unwrap().value;
    let end = play_out(&game, state, &agents);

    assert_eq!(game.utility(&end, p0()), expected);
}

#[test]
fn test_self_play_records_history() {
    let (game, state) = TakeawayBuilder::new().pile(7).max_take(3).extra_turn_on(2).build();
    let agents = [agent(&game, p0(), 4, true), agent(&game, p0().opponent(), 4, true)];

    let end = play_out(&game, state, &agents);

    let taken: u32 = end.history.iter().map(|(_, Take(n))| n).sum();
    assert_eq!(taken, 7);
    assert_eq!(end.pile, 0);
}

#[test]
fn test_agent_info_is_driver_owned() {
    let (game, state) = TakeawayBuilder::new().pile(5).build();
    let mut alice = agent(&game, p0(), 2, true).with_info(AgentInfo::with_score(0));

    let action = alice.play(&state).unwrap();
    let next = game.successor(&state, &action, p0());
    assert_eq!(alice.info().score, 0);

    alice.set_score(next.scores[p0()]);
    assert_eq!(alice.info().score, i64::from(action.0));

    alice.reset();
    assert_eq!(alice.info().score, 0);
}

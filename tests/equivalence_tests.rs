//! Property tests over random game trees.

use proptest::prelude::*;

use rust_minimax::agent::RulesAgent;
use rust_minimax::core::{GameRng, Horizon, SearchConfig};
use rust_minimax::games::tree::{GameTree, TreeGame, TreeState};
use rust_minimax::rules::RulesEngine;
use rust_minimax::search::{MinimaxSearch, SearchOutcome};

fn random_game(seed: u64, depth: u32, width: usize) -> (RulesAgent<TreeGame>, TreeState) {
    let tree = GameTree::random(&mut GameRng::new(seed), depth, width);
    let (game, root) = TreeGame::new(tree);
    let player = game.next_mover(&root);
    let agent = RulesAgent::new(game, player, SearchConfig::new(Horizon::new(0)));
    (agent, root)
}

fn config(horizon: u32, pruning: bool) -> SearchConfig {
    SearchConfig::new(Horizon::new(horizon)).with_pruning(pruning)
}

fn recursive(
    agent: &RulesAgent<TreeGame>,
    root: &TreeState,
    config: SearchConfig,
) -> SearchOutcome<&'static str> {
    MinimaxSearch::new(config).search(root, agent).unwrap()
}

fn iterative(
    agent: &RulesAgent<TreeGame>,
    root: &TreeState,
    config: SearchConfig,
) -> SearchOutcome<&'static str> {
    MinimaxSearch::new(config).search_iterative(root, agent).unwrap()
}

proptest! {
    #[test]
    fn prop_pruning_preserves_value(
        seed in any::<u64>(),
        depth in 1u32..6,
        width in 1usize..5,
        horizon in 0u32..6,
    ) {
        let (agent, root) = random_game(seed, depth, width);

        let pruned = recursive(&agent, &root, config(horizon, true));
        let full = recursive(&agent, &root, config(horizon, false));

        prop_assert_eq!(pruned.value, full.value);
        prop_assert!(pruned.stats.evaluations <= full.stats.evaluations);
        prop_assert!(pruned.stats.frames <= full.stats.frames);
        prop_assert_eq!(full.stats.cutoffs, 0);
    }

    #[test]
    fn prop_pruned_action_reaches_value(
        seed in any::<u64>(),
        depth in 1u32..5,
        width in 1usize..5,
    ) {
        // The chosen root move must itself be worth the root value when
        // searched exhaustively from the resulting position.
        let (agent, root) = random_game(seed, depth, width);
        let pruned = recursive(&agent, &root, config(8, true));

        let engine = agent.engine();
        let child = engine.successor(&root, &pruned.action, agent.player());
        let child_value = if engine.is_terminal(&child) {
            engine.utility(&child, agent.player())
        } else if engine.next_mover(&child) == agent.player() {
            recursive(&agent, &child, config(8, false)).value
        } else {
            let opponent = RulesAgent::new(
                engine.clone(),
                agent.player().opponent(),
                config(8, false),
            );
            -recursive(&opponent, &child, config(8, false)).value
        };

        prop_assert_eq!(child_value, pruned.value);
    }

    #[test]
    fn prop_iterative_matches_recursive(
        seed in any::<u64>(),
        depth in 1u32..6,
        width in 1usize..5,
        horizon in 0u32..6,
        pruning in any::<bool>(),
    ) {
        let (agent, root) = random_game(seed, depth, width);

        let a = recursive(&agent, &root, config(horizon, pruning));
        let b = iterative(&agent, &root, config(horizon, pruning));

        prop_assert_eq!(a.action, b.action);
        prop_assert_eq!(a.value, b.value);
        prop_assert_eq!(a.stats.counters(), b.stats.counters());
    }

    #[test]
    fn prop_exhaustive_action_is_first_best(
        seed in any::<u64>(),
        width in 1usize..6,
    ) {
        // Horizon 0: the exhaustive answer is the first maximum of the
        // static values of the root's successors.
        let (agent, root) = random_game(seed, 2, width);
        let outcome = recursive(&agent, &root, config(0, false));

        let engine = agent.engine();
        let mover = engine.next_mover(&root);
        let mut best: Option<(&'static str, f64)> = None;
        for action in engine.legal_actions(&root, mover) {
            let child = engine.successor(&root, &action, mover);
            let value = engine.utility(&child, agent.player());
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((action, value));
            }
        }

        prop_assert_eq!(Some((outcome.action, outcome.value)), best);
    }
}

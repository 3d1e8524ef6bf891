//! Explicit game trees.
//!
//! A `GameTree` spells out every position: branches name the player to move
//! and their labeled children, leaves carry a final value. `TreeGame`
//! flattens the tree into an arena and plays it through [`RulesEngine`], so
//! search scenarios can be written down exactly.
//!
//! Values are from Player 0's point of view; Player 1 sees them negated.
//!
//! ```
//! use rust_minimax::core::PlayerId;
//! use rust_minimax::games::tree::{GameTree, TreeGame};
//! use rust_minimax::rules::RulesEngine;
//!
//! let alice = PlayerId::new(0);
//! let (game, root) = TreeGame::new(GameTree::branch(alice, vec![
//!     ("left", GameTree::leaf(1.0)),
//!     ("right", GameTree::leaf(-1.0)),
//! ]));
//!
//! assert_eq!(game.legal_actions(&root, alice), vec!["left", "right"]);
//! let right = game.successor(&root, &"right", alice);
//! assert!(game.is_terminal(&right));
//! assert_eq!(game.utility(&right, alice.opponent()), 1.0);
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{GameRng, PlayerId};
use crate::rules::RulesEngine;

/// Tree description: nested leaves and branches.
#[derive(Clone, Debug, PartialEq)]
pub enum GameTree {
    /// Terminal position.
    Leaf { value: f64 },
    /// Position with moves for `to_move`.
    Branch {
        to_move: PlayerId,
        /// Static estimate used when the horizon stops the search here.
        estimate: f64,
        children: Vec<(&'static str, GameTree)>,
    },
}

impl GameTree {
    /// Terminal position worth `value` to Player 0.
    #[must_use]
    pub fn leaf(value: f64) -> Self {
        GameTree::Leaf { value }
    }

    /// Position where `to_move` chooses among `children`, in order.
    #[must_use]
    pub fn branch(to_move: PlayerId, children: Vec<(&'static str, GameTree)>) -> Self {
        GameTree::Branch {
            to_move,
            estimate: 0.0,
            children,
        }
    }

    /// Set the static estimate of a branch. Leaves are unchanged.
    #[must_use]
    pub fn with_estimate(mut self, value: f64) -> Self {
        if let GameTree::Branch { estimate, .. } = &mut self {
            *estimate = value;
        }
        self
    }

    /// Grow a random tree.
    ///
    /// Every branch has `1..=max_branching` children and a random player to
    /// move, so consecutive moves by the same player are common. Leaves and
    /// estimates are whole numbers in `-20..20`. Subtrees draw from forked
    /// streams, so the same seed always yields the same tree.
    ///
    /// Moves are labeled `"a"`, `"b"`, ... in order, so `max_branching` may
    /// not exceed the 26 available labels.
    pub fn random(rng: &mut GameRng, depth: u32, max_branching: usize) -> Self {
        assert!(
            max_branching <= MOVE_LABELS.len(),
            "At most {} moves per position",
            MOVE_LABELS.len()
        );
        if depth == 0 {
            return GameTree::leaf(f64::from(rng.gen_range(-20..20)));
        }
        let to_move = PlayerId::new(u8::from(rng.gen_bool(0.5)));
        let estimate = f64::from(rng.gen_range(-20..20));
        let width = rng.gen_range_usize(1..max_branching.max(1) + 1);

        let children = (0..width)
            .map(|i| {
                let mut child_rng = rng.fork();
                // Some branches end early
                let child_depth = if child_rng.gen_bool(0.15) { 0 } else { depth - 1 };
                (MOVE_LABELS[i], GameTree::random(&mut child_rng, child_depth, max_branching))
            })
            .collect();

        GameTree::Branch {
            to_move,
            estimate,
            children,
        }
    }
}

const MOVE_LABELS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Arena index of a tree node.
pub type NodeIx = usize;

#[derive(Clone, Debug)]
struct Node {
    label: &'static str,
    to_move: Option<PlayerId>,
    value: f64,
    children: SmallVec<[NodeIx; 4]>,
}

/// Position in a `TreeGame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeState {
    /// Current node.
    pub node: NodeIx,
    /// Player whose move led here.
    pub last_mover: PlayerId,
    /// Player to move here.
    pub next_mover: PlayerId,
}

/// Rules engine over a flattened `GameTree`.
#[derive(Clone, Debug)]
pub struct TreeGame {
    nodes: Vec<Node>,
    paths: FxHashMap<String, NodeIx>,
}

impl TreeGame {
    /// Flatten `tree` and return the game with its root state.
    ///
    /// The root counts as produced by the root mover's opponent.
    ///
    /// # Panics
    ///
    /// If two children of the same branch share a label.
    pub fn new(tree: GameTree) -> (Self, TreeState) {
        let mut game = Self {
            nodes: Vec::new(),
            paths: FxHashMap::default(),
        };
        let root = game.insert("", String::new(), tree);
        let next_mover = game.nodes[root].to_move.unwrap_or(PlayerId::new(0));
        let state = TreeState {
            node: root,
            last_mover: next_mover.opponent(),
            next_mover,
        };
        (game, state)
    }

    fn insert(&mut self, label: &'static str, path: String, tree: GameTree) -> NodeIx {
        let ix = self.nodes.len();
        self.paths.insert(path.clone(), ix);
        match tree {
            GameTree::Leaf { value } => {
                self.nodes.push(Node {
                    label,
                    to_move: None,
                    value,
                    children: SmallVec::new(),
                });
            }
            GameTree::Branch {
                to_move,
                estimate,
                children,
            } => {
                self.nodes.push(Node {
                    label,
                    to_move: Some(to_move),
                    value: estimate,
                    children: SmallVec::new(),
                });
                for (n, (child_label, _)) in children.iter().enumerate() {
                    assert!(
                        children[..n].iter().all(|(other, _)| other != child_label),
                        "Duplicate move {child_label:?} at {path:?}"
                    );
                }
                for (child_label, child) in children {
                    let child_path = if path.is_empty() {
                        child_label.to_string()
                    } else {
                        format!("{path}/{child_label}")
                    };
                    let child_ix = self.insert(child_label, child_path, child);
                    self.nodes[ix].children.push(child_ix);
                }
            }
        }
        ix
    }

    /// Number of positions in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no positions. Never true for a built game.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by its move path, e.g. `"A/b"`. The root is `""`.
    #[must_use]
    pub fn node(&self, path: &str) -> Option<NodeIx> {
        self.paths.get(path).copied()
    }

    /// Label of the move leading to `node`.
    #[must_use]
    pub fn label(&self, node: NodeIx) -> &'static str {
        self.nodes[node].label
    }
}

impl RulesEngine for TreeGame {
    type State = TreeState;
    type Action = &'static str;

    fn legal_actions(&self, state: &TreeState, _player: PlayerId) -> Vec<&'static str> {
        self.nodes[state.node]
            .children
            .iter()
            .map(|&child| self.nodes[child].label)
            .collect()
    }

    fn apply_action(&self, state: &mut TreeState, action: &&'static str, player: PlayerId) {
        let Some(&child) = self.nodes[state.node]
            .children
            .iter()
            .find(|&&child| self.nodes[child].label == *action)
        else {
            return;
        };
        state.node = child;
        state.last_mover = player;
        state.next_mover = self.nodes[child].to_move.unwrap_or(player.opponent());
    }

    fn is_terminal(&self, state: &TreeState) -> bool {
        self.nodes[state.node].to_move.is_none()
    }

    fn utility(&self, state: &TreeState, player: PlayerId) -> f64 {
        let value = self.nodes[state.node].value;
        if player == PlayerId::new(0) {
            value
        } else {
            -value
        }
    }

    fn last_mover(&self, state: &TreeState) -> PlayerId {
        state.last_mover
    }

    fn next_mover(&self, state: &TreeState) -> PlayerId {
        state.next_mover
    }
}

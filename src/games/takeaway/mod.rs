//! Take-away game for exercising the engine.
//!
//! A minimal two-player game with variable-length turns:
//! - A shared pile of stones; on your move take 1 to `max_take` stones
//! - Every stone taken scores one point, the last stone scores a bonus
//! - Optionally, taking exactly `extra_turn_on` stones grants another move
//! - The game ends when the pile is empty; utility is the score difference

mod game;

pub use game::{Take, Takeaway, TakeawayBuilder, TakeawayState};

//! Reference games used to exercise the search engine.
//!
//! - `tree`: explicit game trees with labeled moves, for scripted scenarios
//!   and random trees
//! - `takeaway`: a take-away game where some moves grant another move

pub mod takeaway;
pub mod tree;

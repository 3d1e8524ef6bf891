//! Search-driven players.
//!
//! `RulesAgent` turns any [`RulesEngine`](crate::rules::RulesEngine) into a
//! [`Strategy`](crate::search::Strategy) for one participant and plays by
//! running a minimax search from the current state.

pub mod rules_agent;

pub use rules_agent::{AgentInfo, RulesAgent};

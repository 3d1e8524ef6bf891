//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - Terminal detection and utilities
//! - Who just moved and who moves next
//!
//! The search engine calls into `RulesEngine` (through a strategy) but never
//! interprets game-specific concepts directly.

pub mod engine;

pub use engine::RulesEngine;

//! Top-level module for the Markov-chain generation system.
//!
//! This crate provides a first-order, word-level Markov generator,
//! including:
//! - Statistical tables built from a corpus (`ChainModel`)
//! - Uniform positional random selection (`RandomSelector`)
//! - Generation configuration (`MarkovConfig`)
//! - A high-level generation interface (`MarkovChain`)

/// Construction and generation options.
///
/// Plain data with serde support and defaults for every field except
/// the corpus itself.
pub mod config;

/// High-level interface for generating sentences from a corpus.
///
/// Exposes model construction, bounded-retry generation, and the
/// per-call minimum-length override.
pub mod generator;

/// Internal statistical model built once from the corpus.
///
/// Tracks word transitions, terminal words, and start words.
/// This module is not exposed publicly.
mod chain_model;

/// Internal uniform random selection over a slice.
///
/// Backed by an injected, optionally seeded RNG.
/// This module is not exposed publicly.
mod selector;

/// Internal lowercase-key newtype.
///
/// Keeps lookup keys type-distinct from emitted surface words.
/// This module is not exposed publicly.
mod word;

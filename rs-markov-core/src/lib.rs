//! First-order Markov-chain text generation library.
//!
//! This crate builds a word-transition model from a corpus of example
//! sentences and produces new sentences by randomly walking that model:
//! - Word-level transition tables with frequency encoded by repetition
//! - Surface casing preserved in output, lowercase keys for lookups
//! - Bounded retries against too-short or verbatim-corpus chains
//! - Optional seeding for deterministic generation
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Typed errors shared by model construction and generation.
pub mod error;

/// Core model and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal model representations private.
pub mod model;

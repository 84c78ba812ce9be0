use serde::{Deserialize, Serialize};

/// Minimum number of words in a generated sentence when unset.
pub const DEFAULT_MIN_LENGTH: usize = 10;

/// Number of rejected walks tolerated before generation gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Options controlling model construction and generation.
///
/// Every field except `input` has a default, and deserialization falls
/// back to the defaults for missing fields, so a partial JSON or TOML
/// document is a valid configuration.
///
/// # Invariants
/// - `input` must be non-empty (checked at construction)
/// - `min_length` and `max_attempts` must be at least 1 (checked at
///   construction)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct MarkovConfig {
	/// Example sentences the model is built from. Required, non-empty.
	pub input: Vec<String>,

	/// Minimum number of words in a generated sentence.
	pub min_length: usize,

	/// Words never allowed to end a chain, compared case-insensitively.
	pub banned_terminals: Vec<String>,

	/// How many rejected walks to tolerate before failing.
	pub max_attempts: usize,

	/// Fixed RNG seed; `None` draws from OS entropy.
	pub seed: Option<u64>,
}

impl Default for MarkovConfig {
	fn default() -> Self {
		Self {
			input: Vec::new(),
			min_length: DEFAULT_MIN_LENGTH,
			banned_terminals: Vec::new(),
			max_attempts: DEFAULT_MAX_ATTEMPTS,
			seed: None,
		}
	}
}

impl MarkovConfig {
	/// Creates a configuration for the given corpus, every other field
	/// at its default.
	pub fn new(input: Vec<String>) -> Self {
		Self { input, ..Self::default() }
	}
}

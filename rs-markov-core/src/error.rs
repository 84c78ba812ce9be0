use thiserror::Error;

/// Errors raised by model construction and sentence generation.
///
/// Construction errors (`MissingInput`, `InvalidConfiguration`) are
/// raised synchronously by `MarkovChain::new` and never recovered
/// internally. Generation errors are raised by `generate` and
/// `generate_with_length`.
#[derive(Error, Debug)]
pub enum MarkovError {
	/// The input corpus was absent or had zero sentences.
	#[error("input was empty")]
	MissingInput,

	/// The model has no start words, so no walk can begin.
	#[error("model has no start words")]
	EmptyModel,

	/// No chain satisfied the length and novelty constraints within
	/// the attempt budget.
	#[error("no acceptable chain after {attempts} attempts")]
	GenerationExhausted {
		/// Number of walks attempted before giving up.
		attempts: usize,
	},

	/// A configuration value was out of range.
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, MarkovError>;

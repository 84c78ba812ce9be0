use tracing::trace;

use super::chain_model::ChainModel;
use super::config::MarkovConfig;
use super::selector::RandomSelector;
use super::word::NormalizedWord;
use crate::error::{MarkovError, Result};

/// High-level Markov-chain sentence generator.
///
/// # Responsibilities
/// - Validate the configuration and build the `ChainModel` once
/// - Walk the model from a random start word until a terminal condition
/// - Reject chains that are too short or reproduce a corpus sentence,
///   retrying up to the configured attempt budget
///
/// The model is read-only after construction; `generate` takes
/// `&mut self` only for the RNG state.
pub struct MarkovChain {
	model: ChainModel,
	selector: RandomSelector,
	min_length: usize,
	max_attempts: usize,
}

impl MarkovChain {
	/// Builds a generator from the given configuration.
	///
	/// # Errors
	/// - `MissingInput` if `input` has zero sentences
	/// - `InvalidConfiguration` if `min_length` or `max_attempts` is zero
	pub fn new(config: MarkovConfig) -> Result<Self> {
		if config.min_length == 0 {
			return Err(MarkovError::InvalidConfiguration(
				"min_length must be at least 1".to_owned(),
			));
		}
		if config.max_attempts == 0 {
			return Err(MarkovError::InvalidConfiguration(
				"max_attempts must be at least 1".to_owned(),
			));
		}

		let selector = match config.seed {
			Some(seed) => RandomSelector::from_seed(seed),
			None => RandomSelector::from_os_entropy(),
		};
		let model = ChainModel::build(config.input, &config.banned_terminals)?;

		Ok(Self {
			model,
			selector,
			min_length: config.min_length,
			max_attempts: config.max_attempts,
		})
	}

	/// Generates a sentence using the configured minimum length.
	///
	/// # Errors
	/// Same as [`MarkovChain::generate_with_length`].
	pub fn generate(&mut self) -> Result<String> {
		self.generate_with_length(self.min_length)
	}

	/// Generates a sentence of at least `min_length` words, superseding
	/// the configured minimum for this call.
	///
	/// Walks the model up to `max_attempts` times; a walk is rejected
	/// when its chain is shorter than `min_length` or reproduces a
	/// corpus sentence verbatim.
	///
	/// # Errors
	/// - `InvalidConfiguration` if `min_length` is zero
	/// - `EmptyModel` if the corpus produced no start words
	/// - `GenerationExhausted` if every attempt was rejected
	pub fn generate_with_length(&mut self, min_length: usize) -> Result<String> {
		if min_length == 0 {
			return Err(MarkovError::InvalidConfiguration(
				"min_length must be at least 1".to_owned(),
			));
		}
		if self.model.start_words().is_empty() {
			return Err(MarkovError::EmptyModel);
		}

		for attempt in 1..=self.max_attempts {
			if let Some(sentence) = self.walk(min_length) {
				return Ok(sentence);
			}
			trace!(attempt, "chain rejected, retrying");
		}

		Err(MarkovError::GenerationExhausted { attempts: self.max_attempts })
	}

	/// Performs one walk; `None` means the chain was rejected.
	fn walk(&mut self, min_length: usize) -> Option<String> {
		let mut word = self.selector.pick(self.model.start_words())?.clone();
		let mut chain = vec![word.clone()];

		// The walk stops on a dead end regardless of length, or on a
		// known terminal once the chain is long enough. The terminal
		// lookup is exact-case; the banned lookup is not.
		while let Some(successors) = self.model.successors(&NormalizedWord::new(&word)) {
			word = self.selector.pick(successors)?.clone();
			chain.push(word.clone());
			if chain.len() > min_length
				&& self.model.is_terminal(&word)
				&& !self.model.is_banned(&NormalizedWord::new(&word))
			{
				break;
			}
		}

		let sentence = chain.join(" ");
		if chain.len() < min_length || self.model.is_verbatim(&sentence) {
			return None;
		}
		Some(sentence)
	}
}

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::word::NormalizedWord;
use crate::error::MarkovError;

/// Statistical tables built from the input corpus.
///
/// A `ChainModel` is the result of a single synchronous pass over the
/// corpus and is read-only afterwards.
///
/// ## Responsibilities
/// - Record which word follows which, keyed by lowercase form
/// - Record how often each word ended a sentence, in original casing
/// - Record each sentence's first word, deduplicated case-insensitively
/// - Reject generated chains that reproduce a corpus sentence verbatim
///
/// ## Invariants
/// - Transition keys and banned terminals are always normalized
/// - Terminal and start-word entries are always surface-form
/// - Successor lists are non-empty and keep duplicates, so successor
///   frequency is encoded by repetition
/// - Neither table carries an empty-string key
pub struct ChainModel {
	/// Sentences the model was built from, kept to reject verbatim output.
	corpus: Vec<String>,
	/// Words observed immediately after each word in some sentence.
	/// Example: "test" => ["sentence", "sentence", "of"]
	transitions: HashMap<NormalizedWord, Vec<String>>,
	/// How many sentences ended with each word, keyed in original casing.
	terminals: HashMap<String, usize>,
	/// First word of each sentence, first-seen casing kept.
	start_words: Vec<String>,
	/// Words that may never end a generated chain.
	banned_terminals: HashSet<NormalizedWord>,
}

impl ChainModel {
	/// Builds the model from a corpus and an optional banned-terminal list.
	///
	/// Each sentence is split on single spaces, so consecutive spaces
	/// yield empty tokens; empty tokens never become start words or
	/// transition targets, and the empty-string key is dropped from the
	/// tables after construction.
	///
	/// # Errors
	/// Returns `MissingInput` if the corpus has zero sentences.
	pub fn build(corpus: Vec<String>, banned_terminals: &[String]) -> Result<Self, MarkovError> {
		if corpus.is_empty() {
			return Err(MarkovError::MissingInput);
		}

		let mut transitions: HashMap<NormalizedWord, Vec<String>> = HashMap::new();
		let mut terminals: HashMap<String, usize> = HashMap::new();
		let mut start_words: Vec<String> = Vec::new();
		let mut seen_starts: HashSet<NormalizedWord> = HashSet::new();

		for sentence in &corpus {
			// split(' ') always yields at least one token
			let words: Vec<&str> = sentence.split(' ').collect();
			let first = words[0];
			let last = words[words.len() - 1];

			*terminals.entry(last.to_owned()).or_insert(0) += 1;

			// First-seen casing wins; later casings of the same word
			// neither add an entry nor alter the stored one.
			if !first.is_empty() && seen_starts.insert(NormalizedWord::new(first)) {
				start_words.push(first.to_owned());
			}

			// The last word of a sentence contributes no outgoing edge,
			// and neither does a pair with an empty successor.
			for pair in words.windows(2) {
				let (current, next) = (pair[0], pair[1]);
				if next.is_empty() {
					continue;
				}
				transitions
					.entry(NormalizedWord::new(current))
					.or_default()
					.push(next.to_owned());
			}
		}

		// Drop degenerate entries: zero counts and the empty-string key.
		terminals.retain(|word, count| *count > 0 && !word.is_empty());
		transitions.remove(&NormalizedWord::new(""));

		let banned_terminals = banned_terminals
			.iter()
			.map(|word| NormalizedWord::new(word))
			.collect();

		debug!(
			sentences = corpus.len(),
			transitions = transitions.len(),
			start_words = start_words.len(),
			terminals = terminals.len(),
			"transition model built"
		);

		Ok(Self { corpus, transitions, terminals, start_words, banned_terminals })
	}

	/// Returns the surface words observed after `word`, or `None` for a
	/// dead end.
	pub fn successors(&self, word: &NormalizedWord) -> Option<&[String]> {
		self.transitions.get(word).map(Vec::as_slice)
	}

	/// Whether `word` ended at least one corpus sentence.
	///
	/// The lookup is exact-case on purpose: terminals are keyed in their
	/// original sentence-final casing, unlike every other table.
	pub fn is_terminal(&self, word: &str) -> bool {
		self.terminals.contains_key(word)
	}

	/// Whether `word` is vetoed from ending a chain.
	pub fn is_banned(&self, word: &NormalizedWord) -> bool {
		self.banned_terminals.contains(word)
	}

	/// First words of the corpus sentences, in first-seen order.
	pub fn start_words(&self) -> &[String] {
		&self.start_words
	}

	/// Whether `sentence` reproduces a corpus sentence exactly.
	pub fn is_verbatim(&self, sentence: &str) -> bool {
		self.corpus.iter().any(|s| s == sentence)
	}
}

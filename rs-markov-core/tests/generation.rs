//! End-to-end generation tests against the public API.

use proptest::prelude::*;
use rs_markov_core::error::MarkovError;
use rs_markov_core::model::config::MarkovConfig;
use rs_markov_core::model::generator::MarkovChain;

const TEST_INPUT: &[&str] = &[
	"Test sentence number 1",
	"This is another test sentence",
	"I'm test sentence number two!",
	"I can't believe that this is another test",
	"TEST of insensitive",
];

fn corpus(sentences: &[&str]) -> Vec<String> {
	sentences.iter().map(|s| (*s).to_owned()).collect()
}

fn seeded(sentences: &[&str], min_length: usize, seed: u64) -> MarkovChain {
	let mut config = MarkovConfig::new(corpus(sentences));
	config.min_length = min_length;
	config.seed = Some(seed);
	MarkovChain::new(config).expect("valid configuration")
}

#[test]
fn fails_without_input() {
	let result = MarkovChain::new(MarkovConfig::default());
	assert!(matches!(result, Err(MarkovError::MissingInput)));
}

#[test]
fn returns_a_nonempty_sentence() {
	let mut chain = seeded(TEST_INPUT, 2, 1);
	let sentence = chain.generate().expect("generation should succeed");
	assert!(!sentence.is_empty());
}

#[test]
fn honors_configured_min_length() {
	let mut chain = seeded(TEST_INPUT, 3, 2);
	let sentence = chain.generate().expect("generation should succeed");
	assert!(sentence.split(' ').count() >= 3);
}

#[test]
fn default_min_length_is_ten() {
	let mut config = MarkovConfig::new(corpus(TEST_INPUT));
	config.seed = Some(3);
	let mut chain = MarkovChain::new(config).expect("valid configuration");
	let sentence = chain.generate().expect("generation should succeed");
	assert!(sentence.split(' ').count() >= 10);
}

#[test]
fn per_call_override_supersedes_configured_value() {
	let mut chain = seeded(TEST_INPUT, 1, 4);
	let sentence = chain
		.generate_with_length(5)
		.expect("generation should succeed");
	assert!(sentence.split(' ').count() >= 5);
}

#[test]
fn never_reproduces_a_corpus_sentence() {
	for seed in 0..20 {
		let mut chain = seeded(TEST_INPUT, 2, seed);
		let sentence = chain.generate().expect("generation should succeed");
		assert!(!TEST_INPUT.contains(&sentence.as_str()));
	}
}

#[test]
fn preserves_surface_casing() {
	let mixed_case = &["Test seNtence", "anothEr teSt sentenCe", "A thIRd tEST seNtence"];
	for seed in 0..10 {
		let mut chain = seeded(mixed_case, 2, seed);
		let sentence = chain.generate().expect("generation should succeed");
		assert_ne!(sentence, sentence.to_lowercase());
	}
}

// Without a ban every accepted walk stops at the terminal "stop"; with
// "stop" banned the walk is forced past it to the dead end "halt".
#[test]
fn banned_terminal_never_ends_the_chain() {
	let input = &["go go stop", "go stop halt"];
	for seed in 0..30 {
		let mut config = MarkovConfig::new(corpus(input));
		config.min_length = 2;
		config.seed = Some(seed);
		config.banned_terminals = vec!["STOP".to_owned()];
		let mut chain = MarkovChain::new(config).expect("valid configuration");
		let sentence = chain.generate().expect("generation should succeed");
		assert_eq!(sentence.split(' ').next_back(), Some("halt"));
	}
}

#[test]
fn unbanned_terminal_ends_the_chain() {
	let input = &["go go stop", "go stop halt"];
	for seed in 0..30 {
		let mut chain = seeded(input, 2, seed);
		let sentence = chain.generate().expect("generation should succeed");
		assert_eq!(sentence.split(' ').next_back(), Some("stop"));
	}
}

// Terminal recognition is exact-case: "Stop" ended a corpus sentence,
// so a chain may end there, but the lowercase "stop" emitted by the
// transition table never terminates a walk.
#[test]
fn terminal_recognition_is_exact_case() {
	let input = &["run stop run halt", "run Stop"];
	for seed in 0..30 {
		let mut chain = seeded(input, 1, seed);
		let sentence = chain.generate().expect("generation should succeed");
		let last = sentence.split(' ').next_back().unwrap();
		assert!(last == "halt" || last == "Stop", "unexpected final word: {last}");
	}
}

#[test]
fn empty_start_words_fail_with_empty_model() {
	// The sentence starts with a space, so its first token is empty
	// and never becomes a start word.
	let mut chain = seeded(&[" a b"], 1, 0);
	let result = chain.generate();
	assert!(matches!(result, Err(MarkovError::EmptyModel)));
}

#[test]
fn exhausted_attempts_fail_with_typed_error() {
	// A single sentence can only reproduce itself, so every walk is
	// rejected as verbatim.
	let mut config = MarkovConfig::new(corpus(&["only one line here"]));
	config.min_length = 2;
	config.max_attempts = 5;
	config.seed = Some(0);
	let mut chain = MarkovChain::new(config).expect("valid configuration");
	let result = chain.generate();
	assert!(matches!(result, Err(MarkovError::GenerationExhausted { attempts: 5 })));
}

#[test]
fn zero_min_length_is_rejected_at_construction() {
	let mut config = MarkovConfig::new(corpus(TEST_INPUT));
	config.min_length = 0;
	let result = MarkovChain::new(config);
	assert!(matches!(result, Err(MarkovError::InvalidConfiguration(_))));
}

#[test]
fn zero_max_attempts_is_rejected_at_construction() {
	let mut config = MarkovConfig::new(corpus(TEST_INPUT));
	config.max_attempts = 0;
	let result = MarkovChain::new(config);
	assert!(matches!(result, Err(MarkovError::InvalidConfiguration(_))));
}

#[test]
fn zero_override_is_rejected_at_call_time() {
	let mut chain = seeded(TEST_INPUT, 2, 0);
	let result = chain.generate_with_length(0);
	assert!(matches!(result, Err(MarkovError::InvalidConfiguration(_))));
}

#[test]
fn seeded_generation_is_deterministic() {
	let mut left = seeded(TEST_INPUT, 2, 42);
	let mut right = seeded(TEST_INPUT, 2, 42);
	for _ in 0..5 {
		assert_eq!(
			left.generate().expect("generation should succeed"),
			right.generate().expect("generation should succeed"),
		);
	}
}

proptest! {
	#[test]
	fn accepted_chains_respect_length_and_novelty(seed in any::<u64>(), min_length in 1usize..=4) {
		let mut config = MarkovConfig::new(corpus(TEST_INPUT));
		config.min_length = min_length;
		config.seed = Some(seed);
		let mut chain = MarkovChain::new(config).expect("valid configuration");
		match chain.generate() {
			Ok(sentence) => {
				prop_assert!(sentence.split(' ').count() >= min_length);
				prop_assert!(!TEST_INPUT.contains(&sentence.as_str()));
			}
			Err(MarkovError::GenerationExhausted { .. }) => {}
			Err(other) => prop_assert!(false, "unexpected error: {other}"),
		}
	}
}

/// A word reduced to lowercase, used exclusively as a lookup key.
///
/// Transition-table keys and banned-terminal entries are always
/// `NormalizedWord`s; the surface form with its original casing is what
/// gets stored in value position and emitted in generated output.
/// Keeping the two as distinct types makes the lowercase-vs-surface
/// distinction visible at the call site.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NormalizedWord(String);

impl NormalizedWord {
	/// Normalizes a surface word into its lookup key.
	pub fn new(word: &str) -> Self {
		Self(word.to_lowercase())
	}
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random selection over a slice, by position.
///
/// The pick is uniform over positions rather than distinct values, so a
/// value repeated in the slice is proportionally more likely. This is
/// how transition frequency is encoded: successor lists keep their
/// duplicates and the selector turns repetition into weight.
///
/// The RNG is injected at construction and owned by the selector, so
/// generation can be made deterministic by seeding instead of patching
/// a global source.
pub struct RandomSelector {
	rng: StdRng,
}

impl RandomSelector {
	/// Creates a selector drawing from OS entropy.
	pub fn from_os_entropy() -> Self {
		Self { rng: StdRng::from_os_rng() }
	}

	/// Creates a deterministic selector from a fixed seed.
	pub fn from_seed(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}

	/// Picks one element with uniform probability by position.
	///
	/// Selection is `floor(uniform_[0,1) * length)`.
	/// Returns `None` if the slice is empty.
	pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
		if items.is_empty() {
			return None;
		}
		let roll: f64 = self.rng.random();
		Some(&items[(roll * items.len() as f64) as usize])
	}
}

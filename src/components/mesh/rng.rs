/// Source of uniform random values in `[0, 1)`.
///
/// Node seeding takes this as a parameter so tests can pin layouts to a
/// seed instead of scraping `Math.random`.
pub trait Random {
	fn next_f64(&mut self) -> f64;
}

/// Browser generator backed by `Math.random`.
pub struct MathRandom;

impl Random for MathRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Simple deterministic generator (splitmix64) for tests.
#[cfg(test)]
pub struct SplitMix64 {
	state: u64,
}

#[cfg(test)]
impl SplitMix64 {
	pub fn new(seed: u64) -> Self {
		Self { state: seed }
	}
}

#[cfg(test)]
impl Random for SplitMix64 {
	fn next_f64(&mut self) -> f64 {
		self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
		let mut z = self.state;
		z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
		z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
		z ^= z >> 31;
		(z >> 11) as f64 / (1u64 << 53) as f64
	}
}

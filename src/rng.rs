use rand::{rngs::StdRng, Rng, SeedableRng};

/// The one random stream the simulation draws from: turn rolls, spawn points,
/// rainbow colors and flicker colors all come through here.
pub(crate) trait RandomSource {
    /// Uniform value in `0..bound`; a bound of 0 or 1 yields 0.
    fn below(&mut self, bound: u32) -> u32;
}

impl RandomSource for StdRng {
    fn below(&mut self, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        self.gen_range(0..bound)
    }
}

pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

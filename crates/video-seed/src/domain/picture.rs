//! Random profile picture assignment.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws picture URLs uniformly at random from a fixed pool.
///
/// Supplying a seed makes the sequence of draws reproducible; without one the
/// picker is seeded from the thread RNG.
///
/// # Example
///
/// ```
/// use video_seed::PicturePicker;
///
/// let pool = vec!["https://img.example/a.jpeg".to_owned()];
/// let mut picker = PicturePicker::new(pool, Some(42));
///
/// assert_eq!(picker.pick(), Some("https://img.example/a.jpeg"));
/// ```
#[derive(Debug, Clone)]
pub struct PicturePicker {
    pool: Vec<String>,
    rng: ChaCha8Rng,
}

impl PicturePicker {
    /// Create a picker over `pool`.
    #[must_use]
    pub fn new(pool: Vec<String>, seed: Option<u64>) -> Self {
        let seed_value = seed.unwrap_or_else(random_seed);
        Self {
            pool,
            rng: ChaCha8Rng::seed_from_u64(seed_value),
        }
    }

    /// Draw one picture URL, or `None` when the pool is empty.
    pub fn pick(&mut self) -> Option<&str> {
        self.pool.choose(&mut self.rng).map(String::as_str)
    }

    /// The URLs this picker draws from.
    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }
}

fn random_seed() -> u64 {
    rand::rng().random()
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random draw the engine makes.
///
/// Production code uses a seeded `StdRng`. Tests script the exact sequence of
/// rolls with [`GameRng::new_for_test`] so each branch can be pinned down.
#[derive(Debug, Clone)]
pub enum GameRng {
    Seeded(StdRng),
    Scripted { outcomes: Vec<f64>, index: usize },
}

impl GameRng {
    /// Rolls are consumed in order. Each must lie in `[0, 1)`.
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        GameRng::Scripted { outcomes, index: 0 }
    }

    pub fn from_seed(seed: u64) -> Self {
        GameRng::Seeded(StdRng::seed_from_u64(seed))
    }

    pub fn new_random() -> Self {
        Self::from_seed(rand::random::<u64>())
    }

    /// Uniform roll in `[0, 1)`. `reason` names the draw in logs and in the
    /// panic raised when a scripted sequence runs dry.
    pub fn next_roll(&mut self, reason: &str) -> f64 {
        let roll = match self {
            GameRng::Seeded(rng) => rng.random::<f64>(),
            GameRng::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "GameRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                }
                let roll = outcomes[*index];
                *index += 1;
                roll
            }
        };
        tracing::trace!(roll, reason, "rng draw");
        roll
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize, reason: &str) -> usize {
        let roll = self.next_roll(reason);
        ((roll * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform integer in `min..=max`.
    pub fn next_in_range(&mut self, min: u8, max: u8, reason: &str) -> u8 {
        if max <= min {
            return min;
        }
        let span = (max - min) as usize + 1;
        min + self.next_index(span, reason) as u8
    }
}

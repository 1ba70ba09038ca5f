use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of every random decision the scene makes.
pub trait Dice {
    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    /// One of -1, 0, +1.
    fn step(&mut self) -> i32 {
        self.index(3) as i32 - 1
    }
}

#[derive(Debug, Clone)]
pub struct RandomDice<R: Rng = StdRng> {
    rng: R,
}

impl RandomDice<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dice for RandomDice<R> {
    fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
pub mod scripted {
    use std::collections::VecDeque;

    use super::Dice;

    /// Replays queued rolls. Once a queue runs dry, chances come up `false` and indices `0`.
    #[derive(Debug, Default)]
    pub struct ScriptedDice {
        chances: VecDeque<bool>,
        indices: VecDeque<usize>,
    }

    impl ScriptedDice {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn chances(mut self, rolls: impl IntoIterator<Item = bool>) -> Self {
            self.chances.extend(rolls);
            self
        }

        pub fn indices(mut self, rolls: impl IntoIterator<Item = usize>) -> Self {
            self.indices.extend(rolls);
            self
        }
    }

    impl Dice for ScriptedDice {
        fn chance(&mut self, _p: f64) -> bool {
            self.chances.pop_front().unwrap_or(false)
        }

        fn index(&mut self, len: usize) -> usize {
            self.indices.pop_front().unwrap_or(0).min(len.saturating_sub(1))
        }
    }
}

use flame_core::MAX_VALUE;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of simulated sensor readings.
///
/// The feed calls [`next_sample`](SampleProvider::next_sample) once per tick.
/// Implementations must return a value in `0..=100` and cannot fail.
pub trait SampleProvider: Send + 'static {
    fn next_sample(&mut self) -> u8;
}

impl<P: SampleProvider + ?Sized> SampleProvider for Box<P> {
    fn next_sample(&mut self) -> u8 {
        (**self).next_sample()
    }
}

/// Uniformly random readings in `0..=100`.
#[derive(Debug)]
pub struct RandomProvider {
    rng: StdRng,
}

impl RandomProvider {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Fixed seed — the same seed always yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleProvider for RandomProvider {
    fn next_sample(&mut self) -> u8 {
        self.rng.gen_range(0..=MAX_VALUE)
    }
}

/// Replays a fixed list of readings, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedProvider {
    values: Vec<u8>,
    cursor: usize,
}

impl ScriptedProvider {
    /// An empty script always reads 0.  Values above 100 are clamped.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().map(|v| v.min(MAX_VALUE)).collect(),
            cursor: 0,
        }
    }
}

impl SampleProvider for ScriptedProvider {
    fn next_sample(&mut self) -> u8 {
        let Some(&value) = self.values.get(self.cursor) else {
            return 0;
        };
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_stays_in_range() {
        let mut p = RandomProvider::seeded(42);
        assert!((0..10_000).all(|_| p.next_sample() <= MAX_VALUE));
    }

    #[test]
    fn random_reaches_both_ends() {
        let mut p = RandomProvider::seeded(7);
        let samples: Vec<u8> = (0..20_000).map(|_| p.next_sample()).collect();
        assert!(samples.contains(&0));
        assert!(samples.contains(&MAX_VALUE));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomProvider::seeded(99);
        let mut b = RandomProvider::seeded(99);
        for _ in 0..100 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn scripted_cycles_and_clamps() {
        let mut p = ScriptedProvider::new([5, 200, 60]);
        let got: Vec<u8> = (0..5).map(|_| p.next_sample()).collect();
        assert_eq!(got, vec![5, 100, 60, 5, 100]);
    }

    #[test]
    fn empty_script_reads_zero() {
        let mut p = ScriptedProvider::new(Vec::new());
        assert_eq!(p.next_sample(), 0);
        assert_eq!(p.next_sample(), 0);
    }

    #[test]
    fn boxed_provider_delegates() {
        let mut p: Box<dyn SampleProvider> = Box::new(ScriptedProvider::new([9]));
        assert_eq!(p.next_sample(), 9);
    }
}

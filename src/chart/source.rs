use std::collections::VecDeque;
use std::ops::Range;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::chart::ChartError;
/// Anything that can hand the chart one multi-channel sample on demand.
pub trait SampleSource {
    fn next_sample(&mut self) -> Result<Option<Vec<f32>>, ChartError>;
}
/// In-memory source useful for tests and deterministic playback.
pub struct ManualSource {
    queue: VecDeque<Vec<f32>>,
}
impl ManualSource {
    pub fn new(samples: impl IntoIterator<Item = Vec<f32>>) -> Self {
        Self {
            queue: samples.into_iter().collect(),
        }
    }
}
impl SampleSource for ManualSource {
    fn next_sample(&mut self) -> Result<Option<Vec<f32>>, ChartError> {
        Ok(self.queue.pop_front())
    }
}
/// Endless source drawing whole numbers from one range per channel.
pub struct RandomSource {
    ranges: Vec<Range<i32>>,
    rng: StdRng,
}
impl RandomSource {
    pub fn new(ranges: Vec<Range<i32>>) -> Self {
        Self {
            ranges,
            rng: StdRng::from_entropy(),
        }
    }
    pub fn seeded(ranges: Vec<Range<i32>>, seed: u64) -> Self {
        Self {
            ranges,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}
impl SampleSource for RandomSource {
    fn next_sample(&mut self) -> Result<Option<Vec<f32>>, ChartError> {
        let rng = &mut self.rng;
        let sample = self
            .ranges
            .iter()
            .map(|range| {
                if range.is_empty() {
                    range.start as f32
                } else {
                    rng.gen_range(range.clone()) as f32
                }
            })
            .collect();
        Ok(Some(sample))
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn manual_source_drains_in_order() {
        let mut source = ManualSource::new(vec![vec![1.0], vec![2.0]]);
        assert_eq!(source.next_sample().unwrap(), Some(vec![1.0]));
        assert_eq!(source.next_sample().unwrap(), Some(vec![2.0]));
        assert_eq!(source.next_sample().unwrap(), None);
    }
    #[test]
    fn random_source_stays_in_range() {
        let mut source = RandomSource::seeded(vec![0..7, 10..13, 5..5], 7);
        for _ in 0..200 {
            let sample = source.next_sample().unwrap().unwrap();
            assert!((0.0..7.0).contains(&sample[0]));
            assert!((10.0..13.0).contains(&sample[1]));
            assert_eq!(sample[2], 5.0);
        }
    }
}

//! Random keyframe sources for bulk loads, tests and benches.
//!
//! Positions are whole numbers in [0, 100); times are `index + jitter` with
//! jitter in [0, 1), so a generated run is always in time order.

use crate::keyframe::Keyframe;

const POSITION_RANGE: std::ops::Range<u32> = 0..100;

/// Random keyframe for bulk position `index`.
pub fn random_keyframe(rng: &mut fastrand::Rng, index: usize) -> Keyframe {
    Keyframe {
        x: rng.u32(POSITION_RANGE) as f32,
        y: rng.u32(POSITION_RANGE) as f32,
        z: rng.u32(POSITION_RANGE) as f32,
        time: index as f32 + rng.f32(),
    }
}

/// Iterator over `count` ordered random keyframes.
#[derive(Clone, Debug)]
pub struct RandomKeyframes {
    rng: fastrand::Rng,
    next: usize,
    count: usize,
}

impl RandomKeyframes {
    pub fn new(count: usize) -> Self {
        Self::with_rng(fastrand::Rng::new(), count)
    }

    /// Reproducible sequence for a given seed.
    pub fn with_seed(seed: u64, count: usize) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed), count)
    }

    pub fn with_rng(rng: fastrand::Rng, count: usize) -> Self {
        Self {
            rng,
            next: 0,
            count,
        }
    }
}

impl Iterator for RandomKeyframes {
    type Item = Keyframe;

    fn next(&mut self) -> Option<Keyframe> {
        if self.next >= self.count {
            return None;
        }
        let k = random_keyframe(&mut self.rng, self.next);
        self.next += 1;
        Some(k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RandomKeyframes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_are_ordered_and_jittered() {
        let frames: Vec<Keyframe> = RandomKeyframes::with_seed(7, 64).collect();
        assert_eq!(frames.len(), 64);
        for (i, k) in frames.iter().enumerate() {
            assert!(k.time >= i as f32 && k.time < (i + 1) as f32);
            for c in k.position() {
                assert!((0.0..100.0).contains(&c) && c.fract() == 0.0);
            }
        }
        assert!(frames.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn same_seed_same_sequence() {
        let a: Vec<Keyframe> = RandomKeyframes::with_seed(42, 10).collect();
        let b: Vec<Keyframe> = RandomKeyframes::with_seed(42, 10).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn exact_size() {
        let mut it = RandomKeyframes::with_seed(1, 3);
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
    }
}

// #[allow(dead_code)] is required on this module as a workaround for
// https://github.com/rust-lang/rust/issues/46379
#![allow(dead_code)]

use charprop::{CodePointRange, MAX_CODE_POINT};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Initialize the env logger for a test environment.
pub fn enable_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seeded random ranges, in no particular order and free to overlap.
pub fn scattered_ranges(seed: u64, count: usize, max_len: u32) -> Vec<CodePointRange> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let lo = rng.gen_range(0..=MAX_CODE_POINT);
            let len = rng.gen_range(0..max_len);
            CodePointRange::new(lo, lo.saturating_add(len).min(MAX_CODE_POINT))
        })
        .collect()
}

/// Membership by walking sorted, disjoint ranges alongside an ascending sweep.
pub struct Sweep<'a> {
    ranges: &'a [CodePointRange],
    next: usize,
}

impl<'a> Sweep<'a> {
    pub fn new(ranges: &'a [CodePointRange]) -> Self {
        Sweep { ranges, next: 0 }
    }

    /// Code points must be asked for in ascending order.
    pub fn contains(&mut self, cp: u32) -> bool {
        while self.next < self.ranges.len() && self.ranges[self.next].hi < cp {
            self.next += 1;
        }
        self.ranges.get(self.next).is_some_and(|r| r.contains(cp))
    }
}

use super::*;
use std::vec::Vec;

/// Records every write per stage so the walk can be audited.
struct WriteCounter {
    n: usize,
    writes: Vec<Vec<u32>>,
    twiddles: Vec<Vec<usize>>,
}

impl WriteCounter {
    fn new(n: usize) -> Self {
        Self { n, writes: Vec::new(), twiddles: Vec::new() }
    }
}

impl Butterfly for WriteCounter {
    fn apply(&mut self, step: &Step) {
        let stage = step.stage as usize;
        while self.writes.len() <= stage {
            self.writes.push(vec![0; self.n]);
            self.twiddles.push(Vec::new());
        }
        assert!(step.low < self.n && step.high < self.n, "out of range: {:?}", step);
        self.writes[stage][step.low] += 1;
        self.writes[stage][step.high] += 1;
        self.twiddles[stage].push(step.twiddle);
    }
}

#[test]
fn test_stage_walk_n8() {
    let steps: Vec<(u32, usize, usize, usize)> = Stages::new(8)
        .map(|s| (s.stage, s.twiddle, s.low, s.high))
        .collect();

    let expected = vec![
        // Stage 0: one group, half = 4
        (0, 0, 0, 4), (0, 0, 1, 5), (0, 0, 2, 6), (0, 0, 3, 7),
        // Stage 1: two groups, half = 2
        (1, 0, 0, 2), (1, 0, 1, 3), (1, 1, 4, 6), (1, 1, 5, 7),
        // Stage 2: four groups, half = 1
        (2, 0, 0, 1), (2, 1, 2, 3), (2, 2, 4, 5), (2, 3, 6, 7),
    ];
    assert_eq!(steps, expected);
}

#[test]
fn test_every_index_written_once_per_stage() {
    for log2n in 1..=10 {
        let n = 1usize << log2n;
        let mut counter = WriteCounter::new(n);
        run_stages(n, &mut counter);

        assert_eq!(counter.writes.len(), log2n, "stage count for N={}", n);
        for (stage, writes) in counter.writes.iter().enumerate() {
            assert!(
                writes.iter().all(|&w| w == 1),
                "N={} stage {} writes {:?}",
                n,
                stage,
                writes
            );
        }
    }
}

#[test]
fn test_twiddles_consumed_sequentially_per_group() {
    let n = 64;
    let mut counter = WriteCounter::new(n);
    run_stages(n, &mut counter);

    for (stage, twiddles) in counter.twiddles.iter().enumerate() {
        let half = n >> (stage + 1);
        let groups = 1usize << stage;
        assert_eq!(groups * half, n / 2);

        // Non-decreasing, one run of `half` reads per group
        for (k, &t) in twiddles.iter().enumerate() {
            assert_eq!(t, k / half, "stage {} step {}", stage, k);
        }
        assert_eq!(twiddles.last().copied(), Some(groups - 1));
    }
}

#[test]
fn test_exact_size() {
    let stages = Stages::new(16);
    assert_eq!(stages.len(), 8 * 4);
    assert_eq!(stages.count(), 32);

    let mut stages = Stages::new(4);
    stages.next();
    assert_eq!(stages.len(), 3);
}

#[test]
fn test_single_point_is_identity() {
    assert_eq!(Stages::new(1).count(), 0);

    let mut counter = WriteCounter::new(1);
    run_stages(1, &mut counter);
    assert!(counter.writes.is_empty());
}

#[test]
fn test_fused_after_last_stage() {
    let mut stages = Stages::new(2);
    assert_eq!(
        stages.next(),
        Some(Step { stage: 0, group: 0, twiddle: 0, low: 0, high: 1 })
    );
    assert_eq!(stages.next(), None);
    assert_eq!(stages.next(), None);
}

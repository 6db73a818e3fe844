// src/stage.rs

//! Representation-agnostic stage/group/element walk shared by the
//! fixed-point and floating-point transforms.

/// One butterfly to apply: the pair `(low, high)` combined with twiddle entry `twiddle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Stage number, `0..log2(N)`, coarsest first.
    pub stage: u32,
    /// Group within the stage, `0..2^stage`.
    pub group: usize,
    /// Index into the twiddle table. Equal to `group`.
    pub twiddle: usize,
    pub low: usize,
    pub high: usize,
}

/// Iterator over every butterfly of an `N`-point radix-2 transform, in execution order.
///
/// All steps of a stage are yielded before the first step of the next one.
/// `N` must be a power of two; `N == 1` yields nothing.
#[derive(Debug, Clone)]
pub struct Stages {
    half: usize,
    groups: usize,
    stage: u32,
    group: usize,
    element: usize,
    base: usize,
    remaining: usize,
}

impl Stages {
    pub fn new(n: usize) -> Self {
        debug_assert!(n.is_power_of_two());
        let half = n >> 1;
        Self {
            half,
            groups: 1,
            stage: 0,
            group: 0,
            element: 0,
            base: 0,
            remaining: half * n.trailing_zeros() as usize,
        }
    }
}

impl Iterator for Stages {
    type Item = Step;

    #[inline]
    fn next(&mut self) -> Option<Step> {
        if self.half == 0 {
            return None;
        }

        let low = self.base + self.element;
        let step = Step {
            stage: self.stage,
            group: self.group,
            twiddle: self.group,
            low,
            high: low + self.half,
        };

        self.remaining -= 1;
        self.element += 1;
        if self.element == self.half {
            // Skip the high half this group already paired
            self.element = 0;
            self.base += self.half << 1;
            self.group += 1;
            if self.group == self.groups {
                self.group = 0;
                self.base = 0;
                self.groups <<= 1;
                self.half >>= 1;
                self.stage += 1;
            }
        }

        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Stages {}

impl core::iter::FusedIterator for Stages {}

/// Arithmetic applied at each step.
///
/// Implementations read both samples of the pair before writing either.
pub trait Butterfly {
    fn apply(&mut self, step: &Step);
}

/// Drives `unit` over all `log2(n)` stages of an `n`-point transform.
#[inline]
pub fn run_stages<B: Butterfly + ?Sized>(n: usize, unit: &mut B) {
    for step in Stages::new(n) {
        unit.apply(&step);
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;

//! Utilities for working with probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;

    /// Scales the elements so that they add up to `target`, returning the sum prior to scaling.
    fn normalise(&mut self, target: f64) -> f64;

    fn scale(&mut self, factor: f64);

    /// Replaces each element with its reciprocal.
    fn invert(&mut self);
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        self.scale(target / sum);
        sum
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }

    fn invert(&mut self) {
        for element in self {
            *element = 1.0 / *element;
        }
    }
}

pub fn mean(slice: &[f64]) -> f64 {
    slice.sum() / slice.len() as f64
}

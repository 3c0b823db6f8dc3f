use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;
use num_complex::Complex64;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// `|z| > 2`, compared squared.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// The ordered iteration indices a candidate is tested over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Iterations {
    /// `0..n`, never materialized.
    UpTo(u32),
    Indices(Vec<u32>),
}

impl Iterations {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::UpTo(n) => usize::try_from(*n).unwrap_or(usize::MAX),
            Self::Indices(indices) => indices.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Escape-time iteration of `z = z² + c` from `z = 0`.
///
/// The iteration indices are an explicit ordered sequence so callers can
/// pass a non-contiguous bound; [`MandelbrotAlgorithm::with_max_iterations`]
/// covers the usual `0..max` case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    iterations: Iterations,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeTime;

    fn compute(&self, c: Complex64) -> EscapeTime {
        match &self.iterations {
            Iterations::UpTo(n) => escape_time(c, 0..*n),
            Iterations::Indices(indices) => escape_time(c, indices.iter().copied()),
        }
    }
}

fn escape_time(c: Complex64, iterations: impl Iterator<Item = u32>) -> EscapeTime {
    let mut z = Complex64::new(0.0, 0.0);

    for iteration in iterations {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_RADIUS_SQUARED {
            return EscapeTime::Escaped(iteration);
        }
    }

    EscapeTime::InSet
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(iterations: impl IntoIterator<Item = u32>) -> Self {
        Self {
            iterations: Iterations::Indices(iterations.into_iter().collect()),
        }
    }

    /// Iterates `0..max_iterations`. Zero selects the default bound.
    #[must_use]
    pub fn with_max_iterations(max_iterations: u32) -> Self {
        let max_iterations = if max_iterations == 0 {
            DEFAULT_MAX_ITERATIONS
        } else {
            max_iterations
        };

        Self {
            iterations: Iterations::UpTo(max_iterations),
        }
    }

    #[must_use]
    pub fn iterations(&self) -> &Iterations {
        &self.iterations
    }
}

impl Default for MandelbrotAlgorithm {
    fn default() -> Self {
        Self::with_max_iterations(DEFAULT_MAX_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_in_set() {
        let algorithm = MandelbrotAlgorithm::default();

        assert_eq!(algorithm.compute(Complex64::new(0.0, 0.0)), EscapeTime::InSet);
    }

    #[test]
    fn test_two_escapes_on_second_iteration() {
        // z1 = 2 has |z| == 2 which is not beyond the radius; z2 = 6 is.
        let algorithm = MandelbrotAlgorithm::with_max_iterations(1);
        assert_eq!(algorithm.compute(Complex64::new(2.0, 0.0)), EscapeTime::InSet);

        let algorithm = MandelbrotAlgorithm::default();
        assert_eq!(algorithm.compute(Complex64::new(2.0, 0.0)), EscapeTime::Escaped(1));
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let algorithm = MandelbrotAlgorithm::default();

        assert_eq!(algorithm.compute(Complex64::new(3.0, 0.0)), EscapeTime::Escaped(0));
    }

    #[test]
    fn test_zero_max_iterations_uses_default() {
        let algorithm = MandelbrotAlgorithm::with_max_iterations(0);

        assert_eq!(algorithm, MandelbrotAlgorithm::default());
        assert_eq!(algorithm.iterations().len(), 100);
    }

    #[test]
    fn test_custom_iteration_indices_are_reported() {
        let algorithm = MandelbrotAlgorithm::new([10, 20, 30]);

        // 1+0i: z = 1, 2, 5; escapes on the third step.
        assert_eq!(algorithm.compute(Complex64::new(1.0, 0.0)), EscapeTime::Escaped(30));
    }

    #[test]
    fn test_empty_iteration_sequence_never_escapes() {
        let algorithm = MandelbrotAlgorithm::new([]);

        assert_eq!(algorithm.compute(Complex64::new(100.0, 0.0)), EscapeTime::InSet);
    }

    #[test]
    fn test_deterministic() {
        let algorithm = MandelbrotAlgorithm::default();
        let c = Complex64::new(-0.75, 0.1);

        assert_eq!(algorithm.compute(c), algorithm.compute(c));
        assert_eq!(algorithm.compute(c), EscapeTime::Escaped(32));
    }

    #[test]
    fn test_huge_bound_is_not_materialized() {
        let algorithm = MandelbrotAlgorithm::with_max_iterations(u32::MAX);

        assert_eq!(algorithm.iterations(), &Iterations::UpTo(u32::MAX));
        assert_eq!(algorithm.compute(Complex64::new(3.0, 0.0)), EscapeTime::Escaped(0));
        assert_eq!(algorithm.compute(Complex64::new(2.0, 0.0)), EscapeTime::Escaped(1));
    }

    #[test]
    fn test_indices_and_bound_agree() {
        let by_bound = MandelbrotAlgorithm::with_max_iterations(20);
        let by_indices = MandelbrotAlgorithm::new(0..20);
        let c = Complex64::new(-0.75, 0.1);

        assert_eq!(by_indices.iterations().len(), 20);
        assert_eq!(by_bound.compute(c), by_indices.compute(c));
        assert!(MandelbrotAlgorithm::new([]).iterations().is_empty());
    }
}

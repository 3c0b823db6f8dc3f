use crate::core::actions::generate_fractal::generate_fractal::{generate_fractal, GenerateFractal};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use num_complex::Complex64;

/// Yields `(c, escape time)` for every candidate, over the given iteration
/// indices.
pub fn iter_mandelbrot<C>(
    candidates: C,
    iterations: impl IntoIterator<Item = u32>,
) -> GenerateFractal<C::IntoIter, MandelbrotAlgorithm>
where
    C: IntoIterator<Item = Complex64>,
{
    generate_fractal(candidates, MandelbrotAlgorithm::new(iterations))
}

/// [`iter_mandelbrot`] over `0..max_iterations`; zero selects the default.
pub fn iter_mandelbrot_with_max<C>(
    candidates: C,
    max_iterations: u32,
) -> GenerateFractal<C::IntoIter, MandelbrotAlgorithm>
where
    C: IntoIterator<Item = Complex64>,
{
    generate_fractal(candidates, MandelbrotAlgorithm::with_max_iterations(max_iterations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::algorithm::DEFAULT_MAX_ITERATIONS;
    use crate::core::fractals::mandelbrot::escape_time::EscapeTime::{self, Escaped, InSet};
    use pretty_assertions::assert_eq;

    /// `0.1i * k` for k in 0..10, then the same shifted by 1.
    fn fixture_candidates() -> Vec<Complex64> {
        let column: Vec<Complex64> = (0..10)
            .map(|k| Complex64::new(0.0, 0.1 * f64::from(k)))
            .collect();
        let shifted: Vec<Complex64> = column.iter().map(|c| *c + 1.0).collect();

        column.into_iter().chain(shifted).collect()
    }

    fn escape_times(results: impl Iterator<Item = (Complex64, EscapeTime)>) -> Vec<EscapeTime> {
        results.map(|(_, escape)| escape).collect()
    }

    #[test]
    fn test_basic() {
        let results = iter_mandelbrot_with_max(fixture_candidates(), DEFAULT_MAX_ITERATIONS);

        assert_eq!(
            escape_times(results),
            vec![
                InSet, InSet, InSet, InSet, InSet, InSet, InSet,
                Escaped(12), Escaped(17), Escaped(7),
                Escaped(2),
                Escaped(1), Escaped(1), Escaped(1), Escaped(1), Escaped(1),
                Escaped(1), Escaped(1), Escaped(1), Escaped(1),
            ]
        );
    }

    #[test]
    fn test_truncated_bound_reclassifies_as_in_set() {
        let results = iter_mandelbrot_with_max(fixture_candidates(), 2);

        let mut expected = vec![InSet; 11];
        expected.extend([Escaped(1); 9]);
        assert_eq!(escape_times(results), expected);
    }

    #[test]
    fn test_explicit_indices_match_max_bound() {
        let by_max = escape_times(iter_mandelbrot_with_max(fixture_candidates(), 2));
        let by_indices = escape_times(iter_mandelbrot(fixture_candidates(), [0, 1]));

        assert_eq!(by_max, by_indices);
    }

    #[test]
    fn test_candidates_are_passed_through() {
        let candidates = fixture_candidates();
        let passed: Vec<Complex64> = iter_mandelbrot_with_max(candidates.clone(), 100)
            .map(|(c, _)| c)
            .collect();

        assert_eq!(passed, candidates);
    }

    #[test]
    fn test_known_candidates() {
        let candidates = [
            Complex64::new(0.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(1.0, 0.1),
        ];

        assert_eq!(
            escape_times(iter_mandelbrot_with_max(candidates, 100)),
            vec![InSet, Escaped(1), Escaped(1)]
        );
    }

    #[test]
    fn test_no_candidates() {
        let results: Vec<(Complex64, EscapeTime)> =
            iter_mandelbrot_with_max(Vec::<Complex64>::new(), 100).collect();

        assert!(results.is_empty());
    }
}

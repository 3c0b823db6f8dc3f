use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use num_complex::Complex64;
use std::iter::FusedIterator;

/// Lazily pairs each candidate with the algorithm's result for it,
/// one candidate per `next()`.
#[derive(Debug, Clone)]
pub struct GenerateFractal<I, Alg> {
    candidates: I,
    algorithm: Alg,
}

pub fn generate_fractal<C, Alg>(candidates: C, algorithm: Alg) -> GenerateFractal<C::IntoIter, Alg>
where
    C: IntoIterator<Item = Complex64>,
    Alg: FractalAlgorithm,
{
    GenerateFractal {
        candidates: candidates.into_iter(),
        algorithm,
    }
}

impl<I, Alg> Iterator for GenerateFractal<I, Alg>
where
    I: Iterator<Item = Complex64>,
    Alg: FractalAlgorithm,
{
    type Item = (Complex64, Alg::Success);

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.candidates.next()?;
        Some((candidate, self.algorithm.compute(candidate)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.candidates.size_hint()
    }
}

impl<I, Alg> ExactSizeIterator for GenerateFractal<I, Alg>
where
    I: ExactSizeIterator<Item = Complex64>,
    Alg: FractalAlgorithm,
{
}

impl<I, Alg> FusedIterator for GenerateFractal<I, Alg>
where
    I: FusedIterator<Item = Complex64>,
    Alg: FractalAlgorithm,
{
}

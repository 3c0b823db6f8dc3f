use num_complex::Complex64;

pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, candidate: Complex64) -> Self::Success;
}

impl<A: FractalAlgorithm + ?Sized> FractalAlgorithm for &A {
    type Success = A::Success;

    fn compute(&self, candidate: Complex64) -> Self::Success {
        (**self).compute(candidate)
    }
}

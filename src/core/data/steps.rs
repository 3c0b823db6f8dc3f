use crate::core::data::errors::DataError;
use num_complex::Complex64;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;
use std::str::FromStr;

const STEPS_KIND: &str = "step count";
const RANGE_KIND: &str = "step range";

/// A number of subdivisions along one axis.
///
/// `Steps(n)` describes `n + 1` sample positions, `0..=n`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Steps(u32);

impl Steps {
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn count(self) -> u32 {
        self.0
    }

    /// Number of sample positions, always `count + 1`.
    #[must_use]
    pub const fn length(self) -> usize {
        self.0 as usize + 1
    }

    /// Yields `0, 1, ..., n`. Use `.rev()` for `n, ..., 0`.
    #[must_use]
    pub fn iter(self) -> RangeInclusive<u32> {
        0..=self.0
    }

    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        (0..=i64::from(self.0)).contains(&value)
    }

    /// The `index`-th of `n + 1` evenly spaced values from `start` to `end`.
    ///
    /// The last index returns `end` itself so no rounding error accumulates
    /// at the boundary.
    #[must_use]
    pub fn float_at(self, index: u32, start: f64, end: f64) -> f64 {
        if self.0 == 0 || index == 0 {
            return start;
        }
        if index >= self.0 {
            return end;
        }

        start + f64::from(index) * (end - start) / f64::from(self.0)
    }

    #[must_use]
    pub fn iter_floats(self, start: f64, end: f64) -> FloatSteps {
        FloatSteps {
            steps: self,
            start,
            end,
            front: 0,
            back: self.length() as u64,
        }
    }

    /// `0..length()`. Cannot overflow: `length()` is at most `u32::MAX + 1`.
    #[must_use]
    pub fn range(self) -> StepRange {
        StepRange {
            start: 0,
            stop: self.signed_length(),
            step: 1,
        }
    }

    pub fn range_from(self, start: i64) -> Result<StepRange, DataError> {
        self.range_from_by(start, 1)
    }

    pub fn range_to(self, stop: i64) -> Result<StepRange, DataError> {
        self.range_to_by(stop, 1)
    }

    pub fn range_by(self, step: i64) -> Result<StepRange, DataError> {
        self.range_from_by(0, step)
    }

    pub fn range_from_by(self, start: i64, step: i64) -> Result<StepRange, DataError> {
        let stop = step
            .checked_mul(self.signed_length())
            .and_then(|span| start.checked_add(span))
            .ok_or_else(|| range_error(start, None, step, "range overflows"))?;

        self.checked_range(start, stop, step)
    }

    pub fn range_to_by(self, stop: i64, step: i64) -> Result<StepRange, DataError> {
        let start = step
            .checked_mul(self.signed_length())
            .and_then(|span| stop.checked_sub(span))
            .ok_or_else(|| range_error(stop, None, step, "range overflows"))?;

        self.checked_range(start, stop, step)
    }

    /// Derives the step from the span, preferring the largest step that
    /// still yields exactly `length()` values.
    pub fn range_between(self, start: i64, stop: i64) -> Result<StepRange, DataError> {
        let span = stop
            .checked_sub(start)
            .ok_or_else(|| range_error(start, Some(stop), 0, "range overflows"))?;

        let step = if self.0 == 0 {
            span
        } else {
            span.signum() * ((span.abs() - 1) / i64::from(self.0))
        };

        self.checked_range(start, stop, step)
    }

    pub fn range_exact(self, start: i64, stop: i64, step: i64) -> Result<StepRange, DataError> {
        self.checked_range(start, stop, step)
    }

    fn checked_range(self, start: i64, stop: i64, step: i64) -> Result<StepRange, DataError> {
        if step == 0 {
            return Err(range_error(start, Some(stop), step, "step must not be zero"));
        }

        let range = StepRange { start, stop, step };
        if range.len() != self.length() {
            return Err(range_error(
                start,
                Some(stop),
                step,
                format!("expected {} values, got {}", self.length(), range.len()),
            ));
        }

        Ok(range)
    }

    fn signed_length(self) -> i64 {
        i64::from(self.0) + 1
    }
}

fn range_error(start: i64, stop: Option<i64>, step: i64, cause: impl ToString) -> DataError {
    let value = match stop {
        Some(stop) => format!("{}..{} by {}", start, stop, step),
        None => format!("{}.. by {}", start, step),
    };

    DataError::invalid_because(RANGE_KIND, value, cause)
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Steps {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for Steps {
    type Error = DataError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(DataError::invalid_because(
                STEPS_KIND,
                value,
                "must be non-negative",
            ));
        }

        u32::try_from(value)
            .map(Self)
            .map_err(|_| DataError::invalid_because(STEPS_KIND, value, "too large"))
    }
}

impl TryFrom<f64> for Steps {
    type Error = DataError;

    /// Truncates toward zero, so `3.9` becomes 3 steps.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DataError::invalid_because(
                STEPS_KIND,
                value,
                "not a finite number",
            ));
        }

        let truncated = value.trunc();
        if truncated < 0.0 {
            return Err(DataError::invalid_because(
                STEPS_KIND,
                value,
                "must be non-negative",
            ));
        }
        if truncated > f64::from(u32::MAX) {
            return Err(DataError::invalid_because(STEPS_KIND, value, "too large"));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = truncated as u32;
        Ok(Self(count))
    }
}

impl TryFrom<Complex64> for Steps {
    type Error = DataError;

    fn try_from(value: Complex64) -> Result<Self, Self::Error> {
        Err(DataError::TypeMismatch {
            expected: "a real step count",
            found: format!("complex {}", value),
        })
    }
}

impl FromStr for Steps {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::try_from(value);
        }

        match trimmed.parse::<f64>() {
            Ok(value) => Self::try_from(value),
            Err(err) => Err(DataError::invalid_because(STEPS_KIND, s, err)),
        }
    }
}

/// `n + 1` evenly spaced floats, see [`Steps::iter_floats`].
#[derive(Debug, Clone)]
pub struct FloatSteps {
    steps: Steps,
    start: f64,
    end: f64,
    front: u64,
    back: u64,
}

impl Iterator for FloatSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }

        #[allow(clippy::cast_possible_truncation)]
        let value = self.steps.float_at(self.front as u32, self.start, self.end);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back - self.front) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for FloatSteps {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        #[allow(clippy::cast_possible_truncation)]
        let value = self.steps.float_at(self.back as u32, self.start, self.end);
        Some(value)
    }
}

impl ExactSizeIterator for FloatSteps {}

impl FusedIterator for FloatSteps {}

/// An integer range with the same half-open semantics as `start..stop`
/// stepped by `step`, where `step` may be negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StepRange {
    start: i64,
    stop: i64,
    step: i64,
}

impl StepRange {
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub fn stop(&self) -> i64 {
        self.stop
    }

    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    #[must_use]
    pub fn len(&self) -> usize {
        let (low, high) = if self.step > 0 {
            (self.start, self.stop)
        } else {
            (self.stop, self.start)
        };

        if self.step == 0 || low >= high {
            return 0;
        }

        let count = (high.abs_diff(low) - 1) / self.step.unsigned_abs() + 1;
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(self) -> impl DoubleEndedIterator<Item = i64> + ExactSizeIterator {
        let Self { start, step, .. } = self;
        (0..self.len()).map(move |i| start + i as i64 * step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(range: StepRange) -> Vec<i64> {
        range.iter().collect()
    }

    #[test]
    fn test_length_is_count_plus_one() {
        for n in [0, 1, 3, 200] {
            assert_eq!(Steps::new(n).length(), n as usize + 1);
        }
    }

    #[test]
    fn test_coercion() {
        assert_eq!(Steps::try_from(3_i64), Ok(Steps::new(3)));
        assert_eq!(Steps::try_from(3.1), Ok(Steps::new(3)));
        assert_eq!(Steps::try_from(3.9), Ok(Steps::new(3)));
        assert_eq!("3".parse::<Steps>(), Ok(Steps::new(3)));
        assert_eq!(" 4 ".parse::<Steps>(), Ok(Steps::new(4)));
        assert_eq!("3.1".parse::<Steps>(), Ok(Steps::new(3)));
    }

    #[test]
    fn test_negative_is_invalid() {
        assert!(matches!(
            Steps::try_from(-1_i64),
            Err(DataError::InvalidValue { .. })
        ));
        assert!(matches!(
            Steps::try_from(-1.5),
            Err(DataError::InvalidValue { .. })
        ));
        assert!(matches!(
            "-1".parse::<Steps>(),
            Err(DataError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_non_numeric_is_invalid() {
        for raw in ["", "spam", "1+1j", "3 4"] {
            assert!(
                matches!(raw.parse::<Steps>(), Err(DataError::InvalidValue { .. })),
                "{:?} should be rejected",
                raw
            );
        }
        assert!(Steps::try_from(f64::NAN).is_err());
        assert!(Steps::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_complex_is_type_mismatch() {
        let result = Steps::try_from(Complex64::new(1.0, 1.0));

        assert!(matches!(result, Err(DataError::TypeMismatch { .. })));
    }

    #[test]
    fn test_iter_and_reversed() {
        let steps = Steps::new(3);

        assert_eq!(steps.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(steps.iter().rev().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_contains() {
        let steps = Steps::new(3);

        for i in 0..4 {
            assert!(steps.contains(i));
        }
        assert!(!steps.contains(-1));
        assert!(!steps.contains(4));
    }

    #[test]
    fn test_iter_floats_increasing() {
        let values: Vec<f64> = Steps::new(3).iter_floats(0.0, 1.0).collect();

        assert_eq!(values, vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);
    }

    #[test]
    fn test_iter_floats_decreasing() {
        let values: Vec<f64> = Steps::new(7).iter_floats(2.5, -1.0).collect();

        assert_eq!(values, vec![2.5, 2.0, 1.5, 1.0, 0.5, 0.0, -0.5, -1.0]);
    }

    #[test]
    fn test_iter_floats_endpoints_are_exact() {
        for n in 1..50 {
            let values: Vec<f64> = Steps::new(n).iter_floats(-0.1, 0.7).collect();

            assert_eq!(values.len(), n as usize + 1);
            assert_eq!(values.first(), Some(&-0.1));
            assert_eq!(values.last(), Some(&0.7));
        }
    }

    #[test]
    fn test_iter_floats_reversed() {
        let forward: Vec<f64> = Steps::new(4).iter_floats(1.0, 3.0).collect();
        let mut backward: Vec<f64> = Steps::new(4).iter_floats(1.0, 3.0).rev().collect();
        backward.reverse();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_iter_floats_zero_steps_yields_start() {
        let values: Vec<f64> = Steps::new(0).iter_floats(1.0, 2.0).collect();

        assert_eq!(values, vec![1.0]);
    }

    #[test]
    fn test_range_defaults() {
        let range = Steps::new(3).range();

        assert_eq!(values(range), vec![0, 1, 2, 3]);
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn test_range_by() {
        let steps = Steps::new(3);

        assert_eq!(values(steps.range_by(2).unwrap()), vec![0, 2, 4, 6]);
        assert_eq!(values(steps.range_by(-2).unwrap()), vec![0, -2, -4, -6]);
        assert!(steps.range_by(0).is_err());
    }

    #[test]
    fn test_range_to() {
        let steps = Steps::new(3);

        assert_eq!(values(steps.range_to(3).unwrap()), vec![-1, 0, 1, 2]);
        assert_eq!(values(steps.range_to(-3).unwrap()), vec![-7, -6, -5, -4]);
    }

    #[test]
    fn test_range_from_and_to_reject_overflow() {
        let steps = Steps::new(3);

        assert!(matches!(steps.range_from(i64::MAX), Err(DataError::InvalidValue { .. })));
        assert!(matches!(steps.range_to(i64::MIN), Err(DataError::InvalidValue { .. })));
        assert!(steps.range_from(i64::MAX - 4).is_ok());
        assert!(steps.range_to(i64::MIN + 4).is_ok());
    }

    #[test]
    fn test_range_to_by() {
        let steps = Steps::new(3);
        let increasing = steps.range_to_by(3, 2).unwrap();
        let decreasing = steps.range_to_by(3, -2).unwrap();

        assert_eq!((increasing.start(), increasing.stop(), increasing.step()), (-5, 3, 2));
        assert_eq!((decreasing.start(), decreasing.stop(), decreasing.step()), (11, 3, -2));
        assert_eq!(increasing.len(), 4);
        assert_eq!(decreasing.len(), 4);
    }

    #[test]
    fn test_range_from() {
        let steps = Steps::new(3);

        assert_eq!(values(steps.range_from(4).unwrap()), vec![4, 5, 6, 7]);
        assert_eq!(values(steps.range_from_by(4, 2).unwrap()), vec![4, 6, 8, 10]);
    }

    #[test]
    fn test_range_between_derives_step() {
        let steps = Steps::new(3);
        let start = 2;
        let expected: &[(i64, &[i64])] = &[
            (-5, &[-18, -17, -16]),
            (-4, &[-15, -14, -13]),
            (-3, &[-12, -11, -10]),
            (-2, &[-8, -7]),
            (-1, &[-4]),
            (1, &[4]),
            (2, &[7, 8]),
            (3, &[10, 11, 12]),
            (4, &[13, 14, 15]),
            (5, &[16, 17, 18]),
        ];

        for &(step, spans) in expected {
            for &span in spans {
                let range = steps.range_between(start, start + span).unwrap();

                assert_eq!(range.step(), step, "span {}", span);
                assert_eq!(range.len(), steps.length());
            }
        }
    }

    #[test]
    fn test_range_between_rejects_uneven_spans() {
        let steps = Steps::new(3);
        let start = 2;

        for span in [-9, -6, -5, -3, -2, -1, 0, 1, 2, 3, 5, 6, 9] {
            assert!(
                matches!(
                    steps.range_between(start, start + span),
                    Err(DataError::InvalidValue { .. })
                ),
                "span {} should be rejected",
                span
            );
        }
    }

    #[test]
    fn test_range_exact() {
        let steps = Steps::new(3);
        let start = 2;
        let valid: &[(i64, &[i64])] = &[
            (-4, &[-16, -15, -14, -13]),
            (-3, &[-12, -11, -10]),
            (-2, &[-8, -7]),
            (-1, &[-4]),
            (0, &[]),
            (1, &[4]),
            (2, &[7, 8]),
            (3, &[10, 11, 12]),
            (4, &[13, 14, 15, 16]),
        ];

        for &(step, spans) in valid {
            for span in -20..=20 {
                let result = steps.range_exact(start, start + span, step);

                if spans.contains(&span) {
                    assert_eq!(result.map(|r| r.len()), Ok(4), "step {} span {}", step, span);
                } else {
                    assert!(result.is_err(), "step {} span {} should be rejected", step, span);
                }
            }
        }
    }

    #[test]
    fn test_step_range_len_matches_iteration() {
        let range = Steps::new(3).range_exact(11, 3, -2).unwrap();

        assert_eq!(values(range), vec![11, 9, 7, 5]);
        assert!(!range.is_empty());
    }
}

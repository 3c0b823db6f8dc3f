use crate::core::data::errors::DataError;
use num_complex::Complex64;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

const POINT_STRING_KIND: &str = "point string";
const RAW_POINT_KIND: &str = "raw point";

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

/// The encodings a point can arrive in before it is resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPoint {
    Point(Point2D),
    Text(String),
    Real(f64),
    Complex(Complex64),
    Sequence(Vec<f64>),
}

/// Right-hand side of point arithmetic: another point, or a scalar
/// applied to both components.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operand {
    Point(Point2D),
    Scalar(f64),
}

impl Operand {
    fn components(self) -> (f64, f64) {
        match self {
            Self::Point(point) => (point.x, point.y),
            Self::Scalar(value) => (value, value),
        }
    }
}

impl From<Point2D> for Operand {
    fn from(point: Point2D) -> Self {
        Self::Point(point)
    }
}

impl From<(f64, f64)> for Operand {
    fn from(pair: (f64, f64)) -> Self {
        Self::Point(Point2D::from(pair))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl Point2D {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Parses `"x,y"`, `"(x,y)"`, `"[x,y]"` or a complex literal such as
    /// `"1+1i"` / `"1+1j"`. The empty string is the origin.
    pub fn parse(raw: &str) -> Result<Self, DataError> {
        if raw.is_empty() {
            return Ok(Self::origin());
        }

        let inner = strip_brackets(raw).ok_or_else(|| {
            DataError::invalid_because(POINT_STRING_KIND, raw, "unmatched bracket")
        })?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();

        if let [x, y] = parts.as_slice() {
            return match (x.parse::<f64>(), y.parse::<f64>()) {
                (Ok(x), Ok(y)) => Ok(Self { x, y }),
                _ => Err(DataError::invalid_because(
                    POINT_STRING_KIND,
                    raw,
                    "must be floats",
                )),
            };
        }

        if inner.ends_with(['i', 'j']) {
            return Self::parse_complex(raw, inner);
        }

        Err(DataError::invalid_because(
            POINT_STRING_KIND,
            raw,
            format!("expected 2 numbers, got {}", parts.len()),
        ))
    }

    fn parse_complex(raw: &str, literal: &str) -> Result<Self, DataError> {
        let literal = literal.trim();
        if literal.contains(char::is_whitespace) {
            return Err(DataError::invalid_because(
                POINT_STRING_KIND,
                raw,
                "whitespace inside complex literal",
            ));
        }

        let normalized = literal.replace('j', "i");

        normalized
            .parse::<Complex64>()
            .map(Self::from_complex)
            .map_err(|err| DataError::invalid_because(POINT_STRING_KIND, raw, err))
    }

    /// Resolves any supported encoding into a point. `None` stays `None`.
    pub fn from_raw(raw: Option<RawPoint>) -> Result<Option<Self>, DataError> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let point = match raw {
            RawPoint::Point(point) => point,
            RawPoint::Text(text) => Self::parse(&text)?,
            RawPoint::Real(value) => Self::from_real(value),
            RawPoint::Complex(value) => Self::from_complex(value),
            RawPoint::Sequence(values) => Self::from_sequence(&values)?,
        };

        Ok(Some(point))
    }

    pub fn from_string(raw: &str) -> Result<Self, DataError> {
        Self::parse(raw)
    }

    /// A point on the real axis.
    #[must_use]
    pub const fn from_real(value: f64) -> Self {
        Self { x: value, y: 0.0 }
    }

    #[must_use]
    pub const fn from_complex(value: Complex64) -> Self {
        Self {
            x: value.re,
            y: value.im,
        }
    }

    #[must_use]
    pub const fn from_pair(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_sequence(values: &[f64]) -> Result<Self, DataError> {
        match values {
            [x, y] => Ok(Self { x: *x, y: *y }),
            _ => Err(DataError::invalid_because(
                RAW_POINT_KIND,
                format!("{:?}", values),
                format!("expected 2 numbers, got {}", values.len()),
            )),
        }
    }

    /// The point read as `x + y·i`.
    #[must_use]
    pub const fn imaginary(self) -> Complex64 {
        Complex64::new(self.x, self.y)
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[must_use]
    pub const fn swap(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    #[must_use]
    pub fn floor(self) -> Self {
        self.map(f64::floor)
    }

    #[must_use]
    pub fn ceil(self) -> Self {
        self.map(f64::ceil)
    }

    #[must_use]
    pub fn trunc(self) -> Self {
        self.map(f64::trunc)
    }

    #[must_use]
    pub fn round(self) -> Self {
        self.map(f64::round)
    }

    /// Componentwise `(a / b).floor()`.
    #[must_use]
    pub fn floor_div(self, rhs: impl Into<Operand>) -> Self {
        (self / rhs).floor()
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
        }
    }

    fn combine(self, rhs: impl Into<Operand>, f: impl Fn(f64, f64) -> f64) -> Self {
        let (x, y) = rhs.into().components();

        Self {
            x: f(self.x, x),
            y: f(self.y, y),
        }
    }
}

/// Strips one matching pair of wrapping brackets. `None` when the brackets
/// do not match.
fn strip_brackets(raw: &str) -> Option<&str> {
    for (open, close) in [('(', ')'), ('[', ']')] {
        if let Some(rest) = raw.strip_prefix(open) {
            return rest.strip_suffix(close);
        }
    }

    if raw.ends_with([')', ']']) {
        return None;
    }

    Some(raw)
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl FromStr for Point2D {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Complex64> for Point2D {
    fn from(value: Complex64) -> Self {
        Self::from_complex(value)
    }
}

impl From<Point2D> for Complex64 {
    fn from(point: Point2D) -> Self {
        point.imaginary()
    }
}

impl<T: Into<Operand>> Add<T> for Point2D {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        self.combine(rhs, |a, b| a + b)
    }
}

impl<T: Into<Operand>> Sub<T> for Point2D {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        self.combine(rhs, |a, b| a - b)
    }
}

impl<T: Into<Operand>> Mul<T> for Point2D {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.combine(rhs, |a, b| a * b)
    }
}

impl<T: Into<Operand>> Div<T> for Point2D {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.combine(rhs, |a, b| a / b)
    }
}

impl Neg for Point2D {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

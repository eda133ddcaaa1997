//! 2D vector arithmetic
//!
//! A `Vec2d` is either a pair of grid indices or a pixel position; the type
//! does not tell them apart. All operations are component-wise and follow
//! IEEE-754 semantics, so dividing by zero yields infinity or NaN.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Ordered `(x, y)` pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

impl Vec2d {
    pub const ZERO: Vec2d = Vec2d { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Apply `f` to both components
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y))
    }
}

impl From<(f64, f64)> for Vec2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2d> for [f64; 2] {
    fn from(v: Vec2d) -> Self {
        v.to_array()
    }
}

/// Right-hand side of `mul` and `div`: one scalar for both components, or a
/// second vector applied component-wise
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    Scalar(f64),
    Vector(Vec2d),
}

impl Factor {
    fn components(self) -> (f64, f64) {
        match self {
            Factor::Scalar(s) => (s, s),
            Factor::Vector(v) => (v.x, v.y),
        }
    }
}

impl From<f64> for Factor {
    fn from(s: f64) -> Self {
        Factor::Scalar(s)
    }
}

impl From<Vec2d> for Factor {
    fn from(v: Vec2d) -> Self {
        Factor::Vector(v)
    }
}

pub fn add(a: Vec2d, b: Vec2d) -> Vec2d {
    Vec2d::new(a.x + b.x, a.y + b.y)
}

pub fn sub(a: Vec2d, b: Vec2d) -> Vec2d {
    Vec2d::new(a.x - b.x, a.y - b.y)
}

/// Multiply by a scalar or component-wise by another vector
pub fn mul(a: Vec2d, factor: impl Into<Factor>) -> Vec2d {
    let (sx, sy) = factor.into().components();
    Vec2d::new(a.x * sx, a.y * sy)
}

/// Divide by a scalar or component-wise by another vector
pub fn div(a: Vec2d, factor: impl Into<Factor>) -> Vec2d {
    let (sx, sy) = factor.into().components();
    Vec2d::new(a.x / sx, a.y / sy)
}

/// Exact component-wise equality, no tolerance
pub fn eq(a: Vec2d, b: Vec2d) -> bool {
    a.x == b.x && a.y == b.y
}

impl Add for Vec2d {
    type Output = Vec2d;

    fn add(self, rhs: Vec2d) -> Vec2d {
        add(self, rhs)
    }
}

impl Sub for Vec2d {
    type Output = Vec2d;

    fn sub(self, rhs: Vec2d) -> Vec2d {
        sub(self, rhs)
    }
}

impl Mul<f64> for Vec2d {
    type Output = Vec2d;

    fn mul(self, rhs: f64) -> Vec2d {
        mul(self, rhs)
    }
}

impl Mul<Vec2d> for Vec2d {
    type Output = Vec2d;

    fn mul(self, rhs: Vec2d) -> Vec2d {
        mul(self, rhs)
    }
}

impl Div<f64> for Vec2d {
    type Output = Vec2d;

    fn div(self, rhs: f64) -> Vec2d {
        div(self, rhs)
    }
}

impl Div<Vec2d> for Vec2d {
    type Output = Vec2d;

    fn div(self, rhs: Vec2d) -> Vec2d {
        div(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vec2d {
        Vec2d::new(x, y)
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(add(v(1.0, 2.0), v(3.0, 4.0)), v(4.0, 6.0));
        assert_eq!(sub(v(4.0, 6.0), v(3.0, 4.0)), v(1.0, 2.0));
        assert_eq!(v(1.0, 2.0) + v(3.0, 4.0), v(4.0, 6.0));
        assert_eq!(v(4.0, 6.0) - v(3.0, 4.0), v(1.0, 2.0));
    }

    #[test]
    fn test_mul_scalar_and_vector() {
        assert_eq!(mul(v(2.0, 3.0), 2.0), v(4.0, 6.0));
        assert_eq!(mul(v(2.0, 3.0), v(2.0, 4.0)), v(4.0, 12.0));
        assert_eq!(v(2.0, 3.0) * 2.0, v(4.0, 6.0));
        assert_eq!(v(2.0, 3.0) * v(2.0, 4.0), v(4.0, 12.0));
    }

    #[test]
    fn test_div_scalar_and_vector() {
        assert_eq!(div(v(4.0, 6.0), 2.0), v(2.0, 3.0));
        assert_eq!(div(v(4.0, 12.0), v(2.0, 4.0)), v(2.0, 3.0));
        assert_eq!(v(4.0, 6.0) / 2.0, v(2.0, 3.0));
        assert_eq!(v(4.0, 12.0) / v(2.0, 4.0), v(2.0, 3.0));
    }

    #[test]
    fn test_div_by_zero_is_not_an_error() {
        let r = div(v(1.0, -1.0), 0.0);
        assert_eq!(r.x, f64::INFINITY);
        assert_eq!(r.y, f64::NEG_INFINITY);

        let nan = div(v(0.0, 1.0), v(0.0, 1.0));
        assert!(nan.x.is_nan());
        assert_eq!(nan.y, 1.0);
    }

    #[test]
    fn test_eq_is_exact() {
        assert!(eq(v(1.0, 1.0), v(1.0, 1.0)));
        assert!(!eq(v(1.0, 1.0), v(1.0000001, 1.0)));
        assert!(!eq(v(f64::NAN, 0.0), v(f64::NAN, 0.0)));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Vec2d::from((1.5, -2.0)), v(1.5, -2.0));
        assert_eq!(Vec2d::from([3.0, 4.0]), v(3.0, 4.0));
        let arr: [f64; 2] = v(5.0, 6.0).into();
        assert_eq!(arr, [5.0, 6.0]);
        assert_eq!(v(1.2, -1.2).map(f64::floor), v(1.0, -2.0));
    }
}

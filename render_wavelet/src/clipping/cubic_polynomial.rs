use super::cubic_roots::*;

use smallvec::*;

///
/// A cubic polynomial `a*t^3 + b*t^2 + c*t + d`, representing one coordinate of a curve section in the power basis
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicPolynomial {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicPolynomial {
    ///
    /// Creates the polynomial for one coordinate of a cubic bezier curve with the weights w1, w2, w3, w4
    ///
    #[inline]
    pub fn from_bezier(w1: f64, w2: f64, w3: f64, w4: f64) -> Self {
        CubicPolynomial {
            a: -w1 + 3.0*w2 - 3.0*w3 + w4,
            b: 3.0*w1 - 6.0*w2 + 3.0*w3,
            c: 3.0*w2 - 3.0*w1,
            d: w1,
        }
    }

    ///
    /// Creates the polynomial for one coordinate of a quadratic bezier curve
    ///
    /// The cubic term is exactly 0 here, which is not guaranteed if the curve is degree-elevated first
    ///
    #[inline]
    pub fn from_quadratic_bezier(w1: f64, w2: f64, w3: f64) -> Self {
        CubicPolynomial {
            a: 0.0,
            b: w1 - 2.0*w2 + w3,
            c: 2.0*(w2 - w1),
            d: w1,
        }
    }

    ///
    /// Creates the polynomial for one coordinate of a straight line
    ///
    #[inline]
    pub fn from_line(w1: f64, w2: f64) -> Self {
        CubicPolynomial {
            a: 0.0,
            b: 0.0,
            c: w2 - w1,
            d: w1,
        }
    }

    ///
    /// Evaluates this polynomial at a t value
    ///
    #[inline]
    pub fn value_at(&self, t: f64) -> f64 {
        ((self.a*t + self.b)*t + self.c)*t + self.d
    }

    ///
    /// Finds the real t values where this polynomial is equal to `value` (in no particular order, and not restricted to the 0..1 range)
    ///
    #[inline]
    pub fn roots(&self, value: f64) -> SmallVec<[f64; 3]> {
        solve_cubic(self.a, self.b, self.c, self.d - value)
    }

    ///
    /// Integrates `self(t) * other'(t)` between `t0` and `t1`
    ///
    /// If `self` is the x polynomial and `other` is the y polynomial of a curve, this is the line integral of `x dy` along
    /// the part of the curve between the two t values.
    ///
    pub fn integrate_with_derivative(&self, other: &CubicPolynomial, t0: f64, t1: f64) -> f64 {
        // Coefficients in ascending order of power
        let values      = [self.d, self.c, self.b, self.a];
        let derivative  = [other.c, 2.0*other.b, 3.0*other.a];

        // Multiply out to get a quintic, then integrate each term
        let mut product = [0.0; 6];
        for (i, value) in values.iter().enumerate() {
            for (j, slope) in derivative.iter().enumerate() {
                product[i+j] += value * slope;
            }
        }

        let antiderivative = |t: f64| {
            product.iter()
                .enumerate()
                .rev()
                .fold(0.0, |total, (power, coefficient)| total*t + coefficient / ((power+1) as f64)) * t
        };

        antiderivative(t1) - antiderivative(t0)
    }
}

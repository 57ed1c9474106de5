use smallvec::*;

///
/// Leading coefficients smaller than this (relative to the largest coefficient) are treated as 0
///
const DEGENERATE_COEFFICIENT: f64 = 1e-12;

///
/// Below this size (relative to the largest coefficient), Cardano's method loses too much precision to find the roots of a 
/// cubic that are close to the origin
///
const NEARLY_QUADRATIC_COEFFICIENT: f64 = 1e-4;

///
/// Number of Newton-Raphson steps used to refine a root
///
const POLISH_ITERATIONS: usize = 4;

///
/// The roots of a quadratic with real coefficients
///
#[derive(Copy, Clone, Debug, PartialEq)]
enum QuadraticRoots {
    /// Two real roots (which may be the same value)
    Real(f64, f64),

    /// A complex conjugate pair, stored as the real and imaginary parts of the root with the positive imaginary part
    Complex(f64, f64),
}

///
/// Solves `t^2 + b*t + c = 0`
///
#[inline]
fn monic_quadratic_roots(b: f64, c: f64) -> QuadraticRoots {
    let half_b          = b / 2.0;
    let discriminant    = half_b*half_b - c;

    if discriminant >= 0.0 {
        let root = discriminant.sqrt();
        QuadraticRoots::Real(root - half_b, -root - half_b)
    } else {
        QuadraticRoots::Complex(-half_b, (-discriminant).sqrt())
    }
}

///
/// Converts a complex number to its (magnitude, argument) polar form
///
#[inline]
fn polar(re: f64, im: f64) -> (f64, f64) {
    (re.hypot(im), im.atan2(re))
}

///
/// Finds the real roots of `a*t + b = 0` (there are none if the line is flat)
///
#[inline]
fn solve_linear(a: f64, b: f64) -> SmallVec<[f64; 3]> {
    if a == 0.0 {
        smallvec![]
    } else {
        smallvec![-b / a]
    }
}

///
/// Finds the real roots of `a*t^2 + b*t + c = 0`, falling back to the linear solution if `a` is 0
///
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> SmallVec<[f64; 3]> {
    let scale = a.abs().max(b.abs()).max(c.abs());

    if scale == 0.0 {
        // Every t is a root: there's no crossing point to report
        smallvec![]
    } else if a.abs() <= scale * DEGENERATE_COEFFICIENT {
        if b.abs() <= scale * DEGENERATE_COEFFICIENT {
            smallvec![]
        } else {
            solve_linear(b, c)
        }
    } else {
        match monic_quadratic_roots(b / a, c / a) {
            QuadraticRoots::Real(t1, t2)    => smallvec![t1, t2],
            QuadraticRoots::Complex(_, _)   => smallvec![],
        }
    }
}

///
/// Finds the real roots of `a*t^3 + b*t^2 + c*t + d = 0`
///
/// The roots are returned in no particular order. Complex roots are left out, so there are between 0 and 3 results. Repeated
/// roots may be returned more than once. If `a` is 0 (or negligible compared to the other coefficients), this solves the
/// quadratic instead.
///
/// When `a` is small but not negligible, the roots near the quadratic's roots are found from the quadratic and refined
/// against the cubic. The remaining root is then very far from the origin, and is left out if the quadratic has no real
/// roots.
///
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> SmallVec<[f64; 3]> {
    let scale = a.abs().max(b.abs()).max(c.abs()).max(d.abs());

    if a.abs() <= scale * DEGENERATE_COEFFICIENT {
        return solve_quadratic(b, c, d);
    }

    if a.abs() <= scale * NEARLY_QUADRATIC_COEFFICIENT {
        // Dividing through by a loses the precision of the small roots here
        let mut roots = solve_quadratic(b, c, d).into_iter()
            .map(|t| polish_cubic_root(a, b, c, d, t))
            .collect::<SmallVec<[f64; 3]>>();

        if roots.len() == 2 {
            // The sum of the roots is -b/a
            let far_root = -b/a - roots[0] - roots[1];
            roots.push(polish_cubic_root(a, b, c, d, far_root));
        }

        return roots;
    }

    // Reduce to the depressed cubic y^3 + p*y + q = 0, where t = y - shift
    let (b_a, c_a, d_a) = (b / a, c / a, d / a);
    let shift           = b_a / 3.0;
    let p               = c_a - 3.0*shift*shift;
    let q               = d_a - c_a*shift + 2.0*shift*shift*shift;

    // Solve the quadratic resolvent u^2 + q*u - (p/3)^3 = 0 to find one real root
    let p_third     = p / 3.0;
    let y1          = match monic_quadratic_roots(q, -(p_third*p_third*p_third)) {
        QuadraticRoots::Real(u, v) => {
            // One real root: the sum of the cube roots
            u.cbrt() + v.cbrt()
        }

        QuadraticRoots::Complex(re, im) => {
            // Three real roots: take the real part of the principal cube root (2*Re(cbrt(u)))
            let (magnitude, angle) = polar(re, im);
            2.0 * magnitude.cbrt() * (angle / 3.0).cos()
        }
    };

    // Dividing out (y - y1) leaves y^2 + y1*y + (p + y1^2) = 0 for the other two roots
    let mut roots = smallvec![y1 - shift];
    if let QuadraticRoots::Real(y2, y3) = monic_quadratic_roots(y1, p + y1*y1) {
        roots.push(y2 - shift);
        roots.push(y3 - shift);
    }

    roots.iter_mut()
        .for_each(|t| *t = polish_cubic_root(a, b, c, d, *t));

    roots
}

///
/// Refines an estimate of a root of `a*t^3 + b*t^2 + c*t + d` with a few Newton-Raphson steps
///
/// A step is only taken if it moves closer to zero, so estimates near repeated roots (where the slope vanishes) are
/// left where they are.
///
fn polish_cubic_root(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let value_at = |t: f64| ((a*t + b)*t + c)*t + d;
    let slope_at = |t: f64| (3.0*a*t + 2.0*b)*t + c;

    let mut t       = t;
    let mut value   = value_at(t);

    for _ in 0..POLISH_ITERATIONS {
        let slope = slope_at(t);
        if value == 0.0 || slope == 0.0 {
            break;
        }

        let next_t      = t - value/slope;
        let next_value  = value_at(next_t);

        if !next_t.is_finite() || next_value.abs() >= value.abs() {
            break;
        }

        t       = next_t;
        value   = next_value;
    }

    t
}

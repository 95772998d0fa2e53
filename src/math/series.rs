// --- Taylor series polynomium evaluation ----

pub mod taylor {
    /// Evaluate the polynomium of order `n` with coefficients `p[0..=n]`,
    /// given in order of *decreasing* power, at `x`, using Horner's scheme.
    ///
    /// Only the first `n + 1` elements of `p` are used, so a polynomium can
    /// be evaluated directly from a slice into a longer table. A negative
    /// order conventionally gives the value 0.
    pub fn polyval(n: isize, p: &[f64], x: f64) -> f64 {
        if n < 0 {
            return 0.;
        }
        let mut coefficients = p[..=n as usize].iter();
        let Some(first) = coefficients.next() else {
            return 0.;
        };
        let mut value = *first;
        for c in coefficients {
            value = value * x + c;
        }
        value
    }
}

// --- Fourier series summation using Clenshaw's recurrence ---

pub mod fourier {
    use crate::math::complex::{Complex64, DoubleAngle};

    /// Krüger's series for the transverse Mercator, and its derivative.
    ///
    /// Given ζ = ξ + iη as `arg = [ξ, η]` and coefficients cᵢ, evaluate
    ///
    /// ```text
    ///     ζ + Σ s·cᵢ · sin(2iζ)
    ///     1 + Σ 2i · s·cᵢ · cos(2iζ)      (the derivative wrt. ζ)
    /// ```
    ///
    /// for i ∈ {1, ..., order}, with `sign` s = 1 for the forward series
    /// and s = -1 for the reverted series.
    ///
    /// Both sums are evaluated in a single pass of Clenshaw's recurrence
    ///
    /// ```text
    ///     b[k] = 2·cos(2ζ)·b[k+1] - b[k+2] + a[k]
    /// ```
    ///
    /// with a[k] = s·cₖ for the sine series, a[k] = 2k·s·cₖ for the cosine
    /// series. Since sin(0) = 0, and with a[0] = 1 for the cosine series,
    /// the sums are recovered as
    ///
    /// ```text
    ///     S = b[1] · sin(2ζ)
    ///     C = (1 - b[2]) + b[1] · cos(2ζ)
    /// ```
    ///
    /// The recurrence is unrolled two steps at a time, so the two sets of
    /// accumulators trade roles instead of being rotated. Odd orders seed the
    /// recurrence with the highest order coefficient.
    ///
    /// Returns `(ζ + S, C)`, i.e. the summed series and the complex derivative,
    /// the latter carrying the convergence (its argument) and scale (its
    /// magnitude) corrections.
    pub fn complex_sin_with_derivative(
        arg: [f64; 2],
        coefficients: &[f64],
        sign: f64,
    ) -> (Complex64, Complex64) {
        let trig = DoubleAngle::new(arg[0], arg[1]);
        let a = trig.twice_cos();

        // The coefficient of order k (1-based), and its derivative weight
        let coef = |k: usize| sign * coefficients[k - 1];
        let weight = |k: usize| (2 * k) as f64;

        let zero = Complex64::new(0., 0.);
        let mut n = coefficients.len();
        let (mut y0, mut z0) = if n & 1 == 1 {
            (
                Complex64::new(coef(n), 0.),
                Complex64::new(weight(n) * coef(n), 0.),
            )
        } else {
            (zero, zero)
        };
        let (mut y1, mut z1) = (zero, zero);
        if n & 1 == 1 {
            n -= 1;
        }

        while n > 0 {
            y1 = a * y0 - y1 + coef(n);
            z1 = a * z0 - z1 + weight(n) * coef(n);
            n -= 1;
            y0 = a * y1 - y0 + coef(n);
            z0 = a * z1 - z0 + weight(n) * coef(n);
            n -= 1;
        }

        let derivative = 1. - z1 + trig.cos() * z0;
        let sum = Complex64::new(arg[0], arg[1]) + trig.sin() * y0;
        (sum, derivative)
    }
}

// ----- Tests ---------------------------------------------------------------------

//! Complex values are `num_complex::Complex64`: plain IEEE double arithmetic
//! for sums, products and scalar quotients, and `norm()` (a hypot) for the
//! magnitude.
//!
//! For ζ = ξ + iη, the double angle functions needed by the Clenshaw
//! summation are built from the real trigonometric and hyperbolic functions
//! of 2ξ and 2η, which the caller computes once and passes in, as
//!
//! ```text
//! cos(2ζ) = cos 2ξ · cosh 2η  -  i · sin 2ξ · sinh 2η
//! sin(2ζ) = sin 2ξ · cosh 2η  +  i · cos 2ξ · sinh 2η
//! ```
pub use num_complex::Complex64;

/// The trigonometric and hyperbolic functions of twice the real and imaginary
/// parts of a complex argument.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoubleAngle {
    sin: f64,
    cos: f64,
    sinh: f64,
    cosh: f64,
}

impl DoubleAngle {
    /// Prepare the double angle functions of `xi + i·eta`
    #[must_use]
    pub fn new(xi: f64, eta: f64) -> DoubleAngle {
        let (sin, cos) = (2. * xi).sin_cos();
        DoubleAngle {
            sin,
            cos,
            sinh: (2. * eta).sinh(),
            cosh: (2. * eta).cosh(),
        }
    }

    /// `2·cos(2ζ)`, the multiplier of the Clenshaw recurrence
    #[must_use]
    pub fn twice_cos(&self) -> Complex64 {
        Complex64::new(2. * self.cos * self.cosh, -2. * self.sin * self.sinh)
    }

    /// `cos(2ζ)`
    #[must_use]
    pub fn cos(&self) -> Complex64 {
        self.twice_cos() / 2.
    }

    /// `sin(2ζ)`
    #[must_use]
    pub fn sin(&self) -> Complex64 {
        Complex64::new(self.sin * self.cosh, self.cos * self.sinh)
    }
}

// ----- Tests ---------------------------------------------------------------------

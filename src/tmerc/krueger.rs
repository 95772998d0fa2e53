//! Transverse Mercator by [Krüger's](crate::Bibliography::Kru12) series,
//! following [Karney, 2011](crate::Bibliography::Kar11)
//!
//! The mapping goes through two stages: From geographical coordinates to
//! the Gauss-Schreiber (conformal) transverse Mercator, ζ′ = ξ′ + iη′, and
//! from there to Gauss-Krüger, ζ = ξ + iη, by the α series. The inverse
//! runs the β series from ζ back to ζ′, then recovers the latitude from the
//! conformal latitude by Newton's method.
//!
//! Both directions fold their input into the first quadrant (and, beyond
//! 90° from the central meridian, onto the front side) and unfold the
//! result at the end, so the series are only ever evaluated there.
//!
//! At the pole, the Gauss-Schreiber scale is the meridian constant, *c*,
//! of [Lee, 1976](crate::Bibliography::Lee76), p. 100.
use std::f64::consts::{FRAC_PI_2, PI};

use log::{debug, error};

use super::coefficients::{KruegerCoefficients, SeriesOrder};
use super::{Geographic, Projected, Projection};
use crate::ellipsoid::Ellipsoid;
use crate::math::angular::{atan2d, atand, difference, lat_fix, normalize, sincosd};
use crate::math::fourier::complex_sin_with_derivative;
use crate::math::{eatanhe, tauf, taupf};
use crate::Error;

/// The precomputed state of the series engine
#[derive(Clone, Debug, PartialEq)]
pub struct Krueger {
    // e², negative for prolate ellipsoids
    e2: f64,
    // The signed eccentricity
    es: f64,
    // 1 - e²
    e2m: f64,
    // The meridian constant: The Gauss-Schreiber scale at the pole
    c: f64,
    // The rectifying radius, b1·a
    a1: f64,
    k0: f64,
    order: SeriesOrder,
    coefficients: KruegerCoefficients,
}

// ----- C O N S T R U C T O R S -------------------------------------------------------

impl Krueger {
    /// Validate the ellipsoid and scale, then precompute.
    pub fn new(ellps: &Ellipsoid, k0: f64, order: SeriesOrder) -> Result<Krueger, Error> {
        let a = ellps.semimajor_axis();
        if !(a.is_finite() && a > 0.) {
            error!("TransverseMercator: a = {a}. Must be positive and finite");
            return Err(Error::Configuration("Equatorial radius is not positive"));
        }

        let f = ellps.flattening();
        let b = ellps.semiminor_axis();
        if !(f.is_finite() && b > 0.) {
            error!("TransverseMercator: f = {f}, b = {b}. Polar semi-axis must be positive");
            return Err(Error::Configuration("Polar semi-axis is not positive"));
        }

        if !(k0.is_finite() && k0 > 0.) {
            error!("TransverseMercator: k0 = {k0}. Must be positive and finite");
            return Err(Error::Configuration("Scale is not positive"));
        }

        Ok(Krueger::precompute(ellps, k0, order))
    }

    /// Precompute without validation. For parameters known to be valid.
    pub(super) fn precompute(ellps: &Ellipsoid, k0: f64, order: SeriesOrder) -> Krueger {
        let e2 = ellps.eccentricity_squared();
        let es = ellps.signed_eccentricity();
        let e2m = 1. - e2;

        // c = sqrt( pow(1 + e, 1 + e) * pow(1 - e, 1 - e) )
        let c = e2m.sqrt() * eatanhe(1., es).exp();

        let n = ellps.third_flattening();
        let coefficients = KruegerCoefficients::new(n, order);
        let a1 = coefficients.b1 * ellps.semimajor_axis();

        debug!(
            "Krueger: order {}, n = {n}, b1 = {}, a1 = {a1}",
            order.order(),
            coefficients.b1
        );

        Krueger {
            e2,
            es,
            e2m,
            c,
            a1,
            k0,
            order,
            coefficients,
        }
    }

    #[must_use]
    pub fn order(&self) -> SeriesOrder {
        self.order
    }
}

// ----- F O R W A R D -----------------------------------------------------------------

impl Krueger {
    pub fn forward(&self, lon0: f64, lat: f64, lon: f64) -> Projected {
        let lat = lat_fix(lat);
        let lon = difference(lon0, lon);

        // Fold into the first quadrant. The signs are taken from the sign
        // bits, so -0 counts as negative.
        let mut latsign = if lat.is_sign_negative() { -1. } else { 1. };
        let lonsign = if lon.is_sign_negative() { -1. } else { 1. };
        let lat = lat * latsign;
        let mut lon = lon * lonsign;

        // Beyond 90° from the central meridian: Fold onto the front side.
        // The equator maps to the negative northing on the back side.
        let backside = lon > 90.;
        if backside {
            if lat == 0. {
                latsign = -1.;
            }
            lon = 180. - lon;
        }

        let (sphi, cphi) = sincosd(lat);
        let (slam, clam) = sincosd(lon);

        // --- 1. Geographical -> Gauss-Schreiber, with convergence and scale

        let (xip, etap, mut gamma, mut k) = if lat != 90. {
            let tau = sphi / cphi;
            let taup = taupf(tau, self.es);
            let xip = taup.atan2(clam);
            let etap = (slam / taup.hypot(clam)).asinh();
            let gamma = atan2d(slam * taup, clam * 1_f64.hypot(taup));
            let k = (self.e2m + self.e2 * (cphi * cphi)).sqrt() * 1_f64.hypot(tau)
                / taup.hypot(clam);
            (xip, etap, gamma, k)
        } else {
            // At the pole: The convergence is the longitude, the scale is c
            (FRAC_PI_2, 0., lon, self.c)
        };

        // --- 2. Gauss-Schreiber -> Gauss-Krüger

        let (zeta, dzeta) = complex_sin_with_derivative([xip, etap], self.coefficients.alpha(), 1.);
        gamma -= atan2d(dzeta.im, dzeta.re);
        k *= self.coefficients.b1 * dzeta.norm();

        // --- 3. Unfold and scale

        let xi = if backside { PI - zeta.re } else { zeta.re };
        let y = self.a1 * self.k0 * xi * latsign;
        let x = self.a1 * self.k0 * zeta.im * lonsign;

        if backside {
            gamma = 180. - gamma;
        }
        gamma *= latsign * lonsign;
        let gamma = normalize(gamma);
        k *= self.k0;

        Projected { x, y, gamma, k }
    }
}

// ----- I N V E R S E -----------------------------------------------------------------

impl Krueger {
    pub fn reverse(&self, lon0: f64, x: f64, y: f64) -> Result<Geographic, Error> {
        let xi = y / (self.a1 * self.k0);
        let eta = x / (self.a1 * self.k0);

        // Fold into the first quadrant, and onto the front side
        let xisign = if xi.is_sign_negative() { -1. } else { 1. };
        let etasign = if eta.is_sign_negative() { -1. } else { 1. };
        let mut xi = xi * xisign;
        let eta = eta * etasign;
        let backside = xi > FRAC_PI_2;
        if backside {
            xi = PI - xi;
        }

        // --- 1. Gauss-Krüger -> Gauss-Schreiber

        let (zetap, dzeta) = complex_sin_with_derivative([xi, eta], self.coefficients.beta(), -1.);
        let mut gamma = atan2d(dzeta.im, dzeta.re);
        let mut k = self.coefficients.b1 / dzeta.norm();
        let (xip, etap) = (zetap.re, zetap.im);

        // --- 2. Gauss-Schreiber -> Geographical

        let s = etap.sinh();
        // cos(π/2) may come out slightly negative
        let c = xip.cos().max(0.);
        let r = s.hypot(c);

        let (mut lat, mut lon);
        if r != 0. {
            lon = atan2d(s, c);
            let sxip = xip.sin();
            let tau = tauf(sxip / r, self.es)?;
            gamma += atan2d(sxip * etap.tanh(), c);
            lat = atand(tau);
            k *= (self.e2m + self.e2 / (1. + tau * tau)).sqrt() * 1_f64.hypot(tau) * r;
        } else {
            lat = 90.;
            lon = 0.;
            k *= self.c;
        }

        // --- 3. Unfold

        lat *= xisign;
        if backside {
            lon = 180. - lon;
        }
        lon *= etasign;
        let lon = normalize(lon + lon0);

        if backside {
            gamma = 180. - gamma;
        }
        gamma *= xisign * etasign;
        let gamma = normalize(gamma);
        k *= self.k0;

        Ok(Geographic { lat, lon, gamma, k })
    }
}

impl Projection for Krueger {
    fn fwd(&self, lon0: f64, lat: f64, lon: f64) -> Projected {
        self.forward(lon0, lat, lon)
    }

    fn inv(&self, lon0: f64, x: f64, y: f64) -> Result<Geographic, Error> {
        self.reverse(lon0, x, y)
    }
}

// ----- Tests ---------------------------------------------------------------------

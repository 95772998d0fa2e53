mod constants;

use crate::Error;
use log::error;

/// An ellipsoid of revolution, given by its semimajor axis and flattening.
///
/// A negative flattening describes a prolate ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::new(6_378_137.0, 1. / 298.257_222_100_882_7)
    }
}

/// Constructors for `Ellipsoid`
impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// Predefined ellipsoid; built-in, or given as a string formatted
    /// (a, rf) tuple, e.g. "6378137, 298.25"
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        // Is it one of the few builtins?
        if let Some(e) = constants::ELLIPSOID_LIST
            .iter()
            .find(|&ellps| ellps.0 == name)
        {
            // EPSG convention: zero reciproque flattening indicates zero flattening
            let f = if e.2 != 0.0 { 1.0 / e.2 } else { e.2 };
            return Ok(Ellipsoid::new(e.1, f));
        }

        // Remove optional parenthesis
        let trimmed = name.trim();
        let trimmed = trimmed
            .strip_prefix('(')
            .and_then(|n| n.strip_suffix(')'))
            .unwrap_or(trimmed);

        // The "semimajor, reciproque-flattening" form, e.g. "6378137, 298.3"
        let a_and_rf = trimmed.split(',').collect::<Vec<_>>();
        if a_and_rf.len() == 2_usize {
            if let Ok(a) = a_and_rf[0].trim().parse::<f64>() {
                if let Ok(rf) = a_and_rf[1].trim().parse::<f64>() {
                    let f = if rf != 0.0 { 1.0 / rf } else { rf };
                    return Ok(Ellipsoid::new(a, f));
                }
            }
        }

        error!("Ellipsoid::named: {name} is neither a builtin nor an (a, rf) pair");
        Err(Error::NotFound(String::from(name)))
    }

    // ----- Size and shape ------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The third flattening, *n = (a - b) / (a + b) = f / (2 - f)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.f / (2.0 - self.f)
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a² = f(2 - f)*.
    /// Negative for prolate ellipsoids.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The signed eccentricity: *sqrt(|e²|)*, carrying the sign of the
    /// flattening, hence negative for prolate ellipsoids
    #[must_use]
    pub fn signed_eccentricity(&self) -> f64 {
        let e = self.eccentricity_squared().abs().sqrt();
        if self.f < 0. {
            -e
        } else {
            e
        }
    }
}

// ----- Tests ---------------------------------------------------------------------

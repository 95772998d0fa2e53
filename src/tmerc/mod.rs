//! The transverse Mercator projection.
//!
//! [`TransverseMercator`] is an immutable, precomputed projection object:
//! An ellipsoid, a central scale factor, and the engine doing the work.
//! By default that is Krüger's series of order 6, good to about 5 nm
//! within the UTM domain (3.9° from the central meridian), and to a few
//! mm out to 1000 km from it. An exact engine may be supplied through
//! [`Algorithm::Exact`], in which case all work is delegated to that.
//!
//! Angles are in degrees, lengths in the units of the semimajor axis. The
//! central meridian, `lon0`, is given per call, so one object serves any
//! number of zones.
//!
//! See [Deakin et al., 2012](crate::Bibliography::Dea12) for a survey of the
//! Karney-Krüger equations as applied to UTM.

pub mod coefficients;
mod krueger;

use std::fmt::Debug;
use std::sync::Arc;

use log::{debug, error, trace, warn};
use once_cell::sync::Lazy;

pub use coefficients::SeriesOrder;
use krueger::Krueger;

use crate::coordinate::Coor2D;
use crate::ellipsoid::Ellipsoid;
use crate::{Direction, Error};

/// The central scale factor of UTM
pub const UTM_SCALE: f64 = 0.9996;

/// Projected coordinates: Easting, `x`, and northing, `y`, relative to the
/// intersection of the central meridian and the equator, along with the
/// meridian convergence, `gamma` (degrees), and the point scale, `k`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub gamma: f64,
    pub k: f64,
}

/// Geographical coordinates in degrees, with the longitude in (-180, 180],
/// along with the meridian convergence, `gamma` (degrees), and the point
/// scale, `k`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geographic {
    pub lat: f64,
    pub lon: f64,
    pub gamma: f64,
    pub k: f64,
}

/// A transverse Mercator engine, bound to an ellipsoid and a central scale.
///
/// The series engine implements this, and so must any exact engine plugged
/// in through [`Algorithm::Exact`]. Implementations are shared between
/// threads, so they must be `Send + Sync`.
pub trait Projection: Debug + Send + Sync {
    /// Geographical to projected. Never fails: Invalid input gives NaN output
    fn fwd(&self, lon0: f64, lat: f64, lon: f64) -> Projected;

    /// Projected to geographical
    fn inv(&self, lon0: f64, x: f64, y: f64) -> Result<Geographic, Error>;
}

/// The computational method
#[derive(Clone, Debug, Default)]
pub enum Algorithm {
    /// Krüger's series
    #[default]
    Series,
    /// Delegate to an exact engine, which is assumed to have validated its
    /// own parameters.
    ///
    /// The ellipsoid and central scale given to [`TransverseMercator`] are
    /// not checked against the engine: They are only stored, and reported
    /// by the accessors. Keeping them consistent is up to the caller.
    Exact(Arc<dyn Projection>),
}

/// Construction options for [`TransverseMercator`]
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// The series order. Ignored by exact engines
    pub order: SeriesOrder,
    pub algorithm: Algorithm,
    /// Extend the domain beyond the reach of the series. Only meaningful
    /// (and only allowed) for exact engines
    pub extended_domain: bool,
}

#[derive(Clone, Debug)]
enum Engine {
    Series(Krueger),
    Exact(Arc<dyn Projection>),
}

/// The transverse Mercator projection for a given ellipsoid and central scale
#[derive(Clone, Debug)]
pub struct TransverseMercator {
    ellps: Ellipsoid,
    k0: f64,
    engine: Engine,
}

// ----- C O N S T R U C T O R S -------------------------------------------------------

impl TransverseMercator {
    /// The series of order 6 for `ellps`, with central scale `k0`.
    pub fn new(ellps: Ellipsoid, k0: f64) -> Result<TransverseMercator, Error> {
        TransverseMercator::with_options(ellps, k0, Options::default())
    }

    /// Construct according to `options`.
    ///
    /// For the series, the semimajor axis and the scale must be positive
    /// and finite, and the flattening finite and below 1 (i.e. the polar
    /// semi-axis must be positive). An extended domain is only allowed for
    /// exact engines. Exact engines are taken as given.
    pub fn with_options(
        ellps: Ellipsoid,
        k0: f64,
        options: Options,
    ) -> Result<TransverseMercator, Error> {
        let engine = match options.algorithm {
            Algorithm::Series => {
                let series = Krueger::new(&ellps, k0, options.order)?;
                if options.extended_domain {
                    error!("TransverseMercator: The series do not support an extended domain");
                    return Err(Error::Configuration(
                        "TransverseMercator extended domain not allowed if not exact",
                    ));
                }
                Engine::Series(series)
            }
            Algorithm::Exact(exact) => Engine::Exact(exact),
        };

        let tm = TransverseMercator { ellps, k0, engine };
        debug!("{tm:?}");
        Ok(tm)
    }
}

/// The shared UTM projection: WGS84, central scale 0.9996, series of order 6.
///
/// Built on first use, and immutable from then on. Easting and northing are
/// returned without the false easting (500 km) and false northing (10000
/// km on the southern hemisphere) of the UTM grid.
pub fn utm() -> &'static TransverseMercator {
    static UTM: Lazy<TransverseMercator> = Lazy::new(|| {
        let ellps = Ellipsoid::new(6_378_137.0, 1. / 298.257_223_563);
        let order = SeriesOrder::default();
        trace!("Creating the UTM singleton");
        TransverseMercator {
            ellps,
            k0: UTM_SCALE,
            engine: Engine::Series(Krueger::precompute(&ellps, UTM_SCALE, order)),
        }
    });
    &UTM
}

// ----- O P E R A T I O N S -----------------------------------------------------------

impl TransverseMercator {
    /// Geographical to projected coordinates, for the central meridian
    /// `lon0`. Latitudes outside [-90, 90] give NaN output.
    #[must_use]
    pub fn fwd(&self, lon0: f64, lat: f64, lon: f64) -> Projected {
        match &self.engine {
            Engine::Series(series) => series.forward(lon0, lat, lon),
            Engine::Exact(exact) => exact.fwd(lon0, lat, lon),
        }
    }

    /// Projected to geographical coordinates, for the central meridian
    /// `lon0`. The longitude is returned in (-180, 180].
    pub fn inv(&self, lon0: f64, x: f64, y: f64) -> Result<Geographic, Error> {
        match &self.engine {
            Engine::Series(series) => series.reverse(lon0, x, y),
            Engine::Exact(exact) => exact.inv(lon0, x, y),
        }
    }

    /// Convert a batch of coordinates in place, in the given direction.
    ///
    /// Geographical coordinates are in `Coor2D` GIS order, (lon, lat);
    /// projected as (x, y). Coordinates that cannot be converted are set
    /// to NaN. Returns the number of successful conversions.
    pub fn apply(&self, lon0: f64, direction: Direction, operands: &mut [Coor2D]) -> usize {
        let mut successes = 0_usize;
        for coord in operands.iter_mut() {
            let converted = match direction {
                Direction::Fwd => {
                    let p = self.fwd(lon0, coord[1], coord[0]);
                    Coor2D::raw(p.x, p.y)
                }
                Direction::Inv => match self.inv(lon0, coord[0], coord[1]) {
                    Ok(g) => Coor2D::gis(g.lon, g.lat),
                    Err(e) => {
                        warn!("TransverseMercator: Cannot invert {coord:?}: {e}");
                        Coor2D::nan()
                    }
                },
            };
            *coord = converted;
            if !converted.is_nan() {
                successes += 1;
            }
        }
        successes
    }
}

// ----- A C C E S S O R S -------------------------------------------------------------

impl TransverseMercator {
    /// The ellipsoid
    #[must_use]
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellps
    }

    /// The semimajor axis of the ellipsoid
    #[must_use]
    pub fn equatorial_radius(&self) -> f64 {
        self.ellps.semimajor_axis()
    }

    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.ellps.flattening()
    }

    /// The scale factor on the central meridian, k0
    #[must_use]
    pub fn central_scale(&self) -> f64 {
        self.k0
    }

    /// The series order, or `None` for exact engines
    #[must_use]
    pub fn order(&self) -> Option<SeriesOrder> {
        match &self.engine {
            Engine::Series(series) => Some(series.order()),
            Engine::Exact(_) => None,
        }
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self.engine, Engine::Exact(_))
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn construction() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;
        let tm = TransverseMercator::new(ellps, 0.9996)?;
        assert_eq!(tm.ellipsoid(), ellps);
        assert_eq!(tm.equatorial_radius(), 6_378_137.0);
        assert_eq!(tm.flattening(), 1. / 298.257_222_100_882_7);
        assert_eq!(tm.central_scale(), 0.9996);
        assert_eq!(tm.order(), Some(SeriesOrder::Six));
        assert!(!tm.is_exact());

        let options = Options {
            order: SeriesOrder::Four,
            ..Default::default()
        };
        let tm = TransverseMercator::with_options(ellps, 1., options)?;
        assert_eq!(tm.order(), Some(SeriesOrder::Four));

        // The series cannot handle the extended domain
        let options = Options {
            extended_domain: true,
            ..Default::default()
        };
        assert_eq!(
            TransverseMercator::with_options(ellps, 1., options).unwrap_err(),
            Error::Configuration("TransverseMercator extended domain not allowed if not exact")
        );

        // Parameter errors take precedence
        let options = Options {
            extended_domain: true,
            ..Default::default()
        };
        assert_eq!(
            TransverseMercator::with_options(ellps, 0., options).unwrap_err(),
            Error::Configuration("Scale is not positive")
        );
        Ok(())
    }

    #[test]
    fn singleton() {
        let utm = utm();
        assert!(std::ptr::eq(utm, super::utm()));
        assert_eq!(utm.equatorial_radius(), 6_378_137.0);
        assert_eq!(utm.flattening(), 1. / 298.257_223_563);
        assert_eq!(utm.central_scale(), 0.9996);
        assert_eq!(utm.order(), Some(SeriesOrder::Six));

        // Identical to one constructed the usual way
        let ellps = Ellipsoid::named("WGS84").unwrap();
        let tm = TransverseMercator::new(ellps, UTM_SCALE).unwrap();
        assert_eq!(utm.fwd(-3., 51.5, -0.1), tm.fwd(-3., 51.5, -0.1));
    }

    #[test]
    fn apply() {
        let tm = TransverseMercator::new(Ellipsoid::named("GRS80").unwrap(), 0.9996).unwrap();
        let mut operands = [
            Coor2D::geo(55., 12.),
            Coor2D::geo(95., 12.),
            Coor2D::geo(-55., 6.),
        ];
        let original = operands;

        assert_eq!(tm.apply(9., Direction::Fwd, &mut operands), 2);
        assert_float_eq!(operands[0][0], 191_875.632_139_660_88, abs <= 1e-6);
        assert_float_eq!(operands[0][1], 6_098_907.825_005_001, abs <= 1e-6);
        assert!(operands[1].is_nan());
        assert!(operands[2][0] < 0. && operands[2][1] < 0.);

        assert_eq!(tm.apply(9., Direction::Inv, &mut operands), 2);
        for i in [0, 2] {
            assert_float_eq!(operands[i][0], original[i][0], abs <= 1e-9);
            assert_float_eq!(operands[i][1], original[i][1], abs <= 1e-9);
        }
        assert!(operands[1].is_nan());
    }
}

use kruger::prelude::*;
use kruger::tmerc::utm;

use float_eq::assert_float_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn zone_32() -> Result<(), Error> {
    init_logging();
    let tm = TransverseMercator::new(Ellipsoid::named("GRS80")?, 0.9996)?;

    // Validation values from PROJ:
    // echo 12 55 0 0 | cct -d18 +proj=utm +zone=32 +ellps=GRS80
    #[rustfmt::skip]
    let geo = [
        Coor2D::geo( 55.,  12.),
        Coor2D::geo(-55.,  12.),
        Coor2D::geo( 55., -6.),
        Coor2D::geo(-55., -6.),
    ];

    #[rustfmt::skip]
    let projected = [
        Coor2D::raw( 691_875.632_139_661, 6_098_907.825_005_012),
        Coor2D::raw( 691_875.632_139_661,-6_098_907.825_005_012),
        Coor2D::raw(-455_673.814_189_040, 6_198_246.671_090_279),
        Coor2D::raw(-455_673.814_189_040,-6_198_246.671_090_279),
    ];

    // The false easting is the caller's business
    let false_easting = 500_000.;
    for i in 0..geo.len() {
        let p = tm.fwd(9., geo[i][1], geo[i][0]);
        assert_float_eq!(p.x + false_easting, projected[i][0], abs <= 1e-7);
        assert_float_eq!(p.y, projected[i][1], abs <= 1e-7);

        let g = tm.inv(9., p.x, p.y)?;
        assert_float_eq!(g.lon, geo[i][0], abs <= 1e-12);
        assert_float_eq!(g.lat, geo[i][1], abs <= 1e-12);
        assert_float_eq!(g.gamma, p.gamma, abs <= 1e-12);
        assert_float_eq!(g.k, p.k, abs <= 1e-14);
    }

    // The convergence flips sign with the latitude, and with the side of
    // the central meridian
    let north_east = tm.fwd(9., 55., 12.);
    let north_west = tm.fwd(9., 55., -6.);
    let south_east = tm.fwd(9., -55., 12.);
    assert_float_eq!(north_east.gamma, 2.458_199_874_231_578_3, abs <= 1e-12);
    assert_float_eq!(north_west.gamma, -12.380_205_635_842_826, abs <= 1e-12);
    assert_eq!(south_east.gamma, -north_east.gamma);
    assert_float_eq!(north_east.k, 1.000_051_680_955_137_6, abs <= 1e-14);
    Ok(())
}

#[test]
fn batch() -> Result<(), Error> {
    init_logging();
    let tm = TransverseMercator::new(Ellipsoid::named("GRS80")?, 0.9996)?;

    #[rustfmt::skip]
    let geo = [
        Coor2D::geo( 55.,  12.),
        Coor2D::geo(-55.,  12.),
        Coor2D::geo( 55., -6.),
        Coor2D::geo(-55., -6.),
    ];

    let mut operands = geo;
    assert_eq!(tm.apply(9., Fwd, &mut operands), 4);
    assert_float_eq!(operands[0].0, [191_875.632_139_661, 6_098_907.825_005_012], abs_all <= 1e-7);
    assert_float_eq!(operands[3].0, [-955_673.814_189_040, -6_198_246.671_090_279], abs_all <= 1e-7);

    assert_eq!(tm.apply(9., Inv, &mut operands), 4);
    for i in 0..operands.len() {
        assert_float_eq!(operands[i].0, geo[i].0, abs_all <= 1e-12);
    }

    // Failures are flagged by NaN, and not counted
    let mut operands = [Coor2D::geo(91., 12.), Coor2D::geo(55., 12.), Coor2D::nan()];
    assert_eq!(tm.apply(9., Fwd, &mut operands), 1);
    assert!(operands[0].is_nan());
    assert!(!operands[1].is_nan());
    assert!(operands[2].is_nan());
    Ok(())
}

#[test]
fn british_national_grid() -> Result<(), Error> {
    // The Ordnance Survey National Grid, with the false origin at 49N 2W,
    // computed as offsets from the projected false origin.
    let airy = Ellipsoid::named("airy")?;
    let tm = TransverseMercator::new(airy, 0.999_601_271_7)?;
    let (lat_0, lon_0) = (49., -2.);
    let (x_0, y_0) = (400_000., -100_000.);
    let origin = tm.fwd(lon_0, lat_0, lon_0);
    assert_eq!(origin.x, 0.);

    // Expected value from PROJ:
    // echo 1 52 0 0 | cct -d 15 proj=tmerc lat_0=49 lon_0=-2 k_0=0.9996012717 x_0=400000 y_0=-100000 ellps=airy
    let p = tm.fwd(lon_0, 52., 1.);
    assert_float_eq!(p.x + x_0, 605_909.130_344_302_4, abs <= 1e-8);
    assert_float_eq!(p.y - origin.y + y_0, 237_803.365_171_569_4, abs <= 1e-8);

    let g = tm.inv(lon_0, p.x, p.y)?;
    assert_float_eq!(g.lat, 52., abs <= 1e-12);
    assert_float_eq!(g.lon, 1., abs <= 1e-12);
    Ok(())
}

#[test]
fn london() -> Result<(), Error> {
    // UTM zone 30, central meridian 3W
    let utm = utm();
    let p = utm.fwd(-3., 51.5, -0.1);
    assert_float_eq!(p.x, 201_277.665_127_027_9, abs <= 1e-8);
    assert_float_eq!(p.y, 5_709_417.124_847_525, abs <= 1e-8);
    assert_float_eq!(p.gamma, 2.270_320_662_406_166_7, abs <= 1e-12);
    assert_float_eq!(p.k, 1.000_097_426_032_848_3, abs <= 1e-14);

    let g = utm.inv(-3., p.x, p.y)?;
    assert_float_eq!(g.lat, 51.5, abs <= 1e-12);
    assert_float_eq!(g.lon, -0.1, abs <= 1e-12);

    // The central meridian may be given in any revolution
    let q = utm.fwd(357., 51.5, -0.1);
    assert_float_eq!(q.x, p.x, abs <= 1e-8);
    assert_float_eq!(q.y, p.y, abs <= 1e-8);
    Ok(())
}

#[test]
fn series_orders() -> Result<(), Error> {
    let wgs84 = Ellipsoid::named("WGS84")?;
    let reference = utm().fwd(-3., 51.5, -0.1);

    for order in 4..=8 {
        let options = Options {
            order: SeriesOrder::try_from(order)?,
            ..Default::default()
        };
        let tm = TransverseMercator::with_options(wgs84, 0.9996, options)?;
        assert_eq!(tm.order().map(|o| o.order()), Some(order));

        // Order 4 is good to a fraction of a micrometer here, the others
        // to within rounding
        let tolerance = if order == 4 { 1e-6 } else { 1e-8 };
        let p = tm.fwd(-3., 51.5, -0.1);
        assert_float_eq!(p.x, reference.x, abs <= tolerance);
        assert_float_eq!(p.y, reference.y, abs <= tolerance);
    }

    assert!(matches!(
        SeriesOrder::try_from(3),
        Err(Error::Configuration(_))
    ));
    assert!(SeriesOrder::try_from(9).is_err());
    Ok(())
}

#[test]
fn configuration_errors() {
    init_logging();
    let k0 = 0.9996;
    let expect = |ellps: Ellipsoid, k0: f64, message: &'static str| {
        let tm = TransverseMercator::new(ellps, k0);
        assert_eq!(tm.unwrap_err(), Error::Configuration(message));
    };

    expect(Ellipsoid::new(0., 0.), k0, "Equatorial radius is not positive");
    expect(Ellipsoid::new(f64::NAN, 0.), k0, "Equatorial radius is not positive");
    expect(Ellipsoid::new(1., 1.), k0, "Polar semi-axis is not positive");
    expect(Ellipsoid::new(1., f64::INFINITY), k0, "Polar semi-axis is not positive");
    expect(Ellipsoid::new(1., 0.), 0., "Scale is not positive");
    expect(Ellipsoid::new(1., 0.), f64::INFINITY, "Scale is not positive");

    let options = Options {
        extended_domain: true,
        ..Default::default()
    };
    let tm = TransverseMercator::with_options(Ellipsoid::default(), k0, options);
    assert_eq!(
        tm.unwrap_err(),
        Error::Configuration("TransverseMercator extended domain not allowed if not exact")
    );

    // The messages are carried through to the Display output
    let err = TransverseMercator::new(Ellipsoid::default(), -1.).unwrap_err();
    assert!(err.to_string().contains("Scale is not positive"));
}

#[test]
fn sphere_and_prolate() -> Result<(), Error> {
    // On the sphere, the classical closed form applies:
    // x = R k0 atanh(cos φ sin λ), y = R k0 atan2(tan φ, cos λ)
    let sphere = Ellipsoid::named("sphere")?;
    let r = sphere.semimajor_axis();
    let tm = TransverseMercator::new(sphere, 1.)?;
    let (lat, lon) = (40_f64, 25_f64);
    let p = tm.fwd(0., lat, lon);
    let (phi, lam) = (lat.to_radians(), lon.to_radians());
    assert_float_eq!(p.x, r * (phi.cos() * lam.sin()).atanh(), abs <= 1e-8);
    assert_float_eq!(p.y, r * phi.tan().atan2(lam.cos()), abs <= 1e-8);
    assert_float_eq!(p.k, 1. / (1. - (phi.cos() * lam.sin()).powi(2)).sqrt(), abs <= 1e-14);

    // Prolate ellipsoids round trip too
    let prolate = Ellipsoid::new(6_378_137., -1. / 150.);
    let tm = TransverseMercator::new(prolate, 0.9996)?;
    for (lat, lon) in [(0., 0.), (45., 3.), (-70., -20.), (89.5, 10.)] {
        let p = tm.fwd(0., lat, lon);
        let g = tm.inv(0., p.x, p.y)?;
        assert_float_eq!(g.lat, lat, abs <= 1e-12);
        assert_float_eq!(g.lon, lon, abs <= 1e-12);
    }
    Ok(())
}

// ----- An exact engine, as seen from the outside ------------------------------------

/// Counts the calls, and hands them over to the series
#[derive(Debug)]
struct Counting {
    inner: TransverseMercator,
    calls: AtomicUsize,
}

impl Projection for Counting {
    fn fwd(&self, lon0: f64, lat: f64, lon: f64) -> Projected {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.fwd(lon0, lat, lon)
    }

    fn inv(&self, lon0: f64, x: f64, y: f64) -> Result<Geographic, Error> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.inv(lon0, x, y)
    }
}

#[test]
fn exact_delegation() -> Result<(), Error> {
    let wgs84 = Ellipsoid::named("WGS84")?;
    let engine = Arc::new(Counting {
        inner: TransverseMercator::new(wgs84, 0.9996)?,
        calls: AtomicUsize::new(0),
    });

    let options = Options {
        algorithm: Algorithm::Exact(engine.clone()),
        extended_domain: true,
        ..Default::default()
    };
    let tm = TransverseMercator::with_options(wgs84, 0.9996, options)?;
    assert!(tm.is_exact());
    assert_eq!(tm.order(), None);
    assert_eq!(tm.central_scale(), 0.9996);

    let p = tm.fwd(-3., 51.5, -0.1);
    assert_eq!(p, utm().fwd(-3., 51.5, -0.1));
    let g = tm.inv(-3., p.x, p.y)?;
    assert_float_eq!(g.lat, 51.5, abs <= 1e-12);

    let mut operands = [Coor2D::geo(51.5, -0.1), Coor2D::geo(52., 0.)];
    assert_eq!(tm.apply(-3., Fwd, &mut operands), 2);
    assert_eq!(engine.calls.load(Ordering::Relaxed), 4);
    Ok(())
}

#[test]
fn exact_parameters_are_taken_as_given() -> Result<(), Error> {
    let wgs84 = Ellipsoid::named("WGS84")?;
    let grs80 = Ellipsoid::named("GRS80")?;
    let engine = Arc::new(Counting {
        inner: TransverseMercator::new(wgs84, 0.9996)?,
        calls: AtomicUsize::new(0),
    });

    // Neither the ellipsoid nor the scale are checked against the engine,
    // and parameters the series would reject are accepted
    let options = Options {
        algorithm: Algorithm::Exact(engine.clone()),
        ..Default::default()
    };
    let tm = TransverseMercator::with_options(grs80, -1., options)?;
    assert_eq!(tm.ellipsoid(), grs80);
    assert_eq!(tm.central_scale(), -1.);

    // ... while the work is done by the engine, with its own parameters
    assert_eq!(tm.fwd(-3., 51.5, -0.1), utm().fwd(-3., 51.5, -0.1));
    assert_eq!(engine.calls.load(Ordering::Relaxed), 1);
    Ok(())
}

#[test]
fn shared_between_threads() {
    let points: Vec<(f64, f64)> = (0..16)
        .map(|i| (-60. + 8. * i as f64, -3. + 0.4 * i as f64))
        .collect();
    let expected: Vec<Projected> = points
        .iter()
        .map(|&(lat, lon)| utm().fwd(0., lat, lon))
        .collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for (i, &(lat, lon)) in points.iter().enumerate() {
                    assert_eq!(utm().fwd(0., lat, lon), expected[i]);
                }
            });
        }
    });
}

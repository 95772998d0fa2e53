use crate::Error;

/// `e · atanh(e · x)` for an ellipsoid of signed eccentricity `es`.
///
/// The signed eccentricity is negative for prolate ellipsoids, in which
/// case the atanh turns into an atan.
pub fn eatanhe(x: f64, es: f64) -> f64 {
    if es > 0. {
        es * (es * x).atanh()
    } else {
        -es * (es * x).atan()
    }
}

/// Geographic to conformal latitude, in the tangent domain.
///
/// Returns τ′ = tan 𝜒 = sinh 𝜓 given τ = tan 𝜙, where 𝜒 is the conformal and
/// 𝜓 the isometric latitude. Works for any finite τ, and for τ = ±∞, where
/// it returns ±∞. Follows [Karney, 2011](crate::Bibliography::Kar11),
/// eq. (7)-(9), which avoids the cancellation of the textbook expression
/// close to the poles.
pub fn taupf(tau: f64, es: f64) -> f64 {
    if !tau.is_finite() {
        return tau;
    }
    let tau1 = 1_f64.hypot(tau);
    let sig = eatanhe(tau / tau1, es).sinh();
    1_f64.hypot(sig) * tau - sig * tau1
}

/// The inverse of [taupf]: τ = tan 𝜙 given τ′ = tan 𝜒, computed by Newton's method.
///
/// Follows [Karney, 2011](crate::Bibliography::Kar11), eq. (19)-(21), and the
/// PROJ implementation in proj/src/phi2.cpp. The iteration count is capped,
/// and running out of iterations is reported as an error rather than returning
/// an unconverged value.
pub fn tauf(taup: f64, es: f64) -> Result<f64, Error> {
    // min iterations = 1, max iterations = 2; mean = 1.954
    const MAX_ITER: usize = 10;
    tauf_n(taup, es, MAX_ITER)
}

// The Newton iteration of [tauf], with at most `max_iter` steps
fn tauf_n(taup: f64, es: f64, max_iter: usize) -> Result<f64, Error> {
    // rooteps, tol and tmax are compile time constants, but currently
    // Rust cannot const-evaluate powers and roots, so we just swallow
    // the penalty of an extra sqrt and two divisions on each call.
    let rooteps: f64 = f64::EPSILON.sqrt();
    let tol: f64 = rooteps / 10.; // the criterion for Newton's method
    let tmax: f64 = 2. / rooteps; // threshold for large arg limit exact

    // 1 - e², with e² negative for prolate ellipsoids
    let e2m = 1. - es * es.abs();
    let stol = tol * taup.abs().max(1.0);

    // The initial guess.  70 corresponds to chi = 89.18 deg
    let mut tau = if taup.abs() > 70. {
        taup * eatanhe(1., es).exp()
    } else {
        taup / e2m
    };

    // Handle +/-inf, nan, and e = 1
    if !(tau.abs() < tmax) {
        return Ok(tau);
    }

    for _ in 0..max_iter {
        let taupa = taupf(tau, es);
        let dtau = (taup - taupa) * (1. + e2m * (tau * tau))
            / (e2m * 1_f64.hypot(tau) * 1_f64.hypot(taupa));
        tau += dtau;

        // The negated comparison also terminates on NaN
        if !(dtau.abs() >= stol) {
            return Ok(tau);
        }
    }

    log::error!("tauf: No convergence for taup={taup}, es={es}");
    Err(Error::NonConvergence {
        what: "Inverse conformal latitude",
        iterations: max_iter,
    })
}

// ----- Tests ---------------------------------------------------------------------

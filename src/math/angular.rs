//! All angles here are in degrees. The functions are careful about
//! exact values at multiples of 90°, and about the sign of zero, since
//! the projection code derives the parity of its arguments from the sign bit.

/// Remainder of x/y in the range [-y/2, y/2], with the sign of a zero
/// argument preserved
fn remainder(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        return x;
    }
    let z = if x.is_finite() { x % y } else { f64::NAN };
    if z < -y / 2.0 {
        z + y
    } else if z < y / 2.0 {
        z
    } else {
        z - y
    }
}

/// Error-free sum: Returns `(s, t)` where `s` is the rounded sum `u + v`,
/// and `t` the rounding error, such that `s + t == u + v` exactly.
pub fn sum(u: f64, v: f64) -> (f64, f64) {
    let s = u + v;
    let up = s - v;
    let vpp = s - up;
    let up = up - u;
    let vpp = vpp - v;
    // The negation makes t = 0 (rather than -0) when s is exact
    let t = if s == 0.0 { s } else { 0.0 - (up + vpp) };
    (s, t)
}

/// Normalize an arbitrary angle to the range (-180, 180]
pub fn normalize(angle: f64) -> f64 {
    let y = remainder(angle, 360.0);
    if y == -180.0 {
        180.0
    } else {
        y
    }
}

/// Replace latitudes outside [-90, 90] with NaN
pub fn lat_fix(latitude: f64) -> f64 {
    if latitude.abs() > 90.0 {
        f64::NAN
    } else {
        latitude
    }
}

/// The exact difference `y - x`, reduced to (-180, 180].
///
/// Computing the difference of the normalized arguments in two parts
/// avoids loss of precision when `x` and `y` are large and nearly equal.
pub fn difference(x: f64, y: f64) -> f64 {
    let (d, t) = sum(remainder(-x, 360.0), remainder(y, 360.0));
    let d = normalize(d);
    if d == 180.0 && t > 0.0 {
        sum(-180.0, t).0
    } else {
        sum(d, t).0
    }
}

/// Sine and cosine of an angle in degrees, exact at multiples of 90°.
/// Returns `(sin, cos)`, in the order of `f64::sin_cos`.
pub fn sincosd(angle: f64) -> (f64, f64) {
    // Reduce to [-45, 45] by whole quadrants before converting to radians
    let r = angle % 360.0;
    let q = (r / 90.0).round();
    let r = (r - 90.0 * q).to_radians();
    let (s, c) = r.sin_cos();

    let (sin, cos) = match (q as i32) & 3 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    };

    // Zeros: cos(±90) is +0, and sin(±0) is ±0
    let cos = cos + 0.0;
    let sin = if sin == 0.0 { sin.copysign(angle) } else { sin };
    (sin, cos)
}

/// `atan2(y, x)` in degrees, with exact results when the arguments
/// lie on one of the axes
pub fn atan2d(y: f64, x: f64) -> f64 {
    let (mut y, mut x) = (y, x);
    let mut q = 0;
    if y.abs() > x.abs() {
        std::mem::swap(&mut x, &mut y);
        q = 2;
    }
    if x.is_sign_negative() {
        x = -x;
        q += 1;
    }
    let angle = y.atan2(x).to_degrees();
    match q {
        1 => 180_f64.copysign(y) - angle,
        2 => 90.0 - angle,
        3 => -90.0 + angle,
        _ => angle,
    }
}

/// `atan(x)` in degrees
pub fn atand(x: f64) -> f64 {
    atan2d(x, 1.0)
}

// ----- Tests ---------------------------------------------------------------------

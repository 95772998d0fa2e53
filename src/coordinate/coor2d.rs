use std::ops::{Index, IndexMut};

/// Generic 2D Coordinate tuple.
///
/// Geographical coordinates are stored as `[longitude, latitude]`, in
/// degrees (note: unlike most of the geodetic literature, but like most GIS,
/// longitude comes first). Projected coordinates are stored as
/// `[easting, northing]`, in the unit of the semimajor axis.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Coor2D(pub [f64; 2]);

impl Index<usize> for Coor2D {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Coor2D {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

// ----- C O N S T R U C T O R S ---------------------------------------------

/// Constructors
impl Coor2D {
    /// A `Coor2D` from latitude/longitude, in degrees
    #[must_use]
    pub fn geo(latitude: f64, longitude: f64) -> Coor2D {
        Coor2D([longitude, latitude])
    }

    /// A `Coor2D` from longitude/latitude, in degrees
    #[must_use]
    pub fn gis(longitude: f64, latitude: f64) -> Coor2D {
        Coor2D([longitude, latitude])
    }

    /// A `Coor2D` from easting/northing, or any other pair taken verbatim
    #[must_use]
    pub fn raw(first: f64, second: f64) -> Coor2D {
        Coor2D([first, second])
    }

    /// A `Coor2D` consisting of 2 `NaN`s
    #[must_use]
    pub fn nan() -> Coor2D {
        Coor2D([f64::NAN, f64::NAN])
    }
}

// ----- A C C E S S O R S ---------------------------------------------------

impl Coor2D {
    /// True if any element is NaN
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.0[0].is_nan() || self.0[1].is_nan()
    }
}

// ----- T E S T S ---------------------------------------------------

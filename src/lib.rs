//! *Transverse Mercator with an accuracy of a few nanometers*.
//!
//! Conversion between geographical coordinates and transverse Mercator
//! grid coordinates, including the meridian convergence and the point
//! scale factor, for any ellipsoid and any central scale factor. The
//! computations follow [Karney, 2011](crate::Bibliography::Kar11): Krüger's
//! series, extended to order 4-8 in the third flattening, summed using
//! Clenshaw's recurrence over complex arguments. A preprint is available as
//! [Karney, 2010](crate::Bibliography::Kar10).
//!
//! ```
//! use kruger::prelude::*;
//!
//! // London, in UTM zone 30
//! let utm = kruger::tmerc::utm();
//! let p = utm.fwd(-3., 51.5, -0.1);
//! assert!((p.x + 500_000. - 701_277.665).abs() < 1e-3);
//!
//! let g = utm.inv(-3., p.x, p.y)?;
//! assert!((g.lat - 51.5).abs() < 1e-9);
//! # Ok::<(), kruger::Error>(())
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

mod bibliography;
pub mod coordinate;
pub mod ellipsoid;
pub mod math;
pub mod tmerc;

pub use bibliography::Bibliography;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::coordinate::Coor2D;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::tmerc::Algorithm;
    pub use crate::tmerc::Geographic;
    pub use crate::tmerc::Options;
    pub use crate::tmerc::Projected;
    pub use crate::tmerc::Projection;
    pub use crate::tmerc::SeriesOrder;
    pub use crate::tmerc::TransverseMercator;
    pub use crate::Direction;
    pub use crate::Direction::Fwd;
    pub use crate::Direction::Inv;
    pub use crate::Error;
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(&'static str),

    #[error("{what} did not converge in {iterations} iterations")]
    NonConvergence {
        what: &'static str,
        iterations: usize,
    },

    #[error("{0} not found")]
    NotFound(String),
}

/// `Fwd`: Indicate that a two-way operation should run in the *forward*
/// direction, i.e. from geographical to projected coordinates.
/// `Inv`: Indicate that it should run in the *inverse* direction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Fwd,
    Inv,
}

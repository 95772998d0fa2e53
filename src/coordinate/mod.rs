//! Coordinate tuples for batch application of projections

mod coor2d;
pub use coor2d::Coor2D;

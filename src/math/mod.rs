//! Miscellaneous math functions for general use

/// Free functions used in more than one module of the crate:
/// The conformal latitude machinery.
pub mod ancillary;
pub use ancillary::eatanhe;
pub use ancillary::tauf;
pub use ancillary::taupf;

/// Free functions for handling angles given in degrees.
pub mod angular;

/// Double angle functions of complex arguments.
pub mod complex;

/// Taylor series (Horner) and Fourier series (Clenshaw)
pub mod series;
pub use series::fourier;
pub use series::taylor;

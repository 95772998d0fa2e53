/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// R.E. Deakin, M.N. Hunter and C.F.F. Karney (2012):
    /// A fresh look at the UTM projection:
    /// Karney-Krueger equations.
    /// Surveying and Spatial Sciences Institute (SSSI)
    /// Land Surveying Commission National Conference,
    /// Melbourne, 18-21 April, 2012.
    Dea12,

    /// Charles F.F. Karney (2010): *Transverse Mercator with an accuracy of a few nanometers*.
    /// [pdf](https://arxiv.org/pdf/1002.1417.pdf)
    Kar10,

    /// Charles F.F. Karney (2011): *Transverse Mercator with an accuracy of a few nanometers*.
    /// J. Geodesy. 85(8): 475–485.
    /// [DOI](https://doi.org/10.1007/s00190-011-0445-3).
    Kar11,

    /// L. Krüger (1912). Konforme Abbildung des Erdellipsoids in der Ebene.
    /// Royal Prussian Geodetic Institute, New Series 52.
    /// [DOI](https://dx.doi.org/10.2312/GFZ.b103-krueger28).
    Kru12,

    /// L.P. Lee (1976): *Conformal Projections Based on Elliptic Functions*.
    /// Cartographica, Monograph 16, supplement 1 to Canadian Cartographer 13.
    Lee76,
}

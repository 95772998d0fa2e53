//! The coefficients of Krüger's series for the transverse Mercator.
//!
//! The forward series, α, converts conformal Gauss-Schreiber coordinates to
//! Gauss-Krüger coordinates; the reverted series, β, goes the other way.
//! Both are expansions in the third flattening, *n*, given here to orders 4
//! through 8 as rational polynomials in *n*. For order N, the coefficient of
//! order l is n^l times a polynomial in *n* of order N - l, divided by an
//! integer denominator: all given as one flat pool per order, each polynomial
//! with its coefficients in order of decreasing power, followed by its
//! denominator. See [Karney, 2011](crate::Bibliography::Kar11), eq. (35)-(36).
//!
//! The normalized rectifying radius, b1 = A/a, is a polynomial in n², divided
//! by (1 + n), [Karney, 2011](crate::Bibliography::Kar11) eq. (14).

use crate::math::taylor::polyval;
use crate::Error;

/// The highest supported series order
pub const MAX_ORDER: usize = 8;

/// The number of elements of an α or β coefficient pool, for a given order:
/// The order-l polynomial has N - l + 1 coefficients plus a denominator.
const fn pool_size(order: usize) -> usize {
    order * (order + 3) / 2
}

/// The order of Krüger's series.
///
/// Order 6 (the default) gives an accuracy of about 5 nm within the UTM
/// domain. Order 4 gives about 200 nm, at a slightly lower cost: The
/// computational cost is roughly linear in the order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeriesOrder {
    Four = 4,
    Five = 5,
    #[default]
    Six = 6,
    Seven = 7,
    Eight = 8,
}

impl SeriesOrder {
    /// The order as an integer
    #[must_use]
    pub fn order(self) -> usize {
        self as usize
    }

    // The b1, alpha, and beta coefficient pools for this order
    fn pools(self) -> (&'static [f64], &'static [f64], &'static [f64]) {
        match self {
            SeriesOrder::Four => (&B1_4, &ALP_4, &BET_4),
            SeriesOrder::Five => (&B1_4, &ALP_5, &BET_5),
            SeriesOrder::Six => (&B1_6, &ALP_6, &BET_6),
            SeriesOrder::Seven => (&B1_6, &ALP_7, &BET_7),
            SeriesOrder::Eight => (&B1_8, &ALP_8, &BET_8),
        }
    }
}

impl TryFrom<usize> for SeriesOrder {
    type Error = Error;

    fn try_from(order: usize) -> Result<SeriesOrder, Error> {
        match order {
            4 => Ok(SeriesOrder::Four),
            5 => Ok(SeriesOrder::Five),
            6 => Ok(SeriesOrder::Six),
            7 => Ok(SeriesOrder::Seven),
            8 => Ok(SeriesOrder::Eight),
            _ => {
                log::error!("SeriesOrder: {order}. Must be an integer in the interval 4..8");
                Err(Error::Configuration(
                    "Series order must be an integer in the interval 4..8",
                ))
            }
        }
    }
}

/// The evaluated coefficients for a given ellipsoid and series order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KruegerCoefficients {
    /// The normalized rectifying radius, A/a
    pub b1: f64,
    order: usize,
    alp: [f64; MAX_ORDER],
    bet: [f64; MAX_ORDER],
}

impl KruegerCoefficients {
    /// Evaluate the coefficient polynomials for the third flattening `n`
    #[must_use]
    pub fn new(n: f64, order: SeriesOrder) -> KruegerCoefficients {
        let (b1coeff, alpcoeff, betcoeff) = order.pools();
        let maxpow = order.order();

        let m = maxpow / 2;
        let b1 = polyval(m as isize, b1coeff, n * n) / (b1coeff[m + 1] * (1. + n));

        let mut alp = [0.; MAX_ORDER];
        let mut bet = [0.; MAX_ORDER];
        let mut offset = 0;
        let mut d = n;
        for l in 1..=maxpow {
            let m = maxpow - l;
            let denominator = offset + m + 1;
            alp[l - 1] = d * polyval(m as isize, &alpcoeff[offset..], n) / alpcoeff[denominator];
            bet[l - 1] = d * polyval(m as isize, &betcoeff[offset..], n) / betcoeff[denominator];
            offset += m + 2;
            d *= n;
        }
        debug_assert_eq!(offset, alpcoeff.len());
        debug_assert_eq!(offset, betcoeff.len());

        KruegerCoefficients {
            b1,
            order: maxpow,
            alp,
            bet,
        }
    }

    /// The coefficients of the forward series, α₁ .. α_N
    #[must_use]
    pub fn alpha(&self) -> &[f64] {
        &self.alp[..self.order]
    }

    /// The coefficients of the reverted series, β₁ .. β_N
    #[must_use]
    pub fn beta(&self) -> &[f64] {
        &self.bet[..self.order]
    }
}

// ----- C O E F F I C I E N T   P O O L S ---------------------------------------------

// The array lengths double as compile time checks of the pool sizes.

const B1_4: [f64; 4 / 2 + 2] = [
    // b1·(1 + n): order 2 polynomial in n², then the denominator
    1., 16., 64., 64.,
];

const B1_6: [f64; 6 / 2 + 2] = [
    // b1·(1 + n): order 3 polynomial in n², then the denominator
    1., 4., 64., 256., 256.,
];

const B1_8: [f64; 8 / 2 + 2] = [
    // b1·(1 + n): order 4 polynomial in n², then the denominator
    25., 64., 256., 4_096., 16_384., 16_384.,
];

const ALP_4: [f64; pool_size(4)] = [
    // alpha[1] / n: order 3 polynomial in n, then the denominator
    164., 225., -480., 360., 720.,
    // alpha[2] / n^2: order 2 polynomial in n, then the denominator
    557., -864., 390., 1_440.,
    // alpha[3] / n^3: order 1 polynomial in n, then the denominator
    -1_236., 427., 1_680.,
    // alpha[4] / n^4: order 0 polynomial in n, then the denominator
    49_561., 161_280.,
];

const ALP_5: [f64; pool_size(5)] = [
    // alpha[1] / n: order 4 polynomial in n, then the denominator
    -635., 328., 450., -960., 720., 1_440.,
    // alpha[2] / n^2: order 3 polynomial in n, then the denominator
    4_496., 3_899., -6_048., 2_730., 10_080.,
    // alpha[3] / n^3: order 2 polynomial in n, then the denominator
    15_061., -19_776., 6_832., 26_880.,
    // alpha[4] / n^4: order 1 polynomial in n, then the denominator
    -171_840., 49_561., 161_280.,
    // alpha[5] / n^5: order 0 polynomial in n, then the denominator
    34_729., 80_640.,
];

const ALP_6: [f64; pool_size(6)] = [
    // alpha[1] / n: order 5 polynomial in n, then the denominator
    31_564., -66_675., 34_440., 47_250., -100_800., 75_600., 151_200.,
    // alpha[2] / n^2: order 4 polynomial in n, then the denominator
    -1_983_433., 863_232., 748_608., -1_161_216., 524_160., 1_935_360.,
    // alpha[3] / n^3: order 3 polynomial in n, then the denominator
    670_412., 406_647., -533_952., 184_464., 725_760.,
    // alpha[4] / n^4: order 2 polynomial in n, then the denominator
    6_601_661., -7_732_800., 2_230_245., 7_257_600.,
    // alpha[5] / n^5: order 1 polynomial in n, then the denominator
    -13_675_556., 3_438_171., 7_983_360.,
    // alpha[6] / n^6: order 0 polynomial in n, then the denominator
    212_378_941., 319_334_400.,
];

const ALP_7: [f64; pool_size(7)] = [
    // alpha[1] / n: order 6 polynomial in n, then the denominator
    1_804_025., 2_020_096., -4_267_200., 2_204_160., 3_024_000., -6_451_200., 4_838_400.,
    9_676_800.,
    // alpha[2] / n^2: order 5 polynomial in n, then the denominator
    4_626_384., -9_917_165., 4_316_160., 3_743_040., -5_806_080., 2_620_800., 9_676_800.,
    // alpha[3] / n^3: order 4 polynomial in n, then the denominator
    -67_102_379., 26_816_480., 16_265_880., -21_358_080., 7_378_560., 29_030_400.,
    // alpha[4] / n^4: order 3 polynomial in n, then the denominator
    155_912_000., 72_618_271., -85_060_800., 24_532_695., 79_833_600.,
    // alpha[5] / n^5: order 2 polynomial in n, then the denominator
    102_508_609., -109_404_448., 27_505_368., 63_866_880.,
    // alpha[6] / n^6: order 1 polynomial in n, then the denominator
    -12_282_192_400., 2_760_926_233., 4_151_347_200.,
    // alpha[7] / n^7: order 0 polynomial in n, then the denominator
    1_522_256_789., 1_383_782_400.,
];

const ALP_8: [f64; pool_size(8)] = [
    // alpha[1] / n: order 7 polynomial in n, then the denominator
    -75_900_428., 37_884_525., 42_422_016., -89_611_200., 46_287_360., 63_504_000.,
    -135_475_200., 101_606_400., 203_212_800.,
    // alpha[2] / n^2: order 6 polynomial in n, then the denominator
    148_003_883., 83_274_912., -178_508_970., 77_690_880., 67_374_720., -104_509_440.,
    47_174_400., 174_182_400.,
    // alpha[3] / n^3: order 5 polynomial in n, then the denominator
    318_729_724., -738_126_169., 294_981_280., 178_924_680., -234_938_880., 81_164_160.,
    319_334_400.,
    // alpha[4] / n^4: order 4 polynomial in n, then the denominator
    -40_176_129_013., 14_967_552_000., 6_971_354_016., -8_165_836_800., 2_355_138_720.,
    7_664_025_600.,
    // alpha[5] / n^5: order 3 polynomial in n, then the denominator
    10_421_654_396., 3_997_835_751., -4_266_773_472., 1_072_709_352., 2_490_808_320.,
    // alpha[6] / n^6: order 2 polynomial in n, then the denominator
    175_214_326_799., -171_950_693_600., 38_652_967_262., 58_118_860_800.,
    // alpha[7] / n^7: order 1 polynomial in n, then the denominator
    -67_039_739_596., 13_700_311_101., 12_454_041_600.,
    // alpha[8] / n^8: order 0 polynomial in n, then the denominator
    1_424_729_850_961., 743_921_418_240.,
];

const BET_4: [f64; pool_size(4)] = [
    // beta[1] / n: order 3 polynomial in n, then the denominator
    -4., 555., -960., 720., 1_440.,
    // beta[2] / n^2: order 2 polynomial in n, then the denominator
    -437., 96., 30., 1_440.,
    // beta[3] / n^3: order 1 polynomial in n, then the denominator
    -148., 119., 3_360.,
    // beta[4] / n^4: order 0 polynomial in n, then the denominator
    4_397., 161_280.,
];

const BET_5: [f64; pool_size(5)] = [
    // beta[1] / n: order 4 polynomial in n, then the denominator
    -3_645., -64., 8_880., -15_360., 11_520., 23_040.,
    // beta[2] / n^2: order 3 polynomial in n, then the denominator
    4_416., -3_059., 672., 210., 10_080.,
    // beta[3] / n^3: order 2 polynomial in n, then the denominator
    -627., -592., 476., 13_440.,
    // beta[4] / n^4: order 1 polynomial in n, then the denominator
    -3_520., 4_397., 161_280.,
    // beta[5] / n^5: order 0 polynomial in n, then the denominator
    4_583., 161_280.,
];

const BET_6: [f64; pool_size(6)] = [
    // beta[1] / n: order 5 polynomial in n, then the denominator
    384_796., -382_725., -6_720., 932_400., -1_612_800., 1_209_600., 2_419_200.,
    // beta[2] / n^2: order 4 polynomial in n, then the denominator
    -1_118_711., 1_695_744., -1_174_656., 258_048., 80_640., 3_870_720.,
    // beta[3] / n^3: order 3 polynomial in n, then the denominator
    22_276., -16_929., -15_984., 12_852., 362_880.,
    // beta[4] / n^4: order 2 polynomial in n, then the denominator
    -830_251., -158_400., 197_865., 7_257_600.,
    // beta[5] / n^5: order 1 polynomial in n, then the denominator
    -435_388., 453_717., 15_966_720.,
    // beta[6] / n^6: order 0 polynomial in n, then the denominator
    20_648_693., 638_668_800.,
];

const BET_7: [f64; pool_size(7)] = [
    // beta[1] / n: order 6 polynomial in n, then the denominator
    -5_406_467., 6_156_736., -6_123_600., -107_520., 14_918_400., -25_804_800., 19_353_600.,
    38_707_200.,
    // beta[2] / n^2: order 5 polynomial in n, then the denominator
    829_456., -5_593_555., 8_478_720., -5_873_280., 1_290_240., 403_200., 19_353_600.,
    // beta[3] / n^3: order 4 polynomial in n, then the denominator
    9_261_899., 3_564_160., -2_708_640., -2_557_440., 2_056_320., 58_060_800.,
    // beta[4] / n^4: order 3 polynomial in n, then the denominator
    14_928_352., -9_132_761., -1_742_400., 2_176_515., 79_833_600.,
    // beta[5] / n^5: order 2 polynomial in n, then the denominator
    -8_005_831., -1_741_552., 1_814_868., 63_866_880.,
    // beta[6] / n^6: order 1 polynomial in n, then the denominator
    -261_810_608., 268_433_009., 8_302_694_400.,
    // beta[7] / n^7: order 0 polynomial in n, then the denominator
    219_941_297., 5_535_129_600.,
];

const BET_8: [f64; pool_size(8)] = [
    // beta[1] / n: order 7 polynomial in n, then the denominator
    31_777_436., -37_845_269., 43_097_152., -42_865_200., -752_640., 104_428_800.,
    -180_633_600., 135_475_200., 270_950_400.,
    // beta[2] / n^2: order 6 polynomial in n, then the denominator
    24_749_483., 14_930_208., -100_683_990., 152_616_960., -105_719_040., 23_224_320.,
    7_257_600., 348_364_800.,
    // beta[3] / n^3: order 5 polynomial in n, then the denominator
    -232_468_668., 101_880_889., 39_205_760., -29_795_040., -28_131_840., 22_619_520.,
    638_668_800.,
    // beta[4] / n^4: order 4 polynomial in n, then the denominator
    324_154_477., 1_433_121_792., -876_745_056., -167_270_400., 208_945_440., 7_664_025_600.,
    // beta[5] / n^5: order 3 polynomial in n, then the denominator
    457_888_660., -312_227_409., -67_920_528., 70_779_852., 2_490_808_320.,
    // beta[6] / n^6: order 2 polynomial in n, then the denominator
    -19_841_813_847., -3_665_348_512., 3_758_062_126., 116_237_721_600.,
    // beta[7] / n^7: order 1 polynomial in n, then the denominator
    -1_989_295_244., 1_979_471_673., 49_816_166_400.,
    // beta[8] / n^8: order 0 polynomial in n, then the denominator
    191_773_887_257., 3_719_607_091_200.,
];

// ----- T E S T S ---------------------------------------------------------------------

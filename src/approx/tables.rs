//! Minimax coefficients of the exponential function for inputs of magnitude
//! at most ln 2 / 2.
//!
//! Coefficients are listed from the highest degree down and stored as
//! integers scaled by 10^[`DIGITS`].

/// Number of fractional decimal digits in each coefficient.
pub const DIGITS: u64 = 16;

/// Polynomial coefficients by order, starting at order 1.
pub const POLYNOMIAL: [&[i128]; 6] = [
    &[
        10_201_394_465_967_895,
        10_302_293_604_985_662,
    ],
    &[
        5_062_836_705_685_021,
        10_150_876_009_849_295,
        9_998_487_929_242_696,
    ],
    &[
        1_681_733_019_572_182,
        5_050_232_905_802_932,
        9_999_396_041_503_092,
        9_999_244_965_509_334,
    ],
    &[
        419_594_398_629_578,
        1_679_215_798_287_936,
        4_999_836_570_457_601,
        9_999_622_811_704_657,
        10_000_001_510_806_225,
    ],
    &[
        83_811_120_378_278,
        419_175_264_834_640,
        1_666_632_564_455_734,
        4_999_886_914_730_604,
        10_000_000_647_031_471,
        10_000_000_754_895_673,
    ],
    &[
        13_956_055_937_947,
        83_751_285_786_969,
        416_660_835_945_164,
        1_666_641_548_191_586,
        5_000_000_168_413_123,
        10_000_000_377_260_430,
        9_999_999_999_190_666,
    ],
];

/// Numerator and denominator coefficients by order, starting at order 1.
pub const RATIONAL: [(&[i128], &[i128]); 6] = [
    (
        &[
            10_000_000_000_000_000,
            19_951_230_090_905_039,
        ],
        &[
            -9_802_384_712_903_994,
            19_945_394_068_684_223,
        ],
    ),
    (
        &[
            10_000_000_000_000_000,
            59_910_080_216_065_911,
            119_579_893_099_513_441,
        ],
        &[
            9_880_690_225_786_635,
            -59_669_083_099_599_627,
            119_579_875_493_587_569,
        ],
    ),
    (
        &[
            10_000_000_000_000_000,
            119_892_808_348_301_951,
            598_842_261_733_986_732,
            1_196_656_635_650_113_572,
        ],
        &[
            -9_914_599_095_026_225,
            119_378_869_080_663_428,
            -597_814_371_744_344_228,
            1_196_656_635_612_295_787,
        ],
    ),
    (
        &[
            10_000_000_000_000_000,
            199_842_829_398_787_600,
            1_797_188_587_998_745_390,
            8_381_320_185_010_351_906,
            16_753_400_898_161_289_660,
        ],
        &[
            9_923_137_290_653_044,
            -198_919_149_669_371_222,
            1_792_568_852_086_743_334,
            -8_372_080_713_146_019_662,
            16_753_400_898_161_228_270,
        ],
    ),
    (
        &[
            10_000_000_000_000_000,
            219_446_091_521_355_022,
            2_259_576_129_377_199_152,
            13_175_889_015_366_262_811,
            42_083_110_461_309_424_863,
            56_570_517_857_221_739_177,
        ],
        &[
            -78_664_024,
            6_402_427_464_310_314,
            -108_932_364_260_787_988,
            696_822_701_690_608_142,
            -621_962_517_309_060_701,
            -14_487_407_395_911_168_351,
            56_570_517_857_221_666_418,
        ],
    ),
    (
        &[
            10_000_000_000_000_000,
            201_240_535_434_826_846,
            1_834_367_857_794_373_151,
            8_789_791_794_821_758_231,
            18_893_021_785_500_918_668,
            3_848_483_752_752_718_487,
            -4_853_990_833_051_483_946,
        ],
        &[
            9_374_980_053_482_066,
            -186_264_976_825_290_418,
            1_647_423_379_044_435_592,
            -7_369_989_642_115_033_348,
            12_617_542_616_220_155_196,
            8_702_474_585_804_197_886,
            -4_853_990_833_051_479_967,
        ],
    ),
];

use std::path::PathBuf;

use argh::FromArgs;
use log::LevelFilter;
use strum::VariantNames;

use crate::approx::Kind;

/// Benchmark integer-only approximations of the exponential function.
#[derive(FromArgs)]
pub struct Opts {
    /// approximation strategy
    #[argh(positional, from_str_fn(parse_kind))]
    pub kind: Kind,

    /// number of decimal digits in the fixed-point format
    #[argh(option, default = "10")]
    pub decimals: i64,

    /// order of the approximation
    #[argh(option, default = "3")]
    pub order: u32,

    /// first input
    #[argh(option, default = "-1.0")]
    pub start: f64,

    /// last input
    #[argh(option, default = "1.0")]
    pub end: f64,

    /// spacing between inputs
    #[argh(option, default = "0.1")]
    pub step: f64,

    /// report the width of the widest intermediate value
    #[argh(switch)]
    pub bits: bool,

    /// output file
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Opts {
    /// Parse options from `env::args`.
    pub fn parse() -> Opts {
        argh::from_env()
    }
}

fn parse_kind(value: &str) -> Result<Kind, String> {
    value.parse().map_err(|_| {
        format!(
            "unknown approximation `{value}`; expected one of {}",
            Kind::VARIANTS.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Opts::from_args(&["fixed-exp"], &["pade"]).unwrap();

        assert_eq!(opts.kind, Kind::Pade);
        assert_eq!(opts.decimals, 10);
        assert_eq!(opts.order, 3);
        assert_eq!((opts.start, opts.end, opts.step), (-1.0, 1.0, 0.1));
        assert!(!opts.bits);
        assert!(opts.output.is_none());
        assert_eq!(opts.log_level, LevelFilter::Warn);
    }

    #[test]
    fn explicit() {
        let args = [
            "bitshift-taylor",
            "--decimals",
            "6",
            "--order",
            "5",
            "--start",
            "-3",
            "--bits",
            "-o",
            "out.tsv",
            "--log",
            "debug",
        ];

        let opts = Opts::from_args(&["fixed-exp"], &args).unwrap();

        assert_eq!(opts.kind, Kind::BitShiftTaylor);
        assert_eq!(opts.decimals, 6);
        assert_eq!(opts.order, 5);
        assert_eq!(opts.start, -3.0);
        assert!(opts.bits);
        assert_eq!(opts.output, Some(PathBuf::from("out.tsv")));
        assert_eq!(opts.log_level, LevelFilter::Debug);
    }

    #[test]
    fn unknown_kind() {
        let err = parse_kind("chebyshev").unwrap_err();

        assert!(err.contains("minimax-rational"));
        assert!(Opts::from_args(&["fixed-exp"], &["chebyshev"]).is_err());
    }
}

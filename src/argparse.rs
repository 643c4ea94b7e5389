use anyhow::Context;
use clap::{arg, command, value_parser, ArgAction, ArgMatches, Command};
use log::LevelFilter;

pub(crate) fn build_command() -> Command {
    command!() // requires `cargo` feature
        .arg(
            arg!(
                -w --width <width> "grid width, must divide the capacity evenly, default is 1"
            )
            .required(false)
            .value_parser(value_parser!(usize))
            .default_value("1"),
        )
        .arg(
            arg!(
                -r --reshape <reshape> "reshape to WxH after printing, e.g. 6x4"
            )
            .required(false)
            .value_parser(parse_shape),
        )
        .arg(
            arg!(
                -x --column <column> "column of a cell to look up (needs --row)"
            )
            .required(false)
            .value_parser(value_parser!(usize))
            .requires("row"),
        )
        .arg(
            arg!(
                -y --row <row> "row of a cell to look up (needs --column)"
            )
            .required(false)
            .value_parser(value_parser!(usize))
            .requires("column"),
        )
        .arg(
            arg!(
                --fill <fill> "initial cell values, default is index"
            )
            .required(false)
            .value_parser(["index", "zero"])
            .default_value("index"),
        )
        .arg(
            arg!(
                -v --verbose "print debug logs"
            )
            .required(false)
            .action(ArgAction::SetTrue),
        )
}

pub(crate) fn parse_args() -> ArgMatches {
    build_command().get_matches()
}

/// Parses `WxH` into `(W, H)`.
pub(crate) fn parse_shape(s: &str) -> Result<(usize, usize), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", s))?;

    let w = w
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad width '{}': {}", w, e))?;
    let h = h
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad height '{}': {}", h, e))?;

    Ok((w, h))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FillMode {
    Index,
    Zero,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunConfig {
    pub(crate) width: usize,
    pub(crate) reshape: Option<(usize, usize)>,
    pub(crate) lookup: Option<(usize, usize)>,
    pub(crate) fill: FillMode,
    pub(crate) verbose: bool,
}

impl RunConfig {
    pub(crate) fn from_args(mut args: ArgMatches) -> anyhow::Result<RunConfig> {
        let lookup = match (
            args.remove_one::<usize>("column"),
            args.remove_one::<usize>("row"),
        ) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        };

        let fill = match args
            .remove_one::<String>("fill")
            .context("missing --fill")?
            .as_str()
        {
            "zero" => FillMode::Zero,
            _ => FillMode::Index,
        };

        Ok(Self {
            width: args.remove_one::<usize>("width").context("missing --width")?,
            reshape: args.remove_one::<(usize, usize)>("reshape"),
            lookup,
            fill,
            verbose: args.remove_one::<bool>("verbose").unwrap_or(false),
        })
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

pub(crate) fn set_configs() -> anyhow::Result<RunConfig> {
    RunConfig::from_args(parse_args())
}

#[cfg(test)]
mod test {
    use super::*;

    fn config_from(args: &[&str]) -> anyhow::Result<RunConfig> {
        let matches = build_command().try_get_matches_from(args)?;
        RunConfig::from_args(matches)
    }

    #[test]
    fn defaults() {
        let config = config_from(&["fixgrid"]).unwrap();

        assert_eq!(
            RunConfig {
                width: 1,
                reshape: None,
                lookup: None,
                fill: FillMode::Index,
                verbose: false,
            },
            config
        );
        assert_eq!(LevelFilter::Info, config.log_level());
    }

    #[test]
    fn all_options() {
        let config = config_from(&[
            "fixgrid", "-w", "4", "-r", "6x4", "-x", "2", "-y", "1", "--fill", "zero", "-v",
        ])
        .unwrap();

        assert_eq!(4, config.width);
        assert_eq!(Some((6, 4)), config.reshape);
        assert_eq!(Some((2, 1)), config.lookup);
        assert_eq!(FillMode::Zero, config.fill);
        assert_eq!(LevelFilter::Debug, config.log_level());
    }

    #[test]
    fn lookup_needs_both_axes() {
        assert!(config_from(&["fixgrid", "-x", "2"]).is_err());
        assert!(config_from(&["fixgrid", "-y", "2"]).is_err());
    }

    #[test]
    fn rejects_unknown_fill() {
        assert!(config_from(&["fixgrid", "--fill", "random"]).is_err());
    }

    #[test]
    fn shapes() {
        assert_eq!(Ok((6, 4)), parse_shape("6x4"));
        assert_eq!(Ok((3, 8)), parse_shape("3X8"));
        assert_eq!(Ok((2, 12)), parse_shape(" 2 x 12 "));
        assert!(parse_shape("6*4").is_err());
        assert!(parse_shape("ax4").is_err());
        assert!(parse_shape("6x").is_err());
    }
}

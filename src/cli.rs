//! Command-line interface
//!
//! Recognized flags:
//!
//! - `-h` print usage to standard error and exit successfully
//! - `-f` borderless fullscreen window
//! - `-e <float>` orbit eccentricity
//! - `-a <float>` orbit semi-major axis
//!
//! Tokens that do not start with `-` are collected as residual arguments and
//! otherwise ignored. Repeating a flag keeps the last value.
//!
//! Flags must match exactly: clap's bundled (`-fe`), attached (`-e0.5`) and
//! end-of-options (`--`) forms are rejected before clap sees the line. The
//! first `-h` ends parsing on the spot, whatever follows it.

use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::config::{CliOverrides, ConfigError};

/// Parsed command line
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(
    name = "kepler",
    about = "Draws a satellite tracing a Kepler orbit about a fixed focus",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Display this help message
    #[arg(short = 'h')]
    pub help: bool,

    /// Run in fullscreen
    #[arg(short = 'f')]
    pub fullscreen: bool,

    /// Orbit eccentricity (0 = circle, 0 < e < 1 = ellipse)
    #[arg(short = 'e', value_name = "ECCENTRICITY", allow_hyphen_values = true)]
    pub eccentricity: Option<f32>,

    /// Orbit semi-major axis in pixels
    #[arg(short = 'a', value_name = "SEMI_MAJOR_AXIS", allow_hyphen_values = true)]
    pub semi_major_axis: Option<f32>,

    /// Extra arguments (accepted and ignored)
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse the process arguments
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse_args(std::env::args_os())
    }

    /// Parse an argument list whose first element is the program name
    pub fn parse_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if Self::scan_flags(&args)? == Scan::Help {
            return Ok(Self {
                help: true,
                ..Default::default()
            });
        }

        Self::try_parse_from(args).map_err(ConfigError::from)
    }

    /// Walk the tokens in order, stopping at the first `-h`
    fn scan_flags(args: &[OsString]) -> Result<Scan, ConfigError> {
        let mut tokens = args.iter().skip(1);
        while let Some(token) = tokens.next() {
            let token = token.to_string_lossy();
            if !token.starts_with('-') {
                continue;
            }
            match token.as_ref() {
                "-h" => return Ok(Scan::Help),
                "-f" => {}
                // The value is whatever comes next; clap reports it missing
                "-e" | "-a" => {
                    tokens.next();
                }
                other => {
                    return Err(ConfigError::new(format!("Unknown flag \"{}\"", other)));
                }
            }
        }
        Ok(Scan::Parse)
    }

    /// Usage text printed for `-h`
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    /// Overrides to layer on top of the default configuration
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides::from_cli(self)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Scan {
    Help,
    Parse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, ConfigError> {
        Cli::parse_args(std::iter::once("kepler").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli, Cli::default());
    }

    #[test]
    fn test_eccentricity() {
        let cli = parse(&["-e", "0.5"]).unwrap();
        assert_eq!(cli.eccentricity, Some(0.5));
        assert_eq!(cli.semi_major_axis, None);
    }

    #[test]
    fn test_semi_major_axis() {
        let cli = parse(&["-a", "200"]).unwrap();
        assert_eq!(cli.semi_major_axis, Some(200.0));
    }

    #[test]
    fn test_fullscreen_and_help_flags() {
        let cli = parse(&["-f"]).unwrap();
        assert!(cli.fullscreen);
        assert!(!cli.help);

        let cli = parse(&["-h"]).unwrap();
        assert!(cli.help);
    }

    #[test]
    fn test_missing_value_is_error() {
        assert!(parse(&["-e"]).is_err());
        assert!(parse(&["-f", "-a"]).is_err());
    }

    #[test]
    fn test_unknown_flag_names_token() {
        let err = parse(&["-z"]).unwrap_err();
        assert!(err.to_string().contains("-z"), "got: {}", err);
    }

    #[test]
    fn test_inexact_flag_forms_rejected() {
        for (args, token) in [
            (&["-e0.5"][..], "-e0.5"),
            (&["-e=0.5"][..], "-e=0.5"),
            (&["-fe", "0.5"][..], "-fe"),
            (&["-ff"][..], "-ff"),
            (&["--", "-z"][..], "--"),
            (&["-"][..], "-"),
            (&["--help"][..], "--help"),
        ] {
            let err = parse(args).unwrap_err();
            assert_eq!(
                err.message(),
                format!("Unknown flag \"{}\"", token),
                "args {:?}",
                args
            );
        }
    }

    #[test]
    fn test_help_stops_parsing() {
        let cli = parse(&["-h", "-z"]).unwrap();
        assert!(cli.help);

        let cli = parse(&["-h", "-e"]).unwrap();
        assert!(cli.help);

        let cli = parse(&["-f", "-h", "--", "-e0.5"]).unwrap();
        assert!(cli.help);
    }

    #[test]
    fn test_flag_before_help_still_checked() {
        let err = parse(&["-z", "-h"]).unwrap_err();
        assert!(err.message().contains("-z"));
    }

    #[test]
    fn test_help_as_value_is_not_help() {
        // "-h" after -e is the eccentricity, and not a float
        assert!(parse(&["-e", "-h"]).is_err());
    }

    #[test]
    fn test_unparsable_float_is_error() {
        assert!(parse(&["-e", "abc"]).is_err());
    }

    #[test]
    fn test_value_may_start_with_hyphen() {
        let cli = parse(&["-e", "-0.25"]).unwrap();
        assert_eq!(cli.eccentricity, Some(-0.25));
    }

    #[test]
    fn test_last_repeated_flag_wins() {
        let cli = parse(&["-e", "0.1", "-e", "0.7", "-f", "-f"]).unwrap();
        assert_eq!(cli.eccentricity, Some(0.7));
        assert!(cli.fullscreen);
    }

    #[test]
    fn test_residual_arguments_collected_in_order() {
        let cli = parse(&["foo", "-e", "0.3", "bar"]).unwrap();
        assert_eq!(cli.args, vec!["foo".to_string(), "bar".to_string()]);
        assert_eq!(cli.eccentricity, Some(0.3));
    }

    #[test]
    fn test_usage_lists_flags() {
        let usage = Cli::usage();
        assert!(usage.contains("-h"));
        assert!(usage.contains("-e <ECCENTRICITY>"));
        assert!(usage.contains("-a <SEMI_MAJOR_AXIS>"));
    }
}

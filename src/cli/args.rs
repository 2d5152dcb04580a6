//! Command-line argument parsing for robird.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Path overrides given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub store: Option<PathBuf>,
    pub account: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Stream until interrupted (default)
    Run(RunOptions),
}

/// Parse command-line arguments, skipping the program name.
///
/// Unknown arguments are ignored. `--version` and `--help` win over
/// everything after them.
///
/// # Examples
///
/// ```
/// use robird::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["robird".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--store" => options.store = Some(flag_value(&arg, args.next())?),
            "--account" => options.account = Some(flag_value(&arg, args.next())?),
            _ => {}
        }
    }
    Ok(CliCommand::Run(options))
}

fn flag_value(flag: &str, value: Option<String>) -> Result<PathBuf, ConfigError> {
    match value {
        Some(v) if !v.starts_with("--") => Ok(PathBuf::from(v)),
        _ => Err(ConfigError::MissingArgument {
            flag: flag.to_string(),
        }),
    }
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "robird {}\n\n\
         Mirror a user stream into the local cache.\n\n\
         Usage: robird [OPTIONS]\n\n\
         Options:\n  \
         --store <PATH>     Store snapshot file (default ~/.robird/store.json)\n  \
         --account <PATH>   Account file (default ~/.robird/account.json)\n  \
         -V, --version      Print version\n  \
         -h, --help         Print this help\n",
        super::VERSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(
            parse_args(args(&["robird", "--version"])).unwrap(),
            CliCommand::Version
        );
        assert_eq!(
            parse_args(args(&["robird", "-V"])).unwrap(),
            CliCommand::Version
        );
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(
            parse_args(args(&["robird", "-h"])).unwrap(),
            CliCommand::Help
        );
    }

    #[test]
    fn test_parse_no_args_runs() {
        assert_eq!(
            parse_args(args(&["robird"])).unwrap(),
            CliCommand::Run(RunOptions::default())
        );
    }

    #[test]
    fn test_parse_paths() {
        let command =
            parse_args(args(&["robird", "--store", "/tmp/s.json", "--account", "a.json"]))
                .unwrap();
        assert_eq!(
            command,
            CliCommand::Run(RunOptions {
                store: Some(PathBuf::from("/tmp/s.json")),
                account: Some(PathBuf::from("a.json")),
            })
        );
    }

    #[test]
    fn test_parse_missing_value() {
        let err = parse_args(args(&["robird", "--store"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingArgument { flag } if flag == "--store"));

        let err = parse_args(args(&["robird", "--account", "--store", "x"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingArgument { flag } if flag == "--account"));
    }

    #[test]
    fn test_unknown_args_ignored() {
        assert_eq!(
            parse_args(args(&["robird", "--verbose"])).unwrap(),
            CliCommand::Run(RunOptions::default())
        );
    }

    #[test]
    fn test_usage_mentions_flags() {
        let text = usage();
        assert!(text.contains("--store"));
        assert!(text.contains("--account"));
    }
}

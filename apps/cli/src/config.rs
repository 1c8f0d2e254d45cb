//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then overridden by command line arguments.
//!
//! | Variable                  | Flag              | Default        |
//! |---------------------------|-------------------|----------------|
//! | `COSTIFY_CATALOG`         | `-c, --catalog`   | `catalog.json` |
//! | `COSTIFY_OUTPUT`          | `-o, --output`    | `text`         |
//! | `RUST_LOG` / `COSTIFY_LOG`| -                 | `warn`         |
//! | `COSTIFY_CURRENCY_SYMBOL` | -                 | `$`            |
//! | -                         | `-r, --recipe`    | all recipes    |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "catalog.json";

/// Default log filter. Keeps stderr quiet unless asked.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(format!("output format '{}'", s))),
        }
    }
}

/// What the user asked the tool to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Price recipes (default).
    Cost,
    /// List the unit registry.
    Units,
    /// List catalog ingredients with their unit cost.
    Ingredients,
}

impl FromStr for Command {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cost" => Ok(Command::Cost),
            "units" => Ok(Command::Units),
            "ingredients" => Ok(Command::Ingredients),
            other => Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub command: Command,

    /// Path of the JSON catalog to load
    pub catalog_path: PathBuf,

    pub output: OutputFormat,

    /// Only price the recipe with this id or name
    pub recipe: Option<String>,

    /// `tracing-subscriber` filter directive
    pub log_filter: String,

    /// Prefix for amounts in text reports
    pub currency_symbol: String,
}

/// Result of argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Run(CliConfig),
    Help,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CliConfig {
            command: Command::Cost,

            catalog_path: lookup("COSTIFY_CATALOG")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH)),

            output: lookup("COSTIFY_OUTPUT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("COSTIFY_OUTPUT".to_string()))
                })
                .transpose()?
                .unwrap_or(OutputFormat::Text),

            recipe: None,

            log_filter: lookup("RUST_LOG")
                .or_else(|| lookup("COSTIFY_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),

            currency_symbol: lookup("COSTIFY_CURRENCY_SYMBOL").unwrap_or_else(|| "$".to_string()),
        };

        Ok(config)
    }

    /// Applies command line arguments (without the program name) on top of
    /// the environment configuration.
    pub fn with_args<I>(mut self, args: I) -> Result<Invocation, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut command_seen = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--catalog" => {
                    self.catalog_path = PathBuf::from(require_value(&arg, args.next())?);
                }
                "-o" | "--output" => {
                    self.output = require_value(&arg, args.next())?.parse()?;
                }
                "-r" | "--recipe" => {
                    self.recipe = Some(require_value(&arg, args.next())?);
                }
                "-h" | "--help" => return Ok(Invocation::Help),
                other if !command_seen && !other.starts_with('-') => {
                    self.command = other.parse()?;
                    command_seen = true;
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        Ok(Invocation::Run(self))
    }
}

fn require_value(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingValue(flag.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.command, Command::Cost);
        assert_eq!(config.catalog_path, PathBuf::from("catalog.json"));
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.recipe, None);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("COSTIFY_CATALOG", "/data/bakery.json"),
            ("COSTIFY_OUTPUT", "JSON"),
            ("RUST_LOG", "debug"),
            ("COSTIFY_CURRENCY_SYMBOL", "R$"),
        ])
        .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/data/bakery.json"));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.currency_symbol, "R$");
    }

    #[test]
    fn test_rust_log_wins_over_costify_log() {
        let config = config_from(&[("RUST_LOG", "debug"), ("COSTIFY_LOG", "trace")]).unwrap();
        assert_eq!(config.log_filter, "debug");

        let config = config_from(&[("COSTIFY_LOG", "trace")]).unwrap();
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_invalid_output_env() {
        assert_eq!(
            config_from(&[("COSTIFY_OUTPUT", "xml")]),
            Err(ConfigError::InvalidValue("COSTIFY_OUTPUT".to_string()))
        );
    }

    #[test]
    fn test_args_override_env() {
        let base = config_from(&[("COSTIFY_CATALOG", "env.json")]).unwrap();
        let invocation = base
            .with_args(args(&["-c", "cli.json", "--output", "json", "-r", "Cake"]))
            .unwrap();

        let Invocation::Run(config) = invocation else {
            panic!("expected run");
        };
        assert_eq!(config.catalog_path, PathBuf::from("cli.json"));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.recipe.as_deref(), Some("Cake"));
    }

    #[test]
    fn test_command_word() {
        let base = config_from(&[]).unwrap();
        let Invocation::Run(config) = base.clone().with_args(args(&["units"])).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(config.command, Command::Units);

        assert_eq!(
            base.with_args(args(&["units", "cost"])),
            Err(ConfigError::UnknownArgument("cost".to_string()))
        );
    }

    #[test]
    fn test_help() {
        let base = config_from(&[]).unwrap();
        assert_eq!(
            base.with_args(args(&["-o", "json", "--help"])),
            Ok(Invocation::Help)
        );
    }

    #[test]
    fn test_missing_flag_value() {
        let base = config_from(&[]).unwrap();
        assert_eq!(
            base.clone().with_args(args(&["--catalog"])),
            Err(ConfigError::MissingValue("--catalog".to_string()))
        );
        assert_eq!(
            base.with_args(args(&["-r", " "])),
            Err(ConfigError::MissingValue("-r".to_string()))
        );
    }

    #[test]
    fn test_unknown_flag() {
        let base = config_from(&[]).unwrap();
        assert_eq!(
            base.with_args(args(&["--verbose"])),
            Err(ConfigError::UnknownArgument("--verbose".to_string()))
        );
    }
}

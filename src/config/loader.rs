//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{UlsError, UlsResult};
use crate::infrastructure::fs::user_config_file;

use super::env_validator::{closest, EnvVarValidator};
use super::types::{Config, OutputFormat, Verbosity};

/// File name of the per-project config
pub const PROJECT_CONFIG_FILE: &str = "ulstools.toml";

/// Non-fatal configuration problem surfaced to CLI users.
///
/// Loading happens before logging is set up, so problems are returned as
/// values and the binary logs them once its subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the config schema does not know about
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// A config file that exists but could not be read or parsed
    SkippedFile { file: PathBuf, message: String },
    /// A `ULSTOOLS_*` value that was ignored
    InvalidEnv { var: String, message: String },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{key}' in {}", file.display())?;
                if let Some(line) = line {
                    write!(f, ":{line}")?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{suggestion}'?)")?;
                }
                Ok(())
            }
            Self::SkippedFile { file, message } => {
                write!(f, "ignoring config file {}: {message}", file.display())
            }
            Self::InvalidEnv { message, .. } => f.write_str(message),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> UlsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| UlsError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: closest(&key, KNOWN_KEYS).map(str::to_string),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first config file that exists and parses wins; a file that fails to
/// parse is skipped with a warning. Env overrides are applied last.
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_file());

    let mut warnings = Vec::new();
    let mut config = Config::default();
    for path in candidates {
        if !path.is_file() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((loaded, unknown_keys)) => {
                config = loaded;
                warnings.extend(unknown_keys);
                break;
            }
            Err(err) => warnings.push(ConfigWarning::SkippedFile {
                message: skipped_reason(&err),
                file: path,
            }),
        }
    }

    let (config, env_warnings) = with_env_overrides(config);
    warnings.extend(env_warnings);
    (config, warnings)
}

fn skipped_reason(err: &UlsError) -> String {
    match err {
        UlsError::ConfigParse { message, .. } => message.trim_end().to_string(),
        other => other.to_string(),
    }
}

/// Apply environment variable overrides (ULSTOOLS_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<ConfigWarning>) {
    with_env_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup` instead of the process environment.
///
/// Invalid values keep the current setting and are reported as warnings.
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> (Config, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(value) = lookup("ULSTOOLS_VERBOSITY") {
        match EnvVarValidator::new("ULSTOOLS_VERBOSITY", Verbosity::NAMES)
            .parse(&value, Verbosity::parse)
        {
            Ok(verbosity) => config.output.verbosity = verbosity,
            Err(warning) => warnings.push(warning),
        }
    }

    if let Some(value) = lookup("ULSTOOLS_FORMAT") {
        match EnvVarValidator::new("ULSTOOLS_FORMAT", OutputFormat::NAMES)
            .parse(&value, OutputFormat::parse)
        {
            Ok(format) => config.output.format = format,
            Err(warning) => warnings.push(warning),
        }
    }

    if let Some(value) = lookup("ULSTOOLS_PROCESS_INTERPRETER") {
        let value = value.trim();
        if !value.is_empty() {
            config.process.interpreter = value.to_string();
        }
    }

    if let Some(value) = lookup("ULSTOOLS_PROCESS_THRESHOLD") {
        match value.trim().parse::<usize>() {
            Ok(threshold) if threshold > 0 => config.process.threshold = threshold,
            _ => warnings.push(ConfigWarning::InvalidEnv {
                var: "ULSTOOLS_PROCESS_THRESHOLD".to_string(),
                message: format!(
                    "invalid ULSTOOLS_PROCESS_THRESHOLD value '{value}'. Expected a positive integer"
                ),
            }),
        }
    }

    (config, warnings)
}

const KNOWN_KEYS: &[&str] = &[
    "output",
    "verbosity",
    "format",
    "process",
    "interpreter",
    "script_suffix",
    "threshold",
];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

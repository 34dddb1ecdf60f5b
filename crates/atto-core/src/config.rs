//! Run configuration.
//!
//! Tolerances and the diagnostic stream are read from the environment:
//! - `ATTO_FLOAT_EQ_ABSTOL`: absolute tolerance of `atto_fapprox!` (default `1e-5`).
//! - `ATTO_DOUBLE_EQ_ABSTOL`: absolute tolerance of `atto_dapprox!` (default `1e-8`).
//! - `ATTO_OUTPUT`: `stderr` (default) or `stdout`.
//!
//! [`Config::from_env`] never fails: unparsable values fall back to the
//! defaults. [`Config::try_from_lookup`] reports them instead.

use thiserror::Error;

/// Default absolute tolerance for single-precision approximate equality.
pub const FLOAT_EQ_ABSTOL: f32 = 1e-5;
/// Default absolute tolerance for double-precision approximate equality.
pub const DOUBLE_EQ_ABSTOL: f64 = 1e-8;

pub const ENV_FLOAT_EQ_ABSTOL: &str = "ATTO_FLOAT_EQ_ABSTOL";
pub const ENV_DOUBLE_EQ_ABSTOL: &str = "ATTO_DOUBLE_EQ_ABSTOL";
pub const ENV_OUTPUT: &str = "ATTO_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a finite, non-negative tolerance")]
    InvalidTolerance { var: &'static str, value: String },
    #[error("{var}: unknown diagnostic stream '{value}' (expected stderr or stdout)")]
    InvalidStream { var: &'static str, value: String },
}

/// Absolute tolerances used by the approximate-equality checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub float_abstol: f32,
    pub double_abstol: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            float_abstol: FLOAT_EQ_ABSTOL,
            double_abstol: DOUBLE_EQ_ABSTOL,
        }
    }
}

/// Where failure and report lines are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticStream {
    #[default]
    Stderr,
    Stdout,
}

impl DiagnosticStream {
    /// Parse from string (case-insensitive). Unknown values map to `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" | "err" | "2" => Some(Self::Stderr),
            "stdout" | "out" | "1" => Some(Self::Stdout),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Config {
    pub tolerances: Tolerances,
    pub stream: DiagnosticStream,
}

impl Config {
    /// Resolve configuration from the process environment, ignoring bad values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lenient resolution through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Tolerances::default();
        Self {
            tolerances: Tolerances {
                float_abstol: lookup(ENV_FLOAT_EQ_ABSTOL)
                    .and_then(|v| parse_tolerance::<f32>(&v))
                    .unwrap_or(defaults.float_abstol),
                double_abstol: lookup(ENV_DOUBLE_EQ_ABSTOL)
                    .and_then(|v| parse_tolerance::<f64>(&v))
                    .unwrap_or(defaults.double_abstol),
            },
            stream: lookup(ENV_OUTPUT)
                .and_then(|v| DiagnosticStream::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Strict resolution: any set-but-invalid variable is an error.
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_FLOAT_EQ_ABSTOL) {
            config.tolerances.float_abstol =
                parse_tolerance(&raw).ok_or(ConfigError::InvalidTolerance {
                    var: ENV_FLOAT_EQ_ABSTOL,
                    value: raw,
                })?;
        }
        if let Some(raw) = lookup(ENV_DOUBLE_EQ_ABSTOL) {
            config.tolerances.double_abstol =
                parse_tolerance(&raw).ok_or(ConfigError::InvalidTolerance {
                    var: ENV_DOUBLE_EQ_ABSTOL,
                    value: raw,
                })?;
        }
        if let Some(raw) = lookup(ENV_OUTPUT) {
            config.stream = DiagnosticStream::parse(&raw).ok_or(ConfigError::InvalidStream {
                var: ENV_OUTPUT,
                value: raw,
            })?;
        }
        Ok(config)
    }
}

fn parse_tolerance<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default + crate::check::AttoFloat,
{
    let value: T = raw.trim().parse().ok()?;
    (value.is_finite() && value >= T::default()).then_some(value)
}

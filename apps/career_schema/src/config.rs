use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "CAREER_SCHEMA_";

/// Opt-in checks stricter than the base output contracts.
///
/// Everything defaults to off: the contracts accept unordered salary bands,
/// non-sequential roadmap steps, empty lists, extra keys and free-form codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// `low <= median <= high` on every salary point.
    pub enforce_salary_order: bool,
    /// Roadmap steps start at 1 and strictly increase.
    pub enforce_step_sequence: bool,
    /// Forecast years strictly increase.
    pub enforce_forecast_chronology: bool,
    /// `career_paths` and `roadmap` must not be empty.
    pub require_non_empty: bool,
    pub deny_unknown_fields: bool,
    /// O*NET-SOC codes must look like `NN-NNNN.NN`.
    pub enforce_onet_code_format: bool,
    /// Matching-interest codes must be RIASEC letters.
    pub enforce_riasec_codes: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self {
            enforce_salary_order: true,
            enforce_step_sequence: true,
            enforce_forecast_chronology: true,
            require_non_empty: true,
            deny_unknown_fields: true,
            enforce_onet_code_format: true,
            enforce_riasec_codes: true,
        }
    }

    /// Reads `CAREER_SCHEMA_*` flags from the process environment (and `.env`).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            enforce_salary_order: flag(&lookup, "ENFORCE_SALARY_ORDER")?,
            enforce_step_sequence: flag(&lookup, "ENFORCE_STEP_SEQUENCE")?,
            enforce_forecast_chronology: flag(&lookup, "ENFORCE_FORECAST_CHRONOLOGY")?,
            require_non_empty: flag(&lookup, "REQUIRE_NON_EMPTY")?,
            deny_unknown_fields: flag(&lookup, "DENY_UNKNOWN_FIELDS")?,
            enforce_onet_code_format: flag(&lookup, "ENFORCE_ONET_CODE_FORMAT")?,
            enforce_riasec_codes: flag(&lookup, "ENFORCE_RIASEC_CODES")?,
        })
    }
}

/// Configuration for hosts embedding the validators.
#[derive(Debug, Clone)]
pub struct Config {
    pub validation: ValidationOptions,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            validation: ValidationOptions::from_env()
                .context("Invalid CAREER_SCHEMA_* validation flag")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn flag<F>(lookup: &F, name: &str) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let key = format!("{ENV_PREFIX}{name}");
    let Some(raw) = lookup(&key) else {
        return Ok(false);
    };
    parse_flag(&raw).with_context(|| format!("Environment variable '{key}' is not a boolean"))
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognised flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_permissive() {
        let opts = ValidationOptions::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(opts, ValidationOptions::default());
        assert!(!opts.enforce_salary_order);
        assert!(!opts.deny_unknown_fields);
    }

    #[test]
    fn test_flags_parse_common_spellings() {
        let opts = ValidationOptions::from_lookup(lookup_from(&[
            ("CAREER_SCHEMA_ENFORCE_SALARY_ORDER", "true"),
            ("CAREER_SCHEMA_ENFORCE_STEP_SEQUENCE", "1"),
            ("CAREER_SCHEMA_REQUIRE_NON_EMPTY", "YES"),
            ("CAREER_SCHEMA_DENY_UNKNOWN_FIELDS", " on "),
            ("CAREER_SCHEMA_ENFORCE_RIASEC_CODES", "off"),
        ]))
        .unwrap();
        assert!(opts.enforce_salary_order);
        assert!(opts.enforce_step_sequence);
        assert!(opts.require_non_empty);
        assert!(opts.deny_unknown_fields);
        assert!(!opts.enforce_riasec_codes);
        assert!(!opts.enforce_forecast_chronology);
    }

    #[test]
    fn test_malformed_flag_names_the_variable() {
        let err = ValidationOptions::from_lookup(lookup_from(&[(
            "CAREER_SCHEMA_ENFORCE_ONET_CODE_FORMAT",
            "sometimes",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("CAREER_SCHEMA_ENFORCE_ONET_CODE_FORMAT"));
    }

    #[test]
    fn test_strict_enables_everything() {
        let strict = ValidationOptions::strict();
        assert!(strict.enforce_salary_order);
        assert!(strict.enforce_step_sequence);
        assert!(strict.enforce_forecast_chronology);
        assert!(strict.require_non_empty);
        assert!(strict.deny_unknown_fields);
        assert!(strict.enforce_onet_code_format);
        assert!(strict.enforce_riasec_codes);
    }
}

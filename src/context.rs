//! The per-run context record shared by every pipeline action.
//!
//! A [`Context`] starts life in [`Context::build`], which normalizes the raw
//! day token and merges the env file's key/values. The fetch action later adds
//! the puzzle `input`. Everything else only reads it.
//!
//! Values are stored as JSON values so that `day_raw` stays an integer while
//! env-provided keys stay strings.

use crate::error::{Result, ScaffoldError};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Zero-padded day, e.g. `"03"`.
pub const DAY: &str = "day";

/// Unpadded day number, e.g. `3`.
pub const DAY_RAW: &str = "day_raw";

/// Puzzle year, merged from the env file.
pub const YEAR: &str = "year";

/// Session credential, merged from the env file.
pub const SESSION: &str = "session";

/// Puzzle input text, set by the fetch action.
pub const INPUT: &str = "input";

/// Minimum width of the padded day.
const DAY_WIDTH: usize = 2;

/// Mutable key/value record threaded through one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: Map<String, Value>,
}

impl Context {
    /// Build a context from a raw day token and externally loaded settings.
    ///
    /// Env values are merged verbatim. The computed `day` and `day_raw` are
    /// inserted last so they win over env keys of the same name.
    ///
    /// # Errors
    ///
    /// * `ScaffoldError::InvalidInput` - the token is not a non-negative integer
    pub fn build(raw_day: &str, env: &BTreeMap<String, String>) -> Result<Self> {
        let day_raw = parse_day(raw_day)?;

        let mut values = Map::new();
        for (key, value) in env {
            values.insert(key.clone(), Value::String(value.clone()));
        }
        values.insert(DAY.to_string(), Value::String(pad_day(day_raw)));
        values.insert(DAY_RAW.to_string(), Value::from(day_raw));

        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The string form of a value as substituted into templates.
    ///
    /// Strings render verbatim, numbers and booleans by their display form,
    /// and `null` is treated as absent.
    pub fn get_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn day(&self) -> &str {
        self.values
            .get(DAY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn day_raw(&self) -> u64 {
        self.values
            .get(DAY_RAW)
            .and_then(Value::as_u64)
            .unwrap_or_default()
    }

    pub fn year(&self) -> Option<String> {
        self.get_text(YEAR)
    }

    pub fn credential(&self) -> Option<&str> {
        self.values.get(SESSION).and_then(Value::as_str)
    }

    pub fn input(&self) -> Option<&str> {
        self.values.get(INPUT).and_then(Value::as_str)
    }

    /// Record the downloaded puzzle text.
    pub fn set_input(&mut self, text: String) {
        self.insert(INPUT, text);
    }

    /// Key names currently present, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Parse a day token into its numeric value.
///
/// Surrounding whitespace is ignored; anything that is not a non-negative
/// integer is rejected.
pub fn parse_day(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ScaffoldError::InvalidInput(raw.to_string()));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| ScaffoldError::InvalidInput(raw.to_string()))
}

/// Left-pad a day number with zeros to a width of two.
///
/// The width is a minimum; `100` renders as `"100"`.
pub fn pad_day(day: u64) -> String {
    format!("{:0width$}", day, width = DAY_WIDTH)
}

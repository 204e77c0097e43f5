//! Raw command-line flag parsing.
//!
//! Tokens are split into two maps: `--long` flags and `-s` short flags. A flag
//! either carries a text value (`--key=value` or `--key value`) or is a bare
//! switch. Tokens that are not flags are ignored.

use std::collections::HashMap;

use crate::core::schema::{OptionSpec, ValueKind};
use crate::error::{InstallerError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Text(String),
    Switch,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub long: HashMap<String, FlagValue>,
    pub short: HashMap<String, FlagValue>,
}

impl ParsedArgs {
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let mut parsed = ParsedArgs::default();

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            let (map, key) = if let Some(key) = token.strip_prefix("--") {
                (&mut parsed.long, key)
            } else if let Some(key) = token.strip_prefix('-') {
                (&mut parsed.short, key)
            } else {
                i += 1;
                continue;
            };

            if let Some((name, value)) = key.split_once('=') {
                map.insert(name.to_string(), FlagValue::Text(value.to_string()));
            } else if let Some(next) = tokens.get(i + 1).filter(|n| takes_as_value(n)) {
                map.insert(key.to_string(), FlagValue::Text(next.clone()));
                i += 1;
            } else {
                map.insert(key.to_string(), FlagValue::Switch);
            }

            i += 1;
        }

        parsed
    }

    /// Long spelling first, then short. Empty text values count as absent.
    pub fn lookup(&self, spec: &OptionSpec) -> Option<&FlagValue> {
        let long = self.long.get(spec.long).filter(|v| is_present(v));
        long.or_else(|| {
            spec.short
                .and_then(|short| self.short.get(short))
                .filter(|v| is_present(v))
        })
    }

    pub fn is_set(&self, spec: &OptionSpec) -> bool {
        self.lookup(spec).is_some()
    }

    /// Text value of an option. A bare switch where text is expected is an error.
    pub fn text(&self, spec: &OptionSpec) -> Result<Option<&str>> {
        debug_assert_eq!(spec.kind, ValueKind::Text);
        match self.lookup(spec) {
            Some(FlagValue::Text(value)) => Ok(Some(value.as_str())),
            Some(FlagValue::Switch) => Err(InstallerError::invalid_argument(spec.name(), "true")),
            None => Ok(None),
        }
    }
}

fn takes_as_value(token: &str) -> bool {
    !token.is_empty() && !token.starts_with('-')
}

fn is_present(value: &FlagValue) -> bool {
    match value {
        FlagValue::Text(text) => !text.is_empty(),
        FlagValue::Switch => true,
    }
}

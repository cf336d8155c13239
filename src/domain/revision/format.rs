// src/domain/revision/format.rs
//! Per-field display rules such as `boolean:No|Yes` or `string:Min: %s`.
use chrono::{
    DateTime, NaiveDate, NaiveDateTime,
    format::{Item, StrftimeItems},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Write as _};

const PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFormat {
    Boolean(Vec<String>),
    String(String),
    IsEmpty(Vec<String>),
    Options(Vec<(String, String)>),
    DateTime(String),
    Unknown(String),
}

impl FieldFormat {
    /// Parse a `kind:options` rule. Only the first `:` separates kind from options.
    pub fn parse(rule: &str) -> Self {
        let (kind, options) = rule.split_once(':').unwrap_or((rule, ""));
        match kind {
            "boolean" => FieldFormat::Boolean(split_options(options)),
            "string" => FieldFormat::String(options.to_string()),
            "isEmpty" => FieldFormat::IsEmpty(split_options(options)),
            "options" => FieldFormat::Options(
                options
                    .split('|')
                    .filter_map(|pair| pair.split_once('.'))
                    .map(|(raw, label)| (raw.to_string(), label.to_string()))
                    .collect(),
            ),
            "datetime" => FieldFormat::DateTime(options.to_string()),
            other => FieldFormat::Unknown(other.to_string()),
        }
    }

    pub fn apply(&self, value: Option<&str>) -> Option<String> {
        match self {
            FieldFormat::Boolean(options) => match options.as_slice() {
                [falsy, truthy] => {
                    let picked = if is_truthy(value) { truthy } else { falsy };
                    Some(picked.clone())
                }
                _ => value.map(str::to_string),
            },
            FieldFormat::String(template) => {
                value.map(|v| template.replacen(PLACEHOLDER, v, 1))
            }
            FieldFormat::IsEmpty(options) => match options.as_slice() {
                [empty, filled] => {
                    let is_set = value.is_some_and(|v| !v.is_empty());
                    let template = if is_set { filled } else { empty };
                    Some(template.replacen(PLACEHOLDER, value.unwrap_or_default(), 1))
                }
                _ => value.map(str::to_string),
            },
            FieldFormat::Options(pairs) => value.map(|v| {
                pairs
                    .iter()
                    .find(|(raw, _)| raw == v)
                    .map(|(_, label)| label.clone())
                    .unwrap_or_else(|| v.to_string())
            }),
            FieldFormat::DateTime(pattern) => value.map(|v| format_datetime(v, pattern)),
            FieldFormat::Unknown(_) => value.map(str::to_string),
        }
    }
}

fn split_options(options: &str) -> Vec<String> {
    options.split('|').map(str::to_string).collect()
}

fn is_truthy(value: Option<&str>) -> bool {
    !matches!(value, None | Some("") | Some("0") | Some("false"))
}

fn format_datetime(value: &str, pattern: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return value.to_string();
    }

    // Offset specifiers (`%z`) only render for zoned input; naive input then
    // fails to format and the stored value is kept.
    let mut out = String::new();
    let written = if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
        write!(out, "{}", zoned.format_with_items(items.iter()))
    } else if let Some(naive) = parse_naive(value) {
        write!(out, "{}", naive.format_with_items(items.iter()))
    } else {
        return value.to_string();
    };

    match written {
        Ok(()) => out,
        Err(_) => value.to_string(),
    }
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Formatting rules keyed by field key, attached to a model definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattedFields(HashMap<String, String>);

impl FormattedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, rule: impl Into<String>) {
        self.0.insert(key.into(), rule.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply the rule registered for `key`, or return the value untouched.
    pub fn apply(&self, key: &str, value: Option<String>) -> Option<String> {
        match self.0.get(key) {
            Some(rule) => FieldFormat::parse(rule).apply(value.as_deref()),
            None => value,
        }
    }
}

use crate::validation::RECORD_KEY;
use crate::{FieldErrors, ValidationMode, parse_due_date};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Shape of a free-text field
pub(crate) struct TextRule {
    pub field: &'static str,
    pub label: &'static str,
    pub required_on_create: bool,
    pub max_chars: usize,
}

/// Shape of a closed-set field
pub(crate) struct ChoiceRule {
    pub field: &'static str,
    pub label: &'static str,
    pub required_on_create: bool,
    pub allowed: &'static [&'static str],
}

/// Walks one JSON object, collecting every field error instead of stopping at the first.
///
/// Readers return `None` both for absent fields and for fields that failed;
/// callers must consult [`FieldReader::into_errors`] before trusting the values.
pub(crate) struct FieldReader<'a> {
    record: &'a Map<String, Value>,
    mode: ValidationMode,
    errors: FieldErrors,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(record: &'a Value, mode: ValidationMode) -> Result<Self, FieldErrors> {
        match record {
            Value::Object(record) => Ok(Self {
                record,
                mode,
                errors: FieldErrors::new(),
            }),
            _ => Err(FieldErrors::single(
                RECORD_KEY,
                "Request body must be a JSON object.",
            )),
        }
    }

    pub(crate) fn into_errors(self) -> FieldErrors {
        self.errors
    }

    fn required(&self, required_on_create: bool) -> bool {
        required_on_create && self.mode == ValidationMode::Create
    }

    /// Non-nullable text: a value must be a non-empty string within the length limit
    pub(crate) fn text(&mut self, rule: &TextRule) -> Option<String> {
        match self.record.get(rule.field) {
            None => {
                if self.required(rule.required_on_create) {
                    self.errors
                        .add(rule.field, format!("{} is required.", rule.label));
                }
                None
            }
            Some(Value::Null) if self.required(rule.required_on_create) => {
                self.errors
                    .add(rule.field, format!("{} is required.", rule.label));
                None
            }
            Some(value) => self.string_value(rule, value),
        }
    }

    /// Nullable text: `Some(None)` means an explicit null
    pub(crate) fn nullable_text(&mut self, rule: &TextRule) -> Option<Option<String>> {
        match self.record.get(rule.field) {
            None => None,
            Some(Value::Null) => Some(None),
            Some(value) => self.string_value(rule, value).map(Some),
        }
    }

    fn string_value(&mut self, rule: &TextRule, value: &Value) -> Option<String> {
        let Value::String(text) = value else {
            self.errors
                .add(rule.field, format!("{} must be a string.", rule.label));
            return None;
        };

        if text.is_empty() {
            self.errors
                .add(rule.field, format!("{} is required.", rule.label));
            return None;
        }

        if text.chars().count() > rule.max_chars {
            self.errors.add(
                rule.field,
                format!(
                    "{} must be at most {} characters.",
                    rule.label, rule.max_chars
                ),
            );
            return None;
        }

        Some(text.clone())
    }

    /// Closed-set field, matched case-sensitively
    pub(crate) fn choice<T: FromStr>(&mut self, rule: &ChoiceRule) -> Option<T> {
        let value = match self.record.get(rule.field) {
            None => {
                if self.required(rule.required_on_create) {
                    self.errors
                        .add(rule.field, format!("{} is required.", rule.label));
                }
                return None;
            }
            Some(Value::Null) if self.required(rule.required_on_create) => {
                self.errors
                    .add(rule.field, format!("{} is required.", rule.label));
                return None;
            }
            Some(value) => value,
        };

        let parsed = value.as_str().and_then(|text| T::from_str(text).ok());
        if parsed.is_none() {
            self.errors.add(
                rule.field,
                format!(
                    "{} must be one of: {}.",
                    rule.label,
                    rule.allowed.join(", ")
                ),
            );
        }
        parsed
    }

    /// Nullable date
    pub(crate) fn date(&mut self, field: &'static str) -> Option<Option<DateTime<Utc>>> {
        match self.record.get(field) {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::String(text)) => match parse_due_date(text) {
                Ok(parsed) => Some(Some(parsed)),
                Err(_) => {
                    self.errors.add(field, "Invalid date format.");
                    None
                }
            },
            Some(_) => {
                self.errors.add(field, "Invalid date format.");
                None
            }
        }
    }

    /// Nullable UUID reference
    pub(crate) fn uuid(&mut self, field: &'static str, label: &'static str) -> Option<Option<Uuid>> {
        match self.record.get(field) {
            None => None,
            Some(Value::Null) => Some(None),
            Some(value) => {
                let parsed = value.as_str().and_then(|text| Uuid::parse_str(text).ok());
                match parsed {
                    Some(id) => Some(Some(id)),
                    None => {
                        self.errors
                            .add(field, format!("{label} must be a valid id."));
                        None
                    }
                }
            }
        }
    }
}

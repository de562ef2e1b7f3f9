use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// The kind of rule a field value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Length,
    Range,
    Format,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Required => "required",
            Rule::Length => "length",
            Rule::Range => "range",
            Rule::Format => "format",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

/// Every violation found while checking one submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field violation(s)", .0.len())]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, rule: Rule, message: impl Into<String>) {
        self.0.push(Violation { field, rule, message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn for_field(&self, field: &str) -> impl Iterator<Item = &Violation> + '_ {
        let field = field.to_string();
        self.0.iter().filter(move |v| v.field == field)
    }

    pub fn has(&self, field: &str, rule: Rule) -> bool {
        self.0.iter().any(|v| v.field == field && v.rule == rule)
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Violations> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Required text field. Returns `false` when the value was rejected.
pub fn check_required(
    violations: &mut Violations,
    field: &'static str,
    label: &str,
    value: &str,
) -> bool {
    if is_blank(value) {
        violations.push(field, Rule::Required, format!("The {} field is required.", label));
        return false;
    }
    true
}

/// Required text field whose length (in characters) must fall in `min..=max`.
pub fn check_length(
    violations: &mut Violations,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) -> bool {
    if !check_required(violations, field, label, value) {
        return false;
    }
    let len = value.chars().count();
    if len < min || len > max {
        violations.push(
            field,
            Rule::Length,
            format!("The {} field must be between {} and {} characters long.", label, min, max),
        );
        return false;
    }
    true
}

/// Required integer field given as form text, bounded to `min..=max`.
pub fn check_range(
    violations: &mut Violations,
    field: &'static str,
    label: &str,
    value: &str,
    min: i32,
    max: i32,
) -> Option<i32> {
    if !check_required(violations, field, label, value) {
        return None;
    }
    let parsed = match value.trim().parse::<i32>() {
        Ok(n) => n,
        Err(_) => {
            violations.push(field, Rule::Format, format!("The {} field must be a whole number.", label));
            return None;
        }
    };
    if parsed < min || parsed > max {
        violations.push(
            field,
            Rule::Range,
            format!("The {} field must be between {} and {}.", label, min, max),
        );
        return None;
    }
    Some(parsed)
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| {
        Regex::new(r"(?i)^\+?[0-9\-.()\s]*[0-9][0-9\-.()\s]*(\s*(x|ext\.?|extension)\s*[0-9]+)?$")
            .expect("phone pattern is valid")
    })
}

pub fn check_email(violations: &mut Violations, field: &'static str, label: &str, value: &str) -> bool {
    if !check_required(violations, field, label, value) {
        return false;
    }
    if !email_regex().is_match(value) {
        violations.push(field, Rule::Format, format!("The {} field is not a valid e-mail address.", label));
        return false;
    }
    true
}

pub fn check_phone(violations: &mut Violations, field: &'static str, label: &str, value: &str) -> bool {
    if !check_required(violations, field, label, value) {
        return false;
    }
    if !phone_regex().is_match(value.trim()) {
        violations.push(field, Rule::Format, format!("The {} field is not a valid phone number.", label));
        return false;
    }
    true
}

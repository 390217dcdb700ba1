use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Longest string echoed back in `Violation::received`.
const MAX_RECEIVED_CHARS: usize = 120;

/// What went wrong at a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    MissingRequired,
    TypeMismatch,
    OutOfRange,
    NotInEnumeration,
    MalformedOptional,
    // Only produced when the matching `ValidationOptions` flag is on.
    OrderingViolated,
    EmptySequence,
    UnknownField,
    PatternMismatch,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingRequired => "missing-required",
            ViolationKind::TypeMismatch => "type-mismatch",
            ViolationKind::OutOfRange => "out-of-range",
            ViolationKind::NotInEnumeration => "not-in-enumeration",
            ViolationKind::MalformedOptional => "malformed-optional",
            ViolationKind::OrderingViolated => "ordering-violated",
            ViolationKind::EmptySequence => "empty-sequence",
            ViolationKind::UnknownField => "unknown-field",
            ViolationKind::PatternMismatch => "pattern-mismatch",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single constraint failure, addressed by its dotted field path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
    pub expected: String,
    /// JSON type of the received value, or `missing`.
    pub found: &'static str,
    /// Raw received value. Only scalars are echoed.
    pub received: Option<Value>,
}

impl Violation {
    pub fn new(
        path: impl Into<String>,
        kind: ViolationKind,
        expected: impl Into<String>,
        received: Option<&Value>,
    ) -> Self {
        Self {
            path: path.into(),
            kind,
            expected: expected.into(),
            found: received.map(json_type_name).unwrap_or("missing"),
            received: received.and_then(echo_scalar),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (expected {}", self.path, self.kind, self.expected)?;
        match &self.received {
            Some(value) => write!(f, ", received {value})"),
            None => write!(f, ", found {})", self.found),
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn echo_scalar(value: &Value) -> Option<Value> {
    match value {
        Value::Array(_) | Value::Object(_) => None,
        Value::String(s) if s.chars().count() > MAX_RECEIVED_CHARS => {
            let truncated: String = s.chars().take(MAX_RECEIVED_CHARS).collect();
            Some(Value::String(format!("{truncated}...")))
        }
        other => Some(other.clone()),
    }
}

/// Returned when a value does not conform to an output contract.
/// Never carries a partially built record.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error(
    "{schema} failed validation with {} violation(s): {}",
    .violations.len(),
    summarize(.violations)
)]
pub struct SchemaValidationError {
    pub schema: &'static str,
    pub violations: Vec<Violation>,
}

impl SchemaValidationError {
    pub fn new(schema: &'static str, violations: Vec<Violation>) -> Self {
        Self { schema, violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations recorded at exactly `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.path == path)
    }

    pub fn has(&self, path: &str, kind: ViolationKind) -> bool {
        self.at(path).any(|v| v.kind == kind)
    }

    /// One violation per line, for handing back to whoever re-prompts the model.
    pub fn report(&self) -> String {
        let mut out = format!("The {} output did not match its schema:\n", self.schema);
        for violation in &self.violations {
            out.push_str("- ");
            out.push_str(&violation.to_string());
            out.push('\n');
        }
        out
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure to turn model-generated text into a validated contract.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upstream error ({error_type}): {message}")]
    Upstream { error_type: String, message: String },

    #[error(transparent)]
    Validation(#[from] SchemaValidationError),
}

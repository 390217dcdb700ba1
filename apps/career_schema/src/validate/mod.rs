//! Validation machinery shared by every output contract.
//!
//! A record is built from an untyped `serde_json::Value` by its `Validate` impl.
//! Each impl reads *all* of its fields before combining them, so a single pass
//! over the tree collects every violation instead of stopping at the first one.
//! The `Validator` is created per call and never shared.

mod fields;
mod path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ValidationOptions;
use crate::error::{SchemaValidationError, Violation, ViolationKind};

pub use fields::{is_onet_soc_code, Fields};
pub use path::FieldPath;

/// A record (or scalar) that can be built from an untyped value.
pub trait Validate: Sized {
    /// What the value must look like, used in violation messages.
    const EXPECTED: &'static str = "object";

    /// Whether `value` has the right JSON shape, before any field checks.
    fn has_shape(value: &Value) -> bool {
        value.is_object()
    }

    /// Builds the record, recording every violation in `cx`.
    /// Returns `None` when anything below `path` failed.
    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self>;
}

/// A closed enumeration. Values outside `MEMBERS` are rejected, never defaulted.
pub trait ClosedSet: Sized + Copy + 'static {
    const MEMBERS: &'static [Self];

    /// The exact wire string.
    fn as_str(&self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.as_str() == raw)
    }

    fn expected() -> String {
        let members: Vec<&str> = Self::MEMBERS.iter().map(|m| m.as_str()).collect();
        format!("one of [{}]", members.join(", "))
    }
}

/// Declares a closed enumeration with its wire strings and wires it into
/// `ClosedSet`, `Validate`, `Display`, serde and schemars.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, schemars::JsonSchema,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $crate::validate::ClosedSet for $name {
            const MEMBERS: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl $crate::validate::Validate for $name {
            const EXPECTED: &'static str = "string";

            fn has_shape(value: &serde_json::Value) -> bool {
                value.is_string()
            }

            fn from_value(
                value: &serde_json::Value,
                path: &$crate::validate::FieldPath,
                cx: &mut $crate::validate::Validator<'_>,
            ) -> Option<Self> {
                cx.closed_set(value, path)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::validate::ClosedSet::as_str(self))
            }
        }
    };
}

pub(crate) use closed_set;

impl Validate for String {
    const EXPECTED: &'static str = "string";

    fn has_shape(value: &Value) -> bool {
        value.is_string()
    }

    fn from_value(value: &Value, path: &FieldPath, cx: &mut Validator<'_>) -> Option<Self> {
        match value.as_str() {
            Some(s) => Some(s.to_owned()),
            None => {
                cx.report(path, ViolationKind::TypeMismatch, "string", Some(value));
                None
            }
        }
    }
}

/// Per-call violation collector.
pub struct Validator<'o> {
    options: &'o ValidationOptions,
    violations: Vec<Violation>,
}

impl<'o> Validator<'o> {
    pub fn new(options: &'o ValidationOptions) -> Self {
        Self {
            options,
            violations: Vec::new(),
        }
    }

    pub fn options(&self) -> &'o ValidationOptions {
        self.options
    }

    pub fn report(
        &mut self,
        path: &FieldPath,
        kind: ViolationKind,
        expected: impl Into<String>,
        received: Option<&Value>,
    ) {
        self.violations
            .push(Violation::new(path.to_string(), kind, expected, received));
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Opens `value` as an object and hands its fields to `build`.
    /// Unknown keys are reported afterwards when `deny_unknown_fields` is on.
    pub fn object<'v, T, F>(&mut self, value: &'v Value, path: &FieldPath, build: F) -> Option<T>
    where
        F: FnOnce(&mut Fields<'_, 'v, 'o>) -> Option<T>,
    {
        let Some(map) = value.as_object() else {
            self.report(path, ViolationKind::TypeMismatch, "object", Some(value));
            return None;
        };
        let mut fields = Fields::new(self, map, path.clone());
        let built = build(&mut fields);
        fields.reject_unknown();
        built
    }

    pub fn list<T: Validate>(&mut self, value: &Value, path: &FieldPath) -> Option<Vec<T>> {
        let Some(items) = value.as_array() else {
            self.report(path, ViolationKind::TypeMismatch, "array", Some(value));
            return None;
        };
        let mut out = Vec::with_capacity(items.len());
        let mut complete = true;
        for (i, item) in items.iter().enumerate() {
            match T::from_value(item, &path.index(i), self) {
                Some(record) => out.push(record),
                None => complete = false,
            }
        }
        complete.then_some(out)
    }

    pub fn integer(&mut self, value: &Value, path: &FieldPath) -> Option<i64> {
        if let Some(n) = value.as_i64() {
            return Some(n);
        }
        if value.is_u64() {
            self.report(path, ViolationKind::OutOfRange, "64-bit signed integer", Some(value));
        } else {
            self.report(path, ViolationKind::TypeMismatch, "integer", Some(value));
        }
        None
    }

    pub fn number(&mut self, value: &Value, path: &FieldPath) -> Option<f64> {
        match value.as_f64() {
            Some(n) => Some(n),
            None => {
                self.report(path, ViolationKind::TypeMismatch, "number", Some(value));
                None
            }
        }
    }

    pub fn closed_set<E: ClosedSet>(&mut self, value: &Value, path: &FieldPath) -> Option<E> {
        let Some(raw) = value.as_str() else {
            self.report(path, ViolationKind::TypeMismatch, E::expected(), Some(value));
            return None;
        };
        let parsed = E::parse(raw);
        if parsed.is_none() {
            self.report(path, ViolationKind::NotInEnumeration, E::expected(), Some(value));
        }
        parsed
    }
}

/// Validates a whole payload as root record `T`.
///
/// Either every constraint holds and the record is returned, or the complete
/// list of violations is.
pub fn validate_root<T: Validate>(
    schema: &'static str,
    value: &Value,
    options: &ValidationOptions,
) -> Result<T, SchemaValidationError> {
    let mut cx = Validator::new(options);
    let built = T::from_value(value, &FieldPath::root(), &mut cx);
    let violations = cx.into_violations();

    match built {
        Some(record) if violations.is_empty() => {
            debug!(schema, "payload accepted");
            Ok(record)
        }
        _ => {
            warn!(
                schema,
                violations = violations.len(),
                "payload rejected: {}",
                violations
                    .first()
                    .map(ToString::to_string)
                    .unwrap_or_default()
            );
            Err(SchemaValidationError::new(schema, violations))
        }
    }
}

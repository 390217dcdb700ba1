use std::ops::RangeInclusive;

use serde_json::{Map, Value};

use super::{ClosedSet, FieldPath, Validate, Validator};
use crate::config::ValidationOptions;
use crate::error::ViolationKind;

const ONET_CODE_PATTERN: &str = "O*NET-SOC code formatted NN-NNNN.NN";

/// Reader over one JSON object. Every key read is remembered so unknown keys
/// can be reported once the record is built.
pub struct Fields<'c, 'v, 'o> {
    cx: &'c mut Validator<'o>,
    map: &'v Map<String, Value>,
    path: FieldPath,
    seen: Vec<&'static str>,
}

impl<'c, 'v, 'o> Fields<'c, 'v, 'o> {
    pub(super) fn new(cx: &'c mut Validator<'o>, map: &'v Map<String, Value>, path: FieldPath) -> Self {
        Self {
            cx,
            map,
            path,
            seen: Vec::with_capacity(map.len()),
        }
    }

    pub fn options(&self) -> &'o ValidationOptions {
        self.cx.options()
    }

    pub fn child(&self, key: &str) -> FieldPath {
        self.path.key(key)
    }

    pub fn report(
        &mut self,
        path: &FieldPath,
        kind: ViolationKind,
        expected: impl Into<String>,
        received: Option<&Value>,
    ) {
        self.cx.report(path, kind, expected, received);
    }

    fn get(&mut self, key: &'static str) -> Option<&'v Value> {
        self.seen.push(key);
        self.map.get(key)
    }

    fn require(&mut self, key: &'static str, expected: &str) -> Option<(&'v Value, FieldPath)> {
        let path = self.child(key);
        match self.get(key) {
            Some(value) => Some((value, path)),
            None => {
                self.cx
                    .report(&path, ViolationKind::MissingRequired, expected, None);
                None
            }
        }
    }

    pub fn record<T: Validate>(&mut self, key: &'static str) -> Option<T> {
        let (value, path) = self.require(key, T::EXPECTED)?;
        T::from_value(value, &path, self.cx)
    }

    pub fn string(&mut self, key: &'static str) -> Option<String> {
        self.record(key)
    }

    pub fn enumerated<E: ClosedSet + Validate>(&mut self, key: &'static str) -> Option<E> {
        self.record(key)
    }

    pub fn integer(&mut self, key: &'static str) -> Option<i64> {
        let (value, path) = self.require(key, "integer")?;
        self.cx.integer(value, &path)
    }

    pub fn int_in(&mut self, key: &'static str, range: RangeInclusive<i64>) -> Option<i64> {
        let expected = format!("integer in [{}, {}]", range.start(), range.end());
        let (value, path) = self.require(key, &expected)?;
        let n = self.cx.integer(value, &path)?;
        if range.contains(&n) {
            Some(n)
        } else {
            self.cx
                .report(&path, ViolationKind::OutOfRange, expected, Some(value));
            None
        }
    }

    /// Integer on the 1–5 scale used throughout the contracts.
    pub fn rating(&mut self, key: &'static str) -> Option<u8> {
        self.int_in(key, 1..=5).and_then(|n| u8::try_from(n).ok())
    }

    pub fn number_in(&mut self, key: &'static str, min: f64, max: f64) -> Option<f64> {
        let expected = format!("number in [{min:?}, {max:?}]");
        let (value, path) = self.require(key, &expected)?;
        let n = self.cx.number(value, &path)?;
        if (min..=max).contains(&n) {
            Some(n)
        } else {
            self.cx
                .report(&path, ViolationKind::OutOfRange, expected, Some(value));
            None
        }
    }

    pub fn list<T: Validate>(&mut self, key: &'static str) -> Option<Vec<T>> {
        let (value, path) = self.require(key, "array")?;
        self.cx.list(value, &path)
    }

    /// Absent or `null` is `Some(None)`; a value of the wrong shape is a
    /// `malformed-optional` violation.
    pub fn optional<T: Validate>(&mut self, key: &'static str) -> Option<Option<T>> {
        let path = self.child(key);
        match self.get(key) {
            None | Some(Value::Null) => Some(None),
            Some(value) if !T::has_shape(value) => {
                self.cx.report(
                    &path,
                    ViolationKind::MalformedOptional,
                    format!("{} or null", T::EXPECTED),
                    Some(value),
                );
                None
            }
            Some(value) => T::from_value(value, &path, self.cx).map(Some),
        }
    }

    pub fn onet_code(&mut self, key: &'static str) -> Option<String> {
        let code = self.string(key)?;
        self.check_onet_code(key, &code);
        Some(code)
    }

    pub fn optional_onet_code(&mut self, key: &'static str) -> Option<Option<String>> {
        let code = self.optional::<String>(key)?;
        if let Some(code) = &code {
            self.check_onet_code(key, code);
        }
        Some(code)
    }

    fn check_onet_code(&mut self, key: &str, code: &str) {
        if self.options().enforce_onet_code_format && !is_onet_soc_code(code) {
            let path = self.child(key);
            let received = Value::String(code.to_string());
            self.cx.report(
                &path,
                ViolationKind::PatternMismatch,
                ONET_CODE_PATTERN,
                Some(&received),
            );
        }
    }

    /// Reports an empty list when `require_non_empty` is on.
    pub fn non_empty<T>(&mut self, key: &str, items: Option<&[T]>) {
        if !self.options().require_non_empty {
            return;
        }
        if items.is_some_and(|items| items.is_empty()) {
            let path = self.child(key);
            self.cx.report(
                &path,
                ViolationKind::EmptySequence,
                "at least one item",
                Some(&Value::Array(Vec::new())),
            );
        }
    }

    /// Reports `list_key.N.item_key` wherever a value does not strictly exceed
    /// its predecessor (or, with `first`, where the first value differs).
    pub fn strictly_increasing(
        &mut self,
        list_key: &str,
        item_key: &str,
        values: &[i64],
        first: Option<i64>,
    ) {
        let mut previous: Option<i64> = None;
        for (i, &value) in values.iter().enumerate() {
            let expected = match (previous, first) {
                (None, Some(start)) if value != start => Some(format!("{start}")),
                (Some(prev), _) if value <= prev => Some(format!("greater than {prev}")),
                _ => None,
            };
            if let Some(expected) = expected {
                let path = self.child(list_key).index(i).key(item_key);
                self.cx.report(
                    &path,
                    ViolationKind::OrderingViolated,
                    expected,
                    Some(&Value::from(value)),
                );
            }
            previous = Some(value);
        }
    }

    pub(super) fn reject_unknown(&mut self) {
        if !self.options().deny_unknown_fields {
            return;
        }
        for (key, value) in self.map {
            if !self.seen.iter().any(|seen| *seen == key.as_str()) {
                let path = self.path.key(key);
                self.cx.report(
                    &path,
                    ViolationKind::UnknownField,
                    "no fields outside the contract",
                    Some(value),
                );
            }
        }
    }
}

/// `NN-NNNN.NN`, e.g. `27-2011.00`.
pub fn is_onet_soc_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 => *b == b'-',
            7 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onet_code_format() {
        assert!(is_onet_soc_code("27-2011.00"));
        assert!(is_onet_soc_code("15-1252.01"));
        assert!(!is_onet_soc_code("27-2011"));
        assert!(!is_onet_soc_code("272011.00"));
        assert!(!is_onet_soc_code("27_2011.00"));
        assert!(!is_onet_soc_code("2a-2011.00"));
        assert!(!is_onet_soc_code(""));
    }

    #[test]
    fn test_strictly_increasing_reports_each_offender() {
        let options = ValidationOptions::default();
        let mut cx = Validator::new(&options);
        let map = Map::new();
        let mut fields = Fields::new(&mut cx, &map, FieldPath::root());
        fields.strictly_increasing("roadmap", "step", &[2, 3, 3, 1], Some(1));

        let paths: Vec<_> = cx.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["roadmap.0.step", "roadmap.2.step", "roadmap.3.step"]);
    }

    #[test]
    fn test_strictly_increasing_accepts_sequence() {
        let options = ValidationOptions::default();
        let mut cx = Validator::new(&options);
        let map = Map::new();
        let mut fields = Fields::new(&mut cx, &map, FieldPath::root());
        fields.strictly_increasing("projected_growth", "year", &[2025, 2027, 2030], None);
        assert!(cx.violations().is_empty());
    }
}
